use std::time::Duration;

use futures::channel::oneshot;
use threadline_client::{
    api::Comment,
    fetch_remote,
    view::{self, Target},
    CommentStore, Config, Forest, NotificationKind, Notifier, ReplyFocus,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api::FeedSource, storage::BrowserStorage, ui, util};

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

pub enum AppMsg {
    FeedLoaded(anyhow::Result<Vec<Comment>>),

    Activate(Target),
    SendReply(Target, String),

    DraftChanged(String),
    PostDraft,

    Notify {
        kind: NotificationKind,
        title: String,
        message: String,
    },
    DismissToast(usize),
}

pub struct App {
    store: CommentStore<BrowserStorage, ui::ToastNotifier>,
    focus: ReplyFocus,
    draft: String,
    toasts: Vec<ui::Toast>,
    next_toast_id: usize,
    feed_canceller: oneshot::Receiver<()>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let notifier = ui::ToastNotifier(ctx.link().clone());
        let mut store = CommentStore::new(Config::default(), BrowserStorage, notifier);
        if let Err(err) = store.start_loading() {
            tracing::error!(?err, "failed reading locally saved comments");
            store.notifier().notify(
                NotificationKind::Error,
                "Saved comments unavailable:",
                "Your earlier comments could not be read.",
            );
        }

        // Fetch the shared feed; dropping the app drops `feed_canceller` and abandons it
        let (feed_cancel, feed_canceller) = oneshot::channel();
        let feed_sender = ctx.link().clone();
        spawn_local(async move {
            let source = FeedSource::new(crate::FEED_URL);
            if let Some(res) = fetch_remote(&source, feed_cancel).await {
                feed_sender.send_message(AppMsg::FeedLoaded(res));
            }
        });

        App {
            store,
            focus: ReplyFocus::default(),
            draft: String::new(),
            toasts: Vec::new(),
            next_toast_id: 0,
            feed_canceller,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::FeedLoaded(res) => {
                self.store.finish_loading(res);
            }
            AppMsg::Activate(target) => match target {
                Target::ExpandReply(id) => {
                    self.focus.activate(id);
                }
                Target::SendReply(_) => {
                    tracing::warn!(%target, "send target activated without a reply body");
                    return false;
                }
            },
            AppMsg::SendReply(target, body) => {
                let parent = target.comment();
                match self.focus.submit(&mut self.store, &body, Some(parent)) {
                    Ok(c) => tracing::debug!(id = %c.id, %parent, "reply sent"),
                    Err(err) if err.is_empty_body() => return false,
                    Err(err) => self.submission_failed(err),
                }
            }
            AppMsg::DraftChanged(draft) => {
                self.draft = draft;
                return false;
            }
            AppMsg::PostDraft => match self.focus.submit(&mut self.store, &self.draft, None) {
                Ok(c) => {
                    tracing::debug!(id = %c.id, "top-level comment sent");
                    self.draft.clear();
                }
                Err(err) if err.is_empty_body() => return false,
                Err(err) => self.submission_failed(err),
            },
            AppMsg::Notify {
                kind,
                title,
                message,
            } => {
                let id = self.next_toast_id;
                self.next_toast_id += 1;
                self.toasts.push(ui::Toast {
                    id,
                    kind,
                    title,
                    message,
                });
                ctx.link().send_future(async move {
                    // a failed timer only means the toast stays until dismissed
                    let _ = wasm_timer::Delay::new(TOAST_LIFETIME).await;
                    AppMsg::DismissToast(id)
                });
            }
            AppMsg::DismissToast(id) => {
                let before = self.toasts.len();
                self.toasts.retain(|t| t.id != id);
                return self.toasts.len() != before;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let forest = match self.store.forest() {
            Ok(forest) => forest,
            Err(err) => {
                tracing::error!(?err, "comments do not form a tree");
                Forest::default()
            }
        };
        let thread = view::render(
            &forest,
            &self.focus,
            self.store.comments(),
            self.store.is_loading(),
            &util::local_tz(),
        );

        html! {
            <div class="container py-4">
                <ui::ToastList
                    toasts={ self.toasts.clone() }
                    on_dismiss={ ctx.link().callback(AppMsg::DismissToast) }
                />
                <ui::NewCommentForm
                    draft={ self.draft.clone() }
                    on_input={ ctx.link().callback(AppMsg::DraftChanged) }
                    on_submit={ ctx.link().callback(|()| AppMsg::PostDraft) }
                />
                <ui::LoadingBanner loading={ thread.loading } />
                <ui::CommentTree
                    comments={ thread.comments }
                    on_activate={ ctx.link().callback(AppMsg::Activate) }
                    on_send={ ctx.link().callback(|(target, body)| AppMsg::SendReply(target, body)) }
                />
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.feed_canceller.close();
    }
}

impl App {
    fn submission_failed(&self, err: threadline_client::Error) {
        tracing::error!(?err, "failed saving comment");
        self.store.notifier().notify(
            NotificationKind::Error,
            "New comment:",
            "Saving your comment failed.",
        );
    }
}
