use threadline_client::view::{CommentView, Target};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentCardProps {
    pub comment: CommentView,
    pub on_activate: Callback<Target>,
    pub on_send: Callback<(Target, String)>,
}

#[function_component(CommentCard)]
pub fn comment_card(p: &CommentCardProps) -> Html {
    let c = &p.comment;
    let expand_target = c.expand_target;
    let send_target = c.send_target;
    html! {
        <li class="comment list-group-item">
            <div class="d-flex align-items-baseline">
                <strong class="me-2">{ &c.author }</strong>
                <small class="text-muted flex-fill">{ &c.date }</small>
                <button
                    type="button"
                    id={ expand_target.to_string() }
                    class="btn btn-link btn-sm"
                    onclick={ p.on_activate.reform(move |_| expand_target) }
                >
                    { "Reply" }
                </button>
            </div>
            <p class="comment-body mb-1">{ &c.body }</p>
            { for c.reply_box.as_ref().map(|b| html! {
                <ui::ReplyBox
                    placeholder={ b.placeholder.clone() }
                    { send_target }
                    on_send={ p.on_send.reform(move |body| (send_target, body)) }
                />
            }) }
            if !c.replies.is_empty() {
                <ui::CommentTree
                    comments={ c.replies.clone() }
                    on_activate={ p.on_activate.clone() }
                    on_send={ p.on_send.clone() }
                />
            }
        </li>
    }
}
