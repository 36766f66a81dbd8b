use threadline_client::{NotificationKind, Notifier};
use yew::{html::Scope, prelude::*};

use crate::ui;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Turns store notifications into toasts on the app
pub struct ToastNotifier(pub Scope<ui::App>);

impl Notifier for ToastNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        self.0.send_message(ui::AppMsg::Notify {
            kind,
            title: String::from(title),
            message: String::from(message),
        });
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct ToastListProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<usize>,
}

#[function_component(ToastList)]
pub fn toast_list(p: &ToastListProps) -> Html {
    html! {
        <div class="toast-container position-fixed top-0 end-0 p-3">
            { for p.toasts.iter().map(|t| {
                let kind_class = match t.kind {
                    NotificationKind::Success => "text-bg-success",
                    NotificationKind::Error => "text-bg-danger",
                };
                let id = t.id;
                html! {
                    <div
                        key={ t.id }
                        class={ classes!("toast", "show", kind_class) }
                        role="alert"
                        aria-live="assertive"
                    >
                        <div class="toast-header">
                            <strong class="me-auto">{ &t.title }</strong>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                onclick={ p.on_dismiss.reform(move |_| id) }
                            >
                            </button>
                        </div>
                        <div class="toast-body">{ &t.message }</div>
                    </div>
                }
            }) }
        </div>
    }
}
