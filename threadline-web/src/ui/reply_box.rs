use threadline_client::view::Target;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ReplyBoxProps {
    pub placeholder: String,
    pub send_target: Target,
    pub on_send: Callback<String>,
}

/// Reply input under a comment; the draft lives in the textarea until sent
#[function_component(ReplyBox)]
pub fn reply_box(p: &ReplyBoxProps) -> Html {
    let body_ref = use_node_ref();
    let on_click = {
        let body_ref = body_ref.clone();
        p.on_send.reform(move |_| {
            body_ref
                .cast::<web_sys::HtmlTextAreaElement>()
                .map(|elt| elt.value())
                .unwrap_or_default()
        })
    };
    html! {
        <div class="reply-box mt-2">
            <textarea
                ref={ body_ref }
                class="form-control"
                rows="3"
                placeholder={ p.placeholder.clone() }
                aria-label={ p.placeholder.clone() }
            >
            </textarea>
            <button
                type="button"
                id={ p.send_target.to_string() }
                class="btn btn-primary btn-sm mt-2"
                onclick={ on_click }
            >
                { "Send" }
            </button>
        </div>
    }
}
