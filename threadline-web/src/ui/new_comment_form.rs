use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct NewCommentFormProps {
    pub draft: String,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Top-level compose box. The draft is owned by the app so it can be cleared
/// once the comment went through.
#[function_component(NewCommentForm)]
pub fn new_comment_form(p: &NewCommentFormProps) -> Html {
    html! {
        <form
            class="new-comment-form mb-4"
            onsubmit={ p.on_submit.reform(|e: SubmitEvent| e.prevent_default()) }
        >
            <textarea
                class="form-control"
                rows="3"
                placeholder="Leave a comment"
                aria-label="Leave a comment"
                value={ p.draft.clone() }
                oninput={ p.on_input.reform(|e: InputEvent| {
                    let elt: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    elt.value()
                }) }
            >
            </textarea>
            <button type="submit" class="btn btn-primary mt-2">{ "Send" }</button>
        </form>
    }
}
