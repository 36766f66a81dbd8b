use threadline_client::view::{CommentView, Target};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentTreeProps {
    pub comments: Vec<CommentView>,
    pub on_activate: Callback<Target>,
    pub on_send: Callback<(Target, String)>,
}

#[function_component(CommentTree)]
pub fn comment_tree(p: &CommentTreeProps) -> Html {
    html! {
        <ul class="comment-tree list-group list-group-flush ms-3">
            { for p.comments.iter().map(|c| html! {
                <ui::CommentCard
                    key={ c.id.0 }
                    comment={ c.clone() }
                    on_activate={ p.on_activate.clone() }
                    on_send={ p.on_send.clone() }
                />
            }) }
        </ul>
    }
}
