//! Presentation-agnostic view model of a thread.
//!
//! Front-ends render a `ThreadView` and report clicks back as `Target`s, without
//! ever looking at the store or the focus state directly.

use std::{fmt, slice, str::FromStr};

use chrono::TimeZone;

use crate::{
    api::{format_date, Comment, CommentId},
    Forest, ReplyBox, ReplyFocus, ReplyNode,
};

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ThreadView {
    pub loading: bool,
    pub comments: Vec<CommentView>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct CommentView {
    pub id: CommentId,
    pub author: String,
    pub date: String,
    pub body: String,
    pub expand_target: Target,
    pub send_target: Target,

    /// Only set on the comment whose reply box is open
    pub reply_box: Option<ReplyBox>,

    pub replies: Vec<CommentView>,
}

/// Something the user can activate on a rendered comment
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Target {
    ExpandReply(CommentId),
    SendReply(CommentId),
}

impl Target {
    pub fn comment(&self) -> CommentId {
        match *self {
            Target::ExpandReply(id) | Target::SendReply(id) => id,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::ExpandReply(id) => write!(f, "expand-reply:{id}"),
            Target::SendReply(id) => write!(f, "send-reply:{id}"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid activation target {0:?}")]
pub struct InvalidTarget(String);

impl FromStr for Target {
    type Err = InvalidTarget;

    fn from_str(s: &str) -> Result<Target, InvalidTarget> {
        let invalid = || InvalidTarget(String::from(s));
        let (kind, id) = s.split_once(':').ok_or_else(invalid)?;
        let id = CommentId(id.parse().map_err(|_| invalid())?);
        match kind {
            "expand-reply" => Ok(Target::ExpandReply(id)),
            "send-reply" => Ok(Target::SendReply(id)),
            _ => Err(invalid()),
        }
    }
}

impl serde::Serialize for Target {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Drop for CommentView {
    // the derived drop would recurse once per nesting level
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.replies);
        while let Some(mut view) = pending.pop() {
            pending.append(&mut view.replies);
        }
    }
}

/// Builds the view of `forest`, attaching the reply box of the focused comment
pub fn render<Tz>(
    forest: &Forest,
    focus: &ReplyFocus,
    comments: &[Comment],
    loading: bool,
    tz: &Tz,
) -> ThreadView
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let reply_box = focus.reply_box(comments);
    ThreadView {
        loading,
        comments: render_nodes(forest.roots(), reply_box.as_ref(), tz),
    }
}

struct Frame<'a> {
    node: Option<&'a ReplyNode>,
    pending: slice::Iter<'a, ReplyNode>,
    rendered: Vec<CommentView>,
}

/// Renders `roots` depth-first with an explicit stack; a node is turned into a
/// view once all of its replies are
fn render_nodes<Tz>(roots: &[ReplyNode], reply_box: Option<&ReplyBox>, tz: &Tz) -> Vec<CommentView>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut stack = vec![Frame {
        node: None,
        pending: roots.iter(),
        rendered: Vec::new(),
    }];
    loop {
        let top = match stack.last_mut() {
            Some(top) => top,
            None => return Vec::new(),
        };
        if let Some(child) = top.pending.next() {
            stack.push(Frame {
                node: Some(child),
                pending: child.replies.iter(),
                rendered: Vec::new(),
            });
            continue;
        }
        let done = match stack.pop() {
            Some(done) => done,
            None => return Vec::new(),
        };
        match (done.node, stack.last_mut()) {
            (Some(node), Some(parent)) => {
                let c = &node.comment;
                parent.rendered.push(CommentView {
                    id: c.id,
                    author: c.author_name.clone(),
                    date: format_date(c.date_time, tz),
                    body: c.body.clone(),
                    expand_target: Target::ExpandReply(c.id),
                    send_target: Target::SendReply(c.id),
                    reply_box: reply_box.filter(|b| b.target == c.id).cloned(),
                    replies: done.rendered,
                })
            }
            _ => return done.rendered,
        }
    }
}
