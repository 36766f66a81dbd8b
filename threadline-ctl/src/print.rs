use std::fmt::Write;

use threadline_client::view::{CommentView, ThreadView};

const INDENT: usize = 4;

/// Plain-text rendering of a thread, replies indented under their parent
pub fn thread(view: &ThreadView) -> String {
    let mut out = String::new();
    if view.comments.is_empty() {
        out.push_str("no comments yet\n");
        return out;
    }
    let mut stack: Vec<(usize, &CommentView)> =
        view.comments.iter().rev().map(|c| (0, c)).collect();
    while let Some((depth, c)) = stack.pop() {
        let pad = " ".repeat(depth * INDENT);
        // writing to a String can't fail
        let _ = writeln!(out, "{pad}#{} {} ({})", c.id, c.author, c.date);
        for line in c.body.lines() {
            let _ = writeln!(out, "{pad}  {line}");
        }
        stack.extend(c.replies.iter().rev().map(|r| (depth + 1, r)));
    }
    out
}
