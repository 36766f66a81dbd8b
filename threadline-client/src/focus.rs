use crate::{
    api::{Comment, CommentId, NewComment},
    CommentStore, Error, LocalStore, Notifier,
};

/// Which comment, if any, currently shows its reply box.
///
/// At most one reply box is open at a time: opening another one discards the
/// draft of the previous one.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReplyFocus {
    #[default]
    Closed,
    Open(CommentId),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FocusChange {
    Opened(CommentId),
    Closed(CommentId),
    Switched { from: CommentId, to: CommentId },
}

/// The reply input shown under the open comment
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ReplyBox {
    pub target: CommentId,
    pub placeholder: String,
}

impl ReplyFocus {
    /// Toggles the reply box of `target`, closing any other one
    pub fn activate(&mut self, target: CommentId) -> FocusChange {
        let change = match *self {
            ReplyFocus::Closed => FocusChange::Opened(target),
            ReplyFocus::Open(open) if open == target => FocusChange::Closed(open),
            ReplyFocus::Open(from) => FocusChange::Switched { from, to: target },
        };
        *self = match change {
            FocusChange::Closed(_) => ReplyFocus::Closed,
            FocusChange::Opened(_) | FocusChange::Switched { .. } => ReplyFocus::Open(target),
        };
        tracing::trace!(?change, "reply focus changed");
        change
    }

    pub fn close(&mut self) {
        *self = ReplyFocus::Closed;
    }

    pub fn open_id(&self) -> Option<CommentId> {
        match *self {
            ReplyFocus::Closed => None,
            ReplyFocus::Open(id) => Some(id),
        }
    }

    pub fn is_open(&self, id: CommentId) -> bool {
        self.open_id() == Some(id)
    }

    pub fn reply_box(&self, comments: &[Comment]) -> Option<ReplyBox> {
        let target = self.open_id()?;
        let placeholder = match comments.iter().find(|c| c.id == target) {
            Some(c) => format!("Leave a comment to {}", c.author_name),
            None => String::from("Leave a comment"),
        };
        Some(ReplyBox {
            target,
            placeholder,
        })
    }

    /// Posts `body` under `parent` (top-level if `None`) and closes the reply box.
    ///
    /// A blank body is rejected before the store sees it, and the focus is left
    /// as is.
    pub fn submit<S, N>(
        &mut self,
        store: &mut CommentStore<S, N>,
        body: &str,
        parent: Option<CommentId>,
    ) -> Result<Comment, Error>
    where
        S: LocalStore,
        N: Notifier,
    {
        let new = NewComment::new(body, parent)?;
        let comment = store.append(new)?;
        self.close();
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;
    use crate::{Config, NotificationKind};

    #[derive(Default)]
    struct Slots {
        slots: HashMap<String, String>,
        writes: usize,
    }

    impl LocalStore for Slots {
        fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
            Ok(self.slots.get(key).cloned())
        }

        fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
            self.writes += 1;
            self.slots.insert(String::from(key), String::from(value));
            Ok(())
        }
    }

    #[derive(Default)]
    struct Counter(RefCell<usize>);

    impl Notifier for Counter {
        fn notify(&self, _: NotificationKind, _: &str, _: &str) {
            *self.0.borrow_mut() += 1;
        }
    }

    fn store() -> CommentStore<Slots, Counter> {
        let mut store = CommentStore::new(Config::default(), Slots::default(), Counter::default());
        store.start_loading().expect("reading local comments");
        store.finish_loading(Ok(vec![Comment {
            id: CommentId(5),
            parent_id: CommentId::ROOT,
            author_name: String::from("Kettle"),
            date_time: 0,
            body: String::from("first"),
        }]));
        store
    }

    #[test]
    fn toggling_twice_closes() {
        let mut f = ReplyFocus::default();
        assert_eq!(f.activate(CommentId(3)), FocusChange::Opened(CommentId(3)));
        assert_eq!(f.activate(CommentId(3)), FocusChange::Closed(CommentId(3)));
        assert_eq!(f, ReplyFocus::Closed);
    }

    #[test]
    fn activating_another_switches() {
        let mut f = ReplyFocus::default();
        f.activate(CommentId(5));
        assert_eq!(
            f.activate(CommentId(7)),
            FocusChange::Switched {
                from: CommentId(5),
                to: CommentId(7)
            }
        );
        assert!(f.is_open(CommentId(7)));
        assert!(!f.is_open(CommentId(5)));
        f.activate(CommentId(7));
        assert_eq!(f, ReplyFocus::Closed);
    }

    #[test]
    fn at_most_one_open_and_matches_parity() {
        bolero::check!().with_type::<Vec<u8>>().for_each(|targets| {
            let mut f = ReplyFocus::default();
            let mut model: Option<u8> = None;
            for &t in targets {
                f.activate(CommentId(i64::from(t % 4)));
                model = match model {
                    Some(m) if m == t % 4 => None,
                    _ => Some(t % 4),
                };
                assert_eq!(f.open_id(), model.map(|m| CommentId(i64::from(m))));
            }
            // replaying the same sequence twice in a row toggles every target back
            let mut g = ReplyFocus::default();
            for &t in targets {
                g.activate(CommentId(i64::from(t)));
                g.activate(CommentId(i64::from(t)));
                assert_eq!(g, ReplyFocus::Closed);
            }
        })
    }

    #[test]
    fn reply_box_names_the_author() {
        let store = store();
        let mut f = ReplyFocus::default();
        assert_eq!(f.reply_box(store.comments()), None);
        f.activate(CommentId(5));
        assert_eq!(
            f.reply_box(store.comments()),
            Some(ReplyBox {
                target: CommentId(5),
                placeholder: String::from("Leave a comment to Kettle"),
            })
        );
    }

    #[test]
    fn submit_appends_and_closes() {
        let mut store = store();
        let mut f = ReplyFocus::default();
        f.activate(CommentId(5));
        let c = f
            .submit(&mut store, "hello back", Some(CommentId(5)))
            .expect("submitting");
        assert_eq!(c.id, CommentId(2));
        assert_eq!(c.parent_id, CommentId(5));
        assert_eq!(f, ReplyFocus::Closed);
        assert_eq!(store.comments().len(), 2);
    }

    #[test]
    fn top_level_submit_closes_any_open_reply() {
        let mut store = store();
        let mut f = ReplyFocus::default();
        f.activate(CommentId(5));
        let c = f.submit(&mut store, "new thread", None).expect("submitting");
        assert!(c.parent_id.is_root());
        assert_eq!(f, ReplyFocus::Closed);
    }

    #[test]
    fn empty_submit_has_no_effect() {
        let mut store = store();
        let mut f = ReplyFocus::default();
        f.activate(CommentId(5));
        for body in ["", "   ", "\n"] {
            let err = f
                .submit(&mut store, body, Some(CommentId(5)))
                .expect_err("blank bodies are rejected");
            assert!(err.is_empty_body());
        }
        assert_eq!(f, ReplyFocus::Open(CommentId(5)));
        assert_eq!(store.comments().len(), 1);
        assert_eq!(store.storage().writes, 0);
        assert_eq!(*store.notifier().0.borrow(), 0);
    }
}
