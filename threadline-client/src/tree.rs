use std::{collections::HashMap, slice};

use crate::{
    api::{Comment, CommentId},
    Error,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplyNode {
    pub comment: Comment,

    /// Direct replies, in collection order unless re-sorted
    pub replies: Vec<ReplyNode>,
}

impl Drop for ReplyNode {
    // the derived drop would recurse once per nesting level
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.replies);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.replies);
        }
    }
}

/// Ordered list of reply trees, one per top-level comment
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Forest(pub Vec<ReplyNode>);

struct Frame<'a> {
    comment: Option<usize>,
    pending: slice::Iter<'a, usize>,
    replies: Vec<ReplyNode>,
}

/// Builds the reply trees hanging from `root`.
///
/// Siblings keep their relative order in `comments`. Comments whose parent is
/// absent from `comments` are not reachable and are left out. Fails if a comment
/// would be visited twice, which only happens on a parent cycle through `root`
/// or when `comments` holds duplicate ids.
pub fn build_forest(comments: &[Comment], root: CommentId) -> Result<Forest, Error> {
    let mut children: HashMap<CommentId, Vec<usize>> = HashMap::new();
    for (i, c) in comments.iter().enumerate() {
        children.entry(c.parent_id).or_default().push(i);
    }
    let mut visited = vec![false; comments.len()];
    let mut stack = vec![Frame {
        comment: None,
        pending: children_of(&children, &root),
        replies: Vec::new(),
    }];
    loop {
        let top = match stack.last_mut() {
            Some(top) => top,
            None => return Ok(Forest::default()),
        };
        if let Some(&i) = top.pending.next() {
            if visited[i] {
                return Err(Error::ReplyCycle(comments[i].id));
            }
            visited[i] = true;
            stack.push(Frame {
                comment: Some(i),
                pending: children_of(&children, &comments[i].id),
                replies: Vec::new(),
            });
            continue;
        }
        let done = match stack.pop() {
            Some(done) => done,
            None => return Ok(Forest::default()),
        };
        match (done.comment, stack.last_mut()) {
            (Some(i), Some(parent)) => parent.replies.push(ReplyNode {
                comment: comments[i].clone(),
                replies: done.replies,
            }),
            _ => return Ok(Forest(done.replies)),
        }
    }
}

fn children_of<'a>(
    children: &'a HashMap<CommentId, Vec<usize>>,
    id: &CommentId,
) -> slice::Iter<'a, usize> {
    children.get(id).map(|v| v.as_slice()).unwrap_or(&[]).iter()
}

impl Forest {
    pub fn roots(&self) -> &[ReplyNode] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of comments in the whole forest
    pub fn len(&self) -> usize {
        self.preorder().count()
    }

    /// Walks every comment depth-first, along with its depth (0 for roots)
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: vec![(0, self.0.iter())],
        }
    }

    /// Stably sorts every sibling group by `date_time`
    pub fn sort_by_date(&mut self) {
        let mut stack = vec![&mut self.0];
        while let Some(nodes) = stack.pop() {
            nodes.sort_by_key(|n| n.comment.date_time);
            for n in nodes {
                stack.push(&mut n.replies);
            }
        }
    }
}

pub struct Preorder<'a> {
    stack: Vec<(usize, slice::Iter<'a, ReplyNode>)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (usize, &'a Comment);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, iter) = self.stack.last_mut()?;
            let depth = *depth;
            match iter.next() {
                Some(node) => {
                    self.stack.push((depth + 1, node.replies.iter()));
                    return Some((depth, &node.comment));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::merge;

    fn comment(id: i64, parent: i64, date_time: i64) -> Comment {
        Comment {
            id: CommentId(id),
            parent_id: CommentId(parent),
            author_name: String::from("A"),
            date_time,
            body: format!("comment {id}"),
        }
    }

    fn ids(forest: &Forest) -> Vec<(usize, i64)> {
        forest.preorder().map(|(d, c)| (d, c.id.0)).collect()
    }

    #[test]
    fn single_root() {
        let f = build_forest(&[comment(1, 0, 1000)], CommentId::ROOT).expect("building forest");
        assert_eq!(f.roots().len(), 1);
        assert!(f.roots()[0].replies.is_empty());
    }

    #[test]
    fn nests_replies_in_collection_order() {
        let cs = vec![
            comment(1, 0, 10),
            comment(2, 1, 30),
            comment(3, 0, 20),
            comment(4, 1, 5),
            comment(5, 4, 1),
        ];
        let f = build_forest(&cs, CommentId::ROOT).expect("building forest");
        assert_eq!(ids(&f), vec![(0, 1), (1, 2), (1, 4), (2, 5), (0, 3)]);
        assert_eq!(f.len(), 5);
    }

    #[test]
    fn orphans_are_left_out() {
        let cs = vec![comment(1, 0, 0), comment(2, 42, 0), comment(3, 2, 0)];
        let f = build_forest(&cs, CommentId::ROOT).expect("building forest");
        assert_eq!(ids(&f), vec![(0, 1)]);
    }

    #[test]
    fn unreachable_cycles_are_orphans() {
        let cs = vec![comment(1, 0, 0), comment(2, 3, 0), comment(3, 2, 0)];
        let f = build_forest(&cs, CommentId::ROOT).expect("building forest");
        assert_eq!(ids(&f), vec![(0, 1)]);
    }

    #[test]
    fn self_parented_root_fails_fast() {
        let cs = vec![comment(0, 0, 0)];
        assert!(matches!(
            build_forest(&cs, CommentId::ROOT),
            Err(Error::ReplyCycle(CommentId(0)))
        ));
    }

    #[test]
    fn duplicate_ids_fail_instead_of_duplicating_subtrees() {
        let cs = vec![comment(1, 0, 0), comment(1, 0, 0), comment(2, 1, 0)];
        assert!(matches!(
            build_forest(&cs, CommentId::ROOT),
            Err(Error::ReplyCycle(CommentId(2)))
        ));
    }

    #[test]
    fn subtree_roots() {
        let cs = vec![comment(1, 0, 0), comment(2, 1, 0), comment(3, 2, 0)];
        let f = build_forest(&cs, CommentId(1)).expect("building forest");
        assert_eq!(ids(&f), vec![(0, 2), (1, 3)]);
    }

    #[test]
    fn deep_chains_do_not_recurse() {
        let cs = (1..=100_000)
            .map(|i| comment(i, i - 1, i))
            .collect::<Vec<_>>();
        let mut f = build_forest(&cs, CommentId::ROOT).expect("building forest");
        assert_eq!(f.len(), 100_000);
        assert_eq!(f.preorder().last().map(|(d, c)| (d, c.id.0)), Some((99_999, 100_000)));
        f.sort_by_date();
        drop(f);
    }

    #[test]
    fn sort_by_date_is_stable() {
        let cs = vec![
            comment(1, 0, 20),
            comment(2, 0, 10),
            comment(3, 0, 20),
            comment(4, 1, 9),
            comment(5, 1, 3),
        ];
        let mut f = build_forest(&cs, CommentId::ROOT).expect("building forest");
        f.sort_by_date();
        assert_eq!(
            ids(&f),
            vec![(0, 2), (0, 1), (1, 5), (1, 4), (0, 3)]
        );
    }

    #[test]
    fn every_reachable_comment_appears_once() {
        bolero::check!()
            .with_type::<Vec<(u8, u8)>>()
            .for_each(|raw| {
                let cs = raw
                    .iter()
                    .map(|&(id, parent)| comment(i64::from(id) + 1, i64::from(parent % 32), 0))
                    .collect::<Vec<_>>();
                let cs = merge(&cs, &[]);
                let f = build_forest(&cs, CommentId::ROOT).expect("ids are unique and nonzero");

                // compute reachability independently, by fixpoint over parent links
                let mut reachable = HashSet::new();
                reachable.insert(CommentId::ROOT);
                loop {
                    let before = reachable.len();
                    for c in &cs {
                        if reachable.contains(&c.parent_id) {
                            reachable.insert(c.id);
                        }
                    }
                    if reachable.len() == before {
                        break;
                    }
                }
                let expected = cs.iter().filter(|c| reachable.contains(&c.id)).count();

                let seen = f.preorder().map(|(_, c)| c.id).collect::<Vec<_>>();
                assert_eq!(seen.len(), expected);
                assert_eq!(seen.iter().collect::<HashSet<_>>().len(), expected);
            })
    }
}
