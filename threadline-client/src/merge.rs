use std::collections::HashSet;

use crate::api::Comment;

/// Combines remote and locally-added comments into one collection with unique ids.
///
/// Comments are kept in order of first appearance in `remote ++ local`. When an id
/// shows up more than once, the first record carrying it is the one kept, so a
/// remote comment shadows a local one with the same id.
pub fn merge(remote: &[Comment], local: &[Comment]) -> Vec<Comment> {
    let mut seen = HashSet::with_capacity(remote.len() + local.len());
    remote
        .iter()
        .chain(local.iter())
        .filter(|c| seen.insert(c.id))
        .cloned()
        .collect()
}
