//! Recursive search over the item tree.
//!
//! Traversal order is level-first, then depth-first per branch: within a
//! directory every direct child (file or directory) is tested before any
//! subdirectory is entered; subdirectories are then visited in insertion
//! order, each one's subtree fully exhausted before moving to the next
//! sibling. The start directory itself is never tested.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::fs::tree::{ItemId, Tree};
use crate::nfc_string;

/// Returns the first item under `from` for which `predicate` is true,
/// short-circuiting as soon as one is found.
pub fn find_item<P>(tree: &Tree, from: ItemId, mut predicate: P) -> Option<ItemId>
where
    P: FnMut(&Tree, ItemId) -> bool,
{
    let mut found = None;
    visit(tree, from, &mut |id| {
        if predicate(tree, id) {
            found = Some(id);
            true
        } else {
            false
        }
    });
    found
}

/// Collects every item under `from` for which `predicate` is true, in
/// traversal order. Returns an empty `Vec` when nothing matches.
pub fn find_all_items<P>(tree: &Tree, from: ItemId, mut predicate: P) -> Vec<ItemId>
where
    P: FnMut(&Tree, ItemId) -> bool,
{
    let mut matches = Vec::new();
    visit(tree, from, &mut |id| {
        if predicate(tree, id) {
            matches.push(id);
        }
        false
    });
    matches
}

/// Finds the first item under `from` with the given (NFC-normalised)
/// name.
pub fn find_by_name(tree: &Tree, from: ItemId, name: &str) -> Option<ItemId> {
    let query = nfc_string(name);
    find_item(tree, from, |tree, id| tree.name(id) == Some(query.as_str()))
}

/// Collects every item under `from` with the given name.
pub fn find_all_by_name(tree: &Tree, from: ItemId, name: &str) -> Vec<ItemId> {
    let query = nfc_string(name);
    find_all_items(tree, from, |tree, id| tree.name(id) == Some(query.as_str()))
}

/// Walks the subtree under `dir` in search order, calling `stop` on each
/// item. Returns `true` as soon as `stop` does.
fn visit(tree: &Tree, dir: ItemId, stop: &mut dyn FnMut(ItemId) -> bool) -> bool {
    let children = tree.children(dir);
    for &child in &children {
        if stop(child) {
            return true;
        }
    }
    for &child in &children {
        if tree.is_directory(child) && visit(tree, child, stop) {
            return true;
        }
    }
    false
}

/// An item paired with its fuzzy match score and the byte indices in the
/// item name that matched the query.
#[derive(Debug, Clone)]
pub struct FuzzyHit {
    id: ItemId,
    score: i64,
    matched_indices: Vec<usize>,
}

impl FuzzyHit {
    /// The matching item.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Match score — higher values indicate a better match. `0` when the
    /// query was empty.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Byte indices in the item name that matched the query.
    #[must_use]
    pub fn matched_indices(&self) -> &[usize] {
        &self.matched_indices
    }
}

/// Performs fuzzy matching of `query` against every item name under
/// `from`.
///
/// Returns hits sorted by score (highest first); ties keep traversal
/// order. When `query` is empty every item is returned with a score of
/// `0` in plain traversal order.
pub fn fuzzy_find(tree: &Tree, from: ItemId, query: &str) -> Vec<FuzzyHit> {
    let all = find_all_items(tree, from, |_, _| true);

    if query.is_empty() {
        return all
            .into_iter()
            .map(|id| FuzzyHit {
                id,
                score: 0,
                matched_indices: Vec::new(),
            })
            .collect();
    }

    let matcher = SkimMatcherV2::default();

    let mut hits: Vec<FuzzyHit> = all
        .into_iter()
        .filter_map(|id| {
            let name = tree.name(id)?;
            matcher
                .fuzzy_indices(name, query)
                .map(|(score, matched_indices)| FuzzyHit {
                    id,
                    score,
                    matched_indices,
                })
        })
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}
