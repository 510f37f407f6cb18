//! Breadcrumb trail from the root to the current directory.

use crate::fs::tree::ItemId;

/// Immutable trail of directory handles from the root to the cursor.
///
/// Every mutation returns a **new** `Breadcrumb` instance, following the
/// project-wide immutability convention. The trail is never empty: entry
/// `0` is the root and the last entry is the current directory, with each
/// consecutive pair being parent→child in the tree. The breadcrumb itself
/// only stores handles — the tree is the authority on names and links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    trail: Vec<ItemId>,
}

impl Breadcrumb {
    /// Creates a trail containing only the root directory.
    pub fn new(root: ItemId) -> Self {
        Self { trail: vec![root] }
    }

    /// Creates a trail from a full root→cursor chain.
    ///
    /// Returns `None` for an empty chain; the caller is responsible for
    /// the parent→child ordering of the entries.
    pub fn from_trail(trail: Vec<ItemId>) -> Option<Self> {
        if trail.is_empty() {
            return None;
        }
        Some(Self { trail })
    }

    /// The full trail, root first.
    pub fn items(&self) -> &[ItemId] {
        &self.trail
    }

    /// The current directory (last entry).
    pub fn current(&self) -> ItemId {
        self.trail[self.trail.len() - 1]
    }

    /// Number of entries in the trail, root included.
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    /// Always `false`; the trail keeps at least the root.
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Extends the trail with a child of the current directory.
    ///
    /// Returns a new `Breadcrumb`.
    pub fn push(&self, child: ItemId) -> Self {
        let mut trail = self.trail.clone();
        trail.push(child);
        Self { trail }
    }

    /// Walks up `steps` entries. Returns the new `Breadcrumb` and the new
    /// current directory, or `None` when `steps` is zero or would climb
    /// above the root.
    pub fn go_up(&self, steps: usize) -> Option<(Self, ItemId)> {
        if steps == 0 || steps >= self.trail.len() {
            return None;
        }
        let trail = self.trail[..self.trail.len() - steps].to_vec();
        let current = trail[trail.len() - 1];
        Some((Self { trail }, current))
    }

    /// Truncates the trail so entry `index` becomes the current
    /// directory. Returns `None` when `index` is out of bounds.
    pub fn up_to(&self, index: usize) -> Option<(Self, ItemId)> {
        if index >= self.trail.len() {
            return None;
        }
        let trail = self.trail[..=index].to_vec();
        let current = trail[index];
        Some((Self { trail }, current))
    }
}
