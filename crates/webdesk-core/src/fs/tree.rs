//! The item tree.
//!
//! [`Tree`] owns every item in an arena and exposes the directory-level
//! operations: lookup, insertion, removal, renaming, deep copies, and
//! path derivation. Parent links are arena indices, so upward navigation
//! never implies ownership — the ownership direction is strictly
//! parent→child.
//!
//! Moving an item between directories always runs the detach-then-attach
//! protocol, so an item has exactly one owning directory at every
//! observable instant.

use indextree::{Arena, NodeId};

use crate::error::{CoreError, CoreResult};
use crate::fs::item::{DirectoryKind, FileData, ItemKind, MediaType};
use crate::fs::name::{validate_name, SEPARATOR};
use crate::nfc_string;

/// Handle to an item in a [`Tree`].
///
/// `ItemId` is a plain index — cheap to copy, never owning. A handle
/// becomes stale once the item it points at is removed; accessors on
/// [`Tree`] return `None` (or `false`) for stale handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(NodeId);

struct ItemNode {
    name: String,
    kind: ItemKind,
}

/// An in-memory tree of files and directories.
///
/// The root directory is created with the tree and cannot be removed.
/// Child order within a directory is insertion order.
pub struct Tree {
    arena: Arena<ItemNode>,
    root: ItemId,
    copy_suffix: String,
}

impl Tree {
    /// Creates a tree whose root directory is named `"root"`, using the
    /// default `" copy"` duplicate suffix.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = ItemId(arena.new_node(ItemNode {
            name: "root".to_string(),
            kind: ItemKind::Directory(DirectoryKind::Default),
        }));
        Self {
            arena,
            root,
            copy_suffix: " copy".to_string(),
        }
    }

    /// Creates a tree with a custom root name and duplicate suffix.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidName`] if `root_name` fails name validation.
    pub fn with_settings(root_name: &str, copy_suffix: &str) -> CoreResult<Self> {
        let name = validate_name(root_name)?;
        let mut arena = Arena::new();
        let root = ItemId(arena.new_node(ItemNode {
            name,
            kind: ItemKind::Directory(DirectoryKind::Default),
        }));
        Ok(Self {
            arena,
            root,
            copy_suffix: copy_suffix.to_string(),
        })
    }

    /// The root directory.
    pub fn root(&self) -> ItemId {
        self.root
    }

    /// Returns `true` if `id` refers to a live item in this tree.
    pub fn contains(&self, id: ItemId) -> bool {
        self.node(id).is_some()
    }

    fn node(&self, id: ItemId) -> Option<&indextree::Node<ItemNode>> {
        self.arena.get(id.0).filter(|node| !node.is_removed())
    }

    fn data(&self, id: ItemId) -> Option<&ItemNode> {
        self.node(id).map(indextree::Node::get)
    }

    fn data_mut(&mut self, id: ItemId) -> Option<&mut ItemNode> {
        self.arena
            .get_mut(id.0)
            .filter(|node| !node.is_removed())
            .map(indextree::Node::get_mut)
    }

    /// The item's name, or `None` for a stale handle.
    pub fn name(&self, id: ItemId) -> Option<&str> {
        self.data(id).map(|item| item.name.as_str())
    }

    /// The item's kind, or `None` for a stale handle.
    pub fn kind(&self, id: ItemId) -> Option<&ItemKind> {
        self.data(id).map(|item| &item.kind)
    }

    /// Returns `true` if `id` is a live directory.
    pub fn is_directory(&self, id: ItemId) -> bool {
        self.data(id).is_some_and(|item| item.kind.is_directory())
    }

    /// Returns `true` if `id` is a live file.
    pub fn is_file(&self, id: ItemId) -> bool {
        self.data(id).is_some_and(|item| item.kind.is_file())
    }

    /// The owning directory, or `None` for the root or a stale handle.
    pub fn parent(&self, id: ItemId) -> Option<ItemId> {
        self.node(id)?.parent().map(ItemId)
    }

    /// The separator-joined names from the root to `id`.
    ///
    /// Derived from the live parent chain on every call — never cached —
    /// so it is always correct after reparenting. The root's path is its
    /// bare name.
    pub fn path(&self, id: ItemId) -> Option<String> {
        self.node(id)?;
        let mut names = Vec::new();
        for ancestor in id.0.ancestors(&self.arena) {
            names.push(self.arena.get(ancestor)?.get().name.as_str());
        }
        names.reverse();
        Some(names.join(&SEPARATOR.to_string()))
    }

    /// The children of `dir` in insertion order, as a snapshot.
    ///
    /// Mutating the returned `Vec` does not affect the directory. Files
    /// and non-directories yield an empty snapshot.
    pub fn children(&self, dir: ItemId) -> Vec<ItemId> {
        if !self.is_directory(dir) {
            return Vec::new();
        }
        dir.0.children(&self.arena).map(ItemId).collect()
    }

    /// The number of direct children of `dir`.
    pub fn child_count(&self, dir: ItemId) -> usize {
        if !self.is_directory(dir) {
            return 0;
        }
        dir.0.children(&self.arena).count()
    }

    /// Returns `true` if `dir` has a direct child named `name`.
    pub fn has_item(&self, dir: ItemId, name: &str) -> bool {
        self.get_item(dir, name).is_some()
    }

    /// Looks up a direct child of `dir` by name.
    ///
    /// The query is NFC-normalised before comparison, matching the
    /// normalisation applied to stored names.
    pub fn get_item(&self, dir: ItemId, name: &str) -> Option<ItemId> {
        if !self.is_directory(dir) {
            return None;
        }
        let query = nfc_string(name);
        dir.0
            .children(&self.arena)
            .map(ItemId)
            .find(|&child| self.name(child) == Some(query.as_str()))
    }

    /// Creates a detached empty file.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidName`] if the name fails validation.
    pub fn new_file(&mut self, name: &str) -> CoreResult<ItemId> {
        self.new_file_with(name, "", None)
    }

    /// Creates a detached file with text content and optional source
    /// metadata (from which the media type is derived).
    pub fn new_file_with(
        &mut self,
        name: &str,
        text: &str,
        source: Option<&str>,
    ) -> CoreResult<ItemId> {
        let name = validate_name(name)?;
        let data = FileData::with_content(text, source);
        Ok(ItemId(self.arena.new_node(ItemNode {
            name,
            kind: ItemKind::File(data),
        })))
    }

    /// Creates a detached directory of the default kind.
    pub fn new_directory(&mut self, name: &str) -> CoreResult<ItemId> {
        self.new_directory_with(name, DirectoryKind::Default)
    }

    /// Creates a detached directory of the given kind.
    pub fn new_directory_with(&mut self, name: &str, kind: DirectoryKind) -> CoreResult<ItemId> {
        let name = validate_name(name)?;
        Ok(ItemId(self.arena.new_node(ItemNode {
            name,
            kind: ItemKind::Directory(kind),
        })))
    }

    /// Registers `item` as a child of `dir`, detaching it from its
    /// previous owner first.
    ///
    /// Returns `Ok(false)` without mutating anything when `dir` already
    /// has a child with the item's name, or when either handle is stale.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotADirectory`] if `dir` is a file.
    /// - [`CoreError::Cycle`] if `item` is `dir` itself or one of `dir`'s
    ///   ancestors.
    pub fn insert(&mut self, dir: ItemId, item: ItemId) -> CoreResult<bool> {
        if !self.contains(dir) || !self.contains(item) {
            return Ok(false);
        }
        if !self.is_directory(dir) {
            return Err(CoreError::NotADirectory(self.path(dir).unwrap_or_default()));
        }
        let Some(name) = self.name(item).map(str::to_string) else {
            return Ok(false);
        };
        if self.has_item(dir, &name) {
            return Ok(false);
        }
        if item == dir || self.is_ancestor_of(item, dir) {
            return Err(CoreError::Cycle(name));
        }

        // Detach-then-attach: single ownership at every observable instant.
        item.0.detach(&mut self.arena);
        dir.0
            .checked_append(item.0, &mut self.arena)
            .map_err(|_| CoreError::Cycle(name.clone()))?;

        tracing::debug!(
            "inserted {:?} into {}",
            name,
            self.path(dir).unwrap_or_default()
        );
        Ok(true)
    }

    /// Returns `true` if `candidate` is a proper ancestor of `of`.
    fn is_ancestor_of(&self, candidate: ItemId, of: ItemId) -> bool {
        of.0.ancestors(&self.arena).skip(1).any(|id| id == candidate.0)
    }

    /// Removes the child of `dir` named `name`, freeing its whole subtree.
    ///
    /// Returns `true` if an item was removed, `false` if no such child
    /// exists. Handles into the removed subtree become stale.
    pub fn remove(&mut self, dir: ItemId, name: &str) -> bool {
        match self.get_item(dir, name) {
            Some(child) => {
                tracing::debug!(
                    "removed {:?} from {}",
                    name,
                    self.path(dir).unwrap_or_default()
                );
                child.0.remove_subtree(&mut self.arena);
                true
            }
            None => false,
        }
    }

    /// Frees a detached subtree that never got (or lost) an owner.
    pub(crate) fn release(&mut self, id: ItemId) {
        if self.contains(id) {
            id.0.remove_subtree(&mut self.arena);
        }
    }

    /// Renames `id` and re-registers it with its owner.
    ///
    /// Re-registration moves the item to the end of its siblings'
    /// insertion order, matching map delete-then-reinsert semantics.
    /// Returns `Ok(false)` for a stale handle.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidName`] if `new_name` fails validation.
    /// - [`CoreError::NameConflict`] if another sibling already has that
    ///   name.
    pub fn rename(&mut self, id: ItemId, new_name: &str) -> CoreResult<bool> {
        if !self.contains(id) {
            return Ok(false);
        }
        let name = validate_name(new_name)?;
        let parent = self.parent(id);
        if let Some(parent) = parent {
            if let Some(existing) = self.get_item(parent, &name) {
                if existing != id {
                    return Err(CoreError::NameConflict(name));
                }
            }
        }

        if let Some(item) = self.data_mut(id) {
            item.name = name.clone();
        }
        if let Some(parent) = parent {
            id.0.detach(&mut self.arena);
            parent
                .0
                .checked_append(id.0, &mut self.arena)
                .map_err(|_| CoreError::Cycle(name.clone()))?;
        }
        tracing::debug!("renamed item to {:?}", name);
        Ok(true)
    }

    /// Deep-copies `id` into a new detached item.
    ///
    /// A file copy is renamed `"<name><copy_suffix>"`; a directory copy
    /// keeps its name and recursively copies every child with names
    /// preserved. The clone shares no state with the source. Returns
    /// `None` for a stale handle.
    pub fn duplicate(&mut self, id: ItemId) -> Option<ItemId> {
        let item = self.data(id)?;
        match &item.kind {
            ItemKind::File(data) => {
                let node = ItemNode {
                    name: format!("{}{}", item.name, self.copy_suffix),
                    kind: ItemKind::File(data.clone()),
                };
                Some(ItemId(self.arena.new_node(node)))
            }
            ItemKind::Directory(_) => self.clone_subtree(id),
        }
    }

    fn clone_subtree(&mut self, id: ItemId) -> Option<ItemId> {
        let (name, kind) = {
            let item = self.data(id)?;
            (item.name.clone(), item.kind.clone())
        };
        let copy = ItemId(self.arena.new_node(ItemNode { name, kind }));
        for child in self.children(id) {
            let child_copy = self.clone_subtree(child)?;
            copy.0.checked_append(child_copy.0, &mut self.arena).ok()?;
        }
        Some(copy)
    }

    /// The text content of a file, or `None` for directories and stale
    /// handles.
    pub fn text_content(&self, id: ItemId) -> Option<&str> {
        match &self.data(id)?.kind {
            ItemKind::File(data) => Some(data.text()),
            ItemKind::Directory(_) => None,
        }
    }

    /// Replaces a file's text content. Returns `false` if `id` is not a
    /// live file.
    pub fn set_text_content(&mut self, id: ItemId, text: &str) -> bool {
        match self.data_mut(id).map(|item| &mut item.kind) {
            Some(ItemKind::File(data)) => {
                data.set_text(text);
                true
            }
            _ => false,
        }
    }

    /// A file's source metadata, if it is a file and has any.
    pub fn source(&self, id: ItemId) -> Option<&str> {
        match &self.data(id)?.kind {
            ItemKind::File(data) => data.source(),
            ItemKind::Directory(_) => None,
        }
    }

    /// Replaces a file's source metadata, re-deriving its media type.
    /// Returns `false` if `id` is not a live file.
    pub fn set_source(&mut self, id: ItemId, source: &str) -> bool {
        match self.data_mut(id).map(|item| &mut item.kind) {
            Some(ItemKind::File(data)) => {
                data.set_source(source);
                true
            }
            _ => false,
        }
    }

    /// A file's derived media type.
    pub fn media_type(&self, id: ItemId) -> Option<&MediaType> {
        match &self.data(id)?.kind {
            ItemKind::File(data) => Some(data.media()),
            ItemKind::Directory(_) => None,
        }
    }

    /// A directory's kind tag.
    pub fn directory_kind(&self, id: ItemId) -> Option<DirectoryKind> {
        match self.data(id)?.kind {
            ItemKind::Directory(kind) => Some(kind),
            ItemKind::File(_) => None,
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_file(name: &str) -> (Tree, ItemId) {
        let mut tree = Tree::new();
        let file = tree.new_file(name).unwrap();
        let root = tree.root();
        assert!(tree.insert(root, file).unwrap());
        (tree, file)
    }

    #[test]
    fn root_is_a_directory_named_root() {
        let tree = Tree::new();
        let root = tree.root();

        assert!(tree.is_directory(root));
        assert_eq!(tree.name(root), Some("root"));
        assert_eq!(tree.path(root), Some("root".to_string()));
        assert!(tree.parent(root).is_none());
    }

    #[test]
    fn with_settings_validates_root_name() {
        assert!(Tree::with_settings("home", " copy").is_ok());
        assert!(matches!(
            Tree::with_settings("a/b", " copy"),
            Err(CoreError::InvalidName(_))
        ));
    }

    #[test]
    fn insert_registers_child_and_sets_parent() {
        let (tree, file) = tree_with_file("notes.txt");
        let root = tree.root();

        assert_eq!(tree.get_item(root, "notes.txt"), Some(file));
        assert_eq!(tree.parent(file), Some(root));
        assert!(tree.has_item(root, "notes.txt"));
    }

    #[test]
    fn insert_duplicate_name_is_rejected_softly() {
        let (mut tree, _) = tree_with_file("notes.txt");
        let root = tree.root();
        let other = tree.new_file("notes.txt").unwrap();

        assert!(!tree.insert(root, other).unwrap());
        assert_eq!(tree.child_count(root), 1);
        // The rejected item keeps no owner.
        assert!(tree.parent(other).is_none());
    }

    #[test]
    fn insert_self_is_a_cycle_error() {
        let mut tree = Tree::new();
        let root = tree.root();

        assert!(matches!(
            tree.insert(root, root),
            Err(CoreError::Cycle(_))
        ));
    }

    #[test]
    fn insert_ancestor_is_a_cycle_error() {
        let mut tree = Tree::new();
        let root = tree.root();
        let a = tree.new_directory("a").unwrap();
        let b = tree.new_directory("b").unwrap();
        tree.insert(root, a).unwrap();
        tree.insert(a, b).unwrap();

        assert!(matches!(tree.insert(b, a), Err(CoreError::Cycle(_))));
        assert!(matches!(tree.insert(b, root), Err(CoreError::Cycle(_))));
        // Failed inserts leave the tree untouched.
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.child_count(b), 0);
    }

    #[test]
    fn insert_into_file_is_not_a_directory_error() {
        let (mut tree, file) = tree_with_file("notes.txt");
        let other = tree.new_file("other.txt").unwrap();

        assert!(matches!(
            tree.insert(file, other),
            Err(CoreError::NotADirectory(_))
        ));
    }

    #[test]
    fn insert_moves_item_between_directories() {
        let mut tree = Tree::new();
        let root = tree.root();
        let docs = tree.new_directory("docs").unwrap();
        let file = tree.new_file("a.txt").unwrap();
        tree.insert(root, docs).unwrap();
        tree.insert(root, file).unwrap();

        assert!(tree.insert(docs, file).unwrap());
        assert!(tree.get_item(root, "a.txt").is_none());
        assert_eq!(tree.get_item(docs, "a.txt"), Some(file));
        assert_eq!(tree.parent(file), Some(docs));
    }

    #[test]
    fn children_are_in_insertion_order() {
        let mut tree = Tree::new();
        let root = tree.root();
        for name in ["c.txt", "a.txt", "b.txt"] {
            let file = tree.new_file(name).unwrap();
            tree.insert(root, file).unwrap();
        }

        let names: Vec<_> = tree
            .children(root)
            .into_iter()
            .map(|id| tree.name(id).unwrap().to_string())
            .collect();
        assert_eq!(names, ["c.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn children_snapshot_is_independent() {
        let (tree, _) = tree_with_file("notes.txt");
        let root = tree.root();

        let mut snapshot = tree.children(root);
        snapshot.clear();
        assert_eq!(tree.child_count(root), 1);
    }

    #[test]
    fn path_reflects_live_parent_chain() {
        let mut tree = Tree::new();
        let root = tree.root();
        let a = tree.new_directory("a").unwrap();
        let b = tree.new_directory("b").unwrap();
        let file = tree.new_file("c.txt").unwrap();
        tree.insert(root, a).unwrap();
        tree.insert(a, b).unwrap();
        tree.insert(b, file).unwrap();

        assert_eq!(tree.path(file), Some("root/a/b/c.txt".to_string()));

        // Reparent and recompute — nothing is cached.
        tree.insert(root, file).unwrap();
        assert_eq!(tree.path(file), Some("root/c.txt".to_string()));
    }

    #[test]
    fn remove_frees_the_subtree() {
        let mut tree = Tree::new();
        let root = tree.root();
        let dir = tree.new_directory("dir").unwrap();
        let file = tree.new_file("a.txt").unwrap();
        tree.insert(root, dir).unwrap();
        tree.insert(dir, file).unwrap();

        assert!(tree.remove(root, "dir"));
        assert!(!tree.contains(dir));
        assert!(!tree.contains(file));
        assert!(tree.children(root).is_empty());
    }

    #[test]
    fn remove_missing_returns_false() {
        let mut tree = Tree::new();
        let root = tree.root();
        assert!(!tree.remove(root, "ghost"));
    }

    #[test]
    fn rename_updates_name_and_reorders_to_end() {
        let mut tree = Tree::new();
        let root = tree.root();
        let a = tree.new_file("a.txt").unwrap();
        let b = tree.new_file("b.txt").unwrap();
        tree.insert(root, a).unwrap();
        tree.insert(root, b).unwrap();

        assert!(tree.rename(a, "z.txt").unwrap());
        assert_eq!(tree.name(a), Some("z.txt"));

        let names: Vec<_> = tree
            .children(root)
            .into_iter()
            .map(|id| tree.name(id).unwrap().to_string())
            .collect();
        assert_eq!(names, ["b.txt", "z.txt"]);
    }

    #[test]
    fn rename_to_sibling_name_is_a_conflict() {
        let mut tree = Tree::new();
        let root = tree.root();
        let a = tree.new_file("a.txt").unwrap();
        let b = tree.new_file("b.txt").unwrap();
        tree.insert(root, a).unwrap();
        tree.insert(root, b).unwrap();

        assert!(matches!(
            tree.rename(a, "b.txt"),
            Err(CoreError::NameConflict(_))
        ));
        assert_eq!(tree.name(a), Some("a.txt"));
    }

    #[test]
    fn rename_rejects_invalid_names() {
        let (mut tree, file) = tree_with_file("a.txt");

        assert!(matches!(
            tree.rename(file, ""),
            Err(CoreError::InvalidName(_))
        ));
        assert!(matches!(
            tree.rename(file, "x/y"),
            Err(CoreError::InvalidName(_))
        ));
        assert_eq!(tree.name(file), Some("a.txt"));
    }

    #[test]
    fn duplicate_file_appends_copy_suffix() {
        let mut tree = Tree::new();
        let root = tree.root();
        let file = tree.new_file_with("song.mp3", "la la", Some("audio/mpeg")).unwrap();
        tree.insert(root, file).unwrap();

        let copy = tree.duplicate(file).unwrap();
        assert_eq!(tree.name(copy), Some("song.mp3 copy"));
        assert_eq!(tree.text_content(copy), Some("la la"));
        assert_eq!(tree.media_type(copy).unwrap().mime(), "audio/mpeg");
        assert!(tree.parent(copy).is_none(), "clone starts detached");
        assert_ne!(copy, file);
    }

    #[test]
    fn duplicate_directory_preserves_names_recursively() {
        let mut tree = Tree::new();
        let root = tree.root();
        let dir = tree.new_directory("music").unwrap();
        let sub = tree.new_directory("albums").unwrap();
        let file = tree.new_file("track.mp3").unwrap();
        tree.insert(root, dir).unwrap();
        tree.insert(dir, sub).unwrap();
        tree.insert(sub, file).unwrap();

        let copy = tree.duplicate(dir).unwrap();
        assert_eq!(tree.name(copy), Some("music"));
        assert!(tree.parent(copy).is_none());

        let sub_copy = tree.get_item(copy, "albums").unwrap();
        assert_ne!(sub_copy, sub);
        let file_copy = tree.get_item(sub_copy, "track.mp3").unwrap();
        assert_ne!(file_copy, file);
        // The source subtree is untouched.
        assert_eq!(tree.get_item(sub, "track.mp3"), Some(file));
    }

    #[test]
    fn duplicate_directory_is_fully_independent() {
        let mut tree = Tree::new();
        let root = tree.root();
        let dir = tree.new_directory("docs").unwrap();
        let file = tree.new_file_with("a.txt", "original", None).unwrap();
        tree.insert(root, dir).unwrap();
        tree.insert(dir, file).unwrap();

        let copy = tree.duplicate(dir).unwrap();
        let file_copy = tree.get_item(copy, "a.txt").unwrap();
        tree.set_text_content(file_copy, "changed");

        assert_eq!(tree.text_content(file), Some("original"));
        assert_eq!(tree.text_content(file_copy), Some("changed"));
    }

    #[test]
    fn custom_copy_suffix_is_used() {
        let mut tree = Tree::with_settings("root", " (2)").unwrap();
        let root = tree.root();
        let file = tree.new_file("a.txt").unwrap();
        tree.insert(root, file).unwrap();

        let copy = tree.duplicate(file).unwrap();
        assert_eq!(tree.name(copy), Some("a.txt (2)"));
    }

    #[test]
    fn file_payload_accessors() {
        let (mut tree, file) = tree_with_file("a.txt");

        assert_eq!(tree.text_content(file), Some(""));
        assert!(tree.set_text_content(file, "hello"));
        assert_eq!(tree.text_content(file), Some("hello"));

        assert!(tree.source(file).is_none());
        assert!(tree.set_source(file, "image/png"));
        assert_eq!(tree.source(file), Some("image/png"));
        assert_eq!(tree.media_type(file).unwrap().mime(), "image/png");
    }

    #[test]
    fn payload_accessors_reject_wrong_kind() {
        let mut tree = Tree::new();
        let root = tree.root();

        assert!(tree.text_content(root).is_none());
        assert!(!tree.set_text_content(root, "x"));
        assert!(tree.media_type(root).is_none());
        assert_eq!(tree.directory_kind(root), Some(DirectoryKind::Default));

        let file = tree.new_file("a.txt").unwrap();
        assert!(tree.directory_kind(file).is_none());
    }

    #[test]
    fn stale_handles_answer_none() {
        let mut tree = Tree::new();
        let root = tree.root();
        let file = tree.new_file("a.txt").unwrap();
        tree.insert(root, file).unwrap();
        tree.remove(root, "a.txt");

        assert!(!tree.contains(file));
        assert!(tree.name(file).is_none());
        assert!(tree.path(file).is_none());
        assert!(!tree.insert(root, file).unwrap());
    }

    #[test]
    fn get_item_normalises_unicode_queries() {
        let mut tree = Tree::new();
        let root = tree.root();
        let file = tree.new_file("한글.txt").unwrap();
        tree.insert(root, file).unwrap();

        // Decomposed Jamo spelling of the same name.
        let decomposed = "\u{1112}\u{1161}\u{11ab}\u{1100}\u{1173}\u{11af}.txt";
        assert_eq!(tree.get_item(root, decomposed), Some(file));
    }
}
