//! The file-system facade consumed by the desktop shell.
//!
//! [`FileSystem`] owns the [`Tree`] plus a navigation cursor: the current
//! directory and the breadcrumb trail leading to it from the root. Most
//! mutation is delegated to the current directory; navigation is a small
//! state machine over `(current_directory, breadcrumb)` whose initial
//! state is `(root, [root])`.
//!
//! Expected misuse — missing names, unresolvable paths, stepping above
//! the root — is reported as `None`/`false` and never mutates state.
//! Violated invariants (bad names, rename collisions, cycles) surface as
//! [`CoreError`](crate::error::CoreError).

use crate::config::settings::Config;
use crate::error::CoreResult;
use crate::fs::item::DirectoryKind;
use crate::fs::name::SEPARATOR;
use crate::fs::tree::{ItemId, Tree};
use crate::nav::breadcrumb::Breadcrumb;
use crate::nav::search::{self, FuzzyHit};
use crate::nfc_string;

/// An in-memory file system with a current-directory cursor.
///
/// Created once per session; state lives exactly as long as the value.
pub struct FileSystem {
    tree: Tree,
    breadcrumb: Breadcrumb,
    fuzzy_max_results: usize,
}

impl FileSystem {
    /// Creates a file system with a fresh root and the cursor at root.
    pub fn new() -> Self {
        let tree = Tree::new();
        let breadcrumb = Breadcrumb::new(tree.root());
        Self {
            tree,
            breadcrumb,
            fuzzy_max_results: Config::default().search.fuzzy_max_results,
        }
    }

    /// Creates a file system using the given configuration.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidName`](crate::error::CoreError::InvalidName)
    /// if the configured root name is invalid.
    pub fn with_config(config: &Config) -> CoreResult<Self> {
        let tree = Tree::with_settings(&config.general.root_name, &config.general.copy_suffix)?;
        let breadcrumb = Breadcrumb::new(tree.root());
        Ok(Self {
            tree,
            breadcrumb,
            fuzzy_max_results: config.search.fuzzy_max_results,
        })
    }

    /// The underlying tree, for read access.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The root directory.
    pub fn root(&self) -> ItemId {
        self.tree.root()
    }

    /// The current directory.
    pub fn current_directory(&self) -> ItemId {
        self.breadcrumb.current()
    }

    /// The breadcrumb trail from the root to the current directory.
    pub fn breadcrumb(&self) -> &Breadcrumb {
        &self.breadcrumb
    }

    /// The current directory's full path.
    pub fn current_path(&self) -> String {
        self.tree
            .path(self.current_directory())
            .unwrap_or_default()
    }

    /// The current directory's children, in insertion order.
    pub fn list(&self) -> Vec<ItemId> {
        self.tree.children(self.current_directory())
    }

    /// Creates an empty file in the current directory.
    ///
    /// Returns `Ok(None)` when the name is already taken.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidName`](crate::error::CoreError::InvalidName)
    /// if the name fails validation.
    pub fn create_file(&mut self, name: &str) -> CoreResult<Option<ItemId>> {
        self.create_file_with(name, "", None)
    }

    /// Creates a file with text content and optional source metadata in
    /// the current directory.
    pub fn create_file_with(
        &mut self,
        name: &str,
        text: &str,
        source: Option<&str>,
    ) -> CoreResult<Option<ItemId>> {
        let file = self.tree.new_file_with(name, text, source)?;
        self.attach_created(file)
    }

    /// Creates a directory of the default kind in the current directory.
    pub fn create_directory(&mut self, name: &str) -> CoreResult<Option<ItemId>> {
        self.create_directory_with(name, DirectoryKind::Default)
    }

    /// Creates a directory of the given kind in the current directory.
    pub fn create_directory_with(
        &mut self,
        name: &str,
        kind: DirectoryKind,
    ) -> CoreResult<Option<ItemId>> {
        let dir = self.tree.new_directory_with(name, kind)?;
        self.attach_created(dir)
    }

    fn attach_created(&mut self, item: ItemId) -> CoreResult<Option<ItemId>> {
        if self.tree.insert(self.current_directory(), item)? {
            Ok(Some(item))
        } else {
            self.tree.release(item);
            Ok(None)
        }
    }

    /// Inserts an existing item into the current directory.
    ///
    /// Delegates to [`Tree::insert`]; see there for the failure modes.
    pub fn insert_item(&mut self, item: ItemId) -> CoreResult<bool> {
        self.tree.insert(self.current_directory(), item)
    }

    /// Looks up an item in the current directory by name.
    pub fn get_item(&self, name: &str) -> Option<ItemId> {
        self.tree.get_item(self.current_directory(), name)
    }

    /// Returns `true` if the current directory has an item named `name`.
    pub fn has_item(&self, name: &str) -> bool {
        self.tree.has_item(self.current_directory(), name)
    }

    /// Removes the named item from the current directory, freeing its
    /// subtree. Returns `false` when no such item exists.
    pub fn remove_item(&mut self, name: &str) -> bool {
        self.tree.remove(self.current_directory(), name)
    }

    /// Renames an item in the current directory.
    ///
    /// Returns `Ok(None)` when `old_name` is not present.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidName`](crate::error::CoreError::InvalidName)
    /// or [`CoreError::NameConflict`](crate::error::CoreError::NameConflict)
    /// per the naming rules.
    pub fn rename_item(&mut self, old_name: &str, new_name: &str) -> CoreResult<Option<ItemId>> {
        let Some(item) = self.get_item(old_name) else {
            return Ok(None);
        };
        self.tree.rename(item, new_name)?;
        Ok(Some(item))
    }

    /// Deep-copies the named item into the current directory.
    ///
    /// Returns the clone, or `None` when the item is missing or the
    /// clone's name collides with an existing sibling — in the collision
    /// case the clone is discarded rather than left orphaned.
    pub fn copy_item(&mut self, name: &str) -> Option<ItemId> {
        let item = self.get_item(name)?;
        let clone = self.tree.duplicate(item)?;
        match self.tree.insert(self.current_directory(), clone) {
            Ok(true) => Some(clone),
            Ok(false) | Err(_) => {
                tracing::warn!("copy of {:?} dropped: name already taken", name);
                self.tree.release(clone);
                None
            }
        }
    }

    /// Resolves `path` and makes the directory it names current.
    ///
    /// On success the breadcrumb is rebuilt from the live parent chain
    /// and both cursor and trail are replaced atomically. On failure —
    /// unresolvable path, or a path naming a file — returns `None` and
    /// leaves the cursor untouched.
    pub fn open_directory(&mut self, path: &str) -> Option<ItemId> {
        let dir = self.directory_from_path(path)?;

        let mut trail = vec![dir];
        let mut current = dir;
        while let Some(parent) = self.tree.parent(current) {
            trail.push(parent);
            current = parent;
        }
        trail.reverse();

        self.breadcrumb = Breadcrumb::from_trail(trail)?;
        tracing::debug!("opened directory {}", self.current_path());
        Some(dir)
    }

    /// Walks up `steps` parent links from the current directory.
    ///
    /// Returns `None` — leaving the cursor untouched — when `steps` is
    /// zero or would climb above the root.
    pub fn go_back(&mut self, steps: usize) -> Option<ItemId> {
        let (breadcrumb, dir) = self.breadcrumb.go_up(steps)?;
        self.breadcrumb = breadcrumb;
        tracing::debug!("went back to {}", self.current_path());
        Some(dir)
    }

    /// Jumps back to the last directory named `name` on the breadcrumb,
    /// excluding the current one. Returns `None` when no such entry
    /// exists.
    pub fn go_back_to_directory(&mut self, name: &str) -> Option<ItemId> {
        let query = nfc_string(name);
        let trail = self.breadcrumb.items();
        let index = trail[..trail.len() - 1]
            .iter()
            .rposition(|&id| self.tree.name(id) == Some(query.as_str()))?;

        let (breadcrumb, dir) = self.breadcrumb.up_to(index)?;
        self.breadcrumb = breadcrumb;
        tracing::debug!("went back to {}", self.current_path());
        Some(dir)
    }

    /// Finds the first item under the root matching `predicate`.
    pub fn find_item<P>(&self, predicate: P) -> Option<ItemId>
    where
        P: FnMut(&Tree, ItemId) -> bool,
    {
        search::find_item(&self.tree, self.root(), predicate)
    }

    /// Finds the first item named `name` under the root.
    pub fn find_by_name(&self, name: &str) -> Option<ItemId> {
        search::find_by_name(&self.tree, self.root(), name)
    }

    /// Collects every item under the root matching `predicate`.
    pub fn find_all_items<P>(&self, predicate: P) -> Vec<ItemId>
    where
        P: FnMut(&Tree, ItemId) -> bool,
    {
        search::find_all_items(&self.tree, self.root(), predicate)
    }

    /// Fuzzy-matches `query` against every item name under the root,
    /// best hits first, truncated to the configured maximum.
    pub fn fuzzy_find(&self, query: &str) -> Vec<FuzzyHit> {
        let mut hits = search::fuzzy_find(&self.tree, self.root(), query);
        hits.truncate(self.fuzzy_max_results);
        hits
    }

    /// Moves the named item from the current directory into the
    /// directory `dest_path` resolves to.
    ///
    /// Returns `Ok(Some(destination))` on success; `Ok(None)` without
    /// mutation when the item or the destination cannot be resolved, or
    /// when the destination already has an item with that name.
    ///
    /// # Errors
    ///
    /// [`CoreError::Cycle`](crate::error::CoreError::Cycle) when the
    /// move would place a directory inside its own subtree.
    pub fn move_item_to(&mut self, name: &str, dest_path: &str) -> CoreResult<Option<ItemId>> {
        let Some(item) = self.get_item(name) else {
            return Ok(None);
        };
        let Some(dest) = self.directory_from_path(dest_path) else {
            return Ok(None);
        };
        if self.tree.insert(dest, item)? {
            tracing::debug!(
                "moved {:?} to {}",
                name,
                self.tree.path(dest).unwrap_or_default()
            );
            Ok(Some(dest))
        } else {
            Ok(None)
        }
    }

    /// Resolves a path string to a directory.
    ///
    /// Grammar: `"/"`, the root name, or the root name plus `/` resolve
    /// to the root; `"."` and `"./"` to the current directory. Any other
    /// string starts from the root when prefixed with `"<root>/"` and
    /// from the current directory otherwise; each remaining segment must
    /// name a directory.
    fn directory_from_path(&self, path: &str) -> Option<ItemId> {
        let root = self.root();
        let cursor = self.current_directory();
        let root_name = self.tree.name(root)?;

        if path == "/" || path == root_name || path == format!("{root_name}{SEPARATOR}") {
            return Some(root);
        }
        if path == "." || path == "./" {
            return Some(cursor);
        }

        let anchor = format!("{root_name}{SEPARATOR}");
        let (start, rest) = match path.strip_prefix(&anchor) {
            Some(rest) => (root, rest),
            None => (cursor, path),
        };

        let mut current = start;
        for segment in rest.split(SEPARATOR) {
            if segment.is_empty() {
                return None;
            }
            current = self.tree.get_item(current, segment)?;
            if !self.tree.is_directory(current) {
                return None;
            }
        }
        Some(current)
    }
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}
