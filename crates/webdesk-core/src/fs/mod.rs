//! File system abstractions for WebDesk.
//!
//! This module provides the item tree itself: naming rules ([`name`]),
//! item payloads ([`item`]), the arena-backed [`tree::Tree`], and the
//! [`system::FileSystem`] facade with its navigation cursor.

pub mod item;
pub mod name;
pub mod system;
pub mod tree;

pub use item::{DirectoryKind, FileData, ItemKind, MediaType};
pub use system::FileSystem;
pub use tree::{ItemId, Tree};
