//! WebDesk core library — UI-agnostic virtual file-system logic.
//!
//! `webdesk-core` provides the in-memory item tree behind the WebDesk
//! desktop shell. It is intentionally decoupled from any UI framework:
//! the shell (windows, sound, 3D) only calls the operations exposed here
//! and renders the resulting state — directory listings, item paths, and
//! the breadcrumb trail.
//!
//! Everything is single-threaded and fully synchronous; state lives for
//! exactly as long as the [`FileSystem`] value. There is no persistence.
//!
//! # Modules
//!
//! - [`fs`] — The item tree: [`Tree`], [`FileSystem`], item payloads, naming rules.
//! - [`nav`] — Navigation: the [`Breadcrumb`] trail and tree [`nav::search`].
//! - [`config`] — User-facing configuration (TOML-based settings).
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod fs;
pub mod nav;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use fs::item::{DirectoryKind, FileData, ItemKind, MediaType};
pub use fs::name::{validate_name, SEPARATOR};
pub use fs::system::FileSystem;
pub use fs::tree::{ItemId, Tree};
pub use nav::breadcrumb::Breadcrumb;
pub use nav::search::{
    find_all_by_name, find_all_items, find_by_name, find_item, fuzzy_find, FuzzyHit,
};

/// Normalises a string to NFC (composed) form.
///
/// macOS and some browsers hand over NFD (decomposed) strings, which
/// makes Korean Hangul compare as individual Jamo. This helper
/// re-composes them so item names and lookups agree.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
