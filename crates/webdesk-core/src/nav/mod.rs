//! Navigation logic for WebDesk.
//!
//! This module contains the [`breadcrumb::Breadcrumb`] trail and the
//! tree [`search`] routines (predicate and fuzzy search).

pub mod breadcrumb;
pub mod search;

pub use breadcrumb::Breadcrumb;
pub use search::FuzzyHit;
