//! Errors returned by [`Tree`][crate::Tree] operations.
//!
//! Almost every operation on a tree is total: inserting a duplicate or removing a value that
//! isn't there simply does nothing. The only operations that can fail are the extremum queries
//! ([`Tree::min`][crate::Tree::min] and [`Tree::max`][crate::Tree::max]) which have nothing to
//! return when the tree is empty.

use thiserror::Error;

/// Errors that can occur when querying a [`Tree`][crate::Tree].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The tree holds no values so there is no minimum or maximum to return.
    #[error("tree is empty")]
    EmptyContainer,
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
