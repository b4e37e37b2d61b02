//! Defines the app level error type.
//!
//! The error surface is narrow on purpose: input validation happens in the
//! add endpoint before the core is ever called, and deleting an id that does
//! not exist is a no-op rather than an error.

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Could not acquire the ledger lock because a previous handler panicked
    /// while holding it.
    #[error("could not acquire the ledger lock")]
    LedgerLockError,

    /// A delete request carried an element id that does not look like
    /// `inc-<id>` or `exp-<id>`.
    ///
    /// The delete endpoint maps this to the same no-op path as an unknown id,
    /// so it never reaches the client as an error.
    #[error("\"{0}\" is not a valid item id")]
    InvalidItemSlug(String),
}
