//! # The error module
//!
//! Every failure of a signing request is returned to the caller as an [`Error`]. The variant
//! tells the caller which phase failed and therefore whether a nonce was spent:
//!
//! * [`Error::Nonce`] happened before the nonce was persisted. Nothing was spent and the whole
//!   operation is safe to retry.
//! * [`Error::Signing`] happened after the nonce was persisted. That nonce is skipped for good and
//!   a retry is assigned the next one.
//!
//! Logic processing the error should only use the structured data, never the messages produced by
//! the [`Display`](std::fmt::Display) implementations.

use {
    crate::codec::MajorType,
    nonced_shared::primitives::Address,
    thiserror::Error,
};

/// Type-erased error of an external collaborator: a storage backend, the bootstrap resolver or
/// the key store.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The result type with its error type set to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Error of a signing request.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create nonce: {0}")]
    Nonce(#[from] NonceError),
    #[error("failed to sign message: {source}")]
    Signing { nonce: u64, source: BoxedError },
}

impl Error {
    /// Whether the request durably consumed a nonce before failing.
    pub const fn nonce_spent(&self) -> bool {
        matches!(self, Self::Signing { .. })
    }
}

/// Error of the nonce assignment phase. None of these spend a nonce.
#[derive(Debug, Error)]
pub enum NonceError {
    #[error("failed to get nonce from bootstrap resolver: {0}")]
    Bootstrap(BoxedError),
    #[error("failed to get nonce from datastore: {0}")]
    StoreRead(BoxedError),
    #[error("failed to parse nonce from datastore: {0}")]
    CorruptEntry(#[from] CorruptEntry),
    #[error("failed to write nonce to datastore: {0}")]
    StoreWrite(BoxedError),
    #[error("account {0} exhausted, no more nonce values remain")]
    Exhausted(Address),
}

/// The stored bytes are not a canonically encoded unsigned integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorruptEntry {
    #[error("entry is empty")]
    Empty,
    #[error("expected unsigned integer, found {0}")]
    UnexpectedMajorType(MajorType),
    #[error("invalid additional info {0} in descriptor")]
    InvalidAdditionalInfo(u8),
    #[error("payload truncated: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("value is not encoded in its shortest form")]
    NonCanonical,
    #[error("malformed value: {0}")]
    Malformed(String),
}
