use super::cancellation_reason::DisplayReasons;
use super::{CancellationReason, Error, ErrorKind};
use crate::keys::primary_key::RedactedPrimaryKey;
use crate::PrimaryKey;
use std::sync::Arc;

/// A write whose condition expression was not met.
///
/// Raised for inserts of an existing key, deletes or updates of a missing item
/// under an existence condition, and transactions where at least one entry
/// failed its condition.
#[derive(Debug)]
pub(super) struct ConflictError {
    /// Key of the item whose condition failed, when known.
    pub(super) key: Option<PrimaryKey>,

    /// Position of the failing entry inside a transaction.
    pub(super) position: Option<usize>,

    /// Per-entry reasons for a cancelled transaction. Empty for single-item
    /// writes.
    pub(super) reasons: Vec<Option<CancellationReason>>,

    pub(super) source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl core::fmt::Display for ConflictError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("condition failed")?;

        let mut sep = ": ";
        if let Some(position) = self.position {
            write!(f, "{sep}transaction item {position}")?;
            sep = ", ";
        }
        if let Some(key) = &self.key {
            write!(f, "{sep}key={}", RedactedPrimaryKey(key))?;
        }
        if !self.reasons.is_empty() {
            write!(f, " (reasons: {})", DisplayReasons(&self.reasons))?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error for a single-item write whose condition failed.
    pub fn condition_check_failed() -> Error {
        Error::from(ErrorKind::Conflict(ConflictError {
            key: None,
            position: None,
            reasons: vec![],
            source: None,
        }))
    }

    /// Like [`condition_check_failed`](Error::condition_check_failed), keeping
    /// the client error as the source.
    pub fn condition_check_failed_by(
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(ErrorKind::Conflict(ConflictError {
            key: None,
            position: None,
            reasons: vec![],
            source: Some(Box::new(source)),
        }))
    }

    /// Attaches the key of the conflicting item. Has no effect on other kinds
    /// of errors.
    pub fn with_conflict_key(mut self, key: PrimaryKey) -> Error {
        if let Some(ErrorKind::Conflict(err)) = Arc::get_mut(&mut self.inner) {
            err.key = Some(key);
        }
        self
    }

    /// Key of the item whose condition failed, when known.
    pub fn conflict_key(&self) -> Option<&PrimaryKey> {
        match self.kind() {
            ErrorKind::Conflict(err) => err.key.as_ref(),
            _ => None,
        }
    }

    /// Position of the first transaction entry that failed its condition.
    pub fn conflict_position(&self) -> Option<usize> {
        match self.kind() {
            ErrorKind::Conflict(err) => err.position,
            _ => None,
        }
    }
}
