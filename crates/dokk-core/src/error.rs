mod cancellation_reason;
mod conflict;
mod invalid_connection_url;
mod invalid_response;
mod store;
mod transaction_canceled;
mod validation;

pub use cancellation_reason::CancellationReason;

use conflict::ConflictError;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_response::InvalidResponse;
use std::sync::Arc;
use store::StoreError;
use transaction_canceled::TransactionCanceledError;
use validation::ValidationError;

/// An error that can occur in dokk.
///
/// Errors fall into four classes:
///
/// - **validation** errors are raised locally, before any request reaches the
///   store ([`is_validation`](Error::is_validation)).
/// - **conflict** errors report a condition expression that was not met,
///   either on a single-item write or inside a transaction
///   ([`is_conflict`](Error::is_conflict)).
/// - **store** errors wrap every other failure reported by the backing store
///   ([`is_store`](Error::is_store)). They are never retried by dokk.
/// - configuration errors, such as an unsupported connection URL.
///
/// A missing item is not an error: `Table::get` returns `Ok(None)`.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.inner
    }

    /// Returns `true` if this error was raised before any store request was
    /// made, because an argument was malformed.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation(_))
    }

    /// Returns `true` if the store rejected a write because its condition was
    /// not met.
    pub fn is_conflict(&self) -> bool {
        matches!(self.kind(), ErrorKind::Conflict(_))
    }

    /// Returns `true` if the failure originated from the backing store
    /// (throttling, transport failures, permissions, malformed responses, or a
    /// transaction cancelled for reasons other than a failed condition).
    pub fn is_store(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Store(_) | ErrorKind::TransactionCanceled(_) | ErrorKind::InvalidResponse(_)
        )
    }

    /// Per-entry cancellation reasons of a failed transaction, in the order the
    /// entries were submitted. `None` entries did not cause the cancellation.
    pub fn cancellation_reasons(&self) -> Option<&[Option<CancellationReason>]> {
        match self.kind() {
            ErrorKind::Conflict(err) if !err.reasons.is_empty() => Some(&err.reasons),
            ErrorKind::TransactionCanceled(err) => Some(&err.reasons),
            _ => None,
        }
    }

    /// Returns `true` if any entry of a cancelled transaction failed with the
    /// given reason.
    pub fn has_cancellation_reason(&self, reason: &CancellationReason) -> bool {
        self.cancellation_reasons()
            .map(|reasons| reasons.iter().flatten().any(|r| r == reason))
            .unwrap_or(false)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Store(err) => Some(err.inner.as_ref()),
            ErrorKind::Conflict(err) => err
                .source
                .as_deref()
                .map(|source| source as &(dyn std::error::Error + 'static)),
            ErrorKind::TransactionCanceled(err) => err
                .source
                .as_deref()
                .map(|source| source as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", self.kind()).finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Validation(ValidationError),
    Conflict(ConflictError),
    Store(StoreError),
    TransactionCanceled(TransactionCanceledError),
    InvalidResponse(InvalidResponse),
    InvalidConnectionUrl(InvalidConnectionUrl),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Validation(err) => core::fmt::Display::fmt(err, f),
            Conflict(err) => core::fmt::Display::fmt(err, f),
            Store(err) => core::fmt::Display::fmt(err, f),
            TransactionCanceled(err) => core::fmt::Display::fmt(err, f),
            InvalidResponse(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PartitionKey, PrimaryKey, SortKey};

    struct User;

    impl crate::EntityName for User {
        const NAME: &'static str = "USER";
    }

    #[test]
    fn error_size() {
        // Error stays at one word
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>()
        );
    }

    #[test]
    fn delimiter_in_value() {
        let err = Error::validation_delimiter_in_value("USER");
        assert!(err.is_validation());
        assert!(!err.is_store());
        assert_eq!(
            err.to_string(),
            "validation failed: value for entity `USER` contains the reserved `#` delimiter"
        );
    }

    #[test]
    fn too_many_transact_items() {
        let err = Error::validation_too_many_transact_items(101, 100);
        assert_eq!(
            err.to_string(),
            "validation failed: transaction has 101 items (maximum: 100)"
        );
    }

    #[test]
    fn condition_check_failed_without_key() {
        let err = Error::condition_check_failed();
        assert!(err.is_conflict());
        assert!(err.conflict_key().is_none());
        assert!(err.conflict_position().is_none());
        assert_eq!(err.to_string(), "condition failed");
    }

    #[test]
    fn conflict_key_is_redacted_in_display() {
        let key = PrimaryKey::new(
            &PartitionKey::new(User, "alice").unwrap(),
            &SortKey::new(User, "alice").unwrap(),
        );
        let err = Error::condition_check_failed().with_conflict_key(key.clone());

        assert_eq!(err.conflict_key(), Some(&key));
        assert_eq!(err.to_string(), "condition failed: key=(USER#…, USER#…)");
        assert!(!err.to_string().contains("alice"));
    }

    #[test]
    fn transaction_with_failed_condition_is_a_conflict() {
        let err = Error::transaction_canceled(vec![
            None,
            Some(CancellationReason::ConditionalCheckFailed),
        ]);

        assert!(err.is_conflict());
        assert_eq!(err.conflict_position(), Some(1));
        assert!(err.has_cancellation_reason(&CancellationReason::ConditionalCheckFailed));
        assert_eq!(
            err.to_string(),
            "condition failed: transaction item 1 (reasons: [None, ConditionalCheckFailed])"
        );
    }

    #[test]
    fn transaction_with_other_reasons_is_a_store_error() {
        let err = Error::transaction_canceled(vec![
            Some(CancellationReason::TransactionConflict),
            None,
        ]);

        assert!(err.is_store());
        assert!(!err.is_conflict());
        assert!(err.conflict_position().is_none());
        assert_eq!(
            err.cancellation_reasons(),
            Some(&[Some(CancellationReason::TransactionConflict), None][..])
        );
    }

    #[test]
    fn store_error_keeps_source_and_code() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline elapsed");
        let err = Error::store_with_code("ProvisionedThroughputExceededException", io);

        assert!(err.is_store());
        assert!(err.is_throttling());
        assert_eq!(
            err.store_code(),
            Some("ProvisionedThroughputExceededException")
        );
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(
            err.to_string(),
            "store error (ProvisionedThroughputExceededException): deadline elapsed"
        );
    }

    #[test]
    fn invalid_response_is_a_store_error() {
        let err = Error::invalid_response("expected a query page");
        assert!(err.is_store());
        assert_eq!(
            err.to_string(),
            "invalid response from store: expected a query page"
        );
    }
}
