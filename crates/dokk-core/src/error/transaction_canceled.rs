use super::cancellation_reason::DisplayReasons;
use super::conflict::ConflictError;
use super::{CancellationReason, Error, ErrorKind};

/// A transaction the store cancelled for reasons other than a failed
/// condition, such as a concurrent transaction or throttling.
#[derive(Debug)]
pub(super) struct TransactionCanceledError {
    pub(super) reasons: Vec<Option<CancellationReason>>,
    pub(super) source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl core::fmt::Display for TransactionCanceledError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "store error: transaction cancelled (reasons: {})",
            DisplayReasons(&self.reasons)
        )
    }
}

impl Error {
    /// Creates an error for a cancelled transaction from its per-entry
    /// reasons.
    ///
    /// When any entry failed its condition, the result is a conflict
    /// positioned at the first such entry. Otherwise the cancellation is a
    /// store error.
    pub fn transaction_canceled(reasons: Vec<Option<CancellationReason>>) -> Error {
        Error::transaction_canceled_inner(reasons, None)
    }

    /// Like [`transaction_canceled`](Error::transaction_canceled), keeping the
    /// client error as the source.
    pub fn transaction_canceled_by(
        reasons: Vec<Option<CancellationReason>>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::transaction_canceled_inner(reasons, Some(Box::new(source)))
    }

    fn transaction_canceled_inner(
        reasons: Vec<Option<CancellationReason>>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Error {
        let position = reasons
            .iter()
            .position(|r| matches!(r, Some(CancellationReason::ConditionalCheckFailed)));

        match position {
            Some(position) => Error::from(ErrorKind::Conflict(ConflictError {
                key: None,
                position: Some(position),
                reasons,
                source,
            })),
            None => Error::from(ErrorKind::TransactionCanceled(TransactionCanceledError {
                reasons,
                source,
            })),
        }
    }
}
