/// Why the store cancelled one entry of a transactional write.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CancellationReason {
    /// The entry's condition expression evaluated to false.
    ConditionalCheckFailed,

    /// An item collection grew past the store's size limit.
    ItemCollectionSizeLimitExceeded,

    /// Another transaction was in progress on the same item.
    TransactionConflict,

    /// The request rate exceeded the table's provisioned throughput.
    ProvisionedThroughputExceeded,

    /// The request was throttled.
    ThrottlingError,

    /// The entry itself was rejected as invalid by the store.
    ValidationError,

    /// A code this crate does not know about.
    Other(String),
}

impl CancellationReason {
    /// Parses a cancellation code as reported by the store.
    ///
    /// Returns `None` for the `"None"` code, which marks an entry that did not
    /// contribute to the cancellation.
    pub fn from_code(code: &str) -> Option<CancellationReason> {
        use CancellationReason::*;

        let reason = match code {
            "None" | "" => return None,
            "ConditionalCheckFailed" => ConditionalCheckFailed,
            "ItemCollectionSizeLimitExceeded" => ItemCollectionSizeLimitExceeded,
            "TransactionConflict" => TransactionConflict,
            "ProvisionedThroughputExceeded" => ProvisionedThroughputExceeded,
            "ThrottlingError" => ThrottlingError,
            "ValidationError" => ValidationError,
            other => Other(other.to_string()),
        };

        Some(reason)
    }

    /// The code the store uses for this reason.
    pub fn code(&self) -> &str {
        use CancellationReason::*;

        match self {
            ConditionalCheckFailed => "ConditionalCheckFailed",
            ItemCollectionSizeLimitExceeded => "ItemCollectionSizeLimitExceeded",
            TransactionConflict => "TransactionConflict",
            ProvisionedThroughputExceeded => "ProvisionedThroughputExceeded",
            ThrottlingError => "ThrottlingError",
            ValidationError => "ValidationError",
            Other(code) => code,
        }
    }
}

impl core::fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// Formats a reasons list as `[None, ConditionalCheckFailed]`.
pub(super) struct DisplayReasons<'a>(pub(super) &'a [Option<CancellationReason>]);

impl core::fmt::Display for DisplayReasons<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("[")?;
        for (i, reason) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match reason {
                Some(reason) => core::fmt::Display::fmt(reason, f)?,
                None => f.write_str("None")?,
            }
        }
        f.write_str("]")
    }
}
