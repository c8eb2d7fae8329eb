use super::Error;

/// Error codes the store uses to signal that a request was throttled.
const THROTTLING_CODES: &[&str] = &[
    "ProvisionedThroughputExceededException",
    "ThrottlingException",
    "RequestLimitExceeded",
];

/// A failure reported by the backing store.
///
/// Wraps the underlying client error (AWS SDK, transport or credentials
/// errors) together with the store's error code when one was reported.
#[derive(Debug)]
pub(super) struct StoreError {
    pub(super) code: Option<Box<str>>,
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("store error")?;
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        write!(f, ": {}", self.inner)?;

        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a failure of the backing store.
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Store(StoreError {
            code: None,
            inner: Box::new(err),
        }))
    }

    /// Creates a store error tagged with the store's error code.
    pub fn store_with_code(
        code: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::Store(StoreError {
            code: Some(code.into().into()),
            inner: Box::new(err),
        }))
    }

    /// The error code reported by the store, if any.
    pub fn store_code(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::Store(err) => err.code.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if the store rejected the request because of throttling,
    /// either directly or as the reason a transaction was cancelled.
    ///
    /// dokk never retries; callers decide on their own backoff.
    pub fn is_throttling(&self) -> bool {
        use super::CancellationReason::*;

        if let Some(code) = self.store_code() {
            return THROTTLING_CODES.contains(&code);
        }

        self.has_cancellation_reason(&ProvisionedThroughputExceeded)
            || self.has_cancellation_reason(&ThrottlingError)
    }
}
