mod capability;
pub use capability::Capability;

mod response;
pub use response::{BatchGetPage, Page, Response};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// A backing store for a single table.
///
/// Drivers translate each [`Operation`] into one request against the store
/// and classify failures: a failed condition on a single-item write is
/// [`Error::condition_check_failed`](crate::Error::condition_check_failed), a
/// cancelled transaction is
/// [`Error::transaction_canceled`](crate::Error::transaction_canceled), and
/// everything else is a store error. Drivers never retry.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the store's limits.
    fn capability(&self) -> &Capability;

    /// Execute a single request
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}
