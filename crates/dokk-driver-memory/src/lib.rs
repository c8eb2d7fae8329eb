//! An in-process driver with the semantics of a single DynamoDB table.
//!
//! Conditions are evaluated atomically under one lock, queries scan a
//! `begins_with`/range condition in sort-key order and paginate with
//! `LastEvaluatedKey`, and transactions either apply every entry or report a
//! cancellation reason per entry.

mod error;
mod op;
mod table;

use error::MemoryError;
use table::Table;

use dokk_core::{
    async_trait,
    driver::{operation::Operation, Capability, Driver, Response},
    Result,
};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use url::Url;

/// Items returned per query page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Debug)]
pub struct Memory {
    capability: Capability,

    /// Maximum number of items in one query page
    page_size: usize,

    /// Maximum number of keys processed by one batch get; the rest are
    /// returned as unprocessed
    batch_get_capacity: usize,

    store: Mutex<Store>,
}

#[derive(Debug, Default)]
struct Store {
    tables: HashMap<String, Table>,
}

impl Memory {
    pub fn new() -> Self {
        Self {
            capability: Capability::DYNAMODB,
            page_size: DEFAULT_PAGE_SIZE,
            batch_get_capacity: Capability::DYNAMODB.max_batch_get_items,
            store: Mutex::new(Store::default()),
        }
    }

    /// Parses a `memory://` connection URL. The optional `page_size` query
    /// parameter sets the query page size.
    pub fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(dokk_core::Error::store)?;

        if url.scheme() != "memory" {
            return Err(dokk_core::Error::invalid_connection_url(format!(
                "connection URL does not have a `memory` scheme; url={url}"
            )));
        }

        let mut driver = Self::new();

        for (name, value) in url.query_pairs() {
            match &*name {
                "page_size" => {
                    let page_size = value.parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(
                        || {
                            dokk_core::Error::invalid_connection_url(format!(
                                "`page_size` must be a positive integer; got `{value}`"
                            ))
                        },
                    )?;
                    driver = driver.with_page_size(page_size);
                }
                _ => {
                    return Err(dokk_core::Error::invalid_connection_url(format!(
                        "unknown parameter `{name}` for the memory driver"
                    )))
                }
            }
        }

        Ok(driver)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_batch_get_capacity(mut self, capacity: usize) -> Self {
        self.batch_get_capacity = capacity;
        self
    }

    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capability = capability;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items currently stored in `table`, for tests.
    pub fn item_count(&self, table: &str) -> usize {
        self.lock()
            .tables
            .get(table)
            .map(|table| table.len())
            .unwrap_or(0)
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // The store is never left half-written, so a poisoned lock is safe
        // to reuse.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Driver for Memory {
    fn capability(&self) -> &Capability {
        &self.capability
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        tracing::trace!(op = op.name(), "memory driver request");

        let mut store = self.lock();

        match op {
            Operation::CreateTable(op) => store.create_table(op),
            Operation::Put(op) => store.put(op),
            Operation::Get(op) => store.get(op),
            Operation::Delete(op) => store.delete(op),
            Operation::Update(op) => store.update(op),
            Operation::Query(op) => store.query(op, self.page_size),
            Operation::BatchGet(op) => store.batch_get(op, self.batch_get_capacity),
            Operation::TransactWrite(op) => store.transact_write(op),
        }
    }
}

impl Store {
    fn table(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| MemoryError::resource_not_found(name))
    }

    fn table_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| MemoryError::resource_not_found(name))
    }
}
