#![allow(dead_code)]

use dokk::driver::{async_trait, Capability, Driver, Memory, Operation, Response};
use dokk::{Builder, EntityName, PartitionKey, PrefixSortKey, PrimaryKey, Result, SortKey, Table};

use std::sync::{Arc, Mutex, Once};

#[derive(EntityName)]
pub struct User;

#[derive(EntityName)]
pub struct Group;

#[derive(EntityName)]
pub struct Admin;

#[derive(EntityName)]
pub struct Order;

/// Installs a `fmt` subscriber once per test binary, filtered by `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Wraps the memory driver and records every operation sent to it.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Memory,

    ops_log: Mutex<Vec<Operation>>,
}

impl LoggingDriver {
    pub fn new(inner: Memory) -> LoggingDriver {
        LoggingDriver {
            inner,
            ops_log: Mutex::new(vec![]),
        }
    }

    /// Names of the operations executed so far
    pub fn ops(&self) -> Vec<&'static str> {
        self.ops_log.lock().unwrap().iter().map(Operation::name).collect()
    }

    pub fn clear_ops(&self) {
        self.ops_log.lock().unwrap().clear();
    }

    pub fn memory(&self) -> &Memory {
        &self.inner
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn capability(&self) -> &Capability {
        self.inner.capability()
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        self.ops_log.lock().unwrap().push(op.clone());
        self.inner.exec(op).await
    }
}

pub struct Test {
    pub table: Table,

    pub driver: Arc<LoggingDriver>,
}

impl Test {
    pub fn ops(&self) -> Vec<&'static str> {
        self.driver.ops()
    }

    pub fn item_count(&self) -> usize {
        self.driver.memory().item_count(self.table.name())
    }
}

pub async fn setup() -> Test {
    setup_with(Memory::new(), |_| {}).await
}

/// Builds a table over a fresh memory store and creates it. The operation
/// log starts out empty.
pub async fn setup_with(memory: Memory, configure: impl FnOnce(&mut Builder)) -> Test {
    init_tracing();

    let driver = Arc::new(LoggingDriver::new(memory));

    let mut builder = Table::builder("dokk-test");
    configure(&mut builder);

    let table = builder.build_shared(driver.clone()).unwrap();
    table.create_table().await.unwrap();
    driver.clear_ops();

    Test { table, driver }
}

pub fn pk<E: EntityName>(entity: E, value: &str) -> PartitionKey {
    PartitionKey::new(entity, value).unwrap()
}

pub fn sk<E: EntityName>(entity: E, value: &str) -> SortKey {
    SortKey::new(entity, value).unwrap()
}

pub fn prefix<E: EntityName>(entity: E) -> PrefixSortKey {
    PrefixSortKey::new(entity)
}

pub fn key(partition_key: &PartitionKey, sort_key: &SortKey) -> PrimaryKey {
    PrimaryKey::new(partition_key, sort_key)
}
