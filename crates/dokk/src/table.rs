mod batch_get;
pub use batch_get::BatchGetResult;

mod builder;
pub use builder::Builder;

mod connect;

mod query;

mod transaction;

use dokk_core::{
    driver::{operation, Capability, Driver, Operation, Response},
    Attributes, Condition, DeleteArg, EntityKey, EntityRegistry, Error, GetArg, Index, InsertArg,
    Item, OpContext, PartitionKey, PrimaryKey, PutArg, Result, SortKey, UpdateArg,
};

use std::sync::Arc;

/// Handle to one table. Cheap to clone; clones share the driver.
#[derive(Clone, Debug)]
pub struct Table {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    name: String,

    primary_index: Index,

    /// Registered secondary indices
    indices: Vec<Index>,

    timestamps: bool,

    /// When not empty, keys must belong to one of these entities
    entities: EntityRegistry,

    driver: Arc<dyn Driver>,
}

impl Table {
    pub fn builder(table_name: impl Into<String>) -> Builder {
        Builder::new(table_name)
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub fn primary_index(&self) -> &Index {
        &self.shared.primary_index
    }

    pub fn indices(&self) -> &[Index] {
        &self.shared.indices
    }

    pub fn entities(&self) -> &EntityRegistry {
        &self.shared.entities
    }

    pub fn capability(&self) -> &Capability {
        self.shared.driver.capability()
    }

    /// Creates the table with its primary index and every registered
    /// secondary index.
    pub async fn create_table(&self) -> Result<()> {
        tracing::debug!(table = self.name(), indices = self.indices().len(), "create_table");

        self.exec(operation::CreateTable {
            table: self.name().to_string(),
            primary_index: self.primary_index().clone(),
            secondary_indices: self.indices().to_vec(),
        })
        .await?
        .into_empty()
    }

    /// Inserts an item that must not exist yet.
    ///
    /// Fails with a conflict error if an item with the same keys exists; the
    /// stored item is left untouched.
    pub async fn insert(
        &self,
        partition_key: &PartitionKey,
        sort_key: &SortKey,
        attributes: Attributes,
    ) -> Result<()> {
        self.insert_with(InsertArg::new(partition_key, sort_key).attributes(attributes))
            .await
    }

    pub async fn insert_with(&self, arg: InsertArg) -> Result<()> {
        self.put_with(arg.into()).await
    }

    /// Writes an item, replacing any existing item with the same keys unless
    /// `allow_overwrite` is false.
    pub async fn put(
        &self,
        partition_key: &PartitionKey,
        sort_key: &SortKey,
        attributes: Attributes,
        allow_overwrite: bool,
    ) -> Result<()> {
        self.put_with(
            PutArg::new(partition_key, sort_key)
                .attributes(attributes)
                .allow_overwrite(allow_overwrite),
        )
        .await
    }

    pub async fn put_with(&self, arg: PutArg) -> Result<()> {
        self.check_key(arg.key())?;
        tracing::debug!(table = self.name(), entity = arg.key().partition_key().entity(), "put");

        let op = arg.to_operation(&self.cx());
        self.write(op, arg.key()).await
    }

    /// Reads one item. A missing item is `Ok(None)`.
    pub async fn get(
        &self,
        partition_key: &PartitionKey,
        sort_key: &SortKey,
    ) -> Result<Option<Item>> {
        self.get_with(GetArg::new(partition_key, sort_key)).await
    }

    pub async fn get_with(&self, arg: GetArg) -> Result<Option<Item>> {
        self.check_key(arg.key())?;
        tracing::debug!(table = self.name(), entity = arg.key().partition_key().entity(), "get");

        let item = self
            .exec(arg.to_operation(&self.cx()))
            .await?
            .into_item()?;

        Ok(item.map(Item::from_raw))
    }

    /// Deletes an item. Deleting a missing item succeeds unless `condition`
    /// requires otherwise.
    pub async fn delete(
        &self,
        partition_key: &PartitionKey,
        sort_key: &SortKey,
        condition: Option<Condition>,
    ) -> Result<()> {
        let mut arg = DeleteArg::new(partition_key, sort_key);
        if let Some(condition) = condition {
            arg = arg.condition(condition);
        }
        self.delete_with(arg).await
    }

    pub async fn delete_with(&self, arg: DeleteArg) -> Result<()> {
        self.check_key(arg.key())?;
        tracing::debug!(table = self.name(), entity = arg.key().partition_key().entity(), "delete");

        let op = arg.to_operation(&self.cx());
        self.write(op, arg.key()).await
    }

    /// Sets attributes on an item, creating it if it does not exist and the
    /// update carries no condition.
    pub async fn update(&self, arg: UpdateArg) -> Result<()> {
        self.check_key(arg.key())?;
        tracing::debug!(table = self.name(), entity = arg.key().partition_key().entity(), "update");

        let op = arg.to_operation(&self.cx());
        self.write(op, arg.key()).await
    }

    pub async fn update_attributes(
        &self,
        partition_key: &PartitionKey,
        sort_key: &SortKey,
        attributes: Attributes,
    ) -> Result<()> {
        self.update(UpdateArg::new(partition_key, sort_key).attributes(attributes))
            .await
    }

    fn cx(&self) -> OpContext<'_> {
        OpContext {
            table: self.name(),
            primary_index: self.primary_index(),
            timestamps: self.shared.timestamps,
        }
    }

    async fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        self.shared.driver.exec(op.into()).await
    }

    /// Executes a single-item write, attaching `key` to a failed condition.
    async fn write(&self, op: impl Into<Operation>, key: &PrimaryKey) -> Result<()> {
        match self.exec(op).await {
            Ok(response) => response.into_empty(),
            Err(err) if err.is_conflict() => {
                tracing::warn!(
                    table = self.name(),
                    entity = key.partition_key().entity(),
                    "condition failed"
                );
                Err(err.with_conflict_key(key.clone()))
            }
            Err(err) => Err(err),
        }
    }

    /// Rejects keys of unregistered entities when entities were registered.
    fn check_key(&self, key: &PrimaryKey) -> Result<()> {
        let entities = &self.shared.entities;

        if entities.is_empty() {
            return Ok(());
        }

        for entity in [key.partition_key().entity(), key.sort_key().entity()] {
            if !entities.contains(entity) {
                return Err(Error::validation_unknown_entity(entity));
            }
        }

        Ok(())
    }

    /// Resolves an index named by a request to the table's definition of it.
    /// The primary index always resolves to the table's primary index.
    fn resolve_index(&self, index: &Index) -> Result<Index> {
        let Some(name) = index.name() else {
            return Ok(self.primary_index().clone());
        };

        self.indices()
            .iter()
            .find(|registered| registered.name() == Some(name))
            .cloned()
            .ok_or_else(|| Error::validation_unknown_index(name))
    }
}
