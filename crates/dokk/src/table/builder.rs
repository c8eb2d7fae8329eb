use super::{connect, Shared, Table};

use dokk_core::{driver::Driver, EntityName, EntityRegistry, Error, Index, Result};

use std::sync::Arc;

/// Configures a [`Table`].
///
/// The primary index defaults to `PK`/`SK` and the inverse index `GSI_1` is
/// registered unless the indices are replaced with
/// [`indices`](Builder::indices).
#[derive(Debug)]
pub struct Builder {
    table_name: String,

    primary_index: Index,

    indices: Vec<Index>,

    timestamps: bool,

    entities: EntityRegistry,

    /// First registration failure, reported by `build`
    error: Option<Error>,
}

impl Builder {
    pub(super) fn new(table_name: impl Into<String>) -> Builder {
        Builder {
            table_name: table_name.into(),
            primary_index: Index::primary(),
            indices: vec![Index::inverse()],
            timestamps: true,
            entities: EntityRegistry::new(),
            error: None,
        }
    }

    pub fn primary_index(&mut self, index: Index) -> &mut Self {
        self.primary_index = index;
        self
    }

    /// Registers a secondary index, replacing one with the same name.
    pub fn index(&mut self, index: Index) -> &mut Self {
        match self
            .indices
            .iter_mut()
            .find(|registered| registered.name() == index.name())
        {
            Some(registered) => *registered = index,
            None => self.indices.push(index),
        }
        self
    }

    /// Replaces every registered secondary index.
    pub fn indices(&mut self, indices: impl IntoIterator<Item = Index>) -> &mut Self {
        self.indices.clear();
        for index in indices {
            self.index(index);
        }
        self
    }

    /// Whether writes set `CreatedAt` and `UpdatedAt`. Defaults to true.
    pub fn timestamps(&mut self, timestamps: bool) -> &mut Self {
        self.timestamps = timestamps;
        self
    }

    /// Registers an entity. Once any entity is registered, the table rejects
    /// keys of unregistered entities.
    pub fn entity<E: EntityName>(&mut self) -> &mut Self {
        if let Err(err) = self.entities.register::<E>() {
            self.error.get_or_insert(err);
        }
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Table> {
        let driver = connect::connect(url).await?;
        self.build_shared(driver)
    }

    pub fn build(&mut self, driver: impl Driver) -> Result<Table> {
        self.build_shared(Arc::new(driver))
    }

    /// Like [`build`](Builder::build), for a driver the caller keeps a handle
    /// to.
    pub fn build_shared(&mut self, driver: Arc<dyn Driver>) -> Result<Table> {
        if let Some(err) = self.error.clone() {
            return Err(err);
        }

        if self.table_name.is_empty() {
            return Err(Error::validation_empty_table_name());
        }

        for index in &self.indices {
            if index.is_primary() {
                return Err(Error::validation_invalid_index(
                    "secondary indices must be named",
                ));
            }
        }

        tracing::debug!(
            table = %self.table_name,
            indices = self.indices.len(),
            entities = self.entities.entities().count(),
            "table configured"
        );

        Ok(Table {
            shared: Arc::new(Shared {
                name: self.table_name.clone(),
                primary_index: self.primary_index.clone(),
                indices: self.indices.clone(),
                timestamps: self.timestamps,
                entities: self.entities.clone(),
                driver,
            }),
        })
    }
}
