use crate::error::MemoryError;

use dokk_core::{Attributes, Index, Result, Value};

use std::collections::BTreeMap;

/// `(partition, sort)` values of an item's primary key.
pub(crate) type ItemKey = (String, String);

#[derive(Debug)]
pub(crate) struct Table {
    pub(crate) primary_index: Index,

    pub(crate) secondary_indices: Vec<Index>,

    pub(crate) items: BTreeMap<ItemKey, Attributes>,
}

impl Table {
    pub(crate) fn new(primary_index: Index, secondary_indices: Vec<Index>) -> Table {
        Table {
            primary_index,
            secondary_indices,
            items: BTreeMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Reads the primary key from a key attribute map.
    pub(crate) fn key_of(&self, attributes: &Attributes) -> Result<ItemKey> {
        index_key(&self.primary_index, attributes).ok_or_else(|| {
            MemoryError::validation(
                "the provided key element does not match the schema",
            )
        })
    }

    /// Resolves the index a query targets.
    pub(crate) fn index(&self, index: &Index) -> Result<&Index> {
        match index.name() {
            None => Ok(&self.primary_index),
            Some(name) => self
                .secondary_indices
                .iter()
                .find(|i| i.name() == Some(name))
                .ok_or_else(|| {
                    MemoryError::validation(format!(
                        "the table does not have the specified index: {name}"
                    ))
                }),
        }
    }

    /// The attributes that identify an item's position in `index`: the
    /// index key attributes plus the table's primary key attributes.
    pub(crate) fn position_key(&self, index: &Index, item: &Attributes) -> Attributes {
        let mut key = Attributes::new();

        for attr in [
            index.partition_attr(),
            index.sort_attr(),
            self.primary_index.partition_attr(),
            self.primary_index.sort_attr(),
        ] {
            if let Some(value) = item.get(attr) {
                key.insert(attr.to_string(), value.clone());
            }
        }

        key
    }
}

/// Reads the string key attributes of `index`. `None` when either is missing
/// or not a string.
pub(crate) fn index_key(index: &Index, attributes: &Attributes) -> Option<ItemKey> {
    let partition = attributes.get(index.partition_attr()).and_then(Value::as_str)?;
    let sort = attributes.get(index.sort_attr()).and_then(Value::as_str)?;
    Some((partition.to_string(), sort.to_string()))
}

/// Keeps only the projected attributes. `None` keeps everything.
pub(crate) fn project(item: &Attributes, projection: Option<&[String]>) -> Attributes {
    match projection {
        None => item.clone(),
        Some(projection) => item
            .iter()
            .filter(|(name, _)| projection.contains(*name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
    }
}
