use crate::{Error, Result};
use std::borrow::Cow;

/// The index an operation targets, with the names of its key attributes.
///
/// The primary index has no name and maps to the table's own key attributes.
/// Secondary indices are addressed by name and may swap or rename the
/// attributes; [`Index::INVERSE`] partitions on `SK` and sorts on `PK`, so
/// relations stored as `(PK=GROUP#g, SK=USER#u)` can be read from either side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Index {
    name: Option<Cow<'static, str>>,
    partition_attr: Cow<'static, str>,
    sort_attr: Cow<'static, str>,
}

impl Index {
    /// The table's primary key: `PK` / `SK`.
    pub const PRIMARY: Index = Index {
        name: None,
        partition_attr: Cow::Borrowed("PK"),
        sort_attr: Cow::Borrowed("SK"),
    };

    /// Global secondary index `GSI_1`: `SK` / `PK`.
    pub const INVERSE: Index = Index {
        name: Some(Cow::Borrowed("GSI_1")),
        partition_attr: Cow::Borrowed("SK"),
        sort_attr: Cow::Borrowed("PK"),
    };

    pub fn primary() -> Index {
        Index::PRIMARY
    }

    pub fn inverse() -> Index {
        Index::INVERSE
    }

    /// A primary index with custom key attribute names.
    pub fn primary_with(
        partition_attr: impl Into<String>,
        sort_attr: impl Into<String>,
    ) -> Result<Index> {
        let (partition_attr, sort_attr) = check_attrs(partition_attr.into(), sort_attr.into())?;

        Ok(Index {
            name: None,
            partition_attr: Cow::Owned(partition_attr),
            sort_attr: Cow::Owned(sort_attr),
        })
    }

    /// A named secondary index.
    pub fn secondary(
        name: impl Into<String>,
        partition_attr: impl Into<String>,
        sort_attr: impl Into<String>,
    ) -> Result<Index> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::validation_invalid_index(
                "secondary index name is empty",
            ));
        }

        let (partition_attr, sort_attr) = check_attrs(partition_attr.into(), sort_attr.into())?;

        Ok(Index {
            name: Some(Cow::Owned(name)),
            partition_attr: Cow::Owned(partition_attr),
            sort_attr: Cow::Owned(sort_attr),
        })
    }

    /// The index name, `None` for the primary index.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn partition_attr(&self) -> &str {
        &self.partition_attr
    }

    pub fn sort_attr(&self) -> &str {
        &self.sort_attr
    }

    pub fn is_primary(&self) -> bool {
        self.name.is_none()
    }

    /// Name used in logs and error messages.
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("primary")
    }
}

impl Default for Index {
    fn default() -> Index {
        Index::PRIMARY
    }
}

fn check_attrs(partition_attr: String, sort_attr: String) -> Result<(String, String)> {
    if partition_attr.is_empty() || sort_attr.is_empty() {
        return Err(Error::validation_invalid_index(
            "key attribute names must not be empty",
        ));
    }

    if partition_attr == sort_attr {
        return Err(Error::validation_invalid_index(format!(
            "partition and sort attributes are both `{partition_attr}`"
        )));
    }

    Ok((partition_attr, sort_attr))
}
