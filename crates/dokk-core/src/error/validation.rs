use super::{Error, ErrorKind};

/// An argument was rejected locally, before any request reached the store.
///
/// Messages name entity tokens and attribute names but never key values.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// A key was given an empty value
    EmptyValue { entity: Box<str> },

    /// A key value contains the `#` delimiter
    DelimiterInValue { entity: Box<str> },

    /// An entity name is not made of `[A-Z0-9_]`
    InvalidEntityName { name: Box<str> },

    /// A raw key string could not be decoded
    MalformedKey { reason: &'static str },

    /// Two types were registered under the same token
    DuplicateEntity { entity: Box<str> },

    /// A decoded entity token is not registered
    UnknownEntity { entity: Box<str> },

    /// A decoded entity token is not the expected one
    EntityMismatch { expected: Box<str>, found: Box<str> },

    /// A value was supplied where only an entity prefix is allowed
    PrefixWithValue { entity: Box<str> },

    EmptyTableName,

    /// An index definition is unusable
    InvalidIndex { reason: Box<str> },

    /// The index is not registered on the table
    UnknownIndex { name: Box<str> },

    /// Secondary indices only support eventually consistent reads
    ConsistentSecondaryRead { index: Box<str> },

    /// Query limits must be positive
    InvalidLimit,

    TooManyTransactItems { count: usize, max: usize },

    /// Two transaction entries target the same primary key
    DuplicateTransactItem { first: usize, second: usize },

    TooManyBatchGetKeys { count: usize, max: usize },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ValidationErrorKind::*;

        f.write_str("validation failed: ")?;

        match &self.kind {
            EmptyValue { entity } => write!(f, "value for entity `{entity}` is empty"),
            DelimiterInValue { entity } => write!(
                f,
                "value for entity `{entity}` contains the reserved `#` delimiter"
            ),
            InvalidEntityName { name } => write!(
                f,
                "invalid entity name `{name}`; expected one or more of `A-Z`, `0-9` or `_`"
            ),
            MalformedKey { reason } => write!(f, "malformed key: {reason}"),
            DuplicateEntity { entity } => write!(
                f,
                "entity `{entity}` is already registered by another type"
            ),
            UnknownEntity { entity } => write!(f, "unknown entity `{entity}`"),
            EntityMismatch { expected, found } => {
                write!(f, "expected entity `{expected}`, found `{found}`")
            }
            PrefixWithValue { entity } => write!(
                f,
                "prefix key for entity `{entity}` must not carry a value"
            ),
            EmptyTableName => f.write_str("table name must not be empty"),
            InvalidIndex { reason } => write!(f, "invalid index: {reason}"),
            UnknownIndex { name } => write!(f, "index `{name}` is not registered on the table"),
            ConsistentSecondaryRead { index } => write!(
                f,
                "consistent reads are not supported on secondary index `{index}`"
            ),
            InvalidLimit => f.write_str("limit must be greater than zero"),
            TooManyTransactItems { count, max } => {
                write!(f, "transaction has {count} items (maximum: {max})")
            }
            DuplicateTransactItem { first, second } => write!(
                f,
                "transaction items {first} and {second} target the same key"
            ),
            TooManyBatchGetKeys { count, max } => {
                write!(f, "batch get has {count} keys (maximum: {max})")
            }
        }
    }
}

impl Error {
    fn validation(kind: ValidationErrorKind) -> Error {
        Error::from(ErrorKind::Validation(ValidationError { kind }))
    }

    pub fn validation_empty_value(entity: &str) -> Error {
        Error::validation(ValidationErrorKind::EmptyValue {
            entity: entity.into(),
        })
    }

    pub fn validation_delimiter_in_value(entity: &str) -> Error {
        Error::validation(ValidationErrorKind::DelimiterInValue {
            entity: entity.into(),
        })
    }

    pub fn validation_invalid_entity_name(name: &str) -> Error {
        Error::validation(ValidationErrorKind::InvalidEntityName { name: name.into() })
    }

    /// `reason` must not include the offending key.
    pub fn validation_malformed_key(reason: &'static str) -> Error {
        Error::validation(ValidationErrorKind::MalformedKey { reason })
    }

    pub fn validation_duplicate_entity(entity: &str) -> Error {
        Error::validation(ValidationErrorKind::DuplicateEntity {
            entity: entity.into(),
        })
    }

    pub fn validation_unknown_entity(entity: &str) -> Error {
        Error::validation(ValidationErrorKind::UnknownEntity {
            entity: entity.into(),
        })
    }

    pub fn validation_entity_mismatch(expected: &str, found: &str) -> Error {
        Error::validation(ValidationErrorKind::EntityMismatch {
            expected: expected.into(),
            found: found.into(),
        })
    }

    pub fn validation_prefix_with_value(entity: &str) -> Error {
        Error::validation(ValidationErrorKind::PrefixWithValue {
            entity: entity.into(),
        })
    }

    pub fn validation_empty_table_name() -> Error {
        Error::validation(ValidationErrorKind::EmptyTableName)
    }

    pub fn validation_invalid_index(reason: impl Into<String>) -> Error {
        Error::validation(ValidationErrorKind::InvalidIndex {
            reason: reason.into().into(),
        })
    }

    pub fn validation_unknown_index(name: &str) -> Error {
        Error::validation(ValidationErrorKind::UnknownIndex { name: name.into() })
    }

    pub fn validation_consistent_secondary_read(index: &str) -> Error {
        Error::validation(ValidationErrorKind::ConsistentSecondaryRead {
            index: index.into(),
        })
    }

    pub fn validation_invalid_limit() -> Error {
        Error::validation(ValidationErrorKind::InvalidLimit)
    }

    pub fn validation_too_many_transact_items(count: usize, max: usize) -> Error {
        Error::validation(ValidationErrorKind::TooManyTransactItems { count, max })
    }

    pub fn validation_duplicate_transact_item(first: usize, second: usize) -> Error {
        Error::validation(ValidationErrorKind::DuplicateTransactItem { first, second })
    }

    pub fn validation_too_many_batch_get_keys(count: usize, max: usize) -> Error {
        Error::validation(ValidationErrorKind::TooManyBatchGetKeys { count, max })
    }
}
