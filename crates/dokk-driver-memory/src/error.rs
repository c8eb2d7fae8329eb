use dokk_core::Error;

/// A failure reported by the in-memory store, mirroring DynamoDB's error
/// codes.
#[derive(Debug)]
pub(crate) struct MemoryError {
    message: String,
}

impl MemoryError {
    fn code(code: &'static str, message: impl Into<String>) -> Error {
        Error::store_with_code(
            code,
            MemoryError {
                message: message.into(),
            },
        )
    }

    pub(crate) fn resource_not_found(table: &str) -> Error {
        Self::code(
            "ResourceNotFoundException",
            format!("table `{table}` does not exist"),
        )
    }

    pub(crate) fn resource_in_use(table: &str) -> Error {
        Self::code(
            "ResourceInUseException",
            format!("table `{table}` already exists"),
        )
    }

    pub(crate) fn validation(message: impl Into<String>) -> Error {
        Self::code("ValidationException", message)
    }
}

impl std::error::Error for MemoryError {}

impl core::fmt::Display for MemoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}
