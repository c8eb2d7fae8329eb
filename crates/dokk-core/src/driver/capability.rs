#[derive(Debug, Clone)]
pub struct Capability {
    /// Maximum number of entries in one transactional write.
    pub max_transact_items: usize,

    /// Maximum number of keys in one batch get.
    pub max_batch_get_items: usize,

    /// When false, strongly consistent reads are only allowed on the primary
    /// index.
    pub consistent_secondary_reads: bool,
}

impl Capability {
    /// DynamoDB capabilities.
    pub const DYNAMODB: Self = Self {
        max_transact_items: 100,
        max_batch_get_items: 100,
        consistent_secondary_reads: false,
    };
}

impl Default for Capability {
    fn default() -> Self {
        Capability::DYNAMODB
    }
}
