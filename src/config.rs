//! Configuration for synonym dictionary instances.

use serde::{Deserialize, Serialize};

/// Default number of hash buckets in the word table.
pub const DEFAULT_BUCKET_COUNT: usize = 100;

/// Configuration for a synonym dictionary.
///
/// The bucket count is owned by the dictionary instance rather than
/// being a process-wide constant, so tests can build dictionaries with
/// tiny bucket counts to force hash collisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Number of hash buckets in the word table. Must be at least 1;
    /// a value of 0 is treated as 1.
    pub bucket_count: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

impl DictionaryConfig {
    /// Create a configuration with the default bucket count.
    pub fn new() -> Self {
        DictionaryConfig::default()
    }

    /// Set the bucket count.
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }
}
