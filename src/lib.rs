//! # Synomap
//!
//! A fast, in-memory synonym dictionary for Rust.
//!
//! Words are grouped into mutually-synonymous sets maintained by a
//! disjoint-set forest with union-by-rank and per-group membership
//! lists. Defining synonyms merges groups; queries resolve group
//! representatives.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - O(1) average word lookup via a configurable hash bucket table
//! - Union-by-rank group merging with merge-time path flattening
//! - Insertion-ordered group member listing
//! - Synonym group files (JSON) for bulk loading and saving
//! - Optional lock-guarded handle for cross-thread use
//!
//! ## Example
//!
//! ```
//! use synomap::prelude::*;
//!
//! let mut dict = Dictionary::new().unwrap();
//! dict.define("happy", &["glad", "joyful"]).unwrap();
//! dict.define("glad", &["cheerful"]).unwrap();
//!
//! assert!(dict.are_synonyms("happy", "cheerful"));
//! assert!(!dict.are_synonyms("happy", "happy"));
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod forest;
pub mod shared;
pub mod table;

pub mod prelude {
    pub use crate::config::DictionaryConfig;
    pub use crate::dictionary::Dictionary;
    pub use crate::error::{Result, SynomapError};
    pub use crate::shared::SharedDictionary;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
