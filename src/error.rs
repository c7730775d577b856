//! Error types for the synomap library.
//!
//! All fallible operations return [`Result`], and every failure is a
//! [`SynomapError`] variant. The taxonomy is deliberately narrow: the
//! dictionary itself can only fail on memory reservation, while the
//! remaining variants belong to the synonym group file loader. Querying
//! an unknown word is not an error, and neither is asking whether a word
//! is a synonym of itself; both have defined false/empty results.
//!
//! # Examples
//!
//! ```
//! use synomap::error::{Result, SynomapError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SynomapError::parse("Invalid group file"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// The main error type for synomap operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides convenient constructor methods for the string-carrying
/// variants.
#[derive(Error, Debug)]
pub enum SynomapError {
    /// Memory reservation failed while growing dictionary storage.
    ///
    /// Storage is always reserved before any group links are mutated, so
    /// an operation that surfaces this error has not changed the
    /// dictionary.
    #[error("Allocation error: {0}")]
    Alloc(#[from] TryReserveError),

    /// A word was inserted into the word table twice.
    ///
    /// `insert` requires an absent word; every public operation goes
    /// through the find-or-insert path instead, so this never escapes
    /// normal use.
    #[error("Duplicate word: {0}")]
    DuplicateWord(String),

    /// I/O errors while reading or writing synonym group files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed synonym group file content.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for operations that may fail with SynomapError.
pub type Result<T> = std::result::Result<T, SynomapError>;

impl SynomapError {
    /// Create a new duplicate word error.
    pub fn duplicate_word<S: Into<String>>(word: S) -> Self {
        SynomapError::DuplicateWord(word.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SynomapError::Parse(msg.into())
    }
}
