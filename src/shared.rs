//! Shared, lock-guarded dictionary handle.
//!
//! A merge mutates representative, parent, rank, and member state across
//! several fields, so the dictionary must never be observed mid-update.
//! Cross-thread use therefore requires one mutual-exclusion lock held
//! for the whole call. [`SharedDictionary`] packages exactly that model:
//! a cloneable handle over a mutex-guarded [`Dictionary`] that takes the
//! lock once per operation.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::DictionaryConfig;
use crate::dictionary::Dictionary;
use crate::error::Result;

/// Cloneable, thread-safe handle to a synonym dictionary.
///
/// All clones share the same underlying dictionary; every operation
/// locks it for the duration of the call.
#[derive(Debug, Clone)]
pub struct SharedDictionary {
    inner: Arc<Mutex<Dictionary>>,
}

impl SharedDictionary {
    /// Create an empty shared dictionary with the default configuration.
    pub fn new() -> Result<Self> {
        Ok(Self::from_dictionary(Dictionary::new()?))
    }

    /// Create an empty shared dictionary with the given configuration.
    pub fn with_config(config: DictionaryConfig) -> Result<Self> {
        Ok(Self::from_dictionary(Dictionary::with_config(config)?))
    }

    /// Wrap an existing dictionary.
    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        SharedDictionary {
            inner: Arc::new(Mutex::new(dictionary)),
        }
    }

    /// Define `synonyms` for `word`. See [`Dictionary::define`].
    pub fn define<S: AsRef<str>>(&self, word: &str, synonyms: &[S]) -> Result<()> {
        self.inner.lock().define(word, synonyms)
    }

    /// Whether two words are defined synonyms. See
    /// [`Dictionary::are_synonyms`].
    pub fn are_synonyms(&self, first: &str, second: &str) -> bool {
        self.inner.lock().are_synonyms(first, second)
    }

    /// Every defined synonym of `word`, excluding `word` itself. See
    /// [`Dictionary::synonyms_of`].
    pub fn synonyms_of(&self, word: &str) -> Vec<String> {
        self.inner.lock().synonyms_of(word)
    }

    /// Whether `word` has ever been defined or listed as a synonym.
    pub fn contains(&self, word: &str) -> bool {
        self.inner.lock().contains(word)
    }

    /// Number of distinct words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.inner.lock().word_count()
    }

    /// Check if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Number of synonym groups, singletons included.
    pub fn group_count(&self) -> usize {
        self.inner.lock().group_count()
    }

    /// Current synonym groups. See [`Dictionary::groups`].
    pub fn groups(&self) -> Vec<Vec<String>> {
        self.inner.lock().groups()
    }
}
