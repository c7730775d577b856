//! The public synonym dictionary.
//!
//! [`Dictionary`] wraps the synonym forest behind the call surface host
//! programs use: define synonyms, query synonymy, list group members.
//! It also loads and saves synonym group files, a JSON array of groups
//! where each group is an array of mutually-synonymous words:
//!
//! ```json
//! [
//!   ["happy", "glad", "joyful"],
//!   ["sad", "unhappy"]
//! ]
//! ```

use std::fs;
use std::path::Path;

use crate::config::DictionaryConfig;
use crate::error::{Result, SynomapError};
use crate::forest::SynonymForest;

/// In-memory synonym dictionary.
///
/// Words are grouped into mutually-synonymous sets; defining synonyms
/// merges groups and a word belongs to exactly one group at a time.
/// Creation and definition fail only on allocation failure, never on
/// duplicate or unknown words. Dropping the dictionary releases every
/// entry at once.
///
/// # Examples
///
/// ```
/// use synomap::dictionary::Dictionary;
///
/// let mut dict = Dictionary::new().unwrap();
/// dict.define("happy", &["glad", "joyful"]).unwrap();
/// dict.define("glad", &["cheerful"]).unwrap();
///
/// assert!(dict.are_synonyms("happy", "cheerful"));
/// assert_eq!(dict.synonyms_of("glad"), vec!["happy", "joyful", "cheerful"]);
/// ```
#[derive(Debug, Clone)]
pub struct Dictionary {
    forest: SynonymForest,
    config: DictionaryConfig,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new().unwrap()
    }
}

impl Dictionary {
    /// Create an empty dictionary with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(DictionaryConfig::default())
    }

    /// Create an empty dictionary with the given configuration.
    pub fn with_config(config: DictionaryConfig) -> Result<Self> {
        let forest = SynonymForest::with_bucket_count(config.bucket_count)?;
        Ok(Dictionary { forest, config })
    }

    /// The configuration this dictionary was created with.
    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Define `synonyms` for `word`.
    ///
    /// Unknown words are added to the dictionary as they appear; words
    /// already in groups drag their whole group into the merge. Synonyms
    /// are folded in argument order, so `define("a", &["b", "c"])` ends
    /// with a, b, and c all in one group regardless of prior membership.
    pub fn define<S: AsRef<str>>(&mut self, word: &str, synonyms: &[S]) -> Result<()> {
        self.forest.define(word, synonyms)
    }

    /// Whether two words are defined synonyms.
    ///
    /// A word is not its own synonym, and unknown words are synonyms of
    /// nothing; both cases are false, not errors.
    pub fn are_synonyms(&self, first: &str, second: &str) -> bool {
        self.forest.are_synonyms(first, second)
    }

    /// Every defined synonym of `word`, excluding `word` itself.
    ///
    /// Returns the group's representative word first (when it is not the
    /// queried word), then the remaining members in the order they
    /// joined the group. Empty if the word is unknown.
    pub fn synonyms_of(&self, word: &str) -> Vec<String> {
        self.forest.synonyms_of(word).unwrap_or_default()
    }

    /// Whether `word` has ever been defined or listed as a synonym.
    pub fn contains(&self, word: &str) -> bool {
        self.forest.table().find(word).is_some()
    }

    /// Number of distinct words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.forest.table().len()
    }

    /// Check if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.forest.table().is_empty()
    }

    /// Number of synonym groups, singletons included.
    pub fn group_count(&self) -> usize {
        self.forest.group_count()
    }

    /// Current synonym groups.
    ///
    /// Groups are ordered by representative creation; each group lists
    /// the representative first, then its members in the order they
    /// joined.
    pub fn groups(&self) -> Vec<Vec<String>> {
        self.forest.groups()
    }

    /// Build a dictionary from synonym groups.
    ///
    /// Each group is defined with the same left-fold semantics as
    /// [`Dictionary::define`], the first word of the group acting as the
    /// defined word. Empty groups are skipped; overlapping groups merge.
    pub fn from_groups(groups: Vec<Vec<String>>) -> Result<Self> {
        Self::from_groups_with_config(groups, DictionaryConfig::default())
    }

    /// Build a dictionary from synonym groups with the given
    /// configuration.
    pub fn from_groups_with_config(
        groups: Vec<Vec<String>>,
        config: DictionaryConfig,
    ) -> Result<Self> {
        let mut dict = Self::with_config(config)?;
        for group in groups {
            if group.is_empty() {
                continue;
            }
            dict.define(&group[0], &group[1..])?;
        }
        Ok(dict)
    }

    /// Load a dictionary from a synonym group file.
    ///
    /// The file holds a JSON array of synonym groups, where each group
    /// is an array of words that are synonyms of each other.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let groups: Vec<Vec<String>> = serde_json::from_str(&content).map_err(|e| {
            SynomapError::parse(format!(
                "failed to parse synonym group file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_groups(groups)
    }

    /// Save the current synonym groups to a file, in the same JSON
    /// format [`Dictionary::load_from_file`] reads.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.groups())
            .map_err(|e| SynomapError::parse(format!("failed to encode synonym groups: {e}")))?;
        fs::write(path, json)?;
        Ok(())
    }
}
