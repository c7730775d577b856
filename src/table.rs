//! Hash-indexed word table backing the synonym forest.
//!
//! Every distinct word ever mentioned gets exactly one [`WordEntry`],
//! created on first mention and alive until the dictionary is dropped.
//! Entries live in a growable arena and are addressed by stable
//! [`WordId`] indices; bucket chains, parent links, and member lists all
//! store ids rather than references, so there are no owning cycles and
//! dropping the table releases every entry at once.

use crate::config::DEFAULT_BUCKET_COUNT;
use crate::error::{Result, SynomapError};

/// Stable index of a word entry within a dictionary's arena.
///
/// Ids are assigned in insertion order and remain valid for the life of
/// the owning table; entries are never deleted or relocated.
pub type WordId = usize;

/// One distinct word and its current position in the synonym forest.
#[derive(Debug, Clone)]
pub struct WordEntry {
    /// The word itself. Immutable once created, unique within the table.
    pub(crate) text: String,
    /// Union-find parent link; `None` while this entry is a
    /// representative.
    pub(crate) parent: Option<WordId>,
    /// True iff this entry currently heads its group.
    pub(crate) is_representative: bool,
    /// For a representative, the number of *other* members in its group
    /// (group size minus one). Reset to 0 on demotion and never read
    /// again while absorbed.
    pub(crate) rank: usize,
    /// For a representative, every non-representative member of its
    /// group, insertion order preserved. Always empty for
    /// non-representatives; member tracking belongs solely to the
    /// representative.
    pub(crate) members: Vec<WordId>,
}

impl WordEntry {
    fn new(text: String) -> Self {
        WordEntry {
            text,
            parent: None,
            is_representative: true,
            rank: 0,
            members: Vec::new(),
        }
    }

    /// The word this entry stores.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this entry currently heads its group.
    pub fn is_representative(&self) -> bool {
        self.is_representative
    }

    /// For a representative, the number of other members in its group.
    pub fn rank(&self) -> usize {
        self.rank
    }
}

/// Hash-indexed table owning every word entry of a dictionary.
///
/// Lookup is O(1) average via a fixed-size bucket array with chaining;
/// the bucket count is set at construction and the table only ever
/// grows.
#[derive(Debug, Clone)]
pub struct WordTable {
    /// Entry arena; a [`WordId`] is an index into this vector.
    entries: Vec<WordEntry>,
    /// Bucket chains of entry ids, indexed by `hash_word`.
    buckets: Vec<Vec<WordId>>,
}

impl WordTable {
    /// Create an empty table with the default bucket count.
    pub fn new() -> Result<Self> {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Create an empty table with the given bucket count.
    ///
    /// A bucket count of 0 is treated as 1.
    pub fn with_bucket_count(bucket_count: usize) -> Result<Self> {
        let bucket_count = bucket_count.max(1);
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count)?;
        buckets.resize_with(bucket_count, Vec::new);
        Ok(WordTable {
            entries: Vec::new(),
            buckets,
        })
    }

    /// Number of hash buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Map a word to its bucket index.
    ///
    /// Polynomial hash over the word's bytes, reduced modulo the bucket
    /// count at every step. Pure and deterministic, always in
    /// `[0, bucket_count)`.
    fn hash_word(&self, word: &str) -> usize {
        let modulus = self.buckets.len() as u64;
        let mut val = 0u64;
        for &byte in word.as_bytes() {
            val = (val * 26 + u64::from(byte)) % modulus;
        }
        val as usize
    }

    /// Exact-match lookup within the word's bucket chain.
    pub fn find(&self, word: &str) -> Option<WordId> {
        self.buckets[self.hash_word(word)]
            .iter()
            .copied()
            .find(|&id| self.entries[id].text == word)
    }

    /// Insert a word known to be absent.
    ///
    /// The new entry starts as a singleton representative: rank 0, no
    /// parent, empty member list. Returns
    /// [`SynomapError::DuplicateWord`] if the text is already present;
    /// callers that merely want the id use [`WordTable::intern`].
    pub fn insert(&mut self, word: &str) -> Result<WordId> {
        let bucket_index = self.hash_word(word);
        if self.buckets[bucket_index]
            .iter()
            .any(|&id| self.entries[id].text == word)
        {
            return Err(SynomapError::duplicate_word(word));
        }

        // Reserve everything the insert needs before linking anything,
        // so a failed reservation leaves the table untouched.
        self.entries.try_reserve(1)?;
        self.buckets[bucket_index].try_reserve(1)?;
        let mut text = String::new();
        text.try_reserve_exact(word.len())?;
        text.push_str(word);

        let id = self.entries.len();
        self.entries.push(WordEntry::new(text));
        self.buckets[bucket_index].push(id);
        Ok(id)
    }

    /// Find the word's entry, inserting it if absent.
    pub fn intern(&mut self, word: &str) -> Result<WordId> {
        match self.find(word) {
            Some(id) => Ok(id),
            None => self.insert(word),
        }
    }

    /// Get the entry for an id.
    pub fn get(&self, id: WordId) -> &WordEntry {
        &self.entries[id]
    }

    pub(crate) fn get_mut(&mut self, id: WordId) -> &mut WordEntry {
        &mut self.entries[id]
    }

    /// Number of distinct words ever interned.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table holds no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &WordEntry)> {
        self.entries.iter().enumerate()
    }
}
