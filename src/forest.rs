//! Disjoint-set forest layered on the word table.
//!
//! Each synonym group is a tree of word entries rooted at its
//! representative, merged with union-by-rank. Rank here counts the other
//! members of a group rather than tree height: the representative's
//! member list holds every non-representative entry of the group in
//! insertion order, and merging concatenates those lists while
//! repointing the absorbed members directly at the new root (path
//! flattening happens at merge time, not lazily during lookups).

use crate::config::DEFAULT_BUCKET_COUNT;
use crate::error::Result;
use crate::table::{WordId, WordTable};

/// Union-find forest over word entries.
///
/// Owns the word table and keeps three invariants across every merge:
/// each group has exactly one representative and all parent chains
/// terminate there, a representative's member list length equals its
/// rank, and a non-representative's member list is empty.
#[derive(Debug, Clone)]
pub struct SynonymForest {
    table: WordTable,
}

impl SynonymForest {
    /// Create an empty forest with the default bucket count.
    pub fn new() -> Result<Self> {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Create an empty forest with the given word table bucket count.
    pub fn with_bucket_count(bucket_count: usize) -> Result<Self> {
        Ok(SynonymForest {
            table: WordTable::with_bucket_count(bucket_count)?,
        })
    }

    /// The underlying word table.
    pub fn table(&self) -> &WordTable {
        &self.table
    }

    /// Resolve an entry to its group representative.
    ///
    /// Follows parent links until reaching the entry that heads the
    /// group. Chains are finite and acyclic (a merge only ever attaches
    /// a demoted representative and its flattened members under the
    /// absorber), so this terminates.
    pub fn representative(&self, mut id: WordId) -> WordId {
        while let Some(parent) = self.table.get(id).parent {
            id = parent;
        }
        id
    }

    /// Merge the groups headed by `a` and `b`; both must be
    /// representatives.
    ///
    /// No-op when `a == b`. The side with greater-or-equal rank absorbs
    /// the other, ties favoring `a`. The absorbed representative is
    /// demoted (parent set, rank zeroed, member list emptied) and
    /// appended to the absorber's member list, followed by its former
    /// members in their original relative order, each repointed directly
    /// at the absorber. Returns the surviving representative.
    pub fn union(&mut self, a: WordId, b: WordId) -> Result<WordId> {
        debug_assert!(self.table.get(a).is_representative);
        debug_assert!(self.table.get(b).is_representative);

        if a == b {
            return Ok(a);
        }
        let (absorber, absorbed) = if self.table.get(a).rank >= self.table.get(b).rank {
            (a, b)
        } else {
            (b, a)
        };
        let absorbed_rank = self.table.get(absorbed).rank;

        // Reserve member list room up front; nothing past this point can
        // fail, so a failed merge leaves both groups intact.
        self.table
            .get_mut(absorber)
            .members
            .try_reserve(absorbed_rank + 1)?;

        let moved = {
            let entry = self.table.get_mut(absorbed);
            entry.parent = Some(absorber);
            entry.is_representative = false;
            entry.rank = 0;
            std::mem::take(&mut entry.members)
        };
        for &member in &moved {
            self.table.get_mut(member).parent = Some(absorber);
        }

        let entry = self.table.get_mut(absorber);
        entry.rank += absorbed_rank + 1;
        entry.members.push(absorbed);
        entry.members.extend(moved);
        Ok(absorber)
    }

    /// Define `synonyms` for `word`, interning unknown words as they
    /// appear.
    ///
    /// Left-fold: the accumulator starts at `word`'s representative and
    /// each synonym's group is unioned into it in argument order, so
    /// defining `(a, [b, c])` always ends with a, b, and c in one group
    /// regardless of prior membership.
    pub fn define<S: AsRef<str>>(&mut self, word: &str, synonyms: &[S]) -> Result<()> {
        let id = self.table.intern(word)?;
        let mut rep = self.representative(id);
        for synonym in synonyms {
            let other = self.table.intern(synonym.as_ref())?;
            let other_rep = self.representative(other);
            rep = self.union(rep, other_rep)?;
        }
        Ok(())
    }

    /// Whether two words are defined synonyms.
    ///
    /// False when the words are byte-equal (a word is not its own
    /// synonym) or when either word is unknown; otherwise true iff both
    /// resolve to the same representative.
    pub fn are_synonyms(&self, first: &str, second: &str) -> bool {
        if first == second {
            return false;
        }
        match (self.table.find(first), self.table.find(second)) {
            (Some(a), Some(b)) => self.representative(a) == self.representative(b),
            _ => false,
        }
    }

    /// Every other word in `word`'s group, or `None` for an unknown
    /// word.
    ///
    /// The representative's text comes first (when it is not the queried
    /// word itself), then the member texts in membership order with the
    /// queried word skipped. The result length always equals the
    /// representative's rank.
    pub fn synonyms_of(&self, word: &str) -> Option<Vec<String>> {
        let id = self.table.find(word)?;
        let rep = self.representative(id);
        let rep_entry = self.table.get(rep);

        let mut result = Vec::with_capacity(rep_entry.rank);
        if rep != id {
            result.push(rep_entry.text().to_string());
        }
        for &member in &rep_entry.members {
            if member == id {
                continue;
            }
            result.push(self.table.get(member).text().to_string());
        }
        Some(result)
    }

    /// Current synonym groups, ordered by representative creation.
    ///
    /// Each group lists the representative first, then its members in
    /// membership order. Words that were never grouped appear as
    /// singleton groups.
    pub fn groups(&self) -> Vec<Vec<String>> {
        self.table
            .iter()
            .filter(|(_, entry)| entry.is_representative)
            .map(|(_, entry)| {
                let mut group = Vec::with_capacity(entry.rank + 1);
                group.push(entry.text().to_string());
                group.extend(
                    entry
                        .members
                        .iter()
                        .map(|&member| self.table.get(member).text().to_string()),
                );
                group
            })
            .collect()
    }

    /// Number of synonym groups (singletons included).
    pub fn group_count(&self) -> usize {
        self.table
            .iter()
            .filter(|(_, entry)| entry.is_representative)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rep_of(forest: &SynonymForest, word: &str) -> WordId {
        let id = forest.table().find(word).expect("word should be interned");
        forest.representative(id)
    }

    #[test]
    fn test_representative_is_idempotent() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("happy", &["glad", "joyful"]).unwrap();

        for word in ["happy", "glad", "joyful"] {
            let rep = rep_of(&forest, word);
            assert_eq!(forest.representative(rep), rep);
        }
    }

    #[test]
    fn test_union_by_rank_larger_absorbs_smaller() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("big", &["large", "huge"]).unwrap();
        forest.define("grand", &["big"]).unwrap();

        // The three-word group absorbs the singleton.
        assert_eq!(rep_of(&forest, "grand"), rep_of(&forest, "big"));
        let rep = forest.table().get(rep_of(&forest, "big"));
        assert_eq!(rep.text(), "big");
        assert_eq!(rep.rank(), 3);
    }

    #[test]
    fn test_union_tie_favors_first_argument() {
        let mut forest = SynonymForest::new().unwrap();
        let a = forest.table.intern("a").unwrap();
        let b = forest.table.intern("b").unwrap();

        let survivor = forest.union(a, b).unwrap();
        assert_eq!(survivor, a);
        assert!(forest.table.get(a).is_representative);
        assert!(!forest.table.get(b).is_representative);
        assert_eq!(forest.table.get(b).parent, Some(a));
    }

    #[test]
    fn test_union_with_self_is_noop() {
        let mut forest = SynonymForest::new().unwrap();
        let a = forest.table.intern("alone").unwrap();
        assert_eq!(forest.union(a, a).unwrap(), a);
        assert_eq!(forest.table.get(a).rank(), 0);
        assert!(forest.table.get(a).members.is_empty());
    }

    #[test]
    fn test_merge_concatenates_members_in_order() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("a", &["b", "c"]).unwrap();
        forest.define("x", &["y"]).unwrap();
        forest.define("a", &["x"]).unwrap();

        // a (rank 2) absorbs x (rank 1): the absorbed representative is
        // appended first, then its members in their original order.
        assert_eq!(
            forest.synonyms_of("a").unwrap(),
            vec!["b".to_string(), "c".to_string(), "x".to_string(), "y".to_string()]
        );
    }

    #[test]
    fn test_merge_flattens_absorbed_members() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("a", &["b", "c"]).unwrap();
        forest.define("x", &["y"]).unwrap();
        forest.define("a", &["x"]).unwrap();

        let root = rep_of(&forest, "a");
        for word in ["b", "c", "x", "y"] {
            let id = forest.table().find(word).unwrap();
            // Every member points directly at the root; no chains deeper
            // than one hop survive a merge.
            assert_eq!(forest.table().get(id).parent, Some(root));
        }
    }

    #[test]
    fn test_demoted_representative_is_reset() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("x", &["y"]).unwrap();
        forest.define("a", &["b", "c"]).unwrap();
        forest.define("a", &["x"]).unwrap();

        let x = forest.table().find("x").unwrap();
        let entry = forest.table().get(x);
        assert!(!entry.is_representative());
        assert_eq!(entry.rank(), 0);
        assert!(entry.members.is_empty());
    }

    #[test]
    fn test_members_len_equals_rank_after_many_merges() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("a", &["b"]).unwrap();
        forest.define("c", &["d", "e"]).unwrap();
        forest.define("f", &[] as &[&str]).unwrap();
        forest.define("a", &["c", "f"]).unwrap();

        let root = rep_of(&forest, "a");
        let entry = forest.table().get(root);
        assert_eq!(entry.members.len(), entry.rank());
        assert_eq!(entry.rank(), 5);
    }

    #[test]
    fn test_define_left_fold_chains_groups() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("a", &["b"]).unwrap();
        forest.define("c", &["d"]).unwrap();
        // The accumulator moves to the merged group before unioning d's
        // group, so all four words end up together.
        forest.define("a", &["c", "d"]).unwrap();

        for pair in [("a", "d"), ("b", "c"), ("b", "d")] {
            assert!(forest.are_synonyms(pair.0, pair.1));
        }
    }

    #[test]
    fn test_define_with_no_synonyms_interns_word() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("hermit", &[] as &[&str]).unwrap();

        assert!(forest.table().find("hermit").is_some());
        assert_eq!(forest.synonyms_of("hermit").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_define_word_as_its_own_synonym() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("echo", &["echo"]).unwrap();

        assert!(!forest.are_synonyms("echo", "echo"));
        assert_eq!(forest.synonyms_of("echo").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_are_synonyms_unknown_words() {
        let forest = SynonymForest::new().unwrap();
        assert!(!forest.are_synonyms("ghost1", "ghost2"));

        let mut forest = SynonymForest::new().unwrap();
        forest.define("known", &["word"]).unwrap();
        assert!(!forest.are_synonyms("known", "ghost"));
        assert!(!forest.are_synonyms("ghost", "known"));
    }

    #[test]
    fn test_synonyms_of_unknown_word() {
        let forest = SynonymForest::new().unwrap();
        assert_eq!(forest.synonyms_of("ghost"), None);
    }

    #[test]
    fn test_synonyms_of_member_lists_representative_first() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("a", &["b", "c"]).unwrap();

        assert_eq!(
            forest.synonyms_of("b").unwrap(),
            vec!["a".to_string(), "c".to_string()]
        );
        assert_eq!(
            forest.synonyms_of("c").unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_synonyms_of_len_equals_rank_for_every_member() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("a", &["b"]).unwrap();
        forest.define("c", &["d", "e"]).unwrap();
        forest.define("b", &["e"]).unwrap();

        let rank = forest.table().get(rep_of(&forest, "a")).rank();
        for word in ["a", "b", "c", "d", "e"] {
            assert_eq!(forest.synonyms_of(word).unwrap().len(), rank);
        }
        assert_eq!(rank + 1, 5);
    }

    #[test]
    fn test_redefinition_is_idempotent() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("a", &["b"]).unwrap();
        forest.define("a", &["b"]).unwrap();

        let rep = forest.table().get(rep_of(&forest, "a"));
        assert_eq!(rep.rank(), 1);
        assert_eq!(forest.synonyms_of("a").unwrap(), vec!["b".to_string()]);
    }

    #[test]
    fn test_groups_enumeration() {
        let mut forest = SynonymForest::new().unwrap();
        forest.define("happy", &["glad"]).unwrap();
        forest.define("sad", &["unhappy"]).unwrap();
        forest.define("alone", &[] as &[&str]).unwrap();

        let groups = forest.groups();
        assert_eq!(groups.len(), 3);
        assert_eq!(forest.group_count(), 3);
        assert!(groups.contains(&vec!["happy".to_string(), "glad".to_string()]));
        assert!(groups.contains(&vec!["sad".to_string(), "unhappy".to_string()]));
        assert!(groups.contains(&vec!["alone".to_string()]));
    }
}
