//! Grouping candidate words into families
//!
//! Every candidate maps to exactly one reveal key for the guessed letter.
//! Words sharing a key form a family.

use crate::core::PatternKey;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Words sharing one reveal key
pub type Family = BTreeSet<String>;

/// The complete partition of a candidate set for one guessed letter
///
/// Families are disjoint and their union is exactly the partitioned set.
#[derive(Debug, Clone, Default)]
pub struct Families {
    letter: Option<char>,
    groups: FxHashMap<PatternKey, Family>,
}

impl Families {
    /// Letter the partition was computed for, `None` for an empty partition
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Number of families
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total words across all families
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    /// Look up the family for a key
    #[must_use]
    pub fn get(&self, key: &PatternKey) -> Option<&Family> {
        self.groups.get(key)
    }

    /// Families in ascending key order
    #[must_use]
    pub fn sorted(&self) -> Vec<(&PatternKey, &Family)> {
        let mut entries: Vec<_> = self.groups.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    pub(crate) fn into_groups(self) -> FxHashMap<PatternKey, Family> {
        self.groups
    }
}

/// Partition `words` by their reveal key for `letter`
///
/// # Examples
/// ```
/// use evil_hangman::hangman::family::partition;
///
/// let words = ["cat", "bat", "cow"].map(String::from);
/// let families = partition(&words, 'a');
///
/// assert_eq!(families.len(), 2);
/// assert_eq!(families.total_words(), 3);
/// ```
#[must_use]
pub fn partition<'a, I>(words: I, letter: char) -> Families
where
    I: IntoIterator<Item = &'a String>,
{
    let mut groups: FxHashMap<PatternKey, Family> = FxHashMap::default();

    for word in words {
        groups
            .entry(PatternKey::compute(word, letter))
            .or_default()
            .insert(word.clone());
    }

    Families {
        letter: (!groups.is_empty()).then_some(letter),
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn groups_by_reveal_key() {
        let candidates = words(&["cat", "bat", "hat", "cow", "dog"]);
        let families = partition(&candidates, 'a');

        assert_eq!(families.len(), 2);
        assert_eq!(families.letter(), Some('a'));

        let with_a = families.get(&PatternKey::compute("cat", 'a')).unwrap();
        assert_eq!(with_a, &words(&["bat", "cat", "hat"]));

        let without_a = families.get(&PatternKey::blank(3)).unwrap();
        assert_eq!(without_a, &words(&["cow", "dog"]));
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        let candidates = words(&["eerie", "eagle", "ether", "elope", "abide", "knelt"]);
        let families = partition(&candidates, 'e');

        let mut seen = BTreeSet::new();
        for (_, family) in families.sorted() {
            for word in family {
                assert!(seen.insert(word.clone()), "{word} in two families");
            }
        }
        assert_eq!(seen, candidates);
        assert_eq!(families.total_words(), candidates.len());
    }

    #[test]
    fn every_member_matches_its_key() {
        let candidates = words(&["banana", "bandit", "cabana", "ananas", "pajama"]);
        let families = partition(&candidates, 'a');

        for (key, family) in families.sorted() {
            for word in family {
                assert_eq!(&PatternKey::compute(word, 'a'), key);
            }
        }
    }

    #[test]
    fn sorted_lists_keys_ascending() {
        let candidates = words(&["ace", "cab", "bee", "sea"]);
        let families = partition(&candidates, 'a');
        let keys: Vec<String> = families.sorted().iter().map(|(k, _)| k.to_string()).collect();

        assert_eq!(keys, vec!["- - -", "- - a", "- a -", "a - -"]);
    }

    #[test]
    fn empty_input_gives_empty_partition() {
        let families = partition(&BTreeSet::new(), 'q');
        assert!(families.is_empty());
        assert_eq!(families.letter(), None);
        assert_eq!(families.total_words(), 0);
    }
}
