//! Letter frequency over a candidate set
//!
//! Counts, for each letter, how many candidate words contain it at least once.

use rustc_hash::{FxHashMap, FxHashSet};

/// Number of words containing each letter, restricted to letters not yet guessed
#[must_use]
pub fn letter_coverage<'a, I>(words: I, guessed: &FxHashSet<char>) -> FxHashMap<char, usize>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut counts = FxHashMap::default();

    for word in words {
        let distinct: FxHashSet<char> = word.chars().collect();
        for letter in distinct {
            if !guessed.contains(&letter) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Most widely covered letter, ties broken alphabetically
#[must_use]
pub fn most_common(counts: &FxHashMap<char, usize>) -> Option<char> {
    counts
        .iter()
        .max_by(|(la, ca), (lb, cb)| ca.cmp(cb).then_with(|| lb.cmp(la)))
        .map(|(&letter, _)| letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn counts_each_word_once_per_letter() {
        let candidates = words(&["banana", "band"]);
        let counts = letter_coverage(&candidates, &FxHashSet::default());

        assert_eq!(counts.get(&'a'), Some(&2));
        assert_eq!(counts.get(&'n'), Some(&2));
        assert_eq!(counts.get(&'d'), Some(&1));
    }

    #[test]
    fn skips_guessed_letters() {
        let candidates = words(&["cat", "bat"]);
        let guessed: FxHashSet<char> = ['a', 't'].into_iter().collect();
        let counts = letter_coverage(&candidates, &guessed);

        assert!(!counts.contains_key(&'a'));
        assert!(!counts.contains_key(&'t'));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn most_common_prefers_earlier_letter_on_tie() {
        let candidates = words(&["cat", "bat"]);
        let counts = letter_coverage(&candidates, &FxHashSet::default());

        // 'a' and 't' both cover two words
        assert_eq!(most_common(&counts), Some('a'));
    }

    #[test]
    fn most_common_of_nothing() {
        assert_eq!(most_common(&FxHashMap::default()), None);
    }
}
