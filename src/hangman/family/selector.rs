//! Adversarial family selection
//!
//! Keeps the family that leaves the guesser with the most words to worry about.

use super::partition::{Families, Family};
use crate::core::PatternKey;
use std::cmp::{Ordering, Reverse};

/// Pick the largest family, consuming the partition
///
/// Ties on size go to the lexicographically smallest key. The result does
/// not depend on the iteration order of the underlying map.
///
/// Returns `None` when the partition is empty.
///
/// # Examples
/// ```
/// use evil_hangman::hangman::family::{partition, select_family};
///
/// let words = ["cat", "bat", "hat", "cow", "dog"].map(String::from);
/// let (key, family) = select_family(partition(&words, 'a')).unwrap();
///
/// assert_eq!(key.to_string(), "- a -");
/// assert_eq!(family.len(), 3);
/// ```
#[must_use]
pub fn select_family(families: Families) -> Option<(PatternKey, Family)> {
    families
        .into_groups()
        .into_iter()
        .min_by(|(key_a, fam_a), (key_b, fam_b)| rank(key_a, fam_a, key_b, fam_b))
}

/// Key of the family `select_family` would keep, without consuming anything
#[must_use]
pub fn preferred_key(families: &Families) -> Option<&PatternKey> {
    families
        .sorted()
        .into_iter()
        .max_by_key(|(key, family)| (family.len(), Reverse(*key)))
        .map(|(key, _)| key)
}

// Larger families rank first, then smaller keys.
fn rank(key_a: &PatternKey, fam_a: &Family, key_b: &PatternKey, fam_b: &Family) -> Ordering {
    fam_b
        .len()
        .cmp(&fam_a.len())
        .then_with(|| key_a.cmp(key_b))
}
