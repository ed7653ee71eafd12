//! Annotation preserving merge
//!
//!     Editing a transliteration means re-parsing it, which produces brand new tokens without any
//!     lemma or alignment. Merging reconciles the re-parse with the previously annotated version
//!     so that annotations survive wherever the content did.
//!
//! Algorithm
//!
//!     Both sides are projected to string keys and diffed. The edit script is then walked once:
//!
//!         Equal:   an old item identical to its new counterpart is kept as it is. Otherwise the
//!                  key hides an edit (a flag, a bracket) and the pair goes through the inner
//!                  merge.
//!         Delete:  the old items are queued as pending edits.
//!         Insert:  each new item is paired with the oldest pending old item, if any, and the
//!                  pair goes through the inner merge. Without a pending item the new item is
//!                  taken as is.
//!
//!     A replace is a delete followed by an insert. The pending queue is first in first out and
//!     survives across equal runs, so a deletion followed later by an insertion is still treated
//!     as an edit of the deleted item.
//!
//!     The same engine runs at two levels: lines within a text (key: kind and atf, inner merge:
//!     [Line::merge](crate::atf::lines::Line::merge)) and tokens within a text line (key:
//!     [Token::get_key](crate::atf::tokens::Token::get_key), inner merge:
//!     [Token::merge](crate::atf::tokens::Token::merge)).
//!
//!     Keys are compared after Unicode canonical composition, so precomposed and decomposed
//!     spellings of the same sign are not mistaken for edits.

use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffTag};
use std::collections::VecDeque;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;

/// Diff algorithm used to compute the edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Lcs,
    Myers,
}

impl DiffAlgorithm {
    fn algorithm(&self) -> Algorithm {
        match self {
            DiffAlgorithm::Lcs => Algorithm::Lcs,
            DiffAlgorithm::Myers => Algorithm::Myers,
        }
    }
}

impl FromStr for DiffAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lcs" => Ok(DiffAlgorithm::Lcs),
            "myers" => Ok(DiffAlgorithm::Myers),
            other => Err(format!("unknown diff algorithm '{}'", other)),
        }
    }
}

fn normalized_keys<T>(items: &[T], key: &impl Fn(&T) -> String) -> Vec<String> {
    items.iter().map(|item| key(item).nfc().collect()).collect()
}

/// Merge `new` into `old`, keeping old items wherever their key is unchanged.
pub fn merge<T, K, M>(old: &[T], new: &[T], key: K, inner_merge: M, algorithm: DiffAlgorithm) -> Vec<T>
where
    T: Clone + PartialEq,
    K: Fn(&T) -> String,
    M: Fn(&T, &T) -> T,
{
    let old_keys = normalized_keys(old, &key);
    let new_keys = normalized_keys(new, &key);
    let ops = capture_diff_slices(algorithm.algorithm(), &old_keys, &new_keys);

    let mut merged = Vec::with_capacity(new.len());
    let mut pending: VecDeque<&T> = VecDeque::new();
    let (mut kept, mut edited) = (0usize, 0usize);
    for op in ops {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                for (previous, item) in old[old_range].iter().zip(&new[new_range]) {
                    if previous == item {
                        kept += 1;
                        merged.push(previous.clone());
                    } else {
                        edited += 1;
                        merged.push(inner_merge(previous, item));
                    }
                }
            }
            DiffTag::Delete => pending.extend(&old[old_range]),
            DiffTag::Insert | DiffTag::Replace => {
                pending.extend(&old[old_range]);
                for item in &new[new_range] {
                    match pending.pop_front() {
                        Some(previous) => {
                            edited += 1;
                            merged.push(inner_merge(previous, item));
                        }
                        None => merged.push(item.clone()),
                    }
                }
            }
        }
    }
    tracing::trace!(
        old = old.len(),
        new = new.len(),
        kept,
        edited,
        dropped = pending.len(),
        "merged sequences"
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn key(item: &(&'static str, u32)) -> String {
        item.0.to_string()
    }

    fn inner(old: &(&'static str, u32), new: &(&'static str, u32)) -> (&'static str, u32) {
        (new.0, old.1 + 100)
    }

    #[rstest(algorithm => [DiffAlgorithm::Lcs, DiffAlgorithm::Myers])]
    fn test_identical_items_are_kept(algorithm: DiffAlgorithm) {
        let old = [("a", 1), ("b", 2)];
        assert_eq!(merge(&old, &old, key, inner, algorithm), old.to_vec());
    }

    #[rstest(algorithm => [DiffAlgorithm::Lcs, DiffAlgorithm::Myers])]
    fn test_equal_keys_with_different_items_are_merged_in_place(algorithm: DiffAlgorithm) {
        let old = [("a", 1), ("a", 2)];
        let new = [("a", 0), ("a", 2)];
        assert_eq!(
            merge(&old, &new, key, inner, algorithm),
            vec![("a", 101), ("a", 2)]
        );
    }

    #[rstest(algorithm => [DiffAlgorithm::Lcs, DiffAlgorithm::Myers])]
    fn test_replacement_goes_through_inner_merge(algorithm: DiffAlgorithm) {
        let old = [("a", 1), ("b", 2), ("c", 3)];
        let new = [("a", 1), ("x", 0), ("c", 3)];
        assert_eq!(
            merge(&old, &new, key, inner, algorithm),
            vec![("a", 1), ("x", 102), ("c", 3)]
        );
    }

    #[rstest(algorithm => [DiffAlgorithm::Lcs, DiffAlgorithm::Myers])]
    fn test_deleted_duplicate(algorithm: DiffAlgorithm) {
        let old = [("bu", 1), ("mu", 2), ("bu", 1)];
        let new = [("bu", 1), ("bu", 1)];
        assert_eq!(
            merge(&old, &new, key, inner, algorithm),
            vec![("bu", 1), ("bu", 1)]
        );
    }

    #[test]
    fn test_pure_insert_takes_new_item() {
        let old = [("a", 1)];
        let new = [("a", 1), ("b", 5)];
        assert_eq!(
            merge(&old, &new, key, inner, DiffAlgorithm::Lcs),
            vec![("a", 1), ("b", 5)]
        );
    }

    #[test]
    fn test_pending_survives_equal_runs() {
        let old = [("x", 1), ("a", 2)];
        let new = [("a", 2), ("y", 0)];
        assert_eq!(
            merge(&old, &new, key, inner, DiffAlgorithm::Lcs),
            vec![("a", 2), ("y", 101)]
        );
    }

    #[test]
    fn test_keys_are_compared_in_canonical_form() {
        let old = [("s\u{030C}a", 1)];
        let new = [("ša", 0)];
        assert_eq!(
            merge(&old, &new, key, inner, DiffAlgorithm::Lcs),
            vec![("ša", 101)]
        );
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("myers".parse::<DiffAlgorithm>(), Ok(DiffAlgorithm::Myers));
        assert!("patience".parse::<DiffAlgorithm>().is_err());
    }
}
