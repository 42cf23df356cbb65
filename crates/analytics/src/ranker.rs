//! Top-N selection over a key → score mapping.
//!
//! Both rankers sort by score, highest first, with a stable sort: entries
//! that tie keep the order of the input mapping. That makes the first-seen
//! entry win every tie.

use data_loader::OrderedMap;
use std::hash::Hash;

/// Default size of an overall top-N list
pub const DEFAULT_TOP_N: usize = 10;

/// Default size of genre-scoped top-N lists
pub const DEFAULT_GENRE_TOP_N: usize = 5;

/// Default cutoff for [`filter_above`]
pub const DEFAULT_THRESHOLD: f64 = 3.0;

/// The `n` highest-scoring entries, best first.
///
/// Returns everything when `n` exceeds the input size and nothing when
/// `n == 0`.
pub fn top_n<K: Hash + Eq + Clone>(scores: &OrderedMap<K, f64>, n: usize) -> OrderedMap<K, f64> {
    sorted_descending(scores).into_iter().take(n).collect()
}

/// Every entry scoring at least `threshold`, best first.
pub fn filter_above<K: Hash + Eq + Clone>(
    scores: &OrderedMap<K, f64>,
    threshold: f64,
) -> OrderedMap<K, f64> {
    sorted_descending(scores)
        .into_iter()
        .filter(|(_, score)| *score >= threshold)
        .collect()
}

fn sorted_descending<K: Clone>(scores: &OrderedMap<K, f64>) -> Vec<(K, f64)> {
    let mut entries: Vec<(K, f64)> = scores
        .iter()
        .map(|(key, &score)| (key.clone(), score))
        .collect();
    // `sort_by` is stable
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(&str, f64)]) -> OrderedMap<String, f64> {
        entries
            .iter()
            .map(|(key, score)| (key.to_string(), *score))
            .collect()
    }

    fn keys(map: &OrderedMap<String, f64>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_top_n_sorts_descending() {
        let input = scores(&[("A", 3.1), ("B", 4.8), ("C", 2.0), ("D", 4.1)]);
        let top = top_n(&input, 3);

        assert_eq!(keys(&top), vec!["B", "D", "A"]);
        assert_eq!(top.get("B"), Some(&4.8));
    }

    #[test]
    fn test_top_n_ties_keep_insertion_order() {
        let input = scores(&[("A", 4.0), ("B", 4.0), ("C", 5.0), ("D", 4.0)]);
        assert_eq!(keys(&top_n(&input, 4)), vec!["C", "A", "B", "D"]);
        assert_eq!(keys(&top_n(&input, 2)), vec!["C", "A"]);
    }

    #[test]
    fn test_top_n_clamps() {
        let input = scores(&[("A", 1.0), ("B", 2.0)]);

        assert_eq!(top_n(&input, 10).len(), 2);
        assert!(top_n(&input, 0).is_empty());
        assert!(top_n(&OrderedMap::<String, f64>::new(), 3).is_empty());
    }

    #[test]
    fn test_filter_above_keeps_threshold_and_up() {
        let input = scores(&[("A", 4.5), ("B", 2.9), ("C", 3.0)]);
        let filtered = filter_above(&input, DEFAULT_THRESHOLD);

        assert_eq!(filtered, scores(&[("A", 4.5), ("C", 3.0)]));
    }

    #[test]
    fn test_filter_above_has_no_count_cap() {
        let input = scores(&[("A", 3.5), ("B", 3.5), ("C", 3.9), ("D", 5.0), ("E", 1.0)]);
        let filtered = filter_above(&input, 3.5);

        assert_eq!(keys(&filtered), vec!["D", "C", "A", "B"]);
    }

    #[test]
    fn test_nan_scores_do_not_panic() {
        let input = scores(&[("A", f64::NAN), ("B", 1.0)]);
        assert_eq!(top_n(&input, 5).len(), 2);
        // NaN never passes a threshold
        assert_eq!(keys(&filter_above(&input, 0.0)), vec!["B"]);
    }
}
