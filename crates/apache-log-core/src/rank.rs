//! Ranker — turns a [`FrequencyMap`] into an ordered report.

use crate::types::{FrequencyMap, RankedPair};

/// Keep the pairs with `min <= count` and, when `max` is non-zero,
/// `count <= max`, ordered by count descending then key ascending.
pub fn rank(counts: &FrequencyMap, min: u64, max: u64) -> Vec<RankedPair> {
    let mut pairs: Vec<RankedPair> = counts
        .iter()
        .filter(|&(_, &count)| count >= min && (max == 0 || count <= max))
        .map(|(key, &count)| RankedPair::new(key.as_str(), count))
        .collect();

    pairs.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    pairs
}
