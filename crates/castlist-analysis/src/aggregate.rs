//! Frequency aggregation.
//!
//! Reduces an ordered mention sequence to count-sorted statistics,
//! optionally folding case so that "Alice" and "ALICE" merge.

use std::collections::HashMap;

use castlist_core::FrequencyStat;

/// Count mentions per character name.
///
/// Blank and whitespace-only entries are dropped before counting, even
/// though the extractor already filters them. With `ignore_case` set,
/// names are grouped under a Unicode lowercase fold (locale-independent,
/// so non-Latin scripts merge correctly) and the first-encountered
/// casing becomes the display name.
///
/// The result is sorted by descending count; the sort is stable, so ties
/// keep the first-occurrence order of their key in the input. Empty
/// input yields empty output; this function never fails.
pub fn aggregate(mentions: &[String], ignore_case: bool) -> Vec<FrequencyStat> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut stats: Vec<FrequencyStat> = Vec::new();

    for mention in mentions {
        let name = mention.trim();
        if name.is_empty() {
            continue;
        }

        let key = if ignore_case {
            fold_key(name)
        } else {
            name.to_string()
        };

        match index.get(&key) {
            Some(&at) => stats[at].count += 1,
            None => {
                index.insert(key, stats.len());
                stats.push(FrequencyStat::new(name, 1));
            }
        }
    }

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Locale-independent grouping key for case-insensitive aggregation.
fn fold_key(name: &str) -> String {
    name.to_lowercase()
}
