use std::collections::BTreeSet;

use crate::distance::pair_ratio;
use crate::normalize::tokenize;

/// Token-set fuzzy ratio between two strings, in [0, 100].
///
/// Both strings are tokenized and deduplicated into sorted word sets. From
/// those we build the sorted intersection string and the two "intersection +
/// exclusive remainder" strings, then return the best of the three pairwise
/// edit-distance ratios. Word order and repetition stop mattering, which is
/// what makes this robust against OCR text that interleaves a title with
/// everything else on the cover.
///
/// Symmetric: `token_set_ratio(a, b) == token_set_ratio(b, a)`.
pub fn token_set_ratio(a: &str, b: &str) -> i32 {
    let words_a: BTreeSet<String> = tokenize(a).into_iter().collect();
    let words_b: BTreeSet<String> = tokenize(b).into_iter().collect();

    let shared: Vec<&str> = words_a.intersection(&words_b).map(String::as_str).collect();
    let only_a: Vec<&str> = words_a.difference(&words_b).map(String::as_str).collect();
    let only_b: Vec<&str> = words_b.difference(&words_a).map(String::as_str).collect();

    let core = shared.join(" ");
    let combined_a = join_parts(&core, &only_a);
    let combined_b = join_parts(&core, &only_b);

    [
        pair_ratio(&core, &combined_a),
        pair_ratio(&core, &combined_b),
        pair_ratio(&combined_a, &combined_b),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

fn join_parts(core: &str, rest: &[&str]) -> String {
    if core.is_empty() {
        rest.join(" ")
    } else if rest.is_empty() {
        core.to_owned()
    } else {
        format!("{core} {}", rest.join(" "))
    }
}
