/// Sentinel returned by [`edit_distance`] when `target` occurs verbatim
/// inside `source`. Callers treat it as a perfect match regardless of the
/// length difference between the two strings.
pub const CONTAINED: i64 = -1;

/// Damerau-Levenshtein distance between `source` and `target`.
///
/// Insertions, deletions, substitutions, and adjacent transpositions all cost
/// 1, computed over a full dynamic-programming table of char positions.
///
/// Containment short-circuit: when `target` is a literal substring of
/// `source` the function returns [`CONTAINED`] without computing the
/// distance. A catalog title buried inside a page of OCR text should score as
/// a hit, not be penalized for everything around it.
pub fn edit_distance(source: &str, target: &str) -> i64 {
    if source.contains(target) {
        return CONTAINED;
    }
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    dp_distance(&source, &target) as i64
}

fn dp_distance(source: &[char], target: &[char]) -> usize {
    let rows = source.len();
    let cols = target.len();
    let mut table = vec![vec![0usize; cols + 1]; rows + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=cols {
        table[0][j] = j;
    }

    for i in 1..=rows {
        for j in 1..=cols {
            let cost = usize::from(source[i - 1] != target[j - 1]);
            let mut best = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && source[i - 1] == target[j - 2] && source[i - 2] == target[j - 1] {
                best = best.min(table[i - 2][j - 2] + 1);
            }
            table[i][j] = best;
        }
    }

    table[rows][cols]
}

/// Percentage similarity derived from [`edit_distance`], in [0.0, 100.0].
///
/// The [`CONTAINED`] sentinel and the empty-vs-empty case both map to 100.0;
/// otherwise `(1 - distance / max(len)) * 100` over char lengths. The
/// distance never exceeds the longer length, so the result cannot go
/// negative.
pub fn distance_percentage(source: &str, target: &str) -> f64 {
    let distance = edit_distance(source, target);
    if distance == CONTAINED {
        return 100.0;
    }
    let longest = source.chars().count().max(target.chars().count());
    if longest == 0 {
        return 100.0;
    }
    (1.0 - distance as f64 / longest as f64) * 100.0
}

/// Plain pairwise ratio for the token-set comparison: rounded
/// `(1 - distance / max(len)) * 100` with no containment short-circuit.
///
/// The short-circuit would be wrong here: the token-set intersection string
/// is by construction a prefix of both combined strings, so every comparison
/// against it would collapse to 100 the moment any token is shared.
pub(crate) fn pair_ratio(a: &str, b: &str) -> i32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 100;
    }
    let distance = dp_distance(&a, &b);
    ((1.0 - distance as f64 / longest as f64) * 100.0).round() as i32
}
