use crate::distance::distance_percentage;
use crate::normalize::rejoin;
use crate::token_set::token_set_ratio;

/// Sentinel for "not computable": an input was empty, whitespace-only, or
/// tokenized to nothing. Distinct from a genuine 0% match.
pub const NOT_COMPUTABLE: i32 = -1;

/// Phrase-level similarity between free text and an expected phrase, in
/// [0, 100], or [`NOT_COMPUTABLE`].
///
/// Both inputs are tokenized and rejoined with single spaces before the
/// edit-distance percentage is taken, so spacing and sentence punctuation
/// differences cost nothing. Rounding is half-away-from-zero.
pub fn match_phrase_with_score(data: &str, phrase: &str) -> i32 {
    let data = rejoin(data);
    let phrase = rejoin(phrase);
    if data.is_empty() || phrase.is_empty() {
        return NOT_COMPUTABLE;
    }
    distance_percentage(&data, &phrase).round() as i32
}

/// Blended similarity score: 60% edit-distance percentage, 40% token-set
/// ratio, rounded half-away-from-zero. Same [`NOT_COMPUTABLE`] convention as
/// [`match_phrase_with_score`].
///
/// The blend keeps character-level typos and word-level rearrangements from
/// each dominating the other.
pub fn combined_fuzziness_score(data: &str, phrase: &str) -> i32 {
    let data = rejoin(data);
    let phrase = rejoin(phrase);
    if data.is_empty() || phrase.is_empty() {
        return NOT_COMPUTABLE;
    }
    let by_distance = distance_percentage(&data, &phrase);
    let by_token_set = f64::from(token_set_ratio(&data, &phrase));
    (0.6 * by_distance + 0.4 * by_token_set).round() as i32
}
