use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

/// Delimiters the tokenizer splits on: plain space plus the punctuation that
/// commonly survives OCR of covers and title pages.
const TOKEN_DELIMITERS: &[char] = &[' ', '.', ',', ';', '!', '?'];

/// Normalizes text for comparison: canonical decomposition (NFD), removal of
/// all non-spacing marks (diacritics), lowercasing, and trimming.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`. Empty or
/// whitespace-only input yields an empty string rather than an error, since
/// OCR output is routinely noisy.
pub fn normalize(text: &str) -> String {
    // Decomposition must run before mark filtering, otherwise precomposed
    // characters like 'ộ' carry their marks through untouched.
    let stripped: String = text
        .nfd()
        .filter(|ch| !ch.is_mark_nonspacing())
        .flat_map(char::to_lowercase)
        .collect();
    stripped.trim().to_string()
}

/// Lowercases `text` and splits it into tokens on spaces and sentence
/// punctuation, dropping empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(TOKEN_DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Tokenizes and rejoins with single spaces. Collapses runs of delimiters so
/// phrase-level comparisons see one canonical spacing.
pub(crate) fn rejoin(text: &str) -> String {
    tokenize(text).join(" ")
}
