//! Field-match confidence engine.
//!
//! Scores free-form text recognized from a physical item (OCR output) against
//! the expected field values of a catalog record, producing a per-field
//! breakdown and a weighted total confidence that the item and the record
//! describe the same thing.
//!
//! ## Pipeline
//!
//! - Unicode normalization: NFD decomposition, diacritic stripping, case
//!   folding ([`normalize`], [`tokenize`])
//! - Character-level similarity: Damerau-Levenshtein with a containment
//!   short-circuit ([`edit_distance`], [`distance_percentage`])
//! - Word-level similarity: token-set fuzzy ratio ([`token_set_ratio`])
//! - Phrase scoring that blends the two ([`match_phrase_with_score`],
//!   [`combined_fuzziness_score`])
//! - Per-field aggregation and weighted composition ([`score_field`],
//!   [`compute_match_result`], [`FieldMatcher`])
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared mutable state. The same specs, content,
//! and thresholds produce the same [`MatchResult`] on any machine, and
//! concurrent calls need no locking.
//!
//! ## Invariants worth knowing
//!
//! - Data-quality problems never error: empty inputs score as the
//!   [`NOT_COMPUTABLE`] sentinel and specs without candidate values are
//!   skipped outright.
//! - Per-field scores are integers in [0, 100] before weighting; weights are
//!   caller-supplied and unconstrained.
//! - Among equal-scoring candidates of a multi-valued field, the last one
//!   evaluated is retained.

mod distance;
mod engine;
mod normalize;
mod phrase;
mod token_set;
mod types;

pub use crate::distance::{distance_percentage, edit_distance, CONTAINED};
pub use crate::engine::{compute_match_result, score_field, FieldMatcher};
pub use crate::normalize::{normalize, tokenize};
pub use crate::phrase::{combined_fuzziness_score, match_phrase_with_score, NOT_COMPUTABLE};
pub use crate::token_set::token_set_ratio;
pub use crate::types::{FieldOutcome, FieldSpec, MatchError, MatchPolicy, MatchResult};
