use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One catalog attribute to verify against the recognized text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSpec {
    /// Attribute identifier, e.g. `"Title"` or `"Publisher"`. The aggregator
    /// keys its multi-candidate policy off this name, case-insensitively.
    pub name: String,
    /// Acceptable values for the attribute, in caller order. A title field
    /// commonly carries both the bare title and a title-plus-subtitle variant.
    pub values: Vec<String>,
    /// Importance multiplier applied to the matched score when summing the
    /// total confidence. Caller-supplied and unconstrained; a negative weight
    /// simply produces a negative contribution.
    pub weight: f64,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, values: Vec<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            values,
            weight,
        }
    }
}

/// Per-field scoring outcome. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldOutcome {
    /// Name copied from the originating [`FieldSpec`].
    pub field_name: String,
    /// The candidate value (as supplied by the caller) that won the
    /// per-field selection.
    pub chosen_value: String,
    /// Token-set similarity of the chosen value against the content, 0-100.
    pub fuzziness_score: i32,
    /// Phrase-level edit-distance similarity, 0-100.
    pub phrase_score: i32,
    /// Truncating integer average of the two sub-scores.
    pub matched_score: i32,
    /// Per-field pass threshold the outcome was judged against.
    pub field_threshold: i32,
    /// Whether `matched_score` reached `field_threshold`.
    pub passed: bool,
}

/// Aggregate verification result for one scoring call.
///
/// `total_weighted_score` is `Σ(matched_score_i * weight_i)` over every field
/// that carried at least one candidate value; fields with no candidates are
/// absent from `field_outcomes` entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Per-field outcomes, in the same order as the input specs.
    pub field_outcomes: Vec<FieldOutcome>,
    /// Weighted sum of matched scores.
    pub total_weighted_score: f64,
    /// The cutoff this result was produced under, carried along so the
    /// consuming workflow can render the accept/reject decision later.
    pub confidence_threshold: f64,
}

impl MatchResult {
    /// Whether the weighted total reached the confidence threshold.
    pub fn accepted(&self) -> bool {
        self.total_weighted_score >= self.confidence_threshold
    }
}

/// Thresholds applied during verification.
///
/// Cheap to clone and serde-friendly so it can sit in a larger workflow
/// config or travel across process boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchPolicy {
    /// Cutoff for the total weighted score.
    #[serde(default = "MatchPolicy::default_confidence_threshold")]
    pub confidence_threshold: f64,
    /// Per-field pass threshold in [0, 100].
    #[serde(default = "MatchPolicy::default_min_field_threshold")]
    pub min_field_threshold: i32,
}

impl MatchPolicy {
    pub(crate) fn default_confidence_threshold() -> f64 {
        70.0
    }

    pub(crate) fn default_min_field_threshold() -> i32 {
        60
    }

    /// Validate the policy before use.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.confidence_threshold.is_finite() || self.confidence_threshold < 0.0 {
            return Err(MatchError::InvalidPolicy(
                "confidence_threshold must be finite and >= 0.0".into(),
            ));
        }
        if !(0..=100).contains(&self.min_field_threshold) {
            return Err(MatchError::InvalidPolicy(
                "min_field_threshold must be between 0 and 100".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            confidence_threshold: Self::default_confidence_threshold(),
            min_field_threshold: Self::default_min_field_threshold(),
        }
    }
}

/// Errors produced by the verification layer.
///
/// Data-quality problems never surface here; missing or empty inputs degrade
/// to sentinel scores or skipped fields instead, so noisy OCR cannot fail a
/// whole scoring call.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Policy thresholds out of range.
    #[error("invalid match policy: {0}")]
    InvalidPolicy(String),
}
