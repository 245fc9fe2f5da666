use tracing::debug;

use crate::normalize::normalize;
use crate::phrase::match_phrase_with_score;
use crate::token_set::token_set_ratio;
use crate::types::{FieldOutcome, FieldSpec, MatchError, MatchPolicy, MatchResult};


/// Field names whose specs may carry several acceptable variants, matched
/// case-insensitively. Every candidate is scored and the best one kept; all
/// other fields use their first value only.
const MULTI_CANDIDATE_FIELDS: &[&str] = &["title", "authors"];

fn is_multi_candidate(name: &str) -> bool {
    MULTI_CANDIDATE_FIELDS
        .iter()
        .any(|field| name.eq_ignore_ascii_case(field))
}

/// Scores one field spec against already-normalized content.
///
/// Returns `None` when the spec carries no candidate values; such fields are
/// skipped rather than counted as zero.
///
/// For multi-candidate fields, a later candidate replaces the running best
/// whenever it scores greater than *or equal*: the last value among ties
/// wins.
pub fn score_field(
    spec: &FieldSpec,
    normalized_content: &str,
    min_field_threshold: i32,
) -> Option<FieldOutcome> {
    let mut best: Option<(&str, i32, i32, i32)> = None;

    if is_multi_candidate(&spec.name) {
        for value in &spec.values {
            let (fuzziness, phrase, matched) = score_candidate(value, normalized_content);
            let replace = match best {
                None => true,
                Some((_, _, _, best_matched)) => matched >= best_matched,
            };
            if replace {
                best = Some((value.as_str(), fuzziness, phrase, matched));
            }
        }
    } else {
        let value = spec.values.first()?;
        let (fuzziness, phrase, matched) = score_candidate(value, normalized_content);
        best = Some((value.as_str(), fuzziness, phrase, matched));
    }

    let (chosen_value, fuzziness_score, phrase_score, matched_score) = best?;
    Some(FieldOutcome {
        field_name: spec.name.clone(),
        chosen_value: chosen_value.to_owned(),
        fuzziness_score,
        phrase_score,
        matched_score,
        field_threshold: min_field_threshold,
        passed: matched_score >= min_field_threshold,
    })
}

/// Sub-scores for a single candidate value: (fuzziness, phrase, matched).
/// The matched score is the truncating integer average of the first two.
fn score_candidate(value: &str, normalized_content: &str) -> (i32, i32, i32) {
    let candidate = normalize(value);
    let fuzziness = token_set_ratio(&candidate, normalized_content);
    let phrase = match_phrase_with_score(normalized_content, &candidate);
    let matched = (fuzziness + phrase) / 2;
    (fuzziness, phrase, matched)
}

/// Runs the full scoring pipeline over an ordered set of field specs.
///
/// The OCR content is normalized once; each spec is scored against it in
/// input order. Specs with no candidate values are skipped entirely: they do
/// not appear in the result and contribute nothing to the total. Never fails;
/// data-quality issues degrade to sentinels and skips.
pub fn compute_match_result(
    specs: &[FieldSpec],
    ocr_content: &str,
    confidence_threshold: f64,
    min_field_threshold: i32,
) -> MatchResult {
    let content = normalize(ocr_content);

    let mut field_outcomes = Vec::with_capacity(specs.len());
    let mut total_weighted_score = 0.0;

    for spec in specs {
        let Some(outcome) = score_field(spec, &content, min_field_threshold) else {
            continue;
        };
        total_weighted_score += f64::from(outcome.matched_score) * spec.weight;
        debug!(
            field = %outcome.field_name,
            matched = outcome.matched_score,
            passed = outcome.passed,
            "field_scored"
        );
        field_outcomes.push(outcome);
    }

    MatchResult {
        field_outcomes,
        total_weighted_score,
        confidence_threshold,
    }
}

/// Policy-validating front door for verification calls.
///
/// Wraps [`compute_match_result`] with a [`MatchPolicy`] validated once at
/// construction, so callers embedding the engine in a workflow cannot run
/// with out-of-range thresholds.
pub struct FieldMatcher {
    policy: MatchPolicy,
}

impl FieldMatcher {
    /// Construct a matcher from an explicit policy.
    pub fn new(policy: MatchPolicy) -> Result<Self, MatchError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// The policy this matcher was constructed with.
    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Score `specs` against `ocr_content` under the configured policy.
    pub fn verify(&self, specs: &[FieldSpec], ocr_content: &str) -> MatchResult {
        let result = compute_match_result(
            specs,
            ocr_content,
            self.policy.confidence_threshold,
            self.policy.min_field_threshold,
        );
        debug!(
            fields = result.field_outcomes.len(),
            total = result.total_weighted_score,
            accepted = result.accepted(),
            "verification_complete"
        );
        result
    }
}
