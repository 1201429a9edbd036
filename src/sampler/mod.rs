//! Answer selection policies.
//!
//! Two policies exist: [`Policy::Uniform`] draws with equal probability over
//! the domain, [`Policy::Biased`] skews toward sentiment-positive labels and
//! scale-high values via a weighted pool. The pool is a multiset built by
//! repeating each candidate proportionally to its weight; a uniform draw over
//! the pool yields the target distribution.

use clap::ValueEnum;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::SamplerError;
use crate::form::{Answer, QuestionKind};

#[cfg(test)]
mod tests;

// ─── Policy ─────────────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, EnumString, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Policy {
    /// Equal probability over the whole domain.
    #[default]
    Uniform,
    /// ~70/20/10 mass split across positive/neutral/negative answers.
    Biased,
}

// ─── Sentiment classification ───────────────────────────────────────────────

/// Labels containing any of these (case-insensitive, substring) are positive.
const POSITIVE_KEYWORDS: [&str; 10] = [
    "very easy",
    "easy",
    "strongly agree",
    "agree",
    "yes",
    "false",
    "definitely",
    "probably",
    "smooth",
    "very smooth",
];

const NEUTRAL_KEYWORDS: [&str; 2] = ["neutral", "not sure"];

const POSITIVE_WEIGHT: usize = 7;
const NEUTRAL_WEIGHT: usize = 2;
const NEGATIVE_WEIGHT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Classifies a choice label by substring containment, not tokenization:
/// "I disagree" contains "agree" and therefore classifies positive. Positive
/// is checked first, so a label matching both keyword lists is positive.
pub(crate) fn classify(label: &str) -> Sentiment {
    let lowered = label.to_lowercase();
    if POSITIVE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Sentiment::Positive
    } else if NEUTRAL_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Sentiment::Neutral
    } else {
        Sentiment::Negative
    }
}

fn sentiment_weight(sentiment: Sentiment) -> usize {
    match sentiment {
        Sentiment::Positive => POSITIVE_WEIGHT,
        Sentiment::Neutral => NEUTRAL_WEIGHT,
        Sentiment::Negative => NEGATIVE_WEIGHT,
    }
}

// ─── Weighted pools ─────────────────────────────────────────────────────────

/// Pool of choice indices, each repeated by its sentiment weight.
fn biased_choice_pool(choices: &[String]) -> Vec<usize> {
    let mut pool = Vec::new();
    for (index, label) in choices.iter().enumerate() {
        let weight = sentiment_weight(classify(label));
        pool.extend(std::iter::repeat_n(index, weight));
    }
    pool
}

/// Pool of scale values weighted toward the top ~30% of the range.
///
/// For `[1, 5]`: positive threshold `ceil(5 - 5*0.3) = 4`, neutral threshold
/// `ceil(5 - 5*0.7) = 2`, so 4–5 weigh 7, 2–3 weigh 2, 1 weighs 1 (pool 19).
fn biased_scale_pool(lower: i64, upper: i64) -> Vec<i64> {
    #[allow(clippy::cast_precision_loss)]
    let span = (upper - lower + 1) as f64;
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let positive_threshold = (upper as f64 - span * 0.3).ceil() as i64;
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let neutral_threshold = (upper as f64 - span * 0.7).ceil() as i64;

    let mut pool = Vec::new();
    for value in lower..=upper {
        let weight = if value >= positive_threshold {
            POSITIVE_WEIGHT
        } else if value >= neutral_threshold {
            NEUTRAL_WEIGHT
        } else {
            NEGATIVE_WEIGHT
        };
        pool.extend(std::iter::repeat_n(value, weight));
    }
    pool
}

// ─── Sampling entry points ──────────────────────────────────────────────────

/// Selects one answer for a question's domain under the given policy.
///
/// Every returned answer is a member of the domain; an empty domain fails
/// with [`SamplerError::EmptyDomain`] instead of producing a null answer.
pub fn sample_answer(kind: &QuestionKind, policy: Policy) -> Result<Answer, SamplerError> {
    match kind {
        QuestionKind::ChoiceSet { choices } => {
            sample_choice(choices, policy).map(Answer::Choice)
        }
        QuestionKind::NumericScale { lower, upper } => {
            sample_scale(*lower, *upper, policy).map(Answer::Scale)
        }
        QuestionKind::Unsupported { type_name } => Err(SamplerError::UnsupportedKind {
            kind: type_name.clone(),
        }),
    }
}

pub fn sample_choice(choices: &[String], policy: Policy) -> Result<String, SamplerError> {
    sample_choice_with(&mut rand::rng(), choices, policy)
}

pub fn sample_scale(lower: i64, upper: i64, policy: Policy) -> Result<i64, SamplerError> {
    sample_scale_with(&mut rand::rng(), lower, upper, policy)
}

pub(crate) fn sample_choice_with<R: Rng + ?Sized>(
    rng: &mut R,
    choices: &[String],
    policy: Policy,
) -> Result<String, SamplerError> {
    match policy {
        Policy::Uniform => choices
            .choose(rng)
            .cloned()
            .ok_or(SamplerError::EmptyDomain),
        Policy::Biased => {
            let pool = biased_choice_pool(choices);
            let index = pool.choose(rng).copied().ok_or(SamplerError::EmptyDomain)?;
            Ok(choices[index].clone())
        }
    }
}

pub(crate) fn sample_scale_with<R: Rng + ?Sized>(
    rng: &mut R,
    lower: i64,
    upper: i64,
    policy: Policy,
) -> Result<i64, SamplerError> {
    if upper < lower {
        return Err(SamplerError::EmptyDomain);
    }
    match policy {
        Policy::Uniform => Ok(rng.random_range(lower..=upper)),
        Policy::Biased => {
            let pool = biased_scale_pool(lower, upper);
            pool.choose(rng).copied().ok_or(SamplerError::EmptyDomain)
        }
    }
}
