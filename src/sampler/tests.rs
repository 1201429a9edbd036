use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_string()).collect()
}

// ── Classification ───────────────────────────────────────

#[test]
fn classification_is_case_insensitive() {
    assert_eq!(classify("Strongly Agree"), Sentiment::Positive);
    assert_eq!(classify("FALSE"), Sentiment::Positive);
    assert_eq!(classify("NEUTRAL"), Sentiment::Neutral);
}

#[test]
fn classification_uses_substring_containment() {
    // "disagree" contains "agree", so the label lands in the positive bucket.
    assert_eq!(classify("I disagree"), Sentiment::Positive);
    assert_eq!(classify("Strongly Disagree"), Sentiment::Positive);
}

#[test]
fn positive_wins_over_neutral_on_double_match() {
    assert_eq!(classify("Definitely not sure"), Sentiment::Positive);
}

#[test]
fn unmatched_labels_default_to_negative() {
    assert_eq!(classify("Very difficult"), Sentiment::Negative);
    assert_eq!(classify("Hard"), Sentiment::Negative);
    assert_eq!(classify(""), Sentiment::Negative);
}

#[test]
fn neutral_keywords_classify_neutral() {
    assert_eq!(classify("Not sure"), Sentiment::Neutral);
    assert_eq!(classify("Neutral"), Sentiment::Neutral);
}

// ── Pool composition ─────────────────────────────────────

#[test]
fn choice_pool_repeats_labels_by_sentiment_weight() {
    let choices = labels(&["Easy", "Neutral", "Hard"]);
    let pool = biased_choice_pool(&choices);

    assert_eq!(pool.len(), 7 + 2 + 1);
    assert_eq!(pool.iter().filter(|&&i| i == 0).count(), 7);
    assert_eq!(pool.iter().filter(|&&i| i == 1).count(), 2);
    assert_eq!(pool.iter().filter(|&&i| i == 2).count(), 1);
}

#[test]
fn choice_pool_is_empty_for_empty_domain() {
    assert!(biased_choice_pool(&[]).is_empty());
}

#[test]
fn scale_pool_1_to_5_has_documented_shape() {
    // Thresholds: positive ceil(5 - 5*0.3) = 4, neutral ceil(5 - 5*0.7) = 2.
    let pool = biased_scale_pool(1, 5);

    assert_eq!(pool.len(), 19);
    assert_eq!(pool.iter().filter(|&&v| v == 5).count(), 7);
    assert_eq!(pool.iter().filter(|&&v| v == 4).count(), 7);
    assert_eq!(pool.iter().filter(|&&v| v == 3).count(), 2);
    assert_eq!(pool.iter().filter(|&&v| v == 2).count(), 2);
    assert_eq!(pool.iter().filter(|&&v| v == 1).count(), 1);
}

#[test]
fn scale_pool_0_to_10_skews_to_top_of_range() {
    // Span 11: positive threshold ceil(10 - 3.3) = 7, neutral ceil(10 - 7.7) = 3.
    let pool = biased_scale_pool(0, 10);

    assert_eq!(pool.len(), 4 * 7 + 4 * 2 + 3);
    assert_eq!(pool.iter().filter(|&&v| v >= 7).count(), 4 * 7);
    assert_eq!(pool.iter().filter(|&&v| (3..7).contains(&v)).count(), 4 * 2);
    assert_eq!(pool.iter().filter(|&&v| v < 3).count(), 3);
}

#[test]
fn single_value_scale_always_returns_that_value() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        assert_eq!(sample_scale_with(&mut rng, 3, 3, Policy::Biased).unwrap(), 3);
        assert_eq!(sample_scale_with(&mut rng, 3, 3, Policy::Uniform).unwrap(), 3);
    }
}

// ── Domain membership ────────────────────────────────────

#[test]
fn uniform_choice_stays_in_domain() {
    let choices = labels(&["a", "b", "c"]);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let picked = sample_choice_with(&mut rng, &choices, Policy::Uniform).unwrap();
        assert!(choices.contains(&picked));
    }
}

#[test]
fn biased_choice_stays_in_domain() {
    let choices = labels(&["Strongly Agree", "Neutral", "Strongly Disagree"]);
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..500 {
        let picked = sample_choice_with(&mut rng, &choices, Policy::Biased).unwrap();
        assert!(choices.contains(&picked));
    }
}

#[test]
fn biased_scale_stays_in_bounds() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let picked = sample_scale_with(&mut rng, 1, 5, Policy::Biased).unwrap();
        assert!((1..=5).contains(&picked));
    }
}

// ── Error conditions ─────────────────────────────────────

#[test]
fn empty_choice_domain_errors_under_both_policies() {
    assert!(matches!(
        sample_choice(&[], Policy::Uniform),
        Err(SamplerError::EmptyDomain)
    ));
    assert!(matches!(
        sample_choice(&[], Policy::Biased),
        Err(SamplerError::EmptyDomain)
    ));
}

#[test]
fn inverted_scale_bounds_error_under_both_policies() {
    assert!(matches!(
        sample_scale(5, 1, Policy::Uniform),
        Err(SamplerError::EmptyDomain)
    ));
    assert!(matches!(
        sample_scale(5, 1, Policy::Biased),
        Err(SamplerError::EmptyDomain)
    ));
}

#[test]
fn unsupported_kind_through_sampler_errors() {
    let kind = QuestionKind::Unsupported {
        type_name: "free_text".into(),
    };
    let err = sample_answer(&kind, Policy::Uniform).unwrap_err();
    assert!(matches!(err, SamplerError::UnsupportedKind { kind } if kind == "free_text"));
}

// ── Distribution ─────────────────────────────────────────

#[test]
fn biased_choice_frequencies_approach_70_20_10() {
    let choices = labels(&["Easy", "Neutral", "Hard"]);
    let mut rng = StdRng::seed_from_u64(42);
    let trials = 50_000usize;
    let mut counts = [0usize; 3];

    for _ in 0..trials {
        let picked = sample_choice_with(&mut rng, &choices, Policy::Biased).unwrap();
        let index = choices.iter().position(|c| *c == picked).unwrap();
        counts[index] += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let freq = |n: usize| n as f64 / trials as f64;
    assert!((freq(counts[0]) - 0.7).abs() < 0.02, "positive: {counts:?}");
    assert!((freq(counts[1]) - 0.2).abs() < 0.02, "neutral: {counts:?}");
    assert!((freq(counts[2]) - 0.1).abs() < 0.02, "negative: {counts:?}");
}

#[test]
fn biased_scale_weights_top_values_seven_to_one() {
    let mut rng = StdRng::seed_from_u64(43);
    let trials = 50_000usize;
    let mut counts = std::collections::HashMap::new();

    for _ in 0..trials {
        let picked = sample_scale_with(&mut rng, 1, 5, Policy::Biased).unwrap();
        *counts.entry(picked).or_insert(0usize) += 1;
    }

    // Pool of 19: each of {4,5} carries 7/19 mass, 1 carries 1/19.
    #[allow(clippy::cast_precision_loss)]
    let freq = |v: i64| *counts.get(&v).unwrap_or(&0) as f64 / trials as f64;
    assert!((freq(5) - 7.0 / 19.0).abs() < 0.02);
    assert!((freq(4) - 7.0 / 19.0).abs() < 0.02);
    assert!((freq(1) - 1.0 / 19.0).abs() < 0.01);
}
