//! Scenario tests for the heuristic classifier.

use verity_core::config::{ClassifierConfig, CustomPattern, VerityConfig};
use verity_core::errors::{ClassifierError, VerityError, VerityErrorCode};
use verity_core::traits::IAnalyzer;
use verity_core::{PatternCategory, VerdictLabel};
use verity_heuristics::{classify, HeuristicClassifier, IndicatorPattern, PatternSet};

const SCENARIO_A: &str = "The shocking truth is out. Wake up sheeple, this conspiracy is everywhere. \
The shocking truth is out. Wake up sheeple, this conspiracy is everywhere.";

const SCENARIO_B: &str = "According to the health agency, research shows the program worked. \
The results were published in a peer-reviewed medical journal on Friday.";

const SCENARIO_C: &str = "The city council met on Tuesday to discuss the new park. \
Residents attended the meeting and asked questions about the schedule.";

const NEUTRAL_FILLER: &str = "The town library extended its opening hours for the summer season this year.";

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Scenarios ──────────────────────────────────────────────────────────────

#[test]
fn scenario_a_sensational_text_is_fake() {
    let verdict = classify(SCENARIO_A).unwrap();
    assert_eq!(verdict.result(), VerdictLabel::Fake);
    assert!(verdict.confidence() >= 0.6, "confidence={}", verdict.confidence());
}

#[test]
fn scenario_b_sourced_text_is_real() {
    let verdict = classify(SCENARIO_B).unwrap();
    assert_eq!(verdict.result(), VerdictLabel::Real);
    assert!(verdict.confidence() >= 0.6, "confidence={}", verdict.confidence());
    assert!(approx(verdict.confidence(), 0.92), "confidence={}", verdict.confidence());
}

#[test]
fn scenario_c_neutral_text_is_uncertain_at_half() {
    let verdict = classify(SCENARIO_C).unwrap();
    assert_eq!(verdict.result(), VerdictLabel::Uncertain);
    assert_eq!(verdict.confidence(), 0.5);
}

#[test]
fn scenario_d_three_fake_indicators_give_point_nine() {
    let report = HeuristicClassifier::new()
        .classify_with_report(SCENARIO_A)
        .unwrap();
    assert_eq!(report.signals.fake_indicators, 3);
    assert_eq!(report.signals.real_indicators, 0);
    assert_eq!(report.verdict.result(), VerdictLabel::Fake);
    assert!(approx(report.verdict.confidence(), 0.9));
}

// ── Boundaries ─────────────────────────────────────────────────────────────

#[test]
fn fake_equal_to_real_plus_margin_is_uncertain() {
    // hoax, cover_up, conspiracy against according_to: 3 == 1 + 2.
    let text = "Critics call it a hoax and a cover-up, part of a wider conspiracy, \
                according to posts shared online over the weekend.";
    let report = HeuristicClassifier::new().classify_with_report(text).unwrap();
    assert_eq!(report.signals.fake_indicators, 3);
    assert_eq!(report.signals.real_indicators, 1);
    assert_eq!(report.verdict.result(), VerdictLabel::Uncertain);
}

#[test]
fn real_equal_to_fake_plus_margin_is_uncertain() {
    let text = "According to officials, research shows the claim is a hoax. \
                The analysis was shared widely with local residents.";
    let report = HeuristicClassifier::new().classify_with_report(text).unwrap();
    assert_eq!(report.signals.real_indicators, 2);
    assert_eq!(report.signals.fake_indicators, 1);
    assert_eq!(report.verdict.result(), VerdictLabel::Uncertain);
    // One quality pattern (analysis).
    assert!(approx(report.verdict.confidence(), 0.55));
}

#[test]
fn repeated_pattern_counts_once() {
    let text = "conspiracy ".repeat(20);
    let report = HeuristicClassifier::new().classify_with_report(&text).unwrap();
    assert_eq!(report.signals.matched_fake, vec!["conspiracy"]);
    assert_eq!(report.verdict.result(), VerdictLabel::Uncertain);
}

// ── Length precondition ────────────────────────────────────────────────────

#[test]
fn short_text_is_input_too_short() {
    let err = classify("short").unwrap_err();
    assert_eq!(err.error_code(), "INPUT_TOO_SHORT");
    match err {
        VerityError::ClassifierError(ClassifierError::InputTooShort { length, minimum }) => {
            assert_eq!(length, 5);
            assert_eq!(minimum, 50);
        }
        other => panic!("expected InputTooShort, got {other:?}"),
    }
}

#[test]
fn length_is_measured_after_trimming() {
    let padded = format!("{}{}{}", " ".repeat(40), "forty six characters is not quite enough here", " ".repeat(40));
    assert!(classify(&padded).is_err());
}

#[test]
fn length_counts_characters_not_bytes() {
    // 30 two-byte characters: 60 bytes but only 30 characters.
    let text = "é".repeat(30);
    assert!(matches!(
        classify(&text),
        Err(VerityError::ClassifierError(ClassifierError::InputTooShort { length: 30, .. }))
    ));
}

#[test]
fn exactly_minimum_length_is_accepted() {
    let text = "The committee will publish its schedule next week.";
    assert_eq!(text.chars().count(), 50);
    assert!(classify(text).is_ok());
}

// ── Escalations ────────────────────────────────────────────────────────────

#[test]
fn shouting_adds_one_fake_indicator() {
    let text = "BREAKING NEWS the town library extended its opening hours for the summer season this year";
    let report = HeuristicClassifier::new().classify_with_report(text).unwrap();
    assert_eq!(report.signals.all_caps_runs, 2);
    assert!(report.signals.all_caps_escalated);
    assert!(!report.signals.emotional_escalated);
    assert!(report.signals.matched_fake.is_empty());
    assert_eq!(report.signals.fake_indicators, 1);
}

#[test]
fn emotional_language_adds_one_fake_indicator() {
    let text = format!("What an amazing and terrible and horrible day. {NEUTRAL_FILLER}");
    let report = HeuristicClassifier::new().classify_with_report(&text).unwrap();
    assert_eq!(report.signals.emotional_words, 3);
    assert!(report.signals.emotional_escalated);
    assert!(!report.signals.all_caps_escalated);
    assert_eq!(report.signals.fake_indicators, 1);
}

#[test]
fn escalations_can_tip_the_verdict() {
    // One pattern (hoax) plus both escalations: 3 > 0 + 2.
    let text = "This HOAX is DISGUSTING and the people behind it are EVIL and I hate them, truly hate them.";
    let report = HeuristicClassifier::new().classify_with_report(text).unwrap();
    assert_eq!(report.signals.matched_fake, vec!["hoax"]);
    assert!(report.signals.all_caps_escalated);
    assert!(report.signals.emotional_escalated);
    assert_eq!(report.verdict.result(), VerdictLabel::Fake);
    assert!(approx(report.verdict.confidence(), 0.9));
}

#[test]
fn acronyms_in_long_text_do_not_escalate() {
    let text = format!("Officials from NASA met partners today. {NEUTRAL_FILLER} {NEUTRAL_FILLER}");
    let report = HeuristicClassifier::new().classify_with_report(&text).unwrap();
    assert_eq!(report.signals.all_caps_runs, 1);
    assert!(!report.signals.all_caps_escalated);
}

// ── Reasoning ──────────────────────────────────────────────────────────────

#[test]
fn reasoning_cites_the_branch_count() {
    let fake = classify(SCENARIO_A).unwrap();
    assert!(fake.reasoning().contains("Found 3 misinformation indicators"));

    let real = classify(SCENARIO_B).unwrap();
    assert!(real.reasoning().contains("Found 4 credibility indicators"));

    let uncertain = classify(SCENARIO_C).unwrap();
    assert!(uncertain.reasoning().contains("independent"));
}

// ── Configuration ──────────────────────────────────────────────────────────

#[test]
fn custom_margin_changes_the_decision() {
    let classifier = HeuristicClassifier::with_config(ClassifierConfig {
        hysteresis_margin: 0,
        ..ClassifierConfig::default()
    })
    .unwrap();
    let text = format!("They call it a hoax. {NEUTRAL_FILLER}");
    let verdict = classifier.classify(&text).unwrap();
    assert_eq!(verdict.result(), VerdictLabel::Fake);
    assert!(approx(verdict.confidence(), 0.7));
}

#[test]
fn invalid_calibration_is_rejected() {
    let err = HeuristicClassifier::with_config(ClassifierConfig {
        min_confidence: 0.0,
        ..ClassifierConfig::default()
    })
    .unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn inverted_clamp_bounds_are_rejected_before_scoring() {
    let config = ClassifierConfig {
        min_confidence: 0.9,
        max_confidence: 0.5,
        ..ClassifierConfig::default()
    };
    let err = HeuristicClassifier::with_config(config.clone()).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let mut file_config = VerityConfig::default();
    file_config.classifier = config;
    assert!(HeuristicClassifier::from_config(&file_config).is_err());
}

#[test]
fn unknown_disabled_pattern_is_rejected() {
    let mut config = VerityConfig::default();
    config.patterns.disabled = vec!["conspiracyy".to_string()];
    let err = HeuristicClassifier::from_config(&config).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("patterns.disabled"), "{err}");
}

#[test]
fn custom_minimum_length_is_enforced() {
    let classifier = HeuristicClassifier::with_config(ClassifierConfig {
        min_article_chars: 200,
        ..ClassifierConfig::default()
    })
    .unwrap();
    assert!(classifier.classify(SCENARIO_C).is_err());
}

#[test]
fn config_file_disables_and_adds_patterns() {
    let mut config = VerityConfig::default();
    config.patterns.disabled = vec!["conspiracy".to_string()];
    config.patterns.custom = vec![CustomPattern {
        name: "chemtrails".to_string(),
        category: PatternCategory::Fake,
        regex: r"\bchemtrails?\b".to_string(),
    }];
    let classifier = HeuristicClassifier::from_config(&config).unwrap();
    assert!(!classifier.patterns().contains("conspiracy"));
    assert!(classifier.patterns().contains("chemtrails"));

    let text = format!("The Chemtrails conspiracy is spreading again. {NEUTRAL_FILLER}");
    let report = classifier.classify_with_report(&text).unwrap();
    assert_eq!(report.signals.matched_fake, vec!["chemtrails"]);
}

#[test]
fn invalid_custom_pattern_fails_construction() {
    let mut config = VerityConfig::default();
    config.patterns.custom = vec![CustomPattern {
        name: "broken".to_string(),
        category: PatternCategory::Real,
        regex: "(unclosed".to_string(),
    }];
    let err = HeuristicClassifier::from_config(&config).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_PATTERN");
}

#[test]
fn pattern_sets_swap_without_touching_scoring() {
    let patterns = PatternSet::empty()
        .with_pattern(IndicatorPattern::new("alpha", PatternCategory::Real, "alpha").unwrap())
        .with_pattern(IndicatorPattern::new("beta", PatternCategory::Real, "beta").unwrap())
        .with_pattern(IndicatorPattern::new("gamma", PatternCategory::Real, "gamma").unwrap());
    let classifier = HeuristicClassifier::new().with_patterns(patterns);

    let text = format!("Alpha, beta and gamma were all observed. {NEUTRAL_FILLER}");
    let verdict = classifier.classify(&text).unwrap();
    assert_eq!(verdict.result(), VerdictLabel::Real);
    assert!(approx(verdict.confidence(), 0.84));

    // The built-in tables no longer apply.
    assert_eq!(classifier.classify(SCENARIO_A).unwrap().result(), VerdictLabel::Uncertain);
}

// ── Report, batch, trait ───────────────────────────────────────────────────

#[test]
fn report_lists_no_degraded_patterns() {
    let report = HeuristicClassifier::new().classify_with_report(SCENARIO_B).unwrap();
    assert!(report.degraded_patterns.is_empty());
    assert_eq!(
        report.signals.matched_real,
        vec!["according_to", "research_shows", "published_in", "peer_reviewed"]
    );
}

#[test]
fn batch_matches_sequential_in_order() {
    let classifier = HeuristicClassifier::new();
    let inputs = [SCENARIO_A, "short", SCENARIO_B, SCENARIO_C];
    let batch = classifier.classify_batch(&inputs);
    assert_eq!(batch.len(), inputs.len());
    for (input, result) in inputs.iter().zip(&batch) {
        match (classifier.classify(input), result) {
            (Ok(expected), Ok(actual)) => assert_eq!(&expected, actual),
            (Err(_), Err(_)) => {}
            (expected, actual) => panic!("mismatch: {expected:?} vs {actual:?}"),
        }
    }
}

#[test]
fn batch_accepts_owned_strings() {
    let inputs = vec![SCENARIO_C.to_string(); 8];
    let results = HeuristicClassifier::new().classify_batch(&inputs);
    assert!(results.iter().all(|r| r.is_ok()));
}

#[test]
fn classifier_is_usable_as_analyzer() {
    let analyzer: Box<dyn IAnalyzer> = Box::new(HeuristicClassifier::new());
    assert_eq!(analyzer.name(), "heuristic");
    let verdict = analyzer.analyze(SCENARIO_B).unwrap();
    assert_eq!(verdict.result(), VerdictLabel::Real);
}

#[test]
fn classifier_is_shareable_across_threads() {
    let classifier = std::sync::Arc::new(HeuristicClassifier::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = std::sync::Arc::clone(&classifier);
            std::thread::spawn(move || c.classify(SCENARIO_A).unwrap())
        })
        .collect();
    let expected = classifier.classify(SCENARIO_A).unwrap();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn verdict_json_has_wire_shape() {
    let verdict = classify(SCENARIO_C).unwrap();
    let json = serde_json::to_value(&verdict).unwrap();
    assert_eq!(json["result"], "uncertain");
    assert_eq!(json["confidence"], 0.5);
    assert_eq!(json.as_object().unwrap().len(), 3);
}
