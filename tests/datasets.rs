// Integration tests for symptom catalogue and case generation invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use time_is_brain::{
    DISTRACTOR_SYMPTOMS, GameConfig, STROKE_SYMPTOMS, generate_case, generate_cases,
};

#[test]
fn catalogue_sizes_and_kinds() {
    assert_eq!(STROKE_SYMPTOMS.len(), 7);
    assert_eq!(DISTRACTOR_SYMPTOMS.len(), 10);
    assert!(STROKE_SYMPTOMS.iter().all(|s| s.is_stroke), "distractor inside stroke set");
    assert!(DISTRACTOR_SYMPTOMS.iter().all(|s| !s.is_stroke), "stroke inside distractor set");
}

#[test]
fn symptom_ids_and_texts_are_unique() {
    let mut ids = HashSet::new();
    let mut texts = HashSet::new();
    for s in STROKE_SYMPTOMS.iter().chain(DISTRACTOR_SYMPTOMS.iter()) {
        assert!(ids.insert(s.id), "duplicate id '{}'", s.id);
        assert!(texts.insert(s.text), "duplicate text '{}'", s.text);
        assert!(!s.text.trim().is_empty(), "empty text for '{}'", s.id);
        let prefix = if s.is_stroke { 's' } else { 'd' };
        assert!(s.id.starts_with(prefix), "id '{}' does not match its kind", s.id);
    }
}

#[test]
fn generated_cases_never_mix_kinds() {
    let mut rng = StdRng::seed_from_u64(2024);
    let cfg = GameConfig::default();
    for i in 0..500 {
        let case = generate_case(&format!("case-{i}"), &cfg, &mut rng);
        assert_eq!(case.symptoms.len(), 1);
        assert!(
            case.symptoms.iter().all(|s| s.is_stroke == case.is_stroke_case),
            "case {} mixes symptom kinds",
            case.id
        );
        let pool = if case.is_stroke_case {
            &STROKE_SYMPTOMS[..]
        } else {
            &DISTRACTOR_SYMPTOMS[..]
        };
        assert!(pool.contains(&case.symptoms[0]));
        assert_eq!(case.description, format!("{}.", case.symptoms[0].text));
    }
}

#[test]
fn both_kinds_appear_at_even_odds() {
    let mut rng = StdRng::seed_from_u64(11);
    let cfg = GameConfig { total_cases: 400, ..GameConfig::default() };
    let cases = generate_cases(&cfg, &mut rng);
    let strokes = cases.iter().filter(|c| c.is_stroke_case).count();
    // 400 fair flips: far outside this band would mean the weighting is broken
    assert!((120..=280).contains(&strokes), "{strokes} stroke cases out of 400");
}
