//! Patient case generation.
//!
//! Each case carries exactly one symptom: a coin flip (weighted by
//! `GameConfig::stroke_probability`) picks the catalogue, then one symptom is
//! drawn uniformly from it.

use rand::Rng;

use crate::config::GameConfig;
use crate::symptoms::{Symptom, catalogue};

/// Number of portraits offered by the avatar service.
pub const AVATAR_POOL: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct PatientCase {
    pub id: String,
    pub description: String,
    pub symptoms: Vec<Symptom>,
    pub is_stroke_case: bool,
    pub patient_image: Option<String>,
}

pub fn generate_case<R: Rng + ?Sized>(
    id: &str,
    config: &GameConfig,
    rng: &mut R,
) -> PatientCase {
    let p = config.stroke_probability;
    let is_stroke_case = rng.gen_bool(if (0.0..=1.0).contains(&p) { p } else { 0.5 });
    let pool = catalogue(is_stroke_case);
    let symptoms = vec![pool[rng.gen_range(0..pool.len())]];
    let description = describe(&symptoms);
    let avatar = rng.gen_range(0..AVATAR_POOL);
    PatientCase {
        id: id.to_string(),
        description,
        symptoms,
        is_stroke_case,
        patient_image: Some(format!(
            "{}/{}",
            config.avatar_base_url.trim_end_matches('/'),
            avatar
        )),
    }
}

/// A full round sequence with ids `case-1..=case-N`.
pub fn generate_cases<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Vec<PatientCase> {
    (1..=config.total_cases)
        .map(|i| generate_case(&format!("case-{i}"), config, rng))
        .collect()
}

// Joined symptom texts, terminated with a full stop.
fn describe(symptoms: &[Symptom]) -> String {
    let mut out = symptoms.iter().map(|s| s.text).collect::<Vec<_>>().join(", ");
    out.push('.');
    out
}
