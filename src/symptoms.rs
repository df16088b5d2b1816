// Symptom catalogue.
// Two disjoint sets: real stroke symptoms and distractors that test false-positive avoidance.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symptom {
    pub id: &'static str,
    pub text: &'static str,
    pub is_stroke: bool,
}

const fn stroke(id: &'static str, text: &'static str) -> Symptom {
    Symptom { id, text, is_stroke: true }
}

const fn distractor(id: &'static str, text: &'static str) -> Symptom {
    Symptom { id, text, is_stroke: false }
}

pub static STROKE_SYMPTOMS: [Symptom; 7] = [
    stroke("s1", "Hängender Mundwinkel"),
    stroke("s2", "Lähmung oder Schwäche in einem Arm"),
    stroke("s3", "Sprachstörungen (verwaschene oder unverständliche Sprache)"),
    stroke("s4", "Plötzliche Verwirrtheit"),
    stroke("s5", "Sehstörungen (z.B. verschwommenes Sehen, Gesichtsfeldausfälle)"),
    stroke("s6", "Plötzlicher, sehr starker Kopfschmerz"),
    stroke("s7", "Gleichgewichts- oder Koordinationsstörungen"),
];

pub static DISTRACTOR_SYMPTOMS: [Symptom; 10] = [
    distractor("d1", "Müdigkeit nach der Schule"),
    distractor("d2", "Prüfungsstress oder Nervosität"),
    distractor("d3", "Bauchschmerzen"),
    distractor("d4", "Kopfschmerzen bei Wetterumschwung"),
    distractor("d5", "Stolpern über ein Hindernis"),
    distractor("d6", "Erkältungssymptome (Husten, Schnupfen)"),
    distractor("d7", "Hungergefühl und Zittern (z.B. bei niedrigem Blutzucker)"),
    distractor("d8", "Konzentrationsschwäche nach wenig Schlaf"),
    distractor("d9", "Migräne mit Aura"),
    distractor("d10", "Angstzustände oder Panikattacke"),
];

/// Catalogue slice for the requested kind.
pub fn catalogue(is_stroke: bool) -> &'static [Symptom] {
    if is_stroke { &STROKE_SYMPTOMS } else { &DISTRACTOR_SYMPTOMS }
}
