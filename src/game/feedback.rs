// Feedback texts shown after each decision (German, matching the rest of the UI).

use super::Outcome;

pub fn message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::CorrectCall => "✅ Richtig erkannt - Notruf war notwendig!",
        Outcome::CorrectIgnore => "✅ Richtig! Kein Notruf notwendig.",
        Outcome::MissedStroke => "❌ Fehlentscheidung - Symptome nicht erkannt.",
        Outcome::UnneededCall => "❌ Fehlentscheidung - Notruf war nicht notwendig.",
    }
}

pub fn explanation(outcome: Outcome, reaction_secs: u32, neurons_saved: u64) -> String {
    match outcome {
        Outcome::CorrectCall => format!(
            "Die Person hatte eindeutige Schlaganfall-Symptome. \
             Du hast in {} Sekunden reagiert und ca. {} Neuronen gerettet.",
            reaction_secs,
            format_count(neurons_saved)
        ),
        Outcome::CorrectIgnore => {
            "Diese Symptome deuteten nicht auf einen Schlaganfall hin.".to_string()
        }
        Outcome::MissedStroke => "Das war keine gute Entscheidung - bei diesen Symptomen \
                                  muss man sofort 112 rufen! Es gingen wertvolle Neuronen verloren."
            .to_string(),
        Outcome::UnneededCall => "Obwohl schnelles Handeln gut ist, deuteten diese Symptome \
                                  nicht auf einen Schlaganfall hin. \
                                  Ein unnötiger Notruf verbraucht Kapazitäten."
            .to_string(),
    }
}

/// Per-round neuron line under the explanation.
pub fn neuron_line(outcome: Outcome, neurons_saved: u64) -> String {
    let n = format_count(neurons_saved);
    match outcome {
        Outcome::CorrectCall => format!("Du hast ca. {n} Neuronen gerettet!"),
        Outcome::CorrectIgnore => format!("Alle {n} Neuronen bleiben erhalten."),
        Outcome::MissedStroke => "Keine Neuronen gerettet in diesem Fall.".to_string(),
        Outcome::UnneededCall => {
            format!("Verschwendet: Dieser Einsatz hätte ca. {n} Neuronen retten können.")
        }
    }
}

/// Thousands grouping with '.' as used in de-DE (19000000 -> "19.000.000").
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
