//! HTML for each game phase.
//!
//! Pure string rendering so every screen can be checked natively; `ui` swaps the
//! result into the root element. Buttons carry a `data-action` attribute that
//! the delegated click handler maps back to [`Action`].

use std::fmt::Write as _;

use rand::Rng;

use crate::game::feedback::{format_count, neuron_line};
use crate::game::{Decision, GamePhase, GameSession, Outcome};

pub const TIMER_ID: &str = "tib-timer";

const CALL_LABEL: &str = "112 wählen";
const IGNORE_LABEL: &str = "Ignorieren";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Start,
    Decide(Decision),
    Next,
    Restart,
}

impl Action {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "start" => Some(Action::Start),
            "call" => Some(Action::Decide(Decision::CallEmergency)),
            "ignore" => Some(Action::Decide(Decision::Ignore)),
            "next" => Some(Action::Next),
            "restart" => Some(Action::Restart),
            _ => None,
        }
    }

    pub fn attr(self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Decide(Decision::CallEmergency) => "call",
            Action::Decide(Decision::Ignore) => "ignore",
            Action::Next => "next",
            Action::Restart => "restart",
        }
    }
}

/// Elapsed seconds as `MM:SS`. Minutes keep growing past 99.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn timer_text(secs: u32) -> String {
    format!("⏱️ Zeit: {}", format_clock(secs))
}

pub fn render<R: Rng>(session: &GameSession<R>) -> String {
    match session.phase() {
        GamePhase::Start => render_start(),
        GamePhase::Playing => render_playing(session).unwrap_or_else(render_loading),
        GamePhase::Feedback => render_feedback(session).unwrap_or_else(render_loading),
        GamePhase::GameOver => render_game_over(session),
    }
}

fn render_loading() -> String {
    "<div class='tib-screen'><p>Lade Spiel...</p></div>".to_string()
}

fn render_start() -> String {
    let mut html = String::new();
    html.push_str("<div class='tib-screen'>");
    html.push_str("<h1 style='font-size:3em;'>🧠 Time Is Brain!</h1>");
    html.push_str(
        "<p style='font-size:1.25em;max-width:28em;'>\
         Erkenne Schlaganfall-Symptome und rette Leben. Jede Sekunde zählt!</p>",
    );
    html.push_str(&button(Action::Start, "Spiel starten"));
    html.push_str("</div>");
    html
}

fn render_playing<R: Rng>(session: &GameSession<R>) -> Option<String> {
    let case = session.current_case()?;
    let mut html = String::new();
    html.push_str("<div class='tib-screen'>");
    let _ = write!(
        html,
        "<div class='tib-status'><span id='{}'>{}</span>\
         <span>🧠 Gerettete Neuronen: {}</span></div>",
        TIMER_ID,
        timer_text(session.timer_secs()),
        format_count(session.total_saved())
    );
    html.push_str("<div class='tib-card'>");
    // Decorative only; a failed load just shows the alt text.
    if let Some(src) = &case.patient_image {
        let _ = write!(
            html,
            "<img src='{}' alt='Patient' width='192' height='192' \
             style='border-radius:50%;border:4px solid #f43f5e;'>",
            escape(src)
        );
    }
    let _ = write!(
        html,
        "<h2 style='color:#f43f5e;'>Fall #{}</h2><p style='font-size:1.25em;'>{}</p>",
        session.case_index() + 1,
        escape(&case.description)
    );
    html.push_str("</div><div class='tib-actions'>");
    html.push_str(&button(Action::Decide(Decision::CallEmergency), CALL_LABEL));
    html.push_str(&button(Action::Decide(Decision::Ignore), IGNORE_LABEL));
    html.push_str("</div></div>");
    Some(html)
}

fn render_feedback<R: Rng>(session: &GameSession<R>) -> Option<String> {
    session.current_case()?;
    let fb = session.last_feedback()?;
    let color = if fb.outcome.is_correct() { "#16a34a" } else { "#dc2626" };
    let mut html = String::new();
    let _ = write!(
        html,
        "<div class='tib-screen'><div class='tib-card' style='border:4px solid {color};'>"
    );
    let _ = write!(html, "<h2 style='color:{color};'>Ergebnis</h2>");
    let _ = write!(html, "<p style='font-size:1.5em;'>{}</p>", fb.message);
    let _ = write!(html, "<p>{}</p>", escape(&fb.explanation));
    let line_color = match fb.outcome {
        Outcome::CorrectCall => "#f43f5e",
        Outcome::MissedStroke | Outcome::UnneededCall => "#dc2626",
        Outcome::CorrectIgnore => "#16a34a",
    };
    let _ = write!(
        html,
        "<p style='font-weight:600;color:{line_color};'>{}</p>",
        neuron_line(fb.outcome, fb.neurons_saved)
    );
    let label = if session.is_last_case() {
        "Ergebnisse anzeigen"
    } else {
        "Nächster Fall"
    };
    html.push_str(&button(Action::Next, label));
    html.push_str("</div></div>");
    Some(html)
}

fn render_game_over<R: Rng>(session: &GameSession<R>) -> String {
    let mut html = String::new();
    html.push_str("<div class='tib-screen'><div class='tib-card'>");
    html.push_str("<h1>Spiel beendet!</h1>");
    let _ = write!(
        html,
        "<p style='font-size:1.75em;'>Du hast insgesamt \
         <strong style='color:#f43f5e;'>{}</strong> Neuronen gerettet.</p>",
        format_count(session.total_saved())
    );
    html.push_str(
        "<p>In echten Notfällen zählt jede Sekunde. Erkenne die Symptome und handle!<br>\
         Denke immer an den <strong>FAST-Test</strong>:<br>\
         <strong>F</strong>ace (Gesicht), <strong>A</strong>rms (Arme), \
         <strong>S</strong>peech (Sprache), <strong>T</strong>ime (Zeit - sofort 112).</p>",
    );
    if !session.history().is_empty() {
        html.push_str(
            "<table class='tib-history'><tr><th>Fall</th><th>Entscheidung</th>\
             <th>Zeit</th><th>Neuronen</th></tr>",
        );
        for (i, round) in session.history().iter().enumerate() {
            let mark = if round.outcome.is_correct() { "✅" } else { "❌" };
            let decision = match round.decision {
                Decision::CallEmergency => CALL_LABEL,
                Decision::Ignore => IGNORE_LABEL,
            };
            let neurons = if round.credited {
                format_count(round.neurons_saved)
            } else {
                "-".to_string()
            };
            let _ = write!(
                html,
                "<tr><td>#{}</td><td>{mark} {decision}</td><td>{}</td><td>{neurons}</td></tr>",
                i + 1,
                format_clock(round.reaction_secs)
            );
        }
        html.push_str("</table>");
    }
    html.push_str(&button(Action::Restart, "Erneut spielen"));
    html.push_str("</div>");
    html.push_str(
        "<footer style='font-size:0.85em;opacity:0.8;'>Denke daran: Dieses Spiel ist eine \
         Vereinfachung. Im Zweifel immer den Notruf 112 wählen!</footer>",
    );
    html.push_str("</div>");
    html
}

fn button(action: Action, label: &str) -> String {
    format!("<button type='button' data-action='{}'>{}</button>", action.attr(), label)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(stroke_probability: f64, total_cases: usize) -> GameSession<StdRng> {
        let cfg = GameConfig {
            stroke_probability,
            total_cases,
            ..GameConfig::default()
        };
        GameSession::with_rng(cfg, StdRng::seed_from_u64(5)).unwrap()
    }

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn action_attrs_round_trip() {
        for a in [
            Action::Start,
            Action::Next,
            Action::Restart,
            Action::Decide(Decision::Ignore),
            Action::Decide(Decision::CallEmergency),
        ] {
            assert_eq!(Action::from_attr(a.attr()), Some(a));
        }
        assert_eq!(Action::from_attr("fly"), None);
    }

    #[test]
    fn start_screen_offers_start() {
        let s = session(0.5, 5);
        let html = render(&s);
        assert!(html.contains("Time Is Brain"));
        assert!(html.contains("data-action='start'"));
    }

    #[test]
    fn playing_screen_shows_case() {
        let mut s = session(1.0, 5);
        s.start().unwrap();
        s.tick();
        let html = render(&s);
        assert!(html.contains("Fall #1"));
        assert!(html.contains("⏱️ Zeit: 00:01"));
        assert!(html.contains(&escape(&s.cases()[0].description)));
        assert!(html.contains("data-action='call'"));
        assert!(html.contains("data-action='ignore'"));
    }

    #[test]
    fn feedback_labels_last_case_button() {
        let mut s = session(0.0, 2);
        s.start().unwrap();
        s.decide(Decision::Ignore).unwrap();
        assert!(render(&s).contains("Nächster Fall"));
        s.next_case().unwrap();
        s.decide(Decision::CallEmergency).unwrap();
        let html = render(&s);
        assert!(html.contains("Ergebnisse anzeigen"));
        assert!(html.contains("Verschwendet"));
    }

    #[test]
    fn game_over_lists_rounds_and_fast() {
        let mut s = session(1.0, 1);
        s.start().unwrap();
        s.decide(Decision::CallEmergency).unwrap();
        s.next_case().unwrap();
        let html = render(&s);
        assert!(html.contains("Spiel beendet!"));
        assert!(html.contains("FAST-Test"));
        assert!(html.contains("19.000.000"));
        assert!(html.contains("data-action='restart'"));
    }

    #[test]
    fn escape_markup() {
        assert_eq!(escape("<b>'x' & \"y\""), "&lt;b&gt;&#39;x&#39; &amp; &quot;y&quot;");
    }
}
