// Integration tests (native) for the `time-is-brain` crate.
// Full play-throughs driven with seeded RNGs; no wasm or browser APIs involved.

use rand::SeedableRng;
use rand::rngs::StdRng;
use time_is_brain::{
    ConfigError, Decision, GameConfig, GameError, GamePhase, GameSession, MAX_NEURONS, Outcome,
    UiError, neurons_saved_whole,
};

fn session_with(stroke_probability: f64, seed: u64) -> GameSession<StdRng> {
    let cfg = GameConfig { stroke_probability, ..GameConfig::default() };
    GameSession::with_rng(cfg, StdRng::seed_from_u64(seed)).unwrap()
}

fn wait(s: &mut GameSession<StdRng>, secs: u32) {
    for _ in 0..secs {
        s.tick();
    }
}

#[test]
fn correct_call_on_stroke_banks_neurons() {
    let mut s = session_with(1.0, 1);
    s.start().unwrap();
    wait(&mut s, 10);
    let fb = s.decide(Decision::CallEmergency).unwrap();
    assert_eq!(fb.outcome, Outcome::CorrectCall);
    assert!(fb.message.starts_with('✅'));
    assert_eq!(fb.neurons_saved, 18_683_340);
    assert_eq!(s.total_saved(), 18_683_340);
}

#[test]
fn correct_ignore_shows_full_pool_but_banks_nothing() {
    let mut s = session_with(0.0, 2);
    s.start().unwrap();
    wait(&mut s, 25);
    let fb = s.decide(Decision::Ignore).unwrap();
    assert_eq!(fb.outcome, Outcome::CorrectIgnore);
    assert!(fb.message.starts_with('✅'));
    assert_eq!(fb.neurons_saved, MAX_NEURONS);
    assert_eq!(s.total_saved(), 0);
}

#[test]
fn ignoring_a_stroke_loses_everything() {
    let mut s = session_with(1.0, 3);
    s.start().unwrap();
    wait(&mut s, 3);
    let fb = s.decide(Decision::Ignore).unwrap();
    assert_eq!(fb.outcome, Outcome::MissedStroke);
    assert!(fb.message.starts_with('❌'));
    assert_eq!(fb.neurons_saved, 0);
    assert_eq!(s.total_saved(), 0);
}

#[test]
fn unneeded_call_is_shown_but_not_banked() {
    let mut s = session_with(0.0, 4);
    s.start().unwrap();
    wait(&mut s, 10);
    let fb = s.decide(Decision::CallEmergency).unwrap();
    assert_eq!(fb.outcome, Outcome::UnneededCall);
    assert_eq!(fb.neurons_saved, 18_683_340);
    assert_eq!(s.total_saved(), 0);
}

#[test]
fn total_is_sum_of_credited_rounds() {
    for seed in 0..20 {
        let mut s = session_with(0.5, seed);
        s.start().unwrap();
        let mut expected = 0;
        let mut round = 0u32;
        while s.phase() == GamePhase::Playing {
            wait(&mut s, round * 7);
            let is_stroke = s.current_case().unwrap().is_stroke_case;
            // alternate strategies so all four outcomes show up across seeds
            let decision = if (round + seed as u32) % 2 == 0 {
                Decision::CallEmergency
            } else {
                Decision::Ignore
            };
            let fb = s.decide(decision).unwrap().clone();
            if is_stroke && decision == Decision::CallEmergency {
                expected += neurons_saved_whole(round * 7);
            }
            assert_eq!(fb.reaction_secs, round * 7);
            s.next_case().unwrap();
            round += 1;
        }
        assert_eq!(round, 5);
        assert_eq!(s.total_saved(), expected);
        let credited: u64 = s
            .history()
            .iter()
            .filter(|r| r.credited)
            .map(|r| r.neurons_saved)
            .sum();
        assert_eq!(credited, expected);
    }
}

#[test]
fn five_rounds_then_game_over() {
    let mut s = session_with(0.5, 99);
    s.start().unwrap();
    for i in 0..5 {
        assert_eq!(s.phase(), GamePhase::Playing);
        assert_eq!(s.case_index(), i);
        s.decide(Decision::Ignore).unwrap();
        assert_eq!(s.phase(), GamePhase::Feedback);
        s.next_case().unwrap();
    }
    assert_eq!(s.phase(), GamePhase::GameOver);
    assert_eq!(s.case_index(), 4);
    assert_eq!(s.history().len(), 5);
    assert_eq!(
        s.decide(Decision::CallEmergency).unwrap_err(),
        GameError::InvalidTransition { action: "decide", phase: GamePhase::GameOver }
    );
    assert_eq!(s.tick(), None);
}

#[test]
fn restart_resets_progress() {
    let mut s = session_with(1.0, 5);
    s.start().unwrap();
    while s.phase() != GamePhase::GameOver {
        s.decide(Decision::CallEmergency).unwrap();
        s.next_case().unwrap();
    }
    assert_eq!(s.total_saved(), 5 * MAX_NEURONS);
    s.start().unwrap();
    assert_eq!(s.phase(), GamePhase::Playing);
    assert_eq!(s.case_index(), 0);
    assert_eq!(s.total_saved(), 0);
    assert_eq!(s.timer_secs(), 0);
    assert!(s.history().is_empty());
    assert!(s.last_feedback().is_none());
}

// The config is checked before the page is touched, so this needs no browser.
#[test]
fn mount_rejects_invalid_config_before_touching_the_page() {
    let cfg = GameConfig { total_cases: 0, ..GameConfig::default() };
    assert!(matches!(
        time_is_brain::ui::mount(cfg),
        Err(UiError::Config(ConfigError::NoCases))
    ));
}
