//! Game state machine.
//!
//! `Start -> Playing -> Feedback -> (Playing | GameOver) -> Playing ...`
//!
//! The session owns the case list, the per-case timer and the score. Only a
//! correct emergency call on a real stroke case adds to the total; every other
//! outcome changes the per-round feedback alone.

pub mod feedback;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cases::{PatientCase, generate_cases};
use crate::config::{GameConfig, RestartPolicy};
use crate::error::{ConfigError, GameError};
use crate::scoring::neurons_saved_whole;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Start,
    Playing,
    Feedback,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    CallEmergency,
    Ignore,
}

/// Four-way result of a decision against ground truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    CorrectCall,
    UnneededCall,
    CorrectIgnore,
    MissedStroke,
}

impl Outcome {
    pub fn evaluate(decision: Decision, is_stroke_case: bool) -> Self {
        match (decision, is_stroke_case) {
            (Decision::CallEmergency, true) => Outcome::CorrectCall,
            (Decision::CallEmergency, false) => Outcome::UnneededCall,
            (Decision::Ignore, false) => Outcome::CorrectIgnore,
            (Decision::Ignore, true) => Outcome::MissedStroke,
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Outcome::CorrectCall | Outcome::CorrectIgnore)
    }

    /// Whether the round's neurons go into the running total.
    pub fn is_credited(self) -> bool {
        self == Outcome::CorrectCall
    }

    /// Neurons shown for the round. A correct ignore had no time pressure.
    pub fn neurons_for(self, reaction_secs: u32) -> u64 {
        match self {
            Outcome::CorrectCall | Outcome::UnneededCall => neurons_saved_whole(reaction_secs),
            Outcome::CorrectIgnore => neurons_saved_whole(0),
            Outcome::MissedStroke => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub outcome: Outcome,
    pub reaction_secs: u32,
    pub neurons_saved: u64,
    pub message: &'static str,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundRecord {
    pub case_id: String,
    pub decision: Decision,
    pub outcome: Outcome,
    pub reaction_secs: u32,
    pub neurons_saved: u64,
    pub credited: bool,
}

pub struct GameSession<R = StdRng> {
    config: GameConfig,
    rng: R,
    phase: GamePhase,
    cases: Vec<PatientCase>,
    index: usize,
    timer_secs: u32,
    total_saved: u64,
    last_feedback: Option<Feedback>,
    history: Vec<RoundRecord>,
}

impl GameSession<StdRng> {
    /// Session seeded from the platform entropy source.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let cases = generate_cases(&config, &mut rng);
        Ok(Self {
            config,
            rng,
            phase: GamePhase::Start,
            cases,
            index: 0,
            timer_secs: 0,
            total_saved: 0,
            last_feedback: None,
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn cases(&self) -> &[PatientCase] {
        &self.cases
    }

    pub fn case_index(&self) -> usize {
        self.index
    }

    pub fn timer_secs(&self) -> u32 {
        self.timer_secs
    }

    pub fn total_saved(&self) -> u64 {
        self.total_saved
    }

    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last_feedback.as_ref()
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn current_case(&self) -> Option<&PatientCase> {
        self.cases.get(self.index)
    }

    pub fn is_last_case(&self) -> bool {
        self.index + 1 >= self.cases.len()
    }

    /// Begin (or restart) a play-through.
    pub fn start(&mut self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Start => {}
            GamePhase::GameOver => {
                if self.config.restart == RestartPolicy::Regenerate {
                    self.cases = generate_cases(&self.config, &mut self.rng);
                }
            }
            phase => return Err(GameError::InvalidTransition { action: "start", phase }),
        }
        self.index = 0;
        self.timer_secs = 0;
        self.total_saved = 0;
        self.last_feedback = None;
        self.history.clear();
        self.phase = GamePhase::Playing;
        log::info!("game started with {} cases", self.cases.len());
        Ok(())
    }

    /// Evaluate the player's choice for the current case and freeze the timer.
    pub fn decide(&mut self, decision: Decision) -> Result<&Feedback, GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::InvalidTransition { action: "decide", phase: self.phase });
        }
        let case = self
            .cases
            .get(self.index)
            .ok_or(GameError::NoCurrentCase { index: self.index })?;

        let reaction_secs = self.timer_secs;
        let outcome = Outcome::evaluate(decision, case.is_stroke_case);
        let neurons_saved = outcome.neurons_for(reaction_secs);
        let credited = outcome.is_credited();
        if credited {
            self.total_saved += neurons_saved;
        }
        self.history.push(RoundRecord {
            case_id: case.id.clone(),
            decision,
            outcome,
            reaction_secs,
            neurons_saved,
            credited,
        });
        log::info!(
            "{}: {:?} after {}s -> {:?} ({} neurons{})",
            case.id,
            decision,
            reaction_secs,
            outcome,
            neurons_saved,
            if credited { ", credited" } else { "" }
        );

        self.phase = GamePhase::Feedback;
        Ok(self.last_feedback.insert(Feedback {
            outcome,
            reaction_secs,
            neurons_saved,
            message: feedback::message(outcome),
            explanation: feedback::explanation(outcome, reaction_secs, neurons_saved),
        }))
    }

    /// Advance past the feedback screen. Returns the phase entered.
    pub fn next_case(&mut self) -> Result<GamePhase, GameError> {
        if self.phase != GamePhase::Feedback {
            return Err(GameError::InvalidTransition { action: "next_case", phase: self.phase });
        }
        if self.is_last_case() {
            self.phase = GamePhase::GameOver;
            log::info!("game over, {} neurons saved", self.total_saved);
        } else {
            self.index += 1;
            self.timer_secs = 0;
            self.phase = GamePhase::Playing;
        }
        Ok(self.phase)
    }

    /// One timer step. Counts only while a case is on screen.
    pub fn tick(&mut self) -> Option<u32> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        self.timer_secs = self.timer_secs.saturating_add(1);
        log::trace!("tick {}", self.timer_secs);
        Some(self.timer_secs)
    }
}
