//! Time Is Brain core crate.
//!
//! A short quiz round: each case shows one patient symptom and the player decides
//! between calling 112 and ignoring it while a clock runs. Correct emergency calls
//! on real stroke cases bank "neurons saved"; the faster the call, the more.
//!
//! The game core (`symptoms`, `cases`, `scoring`, `game`) is plain Rust and runs
//! natively under `cargo test`; `ui` is the wasm/DOM layer exposed through
//! `start_game()`.

use wasm_bindgen::prelude::*;

pub mod cases;
pub mod config;
pub mod error;
pub mod game;
pub mod scoring;
pub mod symptoms;
pub mod ui;

pub use cases::{PatientCase, generate_case, generate_cases};
pub use config::{GameConfig, RestartPolicy};
pub use error::{ConfigError, GameError, UiError};
pub use game::{Decision, Feedback, GamePhase, GameSession, Outcome, RoundRecord};
pub use scoring::{MAX_NEURONS, NEURONS_LOST_PER_SECOND, neurons_saved, neurons_saved_whole};
pub use symptoms::{DISTRACTOR_SYMPTOMS, STROKE_SYMPTOMS, Symptom};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Install at the most verbose level; the configured filter narrows it below.
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::warn!("logger already installed");
    }
    log::set_max_level(GameConfig::default().level_filter());
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Mount the game with default settings.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    ui::mount(GameConfig::default())?;
    Ok(())
}

/// Mount the game with a (partial) JSON config, e.g. `{"total_cases": 3}`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json).map_err(UiError::from)?;
    log::set_max_level(config.level_filter());
    ui::mount(config)?;
    Ok(())
}

/// Stop the timer and remove the game from the page.
#[wasm_bindgen]
pub fn stop_game() {
    ui::unmount();
}
