use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::game::GamePhase;

/// Rejected state-machine input. The UI treats these as no-ops.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("action '{action}' is not valid in phase {phase:?}")]
    InvalidTransition { action: &'static str, phase: GamePhase },
    #[error("no case at index {index}")]
    NoCurrentCase { index: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("total_cases must be at least 1")]
    NoCases,
    #[error("stroke_probability {0} is outside 0..=1")]
    InvalidProbability(f64),
    #[error("tick_interval_ms must be greater than 0")]
    ZeroTickInterval,
    #[error("invalid config JSON: {0}")]
    Parse(String),
}

/// Failures while mounting or driving the page.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
