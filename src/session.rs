//! The saved form session and the request it turns into.
//!
//! [`SavedConfig`] is the record the form is persisted as between runs:
//! prompt text plus everything needed to rebuild the dimension controls.
//! Its JSON shape is camelCase and compatible with records written before
//! the lock ratio was stored:
//!
//! ```json
//! {
//!   "prompt": "a lighthouse at dusk",
//!   "negativePrompt": "",
//!   "width": 1024,
//!   "height": 576,
//!   "aspectLocked": true,
//!   "isVertical": false,
//!   "aspectRatio": [16, 9]
//! }
//! ```
//!
//! When `aspectRatio` is missing and `aspectLocked` is true, the ratio is
//! taken from `width / height` on load.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{DefaultsConfig, GenerationConfig};
use crate::dimensions::{
    AspectRatio, AspectState, DimensionPair, Orientation, SolverState, normalize_dimension,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("prompt is empty; set one with `genimg prompt <TEXT>`")]
    EmptyPrompt,
}

/// Persisted form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedConfig {
    pub prompt: String,
    #[serde(default)]
    pub negative_prompt: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub aspect_locked: bool,
    #[serde(default)]
    pub is_vertical: bool,
    /// Lock ratio as `[width, height]`, kept so a lock survives a restart
    /// without drifting to whatever the pair rounds to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<[u32; 2]>,
}

impl SavedConfig {
    /// Fresh session: empty prompts, configured seed dimensions, unlocked.
    pub fn from_defaults(defaults: &DefaultsConfig) -> Self {
        Self {
            prompt: String::new(),
            negative_prompt: String::new(),
            width: defaults.width,
            height: defaults.height,
            aspect_locked: false,
            is_vertical: false,
            aspect_ratio: None,
        }
    }

    /// Rebuild the dimension controls from this record.
    pub fn solver_state(&self) -> SolverState {
        let stored = self
            .aspect_ratio
            .and_then(|[w, h]| AspectRatio::new(w, h));
        let ratio = match stored {
            Some(ratio) => Some(ratio),
            None if self.aspect_locked => AspectRatio::new(self.width, self.height),
            None => None,
        };
        SolverState {
            pair: DimensionPair::new(self.width, self.height),
            aspect: AspectState {
                locked: self.aspect_locked && ratio.is_some(),
                ratio,
            },
            orientation: Orientation::from_vertical(self.is_vertical),
        }
    }

    /// Write the dimension controls back into this record.
    pub fn apply_solver_state(&mut self, state: &SolverState) {
        self.width = state.pair.width;
        self.height = state.pair.height;
        self.aspect_locked = state.aspect.locked;
        self.is_vertical = state.orientation.is_vertical();
        self.aspect_ratio = state.aspect.ratio.map(|ratio| {
            let (w, h) = ratio.terms();
            [w, h]
        });
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_negative_prompt(&mut self, negative_prompt: impl Into<String>) {
        self.negative_prompt = negative_prompt.into();
    }

    /// Build the generation request for the current form.
    ///
    /// The prompt is trimmed and must not be empty. Dimensions that never
    /// went through an edit (seed defaults, hand-edited records) are put on
    /// the grid here; committed values pass through unchanged.
    pub fn to_request(&self) -> Result<GenerationRequest, SessionError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(SessionError::EmptyPrompt);
        }
        Ok(GenerationRequest {
            prompt: prompt.to_string(),
            negative_prompt: self.negative_prompt.clone(),
            width: committed("width", self.width),
            height: committed("height", self.height),
        })
    }
}

fn committed(side: &str, value: u32) -> u32 {
    let normalized = normalize_dimension(value as f64);
    if normalized != value {
        log::warn!("{side} {value} is not a committed dimension; sending {normalized}");
    }
    normalized
}

/// Flat request payload handed to the generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub width: u32,
    pub height: u32,
}

impl GenerationRequest {
    /// Provider-side body for this request.
    pub fn provider_body(&self, generation: &GenerationConfig) -> serde_json::Value {
        serde_json::json!({
            "model": generation.model,
            "prompt": self.prompt,
            "negative_prompt": self.negative_prompt,
            "width": self.width,
            "height": self.height,
            "steps": generation.steps,
            "n": generation.count,
            "response_format": generation.response_format,
        })
    }
}
