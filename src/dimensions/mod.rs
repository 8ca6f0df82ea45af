//! Output dimensions for a generation request. Pure, no I/O.
//!
//! | Concern | Where |
//! |---|---|
//! | **Bounds** | `64..=1440`, multiples of 16 |
//! | **Typed input** | parse → clamp → quantize |
//! | **Aspect lock** | reduced-fraction ratio captured on lock |
//! | **Presets** | long side 1024, labels reversed when vertical |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Presets**: Ratio buttons and the orientation that labels them
//! - **Solver**: [`SolverState`] and its transitions, one per user interaction

mod calculations;
pub mod preset;
pub mod solver;

pub use calculations::{
    DIMENSION_STEP, MAX_DIMENSION, MIN_DIMENSION, PRESET_LONG_SIDE, clamp_dimension, commit_raw,
    derive_height, derive_width, is_committed, normalize_dimension, parse_raw, preset_dimensions,
    quantize,
};
pub use preset::{Orientation, PresetError, RatioPreset, display_labels};
pub use solver::{AspectRatio, AspectState, DimensionEvent, DimensionPair, SolverState};
