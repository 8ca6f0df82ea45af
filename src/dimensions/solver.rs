//! Aspect-ratio-constrained dimension solver.
//!
//! [`SolverState`] is the whole state of the dimension controls: the current
//! [`DimensionPair`], the [`AspectState`] lock, and the [`Orientation`] used
//! to label presets. Every operation takes a state by value and returns the
//! next one; nothing is kept between calls, so the same transitions drive the
//! CLI, the tests, or any interactive front-end.
//!
//! ## Operations
//!
//! | Operation | Input | Effect |
//! |---|---|---|
//! | [`commit_width`](SolverState::commit_width) | typed text | clamp + quantize width, derive height when locked |
//! | [`commit_height`](SolverState::commit_height) | typed text | clamp + quantize height, derive width when locked |
//! | [`drag_width`](SolverState::drag_width) | slider value | same rules as commit, applied on every tick |
//! | [`drag_height`](SolverState::drag_height) | slider value | same rules as commit, applied on every tick |
//! | [`swap`](SolverState::swap) | | exchange sides, flip orientation, invert a held lock ratio |
//! | [`toggle_lock`](SolverState::toggle_lock) | | capture or release the lock ratio |
//! | [`apply_preset`](SolverState::apply_preset) | preset | long side 1024, short side from the displayed ratio |
//!
//! No operation fails: invalid input is normalized, never rejected.

use std::fmt;

use super::calculations::{
    commit_raw, derive_height, derive_width, is_committed, normalize_dimension, preset_dimensions,
};
use super::preset::{Orientation, RatioPreset};

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionPair {
    pub width: u32,
    pub height: u32,
}

impl DimensionPair {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both sides are in range and on the quantization grid.
    pub fn is_committed(self) -> bool {
        is_committed(self.width) && is_committed(self.height)
    }

    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl fmt::Display for DimensionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.width, self.height)
    }
}

/// A width/height ratio kept as a reduced fraction.
///
/// Holding the exact fraction keeps a swap reversible: the reciprocal of the
/// reciprocal is the same value, with no floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    /// Ratio of `width` to `height`, or `None` when either term is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let divisor = gcd(width, height);
        Some(Self {
            width: width / divisor,
            height: height / divisor,
        })
    }

    pub fn terms(self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn reciprocal(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub fn as_f64(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Aspect lock and the ratio captured when it was engaged.
///
/// The ratio survives an unlock but has no effect until the next lock, which
/// recaptures it from the pair at that moment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AspectState {
    pub locked: bool,
    pub ratio: Option<AspectRatio>,
}

impl AspectState {
    /// The ratio edits must follow, if any.
    pub fn active_ratio(self) -> Option<AspectRatio> {
        if self.locked { self.ratio } else { None }
    }
}

/// One user interaction with the dimension controls.
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionEvent {
    CommitWidth(String),
    CommitHeight(String),
    DragWidth(f64),
    DragHeight(f64),
    Swap,
    ToggleLock,
    ApplyPreset(RatioPreset),
}

/// Complete state of the dimension controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverState {
    pub pair: DimensionPair,
    pub aspect: AspectState,
    pub orientation: Orientation,
}

impl SolverState {
    /// Unlocked, horizontal state around `pair`.
    pub fn new(pair: DimensionPair) -> Self {
        Self {
            pair,
            aspect: AspectState::default(),
            orientation: Orientation::Horizontal,
        }
    }

    /// Dispatch one event to the matching operation.
    #[must_use]
    pub fn apply(self, event: &DimensionEvent) -> Self {
        match event {
            DimensionEvent::CommitWidth(raw) => self.commit_width(raw),
            DimensionEvent::CommitHeight(raw) => self.commit_height(raw),
            DimensionEvent::DragWidth(value) => self.drag_width(*value),
            DimensionEvent::DragHeight(value) => self.drag_height(*value),
            DimensionEvent::Swap => self.swap(),
            DimensionEvent::ToggleLock => self.toggle_lock(),
            DimensionEvent::ApplyPreset(preset) => self.apply_preset(*preset),
        }
    }

    #[must_use]
    pub fn commit_width(self, raw: &str) -> Self {
        self.with_width(commit_raw(raw))
    }

    #[must_use]
    pub fn commit_height(self, raw: &str) -> Self {
        self.with_height(commit_raw(raw))
    }

    #[must_use]
    pub fn drag_width(self, value: f64) -> Self {
        self.with_width(normalize_dimension(value))
    }

    #[must_use]
    pub fn drag_height(self, value: f64) -> Self {
        self.with_height(normalize_dimension(value))
    }

    #[must_use]
    pub fn swap(self) -> Self {
        let mut aspect = self.aspect;
        if aspect.locked {
            aspect.ratio = aspect.ratio.map(AspectRatio::reciprocal);
        }
        Self {
            pair: self.pair.swapped(),
            aspect,
            orientation: self.orientation.flipped(),
        }
    }

    #[must_use]
    pub fn toggle_lock(self) -> Self {
        let mut next = self;
        if self.aspect.locked {
            next.aspect.locked = false;
            return next;
        }
        // A zero height has no ratio to hold; stay unlocked.
        if let Some(ratio) = AspectRatio::new(self.pair.width, self.pair.height) {
            next.aspect = AspectState {
                locked: true,
                ratio: Some(ratio),
            };
        }
        next
    }

    /// Set the pair from a preset as displayed under the current orientation.
    ///
    /// The lock and its ratio are left as they are, even when the new pair
    /// no longer matches the held ratio.
    #[must_use]
    pub fn apply_preset(self, preset: RatioPreset) -> Self {
        let (width, height) = preset_dimensions(preset.display_ratio(self.orientation));
        Self {
            pair: DimensionPair::new(width, height),
            ..self
        }
    }

    fn with_width(self, width: u32) -> Self {
        let height = match self.aspect.active_ratio() {
            Some(ratio) => derive_height(width, ratio.terms()),
            None => self.pair.height,
        };
        Self {
            pair: DimensionPair::new(width, height),
            ..self
        }
    }

    fn with_height(self, height: u32) -> Self {
        let width = match self.aspect.active_ratio() {
            Some(ratio) => derive_width(height, ratio.terms()),
            None => self.pair.width,
        };
        Self {
            pair: DimensionPair::new(width, height),
            ..self
        }
    }
}
