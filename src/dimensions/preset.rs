//! Named aspect-ratio presets and the orientation flag that labels them.
//!
//! The five presets are stored landscape-first (`2:1`, `16:9`, …). When the
//! session orientation is [`Orientation::Vertical`] every label is shown
//! reversed (`1:2`, `9:16`, …) and picking a preset applies the ratio as
//! displayed. Orientation only changes through a swap; it never constrains
//! the dimension values themselves.
//!
//! Labels follow a single `W:H` convention:
//! - `"16:9"` → `Some((16, 9))`
//! - `"9:16"` → `Some((9, 16))`
//! - `"16x9"`, `"16:"`, `"0:1"` → `None`

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PresetError {
    #[error("unknown preset '{label}' (available: {available})")]
    Unknown { label: String, available: String },
}

/// Layout direction of the form, flipped by every swap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_vertical(is_vertical: bool) -> Self {
        if is_vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// One of the fixed ratio buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioPreset {
    TwoToOne,
    SixteenToNine,
    ThreeToTwo,
    FourToThree,
    Square,
}

impl RatioPreset {
    /// All presets in display order.
    pub const ALL: [RatioPreset; 5] = [
        Self::TwoToOne,
        Self::SixteenToNine,
        Self::ThreeToTwo,
        Self::FourToThree,
        Self::Square,
    ];

    /// Canonical (landscape-first) ratio as `(width, height)`.
    pub fn ratio(self) -> (u32, u32) {
        match self {
            Self::TwoToOne => (2, 1),
            Self::SixteenToNine => (16, 9),
            Self::ThreeToTwo => (3, 2),
            Self::FourToThree => (4, 3),
            Self::Square => (1, 1),
        }
    }

    /// Ratio as shown (and applied) under `orientation`.
    pub fn display_ratio(self, orientation: Orientation) -> (u32, u32) {
        let (w, h) = self.ratio();
        match orientation {
            Orientation::Horizontal => (w, h),
            Orientation::Vertical => (h, w),
        }
    }

    pub fn display_label(self, orientation: Orientation) -> String {
        let (w, h) = self.display_ratio(orientation);
        format!("{w}:{h}")
    }

    /// Find the preset whose label reads `label` under `orientation`.
    ///
    /// Only the labels currently on screen are accepted: with a vertical
    /// layout `"9:16"` resolves and `"16:9"` does not.
    pub fn from_display_label(label: &str, orientation: Orientation) -> Result<Self, PresetError> {
        parse_ratio_label(label)
            .and_then(|ratio| {
                Self::ALL
                    .into_iter()
                    .find(|preset| preset.display_ratio(orientation) == ratio)
            })
            .ok_or_else(|| PresetError::Unknown {
                label: label.to_string(),
                available: display_labels(orientation).join(", "),
            })
    }
}

/// Labels for every preset under `orientation`, in display order.
pub fn display_labels(orientation: Orientation) -> Vec<String> {
    RatioPreset::ALL
        .iter()
        .map(|preset| preset.display_label(orientation))
        .collect()
}

/// Parse a `W:H` label into its two positive terms.
pub fn parse_ratio_label(label: &str) -> Option<(u32, u32)> {
    let (w, h) = label.trim().split_once(':')?;
    let w = w.trim().parse::<u32>().ok()?;
    let h = h.trim().parse::<u32>().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}
