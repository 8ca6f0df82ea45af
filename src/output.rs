//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Session
//!
//! ```text
//! Prompt: a lighthouse at dusk
//! Size: 1200 × 896
//!     Lock: locked at 4:3
//!     Orientation: horizontal
//!     Presets: 2:1 16:9 3:2 4:3 1:1
//! ```
//!
//! ## Gallery
//!
//! ```text
//! 3 photos
//! 001 #12 1024 × 576 a lighthouse at dusk
//! 002 #11 768 × 1024 koi pond, ink wash, soft...
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure and do no I/O.

use crate::dimensions::{Orientation, RatioPreset, display_labels, preset_dimensions};
use crate::gallery::{Gallery, PhotoRecord};
use crate::session::SavedConfig;

/// Longest prompt shown on a single gallery line.
const PROMPT_PREVIEW: usize = 60;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head.trim_end())
    }
}

fn or_none(text: &str) -> &str {
    if text.trim().is_empty() { "(none)" } else { text }
}

// ============================================================================
// Session
// ============================================================================

pub fn format_session(session: &SavedConfig) -> Vec<String> {
    let state = session.solver_state();
    let mut lines = vec![format!("Prompt: {}", or_none(&session.prompt))];
    if !session.negative_prompt.is_empty() {
        lines.push(format!("Negative: {}", session.negative_prompt));
    }
    lines.push(format!("Size: {}", state.pair));

    let lock = match (state.aspect.locked, state.aspect.ratio) {
        (true, Some(ratio)) => format!("locked at {ratio}"),
        _ => "off".to_string(),
    };
    lines.push(format!("{}Lock: {}", indent(1), lock));
    lines.push(format!("{}Orientation: {}", indent(1), state.orientation));
    lines.push(format!(
        "{}Presets: {}",
        indent(1),
        display_labels(state.orientation).join(" ")
    ));
    lines
}

pub fn print_session(session: &SavedConfig) {
    for line in format_session(session) {
        println!("{}", line);
    }
}

// ============================================================================
// Presets
// ============================================================================

/// One line per preset: label as displayed, then the pair it produces.
pub fn format_presets(orientation: Orientation) -> Vec<String> {
    RatioPreset::ALL
        .iter()
        .map(|preset| {
            let (w, h) = preset_dimensions(preset.display_ratio(orientation));
            format!("{:<6}{} × {}", preset.display_label(orientation), w, h)
        })
        .collect()
}

pub fn print_presets(orientation: Orientation) {
    for line in format_presets(orientation) {
        println!("{}", line);
    }
}

// ============================================================================
// Gallery
// ============================================================================

pub fn format_gallery(gallery: &Gallery) -> Vec<String> {
    let mut lines = vec![match gallery.len() {
        1 => "1 photo".to_string(),
        n => format!("{} photos", n),
    }];
    for (i, photo) in gallery.photos().iter().enumerate() {
        lines.push(format!(
            "{} #{} {} × {} {}",
            format_index(i + 1),
            photo.id,
            photo.width,
            photo.height,
            truncate(&photo.prompt, PROMPT_PREVIEW)
        ));
    }
    lines
}

pub fn print_gallery(gallery: &Gallery) {
    for line in format_gallery(gallery) {
        println!("{}", line);
    }
}

pub fn format_photo(photo: &PhotoRecord) -> Vec<String> {
    let mut lines = vec![
        format!("#{} {} × {}", photo.id, photo.width, photo.height),
        format!("{}Prompt: {}", indent(1), photo.prompt),
    ];
    if let Some(negative) = photo.negative_prompt.as_deref().filter(|n| !n.is_empty()) {
        lines.push(format!("{}Negative: {}", indent(1), negative));
    }
    lines.push(format!("{}File: {}", indent(1), photo.filename));
    lines.push(format!("{}Source: {}", indent(1), photo.src));
    lines.push(format!("{}Created: {}", indent(1), photo.created_at));
    lines
}

pub fn print_photo(photo: &PhotoRecord) {
    for line in format_photo(photo) {
        println!("{}", line);
    }
}
