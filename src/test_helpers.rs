//! Shared test utilities for the genimg test suite.
//!
//! Builders for solver states and gallery fixtures so module tests read as
//! the interaction they exercise rather than the setup around it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let s = locked_state(1440, 1080).commit_height("900");
//! assert_eq!((s.pair.width, s.pair.height), (1200, 896));
//!
//! let gallery = sample_gallery();
//! assert_eq!(gallery.photos()[0].id, 3);
//! ```

use crate::dimensions::{DimensionPair, SolverState};
use crate::gallery::{Gallery, PhotoRecord, photo_src};

const BASE_URL: &str = "https://img.example/gen/";

// ============================================================================
// Solver states
// ============================================================================

/// Unlocked horizontal state holding `width × height` as-is.
pub fn state(width: u32, height: u32) -> SolverState {
    SolverState::new(DimensionPair::new(width, height))
}

/// State locked at the ratio of `width × height`.
pub fn locked_state(width: u32, height: u32) -> SolverState {
    state(width, height).toggle_lock()
}

// ============================================================================
// Gallery fixtures
// ============================================================================

/// Photo with `id`; even ids carry a negative prompt, odd ids none.
pub fn sample_photo(id: u64) -> PhotoRecord {
    let (width, height) = if id % 2 == 0 { (768, 1024) } else { (1024, 576) };
    let filename = format!("20241105_0903{:02}_{:03}.jpg", id % 60, id % 1000);
    PhotoRecord {
        id,
        src: photo_src(BASE_URL, &filename),
        width,
        height,
        prompt: format!("lighthouse at dusk, study {id}"),
        negative_prompt: (id % 2 == 0).then(|| "blurry, text".to_string()),
        filename,
        created_at: format!("2024-11-05T09:03:{:02}.000Z", id % 60),
    }
}

/// Gallery of photos 1, 2 and 3, newest (3) first.
pub fn sample_gallery() -> Gallery {
    let mut gallery = Gallery::default();
    for id in 1..=3 {
        gallery
            .add(sample_photo(id))
            .expect("sample ids are distinct");
    }
    gallery
}
