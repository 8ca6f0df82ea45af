//! # GenImg
//!
//! A prompt and dimension workbench for AI image generation, with a local
//! gallery of finished images.
//!
//! The form holds a prompt, an optional negative prompt, and an output size.
//! The size is the interesting part: every edit is funneled through one
//! solver so the pair is always a legal request for the image model.
//!
//! ```text
//! typed / dragged value ─► clamp 64..=1440 ─► round to 16 ─► lock? ─► pair
//!                                                              │
//!                                          other side = this side × ratio
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`dimensions`] | Bounds, quantization, aspect lock, ratio presets, the `SolverState` transitions |
//! | [`session`] | `SavedConfig` (the persisted form) and the `GenerationRequest` it produces |
//! | [`gallery`] | `PhotoRecord` list, newest first: add, delete, curated ordering, copy settings |
//! | [`store`] | One JSON file per key in a local directory, tolerant of missing or corrupt files |
//! | [`navigation`] | Overlay stack so "back" closes the topmost panel before leaving the page |
//! | [`render`] | Static HTML export of the gallery and current settings using Maud |
//! | [`config`] | `genimg.toml` loading, validation, and merging over stock defaults |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Integer Pairs, Reduced Ratios
//!
//! Dimensions are stored as `u32` and only ever hold committed values after
//! an edit. The lock ratio is kept as a reduced fraction rather than a float
//! so that swapping twice returns exactly the ratio that was locked, and so
//! it can be written to disk and read back unchanged.
//!
//! ## Every Interaction Is an Event
//!
//! [`dimensions::DimensionEvent`] names each thing a user can do to the size
//! controls. Front-ends translate input into events and hand them to
//! [`dimensions::SolverState::apply`]; the CLI does the same with its
//! subcommands. The solver never performs I/O.
//!
//! ## Forgiving Persistence
//!
//! The form and the gallery survive restarts through [`store::Store`].
//! Anything unreadable is logged and replaced by defaults: a broken
//! settings file should cost the user their settings, not the tool.

pub mod config;
pub mod dimensions;
pub mod gallery;
pub mod navigation;
pub mod output;
pub mod render;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;
