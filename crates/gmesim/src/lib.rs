//! Terminal UI for the GME finance scenario simulator.
//!
//! The computation lives in `gmesim_core`; this crate owns slider state,
//! layout, chart rendering, and the compute-on-change loop: every accepted
//! key event mutates the adjustments and triggers one full recomputation
//! before the next draw.

pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
