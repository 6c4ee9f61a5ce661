//! GME finance scenario model
//!
//! This crate provides the financial model behind the GME scenario simulator.
//! It supports:
//! - Baseline assumptions for a synthetic academic medical center
//! - Scenario evaluation (revenue, cost, net position) from adjustable inputs
//! - Waterfall decomposition attributing the net change to each factor
//! - IME rate sensitivity analysis with closed-form break-even
//! - Impact summaries for narrative reporting
//!
//! Everything here is pure arithmetic over immutable records: no I/O, no
//! hidden state, and every result is recomputed from scratch on each call.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod evaluate;
pub mod sensitivity;
pub mod summary;
pub mod waterfall;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::AssumptionsError;
pub use evaluate::evaluate;
pub use model::{BaselineAssumptions, FinancialOutcome, ScenarioAdjustments, ScenarioParameters};
pub use sensitivity::{SensitivityPoint, break_even_ime, ime_rate_sweep};
pub use summary::{ComponentDelta, ImpactSummary};
pub use waterfall::{Factor, WaterfallStep, decompose};
