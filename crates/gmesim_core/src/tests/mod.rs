//! Integration tests for the scenario model
//!
//! Tests are organized by topic:
//! - `evaluate` - Evaluation mechanics and outcome invariants
//! - `waterfall` - Decomposition ordering and additivity
//! - `sensitivity` - Break-even and IME sweep behavior

mod evaluate;
mod sensitivity;
mod waterfall;
