//! IME rate sensitivity analysis.

use serde::{Deserialize, Serialize};

use crate::evaluate::evaluate;
use crate::model::{BaselineAssumptions, ScenarioAdjustments, ScenarioParameters};

/// Net position at one point of the IME rate sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Fractional IME rate adjustment relative to baseline (-0.30 ..= 0.30)
    pub adjustment: f64,
    pub net_position: f64,
}

/// Sweep bounds, matching the IME adjustment slider.
pub const SWEEP_MIN_PCT: i32 = -30;
pub const SWEEP_MAX_PCT: i32 = 30;
pub const SWEEP_STEP_PCT: i32 = 5;

/// The IME per-FTE rate at which the net position is exactly zero.
///
/// IME revenue is `residents * rate`, so the relationship is linear in the
/// rate and inverts in closed form. Returns `None` when the coefficient is
/// zero (no residents): the break-even rate is undefined, which is a normal
/// boundary case rather than a failure.
pub fn break_even_ime(params: &ScenarioParameters) -> Option<f64> {
    if params.residents == 0 {
        return None;
    }
    let outcome = evaluate(params);
    Some(params.ime_per_fte - outcome.net_position / params.residents as f64)
}

/// Net position across IME rate adjustments from -30% to +30% in 5% steps,
/// holding every other scenario adjustment fixed.
pub fn ime_rate_sweep(
    assumptions: &BaselineAssumptions,
    adjustments: &ScenarioAdjustments,
) -> Vec<SensitivityPoint> {
    (SWEEP_MIN_PCT..=SWEEP_MAX_PCT)
        .step_by(SWEEP_STEP_PCT as usize)
        .map(|pct| {
            let mut swept = adjustments.clone();
            swept.ime_adjustment = pct as f64 / 100.0;

            let outcome = evaluate(&ScenarioParameters::resolve(assumptions, &swept));
            SensitivityPoint {
                adjustment: pct as f64 / 100.0,
                net_position: outcome.net_position,
            }
        })
        .collect()
}
