//! Waterfall decomposition of the baseline-to-scenario net change.
//!
//! Each factor's contribution is measured one-at-a-time: apply only that
//! factor's adjustment on top of the neutral set and take the marginal net
//! effect. The true multi-variable model is not perfectly additive, so a
//! trailing reconciliation step absorbs the interaction residual. This keeps
//! the chart exact while staying readable for a board audience.

use serde::{Deserialize, Serialize};

use crate::evaluate::evaluate;
use crate::model::{
    BaselineAssumptions, FinancialOutcome, ScenarioAdjustments, ScenarioParameters,
};

/// The contributing factors, in fixed presentation order (not magnitude
/// sorted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    TraineeVolume,
    SiteDistribution,
    ImeRate,
    DmeRate,
    MedicaidRate,
    CaseVolume,
    Salary,
    SiteCount,
}

impl Factor {
    pub const ALL: [Factor; 8] = [
        Factor::TraineeVolume,
        Factor::SiteDistribution,
        Factor::ImeRate,
        Factor::DmeRate,
        Factor::MedicaidRate,
        Factor::CaseVolume,
        Factor::Salary,
        Factor::SiteCount,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Factor::TraineeVolume => "Trainee Volume",
            Factor::SiteDistribution => "Site Distribution",
            Factor::ImeRate => "IME Rate",
            Factor::DmeRate => "DME Rate",
            Factor::MedicaidRate => "Medicaid GME",
            Factor::CaseVolume => "Case Volume",
            Factor::Salary => "Salaries",
            Factor::SiteCount => "Site Count",
        }
    }

    /// Copy only this factor's adjustment from `scenario` onto `target`.
    fn apply(&self, target: &mut ScenarioAdjustments, scenario: &ScenarioAdjustments) {
        match self {
            Factor::TraineeVolume => {
                target.residents = scenario.residents;
                target.fellows = scenario.fellows;
            }
            Factor::SiteDistribution => target.pct_primary = scenario.pct_primary,
            Factor::ImeRate => target.ime_adjustment = scenario.ime_adjustment,
            Factor::DmeRate => target.dme_adjustment = scenario.dme_adjustment,
            Factor::MedicaidRate => target.medicaid_adjustment = scenario.medicaid_adjustment,
            Factor::CaseVolume => {
                target.case_volume_per_resident = scenario.case_volume_per_resident
            }
            Factor::Salary => target.salary_increase = scenario.salary_increase,
            Factor::SiteCount => target.sites = scenario.sites,
        }
    }
}

/// Label of the trailing reconciliation step.
pub const RECONCILIATION_LABEL: &str = "Interaction Effects";

/// One step of the waterfall, from baseline net position toward scenario net
/// position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallStep {
    pub label: &'static str,
    pub delta: f64,
    pub running_total: f64,
}

/// Attribute the net-position change to each factor.
///
/// Returns one step per factor in [`Factor::ALL`] order plus a final
/// reconciliation step, so that the step deltas always sum to
/// `scenario.net_position - baseline.net_position` exactly and the last
/// running total lands on the scenario net position.
pub fn decompose(
    baseline: &FinancialOutcome,
    scenario: &FinancialOutcome,
    assumptions: &BaselineAssumptions,
    adjustments: &ScenarioAdjustments,
) -> Vec<WaterfallStep> {
    let mut steps = Vec::with_capacity(Factor::ALL.len() + 1);
    let mut running = baseline.net_position;
    let mut attributed = 0.0;

    for factor in Factor::ALL {
        let mut single = ScenarioAdjustments::neutral(assumptions);
        factor.apply(&mut single, adjustments);

        let outcome = evaluate(&ScenarioParameters::resolve(assumptions, &single));
        let delta = outcome.net_position - baseline.net_position;

        attributed += delta;
        running += delta;
        steps.push(WaterfallStep {
            label: factor.label(),
            delta,
            running_total: running,
        });
    }

    let total_change = scenario.net_position - baseline.net_position;
    steps.push(WaterfallStep {
        label: RECONCILIATION_LABEL,
        delta: total_change - attributed,
        running_total: scenario.net_position,
    });

    steps
}
