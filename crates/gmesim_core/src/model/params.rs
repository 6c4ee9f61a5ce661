use serde::{Deserialize, Serialize};

use super::{BaselineAssumptions, ScenarioAdjustments};

/// Fully resolved parameter set consumed by [`crate::evaluate`].
///
/// All rates are absolute values: the fractional adjustments have already
/// been applied to the baseline. Resolving the neutral adjustment set
/// reproduces the baseline parameters exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    pub residents: u32,
    pub fellows: u32,

    pub ime_per_fte: f64,
    pub dme_per_fte: f64,
    pub medicaid_per_fte: f64,

    pub resident_salary: f64,
    pub fellow_salary: f64,
    pub benefits_rate: f64,
    pub overhead_per_trainee: f64,
    pub teaching_cost_per_trainee: f64,
    pub overhead_per_site: f64,

    pub pct_primary: f64,
    pub sites: u32,

    pub case_volume_per_resident: u32,
    pub revenue_per_case: f64,
}

impl ScenarioParameters {
    /// Resolve adjustments against the baseline into absolute parameters.
    pub fn resolve(
        assumptions: &BaselineAssumptions,
        adjustments: &ScenarioAdjustments,
    ) -> Self {
        Self {
            residents: adjustments.residents,
            fellows: adjustments.fellows,
            ime_per_fte: assumptions.ime_per_fte * (1.0 + adjustments.ime_adjustment),
            dme_per_fte: assumptions.dme_per_fte * (1.0 + adjustments.dme_adjustment),
            medicaid_per_fte: assumptions.medicaid_per_fte
                * (1.0 + adjustments.medicaid_adjustment),
            resident_salary: assumptions.resident_salary * (1.0 + adjustments.salary_increase),
            fellow_salary: assumptions.fellow_salary * (1.0 + adjustments.salary_increase),
            benefits_rate: assumptions.benefits_rate,
            overhead_per_trainee: assumptions.overhead_per_trainee,
            teaching_cost_per_trainee: assumptions.teaching_cost_per_trainee,
            overhead_per_site: assumptions.overhead_per_site,
            pct_primary: adjustments.pct_primary,
            sites: adjustments.sites,
            case_volume_per_resident: adjustments.case_volume_per_resident,
            revenue_per_case: assumptions.revenue_per_case,
        }
    }

    /// The baseline parameter set: neutral adjustments resolved against the
    /// assumptions.
    pub fn baseline(assumptions: &BaselineAssumptions) -> Self {
        Self::resolve(assumptions, &ScenarioAdjustments::neutral(assumptions))
    }
}
