use serde::{Deserialize, Serialize};

use super::BaselineAssumptions;

/// The adjustable slider state for a scenario.
///
/// Rate fields are fractional adjustments applied to the corresponding
/// baseline rate (0.05 means +5%); count fields replace the baseline value
/// outright. Valid ranges are enforced by the slider bounds in the UI layer,
/// not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAdjustments {
    /// Resident FTEs
    pub residents: u32,
    /// Fellow FTEs
    pub fellows: u32,
    /// Fraction of trainees at the primary site
    pub pct_primary: f64,
    /// Number of affiliated training sites
    pub sites: u32,
    /// Fractional change to the Medicare IME per-FTE rate
    pub ime_adjustment: f64,
    /// Fractional change to the Medicare DME per-FTE rate
    pub dme_adjustment: f64,
    /// Fractional change to state Medicaid GME support
    pub medicaid_adjustment: f64,
    /// Annual cases/encounters per resident
    pub case_volume_per_resident: u32,
    /// Across-the-board salary increase fraction
    pub salary_increase: f64,
}

impl Default for ScenarioAdjustments {
    fn default() -> Self {
        Self::neutral(&BaselineAssumptions::default())
    }
}

impl ScenarioAdjustments {
    /// The adjustment set under which the scenario reproduces the baseline
    /// exactly.
    pub fn neutral(assumptions: &BaselineAssumptions) -> Self {
        Self {
            residents: assumptions.residents,
            fellows: assumptions.fellows,
            pct_primary: assumptions.pct_primary,
            sites: assumptions.sites,
            ime_adjustment: 0.0,
            dme_adjustment: 0.0,
            medicaid_adjustment: 0.0,
            case_volume_per_resident: assumptions.case_volume_per_resident,
            salary_increase: 0.0,
        }
    }
}
