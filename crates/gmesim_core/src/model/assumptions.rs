use serde::{Deserialize, Serialize};

use crate::error::AssumptionsError;

/// Fixed baseline constants for the financial model.
///
/// The defaults describe a synthetic mid-size academic medical center and are
/// the reference point every scenario is compared against. An alternate set
/// can be loaded from a YAML file at launch; missing fields fall back to the
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineAssumptions {
    /// Resident FTEs across all programs
    pub residents: u32,
    /// Fellow FTEs across all programs
    pub fellows: u32,

    /// Medicare IME payment per FTE resident
    pub ime_per_fte: f64,
    /// Medicare DME payment per FTE resident
    pub dme_per_fte: f64,
    /// State Medicaid GME support per trainee
    pub medicaid_per_fte: f64,

    /// Average PGY resident salary
    pub resident_salary: f64,
    /// Average fellow salary
    pub fellow_salary: f64,
    /// Benefits as a fraction of salary
    pub benefits_rate: f64,
    /// Admin, space, malpractice per trainee
    pub overhead_per_trainee: f64,
    /// Faculty teaching time and supervision per trainee
    pub teaching_cost_per_trainee: f64,
    /// Shared administration and accreditation cost per affiliated site
    pub overhead_per_site: f64,

    /// Fraction of trainees at the primary teaching hospital
    pub pct_primary: f64,
    /// Number of affiliated training sites
    pub sites: u32,

    /// Annual cases/encounters per resident
    pub case_volume_per_resident: u32,
    /// Average revenue per case/encounter
    pub revenue_per_case: f64,
}

impl Default for BaselineAssumptions {
    fn default() -> Self {
        Self {
            residents: 650,
            fellows: 120,
            ime_per_fte: 112_000.0,
            dme_per_fte: 38_000.0,
            medicaid_per_fte: 22_000.0,
            resident_salary: 68_500.0,
            fellow_salary: 78_200.0,
            benefits_rate: 0.28,
            overhead_per_trainee: 18_500.0,
            teaching_cost_per_trainee: 42_000.0,
            overhead_per_site: 350_000.0,
            pct_primary: 0.62,
            sites: 6,
            case_volume_per_resident: 385,
            revenue_per_case: 2_850.0,
        }
    }
}

impl BaselineAssumptions {
    /// Check a (possibly user-supplied) assumption set for structural sanity.
    ///
    /// Slider bounds protect the adjustable inputs, but a loaded baseline file
    /// is only constrained here.
    pub fn validate(&self) -> Result<(), AssumptionsError> {
        let rates = [
            ("ime_per_fte", self.ime_per_fte),
            ("dme_per_fte", self.dme_per_fte),
            ("medicaid_per_fte", self.medicaid_per_fte),
            ("resident_salary", self.resident_salary),
            ("fellow_salary", self.fellow_salary),
            ("overhead_per_trainee", self.overhead_per_trainee),
            ("teaching_cost_per_trainee", self.teaching_cost_per_trainee),
            ("overhead_per_site", self.overhead_per_site),
            ("revenue_per_case", self.revenue_per_case),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(AssumptionsError::NegativeRate { field, value });
            }
        }

        let shares = [
            ("benefits_rate", self.benefits_rate),
            ("pct_primary", self.pct_primary),
        ];
        for (field, value) in shares {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AssumptionsError::ShareOutOfRange { field, value });
            }
        }

        Ok(())
    }
}
