use serde::{Deserialize, Serialize};

/// Derived financial outcome for one parameter set.
///
/// Recomputed from scratch on every parameter change; there is no hidden
/// state anywhere in the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialOutcome {
    pub ime_revenue: f64,
    pub dme_revenue: f64,
    pub medicaid_revenue: f64,
    pub clinical_revenue: f64,
    pub total_revenue: f64,

    pub salary_cost: f64,
    pub benefits_cost: f64,
    pub overhead_cost: f64,
    pub teaching_cost: f64,
    pub site_admin_cost: f64,
    pub total_cost: f64,

    pub net_position: f64,

    pub total_trainees: u32,
    pub annual_cases: f64,
    pub trainees_primary: u32,
    pub trainees_affiliated: u32,

    /// Zero when the program has no trainees
    pub revenue_per_trainee: f64,
    /// Zero when the program has no trainees
    pub cost_per_trainee: f64,
}

impl FinancialOutcome {
    /// Revenue components in presentation order, for charts and driver
    /// attribution.
    pub fn revenue_components(&self) -> [(&'static str, f64); 4] {
        [
            ("Medicare IME", self.ime_revenue),
            ("Medicare DME", self.dme_revenue),
            ("Medicaid GME", self.medicaid_revenue),
            ("Clinical Revenue", self.clinical_revenue),
        ]
    }

    /// Cost components in presentation order.
    pub fn cost_components(&self) -> [(&'static str, f64); 5] {
        [
            ("Salaries", self.salary_cost),
            ("Benefits", self.benefits_cost),
            ("Overhead", self.overhead_cost),
            ("Teaching", self.teaching_cost),
            ("Site Admin", self.site_admin_cost),
        ]
    }
}
