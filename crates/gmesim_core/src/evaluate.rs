//! Scenario evaluation: parameters in, financial outcome out.

use crate::model::{FinancialOutcome, ScenarioParameters};

/// Evaluate one parameter set into a full financial outcome.
///
/// Pure and total: every valid input produces an output, and repeated calls
/// with identical input yield identical results. Revenue terms are each
/// linear in their driving parameter; cost is salary plus benefits plus
/// per-trainee and per-site overheads.
pub fn evaluate(params: &ScenarioParameters) -> FinancialOutcome {
    let residents = params.residents as f64;
    let fellows = params.fellows as f64;
    let total_trainees = params.residents + params.fellows;
    let trainees = residents + fellows;

    // Revenue
    let ime_revenue = residents * params.ime_per_fte;
    let dme_revenue = residents * params.dme_per_fte;
    let medicaid_revenue = trainees * params.medicaid_per_fte;

    let annual_cases = residents * params.case_volume_per_resident as f64;
    let clinical_revenue = annual_cases * params.revenue_per_case;

    let total_revenue = ime_revenue + dme_revenue + medicaid_revenue + clinical_revenue;

    // Cost
    let salary_cost = residents * params.resident_salary + fellows * params.fellow_salary;
    let benefits_cost = salary_cost * params.benefits_rate;
    let overhead_cost = trainees * params.overhead_per_trainee;
    let teaching_cost = trainees * params.teaching_cost_per_trainee;
    let site_admin_cost = params.sites as f64 * params.overhead_per_site;

    let total_cost = salary_cost + benefits_cost + overhead_cost + teaching_cost + site_admin_cost;

    let net_position = total_revenue - total_cost;

    // Site distribution: primary-site headcount rounds down, the remainder
    // spreads across affiliated sites
    let trainees_primary = (trainees * params.pct_primary) as u32;
    let trainees_affiliated = total_trainees - trainees_primary;

    let (revenue_per_trainee, cost_per_trainee) = if total_trainees > 0 {
        (total_revenue / trainees, total_cost / trainees)
    } else {
        (0.0, 0.0)
    };

    FinancialOutcome {
        ime_revenue,
        dme_revenue,
        medicaid_revenue,
        clinical_revenue,
        total_revenue,
        salary_cost,
        benefits_cost,
        overhead_cost,
        teaching_cost,
        site_admin_cost,
        total_cost,
        net_position,
        total_trainees,
        annual_cases,
        trainees_primary,
        trainees_affiliated,
        revenue_per_trainee,
        cost_per_trainee,
    }
}
