use crate::evaluate::evaluate;
use crate::model::{BaselineAssumptions, ScenarioAdjustments, ScenarioParameters};
use crate::waterfall::{Factor, RECONCILIATION_LABEL, decompose};

fn compare(
    assumptions: &BaselineAssumptions,
    adjustments: &ScenarioAdjustments,
) -> (crate::model::FinancialOutcome, crate::model::FinancialOutcome) {
    let baseline = evaluate(&ScenarioParameters::baseline(assumptions));
    let scenario = evaluate(&ScenarioParameters::resolve(assumptions, adjustments));
    (baseline, scenario)
}

#[test]
fn steps_follow_fixed_presentation_order() {
    let assumptions = BaselineAssumptions::default();
    let adjustments = ScenarioAdjustments::neutral(&assumptions);
    let (baseline, scenario) = compare(&assumptions, &adjustments);

    let steps = decompose(&baseline, &scenario, &assumptions, &adjustments);

    assert_eq!(steps.len(), Factor::ALL.len() + 1);
    for (step, factor) in steps.iter().zip(Factor::ALL) {
        assert_eq!(step.label, factor.label());
    }
    assert_eq!(steps.last().unwrap().label, RECONCILIATION_LABEL);
}

#[test]
fn deltas_sum_to_net_change() {
    let assumptions = BaselineAssumptions::default();
    let mut adjustments = ScenarioAdjustments::neutral(&assumptions);
    adjustments.residents = 720;
    adjustments.fellows = 90;
    adjustments.ime_adjustment = -0.15;
    adjustments.medicaid_adjustment = 0.50;
    adjustments.case_volume_per_resident = 420;
    adjustments.salary_increase = 0.07;
    adjustments.sites = 9;

    let (baseline, scenario) = compare(&assumptions, &adjustments);
    let steps = decompose(&baseline, &scenario, &assumptions, &adjustments);

    let summed: f64 = steps.iter().map(|s| s.delta).sum();
    let net_change = scenario.net_position - baseline.net_position;

    assert!((summed - net_change).abs() < 1e-6);
}

#[test]
fn running_totals_span_baseline_to_scenario() {
    let assumptions = BaselineAssumptions::default();
    let mut adjustments = ScenarioAdjustments::neutral(&assumptions);
    adjustments.residents = 500;
    adjustments.dme_adjustment = 0.20;

    let (baseline, scenario) = compare(&assumptions, &adjustments);
    let steps = decompose(&baseline, &scenario, &assumptions, &adjustments);

    let mut running = baseline.net_position;
    for step in &steps[..steps.len() - 1] {
        running += step.delta;
        assert!((step.running_total - running).abs() < 1e-6);
    }
    assert_eq!(steps.last().unwrap().running_total, scenario.net_position);
}

#[test]
fn single_factor_change_attributes_exactly() {
    let assumptions = BaselineAssumptions::default();
    let mut adjustments = ScenarioAdjustments::neutral(&assumptions);
    adjustments.residents = 660;

    let (baseline, scenario) = compare(&assumptions, &adjustments);
    let steps = decompose(&baseline, &scenario, &assumptions, &adjustments);

    let net_change = scenario.net_position - baseline.net_position;
    assert!(net_change > 0.0);

    // The trainee volume step carries the full change; everything else,
    // including reconciliation, is zero.
    assert_eq!(steps[0].label, Factor::TraineeVolume.label());
    assert!((steps[0].delta - net_change).abs() < 1e-6);
    for step in &steps[1..] {
        assert!(step.delta.abs() < 1e-6, "{} should be zero", step.label);
    }
}

#[test]
fn neutral_scenario_decomposes_to_zero() {
    let assumptions = BaselineAssumptions::default();
    let adjustments = ScenarioAdjustments::neutral(&assumptions);

    let (baseline, scenario) = compare(&assumptions, &adjustments);
    let steps = decompose(&baseline, &scenario, &assumptions, &adjustments);

    for step in &steps {
        assert_eq!(step.delta, 0.0);
        assert_eq!(step.running_total, baseline.net_position);
    }
}

#[test]
fn interaction_residual_lands_in_reconciliation() {
    // Trainee volume and salary increase interact multiplicatively, so the
    // one-at-a-time deltas under-attribute the combined change.
    let assumptions = BaselineAssumptions::default();
    let mut adjustments = ScenarioAdjustments::neutral(&assumptions);
    adjustments.residents = 900;
    adjustments.salary_increase = 0.15;

    let (baseline, scenario) = compare(&assumptions, &adjustments);
    let steps = decompose(&baseline, &scenario, &assumptions, &adjustments);

    let reconciliation = steps.last().unwrap();
    assert!(reconciliation.delta.abs() > 1.0);

    let summed: f64 = steps.iter().map(|s| s.delta).sum();
    assert!((summed - (scenario.net_position - baseline.net_position)).abs() < 1e-6);
}
