use crate::error::AssumptionsError;
use crate::evaluate::evaluate;
use crate::model::{BaselineAssumptions, ScenarioAdjustments, ScenarioParameters};

#[test]
fn evaluate_is_deterministic() {
    let params = ScenarioParameters::baseline(&BaselineAssumptions::default());

    let first = evaluate(&params);
    let second = evaluate(&params);

    assert_eq!(first, second);
}

#[test]
fn neutral_adjustments_reproduce_baseline() {
    let assumptions = BaselineAssumptions::default();
    let neutral = ScenarioAdjustments::neutral(&assumptions);

    let baseline = ScenarioParameters::baseline(&assumptions);
    let resolved = ScenarioParameters::resolve(&assumptions, &neutral);

    assert_eq!(baseline, resolved);
    assert_eq!(evaluate(&baseline), evaluate(&resolved));
}

#[test]
fn outcome_totals_are_consistent() {
    let outcome = evaluate(&ScenarioParameters::baseline(&BaselineAssumptions::default()));

    let revenue: f64 = outcome.revenue_components().iter().map(|(_, v)| v).sum();
    let cost: f64 = outcome.cost_components().iter().map(|(_, v)| v).sum();

    assert!((outcome.total_revenue - revenue).abs() < 1e-6);
    assert!((outcome.total_cost - cost).abs() < 1e-6);
    assert!((outcome.net_position - (outcome.total_revenue - outcome.total_cost)).abs() < 1e-6);
}

#[test]
fn more_residents_raise_revenue_and_cost() {
    let assumptions = BaselineAssumptions::default();
    let base = evaluate(&ScenarioParameters::baseline(&assumptions));

    let mut adjustments = ScenarioAdjustments::neutral(&assumptions);
    adjustments.residents += 10;
    let grown = evaluate(&ScenarioParameters::resolve(&assumptions, &adjustments));

    assert!(grown.total_revenue > base.total_revenue);
    assert!(grown.total_cost > base.total_cost);
}

#[test]
fn more_sites_raise_cost_only() {
    let assumptions = BaselineAssumptions::default();
    let base = evaluate(&ScenarioParameters::baseline(&assumptions));

    let mut adjustments = ScenarioAdjustments::neutral(&assumptions);
    adjustments.sites += 3;
    let spread = evaluate(&ScenarioParameters::resolve(&assumptions, &adjustments));

    assert_eq!(spread.total_revenue, base.total_revenue);
    assert!(spread.total_cost > base.total_cost);
    assert!(spread.net_position < base.net_position);
}

#[test]
fn salary_increase_scales_salary_and_benefits() {
    let assumptions = BaselineAssumptions::default();
    let base = evaluate(&ScenarioParameters::baseline(&assumptions));

    let mut adjustments = ScenarioAdjustments::neutral(&assumptions);
    adjustments.salary_increase = 0.10;
    let raised = evaluate(&ScenarioParameters::resolve(&assumptions, &adjustments));

    assert!((raised.salary_cost - base.salary_cost * 1.10).abs() < 1e-6);
    assert!((raised.benefits_cost - base.benefits_cost * 1.10).abs() < 1e-6);
    assert_eq!(raised.total_revenue, base.total_revenue);
}

#[test]
fn empty_program_guards_per_trainee_metrics() {
    let assumptions = BaselineAssumptions::default();
    let mut adjustments = ScenarioAdjustments::neutral(&assumptions);
    adjustments.residents = 0;
    adjustments.fellows = 0;

    let outcome = evaluate(&ScenarioParameters::resolve(&assumptions, &adjustments));

    assert_eq!(outcome.total_trainees, 0);
    assert_eq!(outcome.revenue_per_trainee, 0.0);
    assert_eq!(outcome.cost_per_trainee, 0.0);
    assert_eq!(outcome.total_revenue, 0.0);
}

#[test]
fn site_distribution_splits_headcount() {
    let assumptions = BaselineAssumptions::default();
    let outcome = evaluate(&ScenarioParameters::baseline(&assumptions));

    assert_eq!(
        outcome.trainees_primary + outcome.trainees_affiliated,
        outcome.total_trainees
    );
    // 770 trainees at 62% primary
    assert_eq!(outcome.trainees_primary, 477);
}

#[test]
fn validation_rejects_negative_rates() {
    let assumptions = BaselineAssumptions {
        ime_per_fte: -1.0,
        ..Default::default()
    };

    assert_eq!(
        assumptions.validate(),
        Err(AssumptionsError::NegativeRate {
            field: "ime_per_fte",
            value: -1.0
        })
    );
}

#[test]
fn validation_rejects_out_of_range_shares() {
    let assumptions = BaselineAssumptions {
        pct_primary: 1.4,
        ..Default::default()
    };

    assert!(matches!(
        assumptions.validate(),
        Err(AssumptionsError::ShareOutOfRange {
            field: "pct_primary",
            ..
        })
    ));
}

#[test]
fn default_assumptions_validate() {
    assert_eq!(BaselineAssumptions::default().validate(), Ok(()));
}
