use crate::evaluate::evaluate;
use crate::model::{BaselineAssumptions, ScenarioAdjustments, ScenarioParameters};
use crate::sensitivity::{break_even_ime, ime_rate_sweep};

#[test]
fn net_position_at_break_even_rate_is_zero() {
    let assumptions = BaselineAssumptions::default();
    let mut params = ScenarioParameters::baseline(&assumptions);

    let rate = break_even_ime(&params).expect("baseline has residents");

    params.ime_per_fte = rate;
    let outcome = evaluate(&params);
    assert!(
        outcome.net_position.abs() < 1e-3,
        "net at break-even was {}",
        outcome.net_position
    );
}

#[test]
fn break_even_undefined_without_residents() {
    let assumptions = BaselineAssumptions::default();
    let mut adjustments = ScenarioAdjustments::neutral(&assumptions);
    adjustments.residents = 0;

    let params = ScenarioParameters::resolve(&assumptions, &adjustments);
    assert_eq!(break_even_ime(&params), None);
}

#[test]
fn break_even_holds_for_adjusted_scenarios() {
    let assumptions = BaselineAssumptions::default();
    let mut adjustments = ScenarioAdjustments::neutral(&assumptions);
    adjustments.residents = 480;
    adjustments.salary_increase = 0.12;
    adjustments.sites = 12;

    let mut params = ScenarioParameters::resolve(&assumptions, &adjustments);
    let rate = break_even_ime(&params).expect("scenario has residents");

    params.ime_per_fte = rate;
    assert!(evaluate(&params).net_position.abs() < 1e-3);
}

#[test]
fn sweep_covers_slider_range_in_order() {
    let assumptions = BaselineAssumptions::default();
    let adjustments = ScenarioAdjustments::neutral(&assumptions);

    let points = ime_rate_sweep(&assumptions, &adjustments);

    assert_eq!(points.len(), 13);
    assert_eq!(points.first().unwrap().adjustment, -0.30);
    assert_eq!(points.last().unwrap().adjustment, 0.30);
}

#[test]
fn sweep_is_strictly_increasing_in_rate() {
    // IME revenue is linear in the rate with a positive coefficient, so the
    // swept net position must rise monotonically.
    let assumptions = BaselineAssumptions::default();
    let adjustments = ScenarioAdjustments::neutral(&assumptions);

    let points = ime_rate_sweep(&assumptions, &adjustments);
    for pair in points.windows(2) {
        assert!(pair[1].net_position > pair[0].net_position);
    }
}

#[test]
fn sweep_midpoint_matches_unswept_scenario() {
    let assumptions = BaselineAssumptions::default();
    let mut adjustments = ScenarioAdjustments::neutral(&assumptions);
    adjustments.fellows = 200;

    let scenario = evaluate(&ScenarioParameters::resolve(&assumptions, &adjustments));
    let points = ime_rate_sweep(&assumptions, &adjustments);

    // The 0% point of the sweep is the scenario itself.
    let midpoint = points.iter().find(|p| p.adjustment == 0.0).unwrap();
    assert!((midpoint.net_position - scenario.net_position).abs() < 1e-6);
}
