use gmesim_core::{
    BaselineAssumptions, FinancialOutcome, ImpactSummary, ScenarioAdjustments, ScenarioParameters,
    SensitivityPoint, WaterfallStep, break_even_ime, decompose, evaluate, ime_rate_sweep,
};

use super::{ControlsState, TabId};

/// Everything derived from the current slider state, rebuilt wholesale on
/// each change.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub baseline: FinancialOutcome,
    pub scenario: FinancialOutcome,
    pub steps: Vec<WaterfallStep>,
    pub sensitivity: Vec<SensitivityPoint>,
    pub break_even: Option<f64>,
    pub summary: ImpactSummary,
}

impl Comparison {
    pub fn compute(
        assumptions: &BaselineAssumptions,
        adjustments: &ScenarioAdjustments,
    ) -> Self {
        let scenario_params = ScenarioParameters::resolve(assumptions, adjustments);

        let baseline = evaluate(&ScenarioParameters::baseline(assumptions));
        let scenario = evaluate(&scenario_params);

        Self {
            steps: decompose(&baseline, &scenario, assumptions, adjustments),
            sensitivity: ime_rate_sweep(assumptions, adjustments),
            break_even: break_even_ime(&scenario_params),
            summary: ImpactSummary::new(&baseline, &scenario),
            baseline,
            scenario,
        }
    }
}

pub struct AppState {
    pub assumptions: BaselineAssumptions,
    pub adjustments: ScenarioAdjustments,
    pub comparison: Comparison,

    pub active_tab: TabId,
    pub controls: ControlsState,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BaselineAssumptions::default())
    }
}

impl AppState {
    pub fn new(assumptions: BaselineAssumptions) -> Self {
        let adjustments = ScenarioAdjustments::neutral(&assumptions);
        let comparison = Comparison::compute(&assumptions, &adjustments);

        Self {
            assumptions,
            adjustments,
            comparison,
            active_tab: TabId::Overview,
            controls: ControlsState::default(),
            error_message: None,
            exit: false,
        }
    }

    /// Rebuild the comparison from the current sliders. Called after every
    /// accepted adjustment; the model is O(1), so there is nothing to cache.
    pub fn recompute(&mut self) {
        self.comparison = Comparison::compute(&self.assumptions, &self.adjustments);
        tracing::debug!(
            net_change = self.comparison.summary.net_change,
            "Recomputed scenario"
        );
    }

    /// Reset every slider to the baseline and recompute.
    pub fn reset_all(&mut self) {
        self.adjustments = ScenarioAdjustments::neutral(&self.assumptions);
        self.recompute();
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ControlId;

    #[test]
    fn initial_state_shows_neutral_comparison() {
        let state = AppState::default();

        assert_eq!(state.comparison.summary.net_change, 0.0);
        assert_eq!(
            state.comparison.baseline.net_position,
            state.comparison.scenario.net_position
        );
    }

    #[test]
    fn recompute_tracks_slider_changes() {
        let mut state = AppState::default();

        ControlId::Residents.adjust(&mut state.adjustments, 1);
        state.recompute();

        assert!(state.comparison.summary.net_change != 0.0);
        assert_eq!(
            state.comparison.scenario.total_trainees,
            state.comparison.baseline.total_trainees + 10
        );
    }

    #[test]
    fn reset_all_returns_to_baseline() {
        let mut state = AppState::default();

        ControlId::SalaryIncrease.adjust(&mut state.adjustments, 5);
        ControlId::Sites.adjust(&mut state.adjustments, 3);
        state.recompute();
        assert!(state.comparison.summary.net_change != 0.0);

        state.reset_all();
        assert_eq!(state.comparison.summary.net_change, 0.0);
        assert_eq!(
            state.adjustments,
            ScenarioAdjustments::neutral(&state.assumptions)
        );
    }

    #[test]
    fn comparison_invariant_holds_after_arbitrary_edits() {
        let mut state = AppState::default();

        for (control, steps) in [
            (ControlId::Residents, 12),
            (ControlId::Fellows, -4),
            (ControlId::ImeRate, -3),
            (ControlId::MedicaidRate, 8),
            (ControlId::SalaryIncrease, 9),
            (ControlId::Sites, 40),
        ] {
            control.adjust(&mut state.adjustments, steps);
        }
        state.recompute();

        let summed: f64 = state.comparison.steps.iter().map(|s| s.delta).sum();
        assert!((summed - state.comparison.summary.net_change).abs() < 1e-6);
    }
}
