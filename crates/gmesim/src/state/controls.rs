//! Slider descriptors for the scenario controls panel.
//!
//! Each control edits one field of [`ScenarioAdjustments`]. Values always
//! clamp to the slider bounds, so the model never sees an out-of-range input.

use gmesim_core::{BaselineAssumptions, ScenarioAdjustments};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Residents,
    Fellows,
    PctPrimary,
    Sites,
    ImeRate,
    DmeRate,
    MedicaidRate,
    CaseVolume,
    SalaryIncrease,
}

impl ControlId {
    pub const ALL: [ControlId; 9] = [
        ControlId::Residents,
        ControlId::Fellows,
        ControlId::PctPrimary,
        ControlId::Sites,
        ControlId::ImeRate,
        ControlId::DmeRate,
        ControlId::MedicaidRate,
        ControlId::CaseVolume,
        ControlId::SalaryIncrease,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ControlId::Residents => "Residents",
            ControlId::Fellows => "Fellows",
            ControlId::PctPrimary => "% at Primary Site",
            ControlId::Sites => "Affiliated Sites",
            ControlId::ImeRate => "IME Rate Adj",
            ControlId::DmeRate => "DME Rate Adj",
            ControlId::MedicaidRate => "Medicaid GME Adj",
            ControlId::CaseVolume => "Cases per Resident",
            ControlId::SalaryIncrease => "Salary Increase",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            ControlId::Residents => "Total resident FTEs across all programs",
            ControlId::Fellows => "Total fellow FTEs across all programs",
            ControlId::PctPrimary => "Share of trainees at the primary teaching hospital",
            ControlId::Sites => "Number of affiliated training sites",
            ControlId::ImeRate => "Percentage change to the Medicare IME per-FTE rate",
            ControlId::DmeRate => "Percentage change to the Medicare DME per-FTE rate",
            ControlId::MedicaidRate => "Percentage change to state Medicaid GME support",
            ControlId::CaseVolume => "Annual cases/encounters per resident",
            ControlId::SalaryIncrease => "Across-the-board salary adjustment",
        }
    }

    /// Inclusive slider bounds, in the control's own unit.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            ControlId::Residents => (400.0, 900.0),
            ControlId::Fellows => (50.0, 250.0),
            ControlId::PctPrimary => (0.30, 0.90),
            ControlId::Sites => (2.0, 12.0),
            ControlId::ImeRate => (-0.30, 0.30),
            ControlId::DmeRate => (-0.30, 0.30),
            ControlId::MedicaidRate => (-0.50, 1.00),
            ControlId::CaseVolume => (300.0, 500.0),
            ControlId::SalaryIncrease => (0.0, 0.15),
        }
    }

    pub fn step(&self) -> f64 {
        match self {
            ControlId::Residents | ControlId::Fellows | ControlId::CaseVolume => 10.0,
            ControlId::PctPrimary => 0.05,
            ControlId::Sites => 1.0,
            ControlId::ImeRate | ControlId::DmeRate => 0.05,
            ControlId::MedicaidRate => 0.10,
            ControlId::SalaryIncrease => 0.01,
        }
    }

    pub fn value(&self, adjustments: &ScenarioAdjustments) -> f64 {
        match self {
            ControlId::Residents => adjustments.residents as f64,
            ControlId::Fellows => adjustments.fellows as f64,
            ControlId::PctPrimary => adjustments.pct_primary,
            ControlId::Sites => adjustments.sites as f64,
            ControlId::ImeRate => adjustments.ime_adjustment,
            ControlId::DmeRate => adjustments.dme_adjustment,
            ControlId::MedicaidRate => adjustments.medicaid_adjustment,
            ControlId::CaseVolume => adjustments.case_volume_per_resident as f64,
            ControlId::SalaryIncrease => adjustments.salary_increase,
        }
    }

    /// Set the control's value, clamping to the slider bounds.
    pub fn set(&self, adjustments: &mut ScenarioAdjustments, value: f64) {
        let (min, max) = self.bounds();
        let value = value.clamp(min, max);
        match self {
            ControlId::Residents => adjustments.residents = value.round() as u32,
            ControlId::Fellows => adjustments.fellows = value.round() as u32,
            ControlId::PctPrimary => adjustments.pct_primary = value,
            ControlId::Sites => adjustments.sites = value.round() as u32,
            ControlId::ImeRate => adjustments.ime_adjustment = value,
            ControlId::DmeRate => adjustments.dme_adjustment = value,
            ControlId::MedicaidRate => adjustments.medicaid_adjustment = value,
            ControlId::CaseVolume => adjustments.case_volume_per_resident = value.round() as u32,
            ControlId::SalaryIncrease => adjustments.salary_increase = value,
        }
    }

    /// Nudge the control by a number of slider steps (negative moves down).
    pub fn adjust(&self, adjustments: &mut ScenarioAdjustments, steps: i32) {
        let value = self.value(adjustments) + self.step() * steps as f64;
        self.set(adjustments, value);
    }

    /// Restore the control to its baseline value.
    pub fn reset(&self, adjustments: &mut ScenarioAdjustments, assumptions: &BaselineAssumptions) {
        let neutral = ScenarioAdjustments::neutral(assumptions);
        self.set(adjustments, self.value(&neutral));
    }

    /// Whether the control currently sits at its baseline value.
    pub fn at_baseline(
        &self,
        adjustments: &ScenarioAdjustments,
        assumptions: &BaselineAssumptions,
    ) -> bool {
        let neutral = ScenarioAdjustments::neutral(assumptions);
        (self.value(adjustments) - self.value(&neutral)).abs() < 1e-9
    }

    /// Display the current value in the control's own unit.
    pub fn format_value(&self, adjustments: &ScenarioAdjustments) -> String {
        let value = self.value(adjustments);
        match self {
            ControlId::Residents
            | ControlId::Fellows
            | ControlId::Sites
            | ControlId::CaseVolume => format!("{}", value.round() as u32),
            ControlId::PctPrimary => format!("{:.0}%", value * 100.0),
            ControlId::ImeRate | ControlId::DmeRate | ControlId::MedicaidRate => {
                format!("{:+.0}%", value * 100.0)
            }
            ControlId::SalaryIncrease => format!("+{:.0}%", value * 100.0),
        }
    }
}

/// Cursor state for the controls panel.
#[derive(Debug, Default)]
pub struct ControlsState {
    pub selected: usize,
}

impl ControlsState {
    pub fn selected_control(&self) -> ControlId {
        ControlId::ALL[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % ControlId::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(ControlId::ALL.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_clamps_at_bounds() {
        let assumptions = BaselineAssumptions::default();
        let mut adjustments = ScenarioAdjustments::neutral(&assumptions);

        ControlId::Residents.adjust(&mut adjustments, 1000);
        assert_eq!(adjustments.residents, 900);

        ControlId::Residents.adjust(&mut adjustments, -1000);
        assert_eq!(adjustments.residents, 400);
    }

    #[test]
    fn adjust_moves_by_one_step() {
        let assumptions = BaselineAssumptions::default();
        let mut adjustments = ScenarioAdjustments::neutral(&assumptions);

        ControlId::ImeRate.adjust(&mut adjustments, 1);
        assert!((adjustments.ime_adjustment - 0.05).abs() < 1e-9);

        ControlId::Sites.adjust(&mut adjustments, -2);
        assert_eq!(adjustments.sites, 4);
    }

    #[test]
    fn reset_restores_baseline_value() {
        let assumptions = BaselineAssumptions::default();
        let mut adjustments = ScenarioAdjustments::neutral(&assumptions);

        ControlId::Fellows.adjust(&mut adjustments, 5);
        assert!(!ControlId::Fellows.at_baseline(&adjustments, &assumptions));

        ControlId::Fellows.reset(&mut adjustments, &assumptions);
        assert!(ControlId::Fellows.at_baseline(&adjustments, &assumptions));
        assert_eq!(adjustments.fellows, assumptions.fellows);
    }

    #[test]
    fn format_shows_signed_percentages_for_rates() {
        let assumptions = BaselineAssumptions::default();
        let mut adjustments = ScenarioAdjustments::neutral(&assumptions);

        assert_eq!(ControlId::ImeRate.format_value(&adjustments), "+0%");

        ControlId::MedicaidRate.adjust(&mut adjustments, -2);
        assert_eq!(ControlId::MedicaidRate.format_value(&adjustments), "-20%");
    }

    #[test]
    fn selection_wraps_both_directions() {
        let mut state = ControlsState::default();

        state.select_prev();
        assert_eq!(state.selected, ControlId::ALL.len() - 1);

        state.select_next();
        assert_eq!(state.selected, 0);
    }
}
