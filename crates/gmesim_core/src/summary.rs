//! Impact summary for the narrative box: what changed, and what drove it.

use serde::Serialize;

use crate::model::FinancialOutcome;

/// A labeled component change between baseline and scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentDelta {
    pub label: &'static str,
    pub delta: f64,
}

/// Headline numbers behind the "what this means" narrative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactSummary {
    /// Scenario net position minus baseline net position
    pub net_change: f64,
    /// Revenue component with the largest absolute change
    pub revenue_driver: ComponentDelta,
    /// Cost component with the largest absolute change
    pub cost_driver: ComponentDelta,
    /// Whether the scenario stays out of deficit
    pub sustainable: bool,
}

impl ImpactSummary {
    pub fn new(baseline: &FinancialOutcome, scenario: &FinancialOutcome) -> Self {
        Self {
            net_change: scenario.net_position - baseline.net_position,
            revenue_driver: largest_delta(
                &baseline.revenue_components(),
                &scenario.revenue_components(),
            ),
            cost_driver: largest_delta(&baseline.cost_components(), &scenario.cost_components()),
            sustainable: scenario.net_position >= 0.0,
        }
    }
}

fn largest_delta(
    baseline: &[(&'static str, f64)],
    scenario: &[(&'static str, f64)],
) -> ComponentDelta {
    baseline
        .iter()
        .zip(scenario)
        .map(|(&(label, base), &(_, scen))| ComponentDelta {
            label,
            delta: scen - base,
        })
        .max_by(|a, b| a.delta.abs().total_cmp(&b.delta.abs()))
        .unwrap_or(ComponentDelta {
            label: "None",
            delta: 0.0,
        })
}
