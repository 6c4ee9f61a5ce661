use crate::components::charts::grouped_bars::render_grouped_bars;
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::Screen;

pub struct BreakdownScreen;

impl BreakdownScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Component for BreakdownScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let baseline = &state.comparison.baseline;
        let scenario = &state.comparison.scenario;

        let revenue: Vec<(&'static str, f64, f64)> = baseline
            .revenue_components()
            .iter()
            .zip(scenario.revenue_components().iter())
            .map(|((label, base), (_, scen))| (*label, *base, *scen))
            .collect();

        let cost: Vec<(&'static str, f64, f64)> = baseline
            .cost_components()
            .iter()
            .zip(scenario.cost_components().iter())
            .map(|((label, base), (_, scen))| (*label, *base, *scen))
            .collect();

        render_grouped_bars(
            frame,
            chunks[0],
            "Revenue by Component (baseline vs. scenario)",
            &revenue,
        );
        render_grouped_bars(
            frame,
            chunks[1],
            "Cost by Component (baseline vs. scenario)",
            &cost,
        );
    }
}

impl Screen for BreakdownScreen {
    fn title(&self) -> &str {
        "Breakdown"
    }
}
