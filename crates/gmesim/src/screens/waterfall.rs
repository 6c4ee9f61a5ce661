use crate::components::charts::waterfall::render_waterfall;
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_signed_compact;
use crate::util::styles::{HELP_COLOR, titled_block};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use super::Screen;

pub struct WaterfallScreen;

impl WaterfallScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_notes(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let total: f64 = state.comparison.steps.iter().map(|s| s.delta).sum();

        let lines = vec![
            Line::from(format!(
                "Total change: {}",
                format_signed_compact(total)
            )),
            Line::from(""),
            Line::styled(
                "Each bar shows the effect of changing one factor alone.",
                Style::default().fg(HELP_COLOR),
            ),
            Line::styled(
                "Interaction Effects absorbs what single-factor changes miss.",
                Style::default().fg(HELP_COLOR),
            ),
        ];

        let paragraph = Paragraph::new(lines)
            .block(titled_block("Reading the Bridge"))
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

impl Component for WaterfallScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(12), Constraint::Length(7)])
            .split(area);

        render_waterfall(
            frame,
            chunks[0],
            state.comparison.baseline.net_position,
            state.comparison.scenario.net_position,
            &state.comparison.steps,
        );
        self.render_notes(frame, chunks[1], state);
    }
}

impl Screen for WaterfallScreen {
    fn title(&self) -> &str {
        "Waterfall"
    }
}
