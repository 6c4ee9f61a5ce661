use crate::components::charts::sensitivity::render_sensitivity_chart;
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_currency;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, titled_block};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Screen;

pub struct SensitivityScreen;

impl SensitivityScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_break_even(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let current_rate =
            state.assumptions.ime_per_fte * (1.0 + state.adjustments.ime_adjustment);

        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(
                    format!("{:<22}", label),
                    Style::default().fg(HEADER_COLOR),
                ),
                Span::raw(value),
            ])
        };

        let mut lines = vec![
            row("Current IME rate", format_currency(current_rate)),
            row(
                "IME adjustment",
                format!("{:+.0}%", state.adjustments.ime_adjustment * 100.0),
            ),
            Line::from(""),
        ];

        match state.comparison.break_even {
            Some(rate) => {
                lines.push(row("Break-even IME rate", format_currency(rate)));
                let vs_baseline = rate / state.assumptions.ime_per_fte - 1.0;
                lines.push(row(
                    "Vs. baseline rate",
                    format!("{:+.1}%", vs_baseline * 100.0),
                ));
                lines.push(Line::from(""));
                let cushion = current_rate - rate;
                if cushion >= 0.0 {
                    lines.push(Line::from(vec![
                        Span::raw("Rate could fall by "),
                        Span::styled(
                            format_currency(cushion),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" per FTE before the program loses money."),
                    ]));
                } else {
                    lines.push(Line::from(vec![
                        Span::raw("Rate would need to rise by "),
                        Span::styled(
                            format_currency(-cushion),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" per FTE for the program to break even."),
                    ]));
                }
            }
            None => {
                lines.push(Line::styled(
                    "No residents in this scenario, so the IME rate has no effect.",
                    Style::default().fg(HELP_COLOR),
                ));
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(titled_block("Break-even Analysis"))
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

impl Component for SensitivityScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(10)])
            .split(area);

        render_sensitivity_chart(
            frame,
            chunks[0],
            &state.comparison.sensitivity,
            state.adjustments.ime_adjustment,
            state.comparison.scenario.net_position,
        );
        self.render_break_even(frame, chunks[1], state);
    }
}

impl Screen for SensitivityScreen {
    fn title(&self) -> &str {
        "Sensitivity"
    }
}
