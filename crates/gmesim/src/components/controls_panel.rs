//! The scenario controls panel: one row per slider, always visible on the
//! left-hand side. Every accepted adjustment triggers a full recompute.

use super::{Component, EventResult};
use crate::state::{AppState, ControlId};
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, titled_block};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

/// Width of the inline slider track, in cells.
const TRACK_WIDTH: usize = 12;

pub struct ControlsPanel;

impl ControlsPanel {
    pub fn new() -> Self {
        Self
    }

    /// Render one slider row: label, track with thumb, current value.
    fn slider_line(control: ControlId, state: &AppState, selected: bool) -> Line<'static> {
        let (min, max) = control.bounds();
        let value = control.value(&state.adjustments);
        let position = ((value - min) / (max - min) * (TRACK_WIDTH - 1) as f64).round() as usize;

        let mut track = String::with_capacity(TRACK_WIDTH * 3);
        for i in 0..TRACK_WIDTH {
            track.push(if i == position { '◆' } else { '─' });
        }

        let changed = !control.at_baseline(&state.adjustments, &state.assumptions);

        let label_style = if selected {
            Style::default()
                .fg(FOCUS_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let value_style = if changed {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(HELP_COLOR)
        };

        Line::from(vec![
            Span::styled(if selected { "▸ " } else { "  " }, label_style),
            Span::styled(format!("{:<18}", control.label()), label_style),
            Span::styled(track, Style::default().fg(HELP_COLOR)),
            Span::styled(
                format!(" {:>6}", control.format_value(&state.adjustments)),
                value_style,
            ),
            Span::raw(if changed { " *" } else { "" }),
        ])
    }
}

impl Component for ControlsPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let control = state.controls.selected_control();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.controls.select_next();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.controls.select_prev();
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left => {
                let steps = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    -5
                } else {
                    -1
                };
                control.adjust(&mut state.adjustments, steps);
                state.recompute();
                EventResult::Handled
            }
            KeyCode::Char('l') | KeyCode::Right => {
                let steps = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    5
                } else {
                    1
                };
                control.adjust(&mut state.adjustments, steps);
                state.recompute();
                EventResult::Handled
            }
            KeyCode::Char('H') => {
                control.adjust(&mut state.adjustments, -5);
                state.recompute();
                EventResult::Handled
            }
            KeyCode::Char('L') => {
                control.adjust(&mut state.adjustments, 5);
                state.recompute();
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                control.reset(&mut state.adjustments, &state.assumptions);
                state.recompute();
                EventResult::Handled
            }
            KeyCode::Char('R') => {
                state.reset_all();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = ControlId::ALL
            .iter()
            .enumerate()
            .map(|(idx, control)| {
                ListItem::new(Self::slider_line(
                    *control,
                    state,
                    idx == state.controls.selected,
                ))
            })
            .collect();

        let list = List::new(items).block(titled_block("Scenario Controls"));
        frame.render_widget(list, area);
    }
}
