pub mod charts;
pub mod controls_panel;
pub mod kpi;
pub mod status_bar;
pub mod tab_bar;

use crate::state::AppState;
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// Outcome of offering a key event to a component.
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was consumed
    Handled,
    /// Event was not consumed, offer it to the next component
    NotHandled,
    /// Request app exit
    Exit,
}

/// A widget that can consume key events and draw itself from shared state.
pub trait Component {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: ratatui::layout::Rect, state: &AppState);
}
