use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gmesim_core::BaselineAssumptions;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{
    Component, EventResult, controls_panel::ControlsPanel, status_bar::StatusBar, tab_bar::TabBar,
};
use crate::screens::{
    breakdown::BreakdownScreen, comparison::ComparisonScreen, overview::OverviewScreen,
    sensitivity::SensitivityScreen, waterfall::WaterfallScreen,
};
use crate::state::{AppState, TabId};

/// Width of the always-visible controls panel.
const CONTROLS_WIDTH: u16 = 48;

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    controls_panel: ControlsPanel,
    overview_screen: OverviewScreen,
    breakdown_screen: BreakdownScreen,
    waterfall_screen: WaterfallScreen,
    sensitivity_screen: SensitivityScreen,
    comparison_screen: ComparisonScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new(BaselineAssumptions::default())
    }
}

impl App {
    pub fn new(assumptions: BaselineAssumptions) -> Self {
        Self {
            state: AppState::new(assumptions),
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            controls_panel: ControlsPanel::new(),
            overview_screen: OverviewScreen::new(),
            breakdown_screen: BreakdownScreen::new(),
            waterfall_screen: WaterfallScreen::new(),
            sensitivity_screen: SensitivityScreen::new(),
            comparison_screen: ComparisonScreen::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!("Starting main loop");
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);

        // Content: controls panel on the left, active screen on the right
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CONTROLS_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);

        self.controls_panel.render(frame, content[0], &self.state);
        self.render_active_screen(frame, content[1]);

        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Overview => self.overview_screen.render(frame, area, &self.state),
            TabId::Breakdown => self.breakdown_screen.render(frame, area, &self.state),
            TabId::Waterfall => self.waterfall_screen.render(frame, area, &self.state),
            TabId::Sensitivity => self.sensitivity_screen.render(frame, area, &self.state),
            TabId::Comparison => self.comparison_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        // Tab bar, then the controls panel, then the active screen
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        let result = self.controls_panel.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        match self.state.active_tab {
            TabId::Overview => self.overview_screen.handle_key(key_event, &mut self.state),
            TabId::Breakdown => self.breakdown_screen.handle_key(key_event, &mut self.state),
            TabId::Waterfall => self.waterfall_screen.handle_key(key_event, &mut self.state),
            TabId::Sensitivity => self
                .sensitivity_screen
                .handle_key(key_event, &mut self.state),
            TabId::Comparison => self
                .comparison_screen
                .handle_key(key_event, &mut self.state),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_requests_exit() {
        let mut app = App::default();
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.state.exit);
    }

    #[test]
    fn ctrl_c_requests_exit() {
        let mut app = App::default();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state.exit);
    }

    #[test]
    fn digit_switches_tab() {
        let mut app = App::default();
        app.handle_key_event(key(KeyCode::Char('3')));
        assert_eq!(app.state.active_tab, TabId::Waterfall);
    }

    #[test]
    fn esc_clears_error() {
        let mut app = App::default();
        app.state.set_error("boom".to_string());
        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.state.error_message.is_none());
    }

    #[test]
    fn unbound_key_falls_through_without_effect() {
        let mut app = App::default();
        let before = app.state.comparison.scenario.net_position;

        app.handle_key_event(key(KeyCode::Char('z')));

        assert!(!app.state.exit);
        assert_eq!(app.state.active_tab, TabId::Overview);
        assert_eq!(app.state.comparison.scenario.net_position, before);
    }

    #[test]
    fn slider_keys_reach_controls_panel() {
        let mut app = App::default();
        let before = app.state.comparison.scenario.total_trainees;

        app.handle_key_event(key(KeyCode::Char('l')));
        assert_eq!(
            app.state.comparison.scenario.total_trainees,
            before + 10
        );

        app.handle_key_event(key(KeyCode::Char('r')));
        assert_eq!(app.state.comparison.scenario.total_trainees, before);
    }
}
