use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::keybindings::KeyAction;
use crate::screens::{
    ad_as::AdAsScreen, equilibrium::EquilibriumScreen, home::HomeScreen,
    is_curve::IsCurveScreen, lessons::LessonsScreen, lm_curve::LmCurveScreen,
};
use crate::state::{AppState, ViewId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    home_screen: HomeScreen,
    ad_as_screen: AdAsScreen,
    lessons_screen: LessonsScreen,
    is_curve_screen: IsCurveScreen,
    lm_curve_screen: LmCurveScreen,
    equilibrium_screen: EquilibriumScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            tab_bar: TabBar,
            status_bar: StatusBar::new(),
            home_screen: HomeScreen::new(),
            ad_as_screen: AdAsScreen::new(),
            lessons_screen: LessonsScreen::new(),
            is_curve_screen: IsCurveScreen::new(),
            lm_curve_screen: LmCurveScreen::new(),
            equilibrium_screen: EquilibriumScreen::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!("Starting on {}", self.state.dashboard().name());

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_view {
            ViewId::AdAsHome | ViewId::IsLmHome => {
                self.home_screen.render(frame, area, &self.state)
            }
            ViewId::AdAsSimulation => self.ad_as_screen.render(frame, area, &self.state),
            ViewId::Multiplier | ViewId::Shocks | ViewId::SupplyHorizon | ViewId::Keynes => {
                self.lessons_screen.render(frame, area, &self.state)
            }
            ViewId::IsCurve => self.is_curve_screen.render(frame, area, &self.state),
            ViewId::LmCurve => self.lm_curve_screen.render(frame, area, &self.state),
            ViewId::Equilibrium => self.equilibrium_screen.render(frame, area, &self.state),
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
        match self.state.keybindings.action_for(&key_event) {
            Some(KeyAction::Quit) => {
                self.state.exit = true;
                return;
            }
            Some(KeyAction::SwitchDashboard) => {
                self.state.switch_dashboard();
                return;
            }
            Some(KeyAction::NextView) => {
                self.state.next_view();
                return;
            }
            Some(KeyAction::PrevView) => {
                self.state.prev_view();
                return;
            }
            Some(KeyAction::ClearError) => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then try active screen
        let state = &mut self.state;
        match state.active_view {
            ViewId::AdAsHome | ViewId::IsLmHome => self.home_screen.handle_key(key_event, state),
            ViewId::AdAsSimulation => self.ad_as_screen.handle_key(key_event, state),
            ViewId::Multiplier | ViewId::Shocks | ViewId::SupplyHorizon | ViewId::Keynes => {
                self.lessons_screen.handle_key(key_event, state)
            }
            ViewId::IsCurve => self.is_curve_screen.handle_key(key_event, state),
            ViewId::LmCurve => self.lm_curve_screen.handle_key(key_event, state),
            ViewId::Equilibrium => self.equilibrium_screen.handle_key(key_event, state),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DashboardConfig, KeybindingsConfig};
    use crossterm::event::{KeyCode, KeyModifiers};
    use crate::state::Dashboard;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_key_sets_exit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state().exit);

        let mut app = App::default();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
    }

    #[test]
    fn test_view_navigation() {
        let mut app = App::default();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().active_view, ViewId::AdAsSimulation);

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.state().active_view, ViewId::Keynes);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state().active_view, ViewId::IsLmHome);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.state().active_view, ViewId::Equilibrium);
    }

    #[test]
    fn test_slider_keys_reach_active_screen() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.state().active_view, ViewId::LmCurve);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().inputs.is_lm_m, 210.0);
        let lm = app.state().outputs.lm.as_ref().map(|lm| lm.rate);
        assert_eq!(lm, Ok((210.0 / 2.0 - 0.5 * 300.0) / 0.5));
    }

    #[test]
    fn test_esc_clears_error() {
        let mut app = App::default();
        app.state.set_error("boom".to_string());

        press(&mut app, KeyCode::Esc);
        assert!(app.state().error_message.is_none());
    }

    #[test]
    fn test_esc_can_be_rebound() {
        let config = DashboardConfig {
            keybindings: KeybindingsConfig {
                quit: vec!["esc".into()],
                clear_error: vec!["x".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        let mut app = App::new(AppState::new(&config, Dashboard::AdAs));
        app.state.set_error("boom".to_string());

        press(&mut app, KeyCode::Char('x'));
        assert!(app.state().error_message.is_none());
        assert!(!app.state().exit);

        press(&mut app, KeyCode::Esc);
        assert!(app.state().exit);
    }

    #[test]
    fn test_every_view_renders() {
        let mut app = App::default();
        let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();

        for dashboard in [Dashboard::AdAs, Dashboard::IsLm] {
            for view in dashboard.views() {
                app.state.switch_view(*view);
                terminal.draw(|frame| app.draw(frame)).unwrap();
            }
        }

        app.state.panels.ad_as_explainer.expanded = true;
        app.state.switch_view(ViewId::AdAsSimulation);
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }

    #[test]
    fn test_equilibrium_text_is_drawn() {
        let mut app = App::default();
        app.state.switch_view(ViewId::Equilibrium);
        let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("IS = LM equilibrium: output Y* = 45.5, rate r* = 156.36"));
    }
}
