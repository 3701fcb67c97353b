//! Keybindings matching utilities.
//!
//! Converts crossterm key events into the string form used in the config
//! file and resolves them to dashboard actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::KeybindingsConfig;

/// What a key press asks the dashboard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    SwitchDashboard,
    NextView,
    PrevView,
    NextControl,
    PrevControl,
    Increase,
    Decrease,
    Toggle,
    ClearError,
}

impl KeybindingsConfig {
    /// Convert a KeyEvent to our string format.
    ///
    /// Examples:
    /// - KeyCode::Char('a') with no modifiers -> "a"
    /// - KeyCode::Char('c') with ctrl -> "ctrl+c"
    /// - KeyCode::Char('J') with shift -> "shift+j"
    /// - KeyCode::Char('+') with shift -> "+"
    /// - KeyCode::BackTab -> "shift+tab"
    pub fn key_to_string(key: &KeyEvent) -> String {
        let mut parts = Vec::new();
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("ctrl");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            parts.push("alt");
        }

        let key_str = match key.code {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => {
                // Punctuation already carries the shift in the character itself
                if c.is_alphabetic() && (shift || c.is_uppercase()) {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Tab => {
                if shift {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            KeyCode::BackTab => {
                parts.push("shift");
                "tab".to_string()
            }
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            _ => return String::new(),
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if a key event matches any of the configured bindings.
    pub fn matches(key: &KeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// Resolve a key to the first action bound to it.
    pub fn action_for(&self, key: &KeyEvent) -> Option<KeyAction> {
        let table: [(&[String], KeyAction); 10] = [
            (self.quit.as_slice(), KeyAction::Quit),
            (self.switch_dashboard.as_slice(), KeyAction::SwitchDashboard),
            (self.next_view.as_slice(), KeyAction::NextView),
            (self.prev_view.as_slice(), KeyAction::PrevView),
            (self.next_control.as_slice(), KeyAction::NextControl),
            (self.prev_control.as_slice(), KeyAction::PrevControl),
            (self.increase.as_slice(), KeyAction::Increase),
            (self.decrease.as_slice(), KeyAction::Decrease),
            (self.toggle.as_slice(), KeyAction::Toggle),
            (self.clear_error.as_slice(), KeyAction::ClearError),
        ];

        table
            .into_iter()
            .find(|(bindings, _)| Self::matches(key, bindings))
            .map(|(_, action)| action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_key_to_string_basic() {
        let key = make_key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "a");
    }

    #[test]
    fn test_key_to_string_ctrl() {
        let key = make_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "ctrl+c");
    }

    #[test]
    fn test_key_to_string_shift() {
        let key = make_key(KeyCode::Char('J'), KeyModifiers::SHIFT);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "shift+j");

        let key = make_key(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "+");
    }

    #[test]
    fn test_key_to_string_special() {
        let key = make_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "enter");

        let key = make_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "space");

        let key = make_key(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "shift+tab");

        let key = make_key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "shift+tab");
    }

    #[test]
    fn test_matches() {
        let bindings = vec!["j".to_string(), "down".to_string()];

        let key = make_key(KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(KeybindingsConfig::matches(&key, &bindings));

        let key = make_key(KeyCode::Down, KeyModifiers::NONE);
        assert!(KeybindingsConfig::matches(&key, &bindings));

        let key = make_key(KeyCode::Char('k'), KeyModifiers::NONE);
        assert!(!KeybindingsConfig::matches(&key, &bindings));

        let key = make_key(KeyCode::Insert, KeyModifiers::NONE);
        assert!(!KeybindingsConfig::matches(&key, &[String::new()]));
    }

    #[test]
    fn test_default_actions() {
        let config = KeybindingsConfig::default();
        let action = |code, modifiers| config.action_for(&make_key(code, modifiers));

        assert_eq!(action(KeyCode::Char('q'), KeyModifiers::NONE), Some(KeyAction::Quit));
        assert_eq!(
            action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyAction::Quit)
        );
        assert_eq!(action(KeyCode::Tab, KeyModifiers::NONE), Some(KeyAction::NextView));
        assert_eq!(
            action(KeyCode::BackTab, KeyModifiers::SHIFT),
            Some(KeyAction::PrevView)
        );
        assert_eq!(action(KeyCode::Right, KeyModifiers::NONE), Some(KeyAction::Increase));
        assert_eq!(action(KeyCode::Char('h'), KeyModifiers::NONE), Some(KeyAction::Decrease));
        assert_eq!(action(KeyCode::Char(' '), KeyModifiers::NONE), Some(KeyAction::Toggle));
        assert_eq!(action(KeyCode::Esc, KeyModifiers::NONE), Some(KeyAction::ClearError));
        assert_eq!(action(KeyCode::Char('z'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_custom_binding_overrides() {
        let config = KeybindingsConfig {
            quit: vec!["ctrl+q".into()],
            ..Default::default()
        };

        let q = make_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(config.action_for(&q), None);

        let ctrl_q = make_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(config.action_for(&ctrl_q), Some(KeyAction::Quit));
    }
}
