//! Keybindings configuration data structures.
//!
//! Defines the customizable keyboard shortcuts stored under the
//! `keybindings` key of `~/.macrodash/config.yaml`.

use serde::{Deserialize, Serialize};

/// Key strings for every dashboard action.
///
/// Each action accepts a list of keys in the form produced by
/// [`KeybindingsConfig::key_to_string`](crate::keybindings), e.g. `"q"`,
/// `"ctrl+c"`, `"shift+tab"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub quit: Vec<String>,
    pub switch_dashboard: Vec<String>,
    pub next_view: Vec<String>,
    pub prev_view: Vec<String>,
    pub next_control: Vec<String>,
    pub prev_control: Vec<String>,
    pub increase: Vec<String>,
    pub decrease: Vec<String>,
    pub toggle: Vec<String>,
    /// Dismiss the error shown in the status bar
    pub clear_error: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            switch_dashboard: vec!["d".into()],
            next_view: vec!["tab".into()],
            prev_view: vec!["shift+tab".into()],
            next_control: vec!["j".into(), "down".into()],
            prev_control: vec!["k".into(), "up".into()],
            increase: vec!["l".into(), "right".into(), "+".into()],
            decrease: vec!["h".into(), "left".into(), "-".into()],
            toggle: vec!["space".into(), "enter".into()],
            clear_error: vec!["esc".into()],
        }
    }
}
