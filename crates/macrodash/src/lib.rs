//! Terminal dashboards for the AD-AS and IS-LM teaching models
//!
//! Sliders feed the pure resolvers in `macrodash_core`; each view redraws
//! the resulting curves and equilibrium text on every change.

pub mod app;
pub mod components;
pub mod config;
pub mod keybindings;
pub mod logging;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
