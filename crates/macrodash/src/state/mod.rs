mod app_state;
mod controls;
mod outputs;
mod panels;
mod views;

// Re-export all types from submodules
pub use app_state::*;
pub use controls::*;
pub use outputs::*;
pub use panels::*;
pub use views::*;
