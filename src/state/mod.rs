//! Application state module

mod app_state;
mod focus;
mod ui_area;

pub use app_state::*;
pub use focus::*;
pub use ui_area::*;
