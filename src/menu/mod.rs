//! Menu model, path resolution, navigation and action dispatch

mod actions;
mod model;
mod navigation;
mod resolver;

pub use actions::*;
pub use model::*;
pub use navigation::*;
pub use resolver::*;
