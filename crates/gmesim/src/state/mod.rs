mod app_state;
mod controls;
mod tabs;

pub use app_state::*;
pub use controls::*;
pub use tabs::*;
