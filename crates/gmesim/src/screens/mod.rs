pub mod breakdown;
pub mod comparison;
pub mod overview;
pub mod sensitivity;
pub mod waterfall;

use crate::components::Component;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}
