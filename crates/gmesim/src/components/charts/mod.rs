pub mod grouped_bars;
pub mod sensitivity;
pub mod waterfall;
