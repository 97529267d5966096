pub mod plugins;
pub mod state;

pub use plugins::*;
pub use state::*;
