pub mod error;
pub mod options;
pub mod plugin;
pub mod props;
pub mod theme;

pub use error::*;
pub use options::*;
pub use plugin::*;
pub use props::*;
pub use theme::*;
