pub mod theme_logger;

pub use theme_logger::*;
