pub mod calendar;
pub mod cli;
pub mod config;
pub mod factory;
pub mod merger;
pub mod resolver;

pub use calendar::*;
pub use cli::*;
pub use config::*;
pub use factory::{DateReporting, ReportingMode, ViewDescriptor};
pub use resolver::*;
