//! Theme resolution and option merging for an embeddable calendar widget.
//!
//! [`use_calendar`] turns [`CalendarProps`] into a [`CalendarComponent`] and
//! a [`ThemeToggle`]. The component resolves a [`ViewDescriptor`] on demand:
//! the style classes for the current theme, the widget plugins, and the
//! caller's pass-through options layered under the managed keys. Rendering
//! is left to whatever widget consumes the descriptor.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::*;
pub use domain::*;
pub use infrastructure::*;
