use crate::domain::{CalendarOptions, ThemeConfig, ThemeSelection};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::rc::Rc;

/// Receives the date of a clicked calendar cell
#[derive(Clone)]
pub struct DateClickCallback(Rc<dyn Fn(NaiveDate)>);

impl DateClickCallback {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(NaiveDate) + 'static,
    {
        Self(Rc::new(callback))
    }

    pub fn call(&self, date: NaiveDate) {
        (self.0)(date)
    }
}

impl fmt::Debug for DateClickCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DateClickCallback(..)")
    }
}

/// Caller input for a calendar component.
///
/// Deserializes from the same camelCase JSON shape the props file uses. The
/// click callback cannot come from JSON and is wired with
/// [`CalendarProps::on_date_click`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarProps {
    /// Accepted for compatibility; styling comes from `theme_config` or the
    /// built-in table.
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub theme_config: Option<ThemeConfig>,
    /// Free-form so that a bad value reaches the component and is reported
    /// when the view is built
    pub theme: Option<String>,
    pub calendar_configuration: Option<CalendarOptions>,
    #[serde(skip)]
    pub date_click: Option<DateClickCallback>,
}

impl CalendarProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn theme_config(mut self, config: ThemeConfig) -> Self {
        self.theme_config = Some(config);
        self
    }

    pub fn calendar_configuration(mut self, options: CalendarOptions) -> Self {
        self.calendar_configuration = Some(options);
        self
    }

    pub fn on_date_click<F>(mut self, callback: F) -> Self
    where
        F: Fn(NaiveDate) + 'static,
    {
        self.date_click = Some(DateClickCallback::new(callback));
        self
    }

    /// The starting theme: the supplied value, or `light` when it is
    /// missing or empty
    pub fn initial_theme(&self) -> ThemeSelection {
        self.theme
            .as_deref()
            .filter(|theme| !theme.is_empty())
            .map(ThemeSelection::parse)
            .unwrap_or_default()
    }
}
