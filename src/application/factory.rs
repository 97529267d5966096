use crate::application::merger::{merge, resolve_styling};
use crate::domain::{
    CalendarOptions, DateClickCallback, HEIGHT, PLUGINS, PluginSet, StylePair, ThemeConfig,
    ThemeSelection, VIEW_CLASS_NAMES, ViewError,
};
use crate::infrastructure::StateCell;
use chrono::NaiveDate;
use std::fmt;
use std::rc::Rc;

/// How a clicked date is reported back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportingMode {
    Callback,
    SelectedDate,
}

/// Where date clicks go.
///
/// Chosen once per component: a caller callback if one was wired, otherwise
/// the component's own selected-date state.
#[derive(Clone)]
pub enum DateReporting {
    Callback(DateClickCallback),
    SelectedDate(Rc<StateCell<Option<NaiveDate>>>),
}

impl DateReporting {
    pub fn mode(&self) -> ReportingMode {
        match self {
            DateReporting::Callback(_) => ReportingMode::Callback,
            DateReporting::SelectedDate(_) => ReportingMode::SelectedDate,
        }
    }

    fn report(&self, date: NaiveDate) {
        match self {
            DateReporting::Callback(callback) => callback.call(date),
            DateReporting::SelectedDate(state) => state.set(Some(date)),
        }
    }
}

impl fmt::Debug for DateReporting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateReporting::{:?}", self.mode())
    }
}

/// Everything the rendering widget needs for one frame of the calendar
#[derive(Debug, Clone)]
pub struct ViewDescriptor {
    view_class_names: StylePair,
    plugins: PluginSet,
    options: CalendarOptions,
    date_click: DateReporting,
}

impl ViewDescriptor {
    pub fn view_class_names(&self) -> &StylePair {
        &self.view_class_names
    }

    pub fn plugins(&self) -> &PluginSet {
        &self.plugins
    }

    pub fn height(&self) -> Option<&str> {
        self.options.get_str(HEIGHT)
    }

    /// Merged widget options, including the managed keys.
    ///
    /// A `dateClick` entry from the caller options is kept here as plain
    /// data. It is never the click handler; clicks are reported only through
    /// [`ViewDescriptor::click_date`].
    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    pub fn reporting_mode(&self) -> ReportingMode {
        self.date_click.mode()
    }

    /// The widget's `dateClick` handler
    pub fn click_date(&self, date: NaiveDate) {
        log::debug!("date clicked: {date}");
        self.date_click.report(date);
    }
}

/// Produce the view for the current state.
///
/// Built-in themes get the grid and interaction plugins; custom themes get
/// the grid plugin only.
pub fn build(
    uses_custom_theme: bool,
    current_theme: &ThemeSelection,
    theme_config: Option<&ThemeConfig>,
    caller_options: Option<&CalendarOptions>,
    date_click: DateReporting,
) -> Result<ViewDescriptor, ViewError> {
    let view_class_names = resolve_styling(uses_custom_theme, theme_config, current_theme)?;
    let plugins = if uses_custom_theme {
        PluginSet::grid_only()
    } else {
        PluginSet::standard()
    };

    let managed = CalendarOptions::new()
        .with(VIEW_CLASS_NAMES, view_class_names.to_class_names())
        .with(PLUGINS, plugins.names());
    let options = merge(caller_options, &managed);

    log::debug!(
        "built calendar view: theme={current_theme}, custom={uses_custom_theme}, plugins={:?}",
        plugins.names()
    );

    Ok(ViewDescriptor {
        view_class_names,
        plugins,
        options,
        date_click,
    })
}
