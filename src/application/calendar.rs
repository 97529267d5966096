use crate::application::factory::{self, DateReporting, ReportingMode, ViewDescriptor};
use crate::application::resolver::ThemeResolver;
use crate::domain::{CalendarOptions, CalendarProps, ThemeConfig, ThemeSelection, ViewError};
use crate::infrastructure::{FnHook, StateCell, StateHook, SubscriptionId, ThemeLoggerHook};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug)]
struct Inner {
    resolver: ThemeResolver,
    theme_config: RefCell<Option<ThemeConfig>>,
    calendar_configuration: Option<CalendarOptions>,
    date_reporting: DateReporting,
    selected_date: Rc<StateCell<Option<NaiveDate>>>,
}

impl Inner {
    fn build_view(&self) -> Result<ViewDescriptor, ViewError> {
        let current = self.resolver.current_theme();
        let theme_config = self.theme_config.borrow();
        factory::build(
            self.resolver.uses_custom_theme(),
            &current,
            theme_config.as_ref(),
            self.calendar_configuration.as_ref(),
            self.date_reporting.clone(),
        )
    }
}

/// One calendar instance: its theme state, selected date and the inputs
/// needed to rebuild its view.
///
/// Cheap to clone; clones share the same state.
#[derive(Debug, Clone)]
pub struct CalendarComponent {
    inner: Rc<Inner>,
}

impl CalendarComponent {
    pub fn new(props: CalendarProps) -> Self {
        Self::with_default_hooks(props)
    }

    pub fn with_default_hooks(props: CalendarProps) -> Self {
        let component = Self::without_hooks(props);
        component.inner.resolver.subscribe(ThemeLoggerHook);
        component
    }

    pub fn without_hooks(props: CalendarProps) -> Self {
        let resolver =
            ThemeResolver::initialize(Some(props.initial_theme()), props.theme_config.is_some());
        let selected_date = Rc::new(StateCell::new(None));
        let date_reporting = match props.date_click {
            Some(callback) => DateReporting::Callback(callback),
            None => DateReporting::SelectedDate(Rc::clone(&selected_date)),
        };

        Self {
            inner: Rc::new(Inner {
                resolver,
                theme_config: RefCell::new(props.theme_config),
                calendar_configuration: props.calendar_configuration,
                date_reporting,
                selected_date,
            }),
        }
    }

    /// Resolve the view for the current theme. Recomputed on every call.
    pub fn view(&self) -> Result<ViewDescriptor, ViewError> {
        self.inner.build_view()
    }

    pub fn toggle_theme(&self) {
        self.inner.resolver.toggle();
    }

    /// A standalone handle that toggles this component's theme
    pub fn toggle_handle(&self) -> ThemeToggle {
        ThemeToggle {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn current_theme(&self) -> ThemeSelection {
        self.inner.resolver.current_theme()
    }

    /// Force the theme to a raw value, e.g. one restored from storage.
    /// Values other than `light`/`dark` make [`CalendarComponent::view`] fail.
    pub fn set_theme(&self, raw: &str) {
        self.inner.resolver.set_theme(raw);
    }

    pub fn uses_custom_theme(&self) -> bool {
        self.inner.resolver.uses_custom_theme()
    }

    pub fn theme_config(&self) -> Option<ThemeConfig> {
        self.inner.theme_config.borrow().clone()
    }

    /// Replace the stored theme config.
    ///
    /// Whether the component uses custom styling was fixed at construction:
    /// a config supplied here is ignored by a default-styled component, and
    /// removing it from a custom-styled one makes the next view fail.
    pub fn set_theme_config(&self, config: Option<ThemeConfig>) {
        if config.is_some() && !self.uses_custom_theme() {
            log::debug!("theme config supplied after construction; default styling stays active");
        }
        *self.inner.theme_config.borrow_mut() = config;
    }

    pub fn reporting_mode(&self) -> ReportingMode {
        self.inner.date_reporting.mode()
    }

    /// Last clicked date. Always `None` when clicks go to a callback.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.inner.selected_date.get()
    }

    pub fn selected_date_str(&self) -> Option<String> {
        self.selected_date()
            .map(|date| date.format("%Y-%m-%d").to_string())
    }

    pub fn subscribe_theme<H>(&self, hook: H) -> SubscriptionId
    where
        H: StateHook<ThemeSelection> + 'static,
    {
        self.inner.resolver.subscribe(hook)
    }

    pub fn unsubscribe_theme(&self, id: SubscriptionId) -> bool {
        self.inner.resolver.unsubscribe(id)
    }

    pub fn subscribe_selected_date<H>(&self, hook: H) -> SubscriptionId
    where
        H: StateHook<Option<NaiveDate>> + 'static,
    {
        self.inner.selected_date.subscribe(hook)
    }

    pub fn unsubscribe_selected_date(&self, id: SubscriptionId) -> bool {
        self.inner.selected_date.unsubscribe(id)
    }

    /// Rebuild the view after every theme change and hand it to `on_view`.
    ///
    /// The watcher does not keep the component alive; once every handle is
    /// dropped it stops firing. Remove it with
    /// [`CalendarComponent::unsubscribe_theme`].
    pub fn watch_view<F>(&self, name: &str, on_view: F) -> SubscriptionId
    where
        F: Fn(Result<ViewDescriptor, ViewError>) + 'static,
    {
        let inner: Weak<Inner> = Rc::downgrade(&self.inner);
        self.subscribe_theme(FnHook::new(
            name,
            move |_: &ThemeSelection, _: &ThemeSelection| {
                if let Some(inner) = inner.upgrade() {
                    on_view(inner.build_view());
                }
            },
        ))
    }

    pub fn theme_hooks(&self) -> Vec<String> {
        self.inner.resolver.state().list_hooks()
    }
}

/// The `toggleTheme` control handed out next to a calendar
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    inner: Rc<Inner>,
}

impl ThemeToggle {
    pub fn toggle(&self) {
        self.inner.resolver.toggle();
    }
}

/// What [`use_calendar`] hands back: the calendar and its theme toggle
#[derive(Debug, Clone)]
pub struct UseCalendar {
    pub calendar: CalendarComponent,
    pub toggle_theme: ThemeToggle,
}

/// Create a calendar component with the default hooks and its toggle
pub fn use_calendar(props: CalendarProps) -> UseCalendar {
    let calendar = CalendarComponent::new(props);
    let toggle_theme = calendar.toggle_handle();
    UseCalendar {
        calendar,
        toggle_theme,
    }
}
