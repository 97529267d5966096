use crate::domain::{InvalidThemeError, Theme, ThemeSelection};
use crate::infrastructure::{StateCell, StateHook, SubscriptionId};
use std::rc::Rc;

/// Owns the live theme of one component and whether it styles itself from a
/// caller theme config.
///
/// `uses_custom_theme` is decided once, in [`ThemeResolver::initialize`], and
/// never changes afterwards.
#[derive(Debug)]
pub struct ThemeResolver {
    current: Rc<StateCell<ThemeSelection>>,
    uses_custom_theme: bool,
}

impl ThemeResolver {
    pub fn initialize(theme: Option<ThemeSelection>, theme_config_provided: bool) -> Self {
        let initial = theme.unwrap_or_default();
        log::debug!("initializing theme resolver: theme={initial}, custom={theme_config_provided}");
        Self {
            current: Rc::new(StateCell::new(initial)),
            uses_custom_theme: theme_config_provided,
        }
    }

    /// Flips between light and dark and notifies subscribers
    pub fn toggle(&self) {
        self.current.update(ThemeSelection::toggled);
    }

    pub fn current_theme(&self) -> ThemeSelection {
        self.current.get()
    }

    pub fn checked_theme(&self) -> Result<Theme, InvalidThemeError> {
        self.current.with(ThemeSelection::theme)
    }

    /// Replace the current theme with an arbitrary caller value
    pub fn set_theme(&self, raw: &str) {
        self.current.set(ThemeSelection::parse(raw));
    }

    pub fn uses_custom_theme(&self) -> bool {
        self.uses_custom_theme
    }

    pub fn subscribe<H>(&self, hook: H) -> SubscriptionId
    where
        H: StateHook<ThemeSelection> + 'static,
    {
        self.current.subscribe(hook)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.current.unsubscribe(id)
    }

    pub(crate) fn state(&self) -> Rc<StateCell<ThemeSelection>> {
        Rc::clone(&self.current)
    }
}
