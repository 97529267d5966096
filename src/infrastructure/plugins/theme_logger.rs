use crate::domain::ThemeSelection;
use crate::infrastructure::StateHook;

/// Plugin that logs every theme transition of a component
pub struct ThemeLoggerHook;

impl StateHook<ThemeSelection> for ThemeLoggerHook {
    fn on_change(&self, previous: &ThemeSelection, current: &ThemeSelection) {
        match current {
            ThemeSelection::Known(_) => {
                log::info!("calendar theme changed: {previous} -> {current}");
            }
            ThemeSelection::Unrecognized(raw) => {
                log::warn!("calendar theme set to unrecognized value {raw:?} (was {previous})");
            }
        }
    }

    fn name(&self) -> &str {
        "Theme Logger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;
    use crate::infrastructure::StateCell;

    #[test]
    fn test_registers_under_its_name() {
        let cell = StateCell::new(ThemeSelection::default());
        cell.subscribe(ThemeLoggerHook);
        cell.set(ThemeSelection::Known(Theme::Dark));
        cell.set(ThemeSelection::parse("sepia"));
        assert_eq!(cell.list_hooks(), vec!["Theme Logger"]);
    }
}
