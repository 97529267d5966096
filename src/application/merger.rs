use crate::domain::{
    CalendarOptions, ConfigurationError, MANAGED_KEYS, StylePair, ThemeConfig, ThemeSelection,
    ViewError,
};

/// Pick the `[background, text]` tokens for the current theme.
///
/// Without a custom theme this is the built-in table. With one, the theme
/// config has to be present; that is checked before the theme value itself.
pub fn resolve_styling(
    uses_custom_theme: bool,
    theme_config: Option<&ThemeConfig>,
    current_theme: &ThemeSelection,
) -> Result<StylePair, ViewError> {
    if !uses_custom_theme {
        return Ok(current_theme.theme()?.default_styling());
    }
    let config = theme_config.ok_or(ConfigurationError)?;
    Ok(config.styling(current_theme.theme()?))
}

/// Build the final widget options.
///
/// Layers, later wins: framework defaults, caller options, `managed`. Caller
/// entries for managed keys are discarded.
pub fn merge(caller: Option<&CalendarOptions>, managed: &CalendarOptions) -> CalendarOptions {
    let mut merged = CalendarOptions::framework_defaults();
    if let Some(caller) = caller {
        let (allowed, dropped) = caller.without_keys(MANAGED_KEYS);
        for key in &dropped {
            log::warn!("ignoring caller option '{key}': it is set from the resolved theme");
        }
        merged.overlay(&allowed);
    }
    merged.overlay(managed);
    merged
}
