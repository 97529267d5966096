use crate::domain::InvalidThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in background/text tokens for the default light variant
pub const DEFAULT_LIGHT: (&str, &str) = ("bg-white", "text-black");
/// Built-in background/text tokens for the default dark variant
pub const DEFAULT_DARK: (&str, &str) = ("bg-slate-800", "text-white");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn available_themes() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }

    /// Built-in style pair used when no custom theme was supplied
    pub fn default_styling(self) -> StylePair {
        let (background, text) = match self {
            Theme::Light => DEFAULT_LIGHT,
            Theme::Dark => DEFAULT_DARK,
        };
        StylePair::new(background, text)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The live theme value held by a component.
///
/// Callers hand in the theme as free-form text, so the state has to be able
/// to hold values outside `light`/`dark`. Those are kept verbatim and only
/// rejected once a view is built from them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ThemeSelection {
    Known(Theme),
    Unrecognized(String),
}

impl ThemeSelection {
    pub fn parse(raw: &str) -> Self {
        match Theme::by_name(raw) {
            Some(theme) => ThemeSelection::Known(theme),
            None => ThemeSelection::Unrecognized(raw.to_string()),
        }
    }

    /// Flips light and dark. Anything that is not `light` becomes `light`.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeSelection::Known(Theme::Light) => ThemeSelection::Known(Theme::Dark),
            _ => ThemeSelection::Known(Theme::Light),
        }
    }

    pub fn theme(&self) -> Result<Theme, InvalidThemeError> {
        match self {
            ThemeSelection::Known(theme) => Ok(*theme),
            ThemeSelection::Unrecognized(raw) => Err(InvalidThemeError(raw.clone())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ThemeSelection::Known(theme) => theme.as_str(),
            ThemeSelection::Unrecognized(raw) => raw,
        }
    }
}

impl Default for ThemeSelection {
    fn default() -> Self {
        ThemeSelection::Known(Theme::Light)
    }
}

impl From<Theme> for ThemeSelection {
    fn from(theme: Theme) -> Self {
        ThemeSelection::Known(theme)
    }
}

impl fmt::Display for ThemeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Background and text style tokens for one theme variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeVariant {
    pub background_color: String,
    pub text_color: String,
}

impl ThemeVariant {
    pub fn new(background_color: impl Into<String>, text_color: impl Into<String>) -> Self {
        Self {
            background_color: background_color.into(),
            text_color: text_color.into(),
        }
    }
}

/// Caller-supplied tokens for both theme variants.
///
/// Both variants are required; a config with only one of them does not
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub light: ThemeVariant,
    pub dark: ThemeVariant,
}

impl ThemeConfig {
    pub fn new(light: ThemeVariant, dark: ThemeVariant) -> Self {
        Self { light, dark }
    }

    pub fn variant(&self, theme: Theme) -> &ThemeVariant {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    pub fn styling(&self, theme: Theme) -> StylePair {
        let variant = self.variant(theme);
        StylePair::new(
            variant.background_color.clone(),
            variant.text_color.clone(),
        )
    }
}

/// The `[background, text]` class list applied to the calendar view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePair {
    pub background: String,
    pub text: String,
}

impl StylePair {
    pub fn new(background: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            text: text.into(),
        }
    }

    pub fn to_class_names(&self) -> Vec<String> {
        vec![self.background.clone(), self.text.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        for theme in Theme::available_themes() {
            assert_eq!(theme.toggled().toggled(), theme);
            let selection = ThemeSelection::from(theme);
            assert_eq!(selection.toggled().toggled(), selection);
        }
    }

    #[test]
    fn test_available_themes_round_trip_by_name() {
        for theme in Theme::available_themes() {
            assert_eq!(Theme::by_name(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::by_name(""), None);
    }

    #[test]
    fn test_unrecognized_toggles_to_light() {
        let selection = ThemeSelection::parse("sepia");
        assert_eq!(selection, ThemeSelection::Unrecognized("sepia".to_string()));
        assert_eq!(selection.toggled(), ThemeSelection::Known(Theme::Light));
    }

    #[test]
    fn test_selection_theme_rejects_unknown() {
        assert_eq!(ThemeSelection::parse("dark").theme(), Ok(Theme::Dark));
        assert_eq!(
            ThemeSelection::parse("Dark").theme(),
            Err(InvalidThemeError("Dark".to_string()))
        );
    }

    #[test]
    fn test_default_styling_table() {
        assert_eq!(
            Theme::Light.default_styling().to_class_names(),
            vec!["bg-white", "text-black"]
        );
        assert_eq!(
            Theme::Dark.default_styling().to_class_names(),
            vec!["bg-slate-800", "text-white"]
        );
    }

    #[test]
    fn test_theme_config_requires_both_variants() {
        let partial = r#"{"light": {"backgroundColor": "a", "textColor": "b"}}"#;
        assert!(serde_json::from_str::<ThemeConfig>(partial).is_err());

        let full = r#"{
            "light": {"backgroundColor": "a", "textColor": "b"},
            "dark": {"backgroundColor": "c", "textColor": "d"}
        }"#;
        let config: ThemeConfig = serde_json::from_str(full).unwrap();
        assert_eq!(config.styling(Theme::Dark), StylePair::new("c", "d"));
    }
}
