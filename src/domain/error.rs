use thiserror::Error;

/// Custom styling was requested at construction but no theme config is
/// available when the view is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("themeConfig is required when using custom theme")]
pub struct ConfigurationError;

/// The theme state holds something other than `light` or `dark`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("calendar theme must be 'light' or 'dark', got {0:?}")]
pub struct InvalidThemeError(pub String);

/// Reasons a view descriptor cannot be produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    InvalidTheme(#[from] InvalidThemeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ViewError::from(ConfigurationError);
        assert_eq!(
            err.to_string(),
            "themeConfig is required when using custom theme"
        );

        let err = ViewError::from(InvalidThemeError("sepia".to_string()));
        assert!(err.to_string().contains("\"sepia\""));
        assert!(err.to_string().contains("'light' or 'dark'"));
    }
}
