use crate::layout::HeaderDimensions;
use crate::viewport::Breakpoints;
use leptos::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Theme compiled into both the server and the client bundle, so server
/// rendering and hydration always agree on sizes.
const BUILTIN_THEME: &str = include_str!("../config/theme.json");

#[derive(Debug, Error)]
#[error("invalid theme: {0}")]
pub struct ThemeError(#[from] serde_json::Error);

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub breakpoints: Breakpoints,
    pub header: HeaderDimensions,
}

impl Theme {
    /// Parses a theme. Missing sections and fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The bundled `config/theme.json`, or the defaults if it fails to parse.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_THEME) {
            Ok(theme) => theme,
            Err(err) => {
                tracing::error!(error = %err, "failed to load built-in theme");
                Self::default()
            }
        }
    }
}

pub fn provide_theme(theme: Theme) {
    provide_context(theme);
}

/// The theme provided by an ancestor, or the default one.
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}
