//! Process-wide defaults and per-call render settings.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{QueError, QueResult};
use crate::style::ParamStyle;

/// Environment variable read the first time the default style is needed.
pub const STYLE_ENV_VAR: &str = "QUE_PARAM_STYLE";

/// Style used when nothing else is configured.
pub const FALLBACK_STYLE: ParamStyle = ParamStyle::NUMERIC;

static DEFAULT_STYLE: OnceLock<ParamStyle> = OnceLock::new();

/// The process-wide default parameter style.
///
/// Initialized on first use from `QUE_PARAM_STYLE`, falling back to
/// `numeric` when the variable is unset or invalid.
pub fn default_style() -> ParamStyle {
    *DEFAULT_STYLE.get_or_init(style_from_env)
}

/// Configure the process-wide default style.
///
/// Only one value can ever be installed. Calling this after the default has
/// been read (or set) returns a [`QueError::Config`].
pub fn set_default_style(style: ParamStyle) -> QueResult<()> {
    match DEFAULT_STYLE.set(style) {
        Ok(()) => {
            que_debug!(target: "que.config", style = %style, "default param style set");
            Ok(())
        }
        Err(_) => Err(QueError::config(format!(
            "default param style is already `{}`",
            default_style()
        ))),
    }
}

fn style_from_env() -> ParamStyle {
    match std::env::var(STYLE_ENV_VAR) {
        Ok(raw) => match raw.parse::<ParamStyle>() {
            Ok(style) => {
                que_debug!(target: "que.config", style = %style, "default param style from environment");
                style
            }
            Err(_err) => {
                que_warn!(
                    target: "que.config",
                    value = %raw,
                    error = %_err,
                    fallback = %FALLBACK_STYLE,
                    "ignoring invalid {STYLE_ENV_VAR}"
                );
                FALLBACK_STYLE
            }
        },
        Err(_) => FALLBACK_STYLE,
    }
}

/// Settings for a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Placeholder style.
    pub style: ParamStyle,
    /// First placeholder number for numbered styles.
    pub offset: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            offset: 1,
        }
    }
}

impl RenderConfig {
    /// Create a config with the default style and offset 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder style.
    pub fn with_style(mut self, style: ParamStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the first placeholder number.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}
