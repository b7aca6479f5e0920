//! Optional TOML configuration for the `font-metrics` binary.
//!
//! ```toml
//! [view]
//! width = 720
//! height = 320
//! padding = 24
//!
//! [style]
//! baseline = "#43A047"
//! bottom = "#8E24AA"
//! stroke_width = 1.5
//! bottom_line = "own"
//! ```
//!
//! Every key is optional. Colors are `#RRGGBB` or `#AARRGGBB`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use font_metrics_core::{BottomLinePaint, Color, OverlayStyle, ParseColorError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub view: ViewConfig,
    pub style: StyleConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        let config = Self::from_toml(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

/// Size and padding of the overlay view, in pixels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub padding: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub text: Option<ColorValue>,
    pub top: Option<ColorValue>,
    pub ascent: Option<ColorValue>,
    pub baseline: Option<ColorValue>,
    pub descent: Option<ColorValue>,
    pub bottom: Option<ColorValue>,
    pub bounds: Option<ColorValue>,
    pub width: Option<ColorValue>,
    pub stroke_width: Option<f32>,
    pub bottom_line: Option<BottomLine>,
}

impl StyleConfig {
    /// Overrides the parts of `style` this config sets.
    pub fn apply(&self, style: OverlayStyle) -> OverlayStyle {
        let mut style = match self.stroke_width {
            Some(stroke_width) => style.with_stroke_width(stroke_width),
            None => style,
        };

        let paints = [
            (&self.text, &mut style.text),
            (&self.top, &mut style.top),
            (&self.ascent, &mut style.ascent),
            (&self.baseline, &mut style.baseline),
            (&self.descent, &mut style.descent),
            (&self.bottom, &mut style.bottom),
            (&self.bounds, &mut style.bounds),
            (&self.width, &mut style.width),
        ];
        for (color, paint) in paints {
            if let Some(ColorValue(color)) = color {
                paint.color = *color;
            }
        }

        if let Some(bottom_line) = self.bottom_line {
            style.bottom_line = bottom_line.into();
        }
        style
    }
}

/// A [Color] written as a hex string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct ColorValue(pub Color);

impl TryFrom<String> for ColorValue {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse().map(ColorValue)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BottomLine {
    Baseline,
    Own,
}

impl From<BottomLine> for BottomLinePaint {
    fn from(value: BottomLine) -> Self {
        match value {
            BottomLine::Baseline => BottomLinePaint::Baseline,
            BottomLine::Own => BottomLinePaint::Own,
        }
    }
}
