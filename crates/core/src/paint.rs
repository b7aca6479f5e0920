//! Immutable style descriptors used for every draw call.

use core::{fmt, str::FromStr};

/// A 32-bit ARGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

/// Formats as `#RRGGBB`, or `#AARRGGBB` when not fully opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha() == 0xFF {
            write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

/// Error returned when a color string is not `#RRGGBB` or `#AARRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected a color in the form #RRGGBB or #AARRGGBB")
    }
}

impl core::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseColorError)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError);
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| ParseColorError)?;

        match hex.len() {
            6 => Ok(Color(0xFF00_0000 | value)),
            8 => Ok(Color(value)),
            _ => Err(ParseColorError),
        }
    }
}

/// How a shape is painted.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
    FillAndStroke,
}

/// Describes how a single draw call is rendered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f32,
    pub style: PaintStyle,
    pub anti_alias: bool,
}

impl Paint {
    /// Stroke width shared by every overlay line.
    pub const STROKE_WIDTH: f32 = 2.0;

    /// A paint for a line or outline of the given color.
    pub const fn line(color: Color) -> Self {
        Self {
            color,
            stroke_width: Self::STROKE_WIDTH,
            style: PaintStyle::Fill,
            anti_alias: false,
        }
    }

    pub const fn with_style(self, style: PaintStyle) -> Self {
        Self { style, ..self }
    }

    pub const fn with_stroke_width(self, stroke_width: f32) -> Self {
        Self {
            stroke_width,
            ..self
        }
    }
}

/// Which paint the bottom reference line is drawn with.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum BottomLinePaint {
    /// Reuse the baseline paint. This is what the overlay has always drawn.
    #[default]
    Baseline,
    /// Use [OverlayStyle::bottom].
    Own,
}

/// The full set of paints used by the overlay view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OverlayStyle {
    pub text: Paint,
    pub top: Paint,
    pub ascent: Paint,
    pub baseline: Paint,
    pub descent: Paint,
    pub bottom: Paint,
    pub bounds: Paint,
    pub width: Paint,
    pub bottom_line: BottomLinePaint,
}

impl OverlayStyle {
    /// The paint the bottom line is actually drawn with.
    pub fn bottom_line_paint(&self) -> &Paint {
        match self.bottom_line {
            BottomLinePaint::Baseline => &self.baseline,
            BottomLinePaint::Own => &self.bottom,
        }
    }

    /// Applies `stroke_width` to every line and outline paint.
    pub fn with_stroke_width(self, stroke_width: f32) -> Self {
        Self {
            top: self.top.with_stroke_width(stroke_width),
            ascent: self.ascent.with_stroke_width(stroke_width),
            baseline: self.baseline.with_stroke_width(stroke_width),
            descent: self.descent.with_stroke_width(stroke_width),
            bottom: self.bottom.with_stroke_width(stroke_width),
            bounds: self.bounds.with_stroke_width(stroke_width),
            width: self.width.with_stroke_width(stroke_width),
            ..self
        }
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            text: Paint {
                color: Color::BLACK,
                stroke_width: 0.0,
                style: PaintStyle::Fill,
                anti_alias: true,
            },
            top: Paint::line(Color::from_rgb(0xE5, 0x39, 0x35)),
            ascent: Paint::line(Color::from_rgb(0xFB, 0x8C, 0x00)),
            baseline: Paint::line(Color::from_rgb(0x43, 0xA0, 0x47)),
            descent: Paint::line(Color::from_rgb(0x1E, 0x88, 0xE5)),
            bottom: Paint::line(Color::from_rgb(0x8E, 0x24, 0xAA)),
            bounds: Paint::line(Color::from_rgb(0x54, 0x6E, 0x7A)).with_style(PaintStyle::Stroke),
            width: Paint::line(Color::from_rgb(0xD8, 0x1B, 0x60)),
            bottom_line: BottomLinePaint::Baseline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rgb_and_argb() {
        assert_eq!("#43A047".parse(), Ok(Color::from_rgb(0x43, 0xA0, 0x47)));
        assert_eq!("#80ff0000".parse(), Ok(Color::from_argb(0x80, 0xFF, 0, 0)));
    }

    #[test]
    fn reject_malformed_colors() {
        for input in ["43A047", "#43A04", "#43A0477", "#+3A047", "#GGGGGG", ""] {
            assert_eq!(input.parse::<Color>(), Err(ParseColorError), "{input}");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let opaque = Color::from_rgb(0x1E, 0x88, 0xE5);
        assert_eq!(opaque.to_string(), "#1E88E5");

        let translucent = Color::from_argb(0x40, 0, 0, 0);
        assert_eq!(translucent.to_string(), "#40000000");
        assert_eq!(translucent.to_string().parse(), Ok(translucent));
    }

    #[test]
    fn bottom_line_defaults_to_baseline_paint() {
        let style = OverlayStyle::default();
        assert_eq!(style.bottom_line_paint(), &style.baseline);

        let style = OverlayStyle {
            bottom_line: BottomLinePaint::Own,
            ..style
        };
        assert_eq!(style.bottom_line_paint(), &style.bottom);
    }

    #[test]
    fn stroke_width_skips_text_paint() {
        let style = OverlayStyle::default().with_stroke_width(4.0);
        assert_eq!(style.top.stroke_width, 4.0);
        assert_eq!(style.bounds.stroke_width, 4.0);
        assert_eq!(style.text.stroke_width, 0.0);
    }
}
