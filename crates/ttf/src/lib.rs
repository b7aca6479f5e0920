//! `font-metrics-ttf` is a backend for the `font-metrics` crate that
//! measures text using TrueType and OpenType faces.
//!
//! Parsing is done by [ttf_parser]. The crate bundles
//! [DejaVu Sans](https://dejavu-fonts.github.io/) so a typeface is always
//! available via [TtfTypeface::embedded].

use font_metrics_core::{FontMetrics, PathSegment, Rect, Typeface};
use thiserror::Error;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// DejaVu Sans, compiled into the crate.
pub static DEJAVU_SANS: &[u8] = include_bytes!("../data/DejaVuSans.ttf");

#[derive(Debug, Error)]
pub enum TypefaceError {
    #[error("failed to parse font face")]
    Parse(#[from] ttf_parser::FaceParsingError),
}

/// A [Typeface] backed by a single parsed font face.
#[derive(Clone)]
pub struct TtfTypeface<'a> {
    face: Face<'a>,
}

impl std::fmt::Debug for TtfTypeface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfTypeface")
            .field("units_per_em", &self.face.units_per_em())
            .field("glyphs", &self.face.number_of_glyphs())
            .finish()
    }
}

impl TtfTypeface<'static> {
    /// The bundled DejaVu Sans face.
    pub fn embedded() -> Result<Self, TypefaceError> {
        Self::parse(DEJAVU_SANS, 0)
    }
}

impl<'a> TtfTypeface<'a> {
    /// Parse face number `index` out of a font file (`0` for anything but collections).
    pub fn parse(data: &'a [u8], index: u32) -> Result<Self, TypefaceError> {
        let face = Face::parse(data, index)?;

        tracing::debug!(
            index,
            units_per_em = face.units_per_em(),
            glyphs = face.number_of_glyphs(),
            "parsed font face"
        );

        Ok(Self { face })
    }

    /// Pixels per font unit at `size` pixels.
    fn scale(&self, size: f32) -> f32 {
        size / f32::from(self.face.units_per_em())
    }

    fn advance(&self, glyph: GlyphId) -> i64 {
        i64::from(self.face.glyph_hor_advance(glyph).unwrap_or(0))
    }

    /// Glyphs making up `text`, each with its pen position in font units.
    /// Characters the face does not cover fall back to the `.notdef` glyph.
    /// The pen can run past `i32::MAX` font units on long text.
    fn glyphs<'t>(&'t self, text: &'t str) -> impl Iterator<Item = (GlyphId, i64)> + 't {
        text.chars().scan(0i64, move |pen, character| {
            let glyph = self.face.glyph_index(character).unwrap_or(GlyphId(0));
            let x = *pen;
            *pen += self.advance(glyph);
            Some((glyph, x))
        })
    }
}

impl Typeface for TtfTypeface<'_> {
    fn font_metrics(&self, size: f32) -> FontMetrics {
        let scale = self.scale(size);
        let bbox = self.face.global_bounding_box();

        FontMetrics {
            top: -f32::from(bbox.y_max) * scale,
            ascent: -f32::from(self.face.ascender()) * scale,
            descent: -f32::from(self.face.descender()) * scale,
            bottom: -f32::from(bbox.y_min) * scale,
            leading: f32::from(self.face.line_gap()) * scale,
        }
    }

    fn text_bounds(&self, text: &str, size: f32) -> Rect {
        // union in font units, y up
        let units = self
            .glyphs(text)
            .filter_map(|(glyph, x)| {
                let bbox = self.face.glyph_bounding_box(glyph)?;
                let glyph_box = [
                    x + i64::from(bbox.x_min),
                    i64::from(bbox.y_min),
                    x + i64::from(bbox.x_max),
                    i64::from(bbox.y_max),
                ];
                (glyph_box[0] < glyph_box[2] && glyph_box[1] < glyph_box[3]).then_some(glyph_box)
            })
            .reduce(|a, b| [a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]);

        let Some([x_min, y_min, x_max, y_max]) = units else {
            return Rect::default();
        };

        // float to int casts saturate
        let scale = self.scale(size);
        Rect {
            left: (x_min as f32 * scale).floor() as i32,
            top: (-y_max as f32 * scale).floor() as i32,
            right: (x_max as f32 * scale).ceil() as i32,
            bottom: (-y_min as f32 * scale).ceil() as i32,
        }
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        let advance: i64 = self
            .glyphs(text)
            .map(|(glyph, _)| self.advance(glyph))
            .sum();

        advance as f32 * self.scale(size)
    }

    fn text_path(&self, text: &str, size: f32) -> Vec<PathSegment> {
        let mut builder = PathCollector {
            scale: self.scale(size),
            x: 0.0,
            segments: Vec::new(),
        };

        for (glyph, x) in self.glyphs(text) {
            builder.x = x as f32;
            self.face.outline_glyph(glyph, &mut builder);
        }

        builder.segments
    }
}

/// Converts font-unit outlines into scaled, y-down path segments.
struct PathCollector {
    scale: f32,
    /// Pen position of the current glyph, in font units.
    x: f32,
    segments: Vec<PathSegment>,
}

impl PathCollector {
    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        ((self.x + x) * self.scale, -y * self.scale)
    }
}

impl OutlineBuilder for PathCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.segments.push(PathSegment::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.segments.push(PathSegment::LineTo { x, y });
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.segments.push(PathSegment::QuadTo { x1, y1, x, y });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.segments.push(PathSegment::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        });
    }

    fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dejavu() -> TtfTypeface<'static> {
        TtfTypeface::embedded().unwrap()
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn font_metrics_at_96px() {
        let metrics = dejavu().font_metrics(96.0);

        assert_close(metrics.top, -118.3125);
        assert_close(metrics.ascent, -89.109375);
        assert_close(metrics.descent, 22.640625);
        assert_close(metrics.bottom, 44.4375);
        assert_close(metrics.leading, 0.0);
    }

    #[test]
    fn metrics_scale_linearly() {
        let metrics = dejavu().font_metrics(48.0);

        assert_close(metrics.top, -59.15625);
        assert_close(metrics.ascent, -44.5546875);
        assert_close(metrics.descent, 11.3203125);
        assert_close(metrics.bottom, 22.21875);
    }

    #[test]
    fn default_text_golden_values() {
        let typeface = dejavu();

        assert_close(typeface.measure_text("My text line", 96.0), 565.078125);

        let bounds = typeface.text_bounds("My text line", 96.0);
        assert_eq!(bounds, Rect::new(9, -73, 560, 20));
        assert_eq!((bounds.width(), bounds.height()), (551, 93));
    }

    #[test]
    fn bounds_round_outward() {
        let typeface = dejavu();

        assert_eq!(
            typeface.text_bounds("My text line", 48.0),
            Rect::new(4, -37, 280, 10)
        );
        assert_eq!(typeface.text_bounds("Hg", 100.0), Rect::new(9, -73, 130, 21));
        assert_close(typeface.measure_text("Hg", 100.0), 138.671875);
    }

    #[test]
    fn whitespace_has_advance_but_no_bounds() {
        let typeface = dejavu();

        assert_close(typeface.measure_text(" ", 96.0), 30.515625);
        assert_eq!(typeface.text_bounds(" ", 96.0), Rect::default());
    }

    #[test]
    fn empty_text_measures_nothing() {
        let typeface = dejavu();

        assert_eq!(typeface.measure_text("", 96.0), 0.0);
        assert_eq!(typeface.text_bounds("", 96.0), Rect::default());
        assert!(typeface.text_path("", 96.0).is_empty());
    }

    #[test]
    fn outlines_stay_inside_bounds() {
        let typeface = dejavu();
        let bounds = typeface.text_bounds("My text line", 96.0);
        let path = typeface.text_path("My text line", 96.0);

        assert!(matches!(path.first(), Some(PathSegment::MoveTo { .. })));
        assert!(path.contains(&PathSegment::Close));

        for segment in path {
            if let PathSegment::MoveTo { x, y } | PathSegment::LineTo { x, y } = segment {
                assert!(x >= bounds.left as f32 && x <= bounds.right as f32, "x = {x}");
                assert!(y >= bounds.top as f32 && y <= bounds.bottom as f32, "y = {y}");
            }
        }
    }

    #[test]
    fn long_text_bounds_track_width() {
        let typeface = dejavu();
        let text = "W".repeat(1_100_000);

        let width = typeface.measure_text(&text, 96.0);
        let bounds = typeface.text_bounds(&text, 96.0);
        let single = typeface.text_bounds("W", 96.0);

        assert!(width > 1.0e8, "width = {width}");
        assert_eq!(bounds.left, single.left);
        assert_eq!((bounds.top, bounds.bottom), (single.top, single.bottom));
        assert!(
            (bounds.right as f32 - width).abs() < width * 1e-4,
            "right = {}, width = {width}",
            bounds.right
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            TtfTypeface::parse(&[0xFF; 64], 0),
            Err(TypefaceError::Parse(_))
        ));
    }
}
