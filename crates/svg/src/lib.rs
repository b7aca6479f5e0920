//! `font-metrics-svg` is a [Canvas] for the `font-metrics` crate which
//! builds an SVG document.

use std::path::{Path, PathBuf};

use font_metrics_core::{Canvas, Color, Paint, PaintStyle, PathSegment};
use svg::{
    Document, Node,
    node::element::{Line, Path as SvgPath, Rectangle, path::Data},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A [Canvas] which draws into an SVG document of a fixed size.
#[derive(Debug)]
pub struct SvgCanvas {
    document: Document,
    width: u32,
    height: u32,
    /// Accumulated translation.
    origin: (f32, f32),
}

impl SvgCanvas {
    /// Create a `width` by `height` canvas with a white background.
    pub fn new(width: u32, height: u32) -> Self {
        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", "white");

        let document = Document::new()
            .set("viewBox", (0, 0, width, height))
            .set("width", format!("{width}px"))
            .set("height", format!("{height}px"))
            .add(background);

        Self {
            document,
            width,
            height,
            origin: (0.0, 0.0),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SvgError> {
        let path = path.as_ref();
        svg::save(path, &self.document).map_err(|source| SvgError::Io {
            path: path.to_owned(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "wrote svg");
        Ok(())
    }

    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.origin.0, y + self.origin.1)
    }
}

/// `#RRGGBB`; SVG takes alpha separately.
fn rgb(color: Color) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        color.red(),
        color.green(),
        color.blue()
    )
}

fn opacity(color: Color) -> f32 {
    f32::from(color.alpha()) / 255.0
}

fn shape_rendering(paint: &Paint) -> &'static str {
    if paint.anti_alias {
        "geometricPrecision"
    } else {
        "crispEdges"
    }
}

/// Sets fill and stroke attributes on a shape according to the paint style.
fn apply_paint<T: Node>(mut node: T, paint: &Paint) -> T {
    let (fill, stroke) = match paint.style {
        PaintStyle::Fill => (true, false),
        PaintStyle::Stroke => (false, true),
        PaintStyle::FillAndStroke => (true, true),
    };

    if fill {
        node.assign("fill", rgb(paint.color));
        node.assign("fill-opacity", opacity(paint.color));
    } else {
        node.assign("fill", "none");
    }

    if stroke {
        node.assign("stroke", rgb(paint.color));
        node.assign("stroke-opacity", opacity(paint.color));
        node.assign("stroke-width", paint.stroke_width);
    }

    node.assign("shape-rendering", shape_rendering(paint));
    node
}

impl Canvas for SvgCanvas {
    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }

    fn draw_text(&mut self, text: &str, glyphs: &[PathSegment], x: f32, y: f32, paint: &Paint) {
        let (dx, dy) = self.point(x, y);

        let data = glyphs
            .iter()
            .map(|segment| segment.offset(dx, dy))
            .fold(Data::new(), |data, segment| match segment {
                PathSegment::MoveTo { x, y } => data.move_to((x, y)),
                PathSegment::LineTo { x, y } => data.line_to((x, y)),
                PathSegment::QuadTo { x1, y1, x, y } => data.quadratic_curve_to((x1, y1, x, y)),
                PathSegment::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => data.cubic_curve_to((x1, y1, x2, y2, x, y)),
                PathSegment::Close => data.close(),
            });

        let path = SvgPath::new().set("d", data).set("aria-label", text);
        self.document.append(apply_paint(path, paint));
    }

    fn draw_line(&mut self, start_x: f32, start_y: f32, stop_x: f32, stop_y: f32, paint: &Paint) {
        let (x1, y1) = self.point(start_x, start_y);
        let (x2, y2) = self.point(stop_x, stop_y);

        let line = Line::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", x2)
            .set("y2", y2)
            .set("stroke", rgb(paint.color))
            .set("stroke-opacity", opacity(paint.color))
            .set("stroke-width", paint.stroke_width)
            .set("shape-rendering", shape_rendering(paint));
        self.document.append(line);
    }

    fn draw_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, paint: &Paint) {
        let (x1, y1) = self.point(left, top);
        let (x2, y2) = self.point(right, bottom);

        let rect = Rectangle::new()
            .set("x", x1.min(x2))
            .set("y", y1.min(y2))
            .set("width", (x2 - x1).abs())
            .set("height", (y2 - y1).abs());
        self.document.append(apply_paint(rect, paint));
    }
}
