use alloc::{string::String, vec::Vec};

use crate::{FontMetrics, Paint, PathSegment, Rect};

/// Measures text set in a single face.
///
/// Implementors delegate to a real font engine; nothing in this crate
/// reimplements glyph metrics.
pub trait Typeface {
    /// Font-wide metrics at `size` pixels.
    fn font_metrics(&self, size: f32) -> FontMetrics;

    /// Tight bounds of the glyphs making up `text`, with the origin at the
    /// start of the baseline. Empty text yields an empty rectangle.
    fn text_bounds(&self, text: &str, size: f32) -> Rect;

    /// Total advance width of `text`.
    fn measure_text(&self, text: &str, size: f32) -> f32;

    /// Outlines of the glyphs making up `text`, with the origin at the start
    /// of the baseline.
    fn text_path(&self, text: &str, size: f32) -> Vec<PathSegment>;
}

/// A drawing surface.
///
/// Coordinates passed to the draw methods are shifted by the sum of all
/// previous [Canvas::translate] calls.
pub trait Canvas {
    fn translate(&mut self, dx: f32, dy: f32);

    /// Draw `text`, whose glyph outlines are `glyphs`, with its baseline origin at `(x, y)`.
    fn draw_text(&mut self, text: &str, glyphs: &[PathSegment], x: f32, y: f32, paint: &Paint);

    fn draw_line(&mut self, start_x: f32, start_y: f32, stop_x: f32, stop_y: f32, paint: &Paint);

    fn draw_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, paint: &Paint);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Translate {
        dx: f32,
        dy: f32,
    },
    Text {
        text: String,
        glyphs: Vec<PathSegment>,
        x: f32,
        y: f32,
        paint: Paint,
    },
    Line {
        start_x: f32,
        start_y: f32,
        stop_x: f32,
        stop_y: f32,
        paint: Paint,
    },
    Rect {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        paint: Paint,
    },
}

/// A [Canvas] which records every call instead of drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Replays the recorded calls onto another canvas.
    pub fn replay(&self, canvas: &mut impl Canvas) {
        for op in &self.ops {
            match op {
                DrawOp::Translate { dx, dy } => canvas.translate(*dx, *dy),
                DrawOp::Text {
                    text,
                    glyphs,
                    x,
                    y,
                    paint,
                } => canvas.draw_text(text, glyphs, *x, *y, paint),
                DrawOp::Line {
                    start_x,
                    start_y,
                    stop_x,
                    stop_y,
                    paint,
                } => canvas.draw_line(*start_x, *start_y, *stop_x, *stop_y, paint),
                DrawOp::Rect {
                    left,
                    top,
                    right,
                    bottom,
                    paint,
                } => canvas.draw_rect(*left, *top, *right, *bottom, paint),
            }
        }
    }
}

impl Canvas for DisplayList {
    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(DrawOp::Translate { dx, dy });
    }

    fn draw_text(&mut self, text: &str, glyphs: &[PathSegment], x: f32, y: f32, paint: &Paint) {
        self.ops.push(DrawOp::Text {
            text: text.into(),
            glyphs: glyphs.to_vec(),
            x,
            y,
            paint: *paint,
        });
    }

    fn draw_line(&mut self, start_x: f32, start_y: f32, stop_x: f32, stop_y: f32, paint: &Paint) {
        self.ops.push(DrawOp::Line {
            start_x,
            start_y,
            stop_x,
            stop_y,
            paint: *paint,
        });
    }

    fn draw_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, paint: &Paint) {
        self.ops.push(DrawOp::Rect {
            left,
            top,
            right,
            bottom,
            paint: *paint,
        });
    }
}
