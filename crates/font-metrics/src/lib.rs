//! `font-metrics` draws a line of text together with the metrics of the
//! font it is set in: the top, ascent, baseline, descent and bottom lines,
//! the tight bounds of the glyphs, and the advance width of the text.
//!
//! Measurement is done by a [Typeface] (a TrueType/OpenType face via
//! [font_metrics_ttf]) and output goes to a [Canvas] (an SVG document via
//! [font_metrics_svg], or a [DisplayList] for inspection):
//!
//! ```
//! use font_metrics::{MeasureSpec, MetricsOverlayView, SvgCanvas, TtfTypeface};
//!
//! let mut view = MetricsOverlayView::new(TtfTypeface::embedded()?);
//! view.set_text("Hello World!");
//!
//! let size = view.measure(MeasureSpec::exactly(640), MeasureSpec::exactly(240));
//! let mut canvas = SvgCanvas::new(size.width, size.height);
//! view.draw(&mut canvas);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The [ControlSurface] models the form a user edits: text and size
//! fields, one checkbox per overlay, and labels mirroring the metrics.

pub mod config;
mod control;
pub mod logging;

pub use control::{ControlSurface, MetricLabels, parse_font_size};
pub use font_metrics_core::{
    BottomLinePaint, Canvas, Color, DEFAULT_FONT_SIZE_PX, DEFAULT_TEXT, DisplayList, DrawOp,
    FontMetrics, Invalidation, LineKind, MeasureMode, MeasureSpec, MetricsOverlayView,
    OverlayStyle, Padding, Paint, PaintStyle, PathSegment, Rect, Size, Typeface, VisibilityFlags,
};
pub use font_metrics_svg::{SvgCanvas, SvgError};
pub use font_metrics_ttf::{TtfTypeface, TypefaceError};
