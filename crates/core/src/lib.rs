#![cfg_attr(not(test), no_std)]

//! `font-metrics-core` provides core primitives for the `font-metrics` crate.
//!
//! The crate does not measure or draw anything by itself. Text measurement
//! is delegated to a [Typeface] and drawing to a [Canvas]; the
//! [MetricsOverlayView] translates between the two.

extern crate alloc;

mod canvas;
mod geometry;
mod layout;
mod paint;
mod view;

pub use canvas::{Canvas, DisplayList, DrawOp, Typeface};
pub use geometry::{FontMetrics, PathSegment, Rect};
pub use layout::{DEFAULT_VIEW_SIZE, MeasureMode, MeasureSpec, Size};
pub use paint::{BottomLinePaint, Color, OverlayStyle, Paint, PaintStyle, ParseColorError};
pub use view::{
    DEFAULT_FONT_SIZE_PX, DEFAULT_TEXT, Invalidation, LineKind, MetricsOverlayView, Padding,
    VisibilityFlags,
};
