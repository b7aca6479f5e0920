//! Geometric values exchanged with a [Typeface](crate::Typeface).
//!
//! All vertical values use a baseline-relative coordinate system where y
//! grows downward: anything above the baseline is negative.

/// Font-wide metrics for a given text size, relative to the baseline.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FontMetrics {
    /// Maximum distance above the baseline for the tallest glyph in the font (negative).
    pub top: f32,
    /// Recommended distance above the baseline for singled spaced text (negative).
    pub ascent: f32,
    /// Recommended distance below the baseline for singled spaced text (positive).
    pub descent: f32,
    /// Maximum distance below the baseline for the lowest glyph in the font (positive).
    pub bottom: f32,
    /// Recommended additional space between lines of text.
    pub leading: f32,
}

/// An integer rectangle, used for tight glyph bounds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Smallest rectangle containing both `self` and `other`.
    /// An empty rectangle does not contribute.
    pub fn union(self, other: Rect) -> Rect {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }

        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A single segment of a glyph outline, in pixels relative to the text origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    QuadTo { x1: f32, y1: f32, x: f32, y: f32 },
    CurveTo {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    Close,
}

impl PathSegment {
    /// Returns this segment moved by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        match self {
            Self::MoveTo { x, y } => Self::MoveTo {
                x: x + dx,
                y: y + dy,
            },
            Self::LineTo { x, y } => Self::LineTo {
                x: x + dx,
                y: y + dy,
            },
            Self::QuadTo { x1, y1, x, y } => Self::QuadTo {
                x1: x1 + dx,
                y1: y1 + dy,
                x: x + dx,
                y: y + dy,
            },
            Self::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => Self::CurveTo {
                x1: x1 + dx,
                y1: y1 + dy,
                x2: x2 + dx,
                y2: y2 + dy,
                x: x + dx,
                y: y + dy,
            },
            Self::Close => Self::Close,
        }
    }
}
