//! Size negotiation between a view and its parent.

/// Size a view reports when the parent does not force one, in pixels.
pub const DEFAULT_VIEW_SIZE: u32 = 200;

/// How strictly the parent constrains one axis.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum MeasureMode {
    /// No constraint; the view picks its own size.
    #[default]
    Unspecified,
    /// The view may be at most this large.
    AtMost,
    /// The view must be exactly this large.
    Exactly,
}

/// A constraint on one axis.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

impl MeasureSpec {
    pub const UNSPECIFIED: MeasureSpec = MeasureSpec {
        mode: MeasureMode::Unspecified,
        size: 0,
    };

    pub const fn exactly(size: u32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    pub const fn at_most(size: u32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// Resolve a desired size against this constraint. An exact size always
    /// wins, an upper bound can only shrink `desired`.
    pub fn resolve(self, desired: u32) -> u32 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => desired.min(self.size),
            MeasureMode::Unspecified => desired,
        }
    }
}

/// Measured dimensions of a view, in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEW_SIZE,
            height: DEFAULT_VIEW_SIZE,
        }
    }
}
