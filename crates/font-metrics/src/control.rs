use std::fmt;

use font_metrics_core::{
    DEFAULT_FONT_SIZE_PX, DEFAULT_TEXT, LineKind, MetricsOverlayView, Typeface, VisibilityFlags,
};

/// Parse a user-entered font size, falling back to [DEFAULT_FONT_SIZE_PX]
/// for anything that is not a whole number of pixels.
///
/// Negative numbers parse; [ControlSurface::press_update] ignores them and
/// the view keeps its current size.
pub fn parse_font_size(input: &str) -> i32 {
    input.parse().unwrap_or_else(|_| {
        tracing::debug!(input, "font size is not a number, using the default");
        DEFAULT_FONT_SIZE_PX as i32
    })
}

/// Text shown next to each metric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricLabels {
    pub top: String,
    pub ascent: String,
    pub baseline: String,
    pub descent: String,
    pub bottom: String,
    pub text_bounds: String,
    pub width: String,
    pub leading: String,
}

impl MetricLabels {
    pub fn read<T: Typeface>(view: &MetricsOverlayView<T>) -> Self {
        let metrics = view.font_metrics();
        let bounds = view.text_bounds();

        Self {
            top: number(metrics.top),
            ascent: number(metrics.ascent),
            baseline: "0".into(),
            descent: number(metrics.descent),
            bottom: number(metrics.bottom),
            text_bounds: format!("w = {} h = {}", bounds.width(), bounds.height()),
            width: number(view.measured_text_width()),
            leading: number(metrics.leading),
        }
    }
}

/// Shortest representation that reads back as the same value, always with a decimal point.
fn number(value: f32) -> String {
    format!("{value:?}")
}

impl fmt::Display for MetricLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("top", &self.top),
            ("ascent", &self.ascent),
            ("baseline", &self.baseline),
            ("descent", &self.descent),
            ("bottom", &self.bottom),
            ("bounds", &self.text_bounds),
            ("width", &self.width),
            ("leading", &self.leading),
        ];

        for (name, value) in rows {
            writeln!(f, "{name:<9}{value}")?;
        }
        Ok(())
    }
}

/// The form driving a [MetricsOverlayView].
///
/// Field edits are held until [ControlSurface::press_update]; checkbox
/// changes reach the view immediately.
#[derive(Debug, Clone)]
pub struct ControlSurface {
    text_field: String,
    size_field: String,
    checked: VisibilityFlags,
    labels: MetricLabels,
    keyboard_visible: bool,
}

impl ControlSurface {
    pub fn new<T: Typeface>(view: &MetricsOverlayView<T>) -> Self {
        Self {
            text_field: DEFAULT_TEXT.into(),
            size_field: DEFAULT_FONT_SIZE_PX.to_string(),
            checked: view.visibility(),
            labels: MetricLabels::read(view),
            keyboard_visible: false,
        }
    }

    pub fn text_field(&self) -> &str {
        &self.text_field
    }

    pub fn size_field(&self) -> &str {
        &self.size_field
    }

    pub fn is_checked(&self, kind: LineKind) -> bool {
        self.checked.get(kind)
    }

    pub fn labels(&self) -> &MetricLabels {
        &self.labels
    }

    pub fn is_keyboard_visible(&self) -> bool {
        self.keyboard_visible
    }

    pub fn set_text_field(&mut self, text: impl Into<String>) {
        self.text_field = text.into();
        self.keyboard_visible = true;
    }

    pub fn set_size_field(&mut self, size: impl Into<String>) {
        self.size_field = size.into();
        self.keyboard_visible = true;
    }

    /// Push both fields into the view and refresh the labels.
    pub fn press_update<T: Typeface>(&mut self, view: &mut MetricsOverlayView<T>) {
        let size = parse_font_size(&self.size_field);
        tracing::trace!(text = %self.text_field, size, "updating view");

        view.set_text(self.text_field.as_str());
        match u32::try_from(size) {
            Ok(pixels) => view.set_text_size_in_pixels(pixels),
            Err(_) => tracing::debug!(size, "negative font size ignored"),
        }
        self.labels = MetricLabels::read(view);
        self.keyboard_visible = false;
    }

    pub fn set_checked<T: Typeface>(
        &mut self,
        kind: LineKind,
        checked: bool,
        view: &mut MetricsOverlayView<T>,
    ) {
        tracing::trace!(?kind, checked, "toggling overlay");

        self.checked.set(kind, checked);
        view.set_line_visible(kind, checked);
    }
}
