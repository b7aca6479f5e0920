use alloc::string::String;

use crate::{
    Canvas, FontMetrics, MeasureSpec, OverlayStyle, Rect, Size, Typeface, layout::DEFAULT_VIEW_SIZE,
};

/// Text shown before the host supplies any.
pub const DEFAULT_TEXT: &str = "My text line";

/// Text size used before the host supplies one, and whenever it supplies garbage.
pub const DEFAULT_FONT_SIZE_PX: u32 = 96;

/// One of the overlays the view can draw on top of its text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LineKind {
    Top,
    Ascent,
    Baseline,
    Descent,
    Bottom,
    Bounds,
    Width,
}

impl LineKind {
    pub const ALL: [LineKind; 7] = [
        LineKind::Top,
        LineKind::Ascent,
        LineKind::Baseline,
        LineKind::Descent,
        LineKind::Bottom,
        LineKind::Bounds,
        LineKind::Width,
    ];
}

/// Independent on/off switches for each [LineKind].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VisibilityFlags {
    pub top: bool,
    pub ascent: bool,
    pub baseline: bool,
    pub descent: bool,
    pub bottom: bool,
    pub bounds: bool,
    pub width: bool,
}

impl VisibilityFlags {
    pub const ALL_VISIBLE: VisibilityFlags = VisibilityFlags {
        top: true,
        ascent: true,
        baseline: true,
        descent: true,
        bottom: true,
        bounds: true,
        width: true,
    };

    pub fn get(&self, kind: LineKind) -> bool {
        match kind {
            LineKind::Top => self.top,
            LineKind::Ascent => self.ascent,
            LineKind::Baseline => self.baseline,
            LineKind::Descent => self.descent,
            LineKind::Bottom => self.bottom,
            LineKind::Bounds => self.bounds,
            LineKind::Width => self.width,
        }
    }

    pub fn set(&mut self, kind: LineKind, visible: bool) {
        let flag = match kind {
            LineKind::Top => &mut self.top,
            LineKind::Ascent => &mut self.ascent,
            LineKind::Baseline => &mut self.baseline,
            LineKind::Descent => &mut self.descent,
            LineKind::Bottom => &mut self.bottom,
            LineKind::Bounds => &mut self.bounds,
            LineKind::Width => &mut self.width,
        };
        *flag = visible;
    }
}

impl Default for VisibilityFlags {
    fn default() -> Self {
        Self::ALL_VISIBLE
    }
}

/// Space between the view's edges and its content, in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    pub const fn uniform(px: u32) -> Self {
        Self {
            left: px,
            top: px,
            right: px,
            bottom: px,
        }
    }
}

/// Work a view has asked its host to do.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Invalidation {
    /// The view must be drawn again.
    pub redraw: bool,
    /// The view must be measured again before drawing.
    pub layout: bool,
}

/// Draws a line of text and overlays its font metrics.
///
/// Every metric is read from the [Typeface] on demand, so the accessors
/// always agree with what [MetricsOverlayView::draw] puts on the canvas.
#[derive(Debug)]
pub struct MetricsOverlayView<T> {
    typeface: T,
    text: String,
    text_size: u32,
    visibility: VisibilityFlags,
    style: OverlayStyle,
    padding: Padding,
    measured: Size,
    invalidation: Invalidation,
}

impl<T: Typeface> MetricsOverlayView<T> {
    pub fn new(typeface: T) -> Self {
        Self {
            typeface,
            text: DEFAULT_TEXT.into(),
            text_size: DEFAULT_FONT_SIZE_PX,
            visibility: VisibilityFlags::default(),
            style: OverlayStyle::default(),
            padding: Padding::default(),
            measured: Size::default(),
            invalidation: Invalidation::default(),
        }
    }

    pub fn typeface(&self) -> &T {
        &self.typeface
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_size_in_pixels(&self) -> u32 {
        self.text_size
    }

    pub fn visibility(&self) -> VisibilityFlags {
        self.visibility
    }

    pub fn is_line_visible(&self, kind: LineKind) -> bool {
        self.visibility.get(kind)
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn measured_size(&self) -> Size {
        self.measured
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.request_layout();
    }

    pub fn set_text_size_in_pixels(&mut self, pixels: u32) {
        self.text_size = pixels;
        self.request_layout();
    }

    pub fn set_line_visible(&mut self, kind: LineKind, visible: bool) {
        self.visibility.set(kind, visible);
        self.invalidation.redraw = true;
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
        self.request_layout();
    }

    pub fn set_style(&mut self, style: OverlayStyle) {
        self.style = style;
        self.invalidation.redraw = true;
    }

    /// Returns and clears the pending redraw and layout requests.
    pub fn take_invalidation(&mut self) -> Invalidation {
        core::mem::take(&mut self.invalidation)
    }

    pub fn font_metrics(&self) -> FontMetrics {
        self.typeface.font_metrics(self.size_px())
    }

    pub fn text_bounds(&self) -> Rect {
        self.typeface.text_bounds(&self.text, self.size_px())
    }

    pub fn measured_text_width(&self) -> f32 {
        self.typeface.measure_text(&self.text, self.size_px())
    }

    /// Picks the view's size. The view would like to be
    /// [DEFAULT_VIEW_SIZE] square and never grows to fit its text.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        self.measured = Size {
            width: width_spec.resolve(DEFAULT_VIEW_SIZE),
            height: height_spec.resolve(DEFAULT_VIEW_SIZE),
        };
        self.invalidation.layout = false;
        self.measured
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let size = self.size_px();
        let width = self.measured.width as f32;
        let height = self.measured.height as f32;
        let padding_left = self.padding.left as f32;

        // center the baseline vertically
        let vertical_adjustment = (self.measured.height / 2) as f32;
        canvas.translate(0.0, vertical_adjustment);

        let glyphs = self.typeface.text_path(&self.text, size);
        canvas.draw_text(&self.text, &glyphs, padding_left, 0.0, &self.style.text);

        let metrics = self.typeface.font_metrics(size);
        let lines = [
            (self.visibility.top, metrics.top, &self.style.top),
            (self.visibility.ascent, metrics.ascent, &self.style.ascent),
            (self.visibility.baseline, 0.0, &self.style.baseline),
            (self.visibility.descent, metrics.descent, &self.style.descent),
            (
                self.visibility.bottom,
                metrics.bottom,
                self.style.bottom_line_paint(),
            ),
        ];
        for (_, y, paint) in lines.into_iter().filter(|(visible, _, _)| *visible) {
            canvas.draw_line(0.0, y, width, y, paint);
        }

        if self.visibility.bounds {
            let bounds = self.typeface.text_bounds(&self.text, size);
            canvas.draw_rect(
                bounds.left as f32 + padding_left,
                bounds.top as f32,
                bounds.right as f32 + padding_left,
                bounds.bottom as f32,
                &self.style.bounds,
            );
        }

        if self.visibility.width {
            let advance = self.typeface.measure_text(&self.text, size);
            let bounds = self.typeface.text_bounds(&self.text, size);

            // center the advance around the bounds
            let left = padding_left + bounds.left as f32 - (advance - bounds.width() as f32) / 2.0;
            let right = left + advance;
            let start_y = -vertical_adjustment;
            let stop_y = start_y + height;

            canvas.draw_line(left, start_y, left, stop_y, &self.style.width);
            canvas.draw_line(right, start_y, right, stop_y, &self.style.width);
        }
    }

    fn size_px(&self) -> f32 {
        self.text_size as f32
    }

    fn request_layout(&mut self) {
        self.invalidation = Invalidation {
            redraw: true,
            layout: true,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BottomLinePaint, DisplayList, DrawOp, Paint, PathSegment};

    /// Metrics proportional to the size, with every glyph half an em wide.
    struct FixedTypeface;

    impl Typeface for FixedTypeface {
        fn font_metrics(&self, size: f32) -> FontMetrics {
            FontMetrics {
                top: -1.25 * size,
                ascent: -size,
                descent: 0.25 * size,
                bottom: 0.5 * size,
                leading: 0.125 * size,
            }
        }

        fn text_bounds(&self, text: &str, size: f32) -> Rect {
            if text.is_empty() {
                return Rect::default();
            }
            let advance = self.measure_text(text, size) as i32;
            Rect::new(2, -(0.75 * size) as i32, advance - 3, (0.25 * size) as i32)
        }

        fn measure_text(&self, text: &str, size: f32) -> f32 {
            text.chars().count() as f32 * size / 2.0
        }

        fn text_path(&self, text: &str, size: f32) -> Vec<PathSegment> {
            let advance = self.measure_text(text, size);
            vec![
                PathSegment::MoveTo { x: 0.0, y: 0.0 },
                PathSegment::LineTo { x: advance, y: 0.0 },
                PathSegment::Close,
            ]
        }
    }

    fn view() -> MetricsOverlayView<FixedTypeface> {
        let mut view = MetricsOverlayView::new(FixedTypeface);
        view.set_text("abcd");
        view.set_text_size_in_pixels(40);
        view.measure(MeasureSpec::exactly(300), MeasureSpec::exactly(120));
        view.take_invalidation();
        view
    }

    fn record(view: &MetricsOverlayView<FixedTypeface>) -> DisplayList {
        let mut list = DisplayList::new();
        view.draw(&mut list);
        list
    }

    fn lines(list: &DisplayList) -> Vec<(f32, f32, f32, f32, Paint)> {
        list.ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line {
                    start_x,
                    start_y,
                    stop_x,
                    stop_y,
                    paint,
                } => Some((*start_x, *start_y, *stop_x, *stop_y, *paint)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn defaults() {
        let view = MetricsOverlayView::new(FixedTypeface);
        assert_eq!(view.text(), DEFAULT_TEXT);
        assert_eq!(view.text_size_in_pixels(), 96);
        assert_eq!(view.measured_size(), Size::default());
        assert!(LineKind::ALL.iter().all(|kind| view.is_line_visible(*kind)));
    }

    #[test]
    fn content_setters_request_layout() {
        let mut view = view();

        view.set_text("xyz");
        assert_eq!(
            view.take_invalidation(),
            Invalidation {
                redraw: true,
                layout: true
            }
        );

        view.set_text_size_in_pixels(12);
        assert_eq!(
            view.take_invalidation(),
            Invalidation {
                redraw: true,
                layout: true
            }
        );
        assert_eq!(view.take_invalidation(), Invalidation::default());
    }

    #[test]
    fn visibility_setters_only_request_redraw() {
        let mut view = view();

        for kind in LineKind::ALL {
            view.set_line_visible(kind, false);
            assert!(!view.is_line_visible(kind));
            assert_eq!(
                view.take_invalidation(),
                Invalidation {
                    redraw: true,
                    layout: false
                }
            );
        }
    }

    #[test]
    fn measure_clears_layout_request() {
        let mut view = view();
        view.set_text("changed");

        let size = view.measure(MeasureSpec::at_most(150), MeasureSpec::UNSPECIFIED);
        assert_eq!(
            size,
            Size {
                width: 150,
                height: 200
            }
        );
        assert_eq!(
            view.take_invalidation(),
            Invalidation {
                redraw: true,
                layout: false
            }
        );
    }

    #[test]
    fn accessors_follow_text_and_size() {
        let mut view = view();
        assert_eq!(view.measured_text_width(), 80.0);
        assert_eq!(view.text_bounds(), Rect::new(2, -30, 77, 10));
        assert_eq!(view.font_metrics().ascent, -40.0);

        view.set_text("ab");
        view.set_text_size_in_pixels(20);
        assert_eq!(view.measured_text_width(), 20.0);
        assert_eq!(view.text_bounds(), Rect::new(2, -15, 17, 5));
        assert_eq!(view.font_metrics().ascent, -20.0);
    }

    #[test]
    fn draws_everything_in_order() {
        let mut view = view();
        view.set_padding(Padding {
            left: 10,
            ..Padding::default()
        });
        let style = *view.style();
        let list = record(&view);
        let ops = list.ops();

        assert_eq!(ops[0], DrawOp::Translate { dx: 0.0, dy: 60.0 });
        match &ops[1] {
            DrawOp::Text {
                text, x, y, paint, ..
            } => {
                assert_eq!(text, "abcd");
                assert_eq!((*x, *y), (10.0, 0.0));
                assert_eq!(paint, &style.text);
            }
            op => panic!("expected text, got {op:?}"),
        }

        let lines = lines(&list);
        assert_eq!(
            lines[..5],
            [
                (0.0, -50.0, 300.0, -50.0, style.top),
                (0.0, -40.0, 300.0, -40.0, style.ascent),
                (0.0, 0.0, 300.0, 0.0, style.baseline),
                (0.0, 10.0, 300.0, 10.0, style.descent),
                (0.0, 20.0, 300.0, 20.0, style.baseline),
            ]
        );

        assert_eq!(
            ops[7],
            DrawOp::Rect {
                left: 12.0,
                top: -30.0,
                right: 87.0,
                bottom: 10.0,
                paint: style.bounds,
            }
        );

        // advance 80, bounds width 75: the gap is split evenly around the bounds
        assert_eq!(
            lines[5..],
            [
                (9.5, -60.0, 9.5, 60.0, style.width),
                (89.5, -60.0, 89.5, 60.0, style.width),
            ]
        );
        assert_eq!(ops.len(), 10);
    }

    #[test]
    fn bottom_line_uses_baseline_paint() {
        let mut view = view();
        for kind in LineKind::ALL {
            view.set_line_visible(kind, kind == LineKind::Bottom);
        }

        let style = *view.style();
        assert_eq!(
            lines(&record(&view)),
            [(0.0, 20.0, 300.0, 20.0, style.baseline)]
        );

        view.set_style(OverlayStyle {
            bottom_line: BottomLinePaint::Own,
            ..style
        });
        assert_eq!(
            lines(&record(&view)),
            [(0.0, 20.0, 300.0, 20.0, style.bottom)]
        );
    }

    #[test]
    fn hidden_overlays_are_not_drawn() {
        let mut view = view();
        for kind in LineKind::ALL {
            view.set_line_visible(kind, false);
        }

        let list = record(&view);
        assert_eq!(list.ops().len(), 2);
        assert!(matches!(list.ops()[1], DrawOp::Text { .. }));
    }

    #[test]
    fn toggling_restores_output() {
        let mut view = view();
        let before = record(&view);

        for kind in LineKind::ALL {
            view.set_line_visible(kind, false);
            assert_ne!(record(&view), before);
            view.set_line_visible(kind, true);
            assert_eq!(record(&view), before);
        }
    }

    #[test]
    fn width_lines_are_one_advance_apart() {
        let mut view = view();
        view.set_text("a much longer line");
        for kind in LineKind::ALL {
            view.set_line_visible(kind, kind == LineKind::Width);
        }

        for left in [0, 7, 33, 250] {
            view.set_padding(Padding {
                left,
                ..Padding::default()
            });
            let lines = lines(&record(&view));
            assert_eq!(lines.len(), 2);
            assert_eq!(lines[1].0 - lines[0].0, view.measured_text_width());
        }
    }

    #[test]
    fn odd_heights_center_on_whole_pixels() {
        let mut view = view();
        view.measure(MeasureSpec::exactly(300), MeasureSpec::exactly(101));

        let list = record(&view);
        assert_eq!(list.ops()[0], DrawOp::Translate { dx: 0.0, dy: 50.0 });

        let width_lines = &lines(&list)[5..];
        assert_eq!((width_lines[0].1, width_lines[0].3), (-50.0, 51.0));
    }

    #[test]
    fn replay_reproduces_display_list() {
        let list = record(&view());
        let mut copy = DisplayList::new();
        list.replay(&mut copy);
        assert_eq!(copy, list);
    }
}
