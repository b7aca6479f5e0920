use font_metrics::{
    Canvas, LineKind, MeasureSpec, MetricsOverlayView, Padding, SvgCanvas, TtfTypeface,
};

/// Height of each row, in pixels.
const ROW_HEIGHT: u32 = 200;
const WIDTH: u32 = 720;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sizes = [24, 48, 72, 96, 128];

    let mut canvas = SvgCanvas::new(WIDTH, ROW_HEIGHT * sizes.len() as u32);

    for (row, size) in sizes.into_iter().enumerate() {
        let mut view = MetricsOverlayView::new(TtfTypeface::embedded()?);
        view.set_text(format!("Hamburgefonts {size}px"));
        view.set_text_size_in_pixels(size);
        view.set_padding(Padding {
            left: 16,
            ..Padding::default()
        });
        view.set_line_visible(LineKind::Width, row % 2 == 0);
        view.measure(
            MeasureSpec::exactly(WIDTH),
            MeasureSpec::exactly(ROW_HEIGHT),
        );

        view.draw(&mut canvas);

        // the view moved the origin to the middle of its row; move on to the next row
        canvas.translate(0.0, (ROW_HEIGHT - ROW_HEIGHT / 2) as f32);
    }

    canvas.save("font_metrics_sizes.svg")?;
    println!("Wrote font_metrics_sizes.svg");

    Ok(())
}
