use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use font_metrics::{
    ControlSurface, DEFAULT_TEXT, LineKind, MeasureSpec, MetricsOverlayView, OverlayStyle,
    Padding, SvgCanvas, TtfTypeface, config::Config, logging,
};

/// Draw a line of text with its font metrics into an SVG file and print the metrics.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Text to measure.
    #[arg(long, default_value = DEFAULT_TEXT)]
    text: String,

    /// Font size in pixels. Anything that is not a whole number means 96; negative sizes are ignored.
    #[arg(long, default_value = "96", allow_hyphen_values = true)]
    size: String,

    /// TrueType or OpenType font file. Defaults to the bundled DejaVu Sans.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Face to use from a font collection.
    #[arg(long, default_value_t = 0, requires = "font")]
    face_index: u32,

    /// Exact view width in pixels.
    #[arg(long, conflicts_with = "max_width")]
    width: Option<u32>,

    /// Largest view width in pixels.
    #[arg(long)]
    max_width: Option<u32>,

    /// Exact view height in pixels.
    #[arg(long, conflicts_with = "max_height")]
    height: Option<u32>,

    /// Largest view height in pixels.
    #[arg(long)]
    max_height: Option<u32>,

    /// Left padding in pixels.
    #[arg(long)]
    padding: Option<u32>,

    /// Overlay to leave out. May be repeated.
    #[arg(long, value_enum)]
    hide: Vec<Overlay>,

    /// Where to write the SVG.
    #[arg(short, long, default_value = "font_metrics.svg")]
    output: PathBuf,

    /// TOML file with view and style settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Overlay {
    Top,
    Ascent,
    Baseline,
    Descent,
    Bottom,
    Bounds,
    Width,
}

impl From<Overlay> for LineKind {
    fn from(value: Overlay) -> Self {
        match value {
            Overlay::Top => LineKind::Top,
            Overlay::Ascent => LineKind::Ascent,
            Overlay::Baseline => LineKind::Baseline,
            Overlay::Descent => LineKind::Descent,
            Overlay::Bottom => LineKind::Bottom,
            Overlay::Bounds => LineKind::Bounds,
            Overlay::Width => LineKind::Width,
        }
    }
}

/// Command line bounds win over the config file; an exact size beats an upper bound.
fn measure_spec(exact: Option<u32>, at_most: Option<u32>, configured: Option<u32>) -> MeasureSpec {
    match (exact, at_most, configured) {
        (Some(size), _, _) => MeasureSpec::exactly(size),
        (None, Some(size), _) => MeasureSpec::at_most(size),
        (None, None, Some(size)) => MeasureSpec::exactly(size),
        (None, None, None) => MeasureSpec::UNSPECIFIED,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init()?;

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let font_data: Vec<u8>;
    let typeface = match &args.font {
        Some(path) => {
            font_data =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            TtfTypeface::parse(&font_data, args.face_index)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => TtfTypeface::embedded()?,
    };

    let mut view = MetricsOverlayView::new(typeface);
    view.set_style(config.style.apply(OverlayStyle::default()));
    if let Some(left) = args.padding.or(config.view.padding) {
        view.set_padding(Padding {
            left,
            ..Padding::default()
        });
    }

    let mut controls = ControlSurface::new(&view);
    for overlay in &args.hide {
        controls.set_checked((*overlay).into(), false, &mut view);
    }
    controls.set_text_field(args.text);
    controls.set_size_field(args.size);
    controls.press_update(&mut view);

    let invalidation = view.take_invalidation();
    tracing::debug!(?invalidation, "update applied");

    let size = view.measure(
        measure_spec(args.width, args.max_width, config.view.width),
        measure_spec(args.height, args.max_height, config.view.height),
    );
    let mut canvas = SvgCanvas::new(size.width, size.height);
    view.draw(&mut canvas);
    canvas.save(&args.output)?;

    print!("{}", controls.labels());
    tracing::info!(
        path = %args.output.display(),
        width = size.width,
        height = size.height,
        "wrote overlay"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use font_metrics::MeasureMode;

    #[test]
    fn exact_argument_wins() {
        assert_eq!(
            measure_spec(Some(300), None, Some(720)),
            MeasureSpec::exactly(300)
        );
    }

    #[test]
    fn upper_bound_beats_config() {
        assert_eq!(
            measure_spec(None, Some(150), Some(720)),
            MeasureSpec::at_most(150)
        );
    }

    #[test]
    fn config_size_is_exact() {
        assert_eq!(
            measure_spec(None, None, Some(720)),
            MeasureSpec::exactly(720)
        );
        assert_eq!(measure_spec(None, None, None).mode, MeasureMode::Unspecified);
    }

    #[test]
    fn parses_hidden_overlays() {
        let args = Args::try_parse_from([
            "font-metrics",
            "--hide",
            "bottom",
            "--hide",
            "width",
            "--size",
            "abc",
        ])
        .unwrap();

        assert_eq!(args.hide.len(), 2);
        assert_eq!(LineKind::from(args.hide[0]), LineKind::Bottom);
        assert_eq!(args.size, "abc");
        assert_eq!(args.text, DEFAULT_TEXT);
    }

    #[test]
    fn width_and_max_width_conflict() {
        assert!(
            Args::try_parse_from(["font-metrics", "--width", "10", "--max-width", "20"]).is_err()
        );
    }
}
