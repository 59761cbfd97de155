use std::fs::{self, File};
use std::io::BufReader;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};

use pathplot::backend::SvgBackend;
use pathplot::element::{Extent, LegendContext, Point};
use pathplot::renderer::{self, PathRenderer};
use pathplot::style::{DashPattern, Theme};
use pathplot::RendererConfig;

/// Offset of the legend row from the top-left corner
const LEGEND_MARGIN: f64 = 12.0;
/// Gap between the legend sample and its label
const LEGEND_LABEL_GAP: f64 = 6.0;

#[derive(Parser)]
#[command(name = "pathplot")]
#[command(
    about = "Render a pixel-space path to SVG",
    long_about = "Clips a path against the drawing area, strokes it with the configured style and writes an SVG including the series' legend entry."
)]
struct Cli {
    /// JSON file with the path as an array of [x, y] pairs in pixel coordinates.
    points: String,
    /// Output SVG file.
    #[arg(short, long, required = true)]
    out: String,
    /// Width of the drawing area in pixels.
    #[arg(long, default_value_t = 400.0)]
    width: f64,
    /// Height of the drawing area in pixels.
    #[arg(long, default_value_t = 300.0)]
    height: f64,
    /// Renderer configuration JSON (stroke_width, color, dash, label_*). Overrides the theme.
    #[arg(long)]
    config: Option<String>,
    /// Theme to take defaults from (default, dark, minimal, seaborn, high-contrast).
    #[arg(long, default_value = "default")]
    theme: String,
    /// Series index used to pick the color from the theme palette.
    #[arg(long, default_value_t = 0)]
    series: usize,
    /// Matplotlib-style line style ("-", "--", "-.", ":").
    #[arg(long, allow_hyphen_values = true)]
    linestyle: Option<String>,
    /// Legend label. Without one the series has no legend entry.
    #[arg(long)]
    label: Option<String>,
    /// Close the path back to its first point.
    #[arg(long)]
    closed: bool,
    /// Log verbosity level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long)]
    append_log: bool,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            File::options().create(true).append(true).open(path)
        } else {
            File::create(path)
        }
        .with_context(|| format!("Could not open log file '{}'", path))?;
        log_builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    log_builder.init();
    Ok(())
}

fn read_points(path: &str) -> Result<Vec<Point>> {
    let file = File::open(path).with_context(|| format!("Failed to open points file {}", path))?;
    let points: Vec<Point> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse points file {}", path))?;

    let non_finite = points.iter().filter(|p| !p.is_finite()).count();
    if non_finite > 0 {
        warn!(
            "{} of {} points are not finite; the path will have gaps",
            non_finite,
            points.len()
        );
    }
    Ok(points)
}

fn resolve_config(cli: &Cli) -> Result<RendererConfig> {
    let mut config = match cli.config {
        Some(ref path) => RendererConfig::load(path)
            .with_context(|| format!("Failed to load renderer config {}", path))?,
        None => {
            let Some(theme) = Theme::from_name(&cli.theme) else {
                bail!("Unknown theme '{}'", cli.theme);
            };
            RendererConfig::from_theme(&theme.config(), cli.series)
        }
    };

    if let Some(ref style) = cli.linestyle {
        match DashPattern::from_format_str(style) {
            Some(dash) => config.dash = dash,
            None => bail!("Unknown line style '{}'", style),
        }
    }
    Ok(config)
}

fn build_renderer(cli: &Cli, config: &RendererConfig) -> Result<Box<dyn PathRenderer<Point>>> {
    let base = match cli.label {
        Some(ref label) => renderer::named(label.clone(), config)?,
        None => renderer::default(config, None)?,
    };
    Ok(if cli.closed {
        Box::new(renderer::closed(base))
    } else {
        Box::new(base)
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let points = read_points(&cli.points)?;
    let config = resolve_config(&cli)?;
    debug!("Renderer config: {:?}", config);
    let renderer = build_renderer(&cli, &config)?;

    let extent = Extent::new(cli.width, cli.height);
    let drawable = renderer.render(&extent, &points);
    if drawable.is_empty() {
        warn!(
            "No part of the path is visible in {}x{}",
            extent.width(),
            extent.height()
        );
    }

    let theme = Theme::from_name(&cli.theme).unwrap_or_default().config();
    let mut backend = SvgBackend::for_extent(&extent);
    backend.fill_background(&theme.background);
    backend.draw(&drawable);

    if let LegendContext::Entry { sample, label } = renderer.legend_context() {
        let sample_length = sample
            .strokes()
            .first()
            .and_then(|s| s.points.last())
            .map_or(0.0, |p| p.x);
        backend.draw_at(&sample, LEGEND_MARGIN, LEGEND_MARGIN);
        backend.draw_at(
            &label,
            LEGEND_MARGIN + sample_length + LEGEND_LABEL_GAP,
            LEGEND_MARGIN,
        );
    }

    fs::write(&cli.out, backend.render())
        .with_context(|| format!("Failed to write {}", cli.out))?;
    info!(
        "Wrote {} ({} strokes from {} points)",
        cli.out,
        drawable.strokes().len(),
        points.len()
    );
    Ok(())
}
