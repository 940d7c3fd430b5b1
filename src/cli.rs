/*!
plotspec Command Line Interface

Composes chart specifications from the command line: grids of previously
serialized figures, and standalone position adjustments.
*/

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use plotspec::prelude::*;
use plotspec::writer::{JsonWriter, Writer};
use plotspec::{FeatureKind, SubPlotsSpec, VERSION};

#[derive(Parser)]
#[command(name = "plotspec")]
#[command(about = "Compose declarative chart specifications")]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Arrange figure JSON files in a grid
    Grid(GridArgs),

    /// Print a position adjustment specification
    Position(PositionArgs),
}

#[derive(Args)]
pub struct GridArgs {
    /// Figure JSON files, in row order. Use `none` for an empty cell
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of columns (default: all figures in one row)
    #[arg(long)]
    ncol: Option<usize>,

    /// Share x axis limits: all, none, row, col, true or false; other values are passed on
    #[arg(long)]
    sharex: Option<String>,

    /// Share y axis limits: all, none, row, col, true or false; other values are passed on
    #[arg(long)]
    sharey: Option<String>,

    /// Relative column widths, comma separated
    #[arg(long, value_delimiter = ',')]
    widths: Option<Vec<f64>>,

    /// Relative row heights, comma separated
    #[arg(long, value_delimiter = ',')]
    heights: Option<Vec<f64>>,

    /// Horizontal cell spacing in px
    #[arg(long)]
    hspace: Option<f64>,

    /// Vertical cell spacing in px
    #[arg(long)]
    vspace: Option<f64>,

    /// Stretch plots to fill their cells
    #[arg(long)]
    fit: Option<bool>,

    /// Align the inner areas of plots
    #[arg(long)]
    align: Option<bool>,

    /// Theme JSON file used as the global theme
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Indent the output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
pub struct PositionArgs {
    /// identity, dodge, dodgev, jitter, nudge, jitterdodge, stack or fill
    kind: String,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    #[arg(long)]
    x: Option<f64>,

    #[arg(long)]
    y: Option<f64>,

    /// Nudge unit: identity, size or px
    #[arg(long)]
    unit: Option<String>,

    #[arg(long)]
    vjust: Option<f64>,

    /// Stack mode: groups or all
    #[arg(long)]
    mode: Option<String>,

    #[arg(long)]
    seed: Option<i64>,

    #[arg(long)]
    dodge_width: Option<f64>,

    #[arg(long)]
    jitter_width: Option<f64>,

    #[arg(long)]
    jitter_height: Option<f64>,

    /// Indent the output
    #[arg(long)]
    pretty: bool,
}

impl PositionArgs {
    /// Names of the flags given on the command line
    fn supplied(&self) -> Vec<&'static str> {
        let flags = [
            ("width", self.width.is_some()),
            ("height", self.height.is_some()),
            ("x", self.x.is_some()),
            ("y", self.y.is_some()),
            ("unit", self.unit.is_some()),
            ("vjust", self.vjust.is_some()),
            ("mode", self.mode.is_some()),
            ("seed", self.seed.is_some()),
            ("dodge-width", self.dodge_width.is_some()),
            ("jitter-width", self.jitter_width.is_some()),
            ("jitter-height", self.jitter_height.is_some()),
        ];
        flags
            .into_iter()
            .filter_map(|(name, given)| given.then_some(name))
            .collect()
    }
}

fn parse_share(value: &str) -> Share {
    match value {
        "true" => Share::from(true),
        "false" => Share::from(false),
        other => Share::from(other),
    }
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn load_figure(path: &Path) -> anyhow::Result<Option<Figure>> {
    if path.as_os_str() == "none" {
        return Ok(None);
    }
    let value = read_json(path)?;
    let figure =
        Figure::from_value(value).with_context(|| format!("Invalid figure in {}", path.display()))?;
    Ok(Some(figure))
}

fn build_grid(args: &GridArgs) -> anyhow::Result<SubPlotsSpec> {
    let figures = args
        .files
        .iter()
        .map(|path| load_figure(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let settings = match &args.theme {
        Some(path) => {
            let theme = FeatureSpec::from_value(FeatureKind::Theme, read_json(path)?)?;
            Settings::new().with_theme(theme)?
        }
        None => Settings::current(),
    };

    let options = GridOptions {
        sharex: args.sharex.as_deref().map(parse_share),
        sharey: args.sharey.as_deref().map(parse_share),
        widths: args.widths.clone(),
        heights: args.heights.clone(),
        hspace: args.hspace,
        vspace: args.vspace,
        fit: args.fit,
        align: args.align,
    };

    info!(figures = figures.len(), ncol = ?args.ncol, "Building grid");
    Ok(settings.gggrid(figures, args.ncol, options)?)
}

fn build_position(args: &PositionArgs) -> anyhow::Result<FeatureSpec> {
    let kind: PositionKind = args.kind.parse()?;
    let allowed: &[&str] = match kind {
        PositionKind::Identity => &[],
        PositionKind::Dodge => &["width"],
        PositionKind::DodgeV => &["height"],
        PositionKind::Jitter => &["width", "height", "seed"],
        PositionKind::Nudge => &["x", "y", "unit"],
        PositionKind::JitterDodge => &["dodge-width", "jitter-width", "jitter-height", "seed"],
        PositionKind::Stack | PositionKind::Fill => &["vjust", "mode"],
    };
    if let Some(flag) = args.supplied().into_iter().find(|f| !allowed.contains(f)) {
        bail!("--{} is not valid for position '{}'", flag, kind);
    }

    let spec = match kind {
        PositionKind::Identity => FeatureSpec::new(FeatureKind::Pos, Some(kind.name())),
        PositionKind::Dodge => {
            let mut pos = position_dodge();
            if let Some(width) = args.width {
                pos = pos.width(width);
            }
            pos.build()?
        }
        PositionKind::DodgeV => {
            #[allow(deprecated)]
            let mut pos = position_dodgev();
            if let Some(height) = args.height {
                pos = pos.height(height);
            }
            pos.build()?
        }
        PositionKind::Jitter => {
            let mut pos = position_jitter();
            if let Some(width) = args.width {
                pos = pos.width(width);
            }
            if let Some(height) = args.height {
                pos = pos.height(height);
            }
            if let Some(seed) = args.seed {
                pos = pos.seed(seed);
            }
            pos.build()?
        }
        PositionKind::Nudge => {
            let mut pos = position_nudge();
            if let Some(x) = args.x {
                pos = pos.x(x);
            }
            if let Some(y) = args.y {
                pos = pos.y(y);
            }
            if let Some(unit) = &args.unit {
                pos = pos.unit(unit.parse()?);
            }
            pos.build()?
        }
        PositionKind::JitterDodge => {
            let mut pos = position_jitterdodge();
            if let Some(width) = args.dodge_width {
                pos = pos.dodge_width(width);
            }
            if let Some(width) = args.jitter_width {
                pos = pos.jitter_width(width);
            }
            if let Some(height) = args.jitter_height {
                pos = pos.jitter_height(height);
            }
            if let Some(seed) = args.seed {
                pos = pos.seed(seed);
            }
            pos.build()?
        }
        PositionKind::Stack | PositionKind::Fill => {
            let mut pos = if kind == PositionKind::Stack {
                position_stack()
            } else {
                position_fill()
            };
            if let Some(vjust) = args.vjust {
                pos = pos.vjust(vjust);
            }
            if let Some(mode) = &args.mode {
                pos = pos.mode(mode.parse()?);
            }
            pos.build()?
        }
    };
    Ok(spec)
}

fn emit(text: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            info!(path = %path.display(), "Specification written");
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("PLOTSPEC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Grid(args) => {
            let grid = build_grid(&args)?;
            let text = JsonWriter::new().pretty(args.pretty).write(&grid.into())?;
            emit(&text, args.output.as_deref())?;
        }
        Commands::Position(args) => {
            let spec = build_position(&args)?;
            let text = if args.pretty {
                serde_json::to_string_pretty(&spec)?
            } else {
                serde_json::to_string(&spec)?
            };
            emit(&text, None)?;
        }
    }

    Ok(())
}
