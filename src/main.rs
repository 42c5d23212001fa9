//! Cog Icon CLI
//!
//! Usage:
//!   cog-icon [OPTIONS] [CONFIG]
//!
//! Options:
//!   -o, --output <FILE>   Write the result to a file instead of stdout
//!   --path-only           Print only the path data
//!   --polygon             Print the tooth-center polygon path data
//!   --precision <N>       Decimal digits in path data (0-15, default 3)
//!   --size, --d1, --d2, --d3, --teeth, --splay, --fill, --gaps, --fill-rule
//!                         Override fields of the config
//!   -h, --help            Print help

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cog_icon::renderer::path::{DEFAULT_PRECISION, MAX_PRECISION};
use cog_icon::{
    generate_with_precision, polygon_path_with_precision, render_with_config, FillRule, GapStyle,
    IconConfig, RenderConfig, SvgConfig,
};

#[derive(Parser)]
#[command(name = "cog-icon")]
#[command(about = "Generate mathematically derived cog icons as SVG")]
struct Cli {
    /// Icon config file (TOML); defaults are used if not provided
    config: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print only the path data, one line per sub-path
    #[arg(long)]
    path_only: bool,

    /// Print the polygon through the tooth centers instead of the cog
    #[arg(long)]
    polygon: bool,

    /// Side of the square icon
    #[arg(long)]
    size: Option<f64>,

    /// Outer diameter ratio
    #[arg(long)]
    d1: Option<f64>,

    /// Middle diameter ratio
    #[arg(long)]
    d2: Option<f64>,

    /// Inner (hole) diameter ratio, 0 for no hole
    #[arg(long)]
    d3: Option<f64>,

    /// Number of teeth
    #[arg(long)]
    teeth: Option<u32>,

    /// Splay angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    splay: Option<f64>,

    /// Fill color token
    #[arg(long)]
    fill: Option<String>,

    /// Gap style between teeth: chord or arc
    #[arg(long)]
    gaps: Option<GapStyle>,

    /// Fill rule: nonzero or evenodd
    #[arg(long)]
    fill_rule: Option<FillRule>,

    /// Decimal digits in path data
    #[arg(long, default_value_t = DEFAULT_PRECISION, value_parser = parse_precision)]
    precision: usize,

    /// Omit the XML declaration
    #[arg(long)]
    no_declaration: bool,

    /// Emit the document on a single line
    #[arg(long)]
    compact: bool,
}

fn parse_precision(s: &str) -> Result<usize, String> {
    let precision: usize = s.parse().map_err(|e| format!("{e}"))?;
    if precision > MAX_PRECISION {
        return Err(format!("must be at most {MAX_PRECISION}"));
    }
    Ok(precision)
}

impl Cli {
    fn apply_overrides(&self, mut icon: IconConfig) -> IconConfig {
        if let Some(size) = self.size {
            icon.size = size;
        }
        if let Some(d1) = self.d1 {
            icon.d1 = d1;
        }
        if let Some(d2) = self.d2 {
            icon.d2 = d2;
        }
        if let Some(d3) = self.d3 {
            icon.d3 = d3;
        }
        if let Some(teeth) = self.teeth {
            icon.teeth = teeth;
        }
        if let Some(splay) = self.splay {
            icon.splay = splay;
        }
        if let Some(fill) = &self.fill {
            icon.fill = fill.clone();
        }
        if let Some(gaps) = self.gaps {
            icon.gaps = gaps;
        }
        if let Some(fill_rule) = self.fill_rule {
            icon.fill_rule = fill_rule;
        }
        icon
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cog_icon=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load config
    let icon = match &cli.config {
        Some(path) => match IconConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => IconConfig::default(),
    };
    let icon = cli.apply_overrides(icon);

    let result = if cli.polygon {
        polygon_path_with_precision(&icon, cli.precision)
    } else if cli.path_only {
        generate_with_precision(&icon, cli.precision).map(|paths| match paths.hole {
            Some(hole) => format!("{}\n{}", paths.outline, hole),
            None => paths.outline,
        })
    } else {
        let svg = SvgConfig::new()
            .with_standalone(!cli.no_declaration)
            .with_pretty_print(!cli.compact)
            .with_precision(cli.precision);
        render_with_config(&RenderConfig::new().with_icon(icon).with_svg(svg))
    };

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {} (field '{}', requires {})", e, e.field(), e.invariant());
            process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{}\n", output)) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                process::exit(1);
            }
            tracing::info!(path = %path.display(), "wrote icon");
        }
        None => println!("{}", output),
    }
}
