// File: crates/netplot/src/main.rs
// Summary: Renders a network-growth log (index, size, sections[, complete]) to a 1920x1080 PNG.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use netplot_core::{render_with, ChartSpec, RenderOptions, Theme};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Plot network size and number of sections from a simulation log")]
struct Cli {
    /// Whitespace-delimited data file (a .csv extension reads comma-delimited).
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// PNG to write; overwritten if present. Its directory must exist.
    #[arg(value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Also plot complete sections from column 4 on the right axis.
    #[arg(long, action = ArgAction::SetTrue)]
    complete: bool,

    /// Color preset.
    #[arg(long, value_enum, default_value_t = ThemeOpt::Light)]
    theme: ThemeOpt,

    /// Title drawn above the plot.
    #[arg(long)]
    title: Option<String>,

    /// Log debug details.
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, action = ArgAction::SetTrue)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeOpt {
    Light,
    Dark,
}

impl From<ThemeOpt> for Theme {
    fn from(opt: ThemeOpt) -> Self {
        match opt {
            ThemeOpt::Light => Theme::light(),
            ThemeOpt::Dark => Theme::dark(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut spec = ChartSpec::network_growth();
    if cli.complete {
        spec = spec.with_complete_sections();
    }
    if let Some(title) = cli.title {
        spec = spec.with_title(title);
    }
    let opts = RenderOptions { theme: cli.theme.into(), ..RenderOptions::default() };

    let report = render_with(&cli.input, &cli.output, &spec, &opts).with_context(|| {
        format!("failed to plot '{}' to '{}'", cli.input.display(), cli.output.display())
    })?;

    for s in &report.series {
        info!(series = %s.label, points = s.points, skipped = s.skipped_lines.len(), "series");
    }
    Ok(())
}
