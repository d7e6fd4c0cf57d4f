//! Recipe SVG CLI
//!
//! Usage:
//!   recipe-svg <SCREEN> <OUTPUT> [FONT]
//!
//! Options:
//!   --compact      Write the SVG without indentation
//!   -v, --verbose  Log pipeline steps to stderr
//!   -h, --help     Print help

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use recipe_svg::pipeline::DEFAULT_FONT_FILE;
use recipe_svg::{render_file, RenderConfig, SvgConfig};

#[derive(Parser)]
#[command(name = "recipe-svg")]
#[command(about = "Render a UI recipe screen to a self-contained SVG")]
struct Cli {
    /// Screen document, e.g. screens/main.portrait.yaml
    screen: PathBuf,

    /// Output SVG file (parent directories are created)
    output: PathBuf,

    /// Icon font to embed [default: material-symbols-outlined.woff2 next to the executable]
    font: Option<PathBuf>,

    /// Write the SVG without indentation
    #[arg(long)]
    compact: bool,

    /// Log pipeline steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    init_tracing(cli.verbose);

    let font = cli.font.clone().unwrap_or_else(default_font_path);
    if !font.is_file() {
        eprintln!("Missing font file: {}", font.display());
        process::exit(2);
    }

    let config =
        RenderConfig::new().with_svg(SvgConfig::default().with_pretty_print(!cli.compact));
    if let Err(e) = render_file(&cli.screen, &cli.output, &font, &config) {
        eprintln!("Error: {}", e.format());
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_font_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_FONT_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_FILE))
}
