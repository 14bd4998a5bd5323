//! CLI frontend for Fortune Cow.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use fc_core::FortuneConfig;
use fc_render::{Face, RenderConfig};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fcow",
    about = "Fortune Cow: a greeting and a fortune from an ASCII-art friend",
    version
)]
struct Cli {
    /// Only draw fortunes from this category (case-insensitive)
    category: Option<String>,

    /// List the available categories
    #[arg(short, long)]
    list: bool,

    /// Count fortunes per category
    #[arg(short, long)]
    count: bool,

    /// Fortune document to load (default: $FCOW_FORTUNES, then the built-in fortunes)
    #[arg(short, long)]
    fortunes: Option<PathBuf>,

    /// Character to draw: tux, cow
    #[arg(long, default_value = "tux", value_parser = parse_face)]
    face: Face,

    /// RNG seed for a reproducible draw
    #[arg(short, long)]
    seed: Option<u64>,

    /// Greet as if it were this hour (0-23)
    #[arg(long)]
    hour: Option<u32>,

    /// Wrap the speech bubble at this many columns
    #[arg(short, long, default_value = "40")]
    width: usize,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_face(s: &str) -> Result<Face, String> {
    s.parse().map_err(|e: fc_render::UnknownFace| e.to_string())
}

impl Cli {
    fn fortune_config(&self) -> FortuneConfig {
        let mut config = FortuneConfig::from_env();
        if let Some(path) = &self.fortunes {
            config = config.with_fortunes(path.clone());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(hour) = self.hour {
            config = config.with_hour(hour);
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.fortune_config();
    debug!(?config, "resolved configuration");

    let result = if cli.list {
        if cli.count {
            debug!("--list given, ignoring --count");
        }
        commands::list::run(&config)
    } else if cli.count {
        commands::count::run(&config)
    } else {
        let render = RenderConfig::default().with_width(cli.width);
        commands::tell::run(&config, cli.category.as_deref(), cli.face, &render)
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
