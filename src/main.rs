use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use umg::config::GameConfig;
use umg::engine::Engine;
use umg::game::Platformer;

#[derive(Parser, Debug)]
#[command(author, version, about = "Portrait touch platformer with in-game chat", long_about = None)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the debug overlay
    #[arg(long)]
    debug: bool,

    /// Fixed simulation rate in updates per second
    #[arg(long)]
    ups: Option<u32>,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            info!("no config file given, using defaults");
            GameConfig::default()
        }
    };
    if args.debug {
        config.debug = true;
    }
    if let Some(ups) = args.ups {
        config.target_ups = ups;
    }
    config.validate().context("invalid configuration")?;

    let game = Platformer::new(&config);
    Engine::builder()
        .with_config(config)
        .run(game)
        .context("engine stopped with an error")?;

    Ok(())
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
