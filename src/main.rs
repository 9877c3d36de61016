//! Cram GUI
//!
//! A graphical interface for playing Cram against the computer or another
//! player.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use cram::config::{init_tracing, AppConfig, ModeKind};
use cram::ui::CramApp;
use cram::Match;

/// Config file read when `--config` is not given
const DEFAULT_CONFIG_PATH: &str = "cram.toml";

#[derive(Parser, Debug)]
#[command(name = "cram", about = "Play Cram, the domino-tiling game")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side (even)
    #[arg(long)]
    size: Option<usize>,

    /// Computer search depth
    #[arg(long)]
    depth: Option<u32>,

    #[arg(long, value_enum)]
    mode: Option<ModeKind>,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(size) = self.size {
            config.game.board_size = size;
        }
        if let Some(depth) = self.depth {
            config.game.difficulty = depth;
        }
        if let Some(mode) = self.mode {
            config.game.mode = mode;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // An explicit path must exist; the default one is optional
    let path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let found = args.config.is_some() || path.exists();
    let mut config = if found {
        AppConfig::load(&path)?
    } else {
        AppConfig::default()
    };
    args.apply(&mut config);
    config.validate()?;

    init_tracing(&config.log_filter);
    if !found {
        warn!(path = %path.display(), "config file not found, using defaults");
    }
    info!(?config, "starting cram");

    let session = Match::new(config.game.board_size, config.mode())?;
    let app = CramApp::new(session, config.poll_interval());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([600.0, 450.0])
            .with_title("Cram"),
        ..Default::default()
    };

    eframe::run_native("Cram", options, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}
