mod config;
mod ui;

use clap::{Parser, ValueEnum};
use common::games::SessionRng;
use common::games::tictactoe::{GameMode, TurnController};
use common::{log, logger};
use eframe::egui;
use std::path::PathBuf;

use config::{get_config_manager, Config};
use ui::TicTacToeApp;

const WINDOW_TITLE: &str = "Tic Tac Toe";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Human,
    Computer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Human => GameMode::HumanVsHuman,
            ModeArg::Computer => GameMode::HumanVsComputer,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_desktop")]
struct Args {
    /// Starting mode, overrides the config file.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Fixed seed for the computer's moves.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let config = config_manager.get_config().unwrap_or_else(|e| {
        log!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let mode = args.mode.map(GameMode::from).unwrap_or(config.start_mode);
    let rng = SessionRng::from_seed_or_random(args.seed.or(config.seed));

    let controller = TurnController::new(mode, rng);
    log!("Starting {:?} game with seed {}", mode, controller.seed());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    let remember_mode = config.remember_mode;
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(TicTacToeApp::new(
                controller,
                config_manager,
                remember_mode,
            )))
        }),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_mode_and_seed() {
        let args = Args::parse_from(["tictactoe_desktop", "--mode", "computer", "--seed", "17"]);
        assert_eq!(args.mode.map(GameMode::from), Some(GameMode::HumanVsComputer));
        assert_eq!(args.seed, Some(17));
        assert!(!args.use_log_prefix);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_default_to_config() {
        let args = Args::parse_from(["tictactoe_desktop"]);
        assert!(args.mode.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_args_reject_unknown_mode() {
        assert!(Args::try_parse_from(["tictactoe_desktop", "--mode", "robot"]).is_err());
    }
}
