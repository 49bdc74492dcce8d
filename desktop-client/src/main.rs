mod config;
mod state;
mod ui;

use clap::Parser;
use common::{log, logger};
use eframe::egui;

use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config file.
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::get_config_manager(&args.config)
        .get_config()
        .unwrap_or_else(|e| {
            log!("Failed to load config from {}: {}, using defaults", args.config, e);
            config::Config::default()
        });

    log!("Starting Tic-Tac-Toe ({}x{} window)", config.window.width, config.window.height);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width as f32, config.window.height as f32])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(config)))),
    )?;

    log!("Window closed");
    Ok(())
}
