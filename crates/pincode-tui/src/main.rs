//! Pincode demo - choose, confirm and enter a PIN in the terminal

use std::io;
use std::panic;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pincode_tui::app::DemoConfig;
use pincode_tui::App;

/// Numeric PIN pad demo
#[derive(Parser, Debug)]
#[command(name = "pincode-demo", version, about)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Digits per PIN
    #[arg(short, long)]
    length: Option<usize>,

    /// Simulated verification delay in milliseconds
    #[arg(long)]
    verify_latency_ms: Option<u64>,

    /// Use the high-contrast palette
    #[arg(long)]
    high_contrast: bool,

    /// Write the effective configuration and exit
    #[arg(long)]
    write_config: bool,
}

/// Application entry point with panic handling for terminal restoration
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout belongs to the terminal UI
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("pincode_tui=info".parse()?))
        .init();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load_from(path),
        None => DemoConfig::load(),
    };
    if let Some(length) = cli.length {
        config.password_length = length;
    }
    if let Some(latency) = cli.verify_latency_ms {
        config.verify_latency_ms = latency;
    }
    config.high_contrast |= cli.high_contrast;
    config.validate()?;

    if cli.write_config {
        let path = match &cli.config {
            Some(path) => {
                config.save_to(path)?;
                path.clone()
            }
            None => config.save()?,
        };
        println!("Wrote {}", path.display());
        return Ok(());
    }

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_app(config).await;

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

/// Main application runner
async fn run_app(config: DemoConfig) -> Result<()> {
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
