use clap::Parser;
use gmesim::{App, config, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gmesim")]
#[command(about = "A terminal-based GME finance scenario simulator")]
struct Args {
    /// Path to the data directory (default: ~/.gmesim/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Optional YAML file overriding the built-in baseline assumptions
    #[arg(short, long)]
    assumptions: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gmesim")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let assumptions = config::load_or_default(args.assumptions.as_deref());
    let mut app = App::new(assumptions);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
