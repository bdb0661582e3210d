mod audit;
mod history;
mod import;
mod models;
mod run;
mod ui;

use anyhow::{Context, Result};
use std::path::Path;

fn main() -> Result<()> {
    let data_dir = get_data_dir()?;
    init_logging(&data_dir);
    let mut history = history::HistoryStore::open(data_dir.join("history.json"));

    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        0 | 1 => run::as_tui(&mut history),
        _ => run::as_cli(&args, &mut history),
    }
}

fn get_data_dir() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "volatui", "VolaTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}

/// Events go to a file: the TUI owns the terminal, so stderr is not an
/// option while it is running. `RUST_LOG` controls verbosity.
fn init_logging(data_dir: &Path) {
    let Ok(file) = std::fs::File::create(data_dir.join("vola.log")) else {
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
