use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use taskboard::board::{sample::sample_tasks, Dashboard};
use taskboard::config::Config;
use taskboard::logger::Logger;
use taskboard::theme::{
    system_prefers_dark, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemePreference,
};
use taskboard::ui::{run_app, AppComponent};

#[derive(Parser)]
#[command(name = "taskboard", version, about = "Kanban task dashboard for the terminal")]
struct Cli {
    /// Path to a config file (default: ./taskboard.toml, then the XDG config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default config file and exit (default: the XDG config path)
    #[arg(long, value_name = "PATH")]
    generate_config: Option<Option<PathBuf>>,

    /// Keep the theme preference in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Start with an empty board instead of the demo tasks
    #[arg(long)]
    empty: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.init()?;
    if let Some(path) = logger.log_file_path() {
        log::info!("Logging to {}", path.display());
    }

    let store: Box<dyn PreferenceStore + Send> = if cli.ephemeral {
        Box::new(MemoryPreferenceStore::new())
    } else {
        let path = config
            .preferences_path()
            .context("Failed to locate the preferences file")?;
        Box::new(FilePreferenceStore::new(path))
    };
    let theme = ThemePreference::initialize(store, system_prefers_dark());

    let tasks = if cli.empty || !config.board.sample_data {
        Vec::new()
    } else {
        sample_tasks()
    };
    let dashboard = Dashboard::with_tasks(tasks);

    let app = AppComponent::new(dashboard, theme, logger, &config);
    run_app(app, config.ui.mouse_enabled).await
}
