//! Guestbook - Entry Point

use clap::Parser;
use guestbook::model::FilterField;
use guestbook::state::{AppState, FormState};
use std::path::PathBuf;
use tracing::info;

/// Guestbook - TUI for collecting and filtering contact entries
#[derive(Parser, Debug)]
#[command(name = "guestbook")]
#[command(version)]
#[command(about = "TUI guestbook: submit name/email/message entries and filter them live")]
pub struct Args {
    /// Start with a search term applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Field the search term is matched against (name, email, message)
    #[arg(short, long)]
    pub filter_field: Option<FilterField>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = guestbook::config::load_config_with_precedence(args.config.clone())?;
        let merged = guestbook::config::merge_config(config_file);
        let with_env = guestbook::config::apply_env_overrides(merged);
        guestbook::config::apply_cli_overrides(with_env, args.filter_field)
    };

    // Initialize tracing with the configured log file path
    guestbook::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // Build the initial state: empty store with the resolved filter
    // field, plus any startup search term from the CLI.
    let form = FormState::with_filter_field(config.filter_field);
    let mut app_state = AppState::with_form(form);
    if let Some(term) = &args.search {
        app_state.apply_filter(term, config.filter_field);
    }

    guestbook::view::run(app_state, args.no_color)?;

    Ok(())
}
