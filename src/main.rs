use std::path::Path;

use clap::Parser;
use tracing::info;

use emoquiz::cli::Cli;
use emoquiz::content;
use emoquiz::state::AppState;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    // Load content
    let content = match cli.content.as_deref() {
        Some(path) => content::load_content(Path::new(path)).map_err(|e| e.to_string())?,
        None => content::builtin(),
    };

    let country = match cli.country.as_deref() {
        Some(code) => content::find_country(&content, code).map_err(|e| e.to_string())?,
        None => 0,
    };

    // Handle --check
    if cli.check {
        content::print_summary(&content).map_err(|e| e.to_string())?;
        return Ok(());
    }

    let log_path = emoquiz::logging::init(cli.log_file.as_deref())?;
    info!(
        log = %log_path.display(),
        blocks = content.blocks.len(),
        questions = content.total_questions(),
        "starting session"
    );

    let state = AppState::new(content, country);
    emoquiz::tui::run_tui(state)?;

    info!("session closed");
    Ok(())
}
