use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use texc::app::Editor;
use texc::config::Config;
use texc::model::filesystem::StdFileSystem;
use texc::services::tracing_setup;

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "texc")]
#[command(about = "A small terminal text editor with incremental search", long_about = None)]
#[command(version)]
struct Args {
    /// File to open; created on first save if it does not exist
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn run(editor: &mut Editor, terminal: &mut DefaultTerminal) -> AnyhowResult<()> {
    while !editor.should_quit() {
        terminal
            .draw(|frame| editor.render(frame))
            .context("Failed to draw frame")?;

        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => editor.handle_key_event(key),
            Event::Resize(width, height) => editor.resize(width, height),
            _ => {}
        }
    }
    Ok(())
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        let config = load_config(&args)?;
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(tracing_setup::default_log_path);
    tracing_setup::init_global(&log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
    tracing::info!("Editor starting");

    let config = load_config(&args)?;

    let mut terminal = ratatui::try_init().context("Failed to initialize terminal")?;
    let result = (|| -> AnyhowResult<()> {
        let size = terminal.size().context("Failed to query terminal size")?;
        tracing::info!("Terminal size: {}x{}", size.width, size.height);

        let mut editor = Editor::new(config, size.width, size.height, Box::new(StdFileSystem));
        if let Some(path) = &args.file {
            editor
                .open_file(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
        }
        editor.set_status_message("HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find".to_string());

        run(&mut editor, &mut terminal)
    })();
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!("Editor exited with error: {:#}", e);
    } else {
        tracing::info!("Editor exiting");
    }
    result
}
