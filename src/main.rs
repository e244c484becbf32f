mod app;
mod counter;
mod domain;
mod history;
mod input;
mod notifications;
mod persistence;
mod queue;
mod session;
mod ticker;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use history::HistoryLedger;
use persistence::{ensure_storage_dir, init_local_storage, KvStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "focusq")]
#[command(about = "A terminal-based focus session manager with a prioritized task queue", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .focusq directory in the current directory
    Init,
    /// Export the session history as CSV
    Export {
        /// Output file path. Defaults to session_history-<timestamp>.csv
        /// inside the storage directory.
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let storage_dir = init_local_storage()?;
            println!("Initialized focusq directory: {}", storage_dir.display());
            println!();
            println!("focusq will now use this local directory for storage.");
            println!("Run 'focusq' to start queueing focus tasks.");
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let storage_dir = ensure_storage_dir()?;
            let ledger = HistoryLedger::load(KvStore::new(&storage_dir));

            if ledger.is_empty() {
                println!("No session history to export.");
                return Ok(());
            }

            if let Some(path) = output {
                persistence::atomic_write(&path, &ledger.to_csv())?;
                println!("History exported: {}", path);
            } else {
                let path = ledger.export_csv(&storage_dir)?;
                println!("History exported: {}", path.display());
            }
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    // Ensure the storage directory exists and show which one we're using
    let storage_dir = ensure_storage_dir()?;
    eprintln!("Using focusq directory: {}", storage_dir.display());

    let mut app = AppState::new(KvStore::new(&storage_dir));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Pause any running countdown and persist remaining time, so a
    // mid-session quit can resume next run
    app.flush();

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Advance the countdown by whole elapsed seconds
        app.tick();
    }
}
