//! shortlist - terminal manager for password-gated job listings and CV uploads.
//!
//! Companies unlock with a (plaintext, placeholder) password, each company
//! lists its jobs, and each job keeps an ordered list of uploaded CV files.
//! The upload lists persist as JSON in the user data directory.

use std::io::{self, stdout};
use std::path::PathBuf;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

mod app;
mod catalog;
mod error;
mod picker;
mod state;
mod store;
mod ui;

use app::App;
use catalog::Catalog;
use store::{UploadStore, paths};

fn main() -> io::Result<()> {
    // Read the durable slot once, before the terminal takes over. Corrupt
    // or missing data falls back to an empty store and only warns.
    let (store, load_warning) = match paths::uploads_path() {
        Ok(path) => UploadStore::load(path),
        Err(err) => (
            UploadStore::in_memory(),
            Some(format!("{err}; uploads will not be saved")),
        ),
    };

    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut app = App::new(Catalog::builtin(), store, working_dir);
    if let Some(warning) = load_warning {
        app.console.log_warn(warning);
    }

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    result
}
