//! Indie Quest - a gamified survey that runs in the terminal.
//!
//! Eight screens: intro, screening, character creation, four Likert
//! levels and the completion screen. All survey state lives in
//! `quest_core::FormSession`; this binary owns the terminal and the
//! event loop.

mod app;
mod ui;

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::app::{App, WizardError};

fn main() -> anyhow::Result<()> {
    let mut terminal = setup_terminal()?;
    let result = App::default().run(&mut terminal);
    restore_terminal(&mut terminal)?;

    match result {
        Ok(()) => Ok(()),
        Err(WizardError::Cancelled) => {
            println!("Quest abandoned.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}
