//! Event loop and key handling for the quest wizard.
//!
//! The session controller owns all survey state; the app adds only the
//! interaction state a terminal needs (which card the cursor sits on)
//! and translates key presses into session operations.

use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use quest_core::{
    AgeBand, Country, FormSession, Platform, Playtime, ProfileChoice, Rating, Screen,
    ScreeningField, YesNo,
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use thiserror::Error;

use crate::ui::{self, Theme};

/// How often the loop wakes up to expire transient signals.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Error type for the quest wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    /// User abandoned the quest (pressed Esc mid-run).
    #[error("Quest cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The running wizard: session state plus the cursor.
#[derive(Debug, Default)]
pub struct App {
    pub session: FormSession,
    pub theme: Theme,
    focus: usize,
    cancelled: bool,
}

impl App {
    /// Index of the focused card on the current screen.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Number of focusable cards on the current screen.
    pub fn card_count(&self) -> usize {
        match self.session.screen() {
            Screen::Screening => 2,
            Screen::Profile => 4,
            Screen::Level1 | Screen::Level2 | Screen::Level3 | Screen::FinalBoss => {
                quest_core::QUESTIONS_PER_BLOCK
            }
            Screen::Intro | Screen::Complete => 0,
        }
    }

    /// Drive the wizard until the player quits.
    pub fn run(
        mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), WizardError> {
        loop {
            self.session.tick(Instant::now());
            terminal.draw(|frame| ui::draw(frame, &self))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if self.handle_key(key.code) {
                    break;
                }
            }
        }

        if self.cancelled {
            return Err(WizardError::Cancelled);
        }
        Ok(())
    }

    /// Apply one key press. Returns true when the loop should stop.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        let screen = self.session.screen();
        match code {
            KeyCode::Esc => {
                // Leaving from the completion screen is a normal finish.
                self.cancelled = screen != Screen::Complete;
                return true;
            }
            KeyCode::Enter => {
                if screen == Screen::Complete {
                    // The submit seam: a persistence layer would take the
                    // answers here. The session restarts either way.
                    let _answers = self.session.submit();
                } else {
                    self.session.advance(Instant::now());
                }
                if self.session.screen() != screen {
                    self.focus = 0;
                }
            }
            KeyCode::Backspace => {
                // Back control is only offered while the footer pair is
                // visible, between intro and completion.
                if screen != Screen::Intro && screen != Screen::Complete {
                    self.session.retreat();
                    self.focus = 0;
                }
            }
            KeyCode::Up => {
                self.focus = self.focus.saturating_sub(1);
            }
            KeyCode::Down => {
                let last = self.card_count().saturating_sub(1);
                if self.focus < last {
                    self.focus += 1;
                }
            }
            KeyCode::Left => self.choose(-1),
            KeyCode::Right => self.choose(1),
            KeyCode::Char(c) => self.handle_char(c),
            _ => {}
        }
        false
    }

    /// Left/right on the focused card: pick yes/no, cycle a profile
    /// option, or nudge a rating.
    fn choose(&mut self, step: isize) {
        match self.session.screen() {
            Screen::Screening => {
                // Left picks YES, right picks NO, matching the two-column
                // button layout.
                let value = if step < 0 { YesNo::Yes } else { YesNo::No };
                self.session.set_screening(self.focused_screening_field(), value);
            }
            Screen::Profile => {
                let profile = self.session.answers().profile;
                let choice = match self.focus {
                    0 => ProfileChoice::Country(cycle(&Country::ALL, profile.country, step)),
                    1 => ProfileChoice::Age(cycle(&AgeBand::ALL, profile.age, step)),
                    2 => ProfileChoice::Platform(cycle(&Platform::ALL, profile.platform, step)),
                    _ => ProfileChoice::Playtime(cycle(&Playtime::ALL, profile.playtime, step)),
                };
                self.session.set_profile(choice);
            }
            screen => {
                if let Some(block) = screen.block() {
                    let current = self
                        .session
                        .answers()
                        .block(block)
                        .get(self.focus)
                        .map_or(0, Rating::value);
                    let nudged = (isize::from(current) + step).clamp(1, 5) as u8;
                    if let Ok(rating) = Rating::try_from(nudged) {
                        self.session.set_rating(block, self.focus, rating);
                    }
                }
            }
        }
    }

    fn handle_char(&mut self, c: char) {
        match self.session.screen() {
            Screen::Screening => match c {
                'y' | 'Y' => {
                    self.session
                        .set_screening(self.focused_screening_field(), YesNo::Yes);
                }
                'n' | 'N' => {
                    self.session
                        .set_screening(self.focused_screening_field(), YesNo::No);
                }
                _ => {}
            },
            screen => {
                if let Some(block) = screen.block()
                    && let Some(digit) = c.to_digit(10)
                    && let Ok(rating) = Rating::try_from(digit as u8)
                {
                    self.session.set_rating(block, self.focus, rating);
                }
            }
        }
    }

    fn focused_screening_field(&self) -> ScreeningField {
        if self.focus == 0 {
            ScreeningField::PlayedIndie
        } else {
            ScreeningField::ActiveGamer
        }
    }
}

/// Step through an option table, wrapping at both ends. With nothing
/// selected yet, stepping right starts at the first option and stepping
/// left at the last.
fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>, step: isize) -> T {
    match current.and_then(|value| options.iter().position(|option| *option == value)) {
        Some(index) => {
            let len = options.len() as isize;
            options[(index as isize + step).rem_euclid(len) as usize]
        }
        None if step < 0 => options[options.len() - 1],
        None => options[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_types() {
        let err = WizardError::Cancelled;
        assert_eq!(err.to_string(), "Quest cancelled by user");
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(cycle(&Country::ALL, None, 1), Country::Indonesia);
        assert_eq!(cycle(&Country::ALL, None, -1), Country::Australia);
        assert_eq!(
            cycle(&Country::ALL, Some(Country::Australia), 1),
            Country::Indonesia
        );
        assert_eq!(
            cycle(&Country::ALL, Some(Country::Indonesia), -1),
            Country::Australia
        );
    }

    #[test]
    fn focus_clamps_to_card_count() {
        let mut app = App::default();
        app.handle_key(KeyCode::Enter); // intro -> screening
        assert_eq!(app.card_count(), 2);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.focus(), 1);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.focus(), 0);
    }

    #[test]
    fn keys_answer_the_screening_cards() {
        let mut app = App::default();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Left); // YES on played-indie
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Char('y'));
        let screening = app.session.answers().screening;
        assert_eq!(screening.played_indie, Some(YesNo::Yes));
        assert_eq!(screening.active_gamer, Some(YesNo::Yes));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session.screen(), Screen::Profile);
        assert_eq!(app.focus(), 0);
    }

    #[test]
    fn digits_set_ratings_on_block_screens() {
        let mut app = App::default();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Char('y'));
        app.handle_key(KeyCode::Enter); // -> profile
        for _ in 0..4 {
            app.handle_key(KeyCode::Right); // select first option of each field
            app.handle_key(KeyCode::Down);
        }
        app.handle_key(KeyCode::Enter); // -> level 1
        assert_eq!(app.session.screen(), Screen::Level1);

        app.handle_key(KeyCode::Char('4'));
        assert_eq!(
            app.session.answers().level1.get(0),
            Some(Rating::Four)
        );
        app.handle_key(KeyCode::Right); // nudge 4 -> 5
        assert_eq!(app.session.answers().level1.get(0), Some(Rating::Five));
        app.handle_key(KeyCode::Char('9')); // not a Likert value
        assert_eq!(app.session.answers().level1.get(0), Some(Rating::Five));
    }

    #[test]
    fn backspace_only_retreats_between_intro_and_completion() {
        let mut app = App::default();
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.session.screen(), Screen::Intro);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.session.screen(), Screen::Intro);
    }
}
