use std::time::Instant;

use crate::answers::{Answers, BlockKey, ProfileChoice, Rating, ScreeningField, YesNo};
use crate::screen::Screen;
use crate::signal::{ActiveSignal, MSG_ACCESS_DENIED, MSG_INCOMPLETE, SIGNAL_TTL, Signal};

/// XP granted for finishing the character-creation screen.
pub const XP_PROFILE_BONUS: u32 = 100;

/// XP bonus shown on the completion screen. Display-only: it is never
/// written back into the session.
pub const XP_SUBMIT_BONUS: u32 = 500;

/// The session controller of the quest.
///
/// Owns the current screen, the answer record, the XP counter and the
/// transient signal. Front-ends render from read-only snapshots of this
/// state and mutate it exclusively through the operations below.
#[derive(Debug, Default)]
pub struct FormSession {
    screen: Screen,
    xp: u32,
    answers: Answers,
    signal: Option<ActiveSignal>,
}

impl FormSession {
    /// A fresh session, at the intro screen with nothing answered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// The currently visible transient signal, if any.
    pub fn signal(&self) -> Option<Signal> {
        self.signal.map(|active| active.signal)
    }

    /// Fraction of the quest completed, for the progress bar.
    pub fn progress(&self) -> f64 {
        self.screen.progress()
    }

    /// XP total shown on the completion screen.
    pub fn final_xp(&self) -> u32 {
        self.xp + XP_SUBMIT_BONUS
    }

    /// Whether a screen's objectives are all met. Pure over the answers.
    pub fn is_valid(&self, screen: Screen) -> bool {
        match screen {
            Screen::Intro | Screen::Complete => true,
            Screen::Screening => self.answers.screening.is_complete(),
            Screen::Profile => self.answers.profile.is_complete(),
            Screen::Level1 => self.answers.level1.is_complete(),
            Screen::Level2 => self.answers.level2.is_complete(),
            Screen::Level3 => self.answers.level3.is_complete(),
            Screen::FinalBoss => self.answers.final_boss.is_complete(),
        }
    }

    /// Whether the current screen may advance on its completeness alone.
    pub fn is_current_valid(&self) -> bool {
        self.is_valid(self.screen)
    }

    /// Overwrite one screening answer. No validation, no signal.
    pub fn set_screening(&mut self, field: ScreeningField, value: YesNo) {
        match field {
            ScreeningField::PlayedIndie => self.answers.screening.played_indie = Some(value),
            ScreeningField::ActiveGamer => self.answers.screening.active_gamer = Some(value),
        }
    }

    /// Overwrite one profile field. No validation, no signal.
    pub fn set_profile(&mut self, choice: ProfileChoice) {
        match choice {
            ProfileChoice::Country(country) => self.answers.profile.country = Some(country),
            ProfileChoice::Age(age) => self.answers.profile.age = Some(age),
            ProfileChoice::Platform(platform) => self.answers.profile.platform = Some(platform),
            ProfileChoice::Playtime(playtime) => self.answers.profile.playtime = Some(playtime),
        }
    }

    /// Overwrite one Likert rating. No validation, no signal.
    pub fn set_rating(&mut self, block: BlockKey, question: usize, rating: Rating) {
        self.answers.block_mut(block).set(question, rating);
    }

    /// Try to move one screen forward.
    ///
    /// An incomplete screen raises the quest-requirement error for
    /// [`SIGNAL_TTL`]. A complete screening screen with a "No" on the
    /// active-gamer question raises the access-denied error instead; that
    /// one is sticky and only goes away when a later `advance` outcome
    /// replaces it. Leaving the profile screen grants the XP bonus and
    /// raises the toast.
    pub fn advance(&mut self, now: Instant) {
        if !self.is_valid(self.screen) {
            self.signal = Some(ActiveSignal {
                signal: Signal::Error {
                    message: MSG_INCOMPLETE,
                },
                deadline: Some(now + SIGNAL_TTL),
            });
            return;
        }

        // Hard gate, independent of completeness: a declared non-gamer
        // never passes screening.
        if self.screen == Screen::Screening
            && self.answers.screening.active_gamer == Some(YesNo::No)
        {
            self.signal = Some(ActiveSignal {
                signal: Signal::Error {
                    message: MSG_ACCESS_DENIED,
                },
                deadline: None,
            });
            return;
        }

        if self.screen == Screen::Profile {
            self.xp += XP_PROFILE_BONUS;
            self.signal = Some(ActiveSignal {
                signal: Signal::XpToast {
                    amount: XP_PROFILE_BONUS,
                },
                deadline: Some(now + SIGNAL_TTL),
            });
        } else {
            self.signal = None;
        }

        if let Some(next) = self.screen.next() {
            self.screen = next;
        }
    }

    /// Move one screen back, unconditionally. No validation, no XP, and
    /// the current signal is left alone.
    pub fn retreat(&mut self) {
        if let Some(prev) = self.screen.prev() {
            self.screen = prev;
        }
    }

    /// Clear the transient signal once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(active) = &self.signal
            && let Some(deadline) = active.deadline
            && now >= deadline
        {
            self.signal = None;
        }
    }

    /// Finish the quest: hand the collected answers to the caller and
    /// reset the session to its defaults. Persistence, if any, is the
    /// caller's concern.
    pub fn submit(&mut self) -> Answers {
        let answers = std::mem::take(&mut self.answers);
        *self = Self::default();
        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_defaults() {
        let session = FormSession::new();
        assert_eq!(session.screen(), Screen::Intro);
        assert_eq!(session.xp(), 0);
        assert_eq!(session.signal(), None);
        assert_eq!(session.progress(), 0.0);
        assert!(session.is_current_valid());
    }

    #[test]
    fn intro_advances_without_input() {
        let mut session = FormSession::new();
        session.advance(Instant::now());
        assert_eq!(session.screen(), Screen::Screening);
        assert_eq!(session.signal(), None);
    }

    #[test]
    fn final_xp_is_display_only() {
        let session = FormSession::new();
        assert_eq!(session.final_xp(), XP_SUBMIT_BONUS);
        assert_eq!(session.xp(), 0);
    }

    #[test]
    fn retreat_stops_at_intro() {
        let mut session = FormSession::new();
        session.retreat();
        assert_eq!(session.screen(), Screen::Intro);
    }

    #[test]
    fn incomplete_signal_expires_after_ttl() {
        let mut session = FormSession::new();
        session.advance(Instant::now());
        let raised = Instant::now();
        session.advance(raised); // Screening is empty.
        assert_eq!(
            session.signal(),
            Some(Signal::Error {
                message: MSG_INCOMPLETE
            })
        );
        session.tick(raised + SIGNAL_TTL / 2);
        assert!(session.signal().is_some());
        session.tick(raised + SIGNAL_TTL);
        assert_eq!(session.signal(), None);
    }

    #[test]
    fn reraising_replaces_the_deadline() {
        let mut session = FormSession::new();
        session.advance(Instant::now());
        let first = Instant::now();
        session.advance(first);
        let second = first + SIGNAL_TTL / 2;
        session.advance(second);
        // The first deadline has passed, but the signal was re-raised.
        session.tick(first + SIGNAL_TTL);
        assert!(session.signal().is_some());
        session.tick(second + SIGNAL_TTL);
        assert_eq!(session.signal(), None);
    }
}
