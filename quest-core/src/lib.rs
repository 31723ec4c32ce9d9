//! Core state machine for the Indie Quest survey.
//!
//! This crate owns everything a front-end needs to run the quest:
//! - `Screen` - the eight steps of the quest, in presentation order
//! - `Answers`, `RatingBlock` and the enum-constrained answer domains
//! - `FormSession` - the session controller: mutation, validation,
//!   advancement, XP accounting and transient signals
//! - `content` - the HUD titles, prompts and copy text per screen
//!
//! Front-ends (the ratatui wizard, or anything else) render purely from
//! a `FormSession` snapshot and call back into its operations.

mod screen;
pub use screen::Screen;

mod answers;
pub use answers::{
    AgeBand, Answers, BlockKey, Country, InvalidRating, Platform, Playtime, ProfileAnswers,
    ProfileChoice, QUESTIONS_PER_BLOCK, Rating, RatingBlock, ScreeningAnswers, ScreeningField,
    YesNo,
};

mod signal;
pub use signal::{MSG_ACCESS_DENIED, MSG_INCOMPLETE, SIGNAL_TTL, Signal};

mod session;
pub use session::{FormSession, XP_PROFILE_BONUS, XP_SUBMIT_BONUS};

pub mod content;
