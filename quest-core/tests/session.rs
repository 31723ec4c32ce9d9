//! Integration tests for the quest session controller.

use std::time::Instant;

use quest_core::{
    AgeBand, BlockKey, Country, FormSession, MSG_ACCESS_DENIED, MSG_INCOMPLETE, Platform, Playtime,
    ProfileChoice, QUESTIONS_PER_BLOCK, Rating, Screen, ScreeningField, Signal, XP_PROFILE_BONUS,
    XP_SUBMIT_BONUS, YesNo,
};

fn fill_screening(session: &mut FormSession) {
    session.set_screening(ScreeningField::PlayedIndie, YesNo::Yes);
    session.set_screening(ScreeningField::ActiveGamer, YesNo::Yes);
}

fn fill_profile(session: &mut FormSession) {
    session.set_profile(ProfileChoice::Country(Country::Indonesia));
    session.set_profile(ProfileChoice::Age(AgeBand::From18To24));
    session.set_profile(ProfileChoice::Platform(Platform::Pc));
    session.set_profile(ProfileChoice::Playtime(Playtime::FiveToTen));
}

fn fill_block(session: &mut FormSession, block: BlockKey) {
    for question in 0..QUESTIONS_PER_BLOCK {
        session.set_rating(block, question, Rating::Four);
    }
}

/// Answer everything and walk the session up to the completion screen.
fn run_to_completion(session: &mut FormSession) {
    let now = Instant::now();
    fill_screening(session);
    fill_profile(session);
    for block in BlockKey::ALL {
        fill_block(session, block);
    }
    while session.screen() != Screen::Complete {
        session.advance(now);
    }
}

#[test]
fn screen_stays_in_bounds_under_any_sequence() {
    let mut session = FormSession::new();
    run_to_completion(&mut session);

    // Hammer the boundaries from both ends.
    let now = Instant::now();
    for _ in 0..20 {
        session.advance(now);
    }
    assert_eq!(session.screen(), Screen::Complete);
    for _ in 0..20 {
        session.retreat();
    }
    assert_eq!(session.screen(), Screen::Intro);

    // A mixed walk never leaves 0..=7.
    for step in 0..50 {
        if step % 3 == 0 {
            session.retreat();
        } else {
            session.advance(now);
        }
        assert!(session.screen().index() <= Screen::LAST_INDEX);
    }
}

#[test]
fn non_gamers_never_pass_screening() {
    for played_indie in [YesNo::Yes, YesNo::No] {
        let mut session = FormSession::new();
        let now = Instant::now();
        session.advance(now);
        session.set_screening(ScreeningField::PlayedIndie, played_indie);
        session.set_screening(ScreeningField::ActiveGamer, YesNo::No);
        for _ in 0..5 {
            session.advance(now);
        }
        assert_eq!(session.screen(), Screen::Screening);
        assert_eq!(
            session.signal(),
            Some(Signal::Error {
                message: MSG_ACCESS_DENIED
            })
        );
    }
}

#[test]
fn access_denied_is_sticky_until_the_next_outcome() {
    let mut session = FormSession::new();
    let now = Instant::now();
    session.advance(now);
    session.set_screening(ScreeningField::PlayedIndie, YesNo::Yes);
    session.set_screening(ScreeningField::ActiveGamer, YesNo::No);
    session.advance(now);

    // No deadline: ticking far into the future leaves it in place.
    session.tick(now + 10 * quest_core::SIGNAL_TTL);
    assert_eq!(
        session.signal(),
        Some(Signal::Error {
            message: MSG_ACCESS_DENIED
        })
    );

    // Changing the answer and advancing clears it.
    session.set_screening(ScreeningField::ActiveGamer, YesNo::Yes);
    session.advance(now);
    assert_eq!(session.screen(), Screen::Profile);
    assert_eq!(session.signal(), None);
}

#[test]
fn advance_moves_iff_the_screen_is_valid() {
    let mut session = FormSession::new();
    let now = Instant::now();
    session.advance(now);

    // Half-answered screening does not move.
    session.set_screening(ScreeningField::PlayedIndie, YesNo::Yes);
    assert!(!session.is_current_valid());
    session.advance(now);
    assert_eq!(session.screen(), Screen::Screening);
    assert_eq!(
        session.signal(),
        Some(Signal::Error {
            message: MSG_INCOMPLETE
        })
    );

    session.set_screening(ScreeningField::ActiveGamer, YesNo::Yes);
    assert!(session.is_current_valid());
    session.advance(now);
    assert_eq!(session.screen(), Screen::Profile);
}

#[test]
fn xp_is_granted_once_at_the_profile_transition() {
    let mut session = FormSession::new();
    run_to_completion(&mut session);
    assert_eq!(session.xp(), XP_PROFILE_BONUS);
    assert_eq!(session.final_xp(), XP_PROFILE_BONUS + XP_SUBMIT_BONUS);
}

#[test]
fn revisiting_the_profile_screen_grants_xp_again() {
    // Each profile departure is a milestone; the monotone counter only
    // stays at 100 when the screen is never revisited.
    let mut session = FormSession::new();
    let now = Instant::now();
    fill_screening(&mut session);
    fill_profile(&mut session);
    session.advance(now);
    session.advance(now);
    session.advance(now);
    assert_eq!(session.screen(), Screen::Level1);
    assert_eq!(session.xp(), XP_PROFILE_BONUS);

    session.retreat();
    session.advance(now);
    assert_eq!(session.xp(), 2 * XP_PROFILE_BONUS);
}

#[test]
fn rating_overwrite_is_idempotent() {
    let mut once = FormSession::new();
    once.set_rating(BlockKey::Level1, 2, Rating::Four);

    let mut twice = FormSession::new();
    twice.set_rating(BlockKey::Level1, 2, Rating::Four);
    twice.set_rating(BlockKey::Level1, 2, Rating::Four);

    assert_eq!(once.answers().level1, twice.answers().level1);

    // Overwriting with a different value replaces, never accumulates.
    twice.set_rating(BlockKey::Level1, 2, Rating::One);
    assert_eq!(twice.answers().level1.get(2), Some(Rating::One));
    assert_eq!(twice.answers().level1.answered(), 1);
}

#[test]
fn start_and_pass_screening() {
    let mut session = FormSession::new();
    let now = Instant::now();
    assert_eq!(session.screen(), Screen::Intro);
    session.advance(now);
    assert_eq!(session.screen(), Screen::Screening);

    fill_screening(&mut session);
    session.advance(now);
    assert_eq!(session.screen(), Screen::Profile);
}

#[test]
fn partial_block_blocks_until_fifth_rating() {
    let mut session = FormSession::new();
    let now = Instant::now();
    fill_screening(&mut session);
    fill_profile(&mut session);
    session.advance(now);
    session.advance(now);
    session.advance(now);
    assert_eq!(session.screen(), Screen::Level1);

    // Four of five rated: blocked with the quest-requirement message.
    for question in 0..QUESTIONS_PER_BLOCK - 1 {
        session.set_rating(BlockKey::Level1, question, Rating::Five);
    }
    session.advance(now);
    assert_eq!(session.screen(), Screen::Level1);
    assert_eq!(
        session.signal(),
        Some(Signal::Error {
            message: MSG_INCOMPLETE
        })
    );

    session.set_rating(BlockKey::Level1, QUESTIONS_PER_BLOCK - 1, Rating::Five);
    session.advance(now);
    assert_eq!(session.screen(), Screen::Level2);
    assert_eq!(session.signal(), None);
}

#[test]
fn profile_advance_grants_xp_and_toast() {
    let mut session = FormSession::new();
    let now = Instant::now();
    fill_screening(&mut session);
    session.advance(now);
    session.advance(now);
    assert_eq!(session.screen(), Screen::Profile);
    assert_eq!(session.xp(), 0);

    fill_profile(&mut session);
    session.advance(now);
    assert_eq!(session.screen(), Screen::Level1);
    assert_eq!(session.xp(), XP_PROFILE_BONUS);
    assert_eq!(
        session.signal(),
        Some(Signal::XpToast {
            amount: XP_PROFILE_BONUS
        })
    );

    // The toast expires like any transient signal.
    session.tick(now + quest_core::SIGNAL_TTL);
    assert_eq!(session.signal(), None);
}

#[test]
fn submit_resets_the_session() {
    let mut session = FormSession::new();
    run_to_completion(&mut session);
    assert_eq!(session.screen(), Screen::Complete);

    let answers = session.submit();
    assert!(answers.level1.is_complete());
    assert!(answers.final_boss.is_complete());
    assert_eq!(answers.screening.active_gamer, Some(YesNo::Yes));

    assert_eq!(session.screen(), Screen::Intro);
    assert_eq!(session.xp(), 0);
    assert_eq!(session.signal(), None);
    assert_eq!(session.answers().level1.answered(), 0);
    assert!(session.answers().profile.country.is_none());
}
