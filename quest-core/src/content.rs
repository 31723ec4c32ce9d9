//! Fixed copy text and prompts for every screen.
//!
//! Pure data for the front-end: titles, level labels, question prompts
//! and the intro/completion copy. No logic lives here.

use crate::answers::{BlockKey, QUESTIONS_PER_BLOCK};
use crate::screen::Screen;

/// Header shown on the screens between intro and completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub title: &'static str,
    pub level: &'static str,
}

/// HUD title and level label, for the screens that carry one.
pub fn hud(screen: Screen) -> Option<Hud> {
    let hud = match screen {
        Screen::Intro | Screen::Complete => return None,
        Screen::Screening => Hud {
            title: "Are you ready?",
            level: "01",
        },
        Screen::Profile => Hud {
            title: "Character Creation",
            level: "02",
        },
        Screen::Level1 => Hud {
            title: "LVL 1: MARKETING STRATEGY",
            level: "03",
        },
        Screen::Level2 => Hud {
            title: "LVL 2: DIGITAL WHISPERS",
            level: "04",
        },
        Screen::Level3 => Hud {
            title: "LVL 3: FORGE OF INNOVATION",
            level: "05",
        },
        Screen::FinalBoss => Hud {
            title: "FINAL BOSS: THE DECISION",
            level: "06",
        },
    };
    Some(hud)
}

/// The five statements rated in a block.
pub fn prompts(block: BlockKey) -> &'static [&'static str; QUESTIONS_PER_BLOCK] {
    match block {
        BlockKey::Level1 => &[
            "Promotional content is visually appealing",
            "Messages clearly communicate unique value",
            "Social media increases my awareness",
            "Digital platforms promote effectively",
            "Campaigns feel globally competitive",
        ],
        BlockKey::Level2 => &[
            "Online reviews influence my perception",
            "Positive comments increase interest",
            "Forums affect purchase consideration",
            "Influencers impact my trust",
            "User ratings influence my decision",
        ],
        BlockKey::Level3 => &[
            "Offers unique gameplay mechanics",
            "Visual art feels creative & distinctive",
            "Cultural elements add value",
            "Innovative vs mainstream indies",
            "Shows continuous innovation",
        ],
        BlockKey::FinalBoss => &[
            "Interested in future purchases",
            "Would pay if price is reasonable",
            "Willing to support by recommending",
            "Choose over other countries",
            "Intend to follow developers",
        ],
    }
}

pub const GAME_TITLE: &str = "INDIE QUEST";
pub const INTRO_TIME: &str = "This interactive quest takes about 5–7 minutes.";
pub const INTRO_NOTE: &str = "All answers are anonymous and for academic research only.";

pub const SCREENING_PLAYED_INDIE: &str =
    "Have you ever played or watched gameplay of an Indonesian indie game?";
pub const SCREENING_ACTIVE_GAMER: &str = "Do you consider yourself an active gamer?";
pub const SCREENING_LOCK_HINT: &str = "Only active players can unlock Level 1";

pub const PROFILE_COUNTRY_LABEL: &str = "Country of Residence";
pub const PROFILE_AGE_LABEL: &str = "Age Category";
pub const PROFILE_PLATFORM_LABEL: &str = "Primary Platform";
pub const PROFILE_PLAYTIME_LABEL: &str = "Playtime Per Week";

pub const LIKERT_LOW: &str = "1 = Disagree";
pub const LIKERT_HIGH: &str = "5 = Agree";
pub const BOSS_BANNER: &str = "BOSS FIGHT";
pub const BOSS_STAMINA: &str = "STAMINA: 95% COMPLETE";

pub const COMPLETE_TITLE: &str = "QUEST COMPLETED";
pub const COMPLETE_ACHIEVEMENT: &str = "Achievement Unlocked: Master Contributor";
pub const COMPLETE_BODY: &str = "Your tactical data has been uploaded to the research nexus. \
Thank you for your service to the Indie Quest.";

pub const XP_TOAST_TEXT: &str = "+100 XP GAINED";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_only_between_intro_and_completion() {
        assert_eq!(hud(Screen::Intro), None);
        assert_eq!(hud(Screen::Complete), None);
        assert_eq!(hud(Screen::Screening).unwrap().level, "01");
        assert_eq!(hud(Screen::FinalBoss).unwrap().level, "06");
    }

    #[test]
    fn every_block_has_five_prompts() {
        for block in BlockKey::ALL {
            let prompts = prompts(block);
            assert!(prompts.iter().all(|p| !p.is_empty()));
        }
        assert_eq!(
            prompts(BlockKey::FinalBoss)[0],
            "Interested in future purchases"
        );
    }
}
