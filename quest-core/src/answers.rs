//! Answer domains and the accumulated answer record.
//!
//! Every choice a player can make is enum-constrained, so the session
//! mutation operations are total: there is no out-of-range value a
//! front-end could hand us.

/// A yes/no screening answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

/// Country of residence, the six options of the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Indonesia,
    UnitedStates,
    UnitedKingdom,
    Germany,
    Japan,
    Australia,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Indonesia,
        Country::UnitedStates,
        Country::UnitedKingdom,
        Country::Germany,
        Country::Japan,
        Country::Australia,
    ];

    /// Two-letter code stored in the response record.
    pub fn code(self) -> &'static str {
        match self {
            Country::Indonesia => "ID",
            Country::UnitedStates => "US",
            Country::UnitedKingdom => "UK",
            Country::Germany => "DE",
            Country::Japan => "JP",
            Country::Australia => "AU",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Country::Indonesia => "Indonesia",
            Country::UnitedStates => "United States",
            Country::UnitedKingdom => "United Kingdom",
            Country::Germany => "Germany",
            Country::Japan => "Japan",
            Country::Australia => "Australia",
        }
    }
}

/// Age band of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBand {
    Under18,
    From18To24,
    From25To34,
    From35To44,
    Over45,
}

impl AgeBand {
    pub const ALL: [AgeBand; 5] = [
        AgeBand::Under18,
        AgeBand::From18To24,
        AgeBand::From25To34,
        AgeBand::From35To44,
        AgeBand::Over45,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AgeBand::Under18 => "Under 18",
            AgeBand::From18To24 => "18–24",
            AgeBand::From25To34 => "25–34",
            AgeBand::From35To44 => "35–44",
            AgeBand::Over45 => "45+",
        }
    }
}

/// Primary gaming platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Pc,
    Console,
    Mobile,
    Multiple,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Pc,
        Platform::Console,
        Platform::Mobile,
        Platform::Multiple,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::Console => "Console",
            Platform::Mobile => "Mobile",
            Platform::Multiple => "Multiple",
        }
    }
}

/// Weekly playtime band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Playtime {
    UnderFive,
    FiveToTen,
    ElevenToTwenty,
    OverTwenty,
}

impl Playtime {
    pub const ALL: [Playtime; 4] = [
        Playtime::UnderFive,
        Playtime::FiveToTen,
        Playtime::ElevenToTwenty,
        Playtime::OverTwenty,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Playtime::UnderFive => "<5 hours",
            Playtime::FiveToTen => "5–10 hours",
            Playtime::ElevenToTwenty => "11–20 hours",
            Playtime::OverTwenty => ">20 hours",
        }
    }
}

/// A Likert rating, 1 (disagree) to 5 (agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

/// Error for a rating outside the Likert scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating {0} is outside the Likert range 1..=5")]
pub struct InvalidRating(pub u8);

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    pub fn value(self) -> u8 {
        match self {
            Rating::One => 1,
            Rating::Two => 2,
            Rating::Three => 3,
            Rating::Four => 4,
            Rating::Five => 5,
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::One),
            2 => Ok(Rating::Two),
            3 => Ok(Rating::Three),
            4 => Ok(Rating::Four),
            5 => Ok(Rating::Five),
            other => Err(InvalidRating(other)),
        }
    }
}

/// Which screening question a yes/no answer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningField {
    PlayedIndie,
    ActiveGamer,
}

/// The two screening answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreeningAnswers {
    pub played_indie: Option<YesNo>,
    pub active_gamer: Option<YesNo>,
}

impl ScreeningAnswers {
    /// Both questions answered (either way).
    pub fn is_complete(&self) -> bool {
        self.played_indie.is_some() && self.active_gamer.is_some()
    }
}

/// A single profile selection, carrying its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileChoice {
    Country(Country),
    Age(AgeBand),
    Platform(Platform),
    Playtime(Playtime),
}

/// The four profile fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileAnswers {
    pub country: Option<Country>,
    pub age: Option<AgeBand>,
    pub platform: Option<Platform>,
    pub playtime: Option<Playtime>,
}

impl ProfileAnswers {
    /// All four fields selected.
    pub fn is_complete(&self) -> bool {
        self.country.is_some()
            && self.age.is_some()
            && self.platform.is_some()
            && self.playtime.is_some()
    }
}

/// Number of statements in every rating block.
pub const QUESTIONS_PER_BLOCK: usize = 5;

/// One of the four Likert question blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKey {
    Level1,
    Level2,
    Level3,
    FinalBoss,
}

impl BlockKey {
    pub const ALL: [BlockKey; 4] = [
        BlockKey::Level1,
        BlockKey::Level2,
        BlockKey::Level3,
        BlockKey::FinalBoss,
    ];
}

/// Ratings for the five statements of one block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingBlock {
    ratings: [Option<Rating>; QUESTIONS_PER_BLOCK],
}

impl RatingBlock {
    /// Overwrite the rating for one statement. Idempotent; an index past
    /// the block is ignored so the operation stays total.
    pub fn set(&mut self, question: usize, rating: Rating) {
        if let Some(slot) = self.ratings.get_mut(question) {
            *slot = Some(rating);
        }
    }

    pub fn get(&self, question: usize) -> Option<Rating> {
        self.ratings.get(question).copied().flatten()
    }

    /// How many statements have been rated so far.
    pub fn answered(&self) -> usize {
        self.ratings.iter().flatten().count()
    }

    /// All five statements rated.
    pub fn is_complete(&self) -> bool {
        self.ratings.iter().all(Option::is_some)
    }
}

/// The full answer record accumulated over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Answers {
    pub screening: ScreeningAnswers,
    pub profile: ProfileAnswers,
    pub level1: RatingBlock,
    pub level2: RatingBlock,
    pub level3: RatingBlock,
    pub final_boss: RatingBlock,
}

impl Answers {
    pub fn block(&self, key: BlockKey) -> &RatingBlock {
        match key {
            BlockKey::Level1 => &self.level1,
            BlockKey::Level2 => &self.level2,
            BlockKey::Level3 => &self.level3,
            BlockKey::FinalBoss => &self.final_boss,
        }
    }

    pub fn block_mut(&mut self, key: BlockKey) -> &mut RatingBlock {
        match key {
            BlockKey::Level1 => &mut self.level1,
            BlockKey::Level2 => &mut self.level2,
            BlockKey::Level3 => &mut self.level3,
            BlockKey::FinalBoss => &mut self.final_boss,
        }
    }
}
