use crate::answers::BlockKey;

/// One step of the quest, in presentation order.
///
/// Transitions only ever move to a neighbour via [`Screen::next`] and
/// [`Screen::prev`]; there is no way to skip a screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Intro,
    Screening,
    Profile,
    Level1,
    Level2,
    Level3,
    FinalBoss,
    Complete,
}

impl Screen {
    /// All screens in presentation order.
    pub const ALL: [Screen; 8] = [
        Screen::Intro,
        Screen::Screening,
        Screen::Profile,
        Screen::Level1,
        Screen::Level2,
        Screen::Level3,
        Screen::FinalBoss,
        Screen::Complete,
    ];

    /// Index of the terminal screen.
    pub const LAST_INDEX: u8 = 7;

    /// Position of this screen in the quest, 0..=7.
    pub fn index(self) -> u8 {
        match self {
            Screen::Intro => 0,
            Screen::Screening => 1,
            Screen::Profile => 2,
            Screen::Level1 => 3,
            Screen::Level2 => 4,
            Screen::Level3 => 5,
            Screen::FinalBoss => 6,
            Screen::Complete => 7,
        }
    }

    /// Look a screen up by its index.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The screen one step forward, if any.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The screen one step back, if any.
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// The rating block collected on this screen, if it carries one.
    pub fn block(self) -> Option<BlockKey> {
        match self {
            Screen::Level1 => Some(BlockKey::Level1),
            Screen::Level2 => Some(BlockKey::Level2),
            Screen::Level3 => Some(BlockKey::Level3),
            Screen::FinalBoss => Some(BlockKey::FinalBoss),
            _ => None,
        }
    }

    /// Fraction of the quest completed, for the progress bar.
    pub fn progress(self) -> f64 {
        f64::from(self.index()) / f64::from(Self::LAST_INDEX)
    }
}
