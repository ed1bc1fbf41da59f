//! The authoritative game state and world themes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::quest::{Quest, QuestId};
use crate::story::StoryEntry;

/// The flavor of world the adventure takes place in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldTheme {
    /// Castles, knights, and villages.
    Medieval,
    /// Grim lands under a dying light.
    DarkFantasy,
    /// Magic saturates everything.
    HighMagic,
    /// Untamed forests and frontier.
    Wilderness,
}

impl WorldTheme {
    /// All themes, in character-creation order.
    pub const ALL: [Self; 4] = [
        Self::Medieval,
        Self::DarkFantasy,
        Self::HighMagic,
        Self::Wilderness,
    ];

    /// Parse a theme from a string like "medieval" or "dark fantasy".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "medieval" => Some(Self::Medieval),
            "dark fantasy" | "dark-fantasy" | "darkfantasy" => Some(Self::DarkFantasy),
            "high magic" | "high-magic" | "highmagic" => Some(Self::HighMagic),
            "wilderness" => Some(Self::Wilderness),
            _ => None,
        }
    }
}

impl fmt::Display for WorldTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Medieval => write!(f, "Medieval"),
            Self::DarkFantasy => write!(f, "Dark Fantasy"),
            Self::HighMagic => write!(f, "High Magic"),
            Self::Wilderness => write!(f, "Wilderness"),
        }
    }
}

/// The whole state of an adventure.
///
/// One value of this type is authoritative for a session. It only changes by
/// way of [`transition`](crate::reducer::transition); nothing mutates it in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The player character, once created.
    pub character: Option<Character>,
    /// The chosen world theme, once picked.
    pub world_theme: Option<WorldTheme>,
    /// Ordered, append-only log of story events.
    pub story_log: Vec<StoryEntry>,
    /// Where the player currently is.
    pub current_location: String,
    /// All quests, in the order they were added.
    pub quests: Vec<Quest>,
    /// Whether the in-memory state matches the last persisted snapshot.
    pub is_saved: bool,
}

impl GameState {
    /// Look up a quest by ID.
    pub fn quest(&self, id: QuestId) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            character: None,
            world_theme: None,
            story_log: Vec::new(),
            current_location: "Unknown".to_string(),
            quests: Vec::new(),
            is_saved: false,
        }
    }
}
