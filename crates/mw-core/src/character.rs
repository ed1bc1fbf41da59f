//! Player characters: races, classes, stats, and carried inventory.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::inventory::InventoryItem;

/// A playable character race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    /// Adaptable and ubiquitous.
    Human,
    /// Long-lived and graceful.
    Elf,
    /// Stout mountain folk.
    Dwarf,
    /// Small, quiet, and lucky.
    Halfling,
    /// Strong and battle-hardened.
    Orc,
    /// Small, inventive tinkerers.
    Gnome,
}

impl Race {
    /// All races, in character-creation order.
    pub const ALL: [Self; 6] = [
        Self::Human,
        Self::Elf,
        Self::Dwarf,
        Self::Halfling,
        Self::Orc,
        Self::Gnome,
    ];

    /// Parse a race from a string like "human" or "Elf".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "elf" => Some(Self::Elf),
            "dwarf" => Some(Self::Dwarf),
            "halfling" => Some(Self::Halfling),
            "orc" => Some(Self::Orc),
            "gnome" => Some(Self::Gnome),
            _ => None,
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "Human"),
            Self::Elf => write!(f, "Elf"),
            Self::Dwarf => write!(f, "Dwarf"),
            Self::Halfling => write!(f, "Halfling"),
            Self::Orc => write!(f, "Orc"),
            Self::Gnome => write!(f, "Gnome"),
        }
    }
}

/// A playable character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Class {
    /// Frontline fighter.
    Warrior,
    /// Arcane spellcaster.
    Wizard,
    /// Stealth and trickery.
    Rogue,
    /// Divine magic and healing.
    Cleric,
    /// Wilderness scout.
    Ranger,
    /// Song, charm, and lore.
    Bard,
}

impl Class {
    /// All classes, in character-creation order.
    pub const ALL: [Self; 6] = [
        Self::Warrior,
        Self::Wizard,
        Self::Rogue,
        Self::Cleric,
        Self::Ranger,
        Self::Bard,
    ];

    /// Parse a class from a string like "warrior" or "Bard".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "warrior" => Some(Self::Warrior),
            "wizard" => Some(Self::Wizard),
            "rogue" => Some(Self::Rogue),
            "cleric" => Some(Self::Cleric),
            "ranger" => Some(Self::Ranger),
            "bard" => Some(Self::Bard),
            _ => None,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warrior => write!(f, "Warrior"),
            Self::Wizard => write!(f, "Wizard"),
            Self::Rogue => write!(f, "Rogue"),
            Self::Cleric => write!(f, "Cleric"),
            Self::Ranger => write!(f, "Ranger"),
            Self::Bard => write!(f, "Bard"),
        }
    }
}

/// The six classic attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Physical power.
    pub strength: u32,
    /// Agility and reflexes.
    pub dexterity: u32,
    /// Endurance and health.
    pub constitution: u32,
    /// Reasoning and memory.
    pub intelligence: u32,
    /// Perception and insight.
    pub wisdom: u32,
    /// Force of personality.
    pub charisma: u32,
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// The character's name.
    pub name: String,
    /// The character's race.
    pub race: Race,
    /// The character's class.
    pub class: Class,
    /// Rolled attributes, if any.
    pub stats: Option<StatBlock>,
    /// Items the character carries.
    pub inventory: Vec<InventoryItem>,
}

impl Character {
    /// Create a character with an empty inventory and no stats.
    pub fn new(name: impl Into<String>, race: Race, class: Class) -> Self {
        Self {
            name: name.into(),
            race,
            class,
            stats: None,
            inventory: Vec::new(),
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} the {} {}", self.name, self.race, self.class)
    }
}
