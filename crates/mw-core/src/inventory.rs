//! Inventory items carried by a character.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What sort of item this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    /// Swords, bows, staves.
    Weapon,
    /// Worn protection.
    Armor,
    /// Consumable draughts.
    Potion,
    /// Rare magical objects.
    Artifact,
    /// Everything else.
    Misc,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
            Self::Potion => write!(f, "potion"),
            Self::Artifact => write!(f, "artifact"),
            Self::Misc => write!(f, "misc"),
        }
    }
}

/// One stack of items in a character's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique identifier for this stack.
    pub id: ItemId,
    /// Item name.
    pub name: String,
    /// Flavor description.
    pub description: String,
    /// Item category.
    pub kind: ItemKind,
    /// How many are carried. Always at least 1.
    pub quantity: u32,
}

impl InventoryItem {
    /// Create a single item with a fresh ID.
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            description: description.into(),
            kind,
            quantity: 1,
        }
    }

    /// Set the stack quantity (floored at 1).
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }
}
