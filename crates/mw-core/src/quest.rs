//! Quests tracked over the course of an adventure.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestId(pub Uuid);

impl QuestId {
    /// Generate a new random quest ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A quest in the player's log.
///
/// `is_active` and `is_completed` are independent flags: a quest can be
/// inactive and incomplete (not yet started), active, completed, or any
/// other combination. Nothing here enforces exclusivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    /// Unique identifier.
    pub id: QuestId,
    /// Short quest title.
    pub title: String,
    /// Longer description of the objective.
    pub description: String,
    /// Whether the quest is currently being pursued.
    pub is_active: bool,
    /// Whether the quest has been finished.
    pub is_completed: bool,
}

/// Fields for a quest about to be added; the ID is generated on append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestDraft {
    /// Short quest title.
    pub title: String,
    /// Longer description of the objective.
    pub description: String,
    /// Initial active flag.
    pub is_active: bool,
    /// Initial completed flag.
    pub is_completed: bool,
}

impl QuestDraft {
    /// Draft an active, incomplete quest.
    pub fn active(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            is_active: true,
            is_completed: false,
        }
    }
}

/// A partial update merged over an existing quest.
///
/// `None` fields leave the current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestPatch {
    /// New title, if changing.
    pub title: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New active flag, if changing.
    pub is_active: Option<bool>,
    /// New completed flag, if changing.
    pub is_completed: Option<bool>,
}

impl QuestPatch {
    /// A patch that marks the quest completed.
    pub fn completed() -> Self {
        Self {
            is_completed: Some(true),
            ..Self::default()
        }
    }

    /// A patch that starts the quest.
    pub fn started() -> Self {
        Self {
            is_active: Some(true),
            ..Self::default()
        }
    }

    /// A patch that shelves the quest without completing it.
    pub fn abandoned() -> Self {
        Self {
            is_active: Some(false),
            ..Self::default()
        }
    }

    /// Apply this patch to a quest, producing the merged quest.
    pub fn apply(&self, quest: &Quest) -> Quest {
        Quest {
            id: quest.id,
            title: self.title.clone().unwrap_or_else(|| quest.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| quest.description.clone()),
            is_active: self.is_active.unwrap_or(quest.is_active),
            is_completed: self.is_completed.unwrap_or(quest.is_completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amulet_quest() -> Quest {
        Quest {
            id: QuestId::new(),
            title: "Find the amulet".to_string(),
            description: "Lost in the marshes.".to_string(),
            is_active: true,
            is_completed: false,
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let quest = amulet_quest();
        assert_eq!(QuestPatch::default().apply(&quest), quest);
    }

    #[test]
    fn completed_patch_keeps_other_fields() {
        let quest = amulet_quest();
        let updated = QuestPatch::completed().apply(&quest);
        assert_eq!(updated.title, "Find the amulet");
        assert!(updated.is_active);
        assert!(updated.is_completed);
        assert_eq!(updated.id, quest.id);
    }

    #[test]
    fn patch_can_retitle() {
        let quest = amulet_quest();
        let patch = QuestPatch {
            title: Some("Find the lost amulet".to_string()),
            ..QuestPatch::default()
        };
        let updated = patch.apply(&quest);
        assert_eq!(updated.title, "Find the lost amulet");
        assert_eq!(updated.description, quest.description);
    }

    #[test]
    fn quest_ids_are_unique() {
        assert_ne!(QuestId::new(), QuestId::new());
    }
}
