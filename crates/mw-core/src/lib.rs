//! Core types for Mythweaver: game state, characters, quests, the story
//! log, and the pure transition function that drives them.
//!
//! This crate has no I/O. A session holds one [`GameState`] and evolves it
//! exclusively through [`transition`]; the state is serializable as a single
//! JSON snapshot for the save slot.

/// Characters, races, classes, and stat blocks.
pub mod character;
/// Inventory items carried by a character.
pub mod inventory;
/// Quests and quest updates.
pub mod quest;
/// The transition function and its action set.
pub mod reducer;
/// The authoritative game state and world themes.
pub mod state;
/// Story log entries and exports.
pub mod story;

/// Re-export character types.
pub use character::{Character, Class, Race, StatBlock};
/// Re-export inventory types.
pub use inventory::{InventoryItem, ItemId, ItemKind};
/// Re-export quest types.
pub use quest::{Quest, QuestDraft, QuestId, QuestPatch};
/// Re-export the transition function and actions.
pub use reducer::{Action, transition};
/// Re-export state types.
pub use state::{GameState, WorldTheme};
/// Re-export story types.
pub use story::{EntryId, EntryKind, StoryDraft, StoryEntry};
