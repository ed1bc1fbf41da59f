//! The game-state transition function.
//!
//! All changes to a [`GameState`] go through [`transition`]: it takes the
//! current state and one [`Action`] and returns the next state, leaving the
//! input untouched. IDs and timestamps for appended records are generated
//! here, as part of the append itself.

use chrono::Utc;

use crate::character::Character;
use crate::quest::{Quest, QuestDraft, QuestId, QuestPatch};
use crate::state::{GameState, WorldTheme};
use crate::story::{EntryId, StoryDraft, StoryEntry};

/// A discrete change to the game state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the character and clear the story log.
    SetCharacter(Character),
    /// Replace the world theme.
    SetWorldTheme(WorldTheme),
    /// Append a story entry, with a generated ID and timestamp.
    AddStoryEntry(StoryDraft),
    /// Replace the current location.
    SetLocation(String),
    /// Append a quest, with a generated ID.
    AddQuest(QuestDraft),
    /// Merge a patch over the quest with the given ID. If no quest matches,
    /// the state is unchanged.
    UpdateQuest {
        /// The quest to update.
        id: QuestId,
        /// The fields to merge over it.
        patch: QuestPatch,
    },
    /// Replace the entire state with the initial empty state.
    ResetGame,
    /// Replace the entire state wholesale, trusted as-is.
    LoadGame(GameState),
    /// Set the saved flag.
    SetSaved(bool),
    /// Empty the story log, leaving everything else.
    ClearStory,
}

/// Compute the next state from the current state and an action.
///
/// `AddStoryEntry`, `SetLocation`, `AddQuest`, and `UpdateQuest` also clear
/// `is_saved`, marking the in-memory state as diverged from the last
/// persisted snapshot.
pub fn transition(state: &GameState, action: Action) -> GameState {
    match action {
        Action::SetCharacter(character) => GameState {
            character: Some(character),
            story_log: Vec::new(),
            ..state.clone()
        },
        Action::SetWorldTheme(theme) => GameState {
            world_theme: Some(theme),
            ..state.clone()
        },
        Action::AddStoryEntry(draft) => {
            let entry = StoryEntry {
                id: EntryId::new(),
                text: draft.text,
                kind: draft.kind,
                timestamp: Utc::now(),
                speaker: draft.speaker,
                image: draft.image,
            };
            let mut story_log = state.story_log.clone();
            story_log.push(entry);
            GameState {
                story_log,
                is_saved: false,
                ..state.clone()
            }
        }
        Action::SetLocation(location) => GameState {
            current_location: location,
            is_saved: false,
            ..state.clone()
        },
        Action::AddQuest(draft) => {
            let quest = Quest {
                id: QuestId::new(),
                title: draft.title,
                description: draft.description,
                is_active: draft.is_active,
                is_completed: draft.is_completed,
            };
            let mut quests = state.quests.clone();
            quests.push(quest);
            GameState {
                quests,
                is_saved: false,
                ..state.clone()
            }
        }
        Action::UpdateQuest { id, patch } => {
            let quests = state
                .quests
                .iter()
                .map(|q| if q.id == id { patch.apply(q) } else { q.clone() })
                .collect();
            GameState {
                quests,
                is_saved: false,
                ..state.clone()
            }
        }
        Action::ResetGame => GameState::default(),
        Action::LoadGame(loaded) => loaded,
        Action::SetSaved(flag) => GameState {
            is_saved: flag,
            ..state.clone()
        },
        Action::ClearStory => GameState {
            story_log: Vec::new(),
            ..state.clone()
        },
    }
}
