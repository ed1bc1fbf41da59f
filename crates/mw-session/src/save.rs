//! The save slot: one persisted snapshot of the whole game state.
//!
//! The storage backend is injected behind [`SaveSlot`] so the save/load
//! logic is testable without touching the filesystem. A slot holds exactly
//! one record; there is no versioning, migration, or partial-load recovery.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mw_core::GameState;

use crate::error::SessionResult;

/// A store for exactly one serialized snapshot.
pub trait SaveSlot {
    /// Replace the stored snapshot.
    fn write(&mut self, payload: &str) -> SessionResult<()>;

    /// Read the stored snapshot, or `None` if the slot is empty.
    fn read(&self) -> SessionResult<Option<String>>;

    /// Whether a snapshot is currently stored.
    fn exists(&self) -> bool;
}

/// A save slot backed by a single file on disk.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot at the given path. Nothing is read or written until
    /// the slot is used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this slot reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveSlot for FileSlot {
    fn write(&mut self, payload: &str) -> SessionResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn read(&self) -> SessionResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// An in-memory save slot for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    payload: Option<String>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveSlot for MemorySlot {
    fn write(&mut self, payload: &str) -> SessionResult<()> {
        self.payload = Some(payload.to_string());
        Ok(())
    }

    fn read(&self) -> SessionResult<Option<String>> {
        Ok(self.payload.clone())
    }

    fn exists(&self) -> bool {
        self.payload.is_some()
    }
}

/// Serialize the game state into the slot.
pub fn save_game(slot: &mut dyn SaveSlot, state: &GameState) -> SessionResult<()> {
    let payload = serde_json::to_string(state)?;
    slot.write(&payload)
}

/// Deserialize the game state from the slot, or `None` if the slot is
/// empty. The payload is trusted as-is beyond JSON decoding.
pub fn load_game(slot: &dyn SaveSlot) -> SessionResult<Option<GameState>> {
    match slot.read()? {
        Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
        None => Ok(None),
    }
}

/// Whether the slot currently holds a snapshot.
pub fn has_saved_game(slot: &dyn SaveSlot) -> bool {
    slot.exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mw_core::{Action, Character, Class, QuestDraft, Race, StoryDraft, transition};

    fn sample_state() -> GameState {
        let mut state = GameState::default();
        state = transition(
            &state,
            Action::SetCharacter(Character::new("Lyra", Race::Elf, Class::Wizard)),
        );
        state = transition(&state, Action::AddStoryEntry(StoryDraft::narration("Hi")));
        state = transition(
            &state,
            Action::AddQuest(QuestDraft::active("Find the amulet", "In the marshes.")),
        );
        state = transition(&state, Action::SetLocation("Riverdale Village".to_string()));
        state
    }

    #[test]
    fn empty_slot_loads_none() {
        let slot = MemorySlot::new();
        assert!(!has_saved_game(&slot));
        assert!(load_game(&slot).unwrap().is_none());
    }

    #[test]
    fn round_trip_through_memory_slot() {
        let state = sample_state();
        let mut slot = MemorySlot::new();
        save_game(&mut slot, &state).unwrap();
        assert!(has_saved_game(&slot));

        let loaded = load_game(&slot).unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn round_trip_through_file_slot() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(dir.path().join("save.json"));
        assert!(!has_saved_game(&slot));

        let state = sample_state();
        save_game(&mut slot, &state).unwrap();
        assert!(has_saved_game(&slot));

        let loaded = load_game(&slot).unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn file_slot_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(dir.path().join("nested/deep/save.json"));
        save_game(&mut slot, &GameState::default()).unwrap();
        assert!(slot.exists());
    }

    #[test]
    fn missing_file_loads_none() {
        let slot = FileSlot::new("/nonexistent/definitely/save.json");
        assert!(load_game(&slot).unwrap().is_none());
    }

    #[test]
    fn corrupt_payload_is_an_error() {
        let mut slot = MemorySlot::new();
        slot.write("not json").unwrap();
        assert!(load_game(&slot).is_err());
    }

    #[test]
    fn overwrite_replaces_snapshot() {
        let mut slot = MemorySlot::new();
        save_game(&mut slot, &GameState::default()).unwrap();
        let state = sample_state();
        save_game(&mut slot, &state).unwrap();
        assert_eq!(load_game(&slot).unwrap().unwrap(), state);
    }
}
