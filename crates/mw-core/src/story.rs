//! The story log: an append-only record of narrative and player events.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a story entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// Generate a new random entry ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What kind of event a story entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    /// Text spoken by the dungeon master.
    Narration,
    /// A line of dialogue from a named speaker.
    Dialog,
    /// A combat event.
    Combat,
    /// Something the player said or did.
    PlayerAction,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Narration => write!(f, "narration"),
            Self::Dialog => write!(f, "dialog"),
            Self::Combat => write!(f, "combat"),
            Self::PlayerAction => write!(f, "player-action"),
        }
    }
}

/// One immutable entry in the story log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryEntry {
    /// Unique identifier.
    pub id: EntryId,
    /// The entry text.
    pub text: String,
    /// What kind of event this is.
    pub kind: EntryKind,
    /// When the entry was created.
    pub timestamp: DateTime<Utc>,
    /// Who is speaking, for dialogue entries.
    pub speaker: Option<String>,
    /// Reference to an illustration for this entry, if any.
    pub image: Option<String>,
}

/// Fields for a story entry about to be appended; the ID and timestamp are
/// generated on append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryDraft {
    /// The entry text.
    pub text: String,
    /// What kind of event this is.
    pub kind: EntryKind,
    /// Who is speaking, for dialogue entries.
    pub speaker: Option<String>,
    /// Reference to an illustration for this entry, if any.
    pub image: Option<String>,
}

impl StoryDraft {
    /// Draft a plain entry of the given kind.
    pub fn new(text: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            text: text.into(),
            kind,
            speaker: None,
            image: None,
        }
    }

    /// Draft a narration entry.
    pub fn narration(text: impl Into<String>) -> Self {
        Self::new(text, EntryKind::Narration)
    }

    /// Draft a player-action entry.
    pub fn player_action(text: impl Into<String>) -> Self {
        Self::new(text, EntryKind::PlayerAction)
    }

    /// Draft a dialogue entry with a named speaker.
    pub fn dialog(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: EntryKind::Dialog,
            speaker: Some(speaker.into()),
            image: None,
        }
    }

    /// Attach an image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Export a story log as markdown.
pub fn export_markdown(log: &[StoryEntry]) -> String {
    let mut out = String::from("# Adventure Log\n\n");
    for entry in log {
        match entry.kind {
            EntryKind::Narration => {
                out.push_str(&entry.text);
                out.push_str("\n\n");
            }
            EntryKind::Dialog => {
                let speaker = entry.speaker.as_deref().unwrap_or("Unknown");
                out.push_str(&format!("**{speaker}**: \"{}\"\n\n", entry.text));
            }
            EntryKind::Combat => {
                out.push_str(&format!("*Combat*: {}\n\n", entry.text));
            }
            EntryKind::PlayerAction => {
                out.push_str(&format!("> {}\n\n", entry.text));
            }
        }
    }
    out
}

/// Export a story log as plain text.
pub fn export_text(log: &[StoryEntry]) -> String {
    let mut out = String::from("Adventure Log\n=============\n\n");
    for entry in log {
        match entry.kind {
            EntryKind::Narration => {
                out.push_str(&entry.text);
                out.push_str("\n\n");
            }
            EntryKind::Dialog => {
                let speaker = entry.speaker.as_deref().unwrap_or("Unknown");
                out.push_str(&format!("{speaker}: \"{}\"\n\n", entry.text));
            }
            EntryKind::Combat => {
                out.push_str(&format!("Combat: {}\n\n", entry.text));
            }
            EntryKind::PlayerAction => {
                out.push_str(&format!("* {}\n\n", entry.text));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(draft: StoryDraft) -> StoryEntry {
        StoryEntry {
            id: EntryId::new(),
            text: draft.text,
            kind: draft.kind,
            timestamp: Utc::now(),
            speaker: draft.speaker,
            image: draft.image,
        }
    }

    #[test]
    fn kind_serializes_kebab_case() {
        let json = serde_json::to_string(&EntryKind::PlayerAction).unwrap();
        assert_eq!(json, "\"player-action\"");
        let back: EntryKind = serde_json::from_str("\"player-action\"").unwrap();
        assert_eq!(back, EntryKind::PlayerAction);
    }

    #[test]
    fn export_markdown_formats_by_kind() {
        let log = vec![
            entry(StoryDraft::narration("A cold wind blows.")),
            entry(StoryDraft::player_action("search the cellar")),
            entry(StoryDraft::dialog("Innkeeper", "We're closed.")),
            entry(StoryDraft::new("A goblin lunges!", EntryKind::Combat)),
        ];
        let md = export_markdown(&log);
        assert!(md.contains("# Adventure Log"));
        assert!(md.contains("A cold wind blows."));
        assert!(md.contains("> search the cellar"));
        assert!(md.contains("**Innkeeper**: \"We're closed.\""));
        assert!(md.contains("*Combat*: A goblin lunges!"));
    }

    #[test]
    fn export_text_formats_by_kind() {
        let log = vec![
            entry(StoryDraft::dialog("Guard", "Halt!")),
            entry(StoryDraft::player_action("run")),
        ];
        let txt = export_text(&log);
        assert!(txt.contains("Guard: \"Halt!\""));
        assert!(txt.contains("* run"));
    }

    #[test]
    fn dialog_draft_carries_speaker() {
        let draft = StoryDraft::dialog("Hooded Figure", "Be careful.");
        assert_eq!(draft.kind, EntryKind::Dialog);
        assert_eq!(draft.speaker.as_deref(), Some("Hooded Figure"));
    }

    #[test]
    fn draft_with_image() {
        let draft = StoryDraft::narration("The gates open.").with_image("gates.png");
        assert_eq!(draft.image.as_deref(), Some("gates.png"));
    }
}
