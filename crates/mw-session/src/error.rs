//! Error types for the session layer.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur during a dungeon-master session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Malformed input for a command.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// A named die is not one of the supported dice.
    #[error("unknown die: {0} (use d4, d6, d8, d10, d12, d20, d100)")]
    UnknownDie(String),

    /// A quest reference did not match any quest in the log.
    #[error("no such quest: {0}")]
    QuestNotFound(String),

    /// There is no saved game in the slot.
    #[error("no saved game found")]
    NoSavedGame,

    /// The save slot could not be read or written.
    #[error("save slot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted snapshot could not be decoded.
    #[error("corrupt save data: {0}")]
    Corrupt(#[from] serde_json::Error),
}
