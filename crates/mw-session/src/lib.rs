//! Interactive dungeon-master session for Mythweaver.
//!
//! Ties the core state machine to the player: a scripted narrator that
//! answers free-text actions from a closed template list, dice commands,
//! quest and inventory commands, and a single-slot save system behind an
//! injectable storage trait.

/// Session configuration.
pub mod config;
/// Error types for the session layer.
pub mod error;
/// Random character generation tables.
pub mod names;
/// The scripted dungeon master.
pub mod narrator;
/// The save slot and its storage backends.
pub mod save;
/// The interactive session and command dispatch.
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use save::{FileSlot, MemorySlot, SaveSlot, has_saved_game, load_game, save_game};
pub use session::GameSession;
