//! Interactive dungeon-master session.
//!
//! `GameSession` owns the authoritative [`GameState`] and a save slot. All
//! state changes go through [`mw_core::transition`]; the session itself
//! never edits state fields. Player input is dispatched as commands, and
//! anything that isn't a command is treated as a free-text action for the
//! narrator to answer.

use mw_core::story::{export_markdown, export_text};
use mw_core::{
    Action, Character, GameState, QuestDraft, QuestId, QuestPatch, StoryDraft, WorldTheme,
    transition,
};
use mw_mechanics::{Die, check};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::narrator;
use crate::save::{SaveSlot, has_saved_game, load_game, save_game};

/// An interactive dungeon-master session.
pub struct GameSession<S: SaveSlot> {
    state: GameState,
    rng: StdRng,
    slot: S,
}

impl<S: SaveSlot> GameSession<S> {
    /// Start a fresh adventure with the given character and theme.
    ///
    /// Dispatches the character and theme into a new state and opens the
    /// story with a welcome narration.
    pub fn new(
        character: Character,
        theme: WorldTheme,
        config: SessionConfig,
        slot: S,
    ) -> Self {
        let mut session = Self {
            state: GameState::default(),
            rng: make_rng(config),
            slot,
        };
        let opening = narrator::narrate_opening(&character, theme);
        session.dispatch(Action::SetCharacter(character));
        session.dispatch(Action::SetWorldTheme(theme));
        session.dispatch(Action::AddStoryEntry(StoryDraft::narration(opening)));
        session
    }

    /// Resume the adventure stored in the slot.
    ///
    /// Fails with [`SessionError::NoSavedGame`] when the slot is empty.
    pub fn resume(config: SessionConfig, slot: S) -> SessionResult<Self> {
        let loaded = load_game(&slot)?.ok_or(SessionError::NoSavedGame)?;
        let mut session = Self {
            state: GameState::default(),
            rng: make_rng(config),
            slot,
        };
        session.dispatch(Action::LoadGame(loaded));
        Ok(session)
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the slot holds a saved game.
    pub fn has_save(&self) -> bool {
        has_saved_game(&self.slot)
    }

    fn dispatch(&mut self, action: Action) {
        self.state = transition(&self.state, action);
    }

    /// Process a line of player input and return the response text.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "roll" => self.do_roll(rest),
            "go" | "travel" => self.do_travel(rest),
            "quest" => self.do_quest(rest),
            "quests" => self.do_quest_list(),
            "inventory" | "inv" => self.do_inventory(),
            "log" | "story" => self.do_log(),
            "export" => self.do_export(rest),
            "status" => self.do_status(),
            "save" => self.do_save(),
            "load" => self.do_load(),
            "new" => self.do_new(),
            "help" => Ok(self.do_help(rest)),
            "quit" | "q" => Ok("Farewell, adventurer!".to_string()),
            _ => self.do_player_action(trimmed),
        }
    }

    /// Free text: record the player's action, then narrate a reply.
    fn do_player_action(&mut self, text: &str) -> SessionResult<String> {
        self.dispatch(Action::AddStoryEntry(StoryDraft::player_action(text)));

        let reply = narrator::narrate_action(text, &self.state.current_location, &mut self.rng);
        self.dispatch(Action::AddStoryEntry(StoryDraft::narration(reply.clone())));

        let name = self
            .state
            .character
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("You");
        Ok(format!("{name}: {text}\n\n{reply}"))
    }

    /// `roll <die> [vs <threshold>]`
    fn do_roll(&mut self, rest: &str) -> SessionResult<String> {
        let (die, threshold) = parse_roll(rest)?;
        let outcome = check(die, threshold, &mut self.rng);

        let announcement = narrator::announce_roll(&outcome);
        let followup = narrator::narrate_roll_followup(outcome.success);
        self.dispatch(Action::AddStoryEntry(StoryDraft::narration(
            announcement.clone(),
        )));
        self.dispatch(Action::AddStoryEntry(StoryDraft::narration(followup)));

        Ok(format!("{announcement}\n{followup}"))
    }

    fn do_travel(&mut self, location: &str) -> SessionResult<String> {
        if location.is_empty() {
            return Err(SessionError::InvalidCommand(
                "usage: go <location>".to_string(),
            ));
        }
        self.dispatch(Action::SetLocation(location.to_string()));
        let line = narrator::narrate_travel(location);
        self.dispatch(Action::AddStoryEntry(StoryDraft::narration(line.clone())));
        Ok(line)
    }

    /// `quest add <title> [-- <description>]` and
    /// `quest start|done|drop <title or number>`
    fn do_quest(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match sub.as_str() {
            "add" if !arg.is_empty() => {
                let (title, description) = match arg.split_once("--") {
                    Some((t, d)) => (t.trim(), d.trim()),
                    None => (arg, ""),
                };
                self.dispatch(Action::AddQuest(QuestDraft::active(title, description)));
                Ok(format!("Quest added: {title}"))
            }
            "start" if !arg.is_empty() => {
                let id = self.find_quest(arg)?;
                self.dispatch(Action::UpdateQuest {
                    id,
                    patch: QuestPatch::started(),
                });
                Ok(format!("Quest started: {arg}"))
            }
            "done" if !arg.is_empty() => {
                let id = self.find_quest(arg)?;
                self.dispatch(Action::UpdateQuest {
                    id,
                    patch: QuestPatch::completed(),
                });
                Ok(format!("Quest completed: {arg}"))
            }
            "drop" if !arg.is_empty() => {
                let id = self.find_quest(arg)?;
                self.dispatch(Action::UpdateQuest {
                    id,
                    patch: QuestPatch::abandoned(),
                });
                Ok(format!("Quest shelved: {arg}"))
            }
            _ => Err(SessionError::InvalidCommand(
                "usage: quest add|start|done|drop <title>".to_string(),
            )),
        }
    }

    /// Resolve a quest reference: a 1-based number or a title.
    fn find_quest(&self, reference: &str) -> SessionResult<QuestId> {
        if let Ok(index) = reference.parse::<usize>()
            && index >= 1
            && let Some(quest) = self.state.quests.get(index - 1)
        {
            return Ok(quest.id);
        }
        self.state
            .quests
            .iter()
            .find(|q| q.title.eq_ignore_ascii_case(reference))
            .map(|q| q.id)
            .ok_or_else(|| SessionError::QuestNotFound(reference.to_string()))
    }

    fn do_quest_list(&self) -> SessionResult<String> {
        if self.state.quests.is_empty() {
            return Ok("No quests in your log yet.".to_string());
        }
        let mut out = format!("Quest log ({}):\n", self.state.quests.len());
        for (i, quest) in self.state.quests.iter().enumerate() {
            let marker = if quest.is_completed {
                "done"
            } else if quest.is_active {
                "active"
            } else {
                "pending"
            };
            out.push_str(&format!("  {}. {} [{marker}]", i + 1, quest.title));
            if !quest.description.is_empty() {
                out.push_str(&format!(" — {}", quest.description));
            }
            out.push('\n');
        }
        Ok(out.trim_end().to_string())
    }

    fn do_inventory(&self) -> SessionResult<String> {
        let items = self
            .state
            .character
            .as_ref()
            .map(|c| c.inventory.as_slice())
            .unwrap_or(&[]);
        if items.is_empty() {
            return Ok("Your inventory is empty.".to_string());
        }
        let mut out = format!("Inventory ({} stacks):\n", items.len());
        for item in items {
            out.push_str(&format!(
                "  {} x{} ({}) — {}\n",
                item.name, item.quantity, item.kind, item.description
            ));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_log(&self) -> SessionResult<String> {
        if self.state.story_log.is_empty() {
            return Ok("The story has not begun.".to_string());
        }
        let entries = &self.state.story_log;
        let start = entries.len().saturating_sub(10);
        let recent = &entries[start..];

        let mut out = format!(
            "Story so far ({} entries, showing last {}):\n\n",
            entries.len(),
            recent.len()
        );
        out.push_str(&export_text(recent));
        Ok(out.trim_end().to_string())
    }

    fn do_export(&self, format: &str) -> SessionResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(export_markdown(&self.state.story_log)),
            "text" | "txt" => Ok(export_text(&self.state.story_log)),
            other => Err(SessionError::InvalidCommand(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn do_status(&self) -> SessionResult<String> {
        let mut out = String::new();
        match &self.state.character {
            Some(c) => out.push_str(&format!("Character: {c}\n")),
            None => out.push_str("No character yet.\n"),
        }
        match self.state.world_theme {
            Some(theme) => out.push_str(&format!("World: {theme}\n")),
            None => out.push_str("World: undecided\n"),
        }
        out.push_str(&format!("Location: {}\n", self.state.current_location));
        let completed = self
            .state
            .quests
            .iter()
            .filter(|q| q.is_completed)
            .count();
        out.push_str(&format!(
            "Quests: {} ({completed} completed)\n",
            self.state.quests.len()
        ));
        out.push_str(&format!("Story: {} entries\n", self.state.story_log.len()));
        out.push_str(if self.state.is_saved {
            "Progress is saved."
        } else {
            "Unsaved progress."
        });
        Ok(out)
    }

    fn do_save(&mut self) -> SessionResult<String> {
        // Persist the snapshot with the saved flag already set, so a later
        // load restores a state that matches its slot.
        let snapshot = transition(&self.state, Action::SetSaved(true));
        save_game(&mut self.slot, &snapshot)?;
        self.state = snapshot;
        Ok("Game saved.".to_string())
    }

    fn do_load(&mut self) -> SessionResult<String> {
        let loaded = load_game(&self.slot)?.ok_or(SessionError::NoSavedGame)?;
        self.dispatch(Action::LoadGame(loaded));
        Ok("Game loaded.".to_string())
    }

    fn do_new(&mut self) -> SessionResult<String> {
        self.dispatch(Action::ResetGame);
        Ok("The slate is wiped clean. A new adventure awaits.".to_string())
    }

    fn do_help(&self, topic: &str) -> String {
        match topic.to_lowercase().as_str() {
            "roll" | "dice" => "\
Dice Commands:
  roll <die>            Roll a die (d4, d6, d8, d10, d12, d20, d100)
  roll <die> vs <n>     Roll against a threshold; success at or above n"
                .to_string(),
            "quest" | "quests" => "\
Quest Commands:
  quest add <title> [-- <description>]   Add an active quest
  quest start <title or #>               Mark a quest active
  quest done <title or #>                Mark a quest completed
  quest drop <title or #>                Shelve a quest
  quests                                 List the quest log"
                .to_string(),
            "save" | "load" => "\
Save Commands:
  save                  Write the adventure to the save slot
  load                  Replace the adventure with the saved one
  new                   Reset to a blank adventure"
                .to_string(),
            _ => "\
Mythweaver Commands:
  <anything else>       Act, and the dungeon master responds
  roll <die> [vs <n>]   Roll dice, optionally against a threshold
  go <location>         Travel somewhere new
  quest ...             Manage quests (help quest)
  quests                List the quest log
  inventory             Show carried items
  log                   Show recent story entries
  export [markdown|text] Export the full story
  status                Show the adventure's state
  save / load / new     Manage the save slot
  help [topic]          Show help (roll, quest, save)
  quit                  End the session"
                .to_string(),
        }
    }
}

fn make_rng(config: SessionConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Parse `"<die> [vs <threshold>]"`.
fn parse_roll(rest: &str) -> SessionResult<(Die, Option<u32>)> {
    if rest.is_empty() {
        return Err(SessionError::InvalidCommand(
            "usage: roll <die> [vs <threshold>]".to_string(),
        ));
    }
    let mut words = rest.split_whitespace();
    let die_word = words.next().unwrap_or("");
    let die = Die::parse(die_word).ok_or_else(|| SessionError::UnknownDie(die_word.to_string()))?;

    let threshold = match (words.next(), words.next()) {
        (None, _) => None,
        (Some("vs"), Some(n)) => Some(n.parse::<u32>().map_err(|_| {
            SessionError::InvalidCommand(format!("threshold must be a number, got '{n}'"))
        })?),
        _ => {
            return Err(SessionError::InvalidCommand(
                "usage: roll <die> [vs <threshold>]".to_string(),
            ));
        }
    };
    Ok((die, threshold))
}
