//! CLI frontend for the Mythweaver dungeon-master shell.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mw",
    about = "Mythweaver — a terminal dungeon master",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start or continue an adventure
    Play {
        /// Character name (drawn from the race's name table when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Character race: human, elf, dwarf, halfling, orc, gnome
        #[arg(short, long)]
        race: Option<String>,

        /// Character class: warrior, wizard, rogue, cleric, ranger, bard
        #[arg(short, long)]
        class: Option<String>,

        /// World theme: medieval, dark-fantasy, high-magic, wilderness
        #[arg(short, long)]
        theme: Option<String>,

        /// Continue from the save slot instead of starting fresh
        #[arg(long = "continue")]
        resume: bool,

        /// Save slot file
        #[arg(short, long, default_value = "mythweaver-save.json")]
        save: PathBuf,

        /// RNG seed for reproducible dice and narration
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Roll a die, optionally against a success threshold
    Roll {
        /// The die to roll: d4, d6, d8, d10, d12, d20, d100
        die: String,

        /// Succeed when the roll is at or above this value
        #[arg(long)]
        vs: Option<u32>,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Inspect the adventure stored in a save slot
    Status {
        /// Save slot file
        #[arg(short, long, default_value = "mythweaver-save.json")]
        save: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            name,
            race,
            class,
            theme,
            resume,
            save,
            seed,
        } => commands::play::run(
            name.as_deref(),
            race.as_deref(),
            class.as_deref(),
            theme.as_deref(),
            resume,
            &save,
            seed,
        ),
        Commands::Roll { die, vs, seed } => commands::roll::run(&die, vs, seed),
        Commands::Status { save } => commands::status::run(&save),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
