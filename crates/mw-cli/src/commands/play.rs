use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use mw_core::{Character, Class, Race, WorldTheme};
use mw_session::names;
use mw_session::{FileSlot, GameSession, SessionConfig};

pub fn run(
    name: Option<&str>,
    race: Option<&str>,
    class: Option<&str>,
    theme: Option<&str>,
    resume: bool,
    save: &Path,
    seed: Option<u64>,
) -> Result<(), String> {
    let mut config = SessionConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let slot = FileSlot::new(save);

    let mut session = if resume {
        GameSession::resume(config, slot).map_err(|e| e.to_string())?
    } else {
        let (character, theme) = build_character(name, race, class, theme)?;
        GameSession::new(character, theme, config, slot)
    };

    println!("  {} Mythweaver", "Starting".bold());
    if let Some(character) = &session.state().character {
        println!("  {character}");
    }
    if let Some(theme) = session.state().world_theme {
        println!("  World: {theme}");
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    if let Some(opening) = session.state().story_log.last() {
        println!("{}\n", opening.text);
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}

/// Assemble the character and theme from flags, rolling random picks for
/// anything omitted.
fn build_character(
    name: Option<&str>,
    race: Option<&str>,
    class: Option<&str>,
    theme: Option<&str>,
) -> Result<(Character, WorldTheme), String> {
    let mut rng = rand::rng();

    let race = match race {
        Some(s) => Race::parse(s).ok_or_else(|| format!("unknown race: {s}"))?,
        None => names::random_race(&mut rng),
    };
    let class = match class {
        Some(s) => Class::parse(s).ok_or_else(|| format!("unknown class: {s}"))?,
        None => names::random_class(&mut rng),
    };
    let theme = match theme {
        Some(s) => WorldTheme::parse(s).ok_or_else(|| format!("unknown theme: {s}"))?,
        None => names::random_theme(&mut rng),
    };
    let name = match name {
        Some(s) => s.to_string(),
        None => names::random_name(race, &mut rng).to_string(),
    };

    let mut character = Character::new(name, race, class);
    character.stats = Some(names::roll_stats(&mut rng));
    Ok((character, theme))
}
