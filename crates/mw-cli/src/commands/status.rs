use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use mw_session::{FileSlot, load_game};

pub fn run(save: &Path) -> Result<(), String> {
    let slot = FileSlot::new(save);
    let state = load_game(&slot)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("no saved game at {}", save.display()))?;

    let mut rows: Vec<(String, String)> = Vec::new();
    match &state.character {
        Some(c) => {
            rows.push(("Character".into(), c.name.clone()));
            rows.push(("Race".into(), c.race.to_string()));
            rows.push(("Class".into(), c.class.to_string()));
            rows.push(("Items".into(), c.inventory.len().to_string()));
        }
        None => rows.push(("Character".into(), "none".into())),
    }
    rows.push((
        "World".into(),
        state
            .world_theme
            .map(|t| t.to_string())
            .unwrap_or_else(|| "undecided".to_string()),
    ));
    rows.push(("Location".into(), state.current_location.clone()));
    rows.push(("Story entries".into(), state.story_log.len().to_string()));
    let completed = state.quests.iter().filter(|q| q.is_completed).count();
    rows.push((
        "Quests".into(),
        format!("{} ({completed} completed)", state.quests.len()),
    ));
    rows.push((
        "Saved".into(),
        if state.is_saved { "yes" } else { "no" }.into(),
    ));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field".to_string(), "Value".to_string()]);
    for (field, value) in rows {
        table.add_row(vec![field, value]);
    }
    println!("{table}");

    if !state.quests.is_empty() {
        println!();
        for quest in &state.quests {
            let marker = if quest.is_completed {
                "done".green()
            } else if quest.is_active {
                "active".yellow()
            } else {
                "pending".dimmed()
            };
            println!("  [{marker}] {}", quest.title);
        }
    }

    Ok(())
}
