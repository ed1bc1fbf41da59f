//! Random character generation tables.

use mw_core::{Character, Class, Race, StatBlock, WorldTheme};
use mw_mechanics::Die;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a fitting name for a race.
pub fn random_name(race: Race, rng: &mut impl Rng) -> &'static str {
    let names: &[&str] = match race {
        Race::Human => &["Aldric", "Eleanor", "Rowan", "Lyra", "Gareth", "Isolde"],
        Race::Elf => &[
            "Thranduil",
            "Arwen",
            "Legolas",
            "Tauriel",
            "Elrond",
            "Galadriel",
        ],
        Race::Dwarf => &["Thorin", "Gimli", "Dwalin", "Balin", "Thrain", "Bombur"],
        Race::Halfling => &["Frodo", "Bilbo", "Samwise", "Pippin", "Merry", "Rosie"],
        Race::Orc => &["Grakk", "Urgoth", "Mogra", "Zorka", "Thulg", "Durgash"],
        Race::Gnome => &["Fizben", "Tinkle", "Sparkle", "Fidget", "Gadget", "Sprocket"],
    };
    names.choose(rng).copied().unwrap_or("Adventurer")
}

/// Pick a random race.
pub fn random_race(rng: &mut impl Rng) -> Race {
    *Race::ALL.choose(rng).unwrap_or(&Race::Human)
}

/// Pick a random class.
pub fn random_class(rng: &mut impl Rng) -> Class {
    *Class::ALL.choose(rng).unwrap_or(&Class::Warrior)
}

/// Pick a random world theme.
pub fn random_theme(rng: &mut impl Rng) -> WorldTheme {
    *WorldTheme::ALL.choose(rng).unwrap_or(&WorldTheme::Medieval)
}

/// Roll up a whole character: random race, class, and a name to match.
pub fn random_character(rng: &mut impl Rng) -> Character {
    let race = random_race(rng);
    let class = random_class(rng);
    Character::new(random_name(race, rng), race, class)
}

/// Roll 3d6 for each of the six attributes.
pub fn roll_stats(rng: &mut impl Rng) -> StatBlock {
    StatBlock {
        strength: three_d6(rng),
        dexterity: three_d6(rng),
        constitution: three_d6(rng),
        intelligence: three_d6(rng),
        wisdom: three_d6(rng),
        charisma: three_d6(rng),
    }
}

fn three_d6(rng: &mut impl Rng) -> u32 {
    (0..3).map(|_| Die::D6.roll(rng)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn name_matches_race_table() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let name = random_name(Race::Dwarf, &mut rng);
            assert!(
                ["Thorin", "Gimli", "Dwalin", "Balin", "Thrain", "Bombur"].contains(&name)
            );
        }
    }

    #[test]
    fn random_character_is_complete() {
        let mut rng = StdRng::seed_from_u64(8);
        let character = random_character(&mut rng);
        assert!(!character.name.is_empty());
        assert!(character.inventory.is_empty());
    }

    #[test]
    fn rolled_stats_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..50 {
            let stats = roll_stats(&mut rng);
            for value in [
                stats.strength,
                stats.dexterity,
                stats.constitution,
                stats.intelligence,
                stats.wisdom,
                stats.charisma,
            ] {
                assert!((3..=18).contains(&value));
            }
        }
    }

    #[test]
    fn draws_are_deterministic_under_seed() {
        let mut a = StdRng::seed_from_u64(21);
        let mut b = StdRng::seed_from_u64(21);
        assert_eq!(random_character(&mut a), random_character(&mut b));
        assert_eq!(random_theme(&mut a), random_theme(&mut b));
    }
}
