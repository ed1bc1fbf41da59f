use colored::Colorize;

use mw_mechanics::{Die, check};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(die: &str, vs: Option<u32>, seed: Option<u64>) -> Result<(), String> {
    let die = Die::parse(die)
        .ok_or_else(|| format!("unknown die: {die} (use d4, d6, d8, d10, d12, d20, d100)"))?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let outcome = check(die, vs, &mut rng);
    match outcome.threshold {
        Some(_) if outcome.success => println!("  {}", outcome.to_string().green()),
        Some(_) => println!("  {}", outcome.to_string().red()),
        None => println!("  {outcome}"),
    }
    Ok(())
}
