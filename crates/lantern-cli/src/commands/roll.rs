use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use lantern_mechanics::{Attribute, Attributes, Tier, resolve_check};

pub fn run(
    score: Option<i32>,
    attribute: Option<&str>,
    modifier: i32,
    difficulty: i32,
    seed: Option<u64>,
) -> Result<(), String> {
    let attribute = attribute
        .map(str::parse::<Attribute>)
        .transpose()
        .map_err(|e| e.to_string())?;
    let score = match (score, attribute) {
        (Some(score), _) => score,
        (None, Some(attribute)) => Attributes::default().get(attribute),
        (None, None) => return Err("provide --score or --attribute".into()),
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let check = resolve_check(&mut rng, score, modifier, difficulty);
    let tier = match check.tier {
        Tier::FullSuccess => check.tier.label().green().bold(),
        Tier::PartialSuccess => check.tier.label().yellow().bold(),
        Tier::Fail => check.tier.label().red().bold(),
    };

    match attribute {
        Some(attribute) => println!("  {} {attribute} ({score}) vs {difficulty}", "Rolling".bold()),
        None => println!("  {} score {score} vs {difficulty}", "Rolling".bold()),
    }
    println!("  {check}");
    println!("  {tier}");

    Ok(())
}
