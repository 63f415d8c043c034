//! Range Augmentation Binary
//!
//! Generates fresh solver ranges for a hero's seat and holding, one JSON
//! record per line on stdout.

use clap::Parser;
use rangegen::augment::*;
use rangegen::perturb::Perturbation;
use rangegen::profile::Selection;
use rangegen::profile::Tightness;
use rangegen::range::expand_all;
use rangegen::*;
use rayon::prelude::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "Hero position, OOP or IP", required_unless_present = "expand")]
    position: Option<String>,
    #[arg(long, help = "Hero hole cards, e.g. AhKd", required_unless_present = "expand")]
    holding: Option<String>,
    #[arg(long, help = "Initial OOP tightness, random when omitted")]
    oop: Option<String>,
    #[arg(long, help = "Initial IP tightness, random when omitted")]
    ip: Option<String>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    count: usize,
    #[arg(long, default_value_t = WEAKNESS_OFFSET)]
    weakness_offset: usize,
    #[arg(long, default_value_t = STRENGTH_OFFSET)]
    strength_offset: usize,
    #[arg(long, help = "Print the expansion of a compound range and exit")]
    expand: Option<String>,
    #[arg(short, long, help = "Log debug output")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => ::log::LevelFilter::Debug,
        false => ::log::LevelFilter::Info,
    })?;
    match args.expand {
        Some(ref range) => expansion(range),
        None => generate(&args),
    }
}

fn expansion(range: &str) -> anyhow::Result<()> {
    let expansion = expand_all(range);
    for warning in expansion.warnings() {
        ::log::warn!("{}", warning);
    }
    ::log::info!("{:<32}{:<32}", "expanded hands", expansion.hands().len());
    println!("{}", expansion);
    Ok(())
}

fn generate(args: &Args) -> anyhow::Result<()> {
    let position = args.position.as_deref().unwrap_or_default();
    let holding = args.holding.as_deref().unwrap_or_default();
    let ref gamestate = Gamestate::parse(position, holding)?;
    let oop = args.oop.as_deref().map(Tightness::try_from).transpose()?;
    let ip = args.ip.as_deref().map(Tightness::try_from).transpose()?;
    let ref selection = Selection::new(args.weakness_offset, args.strength_offset);
    let ref perturbation = Perturbation::default();
    let ref context = Context::new();
    ::log::info!("{:<32}{:<32}", "generating records", args.count);
    let records = (0..args.count)
        .into_par_iter()
        .map(|i| {
            let ref mut rng = stream(args.seed, i);
            let sampled = Preferences::sample(rng);
            let preferences = Preferences::new(oop.unwrap_or(sampled.oop), ip.unwrap_or(sampled.ip));
            augment(context, gamestate, &preferences, selection, perturbation, rng)
                .and_then(|augmented| Ok(serde_json::to_string(&Record::from(&augmented))?))
                .map_err(|e| ::log::error!("record {} skipped: {}", i, e))
                .ok()
        })
        .collect::<Vec<Option<String>>>();
    let written = records
        .into_iter()
        .flatten()
        .inspect(|line| println!("{}", line))
        .count();
    ::log::info!("{:<32}{:<32}", "records written", written);
    Ok(())
}
