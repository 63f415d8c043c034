//! Preflop range generation for heads-up solver inputs.
//!
//! Expands range shorthand over the 169 starting hands, ranks them by
//! strength, picks a reference profile suited to the hero's holding and
//! perturbs it into a fresh range per call.
pub mod augment;
pub mod cards;
pub mod context;
pub mod perturb;
pub mod profile;
pub mod range;

pub use context::Context;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Retention and addition probabilities, and caps as fractions of a base range.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation from an explicit rng stream.
pub trait Arbitrary {
    fn random<R: rand::Rng>(rng: &mut R) -> Self;
}

// ============================================================================
// HAND UNIVERSE
// ============================================================================
/// 13 pairs, 78 suited and 78 offsuit combinations.
pub const N_HANDS: usize = 169;

// ============================================================================
// ADAPTIVE SELECTION
// ============================================================================
/// Ranks past a profile's weakest member before the hero counts as too weak.
pub const WEAKNESS_OFFSET: usize = 10;
/// Ranks ahead of a profile's strongest member before the hero counts as too strong.
pub const STRENGTH_OFFSET: usize = 10;

// ============================================================================
// PERTURBATION
// ============================================================================
/// Chance each base hand survives the removal pass.
pub const RETAIN_PROBABILITY: Probability = 0.90;
/// Most hands dropped, as a fraction of the base size.
pub const REMOVAL_CAP: Probability = 0.20;
/// Radius in strength ranks within which neighbors become candidates.
pub const NEIGHBOR_WINDOW: usize = 7;
/// Addition chance for a stronger neighbor.
pub const STRONGER_NEIGHBOR_PROBABILITY: Probability = 0.10;
/// Addition chance for a weaker neighbor.
pub const WEAKER_NEIGHBOR_PROBABILITY: Probability = 0.08;
/// Most hands added, as a fraction of the base size.
pub const ADDITION_CAP: Probability = 0.20;

/// Independent rng stream for the `index`th record of a batch seeded with `seed`.
pub fn stream(seed: u64, index: usize) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    use std::hash::Hash;
    use std::hash::Hasher;
    let ref mut hasher = std::hash::DefaultHasher::new();
    seed.hash(hasher);
    index.hash(hasher);
    rand::rngs::SmallRng::seed_from_u64(hasher.finish())
}

/// Terminal logging on stderr, leaving stdout for records.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn streams_are_reproducible() {
        let a = stream(7, 3).random::<u64>();
        let b = stream(7, 3).random::<u64>();
        let c = stream(7, 4).random::<u64>();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
