pub mod augmented;
pub mod gamestate;
pub mod preferences;

pub use augmented::*;
pub use gamestate::*;
pub use preferences::*;

use crate::Context;
use crate::perturb::Perturbation;
use crate::perturb::PerturbedRange;
use crate::profile::Role;
use crate::profile::Selection;
use rand::Rng;

/// Fresh ranges for both seats of a gamestate.
///
/// The hero's profile is chosen adaptively from its preferred tightness,
/// perturbed, then forced to contain the hero's hand. The villain's profile
/// is taken at its preferred tightness and only perturbed.
pub fn augment<R: Rng>(
    context: &Context,
    gamestate: &Gamestate,
    preferences: &Preferences,
    selection: &Selection,
    perturbation: &Perturbation,
    rng: &mut R,
) -> anyhow::Result<Augmented> {
    let hand = gamestate.hand();
    let ranges = Role::all().map(|role| -> anyhow::Result<PerturbedRange> {
        let initial = preferences.get(role);
        let profile = match role == gamestate.hero() {
            true => selection.select(context.universe(), context.catalog(), &hand, role, initial),
            false => context.catalog().profile(role, initial),
        };
        let hands = context.perturb(profile.hands(), perturbation, rng)?;
        let range = PerturbedRange::new(profile, hands);
        Ok(match role == gamestate.hero() {
            true => range.ensure(&hand),
            false => range,
        })
    });
    let [oop, ip] = ranges;
    let (oop, ip) = (oop?, ip?);
    log::debug!(
        "{:<24}OOP {:<10}{:>4}  IP {:<10}{:>4}",
        gamestate.to_string(),
        oop.tightness(),
        oop.final_count(),
        ip.tightness(),
        ip.final_count(),
    );
    Ok(Augmented::new(*gamestate, oop, ip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;
    use crate::profile::Tightness;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn run(position: &str, holding: &str, preferences: Preferences, seed: u64) -> Augmented {
        let ref context = Context::new();
        let ref game = Gamestate::parse(position, holding).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(seed);
        augment(
            context,
            game,
            &preferences,
            &Selection::default(),
            &Perturbation::default(),
            rng,
        )
        .unwrap()
    }

    #[test]
    fn hero_holding_always_present() {
        let ref context = Context::new();
        for (position, holding) in [("IP", "AhKd"), ("OOP", "7h2c"), ("IP", "2c2d"), ("OOP", "9s8s")] {
            let ref game = Gamestate::parse(position, holding).unwrap();
            for seed in 0..64 {
                let ref mut rng = SmallRng::seed_from_u64(seed);
                let preferences = Preferences::sample(rng);
                let augmented = augment(
                    context,
                    game,
                    &preferences,
                    &Selection::default(),
                    &Perturbation::default(),
                    rng,
                )
                .unwrap();
                assert!(augmented.hero().contains(&game.hand()));
            }
        }
    }

    #[test]
    fn in_position_ace_king_offsuit() {
        let augmented = run("IP", "AhKd", Preferences::default(), 5);
        assert!(augmented.ip_range_str().split(',').any(|h| h == "AKo"));
        assert!(!augmented.oop_range_str().is_empty());
    }

    #[test]
    fn trash_hand_loosens_hero_only() {
        let preferences = Preferences::new(Tightness::Balanced, Tightness::Tight);
        let augmented = run("OOP", "7d2s", preferences, 17);
        assert_eq!(augmented.oop_range_type_selected(), Tightness::Loose);
        assert_eq!(augmented.ip_range_type_selected(), Tightness::Tight);
        assert!(augmented.hero().contains(&Hand::try_from("72o").unwrap()));
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let a = run("OOP", "QsJs", Preferences::default(), 99);
        let b = run("OOP", "QsJs", Preferences::default(), 99);
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_perturbation_fails() {
        let ref context = Context::new();
        let ref game = Gamestate::parse("IP", "AhKd").unwrap();
        let bad = Perturbation {
            addition: -0.5,
            ..Perturbation::default()
        };
        let ref mut rng = SmallRng::seed_from_u64(0);
        let result = augment(context, game, &Preferences::default(), &Selection::default(), &bad, rng);
        assert!(result.is_err());
    }
}
