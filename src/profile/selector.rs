use super::catalog::Catalog;
use super::profile::Profile;
use super::role::Role;
use super::tightness::Tightness;
use crate::cards::Hand;
use crate::cards::Universe;
use crate::STRENGTH_OFFSET;
use crate::WEAKNESS_OFFSET;

/// Adaptive choice of a reference profile for the hero's actual hand.
///
/// Starting from a preferred tightness, the selector walks toward looser
/// profiles while the hero is materially weaker than the profile's weakest
/// member, and toward tighter ones while the hero is materially stronger than
/// its strongest member. "Materially" is the corresponding offset, measured in
/// strength ranks.
///
/// The walk visits at most one profile per tightness level, so it always
/// terminates within `Tightness::all().len()` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub weakness_offset: usize,
    pub strength_offset: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            weakness_offset: WEAKNESS_OFFSET,
            strength_offset: STRENGTH_OFFSET,
        }
    }
}

impl Selection {
    pub fn new(weakness_offset: usize, strength_offset: usize) -> Self {
        Self {
            weakness_offset,
            strength_offset,
        }
    }

    /// The profile the walk settles on.
    pub fn select<'a>(
        &self,
        universe: &Universe,
        catalog: &'a Catalog,
        hero: &Hand,
        role: Role,
        initial: Tightness,
    ) -> &'a Profile {
        let tightness = self
            .path(universe, catalog, hero, role, initial)
            .last()
            .copied()
            .unwrap_or(initial);
        catalog.profile(role, tightness)
    }

    /// Every tightness level visited, starting with `initial`.
    pub fn path(
        &self,
        universe: &Universe,
        catalog: &Catalog,
        hero: &Hand,
        role: Role,
        initial: Tightness,
    ) -> Vec<Tightness> {
        let rank = universe.rank(hero);
        let mut path = vec![initial];
        let mut tightness = initial;
        for _ in 0..Tightness::all().len() {
            let bounds = catalog.profile(role, tightness).bounds();
            let next = match bounds {
                // nothing to bracket the hero; widen
                None => tightness.looser(),
                Some((_, max)) if rank > max + self.weakness_offset => tightness.looser(),
                Some((min, _)) if rank + self.strength_offset < min => tightness.tighter(),
                Some(_) => None,
            };
            match next {
                Some(t) => {
                    log::debug!("{:<8}{:<6}{:<10}-> {}", role, hero, tightness, t);
                    tightness = t;
                    path.push(t);
                }
                None => break,
            }
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    #[test]
    fn trash_oop_balanced_moves_loose() {
        let ref universe = Universe::new();
        let ref catalog = Catalog::new(universe);
        let profile = Selection::default().select(universe, catalog, &hand("72o"), Role::Oop, Tightness::Balanced);
        assert_eq!(profile.tightness(), Tightness::Loose);
        assert_eq!(profile.role(), Role::Oop);
    }

    #[test]
    fn fitting_hand_stays_put() {
        let ref universe = Universe::new();
        let ref catalog = Catalog::new(universe);
        let selection = Selection::default();
        for t in Tightness::all() {
            let profile = selection.select(universe, catalog, &hand("AKo"), Role::Ip, t);
            assert_eq!(profile.tightness(), t);
        }
    }

    #[test]
    fn stops_at_loosest() {
        let ref universe = Universe::new();
        let ref catalog = Catalog::new(universe);
        let path = Selection::default().path(universe, catalog, &hand("22"), Role::Oop, Tightness::Tight);
        assert_eq!(path, [Tightness::Tight, Tightness::Balanced, Tightness::Loose]);
    }

    #[test]
    fn strong_hero_moves_tighter() {
        let ref universe = Universe::new();
        let table = [
            (Role::Oop, Tightness::Tight, "AA,KK"),
            (Role::Oop, Tightness::Balanced, "77-22"),
            (Role::Oop, Tightness::Loose, "22"),
        ];
        let ref catalog = Catalog::from_table(&table, universe);
        let path = Selection::default().path(universe, catalog, &hand("AA"), Role::Oop, Tightness::Loose);
        assert_eq!(path, [Tightness::Loose, Tightness::Balanced, Tightness::Tight]);
    }

    #[test]
    fn offsets_widen_the_bracket() {
        let ref universe = Universe::new();
        let ref catalog = Catalog::new(universe);
        let lenient = Selection::new(100, 100);
        let profile = lenient.select(universe, catalog, &hand("72o"), Role::Oop, Tightness::Balanced);
        assert_eq!(profile.tightness(), Tightness::Balanced);
        let strict = Selection::new(0, 0);
        let profile = strict.select(universe, catalog, &hand("87o"), Role::Oop, Tightness::Tight);
        assert_eq!(profile.tightness(), Tightness::Loose);
    }

    #[test]
    fn always_terminates() {
        let ref universe = Universe::new();
        let ref catalog = Catalog::new(universe);
        let selection = Selection::default();
        for hero in universe.hands() {
            for role in Role::all() {
                for t in Tightness::all() {
                    let path = selection.path(universe, catalog, hero, role, t);
                    assert!(path.len() <= Tightness::all().len());
                }
            }
        }
    }

    #[test]
    fn empty_profiles_widen() {
        let ref universe = Universe::new();
        let table = [(Role::Ip, Tightness::Loose, "AA")];
        let ref catalog = Catalog::from_table(&table, universe);
        let profile = Selection::default().select(universe, catalog, &hand("AA"), Role::Ip, Tightness::Tight);
        assert_eq!(profile.tightness(), Tightness::Loose);
    }
}
