use super::role::Role;
use super::tightness::Tightness;
use crate::cards::Hand;
use crate::cards::Universe;
use crate::range::Expansion;

/// A reference range for one (role, tightness) pair.
///
/// Expanded once from its shorthand and never mutated. `bounds` caches the
/// strength ranks of the strongest and weakest member.
#[derive(Debug, Clone)]
pub struct Profile {
    role: Role,
    tightness: Tightness,
    shorthand: String,
    hands: Vec<Hand>,
    bounds: Option<(usize, usize)>,
}

impl Profile {
    pub fn new(role: Role, tightness: Tightness, shorthand: &str, universe: &Universe) -> Self {
        let expansion = Expansion::compound(shorthand);
        for warning in expansion.warnings() {
            log::warn!("{:<8}{:<10}{}", role, tightness, warning);
        }
        let hands = expansion.into_hands();
        let bounds = hands
            .first()
            .zip(hands.last())
            .map(|(strongest, weakest)| (universe.rank(strongest), universe.rank(weakest)));
        Self {
            role,
            tightness,
            shorthand: shorthand.to_string(),
            hands,
            bounds,
        }
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn tightness(&self) -> Tightness {
        self.tightness
    }
    pub fn shorthand(&self) -> &str {
        &self.shorthand
    }
    /// Members, strongest first.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }
    /// (strongest rank, weakest rank), `None` when the profile is empty.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        self.bounds
    }
    pub fn contains(&self, hand: &Hand) -> bool {
        self.hands.binary_search(hand).is_ok()
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", crate::range::render(&self.hands))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_members() {
        let ref universe = Universe::new();
        let profile = Profile::new(Role::Oop, Tightness::Tight, "TT+,AQs+", universe);
        assert_eq!(profile.hands().len(), 7);
        assert_eq!(profile.bounds(), Some((0, universe.lookup("TT").unwrap())));
        assert!(profile.contains(&Hand::try_from("AQs").unwrap()));
        assert!(!profile.contains(&Hand::try_from("AQo").unwrap()));
    }

    #[test]
    fn empty_profile_has_no_bounds() {
        let ref universe = Universe::new();
        let profile = Profile::new(Role::Ip, Tightness::Loose, "bogus", universe);
        assert!(profile.hands().is_empty());
        assert_eq!(profile.bounds(), None);
    }
}
