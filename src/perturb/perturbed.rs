use crate::cards::Hand;
use crate::profile::Profile;
use crate::profile::Role;
use crate::profile::Tightness;

/// A final, per-call range derived from a reference profile.
///
/// Carries its provenance: which profile it came from, how many hands that
/// profile had, and whether the hero's hand had to be forced in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub struct PerturbedRange {
    role: Role,
    tightness: Tightness,
    base: usize,
    hands: Vec<Hand>,
    forced: bool,
}

impl PerturbedRange {
    pub fn new(profile: &Profile, hands: Vec<Hand>) -> Self {
        debug_assert!(hands.windows(2).all(|w| w[0] < w[1]));
        Self {
            role: profile.role(),
            tightness: profile.tightness(),
            base: profile.hands().len(),
            hands,
            forced: false,
        }
    }
    /// Guarantee `hero` is a member, inserting it in strength order if the
    /// perturbation dropped it or never had it.
    pub fn ensure(mut self, hero: &Hand) -> Self {
        if let Err(i) = self.hands.binary_search(hero) {
            log::debug!("{:<8}{:<10}forcing hero {}", self.role, self.tightness, hero);
            self.hands.insert(i, *hero);
            self.forced = true;
        }
        self
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn tightness(&self) -> Tightness {
        self.tightness
    }
    /// Size of the profile this range was derived from.
    pub fn base_count(&self) -> usize {
        self.base
    }
    pub fn final_count(&self) -> usize {
        self.hands.len()
    }
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }
    pub fn contains(&self, hand: &Hand) -> bool {
        self.hands.binary_search(hand).is_ok()
    }
    /// True if the hero's hand was inserted by [`PerturbedRange::ensure`].
    pub fn forced(&self) -> bool {
        self.forced
    }
}

/// Comma-joined canonical hands, as the solver's range input expects.
impl std::fmt::Display for PerturbedRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", crate::range::render(&self.hands))
    }
}
