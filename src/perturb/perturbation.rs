use crate::ADDITION_CAP;
use crate::NEIGHBOR_WINDOW;
use crate::Probability;
use crate::REMOVAL_CAP;
use crate::RETAIN_PROBABILITY;
use crate::STRONGER_NEIGHBOR_PROBABILITY;
use crate::WEAKER_NEIGHBOR_PROBABILITY;
use crate::cards::Hand;
use crate::cards::Universe;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

/// Parameters of the randomized drop-and-add around a base range.
///
/// Caps are fractions of the base size, floored to whole hands. The window
/// is a radius in strength ranks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    pub retain: Probability,
    pub removal_cap: Probability,
    pub window: usize,
    pub addition: Probability,
    pub addition_cap: Probability,
}

impl Default for Perturbation {
    fn default() -> Self {
        Self {
            retain: RETAIN_PROBABILITY,
            removal_cap: REMOVAL_CAP,
            window: NEIGHBOR_WINDOW,
            addition: (STRONGER_NEIGHBOR_PROBABILITY + WEAKER_NEIGHBOR_PROBABILITY) / 2.,
            addition_cap: ADDITION_CAP,
        }
    }
}

impl Perturbation {
    /// Rejects probabilities and caps outside `[0, 1]`, NaN included.
    pub fn validate(self) -> anyhow::Result<Self> {
        let fields = [
            ("retain", self.retain),
            ("removal_cap", self.removal_cap),
            ("addition", self.addition),
            ("addition_cap", self.addition_cap),
        ];
        match fields.iter().find(|(_, p)| !(0. ..=1.).contains(p)) {
            Some((name, p)) => Err(anyhow::anyhow!("{} must lie in [0, 1], got {}", name, p)),
            None => Ok(self),
        }
    }
    /// Most hands that may be dropped from a base of `n`.
    pub fn removals(&self, n: usize) -> usize {
        (n as Probability * self.removal_cap).floor() as usize
    }
    /// Most hands that may be added to a base of `n`.
    pub fn additions(&self, n: usize) -> usize {
        (n as Probability * self.addition_cap).floor() as usize
    }

    /// Drop some base hands, add some of their neighbors.
    ///
    /// 1. each base hand survives with probability `retain` until
    ///    `removals(n)` hands have been dropped, after which the rest are kept;
    /// 2. every hand within `window` ranks of any base hand (dropped ones
    ///    included) that is not itself a base hand becomes a candidate;
    /// 3. candidates are shuffled, then each joins with probability
    ///    `addition` until `additions(n)` have joined.
    ///
    /// The result is sorted strongest first. The same base and rng stream
    /// always yield the same output. Parameters outside `[0, 1]` fail the call.
    pub fn perturb<R: Rng>(&self, universe: &Universe, base: &[Hand], rng: &mut R) -> anyhow::Result<Vec<Hand>> {
        let Self { retain, addition, .. } = self.validate()?;
        let n = base.len();
        let members = base.iter().copied().collect::<BTreeSet<Hand>>();

        let mut removed = 0;
        let mut kept = BTreeSet::new();
        for hand in members.iter() {
            match removed < self.removals(n) && !rng.random_bool(retain) {
                true => removed += 1,
                false => {
                    kept.insert(*hand);
                }
            }
        }

        let mut candidates = members
            .iter()
            .flat_map(|hand| universe.window(hand, self.window))
            .filter(|hand| !members.contains(*hand))
            .copied()
            .collect::<BTreeSet<Hand>>()
            .into_iter()
            .collect::<Vec<Hand>>();
        candidates.shuffle(rng);

        let mut added = 0;
        for hand in candidates {
            if added >= self.additions(n) {
                break;
            }
            if rng.random_bool(addition) {
                kept.insert(hand);
                added += 1;
            }
        }

        log::debug!("perturbed {} hands: -{} +{}", n, removed, added);
        Ok(kept.into_iter().collect())
    }
}
