use super::hand::Hand;
use super::rank::Rank;
use super::suitedness::Suitedness;
use crate::N_HANDS;

/// All 169 starting hands in strength order, with the rank bijection.
///
/// Position in [`Universe::hands`] is a hand's strength rank: 0 is `AA`, 168
/// is `22`. Hands are grouped by high rank, then low rank, suited before
/// offsuit, which is exactly `Hand`'s `Ord`, so lookups are binary searches
/// over the table.
///
/// Construction is a closed enumeration and cannot fail. The table is built
/// once, owned by a [`Context`], and never mutated.
///
/// [`Context`]: crate::Context
#[derive(Debug, Clone)]
pub struct Universe(Vec<Hand>);

impl Universe {
    pub fn new() -> Self {
        let hands = Rank::all()
            .into_iter()
            .flat_map(|high| {
                Rank::all()
                    .into_iter()
                    .skip(high.index())
                    .flat_map(move |low| match high == low {
                        true => vec![Hand::pair(high)],
                        false => Suitedness::unpaired()
                            .into_iter()
                            .filter_map(|x| Hand::unpaired(high, low, x))
                            .collect(),
                    })
            })
            .collect::<Vec<Hand>>();
        debug_assert!(hands.len() == N_HANDS);
        debug_assert!(hands.windows(2).all(|w| w[0] < w[1]));
        Self(hands)
    }
    /// Every hand, strongest first.
    pub fn hands(&self) -> &[Hand] {
        &self.0
    }
    /// Strength rank of a hand, 0 (strongest) through 168.
    pub fn rank(&self, hand: &Hand) -> usize {
        match self.0.binary_search(hand) {
            Ok(i) => i,
            Err(_) => unreachable!("every hand is in the universe"),
        }
    }
    /// The hand at a strength rank.
    pub fn hand(&self, rank: usize) -> Option<Hand> {
        self.0.get(rank).copied()
    }
    /// Strength rank of a hand given by its canonical string.
    /// Anything outside the universe is a caller error.
    pub fn lookup(&self, s: &str) -> anyhow::Result<usize> {
        Hand::try_from(s)
            .map(|ref hand| self.rank(hand))
            .map_err(|e| anyhow::anyhow!("hand not in universe: {}", e))
    }
    /// Hands within `radius` strength ranks of `hand`, itself included.
    pub fn window(&self, hand: &Hand, radius: usize) -> &[Hand] {
        let rank = self.rank(hand);
        let lo = rank.saturating_sub(radius);
        let hi = rank.saturating_add(radius).min(N_HANDS - 1);
        &self.0[lo..=hi]
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}
