use super::rank::Rank;
use super::suitedness::Suitedness;
use std::cmp::Ordering;

/// One of the 169 strategically distinct starting hands.
///
/// A hand is an unordered rank pair plus a [`Suitedness`] tag, always stored
/// with the stronger rank first. Pairs carry equal ranks and
/// [`Suitedness::Pair`]; non-pairs are never tagged as pairs. Both invariants
/// are enforced by the constructors, so every `Hand` value is a member of the
/// [`Universe`].
///
/// # Ordering
///
/// `Ord` is the strength ordering: `Less` means stronger. Hands compare by
/// high rank, then low rank, then suited before offsuit, which puts `AA`
/// first and `22` last.
///
/// [`Universe`]: super::universe::Universe
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand {
    high: Rank,
    low: Rank,
    suitedness: Suitedness,
}

impl Hand {
    /// The pocket pair of `rank`.
    pub const fn pair(rank: Rank) -> Self {
        Self {
            high: rank,
            low: rank,
            suitedness: Suitedness::Pair,
        }
    }
    /// A suited or offsuit hand. Ranks may arrive in either order.
    /// Returns `None` for equal ranks or a `Pair` tag.
    pub fn unpaired(a: Rank, b: Rank, suitedness: Suitedness) -> Option<Self> {
        match (a == b, suitedness) {
            (true, _) | (_, Suitedness::Pair) => None,
            _ => Some(Self {
                high: a.max(b),
                low: a.min(b),
                suitedness,
            }),
        }
    }
    pub fn high(&self) -> Rank {
        self.high
    }
    pub fn low(&self) -> Rank {
        self.low
    }
    pub fn suitedness(&self) -> Suitedness {
        self.suitedness
    }
    pub fn is_pair(&self) -> bool {
        self.suitedness == Suitedness::Pair
    }
    pub fn is_suited(&self) -> bool {
        self.suitedness == Suitedness::Suited
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .high
            .cmp(&self.high)
            .then_with(|| other.low.cmp(&self.low))
            .then_with(|| self.suitedness.cmp(&other.suitedness))
    }
}
impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.high, self.low, self.suitedness)
    }
}

/// Serialized as its canonical rendering, e.g. "AKs".
#[cfg(feature = "client")]
impl serde::Serialize for Hand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// str isomorphism
///
/// Only canonical renderings parse: "AKs", "T9o", "77". Reversed ranks
/// ("KAs"), suited pairs ("AAs") and suffix-less non-pairs ("AK") do not.
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.chars().collect::<Vec<_>>();
        match chars.as_slice() {
            [a, b] => {
                let a = Rank::try_from(*a)?;
                let b = Rank::try_from(*b)?;
                match a == b {
                    true => Ok(Self::pair(a)),
                    false => Err(format!("non-pair needs a suffix: {}", s)),
                }
            }
            [a, b, x] => {
                let a = Rank::try_from(*a)?;
                let b = Rank::try_from(*b)?;
                let x = Suitedness::try_from(*x)?;
                match a.stronger(&b) {
                    true => Self::unpaired(a, b, x).ok_or_else(|| format!("invalid hand: {}", s)),
                    false => Err(format!("not a canonical hand: {}", s)),
                }
            }
            _ => Err(format!("hand must be 2 or 3 characters: {}", s)),
        }
    }
}
