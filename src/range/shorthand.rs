use super::malformed::Malformed;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suitedness;

/// One parsed component of a range shorthand.
///
/// Grammar, tried in this order:
///
/// | form        | example     | meaning                                        |
/// |-------------|-------------|------------------------------------------------|
/// | exact       | `AKs`, `77` | that one hand                                  |
/// | pair-plus   | `JJ+`       | JJ and every stronger pair                     |
/// | pair-dash   | `77-99`     | every pair between the bounds, either order    |
/// | kicker-plus | `A9s+`, `AQ+` | fixed primary, kickers from the bound up to just below the primary |
/// | kicker-dash | `A2s-A5s`   | fixed primary and suffix, kickers between the bounds |
///
/// A kicker-plus without suffix covers suited and offsuit. Ranges whose
/// primary rank moves along with the kicker ("T8s-QJs") are not part of the
/// grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shorthand {
    Exact(Hand),
    PairPlus(Rank),
    PairDash(Rank, Rank),
    KickerPlus {
        primary: Rank,
        kicker: Rank,
        suitedness: Option<Suitedness>,
    },
    KickerDash {
        primary: Rank,
        bounds: (Rank, Rank),
        suitedness: Suitedness,
    },
}

impl Shorthand {
    /// The hands this component denotes, strongest first.
    pub fn hands(&self) -> Vec<Hand> {
        let mut hands = match *self {
            Self::Exact(hand) => vec![hand],
            Self::PairPlus(floor) => Rank::all()
                .into_iter()
                .filter(|r| *r >= floor)
                .map(Hand::pair)
                .collect(),
            Self::PairDash(a, b) => Rank::all()
                .into_iter()
                .filter(|r| *r >= a.min(b) && *r <= a.max(b))
                .map(Hand::pair)
                .collect(),
            Self::KickerPlus {
                primary,
                kicker,
                suitedness,
            } => Self::kickers(primary, (kicker, primary), true, suitedness),
            Self::KickerDash {
                primary,
                bounds: (a, b),
                suitedness,
            } => Self::kickers(primary, (a.min(b), a.max(b)), false, Some(suitedness)),
        };
        hands.sort();
        hands
    }

    /// Non-pair hands with a fixed primary and a kicker in `lo..=hi`
    /// (or `lo..hi` when `open`), in one or both suitedness variants.
    fn kickers(primary: Rank, (lo, hi): (Rank, Rank), open: bool, suitedness: Option<Suitedness>) -> Vec<Hand> {
        let variants = suitedness.map_or(Suitedness::unpaired().to_vec(), |x| vec![x]);
        Rank::all()
            .into_iter()
            .filter(|k| *k >= lo)
            .filter(|k| if open { *k < hi } else { *k <= hi })
            .flat_map(|k| variants.iter().filter_map(move |x| Hand::unpaired(primary, k, *x)))
            .collect()
    }

    fn rank(c: char) -> Result<Rank, Malformed> {
        Rank::try_from(c).map_err(|_| Malformed::UnknownRank(c))
    }
    fn suitedness(c: char) -> Result<Suitedness, Malformed> {
        Suitedness::try_from(c).map_err(|_| Malformed::UnknownSuitedness(c))
    }
    fn weaker(primary: Rank, kicker: Rank) -> Result<Rank, Malformed> {
        match primary.stronger(&kicker) {
            true => Ok(kicker),
            false => Err(Malformed::KickerNotWeaker { primary, kicker }),
        }
    }

    fn plus(base: &[char]) -> Result<Self, Malformed> {
        match base {
            &[a, b] if a == b => Ok(Self::PairPlus(Self::rank(a)?)),
            &[p, k] => {
                let primary = Self::rank(p)?;
                let kicker = Self::weaker(primary, Self::rank(k)?)?;
                Ok(Self::KickerPlus {
                    primary,
                    kicker,
                    suitedness: None,
                })
            }
            &[p, k, x] => {
                let primary = Self::rank(p)?;
                let kicker = Self::rank(k)?;
                let suitedness = Some(Self::suitedness(x)?);
                let kicker = Self::weaker(primary, kicker)?;
                Ok(Self::KickerPlus {
                    primary,
                    kicker,
                    suitedness,
                })
            }
            _ => Err(Malformed::Unrecognized),
        }
    }

    fn dash(lhs: &[char], rhs: &[char]) -> Result<Self, Malformed> {
        match (lhs, rhs) {
            (&[a, b], &[c, d]) if a == b && c == d => {
                Ok(Self::PairDash(Self::rank(a)?, Self::rank(c)?))
            }
            (&[p1, k1, x1], &[p2, k2, x2]) => {
                let (p1, k1) = (Self::rank(p1)?, Self::rank(k1)?);
                let (p2, k2) = (Self::rank(p2)?, Self::rank(k2)?);
                if p1 == k1 || p2 == k2 {
                    return Err(Malformed::PairedBound);
                }
                let x1 = Self::suitedness(x1)?;
                let x2 = Self::suitedness(x2)?;
                if p1 != p2 || x1 != x2 {
                    return Err(Malformed::MismatchedBounds);
                }
                Ok(Self::KickerDash {
                    primary: p1,
                    bounds: (Self::weaker(p1, k1)?, Self::weaker(p1, k2)?),
                    suitedness: x1,
                })
            }
            _ => Err(Malformed::Unrecognized),
        }
    }
}

/// str parsing of a single, already trimmed component
impl TryFrom<&str> for Shorthand {
    type Error = Malformed;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if let Ok(hand) = Hand::try_from(s) {
            return Ok(Self::Exact(hand));
        }
        let chars = s.chars().collect::<Vec<char>>();
        match chars.split_last() {
            Some((&'+', base)) => Self::plus(base),
            _ => match s.split_once('-') {
                Some((lhs, rhs)) if !rhs.contains('-') => Self::dash(
                    &lhs.chars().collect::<Vec<_>>(),
                    &rhs.chars().collect::<Vec<_>>(),
                ),
                _ => Err(Malformed::Unrecognized),
            },
        }
    }
}

impl std::fmt::Display for Shorthand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Exact(hand) => write!(f, "{}", hand),
            Self::PairPlus(r) => write!(f, "{}{}+", r, r),
            Self::PairDash(a, b) => write!(f, "{}{}-{}{}", a, a, b, b),
            Self::KickerPlus {
                primary,
                kicker,
                suitedness,
            } => match suitedness {
                Some(x) => write!(f, "{}{}{}+", primary, kicker, x),
                None => write!(f, "{}{}+", primary, kicker),
            },
            Self::KickerDash {
                primary,
                bounds: (a, b),
                suitedness,
            } => write!(f, "{}{}{}-{}{}{}", primary, a, suitedness, primary, b, suitedness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(s: &str) -> Vec<String> {
        Shorthand::try_from(s)
            .map(|x| x.hands())
            .unwrap_or_default()
            .iter()
            .map(|h| h.to_string())
            .collect()
    }

    #[test]
    fn pair_plus() {
        assert_eq!(expand("JJ+"), ["AA", "KK", "QQ", "JJ"]);
        assert_eq!(expand("AA+"), ["AA"]);
        assert_eq!(expand("22+").len(), 13);
    }

    #[test]
    fn pair_dash_either_order() {
        assert_eq!(expand("77-99"), ["99", "88", "77"]);
        assert_eq!(expand("99-77"), expand("77-99"));
        assert_eq!(expand("55-55"), ["55"]);
    }

    #[test]
    fn kicker_plus() {
        assert_eq!(expand("A9s+"), ["AKs", "AQs", "AJs", "ATs", "A9s"]);
        assert_eq!(expand("KTo+"), ["KQo", "KJo", "KTo"]);
        assert_eq!(expand("AQ+"), ["AKs", "AKo", "AQs", "AQo"]);
        assert_eq!(expand("KQs+"), ["KQs"]);
    }

    #[test]
    fn kicker_dash_either_order() {
        assert_eq!(expand("A2s-A5s"), ["A5s", "A4s", "A3s", "A2s"]);
        assert_eq!(expand("A5s-A2s"), expand("A2s-A5s"));
        assert_eq!(expand("KTo-KQo"), ["KQo", "KJo", "KTo"]);
    }

    #[test]
    fn exact_hands_take_priority() {
        assert_eq!(Shorthand::try_from("AKs"), Ok(Shorthand::Exact(Hand::try_from("AKs").unwrap())));
        assert_eq!(expand("77"), ["77"]);
    }

    #[test]
    fn kicker_not_weaker() {
        assert_eq!(
            Shorthand::try_from("KAs+"),
            Err(Malformed::KickerNotWeaker {
                primary: Rank::King,
                kicker: Rank::Ace
            })
        );
        assert!(matches!(Shorthand::try_from("AAs+"), Err(Malformed::KickerNotWeaker { .. })));
        assert!(matches!(Shorthand::try_from("K2s-KAs"), Err(Malformed::KickerNotWeaker { .. })));
    }

    #[test]
    fn malformed_components() {
        assert_eq!(Shorthand::try_from("AXs+"), Err(Malformed::UnknownRank('X')));
        assert_eq!(Shorthand::try_from("A9x+"), Err(Malformed::UnknownSuitedness('x')));
        assert_eq!(Shorthand::try_from("AAs-AKs"), Err(Malformed::PairedBound));
        assert_eq!(Shorthand::try_from("A2s-A5o"), Err(Malformed::MismatchedBounds));
        assert_eq!(Shorthand::try_from("A2s-K5s"), Err(Malformed::MismatchedBounds));
        assert_eq!(Shorthand::try_from("A+"), Err(Malformed::Unrecognized));
        assert_eq!(Shorthand::try_from("AK"), Err(Malformed::Unrecognized));
        assert_eq!(Shorthand::try_from("A2s-A5s-A7s"), Err(Malformed::Unrecognized));
        assert_eq!(Shorthand::try_from("garbage"), Err(Malformed::Unrecognized));
    }

    #[test]
    fn connectors_unsupported() {
        assert!(Shorthand::try_from("T8s-QJs").is_err());
        assert!(Shorthand::try_from("54s-98s").is_err());
    }

    #[test]
    fn display_roundtrip() {
        for s in ["JJ+", "77-99", "A9s+", "AQ+", "A2s-A5s", "AKo"] {
            assert_eq!(Shorthand::try_from(s).unwrap().to_string(), s);
        }
    }
}
