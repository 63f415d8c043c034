use super::card::Card;
use super::hand::Hand;
use super::suitedness::Suitedness;

/// A player's two private hole cards.
///
/// The two cards are always distinct. A hole collapses onto exactly one of
/// the 169 starting-hand classes via `Hand::from`.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> (Card, Card) {
        (self.0, self.1)
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = String;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a == b {
            true => Err(format!("duplicate hole card: {}", a)),
            false => Ok(Self(a, b)),
        }
    }
}

/// Four-character holding such as "AhKd" or "7c7D".
impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match (s.len(), s.is_char_boundary(2)) {
            (4, true) => {
                let a = Card::try_from(&s[0..2])?;
                let b = Card::try_from(&s[2..4])?;
                Self::try_from((a, b))
            }
            _ => Err(format!("holding must be 4 characters: {}", s)),
        }
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        let (a, b) = hole.cards();
        let suitedness = match a.suit() == b.suit() {
            true => Suitedness::Suited,
            false => Suitedness::Offsuit,
        };
        // equal ranks are the only way unpaired() declines
        Hand::unpaired(a.rank(), b.rank(), suitedness).unwrap_or(Hand::pair(a.rank()))
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> String {
        Hand::from(Hole::try_from(s).unwrap()).to_string()
    }

    #[test]
    fn canonicalizes_holdings() {
        assert_eq!(hand("AhKd"), "AKo");
        assert_eq!(hand("KdAh"), "AKo");
        assert_eq!(hand("7c7d"), "77");
        assert_eq!(hand("2s7s"), "72s");
        assert_eq!(hand("tHjH"), "JTs");
    }

    #[test]
    fn rejects_bad_holdings() {
        assert!(Hole::try_from("AhAh").is_err());
        assert!(Hole::try_from("AhK").is_err());
        assert!(Hole::try_from("AhKx").is_err());
        assert!(Hole::try_from("AhKdQc").is_err());
        assert!(Hole::try_from("1hKd").is_err());
    }
}
