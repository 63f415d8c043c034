use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards map bijectively to `0..52` as `rank * 4 + suit`. This is the
/// only card representation the crate works with; external spellings such as
/// `"As"` or `"td"` are adapted into it at the input boundary.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0..52 => Ok(Self(n)),
            _ => Err(format!("invalid card u8: {}", n)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism, case-insensitive in both characters
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<_>>();
        match chars.as_slice() {
            [r, s] => {
                let rank = Rank::try_from(r.to_ascii_uppercase())?;
                let suit = Suit::try_from(*s)?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("card must be 2 characters: {}", s)),
        }
    }
}
