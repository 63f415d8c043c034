/// Whether a starting hand is a pocket pair, suited, or offsuit.
///
/// The declaration order is the tie-break order used by the strength ranking:
/// within one rank pairing the suited hand sorts before the offsuit one.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suitedness {
    Pair,
    Suited,
    Offsuit,
}

impl Suitedness {
    /// The two non-pair variants, suited first.
    pub const fn unpaired() -> [Self; 2] {
        [Self::Suited, Self::Offsuit]
    }
    /// Suffix appended to a hand's rank pair.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Pair => "",
            Self::Suited => "s",
            Self::Offsuit => "o",
        }
    }
}

/// suffix parsing, only the two non-pair letters are meaningful
impl TryFrom<char> for Suitedness {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            's' => Ok(Self::Suited),
            'o' => Ok(Self::Offsuit),
            _ => Err(format!("invalid suitedness char: {}", c)),
        }
    }
}

impl std::fmt::Display for Suitedness {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suited_before_offsuit() {
        assert!(Suitedness::Suited < Suitedness::Offsuit);
    }

    #[test]
    fn parse_suffix() {
        assert_eq!(Suitedness::try_from('s'), Ok(Suitedness::Suited));
        assert_eq!(Suitedness::try_from('o'), Ok(Suitedness::Offsuit));
        assert!(Suitedness::try_from('x').is_err());
        assert!(Suitedness::try_from('S').is_err());
    }
}
