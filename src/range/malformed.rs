use crate::cards::Rank;

/// Why a shorthand component could not be expanded.
///
/// Malformed components are soft failures: the component contributes no
/// hands and the reason travels back to the caller inside a [`Warning`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    UnknownRank(char),
    UnknownSuitedness(char),
    /// Kicker must be strictly weaker than the primary rank.
    KickerNotWeaker { primary: Rank, kicker: Rank },
    /// Dash bounds disagree on primary rank or suffix.
    MismatchedBounds,
    /// A dash bound that is a pair, like the "AAs" in "AAs-AKs".
    PairedBound,
    Unrecognized,
}

impl std::fmt::Display for Malformed {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnknownRank(c) => write!(f, "unknown rank '{}'", c),
            Self::UnknownSuitedness(c) => write!(f, "unknown suit type '{}'", c),
            Self::KickerNotWeaker { primary, kicker } => {
                write!(f, "kicker '{}' not weaker than primary '{}'", kicker, primary)
            }
            Self::MismatchedBounds => write!(f, "range bounds must share primary rank and suit type"),
            Self::PairedBound => write!(f, "range bound cannot be a pair"),
            Self::Unrecognized => write!(f, "not recognized"),
        }
    }
}

/// A malformed component together with the text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    component: String,
    reason: Malformed,
}

impl Warning {
    pub fn new(component: &str, reason: Malformed) -> Self {
        Self {
            component: component.to_string(),
            reason,
        }
    }
    pub fn component(&self) -> &str {
        &self.component
    }
    pub fn reason(&self) -> &Malformed {
        &self.reason
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "shorthand component '{}': {}", self.component, self.reason)
    }
}
