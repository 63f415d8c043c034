use crate::Arbitrary;

/// How wide a reference range is, tightest first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub enum Tightness {
    Tight,
    Balanced,
    Loose,
}

impl Tightness {
    pub const fn all() -> [Self; 3] {
        [Self::Tight, Self::Balanced, Self::Loose]
    }
    /// One level wider, or `None` at the loosest level.
    pub const fn looser(&self) -> Option<Self> {
        match self {
            Self::Tight => Some(Self::Balanced),
            Self::Balanced => Some(Self::Loose),
            Self::Loose => None,
        }
    }
    /// One level narrower, or `None` at the tightest level.
    pub const fn tighter(&self) -> Option<Self> {
        match self {
            Self::Tight => None,
            Self::Balanced => Some(Self::Tight),
            Self::Loose => Some(Self::Balanced),
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tight => "Tight",
            Self::Balanced => "Balanced",
            Self::Loose => "Loose",
        }
    }
}

impl Arbitrary for Tightness {
    fn random<R: rand::Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..3) {
            0 => Self::Tight,
            1 => Self::Balanced,
            _ => Self::Loose,
        }
    }
}

impl TryFrom<&str> for Tightness {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "tight" => Ok(Self::Tight),
            "balanced" => Ok(Self::Balanced),
            "loose" => Ok(Self::Loose),
            _ => Err(anyhow::anyhow!("invalid tightness: {}", s)),
        }
    }
}

impl std::fmt::Display for Tightness {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
