use crate::Arbitrary;

/// Which seat a range belongs to: out of position or in position.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub enum Role {
    #[cfg_attr(feature = "client", serde(rename = "OOP"))]
    Oop,
    #[cfg_attr(feature = "client", serde(rename = "IP"))]
    Ip,
}

impl Role {
    pub const fn all() -> [Self; 2] {
        [Self::Oop, Self::Ip]
    }
    /// The opposing seat.
    pub const fn other(&self) -> Self {
        match self {
            Self::Oop => Self::Ip,
            Self::Ip => Self::Oop,
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Oop => "OOP",
            Self::Ip => "IP",
        }
    }
}

impl Arbitrary for Role {
    fn random<R: rand::Rng>(rng: &mut R) -> Self {
        match rng.random_bool(0.5) {
            true => Self::Oop,
            false => Self::Ip,
        }
    }
}

/// position label parsing; an unknown label is a caller error, never defaulted
impl TryFrom<&str> for Role {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "OOP" => Ok(Self::Oop),
            "IP" => Ok(Self::Ip),
            _ => Err(anyhow::anyhow!("invalid role: {}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
