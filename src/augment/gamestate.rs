use crate::cards::Hand;
use crate::cards::Hole;
use crate::profile::Role;

/// The hero's seat and hole cards for one solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gamestate {
    hero: Role,
    holding: Hole,
}

impl Gamestate {
    pub fn new(hero: Role, holding: Hole) -> Self {
        Self { hero, holding }
    }
    /// From external labels such as `("IP", "AhKd")`.
    pub fn parse(position: &str, holding: &str) -> anyhow::Result<Self> {
        let hero = Role::try_from(position)?;
        let holding = Hole::try_from(holding).map_err(|e| anyhow::anyhow!("invalid holding: {}", e))?;
        Ok(Self::new(hero, holding))
    }
    pub fn hero(&self) -> Role {
        self.hero
    }
    pub fn villain(&self) -> Role {
        self.hero.other()
    }
    pub fn holding(&self) -> Hole {
        self.holding
    }
    /// The starting-hand class of the hero's holding.
    pub fn hand(&self) -> Hand {
        Hand::from(self.holding)
    }
}

impl std::fmt::Display for Gamestate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.hero, self.holding, self.hand())
    }
}
