use super::gamestate::Gamestate;
use crate::perturb::PerturbedRange;
use crate::profile::Role;
use crate::profile::Tightness;

/// Both seats' final ranges for one gamestate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmented {
    gamestate: Gamestate,
    oop: PerturbedRange,
    ip: PerturbedRange,
}

impl Augmented {
    pub fn new(gamestate: Gamestate, oop: PerturbedRange, ip: PerturbedRange) -> Self {
        debug_assert!(oop.role() == Role::Oop);
        debug_assert!(ip.role() == Role::Ip);
        Self { gamestate, oop, ip }
    }
    pub fn gamestate(&self) -> &Gamestate {
        &self.gamestate
    }
    pub fn range(&self, role: Role) -> &PerturbedRange {
        match role {
            Role::Oop => &self.oop,
            Role::Ip => &self.ip,
        }
    }
    pub fn hero(&self) -> &PerturbedRange {
        self.range(self.gamestate.hero())
    }
    pub fn villain(&self) -> &PerturbedRange {
        self.range(self.gamestate.villain())
    }
    pub fn oop_range_str(&self) -> String {
        self.oop.to_string()
    }
    pub fn ip_range_str(&self) -> String {
        self.ip.to_string()
    }
    pub fn oop_range_type_selected(&self) -> Tightness {
        self.oop.tightness()
    }
    pub fn ip_range_type_selected(&self) -> Tightness {
        self.ip.tightness()
    }
}

/// Flat output row, one per augmented gamestate.
#[cfg(feature = "client")]
#[derive(Debug, Clone, serde::Serialize)]
pub struct Record {
    pub hero_position: Role,
    pub hero_holding: String,
    pub hero_hand: String,
    pub hero_forced: bool,
    pub oop_range_str: String,
    pub oop_range_type_selected: Tightness,
    pub oop_base_count: usize,
    pub oop_final_count: usize,
    pub ip_range_str: String,
    pub ip_range_type_selected: Tightness,
    pub ip_base_count: usize,
    pub ip_final_count: usize,
}

#[cfg(feature = "client")]
impl From<&Augmented> for Record {
    fn from(augmented: &Augmented) -> Self {
        let game = augmented.gamestate();
        Self {
            hero_position: game.hero(),
            hero_holding: game.holding().to_string(),
            hero_hand: game.hand().to_string(),
            hero_forced: augmented.hero().forced(),
            oop_range_str: augmented.oop_range_str(),
            oop_range_type_selected: augmented.oop_range_type_selected(),
            oop_base_count: augmented.oop.base_count(),
            oop_final_count: augmented.oop.final_count(),
            ip_range_str: augmented.ip_range_str(),
            ip_range_type_selected: augmented.ip_range_type_selected(),
            ip_base_count: augmented.ip.base_count(),
            ip_final_count: augmented.ip.final_count(),
        }
    }
}
