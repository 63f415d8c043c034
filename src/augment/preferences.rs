use crate::Arbitrary;
use crate::profile::Role;
use crate::profile::Tightness;

/// Initial tightness for each seat before adaptive selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub oop: Tightness,
    pub ip: Tightness,
}

impl Preferences {
    pub fn new(oop: Tightness, ip: Tightness) -> Self {
        Self { oop, ip }
    }
    pub fn get(&self, role: Role) -> Tightness {
        match role {
            Role::Oop => self.oop,
            Role::Ip => self.ip,
        }
    }
    /// Uniform draw for both seats.
    pub fn sample<R: rand::Rng>(rng: &mut R) -> Self {
        Self::random(rng)
    }
}

impl Arbitrary for Preferences {
    fn random<R: rand::Rng>(rng: &mut R) -> Self {
        let oop = Tightness::random(rng);
        let ip = Tightness::random(rng);
        Self { oop, ip }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new(Tightness::Balanced, Tightness::Balanced)
    }
}
