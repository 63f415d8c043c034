use super::malformed::Warning;
use super::shorthand::Shorthand;
use crate::cards::Hand;
use std::collections::BTreeSet;

/// The hands a shorthand expands to, plus whatever went wrong on the way.
///
/// Hands are deduplicated and sorted strongest first. A malformed component
/// contributes no hands and one [`Warning`]; the caller decides whether to
/// log, ignore, or reject the whole range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    hands: Vec<Hand>,
    warnings: Vec<Warning>,
}

impl Expansion {
    /// Expand exactly one comma-free component.
    /// Blank components expand to nothing, silently.
    pub fn single(component: &str) -> Self {
        let component = component.trim();
        match component.is_empty() {
            true => Self::default(),
            false => match Shorthand::try_from(component) {
                Ok(shorthand) => Self {
                    hands: shorthand.hands(),
                    warnings: vec![],
                },
                Err(reason) => Self {
                    hands: vec![],
                    warnings: vec![Warning::new(component, reason)],
                },
            },
        }
    }
    /// Expand a comma-separated range as the union of its components.
    pub fn compound(range: &str) -> Self {
        range
            .split(',')
            .map(Self::single)
            .fold(Self::default(), Self::union)
    }
    /// Union of two expansions, keeping every warning.
    pub fn union(self, other: Self) -> Self {
        let hands = self
            .hands
            .into_iter()
            .chain(other.hands)
            .collect::<BTreeSet<Hand>>()
            .into_iter()
            .collect();
        let warnings = self.warnings.into_iter().chain(other.warnings).collect();
        Self { hands, warnings }
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
    pub fn into_hands(self) -> Vec<Hand> {
        self.hands
    }
}

/// Comma-joined canonical hands, the form the solver's range input takes.
impl std::fmt::Display for Expansion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", super::render(&self.hands))
    }
}

/// Expand one shorthand component.
pub fn expand(component: &str) -> Expansion {
    Expansion::single(component)
}

/// Expand a comma-separated shorthand range.
pub fn expand_all(range: &str) -> Expansion {
    Expansion::compound(range)
}
