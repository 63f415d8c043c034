use crate::cards::Hand;
use crate::cards::Universe;
use crate::perturb::Perturbation;
use crate::profile::Catalog;
use crate::profile::Role;
use crate::profile::Selection;
use crate::profile::Tightness;
use rand::Rng;

/// The process-wide, read-only tables: the hand universe and the expanded
/// reference catalog.
///
/// Build it once at startup and hand out `&Context`. Nothing in it is
/// mutable after construction, so it is freely shared across threads.
#[derive(Debug, Clone)]
pub struct Context {
    universe: Universe,
    catalog: Catalog,
}

impl Context {
    pub fn new() -> Self {
        let universe = Universe::new();
        let catalog = Catalog::new(&universe);
        Self { universe, catalog }
    }
    /// A context over a custom (role, tightness, shorthand) table.
    pub fn with_table(table: &[(Role, Tightness, &str)]) -> Self {
        let universe = Universe::new();
        let catalog = Catalog::from_table(table, &universe);
        Self { universe, catalog }
    }
    pub fn universe(&self) -> &Universe {
        &self.universe
    }
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Adaptive profile selection for the hero's hand.
    /// Returns the settled tightness and its unperturbed hands.
    pub fn select(
        &self,
        hero: &Hand,
        role: Role,
        initial: Tightness,
        weakness_offset: usize,
        strength_offset: usize,
    ) -> (Tightness, &[Hand]) {
        let profile = Selection::new(weakness_offset, strength_offset).select(
            &self.universe,
            &self.catalog,
            hero,
            role,
            initial,
        );
        (profile.tightness(), profile.hands())
    }
    /// [`Context::select`] from external labels. A hand, role or tightness
    /// label outside its domain fails the call.
    pub fn select_str(
        &self,
        hero: &str,
        role: &str,
        initial: &str,
        weakness_offset: usize,
        strength_offset: usize,
    ) -> anyhow::Result<(Tightness, &[Hand])> {
        let hero = Hand::try_from(hero).map_err(|e| anyhow::anyhow!("hand not in universe: {}", e))?;
        let role = Role::try_from(role)?;
        let initial = Tightness::try_from(initial)?;
        Ok(self.select(&hero, role, initial, weakness_offset, strength_offset))
    }
    /// Randomized drop-and-add around `base`. Fails on out-of-range parameters.
    pub fn perturb<R: Rng>(
        &self,
        base: &[Hand],
        perturbation: &Perturbation,
        rng: &mut R,
    ) -> anyhow::Result<Vec<Hand>> {
        perturbation.perturb(&self.universe, base, rng)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
