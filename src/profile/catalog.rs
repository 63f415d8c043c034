use super::profile::Profile;
use super::role::Role;
use super::tightness::Tightness;
use crate::cards::Universe;
use std::collections::BTreeMap;

/// Built-in reference ranges.
///
/// Every profile keeps AA, so the strongest bound is always rank 0. The
/// weakest members are 88 (OOP Balanced) and 66 (IP Balanced), which keeps
/// trash like 72o well outside the Balanced profiles.
pub const REFERENCE_RANGES: [(Role, Tightness, &str); 6] = [
    (Role::Oop, Tightness::Tight, "TT+,AJs+,KQs,AQo+"),
    (Role::Oop, Tightness::Balanced, "88+,ATs+,KTs+,QTs+,JTs,AJo+,KQo"),
    (Role::Oop, Tightness::Loose, "55+,A2s+,K8s+,Q9s+,J9s+,T8s+,98s,87s,76s,ATo+,KTo+,QTo+,JTo"),
    (Role::Ip, Tightness::Tight, "99+,ATs+,KJs+,QJs,AJo+,KQo"),
    (Role::Ip, Tightness::Balanced, "66+,A2s+,K9s+,Q9s+,J9s+,T9s,98s,87s,ATo+,KJo+,QJo"),
    (Role::Ip, Tightness::Loose, "22+,A2s+,K5s+,Q7s+,J7s+,T7s+,96s+,86s+,75s+,65s,54s,A2o+,K9o+,Q9o+,J9o+,T9o"),
];

/// Every (role, tightness) profile, expanded once.
///
/// Built from a static table at startup and read-only afterwards; share it by
/// reference. A role or tightness missing from a custom table yields an empty
/// profile rather than a gap.
#[derive(Debug, Clone)]
pub struct Catalog(BTreeMap<(Role, Tightness), Profile>);

impl Catalog {
    pub fn new(universe: &Universe) -> Self {
        Self::from_table(&REFERENCE_RANGES, universe)
    }
    pub fn from_table(table: &[(Role, Tightness, &str)], universe: &Universe) -> Self {
        Self(
            Role::all()
                .into_iter()
                .flat_map(|role| Tightness::all().into_iter().map(move |t| (role, t)))
                .map(|(role, tightness)| {
                    let shorthand = table
                        .iter()
                        .find(|(r, t, _)| *r == role && *t == tightness)
                        .map_or("", |(_, _, s)| *s);
                    let profile = Profile::new(role, tightness, shorthand, universe);
                    ((role, tightness), profile)
                })
                .collect(),
        )
    }
    pub fn profile(&self, role: Role, tightness: Tightness) -> &Profile {
        &self.0[&(role, tightness)]
    }
    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.0.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_ranges_expand_cleanly() {
        for (_, _, shorthand) in REFERENCE_RANGES {
            assert!(crate::range::expand_all(shorthand).is_clean(), "{}", shorthand);
        }
    }

    #[test]
    fn every_profile_present_and_nonempty() {
        let ref universe = Universe::new();
        let catalog = Catalog::new(universe);
        assert_eq!(catalog.profiles().count(), 6);
        for profile in catalog.profiles() {
            assert!(!profile.hands().is_empty());
            assert_eq!(profile.bounds().map(|(min, _)| min), Some(0));
        }
    }

    #[test]
    fn looser_profiles_are_wider() {
        let ref universe = Universe::new();
        let catalog = Catalog::new(universe);
        for role in Role::all() {
            let sizes = Tightness::all()
                .into_iter()
                .map(|t| catalog.profile(role, t).hands().len())
                .collect::<Vec<_>>();
            assert!(sizes.windows(2).all(|w| w[0] < w[1]), "{:?}", sizes);
        }
    }

    #[test]
    fn weakest_members() {
        let ref universe = Universe::new();
        let catalog = Catalog::new(universe);
        let weakest = |role, t| catalog.profile(role, t).hands().last().map(|h| h.to_string());
        assert_eq!(weakest(Role::Oop, Tightness::Balanced), Some("88".into()));
        assert_eq!(weakest(Role::Ip, Tightness::Balanced), Some("66".into()));
        assert_eq!(weakest(Role::Ip, Tightness::Loose), Some("22".into()));
    }

    #[test]
    fn missing_rows_are_empty() {
        let ref universe = Universe::new();
        let catalog = Catalog::from_table(&[(Role::Oop, Tightness::Tight, "AA")], universe);
        assert_eq!(catalog.profile(Role::Oop, Tightness::Tight).hands().len(), 1);
        assert!(catalog.profile(Role::Ip, Tightness::Loose).hands().is_empty());
    }
}
