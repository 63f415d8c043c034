criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_hand_universe,
        expanding_compound_range,
        selecting_adaptive_profile,
        perturbing_loose_profile,
        augmenting_gamestate,
}

const LOOSE: &str = "22+,A2s+,K5s+,Q7s+,J7s+,T7s+,96s+,86s+,75s+,65s,54s,A2o+,K9o+,Q9o+,J9o+,T9o";

fn building_hand_universe(c: &mut criterion::Criterion) {
    c.bench_function("build the 169-hand Universe", |b| {
        b.iter(|| Universe::new())
    });
}

fn expanding_compound_range(c: &mut criterion::Criterion) {
    c.bench_function("expand a loose compound range", |b| {
        b.iter(|| expand_all(LOOSE))
    });
}

fn selecting_adaptive_profile(c: &mut criterion::Criterion) {
    let ref context = Context::new();
    let ref hero = Hand::try_from("72o").unwrap();
    let selection = Selection::default();
    c.bench_function("select a profile for a trash hand", |b| {
        b.iter(|| {
            selection.select(
                context.universe(),
                context.catalog(),
                hero,
                Role::Oop,
                Tightness::Tight,
            )
        })
    });
}

fn perturbing_loose_profile(c: &mut criterion::Criterion) {
    let ref context = Context::new();
    let ref mut rng = SmallRng::seed_from_u64(0);
    let perturbation = Perturbation::default();
    let base = context.catalog().profile(Role::Ip, Tightness::Loose).hands().to_vec();
    c.bench_function("perturb the loose IP profile", |b| {
        b.iter(|| context.perturb(&base, &perturbation, rng))
    });
}

fn augmenting_gamestate(c: &mut criterion::Criterion) {
    let ref context = Context::new();
    let ref mut rng = SmallRng::seed_from_u64(0);
    let ref gamestate = Gamestate::parse("IP", "AhKd").unwrap();
    let ref selection = Selection::default();
    let ref perturbation = Perturbation::default();
    c.bench_function("augment an IP gamestate", |b| {
        b.iter(|| {
            let ref preferences = Preferences::sample(rng);
            augment(context, gamestate, preferences, selection, perturbation, rng)
        })
    });
}

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rangegen::Context;
use rangegen::augment::*;
use rangegen::cards::Hand;
use rangegen::cards::Universe;
use rangegen::perturb::Perturbation;
use rangegen::profile::Role;
use rangegen::profile::Selection;
use rangegen::profile::Tightness;
use rangegen::range::expand_all;
