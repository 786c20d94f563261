use criterion::{black_box, criterion_group, criterion_main, Criterion};
use enemy_forge::prototype::PrototypeRegistry;
use enemy_forge::{Archetype, Entity, EntityFactory, EntityPatch, StatProfile, Tier};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_create_many(c: &mut Criterion) {
    let profile = StatProfile::tiered();
    let factory = EntityFactory::new(&profile).expect("bundled profile is valid");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("create_many hard x1000", |b| {
        b.iter(|| factory.create_many(black_box(Tier::Hard), 1000, &mut rng))
    });
}

fn bench_clone(c: &mut Criterion) {
    let mut registry = PrototypeRegistry::new();
    registry.register("grunt", Entity::new(Archetype::Infantry, Tier::Normal, 150, 30));
    let patch = EntityPatch::new().hp(999);

    c.bench_function("clone with patch", |b| {
        b.iter(|| registry.clone(black_box("grunt"), &patch))
    });
}

criterion_group!(benches, bench_create_many, bench_clone);
criterion_main!(benches);
