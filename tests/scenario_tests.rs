use nbody_engine::scenarios::{create_asteroid_belt, create_debris_field, create_galaxy};
use nbody_engine::{BodyKind, Vector2, World, WorldConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_asteroid_belt_determinism() {
    let build = || {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(42);
        create_asteroid_belt(&mut world, Vector2::zero(), 0.1, 0.2, 10, &mut rng);
        world
    };

    let first = build();
    let second = build();

    assert_eq!(first.body_count(), 10);
    assert_eq!(second.body_count(), 10);
    for (a, b) in first.bodies().iter().zip(second.bodies()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.mass, b.mass);
    }
}

#[test]
fn test_asteroid_belt_stays_in_annulus() {
    let mut world = World::new();
    let mut rng = StdRng::seed_from_u64(3);
    let center = Vector2::new(0.1, -0.1);
    let ids = create_asteroid_belt(&mut world, center, 0.1, 0.3, 40, &mut rng);

    assert_eq!(ids.len(), 40);
    for body in world.bodies() {
        assert_eq!(body.kind, BodyKind::Asteroid);
        let dist = body.position.distance(&center);
        assert!(dist >= 0.1 - 1.0e-4 && dist <= 0.3 + 1.0e-4, "dist = {}", dist);
    }
}

#[test]
fn test_asteroid_belt_degenerate_parameters() {
    let mut world = World::new();
    let mut rng = StdRng::seed_from_u64(0);

    // Zero count
    assert!(create_asteroid_belt(&mut world, Vector2::zero(), 0.1, 0.2, 0, &mut rng).is_empty());
    // Inverted annulus
    assert!(create_asteroid_belt(&mut world, Vector2::zero(), 0.3, 0.1, 10, &mut rng).is_empty());
    // Non-positive inner radius
    assert!(create_asteroid_belt(&mut world, Vector2::zero(), 0.0, 0.2, 10, &mut rng).is_empty());

    assert_eq!(world.body_count(), 0);
}

#[test]
fn test_galaxy_layout() {
    let mut world = World::new();
    let mut rng = StdRng::seed_from_u64(9);
    let ids = create_galaxy(&mut world, Vector2::zero(), 3, 12, &mut rng);

    // Central hole plus all arm bodies
    assert_eq!(ids.len(), 3 * 12 + 1);
    assert_eq!(world.body_count(), 3 * 12 + 1);

    let hole = world.body(ids[0]).unwrap();
    assert_eq!(hole.kind, BodyKind::BlackHole);
    assert!(hole.is_static());

    // Arm bodies orbit the center: tangential velocity, not radial
    for &id in &ids[1..] {
        let body = world.body(id).unwrap();
        assert!(body.velocity.length() > 0.0);
        let radial = body.position.normalize();
        let along_radial = body.velocity.dot(&radial).abs();
        assert!(along_radial < body.velocity.length() * 0.5);
    }
}

#[test]
fn test_galaxy_degenerate_parameters() {
    let mut world = World::new();
    let mut rng = StdRng::seed_from_u64(0);

    assert!(create_galaxy(&mut world, Vector2::zero(), 0, 10, &mut rng).is_empty());
    assert!(create_galaxy(&mut world, Vector2::zero(), 3, 0, &mut rng).is_empty());
    assert_eq!(world.body_count(), 0);
}

#[test]
fn test_galaxy_survives_stepping() {
    let mut world = World::new();
    let mut rng = StdRng::seed_from_u64(11);
    create_galaxy(&mut world, Vector2::zero(), 2, 8, &mut rng);

    for _ in 0..30 {
        world.step(1.0 / 60.0);
        for body in world.bodies() {
            assert!(body.position.is_finite());
            assert!(body.velocity.is_finite());
        }
    }
}

#[test]
fn test_debris_field() {
    let mut world = World::new();
    let mut rng = StdRng::seed_from_u64(5);
    let ids = create_debris_field(&mut world, Vector2::new(0.2, 0.2), 15, 0.3, &mut rng);

    assert_eq!(ids.len(), 15);
    for body in world.bodies() {
        assert_eq!(body.kind, BodyKind::Asteroid);
        // Fragments are short-lived and clear themselves out
        assert!(body.lifetime.is_some());
        let speed = body.speed();
        assert!(speed >= 0.3 * 0.5 && speed <= 0.3 * 1.5, "speed = {}", speed);
    }

    // Zero count is a no-op
    let mut empty = World::new();
    assert!(create_debris_field(&mut empty, Vector2::zero(), 0, 0.3, &mut rng).is_empty());
    assert_eq!(empty.body_count(), 0);
}

#[test]
fn test_internal_debris_matches_builder() {
    // The world's own debris spray and the scenario builder draw identical
    // fragments from identically seeded RNGs
    let mut config = WorldConfig::default();
    config.seed = 12;
    let mut world = World::with_config(config);
    world.spawn_debris_field(Vector2::new(0.1, 0.0), 8, 0.3);

    let mut other = World::new();
    let mut rng = StdRng::seed_from_u64(12);
    create_debris_field(&mut other, Vector2::new(0.1, 0.0), 8, 0.3, &mut rng);

    assert_eq!(world.body_count(), 8);
    assert_eq!(other.body_count(), 8);
    for (a, b) in world.bodies().iter().zip(other.bodies()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.lifetime, b.lifetime);
        assert_eq!(a.spin, b.spin);
    }
}
