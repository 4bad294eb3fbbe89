use nbody_engine::bodies::{
    self, presets, mass_range, color_for_mass, temperature_to_color, render_size,
};
use nbody_engine::{Body, BodyKind, Vector2};
use approx::assert_relative_eq;

#[test]
fn test_body_creation_defaults() {
    let body = Body::new(Vector2::new(0.1, 0.2), Vector2::new(0.3, 0.4), 0.01, 2.0);

    assert_eq!(body.kind, BodyKind::Normal);
    assert!(!body.is_static());
    assert!(!body.is_decaying());
    assert!(!body.emits_light());
    assert_eq!(body.lifetime, None);
    assert_eq!(body.orbit_target, None);
    assert!(body.components.is_empty());
    assert!(body.trail.is_empty());

    assert_relative_eq!(body.speed(), (0.3f32 * 0.3 + 0.4 * 0.4).sqrt());
    assert_relative_eq!(body.kinetic_energy(), 0.5 * 2.0 * 0.25);
}

#[test]
fn test_static_flag() {
    let mut body = Body::new(Vector2::zero(), Vector2::new(1.0, 0.0), 0.01, 1.0);
    assert!(!body.is_static());

    body.set_static(true);
    assert!(body.is_static());
    // Static bodies report zero kinetic energy regardless of velocity
    assert_eq!(body.kinetic_energy(), 0.0);

    body.set_static(false);
    assert!(!body.is_static());
}

#[test]
fn test_trail_is_bounded() {
    let mut body = Body::new(Vector2::zero(), Vector2::zero(), 0.01, 1.0);

    for i in 0..(bodies::TRAIL_CAPACITY + 10) {
        body.position = Vector2::new(i as f32, 0.0);
        body.push_trail();
    }

    assert_eq!(body.trail.len(), bodies::TRAIL_CAPACITY);
    // Oldest entries were dropped, the newest is last
    assert_eq!(body.trail.last().unwrap().x, (bodies::TRAIL_CAPACITY + 9) as f32);
    assert_eq!(body.trail[0].x, 10.0);
}

#[test]
fn test_mass_range() {
    // Empty list falls back to the default range
    assert_eq!(mass_range(&[]), (1.0, 10.0));

    // Merged bodies are excluded from the scan
    let mut merged = Body::new(Vector2::zero(), Vector2::zero(), 0.01, 100.0);
    merged.kind = BodyKind::Merged;
    assert_eq!(mass_range(&[merged.clone()]), (1.0, 10.0));

    let light = Body::new(Vector2::zero(), Vector2::zero(), 0.01, 2.0);
    let heavy = Body::new(Vector2::zero(), Vector2::zero(), 0.01, 50.0);
    let (min_mass, max_mass) = mass_range(&[light, merged, heavy]);
    assert_eq!(min_mass, 2.0);
    assert_eq!(max_mass, 50.0);
}

#[test]
fn test_color_for_mass_degenerate_range() {
    // min == max must not divide by zero; the norm clamps to the midpoint
    let body = Body::new(Vector2::zero(), Vector2::zero(), 0.01, 5.0);
    let color = color_for_mass(&body, 5.0, 5.0);
    assert!(color.r.is_finite() && color.g.is_finite() && color.b.is_finite());
    assert!(color.r >= 0.0 && color.r <= 1.0);
    assert!(color.g >= 0.0 && color.g <= 1.0);
    assert!(color.b >= 0.0 && color.b <= 1.0);
}

#[test]
fn test_color_for_mass_ramp() {
    let mut body = Body::new(Vector2::zero(), Vector2::zero(), 0.01, 1.0);

    // Merged bodies get a fixed cyan regardless of the range
    body.kind = BodyKind::Merged;
    let cyan = color_for_mass(&body, 1.0, 10.0);
    assert_relative_eq!(cyan.r, 0.2);
    assert_relative_eq!(cyan.g, 0.8);
    assert_relative_eq!(cyan.b, 1.0);
    body.kind = BodyKind::Normal;

    // Lightest body sits at the blue end, heaviest at the red end
    body.mass = 1.0;
    let low = color_for_mass(&body, 1.0, 1000.0);
    assert!(low.b > low.r || low.b == 1.0);

    body.mass = 1000.0;
    let high = color_for_mass(&body, 1.0, 1000.0);
    assert_relative_eq!(high.r, 1.0);
    assert_relative_eq!(high.g, 0.0);
    assert_relative_eq!(high.b, 0.0);

    // Masses outside the range clamp instead of extrapolating
    body.mass = 1.0e6;
    assert_eq!(color_for_mass(&body, 1.0, 1000.0), high);
}

#[test]
fn test_temperature_to_color_bands() {
    // Every band stays inside [0, 1]
    for kelvin in [0.0, 3000.0, 5000.0, 7000.0, 12000.0, 50000.0] {
        let c = temperature_to_color(kelvin);
        assert!(c.r >= 0.0 && c.r <= 1.0);
        assert!(c.g >= 0.0 && c.g <= 1.0);
        assert!(c.b >= 0.0 && c.b <= 1.0);
    }

    // Cool stars are red-dominant, hot stars trend blue
    let cool = temperature_to_color(3000.0);
    assert!(cool.r > cool.b);
    let hot = temperature_to_color(20000.0);
    assert!(hot.b > temperature_to_color(6000.0).b);
}

#[test]
fn test_render_size_table() {
    let mut body = Body::new(Vector2::zero(), Vector2::zero(), 0.01, 1.0);

    body.kind = BodyKind::BlackHole;
    assert_relative_eq!(render_size(&body), 0.01 * 500.0);
    body.kind = BodyKind::NeutronStar;
    assert_relative_eq!(render_size(&body), 0.01 * 700.0);
    body.kind = BodyKind::GasGiant;
    assert_relative_eq!(render_size(&body), 0.01 * 800.0);
    body.kind = BodyKind::Merged;
    assert_relative_eq!(render_size(&body), 0.01 * 800.0);
    body.kind = BodyKind::Normal;
    assert_relative_eq!(render_size(&body), 0.01 * 600.0);
    body.kind = BodyKind::Asteroid;
    assert_relative_eq!(render_size(&body), 0.01 * 600.0);
}

#[test]
fn test_black_hole_preset() {
    let hole = presets::black_hole(0.1, -0.2, 10.0);

    assert_eq!(hole.kind, BodyKind::BlackHole);
    assert_relative_eq!(hole.position.x, 0.1);
    assert_relative_eq!(hole.position.y, -0.2);
    assert_relative_eq!(hole.absorption, 1.0);
    assert_relative_eq!(hole.density, 1000.0);

    // Schwarzschild-like horizon scaling
    assert_relative_eq!(hole.event_horizon, presets::event_horizon_for_mass(10.0));
    assert_relative_eq!(hole.event_horizon, 2.0 * 10.0 * 0.001 * 2.0);
}

#[test]
fn test_star_preset() {
    let star = presets::star(0.0, 0.0, 8.0, 5800.0);

    assert_eq!(star.kind, BodyKind::Star);
    assert!(star.emits_light());
    assert_relative_eq!(star.temperature, 5800.0);
    assert_relative_eq!(star.luminosity, 0.8);
    assert!(star.radius > 0.02);
}

#[test]
fn test_planet_and_small_body_presets() {
    let rocky = presets::planet(0.0, 0.0, 0.01, 1.0, false);
    assert_eq!(rocky.kind, BodyKind::RockyPlanet);
    assert!(rocky.kind.is_planet());
    assert_relative_eq!(rocky.density, 5.5);

    let giant = presets::planet(0.0, 0.0, 0.015, 3.0, true);
    assert_eq!(giant.kind, BodyKind::GasGiant);
    assert!(giant.kind.is_planet());
    assert_relative_eq!(giant.density, 1.3);

    let comet = presets::comet(0.0, 0.0, 0.1, 0.2);
    assert_eq!(comet.kind, BodyKind::Comet);
    assert_eq!(comet.lifetime, Some(20.0));
    assert_relative_eq!(comet.velocity.x, 0.1);

    let remnant = presets::neutron_star(0.0, 0.0, 2.0);
    assert_eq!(remnant.kind, BodyKind::NeutronStar);
    assert!(remnant.emits_light());
    assert_relative_eq!(remnant.spin, 20.0);
    assert_relative_eq!(remnant.magnetic_field, 20.0);
}
