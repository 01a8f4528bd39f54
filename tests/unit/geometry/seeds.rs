use super::*;

fn config(seed_count: u32) -> FlowerConfig {
    FlowerConfig {
        seed_count,
        ..FlowerConfig::default()
    }
}

#[test]
fn zero_seeds_yield_nothing() {
    assert!(place_seeds(&config(0)).is_empty());
}

#[test]
fn first_seed_is_the_center() {
    let cfg = config(10);
    let seeds = place_seeds(&cfg);
    assert_eq!(seeds[0].radius, 0.0);
    assert_eq!(seeds[0].center, cfg.center());
}

#[test]
fn angles_step_by_golden_angle_mod_turn() {
    let seeds = place_seeds(&config(10));
    assert_eq!(seeds.len(), 10);
    for s in &seeds {
        let expected = (f64::from(s.index) * 137.5) % 360.0;
        assert!((s.angle_deg - expected).abs() < 1e-9);
        assert!((0.0..360.0).contains(&s.angle_deg));
    }
    assert_eq!(seeds[3].angle_deg, 52.5);
}

#[test]
fn radius_grows_with_sqrt_of_index() {
    let cfg = config(50);
    let seeds = place_seeds(&cfg);
    for w in seeds.windows(2) {
        assert!(w[0].radius <= w[1].radius);
    }
    assert!((seeds[4].radius - 2.0 * cfg.seed_scale).abs() < 1e-12);
    assert!((seeds[9].radius - 3.0 * cfg.seed_scale).abs() < 1e-12);
}

#[test]
fn aspect_stretches_distance_from_center() {
    let cfg = config(10);
    let c = cfg.center();
    for s in place_seeds(&cfg) {
        let d = s.center.distance(c);
        assert!((d - s.radius * cfg.seed_aspect).abs() < 1e-9);
    }
}

#[test]
fn default_seeds_stay_inside_the_disk() {
    let cfg = FlowerConfig::default();
    let c = cfg.center();
    for s in place_seeds(&cfg) {
        assert!(s.center.distance(c) + cfg.seed_dot_radius <= cfg.disk_radius);
    }
}

#[test]
fn circle_uses_dot_radius() {
    let s = place_seeds(&config(3))[2];
    let circle = s.circle(2.0);
    assert_eq!(circle.center, s.center);
    assert_eq!(circle.radius, 2.0);
}
