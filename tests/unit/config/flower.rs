use super::*;

#[test]
fn defaults_validate() {
    FlowerConfig::default().validate().unwrap();
}

#[test]
fn center_and_viewport_follow_canvas_size() {
    let cfg = FlowerConfig::default();
    assert_eq!(cfg.center(), Point::new(225.0, 225.0));
    assert_eq!(cfg.viewport(), Rect::new(0.0, 20.0, 450.0, 470.0));
}

#[test]
fn validate_rejects_zero_petals() {
    let cfg = FlowerConfig {
        petal_count: 0,
        ..FlowerConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("petal_count"));
}

#[test]
fn zero_seeds_is_valid() {
    let cfg = FlowerConfig {
        seed_count: 0,
        ..FlowerConfig::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn validate_rejects_non_positive_radii() {
    for cfg in [
        FlowerConfig {
            ring_radius: 0.0,
            ..FlowerConfig::default()
        },
        FlowerConfig {
            petal_radius_x: -1.0,
            ..FlowerConfig::default()
        },
        FlowerConfig {
            disk_radius: f64::NAN,
            ..FlowerConfig::default()
        },
        FlowerConfig {
            canvas_size: f64::INFINITY,
            ..FlowerConfig::default()
        },
    ] {
        assert!(matches!(cfg.validate(), Err(GirasolError::Validation(_))));
    }
}

#[test]
fn validate_rejects_degenerate_stem_and_leaves() {
    let mut cfg = FlowerConfig::default();
    cfg.stem.height = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = FlowerConfig::default();
    cfg.leaves[1].tip = Vec2::ZERO;
    assert!(cfg.validate().is_err());
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg: FlowerConfig =
        serde_json::from_str(r#"{ "petal_count": 12, "stem": { "height": 150.0 } }"#).unwrap();
    assert_eq!(cfg.petal_count, 12);
    assert_eq!(cfg.stem.height, 150.0);
    assert_eq!(cfg.stem.width, 12.0);
    assert_eq!(cfg.ring_radius, 70.0);
    assert_eq!(cfg.leaves[0].side, LeafSide::Left);
}
