use super::*;
use kurbo::{PathEl, Shape as _};

#[test]
fn default_counts_match_config() {
    let cfg = FlowerConfig::default();
    let g = generate(&cfg);
    assert_eq!(g.petals.len(), 9);
    assert_eq!(g.seeds.len(), 10);
    assert_eq!(g.leaves.len(), 2);
    assert_eq!(g.center, Point::new(225.0, 225.0));
}

#[test]
fn generate_is_deterministic() {
    let cfg = FlowerConfig {
        petal_count: 17,
        seed_count: 200,
        ..FlowerConfig::default()
    };
    assert_eq!(generate(&cfg), generate(&cfg));
}

#[test]
fn stem_hangs_below_the_disk() {
    let g = generate(&FlowerConfig::default());
    assert_eq!(g.stem.rect, Rect::new(219.0, 265.0, 231.0, 455.0));
    assert_eq!(g.stem.top_center(), Point::new(225.0, 265.0));
    assert!(g.stem.rect.y0 >= g.disk.center.y + g.disk.radius);
    assert_eq!(g.stem.rounded_rect().rect(), g.stem.rect);
}

#[test]
fn leaves_attach_to_stem_edges() {
    let g = generate(&FlowerConfig::default());
    let left = &g.leaves[0];
    let right = &g.leaves[1];

    assert_eq!(left.side, LeafSide::Left);
    assert_eq!(left.anchor, Point::new(219.0, 350.0));
    assert_eq!(right.side, LeafSide::Right);
    assert_eq!(right.anchor, Point::new(231.0, 335.0));

    assert!(left.path.bounding_box().x0 < g.stem.rect.x0);
    assert!(right.path.bounding_box().x1 > g.stem.rect.x1);
}

#[test]
fn leaf_outline_is_closed_loop_of_two_quads() {
    let g = generate(&FlowerConfig::default());
    let els = g.leaves[0].path.elements();
    assert_eq!(els.len(), 4);
    assert!(matches!(els[0], PathEl::MoveTo(p) if p == g.leaves[0].anchor));
    assert!(matches!(els[1], PathEl::QuadTo(_, tip) if tip == Point::new(109.0, 380.0)));
    assert!(matches!(els[2], PathEl::QuadTo(_, back) if back == g.leaves[0].anchor));
    assert!(matches!(els[3], PathEl::ClosePath));
}

#[test]
fn label_anchor_sits_at_viewport_top() {
    let g = generate(&FlowerConfig::default());
    assert_eq!(g.label_anchor, Point::new(225.0, 44.0));
    assert!(g.viewport.contains(g.label_anchor));
}

#[test]
fn default_flower_fits_its_viewport() {
    let g = generate(&FlowerConfig::default());
    let b = g.bounds();
    let v = g.viewport;
    assert!(b.x0 >= v.x0 && b.y0 >= v.y0);
    assert!(b.x1 <= v.x1 && b.y1 <= v.y1);
}

#[test]
fn geometry_serializes_leaf_paths_as_svg() {
    let g = generate(&FlowerConfig::default());
    let json = serde_json::to_value(&g).unwrap();
    let d = json["leaves"][0]["path"].as_str().unwrap();
    assert!(d.starts_with('M'));
    assert!(d.contains('Q'));
    assert_eq!(json["petals"].as_array().unwrap().len(), 9);
}
