use kurbo::Shape as _;

use crate::{
    config::flower::{FlowerConfig, LeafConfig, LeafSide},
    foundation::core::{BezPath, Circle, Point, Rect},
    geometry::{
        petals::{PetalPlacement, place_petals},
        seeds::{SeedPlacement, place_seeds},
    },
};

/// Every shape of one flower, in viewport coordinates.
///
/// Produced by [`generate`]; identical configs always produce identical geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FlowerGeometry {
    /// Viewport the shapes are laid out in.
    pub viewport: Rect,
    /// Center of the flower head.
    pub center: Point,
    /// Stem under the flower head.
    pub stem: StemShape,
    /// Leaves, in reveal order.
    pub leaves: Vec<LeafShape>,
    /// Petals, in placement order.
    pub petals: Vec<PetalPlacement>,
    /// Flower center.
    pub disk: DiskShape,
    /// Seed marks, in spiral order.
    pub seeds: Vec<SeedPlacement>,
    /// Radius of each seed mark.
    pub seed_dot_radius: f64,
    /// Where the name label is anchored.
    pub label_anchor: Point,
}

/// Rounded rectangle stem.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StemShape {
    /// Stem bounds.
    pub rect: Rect,
    /// Corner rounding.
    pub corner_radius: f64,
}

impl StemShape {
    /// Pivot for the stem's growth; it extends downward from here.
    pub fn top_center(&self) -> Point {
        Point::new(self.rect.center().x, self.rect.y0)
    }

    /// Outline as a rounded rectangle.
    pub fn rounded_rect(&self) -> kurbo::RoundedRect {
        self.rect.to_rounded_rect(self.corner_radius)
    }
}

/// Leaf outline anchored on the stem.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LeafShape {
    /// Stem edge the leaf grows from.
    pub side: LeafSide,
    /// Attachment point on the stem edge.
    pub anchor: Point,
    /// Closed outline, serialized as SVG path data.
    #[serde(serialize_with = "serialize_svg_path")]
    pub path: BezPath,
}

/// Flower center disk.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DiskShape {
    /// Disk center.
    pub center: Point,
    /// Disk radius.
    pub radius: f64,
}

impl DiskShape {
    /// Outline as a circle.
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

impl FlowerGeometry {
    /// Smallest rectangle enclosing every shape.
    pub fn bounds(&self) -> Rect {
        let mut bounds = self.stem.rect.union(self.disk.circle().bounding_box());
        for leaf in &self.leaves {
            bounds = bounds.union(leaf.path.bounding_box());
        }
        for petal in &self.petals {
            bounds = bounds.union(petal.ellipse().bounding_box());
        }
        for seed in &self.seeds {
            bounds = bounds.union(seed.circle(self.seed_dot_radius).bounding_box());
        }
        bounds
    }
}

/// Lay out a flower from `config`.
///
/// `config` must have passed [`FlowerConfig::validate`]; nothing is clamped to the canvas.
#[tracing::instrument(skip(config), fields(petals = config.petal_count, seeds = config.seed_count))]
pub fn generate(config: &FlowerConfig) -> FlowerGeometry {
    debug_assert!(config.petal_count >= 1, "petal_count must be >= 1");

    let center = config.center();
    let stem = stem_shape(config, center);
    let leaves = config
        .leaves
        .iter()
        .map(|leaf| leaf_shape(leaf, &stem, center))
        .collect();

    let geometry = FlowerGeometry {
        viewport: config.viewport(),
        center,
        stem,
        leaves,
        petals: place_petals(config),
        disk: DiskShape {
            center,
            radius: config.disk_radius,
        },
        seeds: place_seeds(config),
        seed_dot_radius: config.seed_dot_radius,
        label_anchor: Point::new(center.x, config.view_offset_y + config.label_margin_top),
    };
    tracing::trace!(bounds = ?geometry.bounds(), "generated flower geometry");
    geometry
}

fn stem_shape(config: &FlowerConfig, center: Point) -> StemShape {
    let stem = &config.stem;
    let x0 = center.x - stem.width / 2.0;
    let y0 = center.y + stem.offset_y;
    StemShape {
        rect: Rect::new(x0, y0, x0 + stem.width, y0 + stem.height),
        corner_radius: stem.corner_radius,
    }
}

fn leaf_shape(leaf: &LeafConfig, stem: &StemShape, center: Point) -> LeafShape {
    let x = match leaf.side {
        LeafSide::Left => stem.rect.x0,
        LeafSide::Right => stem.rect.x1,
    };
    let anchor = Point::new(x, center.y + leaf.attach_offset_y);
    let tip = anchor + leaf.tip;

    let mut path = BezPath::new();
    path.move_to(anchor);
    path.quad_to(anchor + leaf.control, tip);
    path.quad_to(tip + leaf.return_control, anchor);
    path.close_path();

    LeafShape {
        side: leaf.side,
        anchor,
        path,
    }
}

fn serialize_svg_path<S: serde::Serializer>(path: &BezPath, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&path.to_svg())
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/flower.rs"]
mod tests;
