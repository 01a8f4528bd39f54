use crate::foundation::{
    core::{Point, Rect, Vec2},
    error::{GirasolError, GirasolResult},
};

/// Geometry parameters for one sunflower.
///
/// All lengths are in viewport units. The generator trusts these values; call
/// [`FlowerConfig::validate`] at the configuration boundary before generating.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlowerConfig {
    /// Edge length of the square canvas. The flower is centered at `(size/2, size/2)`.
    pub canvas_size: f64,
    /// Vertical offset of the exported viewport's top edge.
    pub view_offset_y: f64,
    /// Number of petals on the ring.
    pub petal_count: u32,
    /// Distance from the center to each petal's center.
    pub ring_radius: f64,
    /// Petal ellipse half-axis along its rotation.
    pub petal_radius_x: f64,
    /// Petal ellipse half-axis across its rotation.
    pub petal_radius_y: f64,
    /// Radius of the flower's center disk.
    pub disk_radius: f64,
    /// Number of seed marks inside the disk.
    pub seed_count: u32,
    /// Spiral scale `k` in `radius_i = k * sqrt(i)`.
    pub seed_scale: f64,
    /// Stretch applied to seed offsets to tune visual density.
    pub seed_aspect: f64,
    /// Radius of each seed mark.
    pub seed_dot_radius: f64,
    /// Stem rectangle.
    pub stem: StemConfig,
    /// Leaf outlines, in reveal order.
    pub leaves: [LeafConfig; 2],
    /// Distance from the viewport top to the label's baseline anchor.
    pub label_margin_top: f64,
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self {
            canvas_size: 450.0,
            view_offset_y: 20.0,
            petal_count: 9,
            ring_radius: 70.0,
            petal_radius_x: 54.0,
            petal_radius_y: 50.0,
            disk_radius: 40.0,
            seed_count: 10,
            seed_scale: 4.5,
            seed_aspect: 1.7,
            seed_dot_radius: 2.0,
            stem: StemConfig::default(),
            leaves: [LeafConfig::default_left(), LeafConfig::default_right()],
            label_margin_top: 24.0,
        }
    }
}

impl FlowerConfig {
    /// Center of the flower head.
    pub fn center(&self) -> Point {
        Point::new(self.canvas_size / 2.0, self.canvas_size / 2.0)
    }

    /// Fixed square viewport handed to renderers and exporters.
    pub fn viewport(&self) -> Rect {
        Rect::new(
            0.0,
            self.view_offset_y,
            self.canvas_size,
            self.view_offset_y + self.canvas_size,
        )
    }

    /// Reject configurations the generator cannot honor.
    pub fn validate(&self) -> GirasolResult<()> {
        if self.petal_count == 0 {
            return Err(GirasolError::validation("petal_count must be >= 1"));
        }
        positive("canvas_size", self.canvas_size)?;
        finite("view_offset_y", self.view_offset_y)?;
        positive("ring_radius", self.ring_radius)?;
        positive("petal_radius_x", self.petal_radius_x)?;
        positive("petal_radius_y", self.petal_radius_y)?;
        positive("disk_radius", self.disk_radius)?;
        positive("seed_scale", self.seed_scale)?;
        positive("seed_aspect", self.seed_aspect)?;
        positive("seed_dot_radius", self.seed_dot_radius)?;
        finite("label_margin_top", self.label_margin_top)?;
        self.stem.validate()?;
        for leaf in &self.leaves {
            leaf.validate()?;
        }
        Ok(())
    }
}

/// Rounded stem rectangle hanging below the flower head.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StemConfig {
    /// Horizontal extent, centered on the flower.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Distance from the flower center down to the stem's top edge.
    pub offset_y: f64,
    /// Corner rounding.
    pub corner_radius: f64,
}

impl Default for StemConfig {
    fn default() -> Self {
        Self {
            width: 12.0,
            height: 190.0,
            offset_y: 40.0,
            corner_radius: 3.0,
        }
    }
}

impl StemConfig {
    fn validate(&self) -> GirasolResult<()> {
        positive("stem.width", self.width)?;
        positive("stem.height", self.height)?;
        finite("stem.offset_y", self.offset_y)?;
        if !(self.corner_radius.is_finite() && self.corner_radius >= 0.0) {
            return Err(GirasolError::validation("stem.corner_radius must be >= 0"));
        }
        Ok(())
    }
}

/// Which stem edge a leaf grows from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafSide {
    /// Left stem edge.
    Left,
    /// Right stem edge.
    Right,
}

/// Two-curve leaf outline anchored on a stem edge.
///
/// The outline runs from the anchor out to `tip` along one quadratic curve and back to the
/// anchor along a second one. `control` and `tip` are relative to the anchor;
/// `return_control` is relative to the tip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LeafConfig {
    /// Stem edge the leaf is attached to.
    pub side: LeafSide,
    /// Distance below the flower center of the anchor.
    pub attach_offset_y: f64,
    /// Control point of the outgoing curve.
    pub control: Vec2,
    /// Leaf tip.
    pub tip: Vec2,
    /// Control point of the returning curve.
    pub return_control: Vec2,
}

impl LeafConfig {
    /// Leaf drooping to the left of the stem.
    pub fn default_left() -> Self {
        Self {
            side: LeafSide::Left,
            attach_offset_y: 125.0,
            control: Vec2::new(-80.0, -30.0),
            tip: Vec2::new(-110.0, 30.0),
            return_control: Vec2::new(40.0, -10.0),
        }
    }

    /// Leaf drooping to the right of the stem.
    pub fn default_right() -> Self {
        Self {
            side: LeafSide::Right,
            attach_offset_y: 110.0,
            control: Vec2::new(90.0, -30.0),
            tip: Vec2::new(120.0, 35.0),
            return_control: Vec2::new(-45.0, -8.0),
        }
    }

    fn validate(&self) -> GirasolResult<()> {
        finite("leaf.attach_offset_y", self.attach_offset_y)?;
        for (what, v) in [
            ("leaf.control", self.control),
            ("leaf.tip", self.tip),
            ("leaf.return_control", self.return_control),
        ] {
            if !v.is_finite() {
                return Err(GirasolError::validation(format!("{what} must be finite")));
            }
        }
        if self.tip.hypot() == 0.0 {
            return Err(GirasolError::validation("leaf.tip must differ from its anchor"));
        }
        Ok(())
    }
}

fn positive(what: &str, v: f64) -> GirasolResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(GirasolError::validation(format!("{what} must be > 0")))
    }
}

fn finite(what: &str, v: f64) -> GirasolResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(GirasolError::validation(format!("{what} must be finite")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/flower.rs"]
mod tests;
