use crate::{
    config::flower::FlowerConfig,
    foundation::core::{Affine, Ellipse, Point, Vec2, deg_to_rad, polar},
};

/// One petal on the ring, in placement (and stagger) order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PetalPlacement {
    /// Position on the ring, `0..petal_count`.
    pub index: u32,
    /// Placement angle, `360 * index / petal_count`.
    pub angle_deg: f64,
    /// Ellipse center on the ring.
    pub center: Point,
    /// Ellipse half-axes before rotation.
    pub radii: Vec2,
}

impl PetalPlacement {
    /// The petal is rotated by its own placement angle so it fans out radially.
    pub fn rotation_rad(&self) -> f64 {
        deg_to_rad(self.angle_deg)
    }

    /// Outline of the petal.
    pub fn ellipse(&self) -> Ellipse {
        Ellipse::new(self.center, self.radii, self.rotation_rad())
    }

    /// Rotation about the petal's own center, for renderers that draw an axis-aligned ellipse.
    pub fn transform(&self) -> Affine {
        Affine::rotate_about(self.rotation_rad(), self.center)
    }
}

pub(crate) fn place_petals(config: &FlowerConfig) -> Vec<PetalPlacement> {
    let center = config.center();
    let radii = Vec2::new(config.petal_radius_x, config.petal_radius_y);
    let count = f64::from(config.petal_count);

    (0..config.petal_count)
        .map(|index| {
            let angle_deg = 360.0 * f64::from(index) / count;
            PetalPlacement {
                index,
                angle_deg,
                center: polar(
                    center,
                    config.ring_radius,
                    deg_to_rad(angle_deg),
                    Vec2::new(1.0, 1.0),
                ),
                radii,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/petals.rs"]
mod tests;
