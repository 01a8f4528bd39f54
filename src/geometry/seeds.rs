use crate::{
    config::flower::FlowerConfig,
    foundation::core::{Circle, Point, Vec2, deg_to_rad, normalize_deg, polar},
};

/// Divergence between consecutive seeds. Approximates the golden angle, which packs the
/// spiral evenly without collision checks.
pub const GOLDEN_ANGLE_DEG: f64 = 137.5;

/// One seed mark on the Vogel spiral.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SeedPlacement {
    /// Position along the spiral, `0..seed_count`.
    pub index: u32,
    /// `index * GOLDEN_ANGLE_DEG`, wrapped into `[0, 360)`.
    pub angle_deg: f64,
    /// Spiral radius `k * sqrt(index)` before the aspect stretch.
    pub radius: f64,
    /// Mark center.
    pub center: Point,
}

impl SeedPlacement {
    /// Mark outline with the given dot radius.
    pub fn circle(&self, dot_radius: f64) -> Circle {
        Circle::new(self.center, dot_radius)
    }
}

pub(crate) fn place_seeds(config: &FlowerConfig) -> Vec<SeedPlacement> {
    let center = config.center();
    let stretch = Vec2::new(config.seed_aspect, config.seed_aspect);

    (0..config.seed_count)
        .map(|index| {
            let i = f64::from(index);
            let angle_deg = normalize_deg(i * GOLDEN_ANGLE_DEG);
            let radius = config.seed_scale * i.sqrt();
            SeedPlacement {
                index,
                angle_deg,
                radius,
                center: polar(center, radius, deg_to_rad(angle_deg), stretch),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/seeds.rs"]
mod tests;
