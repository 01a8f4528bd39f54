pub use kurbo::{Affine, BezPath, Circle, Ellipse, Point, Rect, Vec2};

pub(crate) fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Wraps an angle in degrees into `[0, 360)`.
pub(crate) fn normalize_deg(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Point at `radius` from `center` along `angle_rad`, with each axis stretched by `scale`.
pub(crate) fn polar(center: Point, radius: f64, angle_rad: f64, scale: Vec2) -> Point {
    let (sin, cos) = angle_rad.sin_cos();
    Point::new(
        center.x + radius * cos * scale.x,
        center.y + radius * sin * scale.y,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
