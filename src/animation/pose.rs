/// A visual attribute the animation boundary moves between poses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimatedProperty {
    /// Uniform scale about the transform origin.
    Scale,
    /// Vertical scale about the transform origin.
    ScaleY,
    /// Alpha in `[0, 1]`.
    Opacity,
    /// Fraction of an outline that is stroked.
    PathLength,
    /// Vertical translation in viewport units.
    OffsetY,
}

/// Where scale transforms pivot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOrigin {
    /// Center of the shape's bounds.
    Center,
    /// Top edge, horizontally centered; the shape grows downward.
    Top,
}

/// One property moving from its hidden value to its revealed value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyTween {
    /// Animated attribute.
    pub property: AnimatedProperty,
    /// Value in the hidden pose.
    pub from: f64,
    /// Value in the revealed pose.
    pub to: f64,
}

impl PropertyTween {
    /// Tween from `from` to `to`.
    pub const fn new(property: AnimatedProperty, from: f64, to: f64) -> Self {
        Self { property, from, to }
    }

    /// Fades from transparent to opaque.
    pub const fn fade_in() -> Self {
        Self::new(AnimatedProperty::Opacity, 0.0, 1.0)
    }

    /// Value at interpolation factor `t`. Not clamped, so spring overshoot carries through.
    pub fn value_at(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pose.rs"]
mod tests;
