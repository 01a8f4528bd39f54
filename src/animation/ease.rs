/// Tween curve applied to a normalized progress value.
///
/// Every curve maps 0 to 0 and 1 to 1 and is monotone in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    Linear,
    /// Fast start that decelerates into the revealed pose; used for stem growth.
    OutCubic,
    /// Slow at both ends; used for leaf outlines being drawn.
    InOutCubic,
    /// Hermite `3t² - 2t³`; flat at both ends, used to settle springs into place.
    SmoothStep,
}

impl Ease {
    /// Map `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => {
                let rest = 1.0 - t;
                1.0 - rest * rest * rest
            }
            Self::InOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::InOutCubic => {
                let rest = 2.0 * (1.0 - t);
                1.0 - rest * rest * rest / 2.0
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
