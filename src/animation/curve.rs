use crate::{
    animation::ease::Ease,
    foundation::error::{GirasolError, GirasolResult},
};

/// Share of a spring's window over which its response is eased onto the revealed pose.
const SPRING_SETTLE_TAIL: f64 = 0.25;

/// How the animation boundary should interpolate an element from its hidden pose.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Easing {
    /// Fixed-duration tween shaped by an [`Ease`] curve.
    Tween {
        /// Curve applied to normalized progress.
        ease: Ease,
    },
    /// Physically modelled spring settling on the revealed pose.
    Spring(Spring),
}

impl Easing {
    /// Tween with the given curve.
    pub const fn tween(ease: Ease) -> Self {
        Self::Tween { ease }
    }

    /// Unit-mass spring.
    pub const fn spring(stiffness: f64, damping: f64) -> Self {
        Self::Spring(Spring {
            stiffness,
            damping,
            mass: 1.0,
        })
    }

    /// Validate curve parameters.
    pub fn validate(&self) -> GirasolResult<()> {
        match self {
            Self::Tween { .. } => Ok(()),
            Self::Spring(spring) => spring.validate(),
        }
    }

    /// Interpolation factor `elapsed_secs` into an element's transition of `duration_secs`.
    ///
    /// Returns 0 before the transition starts and exactly 1 once `duration_secs` has
    /// elapsed. Springs may overshoot 1 in between; over the last quarter of the window
    /// whatever the spring has not settled is blended away, so the value arrives at 1
    /// continuously even when the window is shorter than the spring's settling time.
    pub fn sample(&self, elapsed_secs: f64, duration_secs: f64) -> f64 {
        if elapsed_secs <= 0.0 {
            return 0.0;
        }
        if elapsed_secs >= duration_secs {
            return 1.0;
        }
        let progress = elapsed_secs / duration_secs;
        match self {
            Self::Tween { ease } => ease.apply(progress),
            Self::Spring(spring) => {
                let x = spring.response(elapsed_secs);
                let tail = (progress - (1.0 - SPRING_SETTLE_TAIL)) / SPRING_SETTLE_TAIL;
                x + (1.0 - x) * Ease::SmoothStep.apply(tail)
            }
        }
    }
}

/// Damped harmonic oscillator pulled from 0 toward 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    /// Spring constant.
    pub stiffness: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Moving mass.
    pub mass: f64,
}

impl Spring {
    /// Validate spring parameters.
    pub fn validate(&self) -> GirasolResult<()> {
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(GirasolError::timeline("spring stiffness must be > 0"));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(GirasolError::timeline("spring damping must be >= 0"));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(GirasolError::timeline("spring mass must be > 0"));
        }
        Ok(())
    }

    /// Damping ratio; below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Position at `t` seconds after release from rest at 0.
    pub fn response(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-9 {
            return 1.0 - (-w0 * t).exp() * (1.0 + w0 * t);
        }
        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            return 1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin());
        }

        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - root);
        let r2 = -w0 * (zeta + root);
        1.0 + (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r1 - r2)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
