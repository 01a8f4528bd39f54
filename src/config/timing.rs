use crate::{
    animation::{curve::Easing, ease::Ease},
    foundation::error::{GirasolError, GirasolResult},
};

/// Duration and curve shared by every element of one kind.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageTiming {
    /// Transition length in seconds, independent of petal count.
    pub duration_secs: f64,
    /// Interpolation classification handed to the animation boundary.
    pub easing: Easing,
}

impl StageTiming {
    /// Stage of `duration_secs` using `easing`.
    pub const fn new(duration_secs: f64, easing: Easing) -> Self {
        Self {
            duration_secs,
            easing,
        }
    }

    fn validate(&self, stage: &str) -> GirasolResult<()> {
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(GirasolError::timeline(format!(
                "{stage} duration_secs must be > 0"
            )));
        }
        self.easing.validate()
    }
}

/// Staging constants for the reveal.
///
/// Delays are derived from these by [`crate::schedule_with`]; the petal stagger is the
/// only term that grows with petal count.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Gap between consecutive petal start times.
    pub per_petal_delay_secs: f64,
    /// Leaves start once this fraction of the stem's duration has elapsed.
    pub leaf_start_fraction: f64,
    /// Extra delay applied per leaf after the first.
    pub leaf_stagger_secs: f64,
    /// Seeds start this long after the disk.
    pub seeds_lag_secs: f64,
    /// Label starts this long after the disk; never before the seeds.
    pub label_lag_secs: f64,
    /// Stem growth.
    pub stem: StageTiming,
    /// Leaf outline drawing.
    pub leaf: StageTiming,
    /// Each petal's pop-in.
    pub petal: StageTiming,
    /// Center disk pop-in.
    pub disk: StageTiming,
    /// Seed marks pop-in.
    pub seeds: StageTiming,
    /// Name label drop-in.
    pub label: StageTiming,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            per_petal_delay_secs: 0.5,
            leaf_start_fraction: 1.0,
            leaf_stagger_secs: 0.2,
            seeds_lag_secs: 0.1,
            label_lag_secs: 0.5,
            stem: StageTiming::new(1.2, Easing::tween(Ease::OutCubic)),
            leaf: StageTiming::new(1.2, Easing::tween(Ease::InOutCubic)),
            petal: StageTiming::new(0.8, Easing::spring(120.0, 10.0)),
            disk: StageTiming::new(0.6, Easing::spring(180.0, 10.0)),
            seeds: StageTiming::new(0.6, Easing::spring(180.0, 10.0)),
            label: StageTiming::new(0.5, Easing::spring(120.0, 1.0)),
        }
    }
}

impl TimelineConfig {
    /// Reject staging the scheduler cannot honor.
    pub fn validate(&self) -> GirasolResult<()> {
        if !(self.per_petal_delay_secs.is_finite() && self.per_petal_delay_secs > 0.0) {
            return Err(GirasolError::timeline("per_petal_delay_secs must be > 0"));
        }
        for (what, v) in [
            ("leaf_start_fraction", self.leaf_start_fraction),
            ("leaf_stagger_secs", self.leaf_stagger_secs),
            ("seeds_lag_secs", self.seeds_lag_secs),
            ("label_lag_secs", self.label_lag_secs),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(GirasolError::timeline(format!("{what} must be >= 0")));
            }
        }
        if self.label_lag_secs < self.seeds_lag_secs {
            return Err(GirasolError::timeline(
                "label_lag_secs must be >= seeds_lag_secs",
            ));
        }
        self.stem.validate("stem")?;
        self.leaf.validate("leaf")?;
        self.petal.validate("petal")?;
        self.disk.validate("disk")?;
        self.seeds.validate("seeds")?;
        self.label.validate("label")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/timing.rs"]
mod tests;
