use std::time::Instant;

use crate::{
    config::{flower::FlowerConfig, settings::RevealSettings, timing::TimelineConfig},
    foundation::error::GirasolResult,
    geometry::flower::{FlowerGeometry, generate},
    reveal::{
        name::{NameRejection, normalize_name},
        plan::RevealPlan,
    },
    timeline::schedule::{RevealTimeline, schedule_with},
};

/// A committed name together with the derived data computed when it was committed.
#[derive(Clone, Debug)]
pub struct Reveal {
    name: String,
    started_at: Instant,
    generation: u64,
    geometry: FlowerGeometry,
    timeline: RevealTimeline,
}

impl Reveal {
    /// Trimmed, committed name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the reveal started, as supplied by the caller.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Seconds since the reveal started, for timelines sampled against a clock.
    pub fn elapsed_secs(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.started_at).as_secs_f64()
    }

    /// 1-based count of reveals started by the owning controller, this one included.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Geometry computed on entry.
    pub fn geometry(&self) -> &FlowerGeometry {
        &self.geometry
    }

    /// Timeline computed on entry.
    pub fn timeline(&self) -> &RevealTimeline {
        &self.timeline
    }
}

/// What the display should show.
#[derive(Clone, Debug, Default)]
pub enum RevealState {
    /// The name prompt is up and nothing is drawn.
    #[default]
    AwaitingName,
    /// The flower for a committed name is being revealed.
    Revealed(Box<Reveal>),
}

impl RevealState {
    /// Whether the name prompt should be shown.
    pub fn is_awaiting_name(&self) -> bool {
        matches!(self, Self::AwaitingName)
    }

    /// Active reveal, if any.
    pub fn reveal(&self) -> Option<&Reveal> {
        match self {
            Self::AwaitingName => None,
            Self::Revealed(reveal) => Some(reveal.as_ref()),
        }
    }

    /// Committed name, if any.
    pub fn name(&self) -> Option<&str> {
        self.reveal().map(Reveal::name)
    }
}

/// Result of [`RevealController::submit_name`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The name was committed and a reveal started.
    Revealed,
    /// The name was not acceptable; keep prompting.
    Rejected(NameRejection),
    /// A reveal is already showing; the prompt should not have been available.
    Ignored,
}

/// Owns the reveal state and the only two transitions that change it.
#[derive(Clone, Debug)]
pub struct RevealController {
    flower: FlowerConfig,
    timeline: TimelineConfig,
    state: RevealState,
    reveals: u64,
}

impl Default for RevealController {
    fn default() -> Self {
        Self {
            flower: FlowerConfig::default(),
            timeline: TimelineConfig::default(),
            state: RevealState::AwaitingName,
            reveals: 0,
        }
    }
}

impl RevealController {
    /// Controller for validated configurations, starting at the name prompt.
    pub fn new(flower: FlowerConfig, timeline: TimelineConfig) -> GirasolResult<Self> {
        flower.validate()?;
        timeline.validate()?;
        Ok(Self {
            flower,
            timeline,
            ..Self::default()
        })
    }

    /// Controller for the flower and timeline sections of `settings`.
    pub fn from_settings(settings: &RevealSettings) -> GirasolResult<Self> {
        Self::new(settings.flower.clone(), settings.timeline.clone())
    }

    /// Current state.
    pub fn state(&self) -> &RevealState {
        &self.state
    }

    /// Whether the name prompt should be shown.
    pub fn is_awaiting_name(&self) -> bool {
        self.state.is_awaiting_name()
    }

    /// Flower configuration every reveal uses.
    pub fn flower_config(&self) -> &FlowerConfig {
        &self.flower
    }

    /// Timeline configuration every reveal uses.
    pub fn timeline_config(&self) -> &TimelineConfig {
        &self.timeline
    }

    /// Commit `raw` as the name and start a reveal.
    ///
    /// Geometry and timeline are computed here, once per reveal, and kept on the state.
    /// Blank names leave the prompt up.
    #[tracing::instrument(skip_all)]
    pub fn submit_name(&mut self, raw: &str, started_at: Instant) -> SubmitOutcome {
        if let RevealState::Revealed(reveal) = &self.state {
            tracing::warn!(
                generation = reveal.generation,
                "name submitted while a reveal is showing"
            );
            return SubmitOutcome::Ignored;
        }

        let name = match normalize_name(raw) {
            Ok(name) => name,
            Err(rejection) => {
                tracing::debug!(%rejection, "name rejected");
                return SubmitOutcome::Rejected(rejection);
            }
        };

        self.reveals += 1;
        let reveal = Reveal {
            name: name.to_owned(),
            started_at,
            generation: self.reveals,
            geometry: generate(&self.flower),
            timeline: schedule_with(self.flower.petal_count, &self.timeline),
        };
        tracing::debug!(
            generation = reveal.generation,
            total_secs = reveal.timeline.total_duration_secs(),
            "reveal started"
        );
        self.state = RevealState::Revealed(Box::new(reveal));
        SubmitOutcome::Revealed
    }

    /// Return to the name prompt, discarding the name, geometry and timeline.
    ///
    /// Returns whether a reveal was discarded.
    #[tracing::instrument(skip(self))]
    pub fn reset(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            RevealState::AwaitingName => false,
            RevealState::Revealed(reveal) => {
                tracing::debug!(generation = reveal.generation, "reveal discarded");
                true
            }
        }
    }

    /// Data for the rendering boundary, built from the stored reveal without recomputing it.
    pub fn plan(&self) -> Option<RevealPlan> {
        self.state
            .reveal()
            .map(|r| RevealPlan::build(&r.name, r.generation, &r.geometry, &r.timeline))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/controller.rs"]
mod tests;
