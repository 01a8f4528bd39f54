use crate::{
    animation::curve::Easing,
    config::timing::{StageTiming, TimelineConfig},
    timeline::element::{ElementId, LEAF_COUNT},
};

/// When and how one element is revealed, relative to the start of the reveal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementTiming {
    /// Seconds after reveal start before the element begins to animate.
    pub delay_secs: f64,
    /// Seconds the transition lasts.
    pub duration_secs: f64,
    /// Interpolation classification.
    pub easing: Easing,
}

impl ElementTiming {
    fn at(delay_secs: f64, stage: &StageTiming) -> Self {
        Self {
            delay_secs,
            duration_secs: stage.duration_secs,
            easing: stage.easing,
        }
    }

    /// Seconds after reveal start when the element reaches its revealed pose.
    pub fn end_secs(&self) -> f64 {
        self.delay_secs + self.duration_secs
    }

    /// Linear progress in `[0, 1]` at `t` seconds after reveal start.
    pub fn progress_at(&self, t: f64) -> f64 {
        ((t - self.delay_secs) / self.duration_secs).clamp(0.0, 1.0)
    }

    /// Interpolation factor at `t` seconds after reveal start, shaped by the easing.
    pub fn eased_at(&self, t: f64) -> f64 {
        self.easing.sample(t - self.delay_secs, self.duration_secs)
    }
}

/// Timing of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimelineEntry {
    /// Which element.
    pub element: ElementId,
    /// When and how it is revealed.
    #[serde(flatten)]
    pub timing: ElementTiming,
}

/// Complete, read-only schedule for one reveal.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealTimeline {
    petal_count: u32,
    entries: Vec<TimelineEntry>, // sorted by element
}

impl RevealTimeline {
    /// Petal count the timeline was scheduled for.
    pub fn petal_count(&self) -> u32 {
        self.petal_count
    }

    /// All entries in catalogue order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Timing of `element`, if it is part of this timeline.
    pub fn get(&self, element: ElementId) -> Option<&ElementTiming> {
        self.entries
            .binary_search_by(|e| e.element.cmp(&element))
            .ok()
            .map(|i| &self.entries[i].timing)
    }

    /// Entries ordered by start time; ties keep catalogue order.
    pub fn by_start(&self) -> Vec<&TimelineEntry> {
        let mut out: Vec<&TimelineEntry> = self.entries.iter().collect();
        out.sort_by(|a, b| a.timing.delay_secs.total_cmp(&b.timing.delay_secs));
        out
    }

    /// Elements that have begun animating `t` seconds after reveal start.
    pub fn started_at(&self, t: f64) -> impl Iterator<Item = ElementId> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.timing.delay_secs <= t)
            .map(|e| e.element)
    }

    /// Seconds until the label, the last staged element, is fully revealed.
    pub fn label_end_secs(&self) -> f64 {
        self.get(ElementId::Label).map_or(0.0, ElementTiming::end_secs)
    }

    /// Seconds until every element is fully revealed.
    pub fn total_duration_secs(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.timing.end_secs())
            .fold(0.0, f64::max)
    }
}

/// Schedule a reveal of `petal_count` petals with the default staging.
pub fn schedule(petal_count: u32) -> RevealTimeline {
    schedule_with(petal_count, &TimelineConfig::default())
}

/// Schedule a reveal of `petal_count` petals.
///
/// `petal_count` must be >= 1 and `config` must have passed [`TimelineConfig::validate`].
#[tracing::instrument(skip(config))]
pub fn schedule_with(petal_count: u32, config: &TimelineConfig) -> RevealTimeline {
    debug_assert!(petal_count >= 1, "petal_count must be >= 1");

    let mut entries = Vec::with_capacity(petal_count as usize + usize::from(LEAF_COUNT) + 4);

    entries.push(TimelineEntry {
        element: ElementId::Stem,
        timing: ElementTiming::at(0.0, &config.stem),
    });

    let leaves_start = config.stem.duration_secs * config.leaf_start_fraction;
    for leaf in 0..LEAF_COUNT {
        let delay = leaves_start + config.leaf_stagger_secs * f64::from(leaf);
        entries.push(TimelineEntry {
            element: ElementId::Leaf(leaf),
            timing: ElementTiming::at(delay, &config.leaf),
        });
    }

    for petal in 0..petal_count {
        let delay = config.per_petal_delay_secs * f64::from(petal);
        entries.push(TimelineEntry {
            element: ElementId::Petal(petal),
            timing: ElementTiming::at(delay, &config.petal),
        });
    }

    let bloom = config.per_petal_delay_secs * f64::from(petal_count);
    entries.push(TimelineEntry {
        element: ElementId::Disk,
        timing: ElementTiming::at(bloom, &config.disk),
    });
    entries.push(TimelineEntry {
        element: ElementId::Seeds,
        timing: ElementTiming::at(bloom + config.seeds_lag_secs, &config.seeds),
    });
    entries.push(TimelineEntry {
        element: ElementId::Label,
        timing: ElementTiming::at(bloom + config.label_lag_secs, &config.label),
    });

    let timeline = RevealTimeline {
        petal_count,
        entries,
    };
    tracing::debug!(
        elements = timeline.entries.len(),
        total_secs = timeline.total_duration_secs(),
        "scheduled reveal"
    );
    timeline
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/schedule.rs"]
mod tests;
