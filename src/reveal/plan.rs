use crate::{
    animation::pose::{PropertyTween, TransformOrigin},
    foundation::{
        core::{Point, Rect},
        error::GirasolResult,
    },
    geometry::{
        flower::{DiskShape, FlowerGeometry, LeafShape, StemShape},
        petals::PetalPlacement,
        seeds::SeedPlacement,
    },
    timeline::{
        element::ElementId,
        schedule::{ElementTiming, RevealTimeline},
    },
};

/// Shape handed to the renderer for one element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeDescriptor {
    /// Rounded stem rectangle.
    Stem(StemShape),
    /// Leaf outline.
    Leaf(LeafShape),
    /// Rotated petal ellipse.
    Petal(PetalPlacement),
    /// Center disk.
    Disk(DiskShape),
    /// Every seed mark.
    Seeds {
        /// Radius of each mark.
        dot_radius: f64,
        /// Marks in spiral order.
        seeds: Vec<SeedPlacement>,
    },
    /// The personalized text.
    Label {
        /// Text anchor.
        anchor: Point,
        /// Committed name.
        text: String,
    },
}

/// Everything the animation boundary needs for one element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementCue {
    /// Which element.
    pub element: ElementId,
    /// What to draw.
    pub shape: ShapeDescriptor,
    /// When and how to reveal it.
    pub timing: ElementTiming,
    /// Pivot for scale tweens, in viewport coordinates.
    pub origin: Point,
    /// Hidden pose to revealed pose.
    pub tweens: Vec<PropertyTween>,
}

/// Static description of a whole reveal, handed off once when the reveal starts.
///
/// Playback is the receiver's business; nothing here changes after construction.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealPlan {
    /// Committed name.
    pub name: String,
    /// Sequence number of the reveal this plan belongs to.
    pub generation: u64,
    /// Viewport all coordinates refer to.
    pub viewport: Rect,
    /// Seconds until every element is revealed.
    pub total_duration_secs: f64,
    /// One cue per element in catalogue order.
    pub cues: Vec<ElementCue>,
}

impl RevealPlan {
    pub(crate) fn build(
        name: &str,
        generation: u64,
        geometry: &FlowerGeometry,
        timeline: &RevealTimeline,
    ) -> Self {
        debug_assert_eq!(geometry.petals.len(), timeline.petal_count() as usize);

        let cues = timeline
            .entries()
            .iter()
            .filter_map(|entry| {
                let (shape, center) = shape_for(entry.element, name, geometry)?;
                let kind = entry.element.kind();
                let origin = match kind.transform_origin() {
                    TransformOrigin::Top => geometry.stem.top_center(),
                    TransformOrigin::Center => center,
                };
                Some(ElementCue {
                    element: entry.element,
                    shape,
                    timing: entry.timing,
                    origin,
                    tweens: kind.reveal_tweens(),
                })
            })
            .collect();

        Self {
            name: name.to_owned(),
            generation,
            viewport: geometry.viewport,
            total_duration_secs: timeline.total_duration_secs(),
            cues,
        }
    }

    /// Cue for `element`, if present.
    pub fn cue(&self, element: ElementId) -> Option<&ElementCue> {
        self.cues.iter().find(|c| c.element == element)
    }

    /// Pretty JSON for the rendering boundary.
    pub fn to_json_pretty(&self) -> GirasolResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn shape_for(
    element: ElementId,
    name: &str,
    geometry: &FlowerGeometry,
) -> Option<(ShapeDescriptor, Point)> {
    Some(match element {
        ElementId::Stem => (
            ShapeDescriptor::Stem(geometry.stem),
            geometry.stem.rect.center(),
        ),
        ElementId::Leaf(i) => {
            let leaf = geometry.leaves.get(usize::from(i))?;
            (ShapeDescriptor::Leaf(leaf.clone()), leaf.anchor)
        }
        ElementId::Petal(i) => {
            let petal = geometry.petals.get(i as usize)?;
            (ShapeDescriptor::Petal(*petal), petal.center)
        }
        ElementId::Disk => (ShapeDescriptor::Disk(geometry.disk), geometry.disk.center),
        ElementId::Seeds => (
            ShapeDescriptor::Seeds {
                dot_radius: geometry.seed_dot_radius,
                seeds: geometry.seeds.clone(),
            },
            geometry.center,
        ),
        ElementId::Label => (
            ShapeDescriptor::Label {
                anchor: geometry.label_anchor,
                text: name.to_owned(),
            },
            geometry.label_anchor,
        ),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/plan.rs"]
mod tests;
