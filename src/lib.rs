//! girasol lays out a procedurally generated sunflower and schedules its staged reveal.
//!
//! A reveal starts when a visitor commits a name. From a small [`FlowerConfig`] the crate
//! derives every shape (petals on a ring, seeds on a golden-angle spiral, stem, leaves,
//! disk, label anchor) and from the petal count a [`RevealTimeline`] giving each element a
//! delay, a duration and an easing class. Both are handed to the rendering/animation
//! boundary in one [`RevealPlan`]; playback itself happens outside this crate.
//!
//! # Pipeline overview
//!
//! 1. **Prompt**: [`RevealController`] starts in [`RevealState::AwaitingName`]
//! 2. **Commit**: [`RevealController::submit_name`] trims the name; blank input is rejected
//! 3. **Derive**: [`generate`] and [`schedule_with`] run once and are stored on the state
//! 4. **Hand off**: [`RevealController::plan`] builds the static [`RevealPlan`]
//! 5. **Reset**: [`RevealController::reset`] drops everything and returns to the prompt
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: geometry and timelines are pure functions of their configuration;
//!   there is no RNG and no clock inside the core.
//! - **Validate at the boundary**: configurations are checked once, when a controller is
//!   built or settings are loaded; generation and scheduling never fail.
//! - **Longer bloom for more petals**: the petal stagger is the only delay term that grows
//!   with petal count, so total reveal time scales linearly with it.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod geometry;
mod reveal;
mod timeline;

pub use animation::curve::{Easing, Spring};
pub use animation::ease::Ease;
pub use animation::pose::{AnimatedProperty, PropertyTween, TransformOrigin};
pub use config::flower::{FlowerConfig, LeafConfig, LeafSide, StemConfig};
pub use config::settings::RevealSettings;
pub use config::timing::{StageTiming, TimelineConfig};
pub use foundation::core::{Affine, BezPath, Circle, Ellipse, Point, Rect, Vec2};
pub use foundation::error::{GirasolError, GirasolResult};
pub use geometry::flower::{DiskShape, FlowerGeometry, LeafShape, StemShape, generate};
pub use geometry::petals::PetalPlacement;
pub use geometry::seeds::{GOLDEN_ANGLE_DEG, SeedPlacement};
pub use reveal::controller::{Reveal, RevealController, RevealState, SubmitOutcome};
pub use reveal::name::{DEFAULT_MAX_NAME_CHARS, NameField, NameRejection, normalize_name};
pub use reveal::plan::{ElementCue, RevealPlan, ShapeDescriptor};
pub use timeline::element::{ElementId, ElementKind, LEAF_COUNT};
pub use timeline::schedule::{
    ElementTiming, RevealTimeline, TimelineEntry, schedule, schedule_with,
};
