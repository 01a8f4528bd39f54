use crate::animation::pose::{AnimatedProperty, PropertyTween, TransformOrigin};

/// Number of leaves on the stem.
pub const LEAF_COUNT: u8 = 2;

/// Identity of one independently animated element.
///
/// Ordering follows the reveal catalogue: stem, leaves, petals by index, disk, seeds, label.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum ElementId {
    /// The stem.
    Stem,
    /// A leaf, `0..LEAF_COUNT`.
    Leaf(u8),
    /// A petal, by placement index.
    Petal(u32),
    /// The flower center.
    Disk,
    /// All seed marks, revealed together.
    Seeds,
    /// The name label.
    Label,
}

impl ElementId {
    /// Kind shared by all elements animated the same way.
    pub fn kind(self) -> ElementKind {
        match self {
            Self::Stem => ElementKind::Stem,
            Self::Leaf(_) => ElementKind::Leaf,
            Self::Petal(_) => ElementKind::Petal,
            Self::Disk => ElementKind::Disk,
            Self::Seeds => ElementKind::Seeds,
            Self::Label => ElementKind::Label,
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stem => f.write_str("stem"),
            Self::Leaf(i) => write!(f, "leaf{i}"),
            Self::Petal(i) => write!(f, "petal{i}"),
            Self::Disk => f.write_str("disk"),
            Self::Seeds => f.write_str("seeds"),
            Self::Label => f.write_str("label"),
        }
    }
}

/// Element kind; duration, curve and poses are per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Grows downward from under the flower head.
    Stem,
    /// Outline is drawn in.
    Leaf,
    /// Pops in from its center.
    Petal,
    /// Pops in from its center.
    Disk,
    /// Pop in from their centers.
    Seeds,
    /// Drops in from slightly above.
    Label,
}

impl ElementKind {
    /// Properties moved from the hidden pose to the revealed pose.
    pub fn reveal_tweens(self) -> Vec<PropertyTween> {
        let motion = match self {
            Self::Stem => PropertyTween::new(AnimatedProperty::ScaleY, 0.0, 1.0),
            Self::Leaf => PropertyTween::new(AnimatedProperty::PathLength, 0.0, 1.0),
            Self::Petal | Self::Disk | Self::Seeds => {
                PropertyTween::new(AnimatedProperty::Scale, 0.0, 1.0)
            }
            Self::Label => PropertyTween::new(AnimatedProperty::OffsetY, -10.0, 0.0),
        };
        vec![motion, PropertyTween::fade_in()]
    }

    /// Pivot for scale tweens.
    pub fn transform_origin(self) -> TransformOrigin {
        match self {
            Self::Stem => TransformOrigin::Top,
            _ => TransformOrigin::Center,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/element.rs"]
mod tests;
