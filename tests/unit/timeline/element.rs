use super::*;

#[test]
fn ordering_follows_catalogue() {
    let mut ids = vec![
        ElementId::Label,
        ElementId::Petal(2),
        ElementId::Seeds,
        ElementId::Leaf(1),
        ElementId::Petal(0),
        ElementId::Disk,
        ElementId::Stem,
        ElementId::Leaf(0),
    ];
    ids.sort();
    assert_eq!(
        ids,
        vec![
            ElementId::Stem,
            ElementId::Leaf(0),
            ElementId::Leaf(1),
            ElementId::Petal(0),
            ElementId::Petal(2),
            ElementId::Disk,
            ElementId::Seeds,
            ElementId::Label,
        ]
    );
}

#[test]
fn display_names_are_compact() {
    assert_eq!(ElementId::Petal(7).to_string(), "petal7");
    assert_eq!(ElementId::Leaf(0).to_string(), "leaf0");
    assert_eq!(ElementId::Seeds.to_string(), "seeds");
}

#[test]
fn every_kind_fades_in() {
    for kind in [
        ElementKind::Stem,
        ElementKind::Leaf,
        ElementKind::Petal,
        ElementKind::Disk,
        ElementKind::Seeds,
        ElementKind::Label,
    ] {
        let tweens = kind.reveal_tweens();
        assert!(tweens.contains(&PropertyTween::fade_in()));
    }
}

#[test]
fn stem_grows_from_its_top() {
    let tweens = ElementKind::Stem.reveal_tweens();
    assert_eq!(tweens[0].property, AnimatedProperty::ScaleY);
    assert_eq!(ElementKind::Stem.transform_origin(), TransformOrigin::Top);
    assert_eq!(ElementKind::Petal.transform_origin(), TransformOrigin::Center);
}

#[test]
fn label_drops_into_place() {
    let motion = ElementKind::Label.reveal_tweens()[0];
    assert_eq!(motion.property, AnimatedProperty::OffsetY);
    assert_eq!(motion.to, 0.0);
    assert!(motion.from < 0.0);
}

#[test]
fn json_tags_kind_and_index() {
    let s = serde_json::to_string(&ElementId::Petal(3)).unwrap();
    assert_eq!(s, r#"{"kind":"petal","index":3}"#);
    let s = serde_json::to_string(&ElementId::Disk).unwrap();
    assert_eq!(s, r#"{"kind":"disk"}"#);
}
