use super::*;

fn delay(t: &RevealTimeline, id: ElementId) -> f64 {
    t.get(id).unwrap().delay_secs
}

#[test]
fn catalogue_has_every_element_once() {
    let t = schedule(9);
    assert_eq!(t.petal_count(), 9);
    assert_eq!(t.entries().len(), 1 + 2 + 9 + 3);
    for w in t.entries().windows(2) {
        assert!(w[0].element < w[1].element);
    }
    assert!(t.get(ElementId::Petal(9)).is_none());
    assert!(t.get(ElementId::Leaf(2)).is_none());
}

#[test]
fn default_delays_for_nine_petals() {
    let t = schedule(9);
    assert_eq!(delay(&t, ElementId::Stem), 0.0);
    assert_eq!(delay(&t, ElementId::Leaf(0)), 1.2);
    assert!((delay(&t, ElementId::Leaf(1)) - 1.4).abs() < 1e-12);
    for i in 0..9 {
        assert_eq!(delay(&t, ElementId::Petal(i)), 0.5 * f64::from(i));
    }
    assert_eq!(delay(&t, ElementId::Disk), 4.5);
    assert!((delay(&t, ElementId::Seeds) - 4.6).abs() < 1e-12);
    assert_eq!(delay(&t, ElementId::Label), 5.0);
    assert_eq!(t.label_end_secs(), 5.5);
}

#[test]
fn durations_are_per_kind_constants() {
    let cfg = TimelineConfig::default();
    for n in [1, 4, 30] {
        let t = schedule_with(n, &cfg);
        for e in t.entries() {
            let expected = match e.element {
                ElementId::Stem => cfg.stem.duration_secs,
                ElementId::Leaf(_) => cfg.leaf.duration_secs,
                ElementId::Petal(_) => cfg.petal.duration_secs,
                ElementId::Disk => cfg.disk.duration_secs,
                ElementId::Seeds => cfg.seeds.duration_secs,
                ElementId::Label => cfg.label.duration_secs,
            };
            assert_eq!(e.timing.duration_secs, expected);
        }
    }
}

#[test]
fn petals_fan_in_order_then_disk_then_label() {
    for n in 1..=40 {
        let t = schedule(n);
        for i in 1..n {
            assert!(delay(&t, ElementId::Petal(i - 1)) < delay(&t, ElementId::Petal(i)));
        }
        let last = delay(&t, ElementId::Petal(n - 1));
        let disk = delay(&t, ElementId::Disk);
        assert!(disk >= last);
        assert!(delay(&t, ElementId::Seeds) >= disk);
        assert!(delay(&t, ElementId::Label) >= disk);
        assert!(delay(&t, ElementId::Leaf(1)) >= delay(&t, ElementId::Leaf(0)));
        assert!(delay(&t, ElementId::Leaf(0)) >= delay(&t, ElementId::Stem));
    }
}

#[test]
fn reveal_length_grows_with_petal_count() {
    let mut prev_label = 0.0;
    let mut prev_total = 0.0;
    for n in 1..=60 {
        let t = schedule(n);
        assert!(t.label_end_secs() >= prev_label);
        assert!(t.total_duration_secs() >= prev_total);
        prev_label = t.label_end_secs();
        prev_total = t.total_duration_secs();
    }
    assert!(schedule(60).label_end_secs() > schedule(6).label_end_secs());
}

#[test]
fn leaves_can_overlap_stem_growth() {
    let cfg = TimelineConfig {
        leaf_start_fraction: 0.25,
        ..TimelineConfig::default()
    };
    let t = schedule_with(9, &cfg);
    assert!((delay(&t, ElementId::Leaf(0)) - 0.3).abs() < 1e-12);
    assert!(delay(&t, ElementId::Leaf(0)) < t.get(ElementId::Stem).unwrap().end_secs());
}

#[test]
fn by_start_orders_by_delay() {
    let t = schedule(5);
    let order: Vec<f64> = t.by_start().iter().map(|e| e.timing.delay_secs).collect();
    for w in order.windows(2) {
        assert!(w[0] <= w[1]);
    }
    assert_eq!(t.by_start().last().unwrap().element, ElementId::Label);
    assert_eq!(t.by_start()[0].element, ElementId::Stem);
}

#[test]
fn started_at_tracks_stagger() {
    let t = schedule(9);
    let at_zero: Vec<ElementId> = t.started_at(0.0).collect();
    assert_eq!(at_zero, vec![ElementId::Stem, ElementId::Petal(0)]);

    let at_one: Vec<ElementId> = t.started_at(1.0).collect();
    assert!(at_one.contains(&ElementId::Petal(2)));
    assert!(!at_one.contains(&ElementId::Petal(3)));

    assert_eq!(t.started_at(t.label_end_secs()).count(), t.entries().len());
}

#[test]
fn progress_is_clamped_to_the_window() {
    let timing = *schedule(9).get(ElementId::Petal(2)).unwrap();
    assert_eq!(timing.progress_at(0.0), 0.0);
    assert!((timing.progress_at(1.4) - 0.5).abs() < 1e-12);
    assert_eq!(timing.progress_at(10.0), 1.0);
    assert_eq!(timing.eased_at(timing.delay_secs), 0.0);
    assert_eq!(timing.eased_at(timing.end_secs() + 0.01), 1.0);
}

#[test]
fn timeline_serializes_flat_entries() {
    let json = serde_json::to_value(schedule(2)).unwrap();
    let first = &json["entries"][0];
    assert_eq!(first["element"]["kind"], "stem");
    assert_eq!(first["delay_secs"], 0.0);
    assert_eq!(first["easing"]["type"], "tween");
}

#[test]
fn every_default_element_lands_without_a_jump() {
    let t = schedule(9);
    for entry in t.entries() {
        let timing = entry.timing;
        let end = timing.end_secs();
        let before = timing.eased_at(end - 1e-6);
        let at_end = timing.eased_at(end);
        assert_eq!(at_end, 1.0);
        assert!(
            (at_end - before).abs() < 1e-3,
            "{}: {before} -> {at_end}",
            entry.element
        );
    }
}
