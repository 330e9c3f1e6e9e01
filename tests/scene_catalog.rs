use scrollstage::{scenes::venue_catalog, Property, Segment, Timeline, TimelineDriver};

fn groups(timeline: &Timeline) -> Vec<Vec<&Segment>> {
    let mut out: Vec<Vec<&Segment>> = Vec::new();
    for seg in &timeline.segments {
        match out
            .iter_mut()
            .find(|g| g[0].target == seg.target && g[0].property == seg.property)
        {
            Some(group) => group.push(seg),
            None => out.push(vec![seg]),
        }
    }
    for group in &mut out {
        group.sort_by(|a, b| a.phase.start.total_cmp(&b.phase.start));
    }
    out
}

fn sample(timeline: &Timeline, progress: f64, target: &str, property: Property) -> f64 {
    timeline
        .evaluate(progress)
        .into_iter()
        .find(|s| s.target == target && s.property == property)
        .unwrap_or_else(|| panic!("no sample for {target}"))
        .value
}

#[test]
fn every_catalog_timeline_validates() {
    // venue_catalog builds through the DSL, so this mostly guards against
    // future phase edits that collide.
    let scenes = venue_catalog().unwrap();
    for scene in &scenes {
        scene.validate().unwrap();
        assert!(!scene.timelines.is_empty(), "scene '{}' is static", scene.id);
    }
}

#[test]
fn progress_zero_yields_declared_entrance_state() {
    for scene in venue_catalog().unwrap() {
        for driven in &scene.timelines {
            for group in groups(&driven.timeline) {
                let first = group[0];
                let got = sample(&driven.timeline, 0.0, &first.target, first.property);
                assert_eq!(
                    got, first.from,
                    "scene '{}' target '{}'",
                    scene.id, first.target
                );
            }
        }
    }
}

#[test]
fn progress_one_yields_declared_exit_state() {
    for scene in venue_catalog().unwrap() {
        for driven in &scene.timelines {
            for group in groups(&driven.timeline) {
                let last = group[group.len() - 1];
                let got = sample(&driven.timeline, 1.0, &last.target, last.property);
                assert_eq!(
                    got, last.to,
                    "scene '{}' target '{}'",
                    scene.id, last.target
                );
            }
        }
    }
}

#[test]
fn samples_never_leave_declared_bounds() {
    for scene in venue_catalog().unwrap() {
        for driven in &scene.timelines {
            for group in groups(&driven.timeline) {
                let lo = group
                    .iter()
                    .flat_map(|s| [s.from, s.to])
                    .fold(f64::INFINITY, f64::min);
                let hi = group
                    .iter()
                    .flat_map(|s| [s.from, s.to])
                    .fold(f64::NEG_INFINITY, f64::max);

                let first = group[0];
                for step in 0..=100 {
                    let progress = f64::from(step) / 100.0;
                    let v = sample(&driven.timeline, progress, &first.target, first.property);
                    assert!(
                        (lo..=hi).contains(&v),
                        "scene '{}' target '{}' value {v} outside [{lo}, {hi}] at {progress}",
                        scene.id,
                        first.target
                    );
                }
            }
        }
    }
}

#[test]
fn scrubbed_entrances_hold_through_the_settle_band() {
    // Pinned scenes finish entering by 0.46 and start exiting at 0.6 or
    // later; mid-range progress must hold the settled state.
    for scene in venue_catalog().unwrap() {
        if !scene.placement.is_pinned() {
            continue;
        }
        for driven in &scene.timelines {
            if !matches!(driven.driver, TimelineDriver::Scrub) {
                continue;
            }
            let at_low = driven.timeline.evaluate(0.5);
            let at_high = driven.timeline.evaluate(0.55);
            for (a, b) in at_low.iter().zip(at_high.iter()) {
                assert_eq!(a.value, b.value, "scene '{}' moved during settle", scene.id);
            }
        }
    }
}
