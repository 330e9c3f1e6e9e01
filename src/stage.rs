use crate::{
    core::{Extent, ScrollRange, Viewport},
    error::{ScrollstageError, ScrollstageResult},
    registry::PinRegistry,
    scene::{Placement, SceneConfig, TimelineDriver},
    scroll::{InputSource, ScrollSource, SmoothingConfig},
    snap::{Region, SnapConfig, SnapCoordinator},
    timeline::Sample,
};

/// Stage-wide configuration.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub smoothing: SmoothingConfig,
    pub snap: SnapConfig,
    /// Trailing flowing space after the last scene (footer region).
    pub tail: Extent,
}

/// Opaque handle to a registered scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneHandle(u64);

/// Programmatic navigation pace: seconds per viewport of travel, clamped.
const NAV_SECS_PER_VIEWPORT: f64 = 0.15;
const NAV_MIN_SECS: f64 = 0.35;
const NAV_MAX_SECS: f64 = 1.2;

struct Slot {
    handle: SceneHandle,
    config: SceneConfig,
    range: ScrollRange,
    /// Clock playheads, parallel to `config.timelines`; scrub entries
    /// stay unused.
    playheads: Vec<f64>,
}

/// Snap correction launched this frame.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct SnapCorrection {
    pub target: f64,
    pub duration_secs: f64,
}

/// Evaluated state of one scene at the current offset.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneFrame {
    pub scene_id: String,
    pub progress: f64,
    pub samples: Vec<Sample>,
}

/// Everything the render sink needs for one frame.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FrameOutput {
    pub offset: f64,
    pub max_scroll: f64,
    pub region: Region,
    pub settled: bool,
    pub snap: Option<SnapCorrection>,
    pub scenes: Vec<SceneFrame>,
}

type FrameObserver = Box<dyn FnMut(&FrameOutput)>;

/// Page-lifetime orchestration context: owns the scroll source, the pin
/// registry, the snap coordinator and every registered scene. Constructed
/// at page mount, released by drop at unmount; there is no process-wide
/// state.
pub struct Stage {
    viewport: Viewport,
    config: StageConfig,
    scroll: ScrollSource,
    registry: PinRegistry,
    snap: SnapCoordinator,
    slots: Vec<Slot>,
    observers: Vec<FrameObserver>,
    next_handle: u64,
}

impl Stage {
    pub fn new(viewport: Viewport, config: StageConfig) -> ScrollstageResult<Self> {
        config.tail.validate()?;
        let initial_max = config.tail.resolve(viewport);
        Ok(Self {
            viewport,
            config,
            scroll: ScrollSource::new(config.smoothing, initial_max),
            registry: PinRegistry::new(),
            snap: SnapCoordinator::new(config.snap),
            slots: Vec::new(),
            observers: Vec::new(),
            next_handle: 0,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn max_scroll(&self) -> f64 {
        self.scroll.max_scroll()
    }

    pub fn current_offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Normalized scroll progress of a scene, by id.
    pub fn current_progress(&self, scene_id: &str) -> Option<f64> {
        self.slots
            .iter()
            .find(|s| s.config.id == scene_id)
            .map(|s| s.range.progress(self.scroll.offset()))
    }

    /// Ids of all registered scenes, in page order.
    pub fn scene_ids(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.config.id.as_str())
    }

    /// Resolved scroll range of a scene, by id.
    pub fn scene_range(&self, scene_id: &str) -> Option<ScrollRange> {
        self.slots
            .iter()
            .find(|s| s.config.id == scene_id)
            .map(|s| s.range)
    }

    /// Register a scene at the end of the page. Registration order is page
    /// order; ranges for every scene are recomputed.
    pub fn register_scene(&mut self, config: SceneConfig) -> ScrollstageResult<SceneHandle> {
        config.validate()?;
        if self.slots.iter().any(|s| s.config.id == config.id) {
            return Err(ScrollstageError::validation(format!(
                "duplicate scene id '{}'",
                config.id
            )));
        }

        let handle = SceneHandle(self.next_handle);
        self.next_handle += 1;
        let playheads = vec![0.0; config.timelines.len()];
        self.slots.push(Slot {
            handle,
            config,
            range: ScrollRange { start: 0.0, end: 0.0 },
            playheads,
        });
        self.relayout()?;
        Ok(handle)
    }

    /// Remove a scene; its pin reservation is released and the remaining
    /// page relaid.
    pub fn unregister_scene(&mut self, handle: SceneHandle) -> ScrollstageResult<()> {
        let idx = self
            .slots
            .iter()
            .position(|s| s.handle == handle)
            .ok_or_else(|| ScrollstageError::validation("unknown scene handle"))?;
        self.slots.remove(idx);
        self.relayout()
    }

    /// Subscribe the render sink; called once per tick with the finished
    /// frame.
    pub fn on_frame(&mut self, observer: impl FnMut(&FrameOutput) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Feed a raw input delta to the scroll source.
    pub fn push_input(&mut self, delta: f64, source: InputSource) {
        self.scroll.push_input(delta, source);
    }

    /// Smooth-scroll to a scene: pinned scenes land on their snap center,
    /// flowing scenes on their top edge.
    pub fn scroll_to_scene(&mut self, scene_id: &str) -> ScrollstageResult<()> {
        let slot = self
            .slots
            .iter()
            .find(|s| s.config.id == scene_id)
            .ok_or_else(|| {
                ScrollstageError::validation(format!("unknown scene id '{scene_id}'"))
            })?;
        let target = match slot.config.placement {
            Placement::Pinned { .. } => slot.range.center(),
            Placement::Flowing { .. } => slot.range.start,
        };
        let distance = (target - self.scroll.offset()).abs();
        let duration = (distance / self.viewport.height * NAV_SECS_PER_VIEWPORT)
            .clamp(NAV_MIN_SECS, NAV_MAX_SECS);
        self.scroll
            .force_offset(target, duration, self.snap.config().ease);
        Ok(())
    }

    /// Apply new viewport geometry: every range is recomputed, the offset
    /// re-clamps proportionally, and an active correction is retargeted
    /// against the new layout rather than aborted.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ScrollstageResult<()> {
        self.viewport = viewport;
        self.relayout()?;
        if self.scroll.correction_active() {
            let target = self.snap.resolve_target(
                self.scroll.target(),
                self.scroll.max_scroll(),
                &self.registry,
            );
            self.scroll.retarget_correction(target);
        }
        Ok(())
    }

    /// Reassign every scene's scroll range from the cumulative page cursor
    /// and rebuild the pin registry against current geometry.
    #[tracing::instrument(skip(self))]
    fn relayout(&mut self) -> ScrollstageResult<()> {
        // Rebuild the registry wholesale: stale ranges from the previous
        // layout would otherwise collide with the new ones.
        self.registry.clear();
        let mut cursor = 0.0;
        for slot in &mut self.slots {
            let extent = slot.config.placement.extent().resolve(self.viewport);
            slot.range = ScrollRange::new(cursor, cursor + extent)?;
            if slot.config.placement.is_pinned() {
                self.registry.register(slot.config.id.clone(), slot.range)?;
            }
            cursor += extent;
        }
        let max_scroll = cursor + self.config.tail.resolve(self.viewport);
        self.scroll.set_max_scroll(max_scroll);
        tracing::debug!(max_scroll, scenes = self.slots.len(), "page relaid");
        Ok(())
    }

    /// Advance one animation frame.
    ///
    /// Within a frame the order is fixed: the offset is finalized first,
    /// then every timeline evaluates against that frozen snapshot, then the
    /// region is classified; a correction is only resolved on a settle
    /// event, never against live input.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self, dt: f64) -> FrameOutput {
        let tick = self.scroll.tick(dt);
        let offset = tick.offset;
        let max_scroll = self.scroll.max_scroll();
        let viewport = self.viewport;

        let mut scenes = Vec::with_capacity(self.slots.len());
        for slot in &mut self.slots {
            let progress = slot.range.progress(offset);
            let mut samples: Vec<Sample> = Vec::new();

            // Scrub timelines first, then clocks: a one-shot timeline wins
            // while it plays; once finished, the scrub state takes over.
            // Their boundary states coincide by construction, so the
            // handoff never jumps.
            for driven in &slot.config.timelines {
                if matches!(driven.driver, TimelineDriver::Scrub) {
                    merge_samples(&mut samples, driven.timeline.evaluate(progress), true);
                }
            }
            for (i, driven) in slot.config.timelines.iter().enumerate() {
                let (playhead, in_flight) = match driven.driver {
                    TimelineDriver::Scrub => continue,
                    TimelineDriver::Mount { duration_secs } => {
                        let ph = &mut slot.playheads[i];
                        *ph = (*ph + dt / duration_secs).min(1.0);
                        (*ph, *ph < 1.0)
                    }
                    TimelineDriver::Enter {
                        duration_secs,
                        anchor,
                    } => {
                        let enter_offset =
                            (slot.range.start - viewport.height * anchor).max(0.0);
                        let entered = offset >= enter_offset;
                        let ph = &mut slot.playheads[i];
                        let step = dt / duration_secs;
                        *ph = if entered {
                            (*ph + step).min(1.0)
                        } else {
                            (*ph - step).max(0.0)
                        };
                        (*ph, true)
                    }
                };
                merge_samples(&mut samples, driven.timeline.evaluate(playhead), in_flight);
            }

            scenes.push(SceneFrame {
                scene_id: slot.config.id.clone(),
                progress,
                samples,
            });
        }

        let region = self.snap.classify(offset, max_scroll, &self.registry);

        let mut snap = None;
        if tick.just_settled && max_scroll > 0.0 {
            let target = self.snap.resolve_target(offset, max_scroll, &self.registry);
            let distance = target - offset;
            if distance.abs() > self.snap.config().min_correction_px {
                let duration_secs = self.snap.correction_duration(distance, viewport);
                self.scroll
                    .force_offset(target, duration_secs, self.snap.config().ease);
                snap = Some(SnapCorrection {
                    target,
                    duration_secs,
                });
            }
        }

        let out = FrameOutput {
            offset,
            max_scroll,
            region,
            settled: tick.just_settled,
            snap,
            scenes,
        };
        for observer in &mut self.observers {
            observer(&out);
        }
        out
    }
}

/// Fold `incoming` into `samples`; `overriding` samples replace an existing
/// `(target, property)` pair, non-overriding ones only fill gaps.
fn merge_samples(samples: &mut Vec<Sample>, incoming: Vec<Sample>, overriding: bool) {
    for sample in incoming {
        match samples
            .iter_mut()
            .find(|s| s.target == sample.target && s.property == sample.property)
        {
            Some(existing) => {
                if overriding {
                    *existing = sample;
                }
            }
            None => samples.push(sample),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dsl::{SceneBuilder, TimelineBuilder},
        ease::Ease,
        timeline::Property,
    };

    const DT: f64 = 1.0 / 60.0;

    fn viewport() -> Viewport {
        Viewport::new(1000.0).unwrap()
    }

    fn pinned_scene(id: &str, extra: f64) -> SceneConfig {
        SceneBuilder::pinned(id, Extent::ViewportFraction(extra))
            .scrub(
                TimelineBuilder::new()
                    .tween("card", Property::TranslateX, -55.0, 0.0, 0.0, 0.3, Ease::Linear)
                    .tween("card", Property::TranslateX, 0.0, 18.0, 0.6, 1.0, Ease::InCubic)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    fn flowing_scene(id: &str, height: f64) -> SceneConfig {
        SceneBuilder::flowing(id, Extent::ViewportFraction(height))
            .on_enter(
                0.5,
                1.0,
                TimelineBuilder::new()
                    .tween("heading", Property::Opacity, 0.0, 1.0, 0.0, 1.0, Ease::OutQuad)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    fn stage_with(scenes: Vec<SceneConfig>) -> Stage {
        let mut stage = Stage::new(viewport(), StageConfig::default()).unwrap();
        for scene in scenes {
            stage.register_scene(scene).unwrap();
        }
        stage
    }

    /// Stage whose snap corrections never launch, for tests that hold an
    /// offset inside a pinned range.
    fn stage_without_snap(scenes: Vec<SceneConfig>) -> Stage {
        let config = StageConfig {
            snap: SnapConfig {
                min_correction_px: f64::INFINITY,
                ..SnapConfig::default()
            },
            ..StageConfig::default()
        };
        let mut stage = Stage::new(viewport(), config).unwrap();
        for scene in scenes {
            stage.register_scene(scene).unwrap();
        }
        stage
    }

    #[test]
    fn ranges_follow_registration_order() {
        let stage = stage_with(vec![pinned_scene("a", 1.0), pinned_scene("b", 1.5)]);
        assert_eq!(stage.scene_range("a").unwrap(), ScrollRange { start: 0.0, end: 1000.0 });
        assert_eq!(
            stage.scene_range("b").unwrap(),
            ScrollRange { start: 1000.0, end: 2500.0 }
        );
        assert_eq!(stage.max_scroll(), 2500.0);
    }

    #[test]
    fn duplicate_scene_id_is_rejected() {
        let mut stage = stage_with(vec![pinned_scene("a", 1.0)]);
        let err = stage.register_scene(pinned_scene("a", 1.0)).unwrap_err();
        assert!(matches!(err, ScrollstageError::Validation(_)));
    }

    #[test]
    fn unregister_relays_remaining_scenes() {
        let mut stage = Stage::new(viewport(), StageConfig::default()).unwrap();
        let a = stage.register_scene(pinned_scene("a", 1.0)).unwrap();
        stage.register_scene(pinned_scene("b", 1.5)).unwrap();
        stage.unregister_scene(a).unwrap();
        assert_eq!(
            stage.scene_range("b").unwrap(),
            ScrollRange { start: 0.0, end: 1500.0 }
        );
        assert_eq!(stage.max_scroll(), 1500.0);
    }

    #[test]
    fn pinned_progress_tracks_offset_monotonically() {
        let mut stage =
            stage_without_snap(vec![pinned_scene("a", 1.0), flowing_scene("tailend", 2.0)]);
        stage.push_input(900.0, InputSource::Wheel);
        let mut prev = 0.0;
        for _ in 0..240 {
            stage.tick(DT);
            let p = stage.current_progress("a").unwrap();
            assert!(p >= prev);
            prev = p;
        }
        assert_eq!(prev, 0.9);
    }

    #[test]
    fn mount_playhead_runs_once_to_completion() {
        let scene = SceneBuilder::pinned("hero", Extent::ViewportFraction(1.3))
            .on_mount(
                0.5,
                TimelineBuilder::new()
                    .tween("bg", Property::Opacity, 0.0, 1.0, 0.0, 0.42, Ease::OutQuad)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let mut stage = stage_with(vec![scene]);

        let first = stage.tick(DT);
        let mid = sample_value(&first, "hero", "bg", Property::Opacity);
        assert!(mid < 1.0);

        for _ in 0..60 {
            stage.tick(DT);
        }
        let done = stage.tick(DT);
        assert_eq!(sample_value(&done, "hero", "bg", Property::Opacity), 1.0);
    }

    #[test]
    fn finished_mount_yields_to_scrub() {
        let scene = SceneBuilder::pinned("hero", Extent::ViewportFraction(1.3))
            .scrub(
                TimelineBuilder::new()
                    .tween("content", Property::Opacity, 1.0, 0.0, 0.7, 1.0, Ease::InCubic)
                    .build()
                    .unwrap(),
            )
            .on_mount(
                0.25,
                TimelineBuilder::new()
                    .tween("content", Property::Opacity, 0.0, 1.0, 0.0, 1.0, Ease::OutQuad)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let mut stage = stage_without_snap(vec![scene, flowing_scene("tailend", 2.0)]);

        // Let the mount finish at rest.
        for _ in 0..120 {
            stage.tick(DT);
        }

        // Scrub deep into the exit phase; the scrub value must win now.
        stage.push_input(1280.0, InputSource::Wheel);
        let mut last = 1.0;
        for _ in 0..600 {
            let out = stage.tick(DT);
            last = sample_value(&out, "hero", "content", Property::Opacity);
        }
        assert!(last < 0.2, "exit fade did not apply, opacity={last}");
    }

    #[test]
    fn enter_toggle_reverses_when_scrolled_back() {
        // All-flowing page: no pins, so settles never correct the offset.
        let mut stage = stage_with(vec![flowing_scene("intro", 2.0), flowing_scene("events", 1.0)]);

        // Scroll past the enter point and let the toggle play forward.
        stage.push_input(1600.0, InputSource::Wheel);
        for _ in 0..300 {
            stage.tick(DT);
        }
        let entered = stage.tick(DT);
        assert_eq!(sample_value(&entered, "events", "heading", Property::Opacity), 1.0);

        // Back above the trigger: plays backward to zero.
        stage.push_input(-1600.0, InputSource::Wheel);
        for _ in 0..600 {
            stage.tick(DT);
        }
        let left = stage.tick(DT);
        assert_eq!(sample_value(&left, "events", "heading", Property::Opacity), 0.0);
    }

    #[test]
    fn settle_in_pinned_region_launches_correction() {
        let mut stage = stage_with(vec![pinned_scene("a", 1.0), flowing_scene("tailend", 9.0)]);
        stage.push_input(950.0, InputSource::Wheel);

        let mut corrected_to = None;
        for _ in 0..600 {
            let out = stage.tick(DT);
            if let Some(c) = out.snap {
                corrected_to = Some(c.target);
            }
        }
        // Pinned range [0, 1000]: settle near its end snaps to center 500.
        assert_eq!(corrected_to, Some(500.0));
        for _ in 0..120 {
            stage.tick(DT);
        }
        assert_eq!(stage.current_offset(), 500.0);
    }

    #[test]
    fn settle_in_flowing_region_is_left_alone() {
        let mut stage = stage_with(vec![pinned_scene("a", 1.0), flowing_scene("tailend", 9.0)]);
        stage.push_input(6000.0, InputSource::Wheel);
        for _ in 0..900 {
            let out = stage.tick(DT);
            assert!(out.snap.is_none());
        }
        assert_eq!(stage.current_offset(), 6000.0);
    }

    #[test]
    fn empty_stage_reports_zero_offset_and_no_snap() {
        let mut stage = Stage::new(viewport(), StageConfig::default()).unwrap();
        stage.push_input(500.0, InputSource::Wheel);
        for _ in 0..120 {
            let out = stage.tick(DT);
            assert_eq!(out.offset, 0.0);
            assert!(out.snap.is_none());
            assert_eq!(out.region, Region::Flowing);
        }
    }

    #[test]
    fn resize_rescales_offset_proportionally() {
        let mut stage = stage_with(vec![pinned_scene("a", 1.0), flowing_scene("tailend", 9.0)]);
        assert_eq!(stage.max_scroll(), 10_000.0);
        stage.push_input(4000.0, InputSource::Wheel);
        for _ in 0..900 {
            stage.tick(DT);
        }
        assert_eq!(stage.current_offset(), 4000.0);

        stage.set_viewport(Viewport::new(800.0).unwrap()).unwrap();
        assert_eq!(stage.max_scroll(), 8000.0);
        assert_eq!(stage.current_offset(), 3200.0);
    }

    #[test]
    fn observers_receive_each_frame() {
        use std::{cell::RefCell, rc::Rc};
        let seen = Rc::new(RefCell::new(0u32));
        let mut stage = stage_with(vec![pinned_scene("a", 1.0)]);
        let seen2 = Rc::clone(&seen);
        stage.on_frame(move |_| *seen2.borrow_mut() += 1);
        for _ in 0..5 {
            stage.tick(DT);
        }
        assert_eq!(*seen.borrow(), 5);
    }

    #[test]
    fn scroll_to_scene_targets_pinned_center() {
        let mut stage = stage_with(vec![pinned_scene("a", 1.0), flowing_scene("tailend", 9.0)]);
        stage.scroll_to_scene("a").unwrap();
        for _ in 0..300 {
            stage.tick(DT);
        }
        assert_eq!(stage.current_offset(), 500.0);
        assert!(stage.scroll_to_scene("nope").is_err());
    }

    fn sample_value(out: &FrameOutput, scene: &str, target: &str, property: Property) -> f64 {
        out.scenes
            .iter()
            .find(|s| s.scene_id == scene)
            .and_then(|s| {
                s.samples
                    .iter()
                    .find(|x| x.target == target && x.property == property)
            })
            .map(|x| x.value)
            .unwrap_or_else(|| panic!("no sample for {scene}/{target}"))
    }
}
