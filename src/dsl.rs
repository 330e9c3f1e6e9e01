use crate::{
    core::{Extent, PhaseRange},
    ease::Ease,
    error::ScrollstageResult,
    scene::{DrivenTimeline, Placement, SceneConfig, TimelineDriver},
    timeline::{Property, Segment, Timeline},
};

/// Builder for a [`Timeline`]; `build()` validates the result.
#[derive(Default)]
pub struct TimelineBuilder {
    segments: Vec<Segment>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one `from -> to` interpolation of `property` on `target` over
    /// `[phase_start, phase_end]`.
    #[allow(clippy::too_many_arguments)]
    pub fn tween(
        mut self,
        target: impl Into<String>,
        property: Property,
        from: f64,
        to: f64,
        phase_start: f64,
        phase_end: f64,
        ease: Ease,
    ) -> Self {
        self.segments.push(Segment {
            target: target.into(),
            property,
            from,
            to,
            phase: PhaseRange {
                start: phase_start,
                end: phase_end,
            },
            ease,
        });
        self
    }

    pub fn build(self) -> ScrollstageResult<Timeline> {
        Timeline::new(self.segments)
    }
}

/// Builder for a [`SceneConfig`]; `build()` validates the result.
pub struct SceneBuilder {
    id: String,
    placement: Placement,
    timelines: Vec<DrivenTimeline>,
}

impl SceneBuilder {
    /// A scene pinned for `extra_scroll` of scroll distance.
    pub fn pinned(id: impl Into<String>, extra_scroll: Extent) -> Self {
        Self {
            id: id.into(),
            placement: Placement::Pinned { extra_scroll },
            timelines: Vec::new(),
        }
    }

    /// An ordinary flowing scene of the given content height.
    pub fn flowing(id: impl Into<String>, height: Extent) -> Self {
        Self {
            id: id.into(),
            placement: Placement::Flowing { height },
            timelines: Vec::new(),
        }
    }

    /// Timeline scrubbed by the scene's normalized scroll progress.
    pub fn scrub(mut self, timeline: Timeline) -> Self {
        self.timelines.push(DrivenTimeline {
            driver: TimelineDriver::Scrub,
            timeline,
        });
        self
    }

    /// One-shot timeline played over `duration_secs` once the scene mounts.
    pub fn on_mount(mut self, duration_secs: f64, timeline: Timeline) -> Self {
        self.timelines.push(DrivenTimeline {
            driver: TimelineDriver::Mount { duration_secs },
            timeline,
        });
        self
    }

    /// Toggle timeline played forward when the scene top passes the anchor
    /// line, backward when scrolled back above it.
    pub fn on_enter(mut self, duration_secs: f64, anchor: f64, timeline: Timeline) -> Self {
        self.timelines.push(DrivenTimeline {
            driver: TimelineDriver::Enter {
                duration_secs,
                anchor,
            },
            timeline,
        });
        self
    }

    pub fn build(self) -> ScrollstageResult<SceneConfig> {
        let scene = SceneConfig {
            id: self.id,
            placement: self.placement,
            timelines: self.timelines,
        };
        scene.validate()?;
        Ok(scene)
    }
}
