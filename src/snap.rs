use crate::{
    core::Viewport,
    ease::Ease,
    registry::{PinEntry, PinRegistry},
};

/// Tuning for the settle-time snap policy. The reference constants come
/// from observed behavior; all are adjustable.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Tolerance around each pinned range, as a fraction of total scroll.
    /// A slightly-overshot stop still snaps back.
    pub buffer_fraction: f64,
    pub min_duration_secs: f64,
    pub max_duration_secs: f64,
    pub ease: Ease,
    /// Corrections shorter than this are skipped outright.
    pub min_correction_px: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            buffer_fraction: 0.04,
            min_duration_secs: 0.15,
            max_duration_secs: 0.35,
            ease: Ease::OutCubic,
            min_correction_px: 0.5,
        }
    }
}

/// Classification of a scroll offset.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Pinned(String),
    Flowing,
}

/// Decides, on each settle event, whether the offset should be corrected
/// and to what target. Free scroll in flowing regions is preserved exactly
/// as the user left it.
#[derive(Clone, Debug)]
pub struct SnapCoordinator {
    config: SnapConfig,
}

impl SnapCoordinator {
    pub fn new(config: SnapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    fn buffer(&self, max_scroll: f64) -> f64 {
        self.config.buffer_fraction * max_scroll
    }

    /// The pin entry whose buffered range contains `offset`, if any. When
    /// buffered ranges overlap (they can, since the buffer widens adjacent
    /// reservations), the entry with the numerically closest center wins.
    fn entry_at<'a>(
        &self,
        offset: f64,
        max_scroll: f64,
        registry: &'a PinRegistry,
    ) -> Option<&'a PinEntry> {
        if max_scroll <= 0.0 {
            return None;
        }
        let buffer = self.buffer(max_scroll);
        registry
            .entries()
            .iter()
            .filter(|e| {
                offset >= e.range.start - buffer && offset <= e.range.end + buffer
            })
            .min_by(|a, b| {
                (a.center() - offset)
                    .abs()
                    .total_cmp(&(b.center() - offset).abs())
            })
    }

    /// Partition lookup: `Pinned` within a buffered pin range, `Flowing`
    /// everywhere else. Total over `[0, max_scroll]`, cheap enough to run
    /// every frame.
    pub fn classify(&self, offset: f64, max_scroll: f64, registry: &PinRegistry) -> Region {
        match self.entry_at(offset, max_scroll, registry) {
            Some(entry) => Region::Pinned(entry.scene_id.clone()),
            None => Region::Flowing,
        }
    }

    /// Snap target for a settled offset: pinned regions resolve to the
    /// range midpoint so the fully-settled mid-phase state rests on
    /// screen; flowing offsets pass through unchanged. Idempotent.
    pub fn resolve_target(&self, offset: f64, max_scroll: f64, registry: &PinRegistry) -> f64 {
        match self.entry_at(offset, max_scroll, registry) {
            Some(entry) => {
                let target = entry.center();
                tracing::debug!(
                    scene = %entry.scene_id,
                    offset,
                    target,
                    "snap resolved to pinned center"
                );
                target
            }
            None => offset,
        }
    }

    /// Correction duration scaled by distance relative to the viewport.
    pub fn correction_duration(&self, distance: f64, viewport: Viewport) -> f64 {
        let t = (distance.abs() / viewport.height).clamp(0.0, 1.0);
        self.config.min_duration_secs
            + (self.config.max_duration_secs - self.config.min_duration_secs) * t
    }
}
