use crate::{
    core::ScrollRange,
    error::{ScrollstageError, ScrollstageResult},
};

/// Resolved scroll reservation of one pinned scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinEntry {
    pub scene_id: String,
    pub range: ScrollRange,
}

impl PinEntry {
    /// Snap target of the entry: the midpoint of its range.
    pub fn center(&self) -> f64 {
        self.range.center()
    }
}

/// Authoritative list of pinned scenes and their resolved scroll ranges.
///
/// The registry never polls geometry itself; callers re-register every
/// entry after any layout-affecting change. Entries are kept sorted by
/// range start.
#[derive(Clone, Debug, Default)]
pub struct PinRegistry {
    entries: Vec<PinEntry>,
}

impl PinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `scene_id`. Distinct scenes must
    /// reserve exclusive scroll intervals: an overlap is a miscomputed page
    /// layout and is reported, never silently merged. Ranges may share a
    /// boundary point.
    pub fn register(
        &mut self,
        scene_id: impl Into<String>,
        range: ScrollRange,
    ) -> ScrollstageResult<()> {
        let scene_id = scene_id.into();
        if scene_id.trim().is_empty() {
            return Err(ScrollstageError::registry("scene id must be non-empty"));
        }

        for other in self.entries.iter().filter(|e| e.scene_id != scene_id) {
            let overlaps = range.start < other.range.end && other.range.start < range.end;
            if overlaps {
                tracing::warn!(
                    scene = %scene_id,
                    other = %other.scene_id,
                    "overlapping pin ranges"
                );
                return Err(ScrollstageError::registry(format!(
                    "pinned scene '{}' [{}, {}] overlaps '{}' [{}, {}]",
                    scene_id,
                    range.start,
                    range.end,
                    other.scene_id,
                    other.range.start,
                    other.range.end
                )));
            }
        }

        self.entries.retain(|e| e.scene_id != scene_id);
        self.entries.push(PinEntry { scene_id, range });
        self.entries
            .sort_by(|a, b| a.range.start.total_cmp(&b.range.start));
        Ok(())
    }

    pub fn remove(&mut self, scene_id: &str) {
        self.entries.retain(|e| e.scene_id != scene_id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries sorted by range start.
    pub fn entries(&self) -> &[PinEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
