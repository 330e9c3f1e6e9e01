use crate::{
    core::Extent,
    error::{ScrollstageError, ScrollstageResult},
    timeline::Timeline,
};

/// How a scene occupies the page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Holds a fixed viewport position while its scroll range is active;
    /// `extra_scroll` is the pin distance (e.g. +110% of viewport height).
    Pinned { extra_scroll: Extent },
    /// Ordinary scrolling content of the given height.
    Flowing { height: Extent },
}

impl Placement {
    pub fn is_pinned(self) -> bool {
        matches!(self, Self::Pinned { .. })
    }

    /// Scroll distance this scene contributes to the page.
    pub fn extent(self) -> Extent {
        match self {
            Self::Pinned { extra_scroll } => extra_scroll,
            Self::Flowing { height } => height,
        }
    }
}

/// What advances a timeline's progress.
///
/// The hero section's "auto-play on mount + scroll-driven exit" duality is
/// two `DrivenTimeline`s on one scene, not a special case.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineDriver {
    /// Progress is the scene's normalized scroll progress. Pinned scenes
    /// only.
    Scrub,
    /// One-shot clock started at registration; plays forward once.
    Mount { duration_secs: f64 },
    /// Viewport-enter toggle for flowing scenes: plays forward once the
    /// scene top passes the anchor line (fraction of viewport height below
    /// the top edge, 1.0 = bottom), plays backward when scrolled back above
    /// it.
    Enter { duration_secs: f64, anchor: f64 },
}

impl TimelineDriver {
    fn validate(self) -> ScrollstageResult<()> {
        match self {
            Self::Scrub => Ok(()),
            Self::Mount { duration_secs } => {
                if !duration_secs.is_finite() || duration_secs <= 0.0 {
                    return Err(ScrollstageError::validation(
                        "Mount duration_secs must be > 0",
                    ));
                }
                Ok(())
            }
            Self::Enter {
                duration_secs,
                anchor,
            } => {
                if !duration_secs.is_finite() || duration_secs <= 0.0 {
                    return Err(ScrollstageError::validation(
                        "Enter duration_secs must be > 0",
                    ));
                }
                if !(0.0..=1.0).contains(&anchor) {
                    return Err(ScrollstageError::validation(
                        "Enter anchor must lie in [0, 1]",
                    ));
                }
                Ok(())
            }
        }
    }
}

/// A timeline paired with the driver that advances it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct DrivenTimeline {
    pub driver: TimelineDriver,
    pub timeline: Timeline,
}

/// Declarative configuration of one animated page section.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    pub id: String,
    pub placement: Placement,
    pub timelines: Vec<DrivenTimeline>,
}

impl SceneConfig {
    pub fn validate(&self) -> ScrollstageResult<()> {
        if self.id.trim().is_empty() {
            return Err(ScrollstageError::validation("scene id must be non-empty"));
        }
        self.placement.extent().validate()?;

        for driven in &self.timelines {
            driven.driver.validate()?;
            driven.timeline.validate()?;

            match (self.placement, driven.driver) {
                (Placement::Flowing { .. }, TimelineDriver::Scrub) => {
                    return Err(ScrollstageError::validation(format!(
                        "flowing scene '{}' may not use a scrub timeline",
                        self.id
                    )));
                }
                (Placement::Pinned { .. }, TimelineDriver::Enter { .. }) => {
                    return Err(ScrollstageError::validation(format!(
                        "pinned scene '{}' may not use an enter trigger",
                        self.id
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
