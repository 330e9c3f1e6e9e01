#![forbid(unsafe_code)]

pub mod core;
pub mod dsl;
pub mod ease;
pub mod error;
pub mod registry;
pub mod scene;
pub mod scenes;
pub mod scroll;
pub mod snap;
pub mod stage;
pub mod timeline;

pub use self::core::{Extent, PhaseRange, ScrollRange, Viewport};
pub use dsl::{SceneBuilder, TimelineBuilder};
pub use ease::Ease;
pub use error::{ScrollstageError, ScrollstageResult};
pub use registry::{PinEntry, PinRegistry};
pub use scene::{DrivenTimeline, Placement, SceneConfig, TimelineDriver};
pub use scroll::{InputSource, ScrollSource, SmoothingConfig, Tick};
pub use snap::{Region, SnapConfig, SnapCoordinator};
pub use stage::{
    FrameOutput, SceneFrame, SceneHandle, SnapCorrection, Stage, StageConfig,
};
pub use timeline::{Property, Sample, Segment, Timeline};
