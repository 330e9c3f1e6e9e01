use crate::error::{ScrollstageError, ScrollstageResult};

/// Scroll interval `[start, end]` in document pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRange {
    /// Inclusive range start.
    pub start: f64,
    /// Inclusive range end.
    pub end: f64,
}

impl ScrollRange {
    /// Create a validated range with finite bounds and `start <= end`.
    pub fn new(start: f64, end: f64) -> ScrollstageResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScrollstageError::validation(
                "ScrollRange bounds must be finite",
            ));
        }
        if start > end {
            return Err(ScrollstageError::validation(
                "ScrollRange start must be <= end",
            ));
        }
        Ok(Self { start, end })
    }

    /// Extent of the range in pixels.
    pub fn len(self) -> f64 {
        self.end - self.start
    }

    /// Return `true` when the range covers no distance.
    pub fn is_empty(self) -> bool {
        self.len() == 0.0
    }

    /// Return `true` when `offset` is inside `[start, end]`.
    pub fn contains(self, offset: f64) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Clamp an offset into this range.
    pub fn clamp(self, offset: f64) -> f64 {
        offset.clamp(self.start, self.end)
    }

    /// Midpoint of the range.
    pub fn center(self) -> f64 {
        self.start + self.len() * 0.5
    }

    /// Normalized progress of `offset` through the range, clamped to [0, 1].
    ///
    /// Empty ranges step from 0 to 1 at `start`.
    pub fn progress(self, offset: f64) -> f64 {
        if self.is_empty() {
            return if offset < self.start { 0.0 } else { 1.0 };
        }
        ((offset - self.start) / self.len()).clamp(0.0, 1.0)
    }
}

/// Viewport geometry the engine resolves extents against.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport height in pixels, must be > 0.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport.
    pub fn new(height: f64) -> ScrollstageResult<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(ScrollstageError::validation(
                "Viewport height must be finite and > 0",
            ));
        }
        Ok(Self { height })
    }
}

/// A vertical distance, either absolute or relative to the viewport.
///
/// `ViewportFraction(1.1)` encodes the original "+110% of viewport height"
/// pin distances.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    ViewportFraction(f64),
    Px(f64),
}

impl Default for Extent {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

impl Extent {
    /// Resolve to document pixels against `viewport`.
    pub fn resolve(self, viewport: Viewport) -> f64 {
        match self {
            Self::ViewportFraction(f) => f * viewport.height,
            Self::Px(px) => px,
        }
    }

    /// Validate the underlying value is finite and non-negative.
    pub fn validate(self) -> ScrollstageResult<()> {
        let v = match self {
            Self::ViewportFraction(f) => f,
            Self::Px(px) => px,
        };
        if !v.is_finite() || v < 0.0 {
            return Err(ScrollstageError::validation(
                "Extent must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Fractional interval `[start, end]` of a scene's local progress axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseRange {
    pub start: f64,
    pub end: f64,
}

impl PhaseRange {
    /// Create a validated phase with `0 <= start <= end <= 1`.
    pub fn new(start: f64, end: f64) -> ScrollstageResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScrollstageError::validation(
                "PhaseRange bounds must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) {
            return Err(ScrollstageError::validation(
                "PhaseRange bounds must lie in [0, 1]",
            ));
        }
        if start > end {
            return Err(ScrollstageError::validation(
                "PhaseRange start must be <= end",
            ));
        }
        Ok(Self { start, end })
    }

    fn len(self) -> f64 {
        self.end - self.start
    }

    /// Return `true` when two phases share more than a boundary point.
    pub fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Local interpolation parameter for `progress`, clamped to [0, 1].
    ///
    /// Degenerate phases (`start == end`) step at `start`.
    pub fn local_t(self, progress: f64) -> f64 {
        if self.len() == 0.0 {
            return if progress < self.start { 0.0 } else { 1.0 };
        }
        ((progress - self.start) / self.len()).clamp(0.0, 1.0)
    }
}
