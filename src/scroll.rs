use crate::ease::Ease;

/// Tuning for the inertial smoothing layer. All values are configuration,
/// not contract; defaults are the reference feel.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Feel duration of the exponential approach, in seconds.
    pub duration_secs: f64,
    /// Distance below which the eased offset snaps to its target exactly.
    pub settle_epsilon_px: f64,
    /// Consecutive at-rest frames before a settle event fires.
    pub settle_frames: u32,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.2,
            settle_epsilon_px: 0.1,
            settle_frames: 3,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
        }
    }
}

/// Origin of a raw scroll delta; selects the input multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    Wheel,
    Touch,
}

/// Result of one animation-frame tick.
#[derive(Clone, Copy, Debug)]
pub struct Tick {
    pub offset: f64,
    /// Fired once per rest, after `settle_frames` consecutive at-rest
    /// frames.
    pub just_settled: bool,
}

/// Residual after one `duration_secs` of easing is e^-6, under 0.25%.
const SMOOTHING_RATE: f64 = 6.0;

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

impl Tween {
    fn new(from: f64, to: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(f64::EPSILON),
            ease,
        }
    }

    fn sample(&self) -> f64 {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Restart from the current eased position toward a new target with a
    /// fresh run of the configured duration.
    fn retarget(&mut self, new_to: f64) {
        *self = Self::new(self.sample(), new_to, self.duration, self.ease);
    }
}

/// Converts raw wheel/touch deltas into a smoothed scroll offset.
///
/// Sole owner of the scroll offset: scenes and the snap coordinator only
/// ever read it. Programmatic corrections run as an eased tween that any
/// new raw input cancels immediately.
#[derive(Clone, Debug)]
pub struct ScrollSource {
    config: SmoothingConfig,
    max_scroll: f64,
    target: f64,
    offset: f64,
    correction: Option<Tween>,
    rest_streak: u32,
    /// Set by input or a correction; a settle event fires only after
    /// motion, so a page resting where it loaded never self-corrects.
    moved: bool,
}

impl ScrollSource {
    pub fn new(config: SmoothingConfig, max_scroll: f64) -> Self {
        Self {
            config,
            max_scroll: max_scroll.max(0.0),
            target: 0.0,
            offset: 0.0,
            correction: None,
            rest_streak: 0,
            moved: false,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }

    pub fn correction_active(&self) -> bool {
        self.correction.is_some()
    }

    /// Accumulate a raw input delta. Cancels any active correction: raw
    /// tracking resumes from the current eased position, so user intent and
    /// programmatic snaps never fight.
    pub fn push_input(&mut self, delta: f64, source: InputSource) {
        if self.max_scroll <= 0.0 {
            return;
        }
        if self.correction.take().is_some() {
            self.target = self.offset;
        }
        let mult = match source {
            InputSource::Wheel => self.config.wheel_multiplier,
            InputSource::Touch => self.config.touch_multiplier,
        };
        self.target = (self.target + delta * mult).clamp(0.0, self.max_scroll);
        self.rest_streak = 0;
        self.moved = true;
    }

    /// Begin an eased correction toward `to`. Interruptible; completion
    /// lands on the target exactly.
    pub fn force_offset(&mut self, to: f64, duration_secs: f64, ease: Ease) {
        let to = to.clamp(0.0, self.max_scroll.max(0.0));
        if duration_secs <= 0.0 {
            self.offset = to;
            self.target = to;
            self.correction = None;
            return;
        }
        self.correction = Some(Tween::new(self.offset, to, duration_secs, ease));
        self.target = to;
        self.rest_streak = 0;
        self.moved = true;
    }

    /// Redirect an active correction toward a new target without aborting
    /// it. No-op when no correction is running.
    pub fn retarget_correction(&mut self, new_to: f64) {
        let new_to = new_to.clamp(0.0, self.max_scroll.max(0.0));
        if let Some(tween) = &mut self.correction {
            tween.retarget(new_to);
            self.target = new_to;
        }
    }

    /// Re-clamp to a new scroll extent, preserving relative position:
    /// `offset' = offset * new_max / old_max` when the old extent was
    /// non-zero. A zero extent pins everything at 0.
    pub fn set_max_scroll(&mut self, new_max: f64) {
        let new_max = new_max.max(0.0);
        let old_max = self.max_scroll;
        self.max_scroll = new_max;

        if new_max == 0.0 {
            self.offset = 0.0;
            self.target = 0.0;
            self.correction = None;
            return;
        }

        if old_max > 0.0 && old_max != new_max {
            let ratio = new_max / old_max;
            self.offset *= ratio;
            self.target *= ratio;
            if let Some(tween) = &mut self.correction {
                tween.from *= ratio;
                tween.to *= ratio;
            }
        }
        self.offset = self.offset.clamp(0.0, new_max);
        self.target = self.target.clamp(0.0, new_max);
    }

    /// Advance one animation frame by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> Tick {
        let dt = dt.max(0.0);

        if self.max_scroll <= 0.0 {
            self.offset = 0.0;
            self.target = 0.0;
        } else if let Some(tween) = &mut self.correction {
            tween.elapsed += dt;
            self.offset = tween.sample();
            if tween.is_done() {
                self.offset = tween.to;
                self.target = tween.to;
                self.correction = None;
            }
        } else {
            let alpha = 1.0 - (-SMOOTHING_RATE * dt / self.config.duration_secs).exp();
            self.offset += (self.target - self.offset) * alpha;
            if (self.target - self.offset).abs() <= self.config.settle_epsilon_px {
                self.offset = self.target;
            }
        }

        let at_rest = self.correction.is_none() && self.offset == self.target;
        if at_rest {
            self.rest_streak = self.rest_streak.saturating_add(1);
        } else {
            self.rest_streak = 0;
        }

        let just_settled =
            at_rest && self.moved && self.rest_streak >= self.config.settle_frames;
        if just_settled {
            self.moved = false;
        }

        Tick {
            offset: self.offset,
            just_settled,
        }
    }
}
