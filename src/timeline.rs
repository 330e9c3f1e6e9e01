use crate::{
    core::PhaseRange,
    ease::Ease,
    error::{ScrollstageError, ScrollstageResult},
};

/// Animatable property of a scene element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    TranslateX,
    TranslateY,
    Opacity,
    Scale,
}

/// One interpolation of a single element property over a phase window.
///
/// Outside `[phase.start, phase.end]` the segment clamps to its boundary
/// value: `from` before the window, `to` at or after it. Entering a scene
/// therefore always continues from the exact state the previous phase left
/// behind.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub target: String,
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub phase: PhaseRange,
    pub ease: Ease,
}

impl Segment {
    /// Value contributed at `progress`, clamped to `[from, to]`.
    pub fn value_at(&self, progress: f64) -> f64 {
        let t = self.ease.apply(self.phase.local_t(progress));
        self.from + (self.to - self.from) * t
    }

    fn validate(&self) -> ScrollstageResult<()> {
        if self.target.trim().is_empty() {
            return Err(ScrollstageError::timeline(
                "segment target must be non-empty",
            ));
        }
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ScrollstageError::timeline(format!(
                "segment '{}' has non-finite from/to",
                self.target
            )));
        }
        // Re-check the phase here: deserialized segments bypass
        // PhaseRange::new.
        PhaseRange::new(self.phase.start, self.phase.end)?;
        Ok(())
    }
}

/// Computed value for one element property at the current progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Sample {
    pub target: String,
    pub property: Property,
    pub value: f64,
}

/// Declarative sequence of keyed transitions over a normalized [0, 1]
/// progress axis.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    pub segments: Vec<Segment>,
}

impl Timeline {
    pub fn new(segments: Vec<Segment>) -> ScrollstageResult<Self> {
        let tl = Self { segments };
        tl.validate()?;
        Ok(tl)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Validate every segment and the non-overlap invariant: segments for a
    /// given `(target, property)` pair must not overlap in phase range, so
    /// exactly one interpolation is active at any progress value.
    pub fn validate(&self) -> ScrollstageResult<()> {
        for seg in &self.segments {
            seg.validate()?;
        }
        for (i, a) in self.segments.iter().enumerate() {
            for b in &self.segments[i + 1..] {
                if a.target == b.target
                    && a.property == b.property
                    && a.phase.overlaps(b.phase)
                {
                    return Err(ScrollstageError::timeline(format!(
                        "overlapping segments for '{}' {:?}: [{}, {}] and [{}, {}]",
                        a.target,
                        a.property,
                        a.phase.start,
                        a.phase.end,
                        b.phase.start,
                        b.phase.end
                    )));
                }
            }
        }
        Ok(())
    }

    /// Evaluate every `(target, property)` pair at `progress`.
    ///
    /// Pairs appear in declaration order. Where a pair has several phase
    /// windows (an entrance and an exit, say), the value between windows is
    /// the `to` of the last finished one.
    pub fn evaluate(&self, progress: f64) -> Vec<Sample> {
        let mut out: Vec<Sample> = Vec::with_capacity(self.segments.len());
        for (i, seg) in self.segments.iter().enumerate() {
            if out
                .iter()
                .any(|s| s.target == seg.target && s.property == seg.property)
            {
                continue;
            }

            let mut group: Vec<&Segment> = self.segments[i..]
                .iter()
                .filter(|c| c.target == seg.target && c.property == seg.property)
                .collect();
            group.sort_by(|a, b| a.phase.start.total_cmp(&b.phase.start));

            out.push(Sample {
                target: seg.target.clone(),
                property: seg.property,
                value: group_value_at(&group, progress),
            });
        }
        out
    }
}

fn group_value_at(group: &[&Segment], progress: f64) -> f64 {
    let mut value = group[0].from;
    for seg in group {
        if progress < seg.phase.start {
            break;
        }
        value = seg.value_at(progress);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(
        target: &str,
        property: Property,
        from: f64,
        to: f64,
        start: f64,
        end: f64,
        ease: Ease,
    ) -> Segment {
        Segment {
            target: target.to_string(),
            property,
            from,
            to,
            phase: PhaseRange::new(start, end).unwrap(),
            ease,
        }
    }

    fn entrance_exit() -> Timeline {
        Timeline::new(vec![
            seg("card", Property::TranslateX, -55.0, 0.0, 0.0, 0.3, Ease::Linear),
            seg("card", Property::TranslateX, 0.0, 18.0, 0.6, 1.0, Ease::InCubic),
            seg("card", Property::Opacity, 0.0, 1.0, 0.0, 0.3, Ease::Linear),
        ])
        .unwrap()
    }

    fn value_of(samples: &[Sample], target: &str, property: Property) -> f64 {
        samples
            .iter()
            .find(|s| s.target == target && s.property == property)
            .unwrap()
            .value
    }

    #[test]
    fn boundaries_are_exact() {
        let tl = entrance_exit();
        let at0 = tl.evaluate(0.0);
        assert_eq!(value_of(&at0, "card", Property::TranslateX), -55.0);
        assert_eq!(value_of(&at0, "card", Property::Opacity), 0.0);

        let at1 = tl.evaluate(1.0);
        assert_eq!(value_of(&at1, "card", Property::TranslateX), 18.0);
        assert_eq!(value_of(&at1, "card", Property::Opacity), 1.0);
    }

    #[test]
    fn settle_holds_entrance_end_state() {
        let tl = entrance_exit();
        for p in [0.3, 0.45, 0.6] {
            let samples = tl.evaluate(p);
            assert_eq!(value_of(&samples, "card", Property::TranslateX), 0.0);
            assert_eq!(value_of(&samples, "card", Property::Opacity), 1.0);
        }
    }

    #[test]
    fn interpolates_inside_phase() {
        let tl = entrance_exit();
        let samples = tl.evaluate(0.15);
        assert_eq!(value_of(&samples, "card", Property::TranslateX), -27.5);
        assert_eq!(value_of(&samples, "card", Property::Opacity), 0.5);
    }

    #[test]
    fn never_extrapolates_beyond_from_to() {
        let tl = entrance_exit();
        for p in [0.0, 0.1, 0.29, 0.3, 0.5, 0.61, 0.99, 1.0] {
            let x = value_of(&tl.evaluate(p), "card", Property::TranslateX);
            assert!((-55.0..=18.0).contains(&x), "x={x} at p={p}");
        }
    }

    #[test]
    fn declaration_order_does_not_matter() {
        // Exit declared before entrance still clamps to the entrance `from`
        // below its phase.
        let tl = Timeline::new(vec![
            seg("card", Property::Opacity, 1.0, 0.0, 0.7, 1.0, Ease::InCubic),
            seg("card", Property::Opacity, 0.0, 1.0, 0.0, 0.3, Ease::Linear),
        ])
        .unwrap();
        assert_eq!(value_of(&tl.evaluate(0.0), "card", Property::Opacity), 0.0);
        assert_eq!(value_of(&tl.evaluate(0.5), "card", Property::Opacity), 1.0);
        assert_eq!(value_of(&tl.evaluate(1.0), "card", Property::Opacity), 0.0);
    }

    #[test]
    fn degenerate_phase_steps() {
        let tl = Timeline::new(vec![seg(
            "rule",
            Property::Scale,
            0.0,
            1.0,
            0.5,
            0.5,
            Ease::Linear,
        )])
        .unwrap();
        assert_eq!(value_of(&tl.evaluate(0.49), "rule", Property::Scale), 0.0);
        assert_eq!(value_of(&tl.evaluate(0.5), "rule", Property::Scale), 1.0);
    }

    #[test]
    fn overlapping_pair_is_rejected() {
        let result = Timeline::new(vec![
            seg("card", Property::Opacity, 0.0, 1.0, 0.0, 0.4, Ease::Linear),
            seg("card", Property::Opacity, 1.0, 0.0, 0.3, 0.8, Ease::Linear),
        ]);
        assert!(matches!(result, Err(ScrollstageError::Timeline(_))));
    }

    #[test]
    fn distinct_properties_may_share_phase() {
        let tl = Timeline::new(vec![
            seg("card", Property::Opacity, 0.0, 1.0, 0.0, 0.4, Ease::Linear),
            seg("card", Property::TranslateY, 5.0, 0.0, 0.0, 0.4, Ease::Linear),
        ]);
        assert!(tl.is_ok());
    }

    #[test]
    fn rejects_non_finite_values() {
        let result = Timeline::new(vec![seg(
            "card",
            Property::Opacity,
            f64::NAN,
            1.0,
            0.0,
            0.4,
            Ease::Linear,
        )]);
        assert!(result.is_err());
    }
}
