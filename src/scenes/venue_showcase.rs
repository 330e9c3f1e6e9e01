use crate::{
    core::Extent,
    dsl::{SceneBuilder, TimelineBuilder},
    ease::Ease,
    error::ScrollstageResult,
    scene::SceneConfig,
    timeline::Property,
};

const HEADLINE_WORDS: usize = 6;

/// Split showcase: copy panel slides in from the left, the image card from
/// the right, with a word-staggered headline and an accent rule wipe.
pub fn scene() -> ScrollstageResult<SceneConfig> {
    let mut tl = TimelineBuilder::new()
        .tween("left_panel", Property::TranslateX, -55.0, 0.0, 0.0, 0.3, Ease::Linear)
        .tween("left_panel", Property::Opacity, 0.0, 1.0, 0.0, 0.3, Ease::Linear)
        .tween("image_card", Property::TranslateX, 55.0, 0.0, 0.0, 0.3, Ease::Linear)
        .tween("image_card", Property::Opacity, 0.0, 1.0, 0.0, 0.3, Ease::Linear);

    for word in 0..HEADLINE_WORDS {
        let target = format!("headline_word_{word}");
        let start = 0.05 + word as f64 * 0.02;
        tl = tl
            .tween(target.clone(), Property::TranslateY, 5.0, 0.0, start, start + 0.3, Ease::Linear)
            .tween(target, Property::Opacity, 0.0, 1.0, start, start + 0.3, Ease::Linear);
    }

    let tl = tl
        .tween("body", Property::TranslateY, 3.0, 0.0, 0.1, 0.4, Ease::Linear)
        .tween("body", Property::Opacity, 0.0, 1.0, 0.1, 0.4, Ease::Linear)
        .tween("rule", Property::Scale, 0.0, 1.0, 0.12, 0.42, Ease::Linear)
        .tween("cta", Property::TranslateY, 2.0, 0.0, 0.14, 0.44, Ease::Linear)
        .tween("cta", Property::Opacity, 0.0, 1.0, 0.14, 0.44, Ease::Linear)
        .tween("caption", Property::TranslateY, 2.0, 0.0, 0.15, 0.45, Ease::Linear)
        .tween("caption", Property::Opacity, 0.0, 1.0, 0.15, 0.45, Ease::Linear)
        // Exit.
        .tween("left_panel", Property::TranslateX, 0.0, -18.0, 0.6, 1.0, Ease::InCubic)
        .tween("left_panel", Property::Opacity, 1.0, 0.3, 0.6, 1.0, Ease::InCubic)
        .tween("image_card", Property::TranslateX, 0.0, 18.0, 0.6, 1.0, Ease::InCubic)
        .tween("image_card", Property::Opacity, 1.0, 0.35, 0.6, 1.0, Ease::InCubic)
        .tween("rule", Property::Scale, 1.0, 0.0, 0.6, 1.0, Ease::InCubic)
        .build()?;

    SceneBuilder::pinned("venue_showcase", Extent::ViewportFraction(1.1))
        .scrub(tl)
        .build()
}
