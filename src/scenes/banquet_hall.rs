use crate::{
    core::Extent,
    dsl::{SceneBuilder, TimelineBuilder},
    ease::Ease,
    error::ScrollstageResult,
    scene::SceneConfig,
    timeline::Property,
};

/// Banquet hall feature: image card enters from the left, copy column from
/// the right, exits drifting back out the way they came.
pub fn scene() -> ScrollstageResult<SceneConfig> {
    let tl = TimelineBuilder::new()
        .tween("image_card", Property::TranslateX, -55.0, 0.0, 0.0, 0.3, Ease::Linear)
        .tween("image_card", Property::Opacity, 0.0, 1.0, 0.0, 0.3, Ease::Linear)
        .tween("headline", Property::TranslateX, 40.0, 0.0, 0.05, 0.35, Ease::Linear)
        .tween("headline", Property::Opacity, 0.0, 1.0, 0.05, 0.35, Ease::Linear)
        .tween("body", Property::TranslateY, 2.8, 0.0, 0.1, 0.4, Ease::Linear)
        .tween("body", Property::Opacity, 0.0, 1.0, 0.1, 0.4, Ease::Linear)
        .tween("specs", Property::TranslateY, 2.8, 0.0, 0.12, 0.42, Ease::Linear)
        .tween("specs", Property::Opacity, 0.0, 1.0, 0.12, 0.42, Ease::Linear)
        .tween("cta", Property::TranslateY, 2.0, 0.0, 0.14, 0.44, Ease::Linear)
        .tween("cta", Property::Opacity, 0.0, 1.0, 0.14, 0.44, Ease::Linear)
        // Exit.
        .tween("image_card", Property::TranslateX, 0.0, -18.0, 0.6, 1.0, Ease::InCubic)
        .tween("image_card", Property::Opacity, 1.0, 0.35, 0.6, 1.0, Ease::InCubic)
        .tween("headline", Property::TranslateX, 0.0, -10.0, 0.6, 1.0, Ease::InCubic)
        .tween("headline", Property::Opacity, 1.0, 0.25, 0.6, 1.0, Ease::InCubic)
        .tween("body", Property::Opacity, 1.0, 0.2, 0.6, 1.0, Ease::InCubic)
        .tween("specs", Property::Opacity, 1.0, 0.2, 0.6, 1.0, Ease::InCubic)
        .tween("cta", Property::Opacity, 1.0, 0.0, 0.6, 1.0, Ease::InCubic)
        .build()?;

    SceneBuilder::pinned("banquet_hall", Extent::ViewportFraction(1.1))
        .scrub(tl)
        .build()
}
