use crate::{
    core::Extent,
    dsl::{SceneBuilder, TimelineBuilder},
    ease::Ease,
    error::ScrollstageResult,
    scene::SceneConfig,
    timeline::Property,
};

/// Lawn feature, mirrored layout of the banquet hall: image card from the
/// right, headline from the left.
pub fn scene() -> ScrollstageResult<SceneConfig> {
    let tl = TimelineBuilder::new()
        .tween("image_card", Property::TranslateX, 55.0, 0.0, 0.0, 0.3, Ease::Linear)
        .tween("image_card", Property::Opacity, 0.0, 1.0, 0.0, 0.3, Ease::Linear)
        .tween("headline", Property::TranslateX, -40.0, 0.0, 0.05, 0.35, Ease::Linear)
        .tween("headline", Property::Opacity, 0.0, 1.0, 0.05, 0.35, Ease::Linear)
        .tween("body", Property::TranslateY, 2.8, 0.0, 0.1, 0.4, Ease::Linear)
        .tween("body", Property::Opacity, 0.0, 1.0, 0.1, 0.4, Ease::Linear)
        .tween("specs", Property::TranslateY, 2.8, 0.0, 0.12, 0.42, Ease::Linear)
        .tween("specs", Property::Opacity, 0.0, 1.0, 0.12, 0.42, Ease::Linear)
        .tween("cta", Property::TranslateY, 2.0, 0.0, 0.14, 0.44, Ease::Linear)
        .tween("cta", Property::Opacity, 0.0, 1.0, 0.14, 0.44, Ease::Linear)
        // Exit.
        .tween("image_card", Property::TranslateX, 0.0, 18.0, 0.7, 1.0, Ease::InCubic)
        .tween("image_card", Property::Opacity, 1.0, 0.35, 0.7, 1.0, Ease::InCubic)
        .tween("headline", Property::TranslateX, 0.0, -10.0, 0.7, 1.0, Ease::InCubic)
        .tween("headline", Property::Opacity, 1.0, 0.25, 0.7, 1.0, Ease::InCubic)
        .tween("body", Property::Opacity, 1.0, 0.2, 0.7, 1.0, Ease::InCubic)
        .tween("specs", Property::Opacity, 1.0, 0.2, 0.7, 1.0, Ease::InCubic)
        .tween("cta", Property::Opacity, 1.0, 0.0, 0.7, 1.0, Ease::InCubic)
        .build()?;

    SceneBuilder::pinned("lawn", Extent::ViewportFraction(1.3))
        .scrub(tl)
        .build()
}
