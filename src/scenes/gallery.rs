use crate::{
    core::Extent,
    dsl::{SceneBuilder, TimelineBuilder},
    ease::Ease,
    error::ScrollstageResult,
    scene::SceneConfig,
    timeline::Property,
};

/// Flowing gallery: heading and filterable image grid fade up on enter.
pub fn scene() -> ScrollstageResult<SceneConfig> {
    let tl = TimelineBuilder::new()
        .tween("heading", Property::TranslateY, 3.0, 0.0, 0.0, 0.9, Ease::OutCubic)
        .tween("heading", Property::Opacity, 0.0, 1.0, 0.0, 0.9, Ease::OutCubic)
        .tween("grid", Property::TranslateY, 5.0, 0.0, 0.1, 1.0, Ease::OutCubic)
        .tween("grid", Property::Opacity, 0.0, 1.0, 0.1, 1.0, Ease::OutCubic)
        .build()?;

    SceneBuilder::flowing("gallery", Extent::ViewportFraction(1.6))
        .on_enter(0.8, 1.0, tl)
        .build()
}
