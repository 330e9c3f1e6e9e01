use crate::{
    core::Extent,
    dsl::{SceneBuilder, TimelineBuilder},
    ease::Ease,
    error::ScrollstageResult,
    scene::SceneConfig,
    timeline::Property,
};

const FIELDS: usize = 6;

/// Flowing contact section: copy column and form panel slide in from
/// opposite sides, then the form fields rise one by one.
pub fn scene() -> ScrollstageResult<SceneConfig> {
    let mut tl = TimelineBuilder::new()
        .tween("left", Property::TranslateX, -3.8, 0.0, 0.0, 0.67, Ease::OutCubic)
        .tween("left", Property::Opacity, 0.0, 1.0, 0.0, 0.67, Ease::OutCubic)
        .tween("form", Property::TranslateX, 3.8, 0.0, 0.0, 0.67, Ease::OutCubic)
        .tween("form", Property::Opacity, 0.0, 1.0, 0.0, 0.67, Ease::OutCubic);

    for field in 0..FIELDS {
        let target = format!("field_{field}");
        let start = 0.25 + field as f64 * 0.042;
        tl = tl
            .tween(target.clone(), Property::TranslateY, 1.5, 0.0, start, start + 0.42, Ease::OutCubic)
            .tween(target, Property::Opacity, 0.0, 1.0, start, start + 0.42, Ease::OutCubic);
    }

    SceneBuilder::flowing("contact", Extent::ViewportFraction(1.2))
        .on_enter(1.2, 0.8, tl.build()?)
        .build()
}
