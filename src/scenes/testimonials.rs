use crate::{
    core::Extent,
    dsl::{SceneBuilder, TimelineBuilder},
    ease::Ease,
    error::ScrollstageResult,
    scene::SceneConfig,
    timeline::Property,
};

const CARDS: usize = 3;

/// Flowing testimonials row, triggered a little before the section bottom
/// reaches the viewport edge.
pub fn scene() -> ScrollstageResult<SceneConfig> {
    let mut tl = TimelineBuilder::new()
        .tween("heading", Property::TranslateY, 2.5, 0.0, 0.0, 0.47, Ease::OutCubic)
        .tween("heading", Property::Opacity, 0.0, 1.0, 0.0, 0.47, Ease::OutCubic);

    for card in 0..CARDS {
        let target = format!("card_{card}");
        let start = card as f64 * 0.09;
        tl = tl
            .tween(target.clone(), Property::TranslateY, 3.8, 0.0, start, start + 0.35, Ease::OutCubic)
            .tween(target.clone(), Property::Opacity, 0.0, 1.0, start, start + 0.35, Ease::OutCubic)
            .tween(target, Property::Scale, 0.98, 1.0, start, start + 0.35, Ease::OutCubic);
    }

    SceneBuilder::flowing("testimonials", Extent::ViewportFraction(1.0))
        .on_enter(1.7, 0.8, tl.build()?)
        .build()
}
