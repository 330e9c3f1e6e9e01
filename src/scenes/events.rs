use crate::{
    core::Extent,
    dsl::{SceneBuilder, TimelineBuilder},
    ease::Ease,
    error::ScrollstageResult,
    scene::SceneConfig,
    timeline::Property,
};

const CARDS: usize = 6;

/// Flowing events grid: heading plus six cards that rise in with a
/// per-card stagger once the section scrolls into view.
pub fn scene() -> ScrollstageResult<SceneConfig> {
    let mut tl = TimelineBuilder::new()
        .tween("heading", Property::TranslateY, 3.0, 0.0, 0.0, 0.57, Ease::OutCubic)
        .tween("heading", Property::Opacity, 0.0, 1.0, 0.0, 0.57, Ease::OutCubic);

    for card in 0..CARDS {
        let target = format!("card_{card}");
        let start = card as f64 * 0.057;
        tl = tl
            .tween(target.clone(), Property::TranslateY, 5.0, 0.0, start, start + 0.43, Ease::OutCubic)
            .tween(target.clone(), Property::Opacity, 0.0, 1.0, start, start + 0.43, Ease::OutCubic)
            .tween(target, Property::Scale, 0.98, 1.0, start, start + 0.43, Ease::OutCubic);
    }

    SceneBuilder::flowing("events", Extent::ViewportFraction(1.4))
        .on_enter(1.4, 1.0, tl.build()?)
        .build()
}
