use crate::{
    core::Extent,
    dsl::{SceneBuilder, TimelineBuilder},
    ease::Ease,
    error::ScrollstageResult,
    scene::SceneConfig,
    timeline::Property,
};

/// Mosaic scene: four image cards fly in from the viewport corners around
/// a centered headline and CTA pill.
pub fn scene() -> ScrollstageResult<SceneConfig> {
    // (target, entrance x/y, exit x/y) per corner card.
    let corners: [(&str, f64, f64, f64, f64); 4] = [
        ("card_top_left", -40.0, -20.0, -10.0, -10.0),
        ("card_top_right", 40.0, -20.0, 10.0, -10.0),
        ("card_bottom_left", -40.0, 20.0, -10.0, 10.0),
        ("card_bottom_right", 40.0, 20.0, 10.0, 10.0),
    ];

    let mut tl = TimelineBuilder::new();
    for (target, in_x, in_y, out_x, out_y) in corners {
        tl = tl
            .tween(target, Property::TranslateX, in_x, 0.0, 0.0, 0.3, Ease::Linear)
            .tween(target, Property::TranslateY, in_y, 0.0, 0.0, 0.3, Ease::Linear)
            .tween(target, Property::Opacity, 0.0, 1.0, 0.0, 0.3, Ease::Linear)
            .tween(target, Property::TranslateX, 0.0, out_x, 0.7, 1.0, Ease::InCubic)
            .tween(target, Property::TranslateY, 0.0, out_y, 0.7, 1.0, Ease::InCubic)
            .tween(target, Property::Opacity, 1.0, 0.3, 0.7, 1.0, Ease::InCubic);
    }

    let tl = tl
        .tween("headline", Property::TranslateY, -3.8, 0.0, 0.08, 0.38, Ease::Linear)
        .tween("headline", Property::Opacity, 0.0, 1.0, 0.08, 0.38, Ease::Linear)
        .tween("cta", Property::Scale, 0.85, 1.0, 0.12, 0.42, Ease::Linear)
        .tween("cta", Property::Opacity, 0.0, 1.0, 0.12, 0.42, Ease::Linear)
        // Exit.
        .tween("headline", Property::TranslateY, 0.0, -8.0, 0.7, 1.0, Ease::InCubic)
        .tween("headline", Property::Opacity, 1.0, 0.25, 0.7, 1.0, Ease::InCubic)
        .tween("cta", Property::Scale, 1.0, 0.92, 0.7, 1.0, Ease::InCubic)
        .tween("cta", Property::Opacity, 1.0, 0.0, 0.7, 1.0, Ease::InCubic)
        .build()?;

    SceneBuilder::pinned("experience_mosaic", Extent::ViewportFraction(1.3))
        .scrub(tl)
        .build()
}
