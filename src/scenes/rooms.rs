use crate::{
    core::Extent,
    dsl::{SceneBuilder, TimelineBuilder},
    ease::Ease,
    error::ScrollstageResult,
    scene::SceneConfig,
    timeline::Property,
};

const AMENITIES: usize = 3;

/// Guest rooms feature: image card from the left, copy with a staggered
/// amenity list.
pub fn scene() -> ScrollstageResult<SceneConfig> {
    let mut tl = TimelineBuilder::new()
        .tween("image_card", Property::TranslateX, -55.0, 0.0, 0.0, 0.3, Ease::Linear)
        .tween("image_card", Property::Opacity, 0.0, 1.0, 0.0, 0.3, Ease::Linear)
        .tween("headline", Property::TranslateY, 3.5, 0.0, 0.08, 0.38, Ease::Linear)
        .tween("headline", Property::Opacity, 0.0, 1.0, 0.08, 0.38, Ease::Linear)
        .tween("body", Property::TranslateY, 3.5, 0.0, 0.08, 0.38, Ease::Linear)
        .tween("body", Property::Opacity, 0.0, 1.0, 0.08, 0.38, Ease::Linear);

    for item in 0..AMENITIES {
        let target = format!("amenity_{item}");
        let start = 0.12 + item as f64 * 0.02;
        tl = tl
            .tween(target.clone(), Property::TranslateY, 2.2, 0.0, start, start + 0.3, Ease::Linear)
            .tween(target, Property::Opacity, 0.0, 1.0, start, start + 0.3, Ease::Linear);
    }

    let mut tl = tl
        .tween("cta", Property::TranslateY, 1.5, 0.0, 0.16, 0.46, Ease::Linear)
        .tween("cta", Property::Opacity, 0.0, 1.0, 0.16, 0.46, Ease::Linear)
        // Exit.
        .tween("image_card", Property::TranslateX, 0.0, -18.0, 0.6, 1.0, Ease::InCubic)
        .tween("image_card", Property::Opacity, 1.0, 0.35, 0.6, 1.0, Ease::InCubic)
        .tween("headline", Property::TranslateY, 0.0, -8.0, 0.6, 1.0, Ease::InCubic)
        .tween("headline", Property::Opacity, 1.0, 0.25, 0.6, 1.0, Ease::InCubic)
        .tween("body", Property::TranslateY, 0.0, -8.0, 0.6, 1.0, Ease::InCubic)
        .tween("body", Property::Opacity, 1.0, 0.25, 0.6, 1.0, Ease::InCubic)
        .tween("cta", Property::Opacity, 1.0, 0.0, 0.6, 1.0, Ease::InCubic);

    for item in 0..AMENITIES {
        tl = tl.tween(
            format!("amenity_{item}"),
            Property::Opacity,
            1.0,
            0.2,
            0.6,
            1.0,
            Ease::InCubic,
        );
    }

    SceneBuilder::pinned("rooms", Extent::ViewportFraction(1.1))
        .scrub(tl.build()?)
        .build()
}
