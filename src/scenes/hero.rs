use crate::{
    core::Extent,
    dsl::{SceneBuilder, TimelineBuilder},
    ease::Ease,
    error::ScrollstageResult,
    scene::SceneConfig,
    timeline::Property,
};

const HEADLINE_WORDS: usize = 5;

/// Full-viewport opening scene. The entrance auto-plays on mount; once
/// scrolling starts, the pinned scrub drives the exit. The mount timeline's
/// end state equals the scrub's rest state, so the handoff is seamless.
pub fn scene() -> ScrollstageResult<SceneConfig> {
    let mut mount = TimelineBuilder::new()
        .tween("bg", Property::Opacity, 0.0, 1.0, 0.0, 0.43, Ease::OutCubic)
        .tween("bg", Property::Scale, 1.06, 1.0, 0.0, 0.43, Ease::OutCubic)
        .tween("label", Property::TranslateY, -2.2, 0.0, 0.2, 0.43, Ease::OutCubic)
        .tween("label", Property::Opacity, 0.0, 1.0, 0.2, 0.43, Ease::OutCubic);

    for word in 0..HEADLINE_WORDS {
        let target = format!("headline_word_{word}");
        let start = 0.28 + word as f64 * 0.02;
        mount = mount
            .tween(target.clone(), Property::TranslateY, 5.0, 0.0, start, start + 0.35, Ease::OutCubic)
            .tween(target, Property::Opacity, 0.0, 1.0, start, start + 0.35, Ease::OutCubic);
    }

    let mount = mount
        .tween("subline", Property::TranslateY, 3.0, 0.0, 0.53, 0.8, Ease::OutCubic)
        .tween("subline", Property::Opacity, 0.0, 1.0, 0.53, 0.8, Ease::OutCubic)
        .tween("cta", Property::TranslateY, 2.2, 0.0, 0.65, 0.88, Ease::OutCubic)
        .tween("cta", Property::Opacity, 0.0, 1.0, 0.65, 0.88, Ease::OutCubic)
        .tween("scroll_hint", Property::Opacity, 0.0, 1.0, 0.8, 1.0, Ease::OutCubic)
        .build()?;

    let scrub = TimelineBuilder::new()
        .tween("bg", Property::Scale, 1.0, 1.06, 0.7, 1.0, Ease::InCubic)
        .tween("bg", Property::TranslateY, 0.0, -6.0, 0.7, 1.0, Ease::InCubic)
        .tween("content", Property::TranslateY, 0.0, -18.0, 0.7, 1.0, Ease::InCubic)
        .tween("content", Property::Opacity, 1.0, 0.0, 0.7, 1.0, Ease::InCubic)
        .tween("scroll_hint", Property::Opacity, 1.0, 0.0, 0.7, 1.0, Ease::InCubic)
        .build()?;

    SceneBuilder::pinned("hero", Extent::ViewportFraction(1.3))
        .scrub(scrub)
        .on_mount(2.5, mount)
        .build()
}
