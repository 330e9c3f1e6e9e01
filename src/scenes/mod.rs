//! Built-in venue scene catalog.
//!
//! Translate samples are percent-of-viewport along their axis (x in vw,
//! y in vh); small pixel nudges from the design are folded into fractional
//! percents. Opacity and scale are unitless. The render sink owns the
//! mapping from samples to actual element styles.

pub mod banquet_hall;
pub mod contact;
pub mod events;
pub mod experience_mosaic;
pub mod gallery;
pub mod hero;
pub mod lawn;
pub mod rooms;
pub mod testimonials;
pub mod venue_showcase;

use crate::{error::ScrollstageResult, scene::SceneConfig};

/// All scenes in page order: six pinned showpieces, then the flowing
/// content sections.
pub fn venue_catalog() -> ScrollstageResult<Vec<SceneConfig>> {
    Ok(vec![
        hero::scene()?,
        venue_showcase::scene()?,
        experience_mosaic::scene()?,
        banquet_hall::scene()?,
        lawn::scene()?,
        rooms::scene()?,
        events::scene()?,
        gallery::scene()?,
        testimonials::scene()?,
        contact::scene()?,
    ])
}
