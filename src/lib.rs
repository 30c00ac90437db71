//! Karten-Karussell Library.
//! Core-Funktionalität als Library exportiert für Tests und Benches.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    CardScene, CardVisual, CarouselCommand, CarouselController, CarouselIntent, CarouselState,
    CommandLog,
};
pub use core::{
    nearest_resting_index, CarouselError, CarouselGeometry, Rgba, Section, SectionDeck, Spring,
    SpringParams,
};
pub use shared::CarouselOptions;
