//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::CarouselOptions;
pub use options::{BLUR_DISPLAY_FACTOR, CARD_CORNER_RADIUS, CARD_SIZE, FLING_PREDICTION_SECS};
