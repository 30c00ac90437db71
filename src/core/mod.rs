//! Core-Domänenlogik: Geometrie, Index-Vorhersage, Feder, Sektionen.
//!
//! Komplett egui-frei und deterministisch — alles hier ist pure
//! Skalar-Mathematik und direkt ohne Display testbar.

pub mod error;
pub mod geometry;
pub mod predictor;
pub mod section;
pub mod spring;

pub use error::CarouselError;
pub use geometry::CarouselGeometry;
pub use predictor::nearest_resting_index;
pub use section::{Rgba, Section, SectionDeck};
pub use spring::{Spring, SpringParams};
