//! Sektionen: die feste, geordnete Folge farbiger Platzhalter-Karten.

use super::CarouselError;

/// RGBA-Farbe als `[r, g, b, a]` in [0, 1].
pub type Rgba = [f32; 4];

/// Farbpalette des Standard-Decks (RGBA).
pub const SECTION_COLOR_BLUE: Rgba = [0.0, 0.478, 1.0, 1.0];
pub const SECTION_COLOR_PINK: Rgba = [1.0, 0.176, 0.333, 1.0];
pub const SECTION_COLOR_GRAY: Rgba = [0.557, 0.557, 0.576, 1.0];
pub const SECTION_COLOR_ORANGE: Rgba = [1.0, 0.584, 0.0, 1.0];
pub const SECTION_COLOR_CYAN: Rgba = [0.196, 0.678, 0.902, 1.0];
pub const SECTION_COLOR_BROWN: Rgba = [0.635, 0.518, 0.369, 1.0];

/// Unveränderliche Sektion: Position in der Folge plus Anzeigefarbe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    /// Position in der festen, geordneten Folge
    pub index: usize,
    /// Anzeigefarbe der Platzhalter-Karte
    pub color: Rgba,
}

/// Feste, geordnete Folge der Sektionen. Wird einmal beim Start erstellt
/// und danach nie mutiert.
#[derive(Debug, Clone)]
pub struct SectionDeck {
    sections: Vec<Section>,
}

impl SectionDeck {
    /// Erstellt ein Deck aus einer Sektions-Folge.
    /// Lehnt eine leere Folge ab (die Index-Vorhersage wäre undefiniert).
    pub fn new(sections: Vec<Section>) -> Result<Self, CarouselError> {
        if sections.is_empty() {
            return Err(CarouselError::EmptySequence);
        }
        Ok(Self { sections })
    }

    /// Das Standard-Deck: sechs Karten mit fester Farbzuordnung.
    pub fn standard() -> Self {
        let colors = [
            SECTION_COLOR_BLUE,
            SECTION_COLOR_PINK,
            SECTION_COLOR_GRAY,
            SECTION_COLOR_ORANGE,
            SECTION_COLOR_CYAN,
            SECTION_COLOR_BROWN,
        ];
        let sections = colors
            .iter()
            .enumerate()
            .map(|(index, &color)| Section { index, color })
            .collect();
        Self { sections }
    }

    /// Anzahl der Sektionen.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Per Konstruktion nie leer; für Clippy-Konsistenz vorhanden.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Read-only Sicht auf die Sektionen in Index-Reihenfolge.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
