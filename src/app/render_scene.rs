//! Karten-Szene als expliziter Übergabevertrag zwischen App und UI.
//!
//! Der "Transformationen neu berechnen"-Pass: Wird bei jeder
//! Offset-Änderung (jeder Frame eines Drags oder Settles) neu gebaut.

use crate::core::{CarouselError, CarouselGeometry, Rgba};

use super::CarouselState;

/// Render-Transformationen einer einzelnen Karte.
#[derive(Debug, Clone, Copy)]
pub struct CardVisual {
    /// Anzeigefarbe (RGBA)
    pub color: Rgba,
    /// Horizontaler Render-Offset relativ zur Viewport-Mitte
    pub render_offset: f32,
    /// Scale-Faktor in [0, 1]
    pub scale: f32,
    /// Blur-Wert in [0, blur_max] vor der Display-Skalierung
    pub blur: f32,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct CardScene {
    /// Karten in Index-Reihenfolge (niedrige Indizes werden zuerst gemalt)
    pub cards: Vec<CardVisual>,
    /// Aktuell fokussierte Sektion (für Status-Anzeige)
    pub selected_index: usize,
    /// Kantenlänge der Karten in Punkten
    pub card_size: f32,
    /// Eckenradius der Karten in Punkten
    pub card_corner_radius: f32,
    /// Display-Multiplikator für den sichtbaren Blur-Radius
    pub blur_display_factor: f32,
}

/// Berechnet die Render-Transformationen aller Karten für den aktuellen Offset.
///
/// Schlägt mit `DegenerateViewport` fehl, solange noch keine echte
/// Viewport-Größe bekannt ist (erster Frame vor `ViewportResized`).
pub fn build(state: &CarouselState) -> Result<CardScene, CarouselError> {
    let geometry = CarouselGeometry::with_tuning(
        state.viewport_size[0],
        state.options.item_spacing,
        state.options.drag_damping,
        state.options.scale_pace_divisor,
        state.options.blur_pace_divisor,
        state.options.blur_max,
    )?;

    let cards = state
        .deck
        .sections()
        .iter()
        .map(|section| CardVisual {
            color: section.color,
            render_offset: geometry.item_render_offset(section.index, state.live_offset),
            scale: geometry.item_scale(section.index, state.live_offset),
            blur: geometry.item_blur(section.index, state.live_offset),
        })
        .collect();

    Ok(CardScene {
        cards,
        selected_index: state.selected_index,
        card_size: state.options.card_size,
        card_corner_radius: state.options.card_corner_radius,
        blur_display_factor: state.options.blur_display_factor,
    })
}
