//! Handler für die mutierenden Carousel-Commands.

use crate::core::Spring;
use crate::shared::CarouselOptions;

use super::CarouselState;

/// Drag-Tracking: Der Finger übernimmt den Offset.
///
/// Eine laufende Settle-Animation wird verworfen; `rested_offset` bleibt
/// auf dem zuletzt animierten Wert stehen, sodass der Drag von dort
/// re-basiert (keine explizite Unterbrechungs-Buchführung).
pub fn set_live_offset(state: &mut CarouselState, offset: f32) {
    state.settle = None;
    state.live_offset = offset;
}

/// Wechselt die fokussierte Sektion und startet das Settle zu ihrem Ruhepunkt.
pub fn select_section(state: &mut CarouselState, index: usize) {
    let index = index.min(state.deck.len() - 1);
    if state.selected_index != index {
        log::debug!(
            "Sektion gewechselt: {} → {}",
            state.selected_index,
            index
        );
        state.selected_index = index;
    }
    begin_settle(state, index);
}

/// Startet (oder re-targetet) die Settle-Feder zur Ruheposition von `target`.
pub fn begin_settle(state: &mut CarouselState, target: usize) {
    let target_offset = state.resting_offset_for(target);
    match state.settle.as_mut() {
        Some(spring) => spring.retarget(target_offset),
        None => {
            state.settle = Some(Spring::settle_to(
                state.live_offset,
                target_offset,
                state.options.spring_params(),
            ));
        }
    }
}

/// Schreibt die Settle-Feder fort: `live_offset` und `rested_offset` folgen
/// beide der animierten Position, bei Abschluss exakt dem Ziel.
pub fn advance_settle(state: &mut CarouselState, dt: f32) {
    let Some(spring) = state.settle.as_mut() else {
        return;
    };

    let position = spring.tick(dt);
    state.live_offset = position;
    state.rested_offset = position;

    if spring.is_settled() {
        let target = spring.target();
        state.live_offset = target;
        state.rested_offset = target;
        state.settle = None;
    }
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut CarouselState, size: [f32; 2]) {
    state.viewport_size = size;
}

/// Blendet das Options-Fenster ein oder aus.
pub fn toggle_options_window(state: &mut CarouselState) {
    state.show_options_window = !state.show_options_window;
}

/// Übernimmt geänderte Optionen und persistiert sie neben der Binary.
pub fn apply_options(state: &mut CarouselState, options: CarouselOptions) -> anyhow::Result<()> {
    state.options = options;
    state.options.save_to_file(&CarouselOptions::config_path())
}

/// Setzt die Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut CarouselState) -> anyhow::Result<()> {
    state.options = CarouselOptions::default();
    state.options.save_to_file(&CarouselOptions::config_path())
}

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut CarouselState) {
    state.should_exit = true;
}
