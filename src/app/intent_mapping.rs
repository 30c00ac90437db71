//! Mapping von UI-Intents auf mutierende Carousel-Commands.
//!
//! Hier lebt die Drag-Ende-Entscheidung: Landet die Vorhersage auf der
//! bereits fokussierten Sektion, wird direkt ein Settle angestoßen
//! (Snap-Back) — es findet keine Index-Zuweisung statt, also auch kein
//! Settle über den Index-Wechsel-Pfad. Nur bei abweichendem Ziel wird
//! die Sektion gewechselt.

use crate::core::nearest_resting_index;

use super::{CarouselCommand, CarouselIntent, CarouselState};

/// Übersetzt einen `CarouselIntent` in eine Sequenz ausführbarer `CarouselCommand`s.
pub fn map_intent_to_commands(
    state: &CarouselState,
    intent: CarouselIntent,
) -> Vec<CarouselCommand> {
    match intent {
        CarouselIntent::DragMoved { translation } => vec![CarouselCommand::SetLiveOffset {
            offset: translation + state.rested_offset,
        }],
        CarouselIntent::DragReleased {
            predicted_end_translation,
        } => {
            let predicted_end = predicted_end_translation + state.rested_offset;
            match nearest_resting_index(state.deck.len(), state.options.item_spacing, predicted_end)
            {
                Ok(target) if target == state.selected_index => {
                    vec![CarouselCommand::BeginSettle { target }]
                }
                Ok(target) => vec![CarouselCommand::SelectSection { index: target }],
                Err(e) => {
                    // Per Konstruktion unerreichbar: das Deck ist nie leer
                    log::warn!("Index-Vorhersage fehlgeschlagen: {}", e);
                    Vec::new()
                }
            }
        }
        CarouselIntent::SectionSelected { index } => {
            if index == state.selected_index {
                // Kein beobachteter Index-Wechsel: nur zurück zur Ruheposition
                vec![CarouselCommand::BeginSettle { target: index }]
            } else {
                vec![CarouselCommand::SelectSection { index }]
            }
        }
        CarouselIntent::ViewportResized { size } => {
            vec![CarouselCommand::SetViewportSize { size }]
        }
        CarouselIntent::AnimationTicked { dt } => {
            if state.is_settling() {
                vec![CarouselCommand::AdvanceSettle { dt }]
            } else {
                Vec::new()
            }
        }
        CarouselIntent::OptionsDialogToggled => vec![CarouselCommand::ToggleOptionsWindow],
        CarouselIntent::OptionsChanged { options } => {
            vec![CarouselCommand::ApplyOptions { options }]
        }
        CarouselIntent::OptionsResetRequested => vec![CarouselCommand::ResetOptions],
        CarouselIntent::ExitRequested => vec![CarouselCommand::RequestExit],
    }
}
