//! Viewport-Input-Handling: Drag-Gesten und Frame-Ticks → CarouselIntent.

use crate::app::CarouselIntent;

/// Verwaltet den Input-Zustand für das Viewport (Drag-Tracking).
#[derive(Default)]
pub struct InputState {
    /// Kumulierte horizontale Translation seit Drag-Beginn (None = kein Drag)
    drag_translation: Option<f32>,
    /// Zuletzt gemeldete Viewport-Größe (für Resize-Erkennung)
    last_viewport_size: [f32; 2],
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            drag_translation: None,
            last_viewport_size: [0.0, 0.0],
        }
    }

    /// Ob gerade ein Drag aktiv ist (der Finger den Offset besitzt).
    pub fn is_dragging(&self) -> bool {
        self.drag_translation.is_some()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt CarouselIntents zurück.
    ///
    /// Drag-Phasen folgen der egui-Response: `drag_started_by` setzt die
    /// Translation auf Null, `dragged_by` akkumuliert Deltas und meldet
    /// den Stand, `drag_stopped_by` projiziert den Endpunkt über die
    /// Release-Geschwindigkeit. Läuft ein Settle, wird zusätzlich ein
    /// Frame-Tick mit `stable_dt` emittiert.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        settling: bool,
        fling_prediction_secs: f32,
    ) -> Vec<CarouselIntent> {
        let mut events = Vec::new();

        if viewport_size != self.last_viewport_size {
            self.last_viewport_size = viewport_size;
            events.push(CarouselIntent::ViewportResized {
                size: viewport_size,
            });
        }

        if response.drag_started_by(egui::PointerButton::Primary) {
            self.drag_translation = Some(0.0);
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(translation) = self.drag_translation.as_mut() {
                *translation += response.drag_delta().x;
                events.push(CarouselIntent::DragMoved {
                    translation: *translation,
                });
            }
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) {
            if let Some(translation) = self.drag_translation.take() {
                let velocity_x = ui.input(|i| i.pointer.velocity()).x;
                events.push(CarouselIntent::DragReleased {
                    predicted_end_translation: translation
                        + velocity_x * fling_prediction_secs,
                });
            }
        }

        if settling && !self.is_dragging() {
            let dt = ui.input(|i| i.stable_dt);
            events.push(CarouselIntent::AnimationTicked { dt });
        }

        events
    }
}
