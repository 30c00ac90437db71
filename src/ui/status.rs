//! Status-Bar am unteren Bildschirmrand.

use crate::app::CarouselState;

/// Rendert die Status-Bar.
pub fn render_status_bar(ctx: &egui::Context, state: &CarouselState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Seite: {}/{}",
                state.selected_index + 1,
                state.deck.len()
            ));

            ui.separator();

            ui.label(format!(
                "Offset: {:.1} (Ruhe: {:.1})",
                state.live_offset, state.rested_offset
            ));

            ui.separator();

            if state.is_settling() {
                ui.label("Settle läuft…");
            } else {
                ui.label("Ruhend");
            }
        });
    });
}
