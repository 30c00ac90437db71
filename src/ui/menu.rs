//! Top-Menü (Datei, Ansicht).

use crate::app::{CarouselIntent, CarouselState};

/// Rendert die Menü-Leiste.
pub fn render_menu(ctx: &egui::Context, state: &CarouselState) -> Vec<CarouselIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(CarouselIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Optionen…").clicked() {
                    events.push(CarouselIntent::OptionsDialogToggled);
                    ui.close();
                }

                ui.separator();

                for index in 0..state.deck.len() {
                    let label = format!("Sektion {}", index + 1);
                    if ui
                        .selectable_label(index == state.selected_index, label)
                        .clicked()
                    {
                        events.push(CarouselIntent::SectionSelected { index });
                        ui.close();
                    }
                }
            });
        });
    });

    events
}
