//! Options-Fenster für Geometrie-, Feder- und Karten-Tuning.

use crate::app::{CarouselIntent, CarouselState};

/// Zeigt das Options-Fenster und gibt erzeugte Events zurück.
pub fn show_options_window(ctx: &egui::Context, state: &CarouselState) -> Vec<CarouselIntent> {
    let mut events = Vec::new();

    if !state.show_options_window {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.collapsing("Geometrie", |ui| {
                changed |= drag_value(ui, "Item-Abstand:", &mut opts.item_spacing, 100.0..=2000.0, 10.0);
                changed |= drag_value(ui, "Drag-Dämpfung:", &mut opts.drag_damping, 0.0..=1.0, 0.01);
                changed |= drag_value(ui, "Scale-Pace:", &mut opts.scale_pace_divisor, 0.5..=10.0, 0.1);
                changed |= drag_value(ui, "Blur-Pace:", &mut opts.blur_pace_divisor, 0.5..=10.0, 0.1);
                changed |= drag_value(ui, "Blur-Maximum:", &mut opts.blur_max, 0.0..=1.0, 0.01);
            });

            ui.collapsing("Feder", |ui| {
                changed |= drag_value(ui, "Masse:", &mut opts.spring_mass, 0.1..=10.0, 0.1);
                changed |= drag_value(ui, "Steifigkeit:", &mut opts.spring_stiffness, 10.0..=500.0, 1.0);
                changed |= drag_value(ui, "Dämpfung:", &mut opts.spring_damping, 10.0..=500.0, 1.0);
                changed |= drag_value(
                    ui,
                    "Startgeschwindigkeit:",
                    &mut opts.spring_initial_velocity,
                    0.0..=100.0,
                    1.0,
                );
            });

            ui.collapsing("Karten & Gesten", |ui| {
                changed |= drag_value(ui, "Kartengröße:", &mut opts.card_size, 100.0..=1000.0, 10.0);
                changed |= drag_value(ui, "Eckenradius:", &mut opts.card_corner_radius, 0.0..=50.0, 1.0);
                changed |= drag_value(
                    ui,
                    "Fling-Horizont (s):",
                    &mut opts.fling_prediction_secs,
                    0.0..=1.0,
                    0.01,
                );
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(CarouselIntent::OptionsResetRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(CarouselIntent::OptionsDialogToggled);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(CarouselIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: beschrifteter DragValue mit Range und Schrittweite.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f32,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add(egui::DragValue::new(value).range(range).speed(speed))
            .changed();
    });
    changed
}
