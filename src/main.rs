//! Karten-Karussell.
//!
//! Horizontal gepagtes Karussell aus sechs farbigen Platzhalter-Karten:
//! Drag scrollt das Deck, beim Loslassen rastet es federnd auf der
//! nächstgelegenen Seite ein. Offset, Scale und Blur jeder Karte sind
//! stetige Funktionen ihres Abstands zum Fokuspunkt.

use card_carousel::{ui, CarouselController, CarouselIntent, CarouselOptions, CarouselState};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Karten-Karussell v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Karten-Karussell"),
            ..Default::default()
        };

        eframe::run_native(
            "Karten-Karussell",
            options,
            Box::new(|_cc| Ok(Box::new(CarouselApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur.
struct CarouselApp {
    state: CarouselState,
    controller: CarouselController,
    input: ui::InputState,
}

impl CarouselApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = CarouselOptions::config_path();
        let carousel_options = CarouselOptions::load_from_file(&config_path);

        let mut state = CarouselState::new();
        state.options = carousel_options;

        Self {
            state,
            controller: CarouselController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for CarouselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, CarouselIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl CarouselApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<CarouselIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::show_options_window(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    self.state.is_settling(),
                    self.state.options.fling_prediction_secs,
                ));

                match self.controller.build_card_scene(&self.state) {
                    Ok(scene) => ui::paint_card_scene(&ui.painter_at(rect), rect, &scene),
                    Err(e) => {
                        // Vor dem ersten ViewportResized ist die Breite noch 0
                        log::debug!("Szene noch nicht baubar: {}", e);
                    }
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<CarouselIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.is_settling()
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_window
        {
            ctx.request_repaint();
        }
    }
}
