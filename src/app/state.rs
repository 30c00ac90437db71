//! Zustand des Karussells: gewählte Sektion, Live-/Ruhe-Offset, Settle-Feder.

use crate::core::{SectionDeck, Spring};
use crate::shared::CarouselOptions;

use super::CommandLog;

/// Hauptzustand der Anwendung.
///
/// Invariante: Ist kein Drag und keine Settle-Animation aktiv, gilt
/// `rested_offset == -(item_spacing * selected_index)` und
/// `live_offset == rested_offset`.
pub struct CarouselState {
    /// Feste Sektions-Folge (einmal beim Start erstellt)
    pub deck: SectionDeck,
    /// Aktuell fokussierte Sektion
    pub selected_index: usize,
    /// Aktueller, ggf. mitten im Drag befindlicher Scroll-Offset
    pub live_offset: f32,
    /// Zuletzt eingerasteter Scroll-Offset (Basis für Drag-Translationen)
    pub rested_offset: f32,
    /// Laufende Settle-Animation (None = ruhend oder Drag aktiv)
    pub settle: Option<Spring>,
    /// Aktuelle Viewport-Größe in Punkten
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen (Geometrie-Tuning, Feder, Karten)
    pub options: CarouselOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Ob das Options-Fenster angezeigt wird
    pub show_options_window: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl CarouselState {
    /// Erstellt den Startzustand: Standard-Deck, Sektion 0 fokussiert.
    pub fn new() -> Self {
        Self {
            deck: SectionDeck::standard(),
            selected_index: 0,
            live_offset: 0.0,
            rested_offset: 0.0,
            settle: None,
            viewport_size: [0.0, 0.0],
            options: CarouselOptions::default(),
            command_log: CommandLog::new(),
            show_options_window: false,
            should_exit: false,
        }
    }

    /// Ruheposition des Scroll-Offsets für einen Sektions-Index.
    pub fn resting_offset_for(&self, index: usize) -> f32 {
        -(self.options.item_spacing * index as f32)
    }

    /// Ob gerade eine Settle-Animation läuft.
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}
