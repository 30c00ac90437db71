//! Zentrale Konfiguration für das Karten-Karussell.
//!
//! `CarouselOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten; die
//! Spec-Konstanten der Kern-Geometrie leben als assoziierte Konstanten
//! auf `CarouselGeometry` bzw. `Spring` und werden hier gespiegelt.

use crate::core::{CarouselGeometry, Spring, SpringParams};
use serde::{Deserialize, Serialize};

// ── Karten-Darstellung ──────────────────────────────────────────────

/// Kantenlänge der quadratischen Platzhalter-Karten in Punkten.
pub const CARD_SIZE: f32 = 600.0;
/// Eckenradius der Karten in Punkten.
pub const CARD_CORNER_RADIUS: f32 = 10.0;
/// Display-Multiplikator: Kern-Blur ([0, 0.2]) → sichtbarer Radius.
pub const BLUR_DISPLAY_FACTOR: f32 = 100.0;

// ── Gesten ──────────────────────────────────────────────────────────

/// Projektions-Horizont für den vorhergesagten Drag-Endpunkt:
/// `predicted_end = translation + velocity * FLING_PREDICTION_SECS`.
pub const FLING_PREDICTION_SECS: f32 = 0.25;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Karussell-Optionen.
/// Wird als `card_carousel.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselOptions {
    // ── Geometrie ───────────────────────────────────────────────
    /// Horizontaler Abstand benachbarter Ruhepositionen
    pub item_spacing: f32,
    /// Dämpfungsfaktor für Items hinter dem Fokus
    pub drag_damping: f32,
    /// Pace-Divisor der Scale-Abnahme
    pub scale_pace_divisor: f32,
    /// Pace-Divisor des Blur-Anstiegs
    pub blur_pace_divisor: f32,
    /// Oberes Ende des Blur-Wertebereichs
    pub blur_max: f32,
    /// Display-Multiplikator für den sichtbaren Blur-Radius
    pub blur_display_factor: f32,

    // ── Feder ───────────────────────────────────────────────────
    /// Masse des Feder-Systems
    pub spring_mass: f32,
    /// Federkonstante
    pub spring_stiffness: f32,
    /// Dämpfungskonstante
    pub spring_damping: f32,
    /// Anfangsgeschwindigkeit beim Settle-Start
    pub spring_initial_velocity: f32,

    // ── Gesten ──────────────────────────────────────────────────
    /// Projektions-Horizont der Fling-Vorhersage in Sekunden
    #[serde(default = "default_fling_prediction_secs")]
    pub fling_prediction_secs: f32,

    // ── Karten ──────────────────────────────────────────────────
    /// Kantenlänge der Karten in Punkten
    pub card_size: f32,
    /// Eckenradius der Karten in Punkten
    pub card_corner_radius: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            item_spacing: CarouselGeometry::ITEM_SPACING,
            drag_damping: CarouselGeometry::DRAG_DAMPING,
            scale_pace_divisor: CarouselGeometry::SCALE_PACE_DIVISOR,
            blur_pace_divisor: CarouselGeometry::BLUR_PACE_DIVISOR,
            blur_max: CarouselGeometry::BLUR_MAX,
            blur_display_factor: BLUR_DISPLAY_FACTOR,
            spring_mass: Spring::MASS,
            spring_stiffness: Spring::STIFFNESS,
            spring_damping: Spring::DAMPING,
            spring_initial_velocity: Spring::INITIAL_VELOCITY,
            fling_prediction_secs: FLING_PREDICTION_SECS,
            card_size: CARD_SIZE,
            card_corner_radius: CARD_CORNER_RADIUS,
        }
    }
}

/// Serde-Default für `fling_prediction_secs` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_fling_prediction_secs() -> f32 {
    FLING_PREDICTION_SECS
}

impl CarouselOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("card_carousel"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("card_carousel.toml")
    }

    /// Feder-Parameter für den Settle-Integrator.
    pub fn spring_params(&self) -> SpringParams {
        SpringParams {
            mass: self.spring_mass,
            stiffness: self.spring_stiffness,
            damping: self.spring_damping,
            initial_velocity: self.spring_initial_velocity,
        }
    }
}
