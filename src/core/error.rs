//! Typisierte Fehler des Karussell-Kerns.
//!
//! Beide Varianten sind Konfigurations-/Umgebungsfehler: Sie können nur
//! bei fehlkonfiguriertem Host auftreten und werden deshalb bei der
//! Konstruktion abgefangen, nicht zur Laufzeit behandelt.

use thiserror::Error;

/// Fehler der Kern-Geometrie und Index-Vorhersage.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CarouselError {
    /// Viewport-Breite ≤ 0 würde im Pace-Helper zu Division durch Null führen.
    #[error("Viewport-Breite muss > 0 sein (war {width})")]
    DegenerateViewport { width: f32 },

    /// Index-Vorhersage über einer leeren Sektions-Liste hat kein Ergebnis.
    #[error("Sektions-Liste darf nicht leer sein")]
    EmptySequence,
}
