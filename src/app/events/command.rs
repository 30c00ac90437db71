use crate::shared::CarouselOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum CarouselCommand {
    /// Live-Offset auf den Drag-Wert setzen (Finger übernimmt)
    SetLiveOffset { offset: f32 },
    /// Sektion wechseln und zum neuen Ruhepunkt settlen
    SelectSection { index: usize },
    /// Settle zur Ruheposition von `target` ohne Index-Wechsel
    /// (Snap-Back, wenn der Drag die Seitengrenze nicht überquert hat)
    BeginSettle { target: usize },
    /// Laufende Settle-Feder um `dt` Sekunden fortschreiben
    AdvanceSettle { dt: f32 },
    /// Viewport-Größe im State aktualisieren
    SetViewportSize { size: [f32; 2] },
    /// Options-Fenster ein-/ausblenden
    ToggleOptionsWindow,
    /// Geänderte Optionen übernehmen und persistieren
    ApplyOptions { options: CarouselOptions },
    /// Optionen auf Standardwerte zurücksetzen und persistieren
    ResetOptions,
    /// Anwendung kontrolliert beenden
    RequestExit,
}
