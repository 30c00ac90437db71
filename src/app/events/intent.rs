use crate::shared::CarouselOptions;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum CarouselIntent {
    /// Drag läuft: kumulierte horizontale Translation seit Drag-Beginn
    DragMoved { translation: f32 },
    /// Drag beendet: Translation projiziert um die Release-Geschwindigkeit
    DragReleased { predicted_end_translation: f32 },
    /// Sektion direkt gewählt (Seiten-Punkte, programmatisch)
    SectionSelected { index: usize },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Frame-Tick während eine Settle-Animation läuft
    AnimationTicked { dt: f32 },
    /// Options-Fenster ein-/ausblenden
    OptionsDialogToggled,
    /// Optionen wurden im Dialog geändert (Live-Preview)
    OptionsChanged { options: CarouselOptions },
    /// Optionen auf Standardwerte zurücksetzen
    OptionsResetRequested,
    /// Anwendung beenden
    ExitRequested,
}
