//! Geometrie des Karussells: Offset-, Scale- und Blur-Transformationen.
//!
//! Alle Funktionen sind pur und total: Sie bilden (Item-Index, aktueller
//! Scroll-Offset) auf Render-Transformationen ab und werden bei jeder
//! Offset-Änderung neu ausgewertet (jeder Frame eines Drags oder Settles).

use super::CarouselError;

/// Geometrie-Kontext für einen Frame: Viewport-Breite plus Tuning-Konstanten.
#[derive(Debug, Clone)]
pub struct CarouselGeometry {
    /// Aktuelle Viewport-Breite in Layout-Einheiten (validiert > 0)
    viewport_width: f32,
    /// Horizontaler Abstand benachbarter Ruhepositionen
    item_spacing: f32,
    /// Dämpfungsfaktor für Items hinter dem Fokus (Parallax-Effekt)
    drag_damping: f32,
    /// Pace-Divisor für die Scale-Abnahme
    scale_pace_divisor: f32,
    /// Pace-Divisor für den Blur-Anstieg
    blur_pace_divisor: f32,
    /// Oberes Ende des Blur-Wertebereichs
    blur_max: f32,
}

impl CarouselGeometry {
    /// Abstand benachbarter Ruhepositionen in Layout-Einheiten.
    pub const ITEM_SPACING: f32 = 700.0;
    /// Items hinter dem Fokus bewegen sich nur mit diesem Anteil des Roh-Offsets.
    pub const DRAG_DAMPING: f32 = 0.2;
    /// Scale erreicht ihr Minimum nach `viewport_width * 3` Einheiten.
    pub const SCALE_PACE_DIVISOR: f32 = 3.0;
    /// Blur erreicht sein Maximum nach `viewport_width * 5` Einheiten.
    pub const BLUR_PACE_DIVISOR: f32 = 5.0;
    /// Maximaler Blur-Wert vor der Display-Skalierung.
    pub const BLUR_MAX: f32 = 0.2;

    /// Erstellt die Geometrie mit Standard-Tuning.
    ///
    /// Schlägt fehl, wenn die Viewport-Breite ≤ 0 ist (würde im
    /// Pace-Helper zu Division durch Null führen).
    pub fn new(viewport_width: f32) -> Result<Self, CarouselError> {
        Self::with_tuning(
            viewport_width,
            Self::ITEM_SPACING,
            Self::DRAG_DAMPING,
            Self::SCALE_PACE_DIVISOR,
            Self::BLUR_PACE_DIVISOR,
            Self::BLUR_MAX,
        )
    }

    /// Erstellt die Geometrie mit explizitem Tuning (aus den Laufzeit-Optionen).
    pub fn with_tuning(
        viewport_width: f32,
        item_spacing: f32,
        drag_damping: f32,
        scale_pace_divisor: f32,
        blur_pace_divisor: f32,
        blur_max: f32,
    ) -> Result<Self, CarouselError> {
        if viewport_width <= 0.0 {
            return Err(CarouselError::DegenerateViewport {
                width: viewport_width,
            });
        }
        Ok(Self {
            viewport_width,
            item_spacing,
            drag_damping,
            scale_pace_divisor,
            blur_pace_divisor,
            blur_max,
        })
    }

    /// Signierter Abstand zwischen natürlicher Ruheposition des Items und
    /// dem Fokuspunkt des Viewports. Null = Item exakt zentriert.
    pub fn proposed_offset(&self, item_index: usize, current_offset: f32) -> f32 {
        item_index as f32 * self.item_spacing + current_offset
    }

    /// Ruheposition des Scroll-Offsets, bei der `item_index` zentriert ist.
    pub fn resting_offset(&self, item_index: usize) -> f32 {
        -(self.item_spacing * item_index as f32)
    }

    /// Render-Offset: Items hinter dem Fokus (proposed < 0) weichen gedämpft
    /// zurück und stapeln sich, Items davor bewegen sich 1:1.
    pub fn item_render_offset(&self, item_index: usize, current_offset: f32) -> f32 {
        let proposed = self.proposed_offset(item_index, current_offset);
        if proposed < 0.0 {
            proposed * self.drag_damping
        } else {
            proposed
        }
    }

    /// Scale-Faktor in [0, 1]: Items hinter dem Fokus schrumpfen kontinuierlich,
    /// Items davor bleiben bei voller Größe.
    pub fn item_scale(&self, item_index: usize, current_offset: f32) -> f32 {
        let proposed = self.proposed_offset(item_index, current_offset);
        if proposed < 0.0 {
            1.0 - self.clamped_progress(proposed, self.scale_pace_divisor, 0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Blur-Wert in [0, `blur_max`] vor der Display-Skalierung.
    ///
    /// Die Skalierung mit dem Display-Faktor (×100) ist bewusst Sache der
    /// Darstellungsschicht und nicht Teil dieses Vertrags.
    pub fn item_blur(&self, item_index: usize, current_offset: f32) -> f32 {
        let proposed = self.proposed_offset(item_index, current_offset);
        if proposed < 0.0 {
            self.clamped_progress(proposed, self.blur_pace_divisor, 0.0, self.blur_max)
        } else {
            0.0
        }
    }

    /// Gemeinsamer Pace/Clamp-Helper für Scale und Blur.
    ///
    /// Normalisiert `abs(proposed)` über `viewport_width * pace_divisor`
    /// und klemmt das Ergebnis in `[min, max]`. Monoton nicht-fallend in
    /// `abs(proposed)`.
    pub fn clamped_progress(&self, proposed: f32, pace_divisor: f32, min: f32, max: f32) -> f32 {
        let span = self.viewport_width * pace_divisor;
        let progress = proposed.abs() / span;
        progress.clamp(min, max)
    }

    /// Aktueller Item-Abstand (für Vorhersage und Settle-Ziele).
    pub fn item_spacing(&self) -> f32 {
        self.item_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: f32 = 400.0;

    fn geometry() -> CarouselGeometry {
        CarouselGeometry::new(VIEWPORT).expect("Viewport > 0 muss gültig sein")
    }

    #[test]
    fn test_zero_viewport_is_rejected() {
        let err = CarouselGeometry::new(0.0).unwrap_err();
        assert_eq!(err, CarouselError::DegenerateViewport { width: 0.0 });
        assert!(CarouselGeometry::new(-100.0).is_err());
    }

    #[test]
    fn test_proposed_offset_is_zero_at_resting_position() {
        let geo = geometry();
        for index in 0..6 {
            let resting = geo.resting_offset(index);
            assert_relative_eq!(geo.proposed_offset(index, resting), 0.0);
        }
    }

    #[test]
    fn test_items_ahead_of_focus_are_unaffected() {
        let geo = geometry();
        // Item 3 bei Offset -700: proposed = 2100 - 700 = 1400, vor dem Fokus
        let proposed = geo.proposed_offset(3, -700.0);
        assert!(proposed >= 0.0);
        assert_relative_eq!(geo.item_render_offset(3, -700.0), proposed);
        assert_relative_eq!(geo.item_scale(3, -700.0), 1.0);
        assert_relative_eq!(geo.item_blur(3, -700.0), 0.0);
    }

    #[test]
    fn test_items_behind_focus_recede_damped() {
        let geo = geometry();
        // Item 0 bei Offset -500: proposed = -500, gedämpft auf -100
        let proposed = geo.proposed_offset(0, -500.0);
        assert_relative_eq!(proposed, -500.0);
        assert_relative_eq!(geo.item_render_offset(0, -500.0), -100.0);
    }

    #[test]
    fn test_scale_shrinks_behind_focus() {
        let geo = geometry();
        // proposed = -600, span = 400 * 3 = 1200 → progress 0.5 → scale 0.5
        assert_relative_eq!(geo.item_scale(0, -600.0), 0.5);
    }

    #[test]
    fn test_blur_grows_behind_focus() {
        let geo = geometry();
        // proposed = -1000, span = 400 * 5 = 2000 → progress 0.5, geklemmt auf 0.2
        assert_relative_eq!(geo.item_blur(0, -1000.0), 0.2);
        // proposed = -200, span = 2000 → 0.1
        assert_relative_eq!(geo.item_blur(0, -200.0), 0.1);
    }

    #[test]
    fn test_scale_and_blur_stay_in_range() {
        let geo = geometry();
        for index in 0..6 {
            for step in -100..100 {
                let offset = step as f32 * 137.0;
                let scale = geo.item_scale(index, offset);
                let blur = geo.item_blur(index, offset);
                assert!((0.0..=1.0).contains(&scale), "scale {scale} bei {offset}");
                assert!((0.0..=0.2).contains(&blur), "blur {blur} bei {offset}");
            }
        }
    }

    #[test]
    fn test_clamped_progress_is_monotonic() {
        let geo = geometry();
        let mut previous = 0.0f32;
        for step in 0..200 {
            let proposed = -(step as f32) * 25.0;
            let progress = geo.clamped_progress(proposed, 3.0, 0.0, 1.0);
            assert!(progress >= previous, "Progress darf nicht fallen");
            previous = progress;
        }
    }
}
