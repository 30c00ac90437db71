//! Malt die Karten-Szene: schwarzer Hintergrund, abgerundete Karten mit
//! Offset-, Scale- und Blur-Transformationen.

use crate::app::CardScene;
use crate::core::Rgba;

/// Malt die komplette Szene in das gegebene Rechteck.
///
/// Karten werden in Index-Reihenfolge gemalt (hohe Indizes zuletzt,
/// also zuoberst), damit zurückweichende Karten hinter den folgenden
/// verschwinden.
pub fn paint_card_scene(painter: &egui::Painter, rect: egui::Rect, scene: &CardScene) {
    painter.rect_filled(rect, 0.0, egui::Color32::BLACK);

    let center = rect.center();
    for card in &scene.cards {
        let size = scene.card_size * card.scale;
        if size <= 0.0 {
            continue;
        }

        // Offset ist in Punkten und unabhängig vom Scale
        let card_center = center + egui::vec2(card.render_offset, 0.0);
        let card_rect = egui::Rect::from_center_size(card_center, egui::Vec2::splat(size));
        let corner = egui::CornerRadius::same((scene.card_corner_radius * card.scale) as u8);

        paint_blur_halo(painter, card_rect, corner, card.color, card.blur, scene);
        painter.rect_filled(card_rect, corner, rgba_to_color32(card.color));
    }
}

/// Approximiert Blur durch gestaffelte, zunehmend transparente Kopien.
///
/// egui hat kein Blur-Primitiv; der Spread der Kopien entspricht
/// `blur * blur_display_factor`. Reine Darstellungsschicht, der
/// Kern-Blur-Wert bleibt davon unberührt.
fn paint_blur_halo(
    painter: &egui::Painter,
    card_rect: egui::Rect,
    corner: egui::CornerRadius,
    color: Rgba,
    blur: f32,
    scene: &CardScene,
) {
    let spread = blur * scene.blur_display_factor;
    if spread < 0.5 {
        return;
    }

    const LAYERS: u8 = 3;
    for layer in 1..=LAYERS {
        let t = layer as f32 / LAYERS as f32;
        let expanded = card_rect.expand(spread * t);
        let alpha = color[3] * 0.25 * (1.0 - t * 0.6);
        let layer_color = rgba_to_color32([color[0], color[1], color[2], alpha]);
        painter.rect_filled(expanded, corner, layer_color);
    }
}

/// Konvertiert eine Kern-RGBA-Farbe in egui-Color32.
fn rgba_to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}
