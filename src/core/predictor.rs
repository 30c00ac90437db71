//! Index-Vorhersage: welche Sektion nach Drag-Ende fokussiert wird.

use super::CarouselError;

/// Findet den Sektions-Index, dessen Ruheposition dem vorhergesagten
/// End-Offset am nächsten liegt.
///
/// Ruheposition von Index `i` ist `-(item_spacing * i)`. Der Vergleich ist
/// strikt kleiner: Bei exaktem Gleichstand gewinnt der niedrigere Index.
pub fn nearest_resting_index(
    section_count: usize,
    item_spacing: f32,
    predicted_end_offset: f32,
) -> Result<usize, CarouselError> {
    if section_count == 0 {
        return Err(CarouselError::EmptySequence);
    }

    let mut best_index = 0;
    let mut best_distance = f32::INFINITY;
    for index in 0..section_count {
        let resting = -(item_spacing * index as f32);
        let distance = (predicted_end_offset - resting).abs();
        if distance < best_distance {
            best_index = index;
            best_distance = distance;
        }
    }

    Ok(best_index)
}
