//! Begrenzter Verlauf ausgeführter Commands.
//!
//! Dient den Integrations-Tests als beobachtbare Spur des Reducers und
//! der Debug-Analyse als jüngste Historie der Drag/Settle-Schritte.

use std::collections::VecDeque;

use super::CarouselCommand;

/// Ring-Puffer der zuletzt ausgeführten Commands.
#[derive(Default)]
pub struct CommandLog {
    entries: VecDeque<CarouselCommand>,
}

impl CommandLog {
    /// Kapazität des Ring-Puffers; ältere Einträge fallen heraus.
    const CAPACITY: usize = 256;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    /// Hängt einen ausgeführten Command an.
    /// Bei voller Kapazität fällt der älteste Eintrag heraus.
    pub fn record(&mut self, command: &CarouselCommand) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Der zuletzt ausgeführte Command.
    pub fn last(&self) -> Option<&CarouselCommand> {
        self.entries.back()
    }

    /// Anzahl der gepufferten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iteriert in Ausführungs-Reihenfolge (ältester zuerst).
    pub fn iter(&self) -> impl Iterator<Item = &CarouselCommand> {
        self.entries.iter()
    }
}
