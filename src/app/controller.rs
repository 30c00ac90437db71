//! Application Controller für zentrale Event-Verarbeitung.

use super::{render_scene, CardScene};
use super::{CarouselCommand, CarouselIntent, CarouselState};
use crate::core::CarouselError;

/// Orchestriert UI-Intents und Command-Handler auf dem CarouselState.
#[derive(Default)]
pub struct CarouselController;

impl CarouselController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut CarouselState,
        intent: CarouselIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem CarouselState aus.
    pub fn handle_command(
        &mut self,
        state: &mut CarouselState,
        command: CarouselCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Drag & Settle ===
            CarouselCommand::SetLiveOffset { offset } => handlers::set_live_offset(state, offset),
            CarouselCommand::SelectSection { index } => handlers::select_section(state, index),
            CarouselCommand::BeginSettle { target } => handlers::begin_settle(state, target),
            CarouselCommand::AdvanceSettle { dt } => handlers::advance_settle(state, dt),

            // === Viewport ===
            CarouselCommand::SetViewportSize { size } => handlers::set_viewport_size(state, size),

            // === Optionen & Anwendungssteuerung ===
            CarouselCommand::ToggleOptionsWindow => handlers::toggle_options_window(state),
            CarouselCommand::ApplyOptions { options } => handlers::apply_options(state, options)?,
            CarouselCommand::ResetOptions => handlers::reset_options(state)?,
            CarouselCommand::RequestExit => handlers::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Karten-Szene aus dem aktuellen CarouselState.
    pub fn build_card_scene(&self, state: &CarouselState) -> Result<CardScene, CarouselError> {
        render_scene::build(state)
    }
}
