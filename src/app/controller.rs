//! Controller für zentrale Event-Verarbeitung.

use super::{DrawCommand, DrawIntent, DrawState};

/// Orchestriert Zeiger- und UI-Events auf den DrawState.
#[derive(Default)]
pub struct DrawController;

impl DrawController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut DrawState, intent: DrawIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Führt mutierende Commands auf dem DrawState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(&mut self, state: &mut DrawState, command: DrawCommand) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Strich ===
            DrawCommand::BeginStroke {
                position,
                timestamp,
            } => handlers::stroke::begin(state, position, timestamp),
            DrawCommand::ExtendStroke {
                position,
                timestamp,
            } => handlers::stroke::extend(state, position, timestamp),
            DrawCommand::FinishStroke {
                position,
                timestamp,
            } => handlers::stroke::finish(state, position, timestamp),

            // === Verlauf ===
            DrawCommand::Undo => handlers::history::undo(state),
            DrawCommand::Redo => handlers::history::redo(state),
            DrawCommand::ClearCanvas => handlers::history::clear(state),

            // === Stift & Ansicht ===
            DrawCommand::SetPenColor { color } => handlers::pen::set_color(state, color)?,
            DrawCommand::SetPenSize { size } => handlers::pen::set_size(state, size)?,
            DrawCommand::SetEraserSize { size } => handlers::pen::set_eraser_size(state, size)?,
            DrawCommand::SetPenOpacity { opacity } => handlers::pen::set_opacity(state, opacity)?,
            DrawCommand::SetPenMode { mode } => handlers::pen::set_mode(state, mode),
            DrawCommand::SetView { pan, zoom } => handlers::pen::set_view(state, pan, zoom)?,
            DrawCommand::ApplyOptions { options } => handlers::pen::apply_options(state, options)?,
        }

        Ok(())
    }
}
