//! Mapping von UI-Intents auf mutierende Draw-Commands.

use super::pointer::PointerInput;
use super::{DrawCommand, DrawIntent, DrawState};
use crate::core::Point;

/// Übersetzt einen `DrawIntent` in eine Sequenz ausführbarer `DrawCommand`s.
pub fn map_intent_to_commands(state: &DrawState, intent: DrawIntent) -> Vec<DrawCommand> {
    match intent {
        DrawIntent::PointerPressed { input, timestamp } => {
            let Some(position) = logical_position(state, &input) else {
                return Vec::new();
            };
            if state.is_drawing() {
                vec![DrawCommand::ExtendStroke {
                    position,
                    timestamp,
                }]
            } else {
                vec![DrawCommand::BeginStroke {
                    position,
                    timestamp,
                }]
            }
        }
        DrawIntent::PointerMoved { input, timestamp } => {
            // Hover ohne gedrückten Zeiger
            if !state.is_drawing() {
                return Vec::new();
            }
            logical_position(state, &input)
                .map(|position| {
                    vec![DrawCommand::ExtendStroke {
                        position,
                        timestamp,
                    }]
                })
                .unwrap_or_default()
        }
        DrawIntent::PointerReleased { input, timestamp } => {
            if !state.is_drawing() {
                return Vec::new();
            }
            let position = input.and_then(|input| logical_position(state, &input));
            vec![DrawCommand::FinishStroke {
                position,
                timestamp,
            }]
        }
        DrawIntent::UndoRequested => vec![DrawCommand::Undo],
        DrawIntent::RedoRequested => vec![DrawCommand::Redo],
        DrawIntent::ClearRequested => vec![DrawCommand::ClearCanvas],
        DrawIntent::PenColorChanged { color } => vec![DrawCommand::SetPenColor { color }],
        DrawIntent::PenSizeChanged { size } => vec![DrawCommand::SetPenSize { size }],
        DrawIntent::EraserSizeChanged { size } => vec![DrawCommand::SetEraserSize { size }],
        DrawIntent::PenOpacityChanged { opacity } => vec![DrawCommand::SetPenOpacity { opacity }],
        DrawIntent::PenModeToggled => vec![DrawCommand::SetPenMode {
            mode: state.pen.mode().toggled(),
        }],
        DrawIntent::ViewChanged { pan, zoom } => vec![DrawCommand::SetView { pan, zoom }],
        DrawIntent::OptionsChanged { options } => vec![DrawCommand::ApplyOptions { options }],
    }
}

fn logical_position(state: &DrawState, input: &PointerInput) -> Option<Point> {
    input
        .device_position()
        .map(|device| state.view.to_logical(device))
}
