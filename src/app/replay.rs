//! Wiedergabe aufgezeichneter Zeiger-Striche durch eine Zeichensitzung.

use super::pointer::PointerInput;
use super::{DrawController, DrawIntent, DrawState};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Ein Zeigerpunkt einer Aufzeichnung (Gerätekoordinaten, Zeit in ms).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordedSample {
    pub x: f64,
    pub y: f64,
    pub t: f64,
}

/// Ein aufgezeichneter Strich: Pointer-Down beim ersten, Pointer-Up beim letzten Punkt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedStroke {
    pub samples: Vec<RecordedSample>,
}

/// Liest Aufzeichnungen aus JSON (`[{ "samples": [{ "x", "y", "t" }] }]`).
pub fn parse_recording(json: &str) -> anyhow::Result<Vec<RecordedStroke>> {
    serde_json::from_str(json).context("Aufzeichnung ist kein gültiges JSON")
}

/// Spielt alle Striche nacheinander ab. Leere Striche werden übersprungen.
pub fn replay_strokes(
    controller: &mut DrawController,
    state: &mut DrawState,
    strokes: &[RecordedStroke],
) -> anyhow::Result<()> {
    for (index, stroke) in strokes.iter().enumerate() {
        let Some((first, rest)) = stroke.samples.split_first() else {
            log::warn!("Strich {} ohne Punkte übersprungen", index);
            continue;
        };
        controller.handle_intent(
            state,
            DrawIntent::PointerPressed {
                input: mouse(first),
                timestamp: first.t,
            },
        )?;
        for sample in rest {
            controller.handle_intent(
                state,
                DrawIntent::PointerMoved {
                    input: mouse(sample),
                    timestamp: sample.t,
                },
            )?;
        }
        let last = rest.last().unwrap_or(first);
        controller.handle_intent(
            state,
            DrawIntent::PointerReleased {
                input: Some(mouse(last)),
                timestamp: last.t,
            },
        )?;
    }
    Ok(())
}

fn mouse(sample: &RecordedSample) -> PointerInput {
    PointerInput::Mouse {
        x: sample.x,
        y: sample.y,
    }
}
