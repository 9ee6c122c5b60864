//! Handler für Undo/Redo-Operationen.

use crate::app::state::CanvasChange;
use crate::app::DrawState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut DrawState) {
    if state.is_drawing() {
        log::warn!("Undo während aktivem Strich abgelehnt");
        return;
    }
    if let Some(path) = state.history.undo() {
        state.push_change(CanvasChange::Removed(path.serialize()));
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut DrawState) {
    if state.is_drawing() {
        log::warn!("Redo während aktivem Strich abgelehnt");
        return;
    }
    if let Some(path) = state.history.redo() {
        state.push_change(CanvasChange::Added(path.serialize()));
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}

/// Entfernt alle Striche inklusive Verlauf.
pub fn clear(state: &mut DrawState) {
    if state.is_drawing() {
        log::warn!("Leeren während aktivem Strich abgelehnt");
        return;
    }
    state.history.clear();
    state.settled.clear();
    state.push_change(CanvasChange::Cleared);
    log::info!("Zeichenfläche geleert");
}
