//! Zustand einer Zeichensitzung.

use super::history::StrokeHistory;
use super::pen::PenState;
use super::pointer::ViewTransform;
use crate::capture::StrokeCapture;
use crate::core::{Path, PathRecord};
use crate::shared::DrawOptions;
use std::sync::Arc;

/// Änderung an der Zeichenfläche für Renderer und Persistenz.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasChange {
    /// Strich wurde hinzugefügt (Commit oder Redo)
    Added(PathRecord),
    /// Jüngster Strich wurde entfernt (Undo)
    Removed(PathRecord),
    /// Alle Striche wurden entfernt
    Cleared,
}

/// Sitzungskontext: besitzt Aufnahme, aktiven Strich, Verlauf und Stift.
pub struct DrawState {
    /// Laufzeit-Optionen
    pub options: DrawOptions,
    /// Stift-Einstellungen
    pub pen: PenState,
    /// Geräte → logische Koordinaten
    pub view: ViewTransform,
    /// Aufnahme des aktiven Strichs
    pub capture: StrokeCapture,
    /// Strich zwischen Pointer-Down und Pointer-Up
    pub active_path: Option<Path>,
    /// Undo/Redo-Verlauf
    pub history: StrokeHistory,
    /// Striche, die aus dem Verlauf gefallen sind (nicht mehr rücknehmbar)
    pub settled: Vec<Arc<Path>>,
    changes: Vec<CanvasChange>,
}

impl DrawState {
    /// Neuer Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(DrawOptions::default())
    }

    /// Neuer Zustand mit gegebenen Optionen.
    pub fn with_options(options: DrawOptions) -> Self {
        Self {
            pen: PenState::from_options(&options),
            view: ViewTransform::default(),
            capture: StrokeCapture::new(options.capture_config()),
            active_path: None,
            history: StrokeHistory::with_max_depth(options.max_history_depth()),
            settled: Vec::new(),
            changes: Vec::new(),
            options,
        }
    }

    /// `true` während ein Strich aufgenommen wird.
    pub fn is_drawing(&self) -> bool {
        self.active_path.is_some()
    }

    /// Alle sichtbaren Striche in Zeichenreihenfolge.
    pub fn visible_paths(&self) -> impl Iterator<Item = &Path> {
        self.settled
            .iter()
            .chain(self.history.committed())
            .map(|p| p.as_ref())
    }

    /// Noch nicht abgeholte Änderungen.
    pub fn pending_changes(&self) -> &[CanvasChange] {
        &self.changes
    }

    /// Holt alle Änderungen ab (Renderer/Persistenz).
    pub fn take_changes(&mut self) -> Vec<CanvasChange> {
        std::mem::take(&mut self.changes)
    }

    pub(crate) fn push_change(&mut self, change: CanvasChange) {
        self.changes.push(change);
    }
}

impl Default for DrawState {
    fn default() -> Self {
        Self::new()
    }
}
