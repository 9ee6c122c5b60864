use crate::app::pen::PenMode;
use crate::core::Point;
use crate::shared::DrawOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
///
/// Positionen sind bereits in logischen Zeichenkoordinaten.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Neuen Strich beginnen
    BeginStroke { position: Point, timestamp: f64 },
    /// Punkt zum aktiven Strich hinzufügen
    ExtendStroke { position: Point, timestamp: f64 },
    /// Strich abschließen, fitten und in den Verlauf legen
    FinishStroke {
        position: Option<Point>,
        timestamp: f64,
    },
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Alle Striche entfernen
    ClearCanvas,
    SetPenColor { color: String },
    SetPenSize { size: f64 },
    SetEraserSize { size: f64 },
    SetPenOpacity { opacity: f64 },
    SetPenMode { mode: PenMode },
    /// Ansicht setzen
    SetView { pan: Point, zoom: f64 },
    /// Optionen anwenden
    ApplyOptions { options: DrawOptions },
}
