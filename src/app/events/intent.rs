use super::super::pointer::PointerInput;
use crate::core::Point;
use crate::shared::DrawOptions;

/// Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum DrawIntent {
    /// Zeiger gedrückt (Maus links oder Touch-Start)
    PointerPressed { input: PointerInput, timestamp: f64 },
    /// Zeiger bewegt
    PointerMoved { input: PointerInput, timestamp: f64 },
    /// Zeiger losgelassen; ohne Eingabe gilt die letzte bekannte Position
    PointerReleased {
        input: Option<PointerInput>,
        timestamp: f64,
    },
    /// Letzten Strich zurücknehmen
    UndoRequested,
    /// Zurückgenommenen Strich wiederherstellen
    RedoRequested,
    /// Zeichenfläche leeren
    ClearRequested,
    /// Stiftfarbe geändert
    PenColorChanged { color: String },
    /// Stiftgröße geändert
    PenSizeChanged { size: f64 },
    /// Radiergröße geändert
    EraserSizeChanged { size: f64 },
    /// Deckkraft geändert
    PenOpacityChanged { opacity: f64 },
    /// Zwischen Zeichnen und Radieren umschalten
    PenModeToggled,
    /// Ansicht verschoben oder gezoomt
    ViewChanged { pan: Point, zoom: f64 },
    /// Optionen übernommen
    OptionsChanged { options: DrawOptions },
}
