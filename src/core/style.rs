//! Darstellungsparameter eines Strichs.

use serde::{Deserialize, Serialize};

/// Standard-Strichfarbe.
pub const DEFAULT_COLOR: &str = "black";
/// Standard-Strichbreite in logischen Einheiten.
pub const DEFAULT_WIDTH: f64 = 10.0;
/// Standard-Deckkraft.
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Farbe, Breite und Deckkraft eines Pfads.
///
/// `Path` übernimmt die Werte ungeprüft; geprüft wird an der Stelle, an der
/// sie gesetzt werden (`PenState`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleParameters {
    /// Farb-Token (z.B. `black`, `#ff0000`)
    pub color: String,
    /// Strichbreite (> 0)
    pub width: f64,
    /// Deckkraft in `[0, 1]`
    pub opacity: f64,
}

impl StyleParameters {
    /// Erstellt und prüft einen Parametersatz.
    pub fn new(color: impl Into<String>, width: f64, opacity: f64) -> anyhow::Result<Self> {
        let style = Self {
            color: color.into(),
            width,
            opacity,
        };
        style.validate()?;
        Ok(style)
    }

    /// Prüft die Wertebereiche.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.color.trim().is_empty(), "Farbe darf nicht leer sein");
        anyhow::ensure!(
            self.width.is_finite() && self.width > 0.0,
            "Strichbreite muss > 0 sein (ist {})",
            self.width
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.opacity),
            "Deckkraft muss in [0, 1] liegen (ist {})",
            self.opacity
        );
        Ok(())
    }
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            width: DEFAULT_WIDTH,
            opacity: DEFAULT_OPACITY,
        }
    }
}
