//! Stift-Zustand: Modus, Farbe, Größe, Deckkraft.
//!
//! Hier werden Stil-Eingaben aus der UI geprüft, bevor sie in einen `Path` gelangen.

use crate::core::StyleParameters;
use crate::shared::DrawOptions;

/// Farbe, mit der im Radier-Modus gezeichnet wird.
pub const ERASER_COLOR: &str = "white";

/// Stift-Modus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenMode {
    /// Normales Zeichnen
    #[default]
    Draw,
    /// Radieren (Zeichnen in Hintergrundfarbe)
    Erase,
}

impl PenMode {
    /// Wechselt zwischen Zeichnen und Radieren.
    pub fn toggled(self) -> Self {
        match self {
            PenMode::Draw => PenMode::Erase,
            PenMode::Erase => PenMode::Draw,
        }
    }
}

/// Aktuelle Stift-Einstellungen.
#[derive(Debug, Clone, PartialEq)]
pub struct PenState {
    mode: PenMode,
    color: String,
    size: f64,
    eraser_size: f64,
    opacity: f64,
}

impl PenState {
    /// Startwerte aus den Optionen.
    pub fn from_options(options: &DrawOptions) -> Self {
        Self {
            mode: PenMode::Draw,
            color: options.pen_color.clone(),
            size: options.pen_size,
            eraser_size: options.eraser_size,
            opacity: options.pen_opacity,
        }
    }

    pub fn mode(&self) -> PenMode {
        self.mode
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn eraser_size(&self) -> f64 {
        self.eraser_size
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_mode(&mut self, mode: PenMode) {
        self.mode = mode;
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> anyhow::Result<()> {
        let color = color.into();
        anyhow::ensure!(!color.trim().is_empty(), "Farbe darf nicht leer sein");
        self.color = color;
        Ok(())
    }

    pub fn set_size(&mut self, size: f64) -> anyhow::Result<()> {
        anyhow::ensure!(size.is_finite() && size > 0.0, "Stiftgröße muss > 0 sein (ist {})", size);
        self.size = size;
        Ok(())
    }

    pub fn set_eraser_size(&mut self, size: f64) -> anyhow::Result<()> {
        anyhow::ensure!(
            size.is_finite() && size > 0.0,
            "Radiergröße muss > 0 sein (ist {})",
            size
        );
        self.eraser_size = size;
        Ok(())
    }

    pub fn set_opacity(&mut self, opacity: f64) -> anyhow::Result<()> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&opacity),
            "Deckkraft muss in [0, 1] liegen (ist {})",
            opacity
        );
        self.opacity = opacity;
        Ok(())
    }

    /// Stil für einen neuen Strich; die Breite skaliert mit dem Zoom.
    pub fn style(&self, zoom: f64) -> StyleParameters {
        match self.mode {
            PenMode::Draw => StyleParameters {
                color: self.color.clone(),
                width: self.size * zoom,
                opacity: self.opacity,
            },
            PenMode::Erase => StyleParameters {
                color: ERASER_COLOR.to_string(),
                width: self.eraser_size * zoom,
                opacity: 1.0,
            },
        }
    }
}

impl Default for PenState {
    fn default() -> Self {
        Self::from_options(&DrawOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeichenmodus_nutzt_stiftwerte_und_zoom() {
        let mut pen = PenState::default();
        pen.set_color("#123456").unwrap();
        pen.set_size(4.0).unwrap();
        pen.set_opacity(0.5).unwrap();

        let style = pen.style(2.0);
        assert_eq!(style.color, "#123456");
        assert_eq!(style.width, 8.0);
        assert_eq!(style.opacity, 0.5);
    }

    #[test]
    fn radiermodus_zeichnet_weiss_und_deckend() {
        let mut pen = PenState::default();
        pen.set_opacity(0.3).unwrap();
        pen.set_eraser_size(20.0).unwrap();
        pen.set_mode(pen.mode().toggled());

        let style = pen.style(1.0);
        assert_eq!(pen.mode(), PenMode::Erase);
        assert_eq!(style.color, ERASER_COLOR);
        assert_eq!(style.width, 20.0);
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn ungueltige_werte_aendern_nichts() {
        let mut pen = PenState::default();
        assert!(pen.set_size(-1.0).is_err());
        assert!(pen.set_opacity(1.2).is_err());
        assert!(pen.set_color("").is_err());
        assert_eq!(pen, PenState::default());
    }
}
