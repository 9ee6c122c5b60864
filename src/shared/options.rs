//! Zentrale Konfiguration für Quickdraw.
//!
//! `DrawOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::capture::CaptureConfig;
use crate::core::style::{DEFAULT_COLOR, DEFAULT_OPACITY, DEFAULT_WIDTH};
use serde::{Deserialize, Serialize};

// ── Aufnahme ────────────────────────────────────────────────────────

/// Faktor zwischen Zeigergeschwindigkeit (Einheiten/ms) und Ausdünnungsschwelle.
pub const BASE_THRESHOLD: f64 = 50.0;
/// Minimale Ausdünnungsschwelle in logischen Einheiten.
pub const MIN_THRESHOLD: f64 = 5.0;

// ── Fitting ─────────────────────────────────────────────────────────

/// Maximal zulässiger quadrierter Abstand zwischen Kurve und Rohpunkten.
pub const FIT_TOLERANCE: f64 = 10.0;

// ── Verlauf ─────────────────────────────────────────────────────────

/// Maximale Undo-Tiefe (0 = unbegrenzt).
pub const HISTORY_MAX_DEPTH: usize = 0;

// ── Stift ───────────────────────────────────────────────────────────

/// Standard-Radiergummi-Größe.
pub const ERASER_SIZE: f64 = 10.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `quickdraw.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DrawOptions {
    // ── Aufnahme ────────────────────────────────────────────────
    /// Geschwindigkeitsfaktor der Ausdünnungsschwelle
    pub base_threshold: f64,
    /// Untergrenze der Ausdünnungsschwelle
    pub min_threshold: f64,
    // ── Fitting ─────────────────────────────────────────────────
    /// Fit-Toleranz (quadrierter Abstand)
    pub fit_tolerance: f64,
    // ── Verlauf ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe (0 = unbegrenzt)
    pub history_max_depth: usize,
    // ── Stift-Startwerte ────────────────────────────────────────
    pub pen_color: String,
    pub pen_size: f64,
    pub eraser_size: f64,
    pub pen_opacity: f64,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            base_threshold: BASE_THRESHOLD,
            min_threshold: MIN_THRESHOLD,
            fit_tolerance: FIT_TOLERANCE,
            history_max_depth: HISTORY_MAX_DEPTH,
            pen_color: DEFAULT_COLOR.to_string(),
            pen_size: DEFAULT_WIDTH,
            eraser_size: ERASER_SIZE,
            pen_opacity: DEFAULT_OPACITY,
        }
    }
}

impl DrawOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("quickdraw"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("quickdraw.toml")
    }

    /// Prüft Wertebereiche.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.base_threshold >= 0.0, "base_threshold muss ≥ 0 sein");
        anyhow::ensure!(self.min_threshold >= 0.0, "min_threshold muss ≥ 0 sein");
        anyhow::ensure!(self.fit_tolerance > 0.0, "fit_tolerance muss > 0 sein");
        anyhow::ensure!(self.pen_size > 0.0, "pen_size muss > 0 sein");
        anyhow::ensure!(self.eraser_size > 0.0, "eraser_size muss > 0 sein");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.pen_opacity),
            "pen_opacity muss in [0, 1] liegen"
        );
        Ok(())
    }

    /// Schwellwerte für die Strichaufnahme.
    pub fn capture_config(&self) -> CaptureConfig {
        CaptureConfig {
            base_threshold: self.base_threshold,
            min_threshold: self.min_threshold,
        }
    }

    /// Undo-Tiefe als Option (`None` = unbegrenzt).
    pub fn max_history_depth(&self) -> Option<usize> {
        (self.history_max_depth > 0).then_some(self.history_max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("quickdraw_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn speichern_und_laden_ergibt_gleiche_optionen() {
        let path = temp_file("roundtrip");
        let opts = DrawOptions {
            base_threshold: 30.0,
            fit_tolerance: 4.0,
            history_max_depth: 25,
            pen_color: "#ff8800".to_string(),
            ..DrawOptions::default()
        };
        opts.save_to_file(&path).expect("speichern");
        let loaded = DrawOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn fehlende_datei_liefert_standardwerte() {
        let loaded = DrawOptions::load_from_file(&temp_file("fehlt_sicher_nicht_vorhanden"));
        assert_eq!(loaded, DrawOptions::default());
    }

    #[test]
    fn teilweise_datei_ergaenzt_standardwerte() {
        let opts: DrawOptions = toml::from_str("fit_tolerance = 2.5\n").expect("parse");
        assert_eq!(opts.fit_tolerance, 2.5);
        assert_eq!(opts.base_threshold, BASE_THRESHOLD);
    }

    #[test]
    fn ungueltige_werte_fallen_auf_standard_zurueck() {
        let path = temp_file("ungueltig");
        std::fs::write(&path, "fit_tolerance = -1.0\n").expect("schreiben");
        let loaded = DrawOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, DrawOptions::default());
    }

    #[test]
    fn unbegrenzte_historie_bei_null() {
        assert_eq!(DrawOptions::default().max_history_depth(), None);
    }
}
