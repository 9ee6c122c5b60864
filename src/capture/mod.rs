//! Adaptive Strichaufnahme.
//!
//! Jeder Zeigerpunkt landet zunächst im „Live“-Schwanz. Sobald der Abstand
//! zum letzten permanenten Punkt die geschwindigkeitsabhängige Schwelle
//! erreicht, wird er permanent (an `Path::raw_points` angehängt) und der
//! Live-Schwanz geleert. Schnelle Bewegungen werden dadurch gröber,
//! langsame feiner aufgenommen.

use crate::core::vector::{self, Point, Sample};
use crate::core::{Path, StyleParameters};
use crate::fit::CurveFitter;
use crate::shared::options::{BASE_THRESHOLD, MIN_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Schwellwert-Parameter der Punktausdünnung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Faktor für die Geschwindigkeit (Einheiten/ms → Schwelle)
    pub base_threshold: f64,
    /// Untergrenze der Schwelle in logischen Einheiten
    pub min_threshold: f64,
}

impl CaptureConfig {
    /// `max(min_threshold, base_threshold * velocity)`
    pub fn threshold_for(&self, velocity: f64) -> f64 {
        (self.base_threshold * velocity).max(self.min_threshold)
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            base_threshold: BASE_THRESHOLD,
            min_threshold: MIN_THRESHOLD,
        }
    }
}

/// Phasen der Aufnahme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    /// Kein Strich aktiv
    Idle,
    /// Strich läuft (zwischen `begin` und `finish`)
    Active,
}

/// Zustandsmaschine für genau einen aktiven Strich.
#[derive(Debug, Clone)]
pub struct StrokeCapture {
    config: CaptureConfig,
    phase: CapturePhase,
    /// Unbestätigte Punkte seit dem letzten permanenten Punkt
    live: Vec<Sample>,
    /// Entspricht immer dem letzten Eintrag in `Path::raw_points`
    last_permanent: Option<Sample>,
    /// Zuletzt berechnete Geschwindigkeit
    velocity: f64,
}

impl StrokeCapture {
    /// Erstellt eine Aufnahme im Zustand `Idle`.
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            config,
            phase: CapturePhase::Idle,
            live: Vec::new(),
            last_permanent: None,
            velocity: 0.0,
        }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Übernimmt neue Schwellwerte (wirkt ab dem nächsten Sample).
    pub fn set_config(&mut self, config: CaptureConfig) {
        self.config = config;
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    /// `true` während ein Strich läuft.
    pub fn is_active(&self) -> bool {
        self.phase == CapturePhase::Active
    }

    /// Aktueller Live-Schwanz (für die Vorschau).
    pub fn live(&self) -> &[Sample] {
        &self.live
    }

    /// Letzter permanenter Punkt des aktiven Strichs.
    pub fn last_permanent(&self) -> Option<&Sample> {
        self.last_permanent.as_ref()
    }

    /// Position des jüngsten Punkts (Live oder permanent).
    pub fn last_position(&self) -> Option<Point> {
        self.live
            .last()
            .or(self.last_permanent.as_ref())
            .map(|s| s.position)
    }

    /// Startet einen neuen Strich am Ursprung.
    ///
    /// Ein noch laufender Strich wird verworfen.
    pub fn begin(&mut self, origin: Point, now: f64, style: StyleParameters) -> Path {
        if self.is_active() {
            log::warn!("Neuer Strich begonnen, laufender Strich wird verworfen");
        }
        let origin = Sample::new(origin, now);
        self.phase = CapturePhase::Active;
        self.live.clear();
        self.last_permanent = Some(origin);
        self.velocity = 0.0;
        Path::new(origin, style)
    }

    /// Verarbeitet einen Zeigerpunkt. Gibt `true` zurück, wenn er permanent wurde.
    pub fn sample(&mut self, path: &mut Path, point: Point, now: f64) -> bool {
        if !self.is_active() {
            log::debug!("Sample ohne aktiven Strich ignoriert");
            return false;
        }
        self.record(path, point, now, false)
    }

    /// Beendet den Strich: `last_point` wird immer permanent, danach wird gefittet.
    pub fn finish(&mut self, path: &mut Path, last_point: Point, now: f64, fitter: &CurveFitter) {
        if self.is_active() {
            self.record(path, last_point, now, true);
        } else {
            log::warn!("finish ohne aktiven Strich, es wird nur gefittet");
        }
        path.fit(fitter);
        self.reset();
    }

    /// Bricht den Strich ohne Fitting ab.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = CapturePhase::Idle;
        self.live.clear();
        self.last_permanent = None;
        self.velocity = 0.0;
    }

    fn record(&mut self, path: &mut Path, point: Point, now: f64, force: bool) -> bool {
        let Some(permanent) = self.last_permanent else {
            return false;
        };
        if !force && self.last_position() == Some(point) {
            return false;
        }

        let distance = vector::distance(point, permanent.position);
        let elapsed = now - permanent.timestamp;
        // Gleicher Zeitstempel: vorherige Geschwindigkeit behalten
        if elapsed > 0.0 {
            self.velocity = distance / elapsed;
        }
        let sample = Sample {
            position: point,
            timestamp: now,
            velocity: self.velocity,
            angle: vector::angle_towards(point, permanent.position),
        };
        self.live.push(sample);

        let threshold = self.config.threshold_for(self.velocity);
        if !force && distance < threshold {
            return false;
        }

        path.push_raw_point(sample);
        self.last_permanent = Some(sample);
        self.live.clear();
        log::trace!(
            "Punkt permanent: ({:.1}, {:.1}) v={:.3} Schwelle={:.1}",
            point.x,
            point.y,
            self.velocity,
            threshold
        );
        true
    }
}

impl Default for StrokeCapture {
    fn default() -> Self {
        Self::new(CaptureConfig::default())
    }
}

#[cfg(test)]
mod tests;
