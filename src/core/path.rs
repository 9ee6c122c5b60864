//! Pfad-Modell eines einzelnen Strichs: Rohpunkte → gefittete Segmente.

use super::segment::Segment;
use super::style::StyleParameters;
use super::vector::{Point, Sample};
use crate::fit::CurveFitter;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Ein Strich.
///
/// Solange `fitted == false` ist `segments` leer und `raw_points` enthält alle
/// permanenten Punkte in Ankunftsreihenfolge. Nach dem Fitting sind die
/// Rohpunkte verworfen und der Pfad ist unveränderlich.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
    raw_points: Vec<Sample>,
    style: StyleParameters,
    fitted: bool,
}

impl Path {
    /// Beginnt einen neuen Pfad am Ursprungspunkt.
    pub fn new(origin: Sample, style: StyleParameters) -> Self {
        Self {
            segments: Vec::new(),
            raw_points: vec![origin],
            style,
            fitted: false,
        }
    }

    /// Gefittete Anker (leer solange nicht gefittet).
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Permanente Rohpunkte (leer nach dem Fitting).
    pub fn raw_points(&self) -> &[Sample] {
        &self.raw_points
    }

    /// Darstellungsparameter.
    pub fn style(&self) -> &StyleParameters {
        &self.style
    }

    /// `true` sobald der Pfad gefittet (und damit unveränderlich) ist.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Zuletzt angehängter Rohpunkt.
    pub fn last_raw_point(&self) -> Option<&Sample> {
        self.raw_points.last()
    }

    /// Hängt einen permanenten Punkt an. Gefittete Pfade bleiben unverändert.
    pub(crate) fn push_raw_point(&mut self, sample: Sample) {
        if self.fitted {
            log::warn!("Punkt an bereits gefitteten Pfad ignoriert");
            return;
        }
        self.raw_points.push(sample);
    }

    /// Fittet die Rohpunkte zu kubischen Segmenten.
    ///
    /// Ein Pfad wird höchstens einmal gefittet; weitere Aufrufe liefern `false`.
    pub fn fit(&mut self, fitter: &CurveFitter) -> bool {
        if self.fitted {
            return false;
        }
        let raw = std::mem::take(&mut self.raw_points);
        let positions: Vec<Point> = raw.iter().map(|s| s.position).collect();
        self.segments = fitter.fit(&positions);
        self.fitted = true;
        log::debug!(
            "Pfad gefittet: {} Rohpunkte → {} Anker",
            positions.len(),
            self.segments.len()
        );
        true
    }

    /// Verlustfreier struktureller Export.
    pub fn serialize(&self) -> PathRecord {
        PathRecord {
            segments: self.segments.clone(),
            style: self.style.clone(),
        }
    }

    /// Rekonstruiert einen gefitteten Pfad. Es wird nicht neu gefittet.
    pub fn deserialize(record: PathRecord) -> Self {
        Self {
            segments: record.segments,
            raw_points: Vec::new(),
            style: record.style,
            fitted: true,
        }
    }
}

/// Persistierbare Form eines Pfads (Segmente + Stil).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub segments: Vec<Segment>,
    pub style: StyleParameters,
}

impl PathRecord {
    /// JSON-Kodierung für die Persistenzschicht.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("PathRecord konnte nicht serialisiert werden")
    }

    /// Dekodiert einen Record aus JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("PathRecord-JSON ungültig")
    }
}
