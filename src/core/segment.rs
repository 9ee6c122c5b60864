//! Ein Anker der gefitteten Kurve mit optionalen Bézier-Handles.

use super::vector::Point;
use serde::{Deserialize, Serialize};

/// Anker mit optionalen Kontrollpunkten.
///
/// Handles sind absolute Koordinaten (keine Deltas zum Anker). Der erste Anker
/// eines Pfads hat kein `handle_in`, der letzte kein `handle_out`. Ein Anker
/// ganz ohne Handles ist der degenerierte Fall (Punkt bzw. Gerade).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Punkt, durch den die Kurve exakt verläuft
    pub point: Point,
    /// Kontrollpunkt der eingehenden Kurve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_in: Option<Point>,
    /// Kontrollpunkt der ausgehenden Kurve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_out: Option<Point>,
}

impl Segment {
    /// Anker ohne Handles.
    pub fn anchor(point: Point) -> Self {
        Self {
            point,
            handle_in: None,
            handle_out: None,
        }
    }

    /// `true` wenn weder ein- noch ausgehendes Handle gesetzt ist.
    pub fn is_degenerate(&self) -> bool {
        self.handle_in.is_none() && self.handle_out.is_none()
    }

    /// Liefert die kubische Kurve von `self` nach `next`, sofern beide Handles existieren.
    pub fn cubic_to(&self, next: &Segment) -> Option<[Point; 4]> {
        match (self.handle_out, next.handle_in) {
            (Some(c1), Some(c2)) => Some([self.point, c1, c2, next.point]),
            _ => None,
        }
    }
}
