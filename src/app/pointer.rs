//! Koordinaten-Extraktion aus Maus- und Touch-Eingaben.

use crate::core::Point;

/// Rohe Zeigereingabe in Geräte-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Mausposition
    Mouse { x: f64, y: f64 },
    /// Aktive Touch-Punkte in Reihenfolge
    Touch(Vec<Point>),
}

impl PointerInput {
    /// Geräteposition: Maus direkt, ein Finger direkt, zwei oder mehr Finger
    /// → Mittelpunkt der ersten beiden. `None` ohne Touch-Punkte.
    pub fn device_position(&self) -> Option<Point> {
        match self {
            PointerInput::Mouse { x, y } => Some(Point::new(*x, *y)),
            PointerInput::Touch(touches) => match touches.as_slice() {
                [] => None,
                [a] => Some(*a),
                [a, b, ..] => Some((*a + *b) * 0.5),
            },
        }
    }
}

/// Verschiebung und Zoom zwischen Geräte- und Zeichenkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Verschiebung in Geräte-Koordinaten
    pub pan: Point,
    /// Zoom-Faktor (> 0)
    pub zoom: f64,
}

impl ViewTransform {
    /// `logisch = (gerät - pan) / zoom`
    pub fn to_logical(&self, device: Point) -> Point {
        (device - self.pan) / self.zoom
    }

    /// Inverse zu [`to_logical`](Self::to_logical).
    pub fn to_device(&self, logical: Point) -> Point {
        logical * self.zoom + self.pan
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            pan: Point::ZERO,
            zoom: 1.0,
        }
    }
}
