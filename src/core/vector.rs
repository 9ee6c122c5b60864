//! Vektor-Mathematik für Zeichenpunkte.
//!
//! `Point` ist ein `glam::DVec2`; alle Operationen liefern neue Werte,
//! kein Operand wird verändert. Dieses Modul ergänzt nur die Stellen, an denen
//! sich das Verhalten von `glam` unterscheidet (Null-Vektor bei `normalize`).

use glam::DVec2;

/// 2D-Punkt bzw. -Vektor im logischen Zeichen-Koordinatensystem.
pub type Point = DVec2;

/// Skaliert `v` auf die Länge `length`.
///
/// Ein Null-Vektor bleibt der Null-Vektor (keine Division durch Null).
pub fn normalize(v: Point, length: f64) -> Point {
    let current = v.length();
    if current == 0.0 {
        Point::ZERO
    } else {
        v * (length / current)
    }
}

/// Euklidischer Abstand zweier Punkte.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Quadrierter Abstand (für reine Größenvergleiche ohne Wurzel).
pub fn distance_squared(a: Point, b: Point) -> f64 {
    a.distance_squared(b)
}

/// Richtung von `point` zurück zu `previous` in Radiant.
pub fn angle_towards(point: Point, previous: Point) -> f64 {
    let delta = previous - point;
    delta.y.atan2(delta.x)
}

/// Ein aufgenommener Zeigerpunkt mit Bewegungsdaten.
///
/// `velocity` und `angle` werden nur während der Aufnahme gepflegt
/// (Einheit: logische Einheiten pro Millisekunde bzw. Radiant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Position im logischen Koordinatensystem
    pub position: Point,
    /// Zeitstempel in Millisekunden
    pub timestamp: f64,
    /// Geschwindigkeit relativ zum letzten permanenten Punkt
    pub velocity: f64,
    /// Bewegungsrichtung zum letzten permanenten Punkt (Radiant)
    pub angle: f64,
}

impl Sample {
    /// Erstellt einen Sample ohne Bewegungsdaten.
    pub fn new(position: Point, timestamp: f64) -> Self {
        Self {
            position,
            timestamp,
            velocity: 0.0,
            angle: 0.0,
        }
    }
}
