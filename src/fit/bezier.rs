//! Auswertung von Bézier-Kurven (de Casteljau) und Newton-Raphson-Schritt.

use crate::core::Point;

/// Kubische Bézier-Kurve: Start, CP1, CP2, Ende.
pub type CubicCurve = [Point; 4];

/// Unterhalb dieses Betrags gilt der Newton-Nenner als Null.
pub const NEWTON_EPSILON: f64 = 1e-6;

/// Wertet eine Bézier-Kurve vom Grad `control.len() - 1` (max. 3) bei `t` aus.
pub fn evaluate(control: &[Point], t: f64) -> Point {
    debug_assert!(!control.is_empty() && control.len() <= 4);
    let n = control.len();
    let mut tmp = [Point::ZERO; 4];
    tmp[..n].copy_from_slice(control);
    for i in 1..n {
        for j in 0..n - i {
            tmp[j] = tmp[j] * (1.0 - t) + tmp[j + 1] * t;
        }
    }
    tmp[0]
}

/// Kontrollpunkte der ersten Ableitung (quadratisch).
pub fn derivative(curve: &CubicCurve) -> [Point; 3] {
    [
        (curve[1] - curve[0]) * 3.0,
        (curve[2] - curve[1]) * 3.0,
        (curve[3] - curve[2]) * 3.0,
    ]
}

/// Kontrollpunkte der zweiten Ableitung (linear).
pub fn second_derivative(curve: &CubicCurve) -> [Point; 2] {
    let d1 = derivative(curve);
    [(d1[1] - d1[0]) * 2.0, (d1[2] - d1[1]) * 2.0]
}

/// Ein Newton-Raphson-Schritt: verbessert den Parameter `u`, sodass `B(u)`
/// näher an `point` liegt. Ergebnis bleibt in `[0, 1]`.
pub fn find_root(curve: &CubicCurve, point: Point, u: f64) -> f64 {
    let pt = evaluate(curve, u);
    let pt1 = evaluate(&derivative(curve), u);
    let pt2 = evaluate(&second_derivative(curve), u);
    let diff = pt - point;
    let df = pt1.dot(pt1) + diff.dot(pt2);
    if df.abs() < NEWTON_EPSILON {
        return u;
    }
    (u - diff.dot(pt1) / df).clamp(0.0, 1.0)
}
