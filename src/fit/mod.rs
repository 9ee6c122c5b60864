//! Stückweises kubisches Bézier-Fitting nach Schneider.
//!
//! Ablauf pro Teilbereich `first..=last`:
//! 1. Sehnenlängen-Parametrisierung `u[i]`
//! 2. Least-Squares-Lösung für die Handle-Längen (2×2-Normalengleichungen)
//! 3. Maximalen quadrierten Fehler suchen → akzeptieren, verfeinern (Newton-Raphson)
//!    oder am Punkt des Maximalfehlers teilen

pub mod bezier;

use crate::core::vector::{self, Point};
use crate::core::Segment;
use bezier::CubicCurve;

pub use bezier::NEWTON_EPSILON;

/// Unterhalb dieses Betrags gilt die Determinante als singulär.
pub const SINGULAR_EPSILON: f64 = 1e-12;
/// Maximale Verfeinerungsschritte pro Teilbereich, bevor geteilt wird.
pub const MAX_ITERATIONS: usize = 5;

/// Zustandsloser Kurven-Fitter mit fester Toleranz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFitter {
    tolerance: f64,
}

/// Ergebnis inklusive Diagnose-Daten eines Fit-Laufs.
#[derive(Debug, Clone, Default)]
pub struct FitReport {
    /// Gefittete Anker
    pub segments: Vec<Segment>,
    /// Anzahl der Teilungen
    pub splits: usize,
    /// Maximalfehler je Iteration, pro `fit_cubic`-Aufruf mit ≥ 3 Punkten
    pub iteration_errors: Vec<Vec<f64>>,
}

impl CurveFitter {
    /// Erstellt einen Fitter. `tolerance` ist der maximal zulässige quadrierte Abstand.
    pub fn new(tolerance: f64) -> Self {
        debug_assert!(tolerance > 0.0, "Toleranz muss positiv sein");
        Self { tolerance }
    }

    /// Fit-Toleranz (quadrierter Abstand).
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Fittet `points` zu einer Folge von Ankern mit Handles.
    ///
    /// Ein einzelner Punkt ergibt einen Anker ohne Handles; eine leere Eingabe
    /// eine leere Folge.
    pub fn fit(&self, points: &[Point]) -> Vec<Segment> {
        self.fit_with_report(points).segments
    }

    /// Wie [`fit`](Self::fit), liefert zusätzlich Teilungen und Fehlerverlauf.
    pub fn fit_with_report(&self, points: &[Point]) -> FitReport {
        let mut points = points.to_vec();
        points.dedup();

        match points.len() {
            0 => FitReport::default(),
            1 => FitReport {
                segments: vec![Segment::anchor(points[0])],
                ..FitReport::default()
            },
            n => {
                let mut run = FitRun {
                    points: &points,
                    tolerance: self.tolerance,
                    report: FitReport {
                        segments: Vec::with_capacity(n),
                        ..FitReport::default()
                    },
                };
                run.report.segments.push(Segment::anchor(points[0]));
                let tan1 = vector::normalize(points[1] - points[0], 1.0);
                let tan2 = vector::normalize(points[n - 2] - points[n - 1], 1.0);
                run.fit_cubic(0, n - 1, tan1, tan2);
                run.report
            }
        }
    }
}

/// Arbeitszustand eines einzelnen `fit`-Aufrufs.
struct FitRun<'a> {
    points: &'a [Point],
    tolerance: f64,
    report: FitReport,
}

impl FitRun<'_> {
    fn fit_cubic(&mut self, first: usize, last: usize, tan1: Point, tan2: Point) {
        if last - first == 1 {
            let pt1 = self.points[first];
            let pt2 = self.points[last];
            let dist = pt1.distance(pt2) / 3.0;
            self.add_curve([
                pt1,
                pt1 + vector::normalize(tan1, dist),
                pt2 + vector::normalize(tan2, dist),
                pt2,
            ]);
            return;
        }

        let mut u = self.chord_length_parameterize(first, last);
        let mut error_bound = self.tolerance.max(self.tolerance * self.tolerance);
        let mut split = first + (last - first) / 2;
        let mut params_in_order = true;
        let mut errors = Vec::with_capacity(MAX_ITERATIONS);

        for _ in 0..MAX_ITERATIONS {
            let curve = self.generate_bezier(first, last, &u, tan1, tan2);
            let (max_error, index) = self.find_max_error(first, last, &curve, &u);
            errors.push(max_error);

            if max_error < self.tolerance && params_in_order {
                self.report.iteration_errors.push(errors);
                self.add_curve(curve);
                return;
            }
            split = index;

            // Keine Verbesserung mehr zu erwarten → teilen
            if max_error >= error_bound {
                break;
            }
            params_in_order = self.reparameterize(first, last, &mut u, &curve);
            error_bound = max_error;
        }
        self.report.iteration_errors.push(errors);
        self.report.splits += 1;

        let tan_center = vector::normalize(self.points[split - 1] - self.points[split], 1.0)
            + vector::normalize(self.points[split] - self.points[split + 1], 1.0);
        self.fit_cubic(first, split, tan1, tan_center);
        self.fit_cubic(split, last, -tan_center, tan2);
    }

    /// Hängt einen Anker an und setzt das ausgehende Handle des Vorgängers.
    fn add_curve(&mut self, curve: CubicCurve) {
        let segments = &mut self.report.segments;
        if let Some(prev) = segments.last_mut() {
            prev.handle_out = Some(curve[1]);
        }
        segments.push(Segment {
            point: curve[3],
            handle_in: Some(curve[2]),
            handle_out: None,
        });
    }

    /// Least-Squares-Bézier mit festen Tangentenrichtungen.
    fn generate_bezier(
        &self,
        first: usize,
        last: usize,
        u: &[f64],
        tan1: Point,
        tan2: Point,
    ) -> CubicCurve {
        let pt1 = self.points[first];
        let pt2 = self.points[last];
        let mut c = [[0.0_f64; 2]; 2];
        let mut x = [0.0_f64; 2];

        for (i, &ui) in u.iter().enumerate() {
            let t = 1.0 - ui;
            let b = 3.0 * ui * t;
            let b0 = t * t * t;
            let b1 = b * t;
            let b2 = b * ui;
            let b3 = ui * ui * ui;
            let a1 = vector::normalize(tan1, b1);
            let a2 = vector::normalize(tan2, b2);
            let tmp = self.points[first + i] - pt1 * (b0 + b1) - pt2 * (b2 + b3);
            c[0][0] += a1.dot(a1);
            c[0][1] += a1.dot(a2);
            c[1][1] += a2.dot(a2);
            x[0] += a1.dot(tmp);
            x[1] += a2.dot(tmp);
        }
        c[1][0] = c[0][1];

        let det_c0_c1 = c[0][0] * c[1][1] - c[1][0] * c[0][1];
        let (mut alpha1, mut alpha2) = if det_c0_c1.abs() > SINGULAR_EPSILON {
            let det_c0_x = c[0][0] * x[1] - c[1][0] * x[0];
            let det_x_c1 = x[0] * c[1][1] - x[1] * c[0][1];
            (det_x_c1 / det_c0_c1, det_c0_x / det_c0_c1)
        } else {
            // Vereinfachte Ein-Parameter-Lösung
            let c0 = c[0][0] + c[0][1];
            let c1 = c[1][0] + c[1][1];
            let alpha = if c0.abs() > SINGULAR_EPSILON {
                x[0] / c0
            } else if c1.abs() > SINGULAR_EPSILON {
                x[1] / c1
            } else {
                0.0
            };
            (alpha, alpha)
        };

        let seg_length = pt2.distance(pt1);
        let eps = SINGULAR_EPSILON * seg_length;
        let fallback = seg_length / 3.0;
        if alpha1 < eps || alpha2 < eps {
            alpha1 = fallback;
            alpha2 = fallback;
        } else {
            // Handles, die sich über die Sehne hinaus kreuzen, verwerfen
            let line = pt2 - pt1;
            let handle1 = vector::normalize(tan1, alpha1);
            let handle2 = vector::normalize(tan2, alpha2);
            if handle1.dot(line) - handle2.dot(line) > seg_length * seg_length {
                alpha1 = fallback;
                alpha2 = fallback;
            }
        }

        [
            pt1,
            pt1 + vector::normalize(tan1, alpha1),
            pt2 + vector::normalize(tan2, alpha2),
            pt2,
        ]
    }

    /// Newton-Raphson für jeden Parameter. `false` wenn die Reihenfolge kippt.
    fn reparameterize(&self, first: usize, last: usize, u: &mut [f64], curve: &CubicCurve) -> bool {
        for i in first..=last {
            u[i - first] = bezier::find_root(curve, self.points[i], u[i - first]);
        }
        u.windows(2).all(|w| w[1] > w[0])
    }

    /// Kumulierte, normierte Polylinien-Länge in `[0, 1]`.
    fn chord_length_parameterize(&self, first: usize, last: usize) -> Vec<f64> {
        let mut u = Vec::with_capacity(last - first + 1);
        u.push(0.0);
        for i in first + 1..=last {
            let prev = u[i - first - 1];
            u.push(prev + self.points[i].distance(self.points[i - 1]));
        }
        let total = u[last - first];
        if total > 0.0 {
            for value in u.iter_mut().skip(1) {
                *value /= total;
            }
        }
        u
    }

    /// Größter quadrierter Abstand eines inneren Punkts zur Kurve und dessen Index.
    fn find_max_error(&self, first: usize, last: usize, curve: &CubicCurve, u: &[f64]) -> (f64, usize) {
        let mut index = first + (last - first) / 2;
        let mut max_dist = 0.0;
        for i in first + 1..last {
            let p = bezier::evaluate(curve, u[i - first]);
            let dist = vector::distance_squared(p, self.points[i]);
            if dist >= max_dist {
                max_dist = dist;
                index = i;
            }
        }
        (max_dist, index)
    }
}
