use super::{CaptureConfig, CapturePhase, StrokeCapture};
use crate::core::{Point, StyleParameters};
use crate::fit::CurveFitter;

/// Spielt Punkte entlang der x-Achse mit festem Abstand und Zeitschritt ab.
/// Liefert die Anzahl permanenter Punkte (ohne Ursprung).
fn replay_line(config: CaptureConfig, count: usize, spacing: f64, dt: f64) -> usize {
    let mut capture = StrokeCapture::new(config);
    let mut path = capture.begin(Point::ZERO, 0.0, StyleParameters::default());
    let mut promoted = 0;
    for i in 1..=count {
        let f = i as f64;
        if capture.sample(&mut path, Point::new(f * spacing, 0.0), f * dt) {
            promoted += 1;
        }
    }
    assert_eq!(path.raw_points().len(), promoted + 1);
    promoted
}

#[test]
fn test_begin_setzt_ursprung_permanent() {
    let mut capture = StrokeCapture::default();
    let path = capture.begin(Point::new(3.0, 4.0), 10.0, StyleParameters::default());

    assert_eq!(capture.phase(), CapturePhase::Active);
    assert_eq!(path.raw_points().len(), 1);
    assert_eq!(
        capture.last_permanent().map(|s| s.position),
        Some(Point::new(3.0, 4.0))
    );
}

#[test]
fn test_doppelter_punkt_wird_ignoriert() {
    let mut capture = StrokeCapture::default();
    let mut path = capture.begin(Point::ZERO, 0.0, StyleParameters::default());

    capture.sample(&mut path, Point::new(1.0, 0.0), 16.0);
    capture.sample(&mut path, Point::new(1.0, 0.0), 32.0);
    assert_eq!(capture.live().len(), 1);

    // Rückkehr zum Ursprung ist kein Duplikat des letzten Live-Punkts
    capture.sample(&mut path, Point::ZERO, 48.0);
    assert_eq!(capture.live().len(), 2);
}

#[test]
fn test_ruhender_zeiger_am_permanenten_punkt_wird_ignoriert() {
    let mut capture = StrokeCapture::default();
    let mut path = capture.begin(Point::ZERO, 0.0, StyleParameters::default());

    // Live-Schwanz leer → Vergleich mit dem letzten permanenten Punkt
    assert!(!capture.sample(&mut path, Point::ZERO, 16.0));
    assert!(capture.live().is_empty());
    assert_eq!(path.raw_points().len(), 1);
}

#[test]
fn test_langsame_bewegung_nutzt_mindestschwelle() {
    let mut capture = StrokeCapture::default();
    let mut path = capture.begin(Point::ZERO, 0.0, StyleParameters::default());

    // v = 4 / 1000 → Schwelle = max(5, 0.2) = 5
    assert!(!capture.sample(&mut path, Point::new(4.0, 0.0), 1000.0));
    assert!(capture.sample(&mut path, Point::new(6.0, 0.0), 1500.0));
    assert!(capture.live().is_empty());
    assert_eq!(path.raw_points().len(), 2);
}

#[test]
fn test_gleicher_zeitstempel_behaelt_geschwindigkeit() {
    let mut capture = StrokeCapture::default();
    let mut path = capture.begin(Point::ZERO, 0.0, StyleParameters::default());

    capture.sample(&mut path, Point::new(1.0, 0.0), 10.0);
    let v = capture.live()[0].velocity;
    assert!(v.is_finite() && v > 0.0);

    // Δt = 0 gegenüber dem Ursprung
    let mut capture = StrokeCapture::default();
    let mut path = capture.begin(Point::ZERO, 0.0, StyleParameters::default());
    capture.sample(&mut path, Point::new(2.0, 0.0), 0.0);
    assert_eq!(capture.live()[0].velocity, 0.0);
    assert!(capture.live()[0].velocity.is_finite());
}

#[test]
fn test_letzter_permanenter_punkt_entspricht_letztem_rohpunkt() {
    let mut capture = StrokeCapture::default();
    let mut path = capture.begin(Point::ZERO, 0.0, StyleParameters::default());
    for i in 1..50 {
        let f = i as f64;
        capture.sample(&mut path, Point::new(f * 3.0, (f * 0.3).sin() * 10.0), f * 16.0);
        assert_eq!(
            capture.last_permanent().map(|s| s.position),
            path.last_raw_point().map(|s| s.position)
        );
    }
}

#[test]
fn test_finish_erzwingt_endpunkt_und_fittet() {
    let mut capture = StrokeCapture::default();
    let mut path = capture.begin(Point::ZERO, 0.0, StyleParameters::default());
    capture.sample(&mut path, Point::new(2.0, 0.0), 1000.0);
    let end = Point::new(3.0, 1.0);

    capture.finish(&mut path, end, 1016.0, &CurveFitter::new(10.0));

    assert_eq!(capture.phase(), CapturePhase::Idle);
    assert!(path.is_fitted());
    assert_eq!(path.segments().last().map(|s| s.point), Some(end));
    assert_eq!(path.segments().first().map(|s| s.point), Some(Point::ZERO));
}

#[test]
fn test_finish_am_ursprung_ergibt_punkt() {
    let mut capture = StrokeCapture::default();
    let origin = Point::new(5.0, 5.0);
    let mut path = capture.begin(origin, 0.0, StyleParameters::default());
    capture.finish(&mut path, origin, 5.0, &CurveFitter::new(10.0));

    assert_eq!(path.segments().len(), 1);
    assert!(path.segments()[0].is_degenerate());
}

#[test]
fn test_sample_ohne_aktiven_strich_ist_wirkungslos() {
    let mut capture = StrokeCapture::default();
    let mut path = capture.begin(Point::ZERO, 0.0, StyleParameters::default());
    capture.cancel();
    assert!(!capture.sample(&mut path, Point::new(100.0, 0.0), 16.0));
    assert_eq!(path.raw_points().len(), 1);
}

// ── Adaptive Ausdünnung ──

#[test]
fn test_schnelle_bewegung_wird_ausgeduennt() {
    // 32 Einheiten alle 16 ms → v = 2, Schwelle = 100
    let fast = replay_line(CaptureConfig::default(), 100, 32.0, 16.0);
    assert!(fast < 100);

    // Gleiche Punkte, zehnfache Zeit → v = 0.2, Schwelle = 10
    let slow = replay_line(CaptureConfig::default(), 100, 32.0, 160.0);
    assert!(slow > fast, "langsam {} vs. schnell {}", slow, fast);
}

#[test]
fn test_hoehere_basisschwelle_erhoeht_nie_die_punktzahl() {
    let mut previous = usize::MAX;
    for base in [1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 400.0] {
        let config = CaptureConfig {
            base_threshold: base,
            ..CaptureConfig::default()
        };
        let promoted = replay_line(config, 100, 7.0, 16.0);
        assert!(
            promoted <= previous,
            "Basis {} ergab {} > {}",
            base,
            promoted,
            previous
        );
        previous = promoted;
    }
}
