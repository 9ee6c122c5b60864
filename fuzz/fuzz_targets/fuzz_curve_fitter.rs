#![no_main]

use libfuzzer_sys::fuzz_target;
use quickdraw::{CurveFitter, Point};

// Je 4 Bytes → ein Punkt (i16, i16); Anker müssen die Endpunkte treffen.
fuzz_target!(|data: &[u8]| {
    let points: Vec<Point> = data
        .chunks_exact(4)
        .map(|c| {
            Point::new(
                i16::from_le_bytes([c[0], c[1]]) as f64,
                i16::from_le_bytes([c[2], c[3]]) as f64,
            )
        })
        .collect();

    let segments = CurveFitter::new(10.0).fit(&points);
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        assert_eq!(segments.first().map(|s| s.point), Some(*first));
        assert_eq!(segments.last().map(|s| s.point), Some(*last));
    } else {
        assert!(segments.is_empty());
    }
});
