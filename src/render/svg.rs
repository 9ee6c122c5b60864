//! SVG-Pfaddaten aus gefitteten bzw. laufenden Strichen.
//!
//! - gefittet: `M p0 C out0 in1 p1 …` (Paar ohne Handles → `L`)
//! - laufend:  `M origin L permanent… L live…`

use crate::core::{Path, Point, Sample};

fn coord(p: Point) -> String {
    format!("{},{}", p.x, p.y)
}

/// Pfaddaten eines gefitteten Pfads. Laufende Pfade werden als Polylinie ausgegeben.
pub fn path_data(path: &Path) -> String {
    if !path.is_fitted() {
        return preview_data(path, &[]);
    }
    let segments = path.segments();
    let Some(first) = segments.first() else {
        return String::new();
    };

    let mut d = format!("M{}", coord(first.point));
    for pair in segments.windows(2) {
        match pair[0].cubic_to(&pair[1]) {
            Some([_, c1, c2, end]) => {
                d.push_str(&format!(" C{} {} {}", coord(c1), coord(c2), coord(end)));
            }
            None => {
                d.push_str(&format!(" L{}", coord(pair[1].point)));
            }
        }
    }
    d
}

/// Vorschau während der Aufnahme: permanente Punkte plus Live-Schwanz als Linien.
pub fn preview_data(path: &Path, live: &[Sample]) -> String {
    let mut points = path.raw_points().iter().chain(live).map(|s| s.position);
    let Some(origin) = points.next() else {
        return String::new();
    };
    let mut d = format!("M{}", coord(origin));
    for p in points {
        d.push_str(&format!(" L{}", coord(p)));
    }
    d
}

/// `<path>`-Element mit Stil-Attributen.
pub fn path_element(path: &Path) -> String {
    let style = path.style();
    format!(
        r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" opacity="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
        path_data(path),
        escape_attr(&style.color),
        style.width,
        style.opacity
    )
}

/// Vollständiges SVG-Dokument aller übergebenen Pfade.
pub fn svg_document<'a>(paths: impl IntoIterator<Item = &'a Path>, width: f64, height: f64) -> String {
    let mut doc = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );
    doc.push('\n');
    for path in paths {
        doc.push_str("  ");
        doc.push_str(&path_element(path));
        doc.push('\n');
    }
    doc.push_str("</svg>\n");
    doc
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
