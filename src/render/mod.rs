//! Ausgabe von Pfaden als SVG (reiner Lesezugriff auf das Pfad-Modell).

pub mod svg;

pub use svg::{path_data, path_element, preview_data, svg_document};
