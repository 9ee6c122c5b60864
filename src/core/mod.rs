//! Core-Domänentypen: Punkte, Segmente, Stil und Pfad.

pub mod path;
pub mod segment;
pub mod style;
pub mod vector;

pub use path::{Path, PathRecord};
pub use segment::Segment;
pub use style::StyleParameters;
pub use vector::{Point, Sample};
