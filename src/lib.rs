//! Quickdraw Library.
//! Adaptive Strichaufnahme und Bézier-Fitting als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod capture;
pub mod core;
pub mod fit;
pub mod render;
pub mod shared;

pub use app::{
    CanvasChange, DrawCommand, DrawController, DrawIntent, DrawState, PenMode, PenState,
    PointerInput, StrokeHistory, ViewTransform,
};
pub use capture::{CaptureConfig, CapturePhase, StrokeCapture};
pub use core::{Path, PathRecord, Point, Sample, Segment, StyleParameters};
pub use fit::{CurveFitter, FitReport};
pub use shared::DrawOptions;
