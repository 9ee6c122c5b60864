//! Zeichensitzung: Controller, Events, Zustand und Verlauf.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
pub mod intent_mapping;
pub mod pen;
pub mod pointer;
pub mod replay;
pub mod state;

pub use controller::DrawController;
pub use events::{DrawCommand, DrawIntent};
pub use history::StrokeHistory;
pub use pen::{PenMode, PenState};
pub use pointer::{PointerInput, ViewTransform};
pub use state::{CanvasChange, DrawState};
