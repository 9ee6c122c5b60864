//! Feature-Handler für den DrawController.

pub mod history;
pub mod pen;
pub mod stroke;
