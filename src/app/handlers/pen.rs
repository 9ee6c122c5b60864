//! Handler für Stift, Ansicht und Optionen.

use crate::app::pen::PenMode;
use crate::app::DrawState;
use crate::core::Point;
use crate::shared::DrawOptions;

pub fn set_color(state: &mut DrawState, color: String) -> anyhow::Result<()> {
    state.pen.set_color(color)
}

pub fn set_size(state: &mut DrawState, size: f64) -> anyhow::Result<()> {
    state.pen.set_size(size)
}

pub fn set_eraser_size(state: &mut DrawState, size: f64) -> anyhow::Result<()> {
    state.pen.set_eraser_size(size)
}

pub fn set_opacity(state: &mut DrawState, opacity: f64) -> anyhow::Result<()> {
    state.pen.set_opacity(opacity)
}

pub fn set_mode(state: &mut DrawState, mode: PenMode) {
    state.pen.set_mode(mode);
    log::debug!("Stift-Modus: {:?}", mode);
}

/// Setzt Verschiebung und Zoom der Ansicht.
pub fn set_view(state: &mut DrawState, pan: Point, zoom: f64) -> anyhow::Result<()> {
    anyhow::ensure!(zoom.is_finite() && zoom > 0.0, "Zoom muss > 0 sein (ist {})", zoom);
    state.view.pan = pan;
    state.view.zoom = zoom;
    Ok(())
}

/// Übernimmt geprüfte Optionen: Schwellwerte sofort, Verlaufstiefe inkl. Verdrängung.
pub fn apply_options(state: &mut DrawState, options: DrawOptions) -> anyhow::Result<()> {
    options.validate()?;
    state.capture.set_config(options.capture_config());
    let evicted = state.history.set_max_depth(options.max_history_depth());
    state.settled.extend(evicted);
    state.options = options;
    log::info!("Optionen übernommen");
    Ok(())
}
