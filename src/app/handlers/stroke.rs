//! Handler für den Strich-Lebenszyklus (Pointer-Down/Move/Up).

use crate::app::state::CanvasChange;
use crate::app::DrawState;
use crate::core::Point;
use crate::fit::CurveFitter;

/// Beginnt einen neuen Strich mit dem aktuellen Stift-Stil.
pub fn begin(state: &mut DrawState, position: Point, timestamp: f64) {
    if state.active_path.is_some() {
        log::warn!("BeginStroke während aktivem Strich, alter Strich wird verworfen");
    }
    let style = state.pen.style(state.view.zoom);
    state.active_path = Some(state.capture.begin(position, timestamp, style));
}

/// Reicht einen Zeigerpunkt an die Aufnahme weiter.
pub fn extend(state: &mut DrawState, position: Point, timestamp: f64) {
    let Some(path) = state.active_path.as_mut() else {
        log::debug!("ExtendStroke ohne aktiven Strich ignoriert");
        return;
    };
    state.capture.sample(path, position, timestamp);
}

/// Schließt den Strich ab: Endpunkt permanent, fitten, in den Verlauf legen.
pub fn finish(state: &mut DrawState, position: Option<Point>, timestamp: f64) {
    let Some(mut path) = state.active_path.take() else {
        log::debug!("FinishStroke ohne aktiven Strich ignoriert");
        return;
    };
    let Some(end) = position.or_else(|| state.capture.last_position()) else {
        log::warn!("Strich ohne Endposition verworfen");
        state.capture.cancel();
        return;
    };

    let fitter = CurveFitter::new(state.options.fit_tolerance);
    state.capture.finish(&mut path, end, timestamp, &fitter);

    let record = path.serialize();
    log::info!("Strich übernommen: {} Anker", record.segments.len());
    let evicted = state.history.commit(path);
    state.settled.extend(evicted);
    state.push_change(CanvasChange::Added(record));
}
