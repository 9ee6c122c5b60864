use crate::core::Path;
use std::sync::Arc;

/// Undo/Redo-Stapel abgeschlossener Striche.
///
/// Pfade liegen als `Arc` vor: Undo/Redo verschiebt nur Referenzen, die
/// Geometrie wird nie kopiert. Mit `max_depth` fallen beim Überlauf die
/// ältesten Einträge zuerst heraus; sie werden an den Aufrufer zurückgegeben.
///
/// Invariante: `undo_stack.len() + redo_stack.len() <= max_depth`. Undo und
/// Redo verschieben nur zwischen den Stapeln, ein Redo kann den Undo-Stapel
/// daher nie über die Grenze füllen.
#[derive(Debug, Default)]
pub struct StrokeHistory {
    undo_stack: Vec<Arc<Path>>,
    redo_stack: Vec<Arc<Path>>,
    max_depth: Option<usize>,
}

impl StrokeHistory {
    /// Unbegrenzter Verlauf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verlauf mit maximaler Tiefe (`None` = unbegrenzt).
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Ändert die maximale Tiefe; überzählige älteste Einträge werden zurückgegeben.
    ///
    /// Überzählige Redo-Einträge werden von unten verworfen, sie sind
    /// nicht sichtbar.
    pub fn set_max_depth(&mut self, max_depth: Option<usize>) -> Vec<Arc<Path>> {
        self.max_depth = max_depth;
        let evicted = self.evict_overflow();
        if let Some(max) = max_depth {
            let room = max - self.undo_stack.len();
            if self.redo_stack.len() > room {
                let overflow = self.redo_stack.len() - room;
                self.redo_stack.drain(..overflow);
                log::debug!("Verlauf verkleinert, {} Redo-Eintrag/Einträge verworfen", overflow);
            }
        }
        evicted
    }

    /// Legt einen abgeschlossenen Strich ab und verwirft den Redo-Stapel.
    ///
    /// Liefert Einträge, die wegen `max_depth` aus dem Verlauf gefallen sind.
    pub fn commit(&mut self, path: impl Into<Arc<Path>>) -> Vec<Arc<Path>> {
        self.undo_stack.push(path.into());
        self.redo_stack.clear();
        self.evict_overflow()
    }

    /// Nimmt den jüngsten Strich zurück (`None` wenn leer).
    pub fn undo(&mut self) -> Option<Arc<Path>> {
        let path = self.undo_stack.pop()?;
        self.redo_stack.push(Arc::clone(&path));
        Some(path)
    }

    /// Stellt den zuletzt zurückgenommenen Strich wieder her (`None` wenn leer).
    pub fn redo(&mut self) -> Option<Arc<Path>> {
        let path = self.redo_stack.pop()?;
        self.undo_stack.push(Arc::clone(&path));
        debug_assert!(self.max_depth.is_none_or(|max| self.undo_stack.len() <= max));
        Some(path)
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Aktuell sichtbare Striche in Zeichenreihenfolge.
    pub fn committed(&self) -> &[Arc<Path>] {
        &self.undo_stack
    }

    /// Leert beide Stapel.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn evict_overflow(&mut self) -> Vec<Arc<Path>> {
        match self.max_depth {
            Some(max) if self.undo_stack.len() > max => {
                let overflow = self.undo_stack.len() - max;
                log::debug!("Verlauf voll, {} älteste(r) Strich(e) fixiert", overflow);
                self.undo_stack.drain(..overflow).collect()
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point, Sample, Segment, StyleParameters};

    fn make_path(x: f64) -> Path {
        let mut path = Path::new(Sample::new(Point::new(x, 0.0), 0.0), StyleParameters::default());
        path.fit(&crate::fit::CurveFitter::new(10.0));
        path
    }

    fn anchor_x(path: &Path) -> f64 {
        path.segments()[0].point.x
    }

    #[test]
    fn leerer_verlauf_kann_weder_undo_noch_redo() {
        let mut history = StrokeHistory::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn commit_undo_redo_ablauf() {
        let mut history = StrokeHistory::new();
        history.commit(make_path(1.0)); // A
        history.commit(make_path(2.0)); // B

        assert_eq!(history.undo().map(|p| anchor_x(&p)), Some(2.0));
        assert_eq!(history.undo().map(|p| anchor_x(&p)), Some(1.0));
        assert_eq!(history.redo().map(|p| anchor_x(&p)), Some(1.0));

        history.commit(make_path(3.0)); // C
        assert!(history.redo().is_none(), "Commit muss Redo verwerfen");
        assert_eq!(history.committed().len(), 2);
    }

    #[test]
    fn undo_liefert_strukturell_gleichen_pfad() {
        let mut history = StrokeHistory::new();
        let path = make_path(7.0);
        history.commit(path.clone());
        let undone = history.undo().expect("undo vorhanden");
        assert_eq!(*undone, path);
        let redone = history.redo().expect("redo vorhanden");
        assert_eq!(*redone, path);
        assert_eq!(redone.segments(), &[Segment::anchor(Point::new(7.0, 0.0))]);
    }

    #[test]
    fn respektiert_max_tiefe_und_verdraengt_aelteste() {
        let mut history = StrokeHistory::with_max_depth(Some(3));
        let mut evicted = Vec::new();
        for i in 1..=5 {
            evicted.extend(history.commit(make_path(i as f64)));
        }

        assert_eq!(evicted.iter().map(|p| anchor_x(p)).collect::<Vec<_>>(), vec![1.0, 2.0]);

        let mut undo_count = 0;
        while history.undo().is_some() {
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn kleinere_max_tiefe_gibt_ueberlauf_zurueck() {
        let mut history = StrokeHistory::new();
        for i in 1..=4 {
            history.commit(make_path(i as f64));
        }
        let evicted = history.set_max_depth(Some(1));
        assert_eq!(evicted.len(), 3);
        assert_eq!(history.committed().len(), 1);
        assert_eq!(anchor_x(&history.committed()[0]), 4.0);
    }

    #[test]
    fn redo_nach_verkleinerung_bleibt_in_der_grenze() {
        let mut history = StrokeHistory::new();
        for i in 1..=4 {
            history.commit(make_path(i as f64));
        }
        while history.undo().is_some() {}

        let evicted = history.set_max_depth(Some(1));
        assert!(evicted.is_empty(), "Redo-Einträge sind nicht sichtbar");

        let mut redos = Vec::new();
        while let Some(path) = history.redo() {
            redos.push(anchor_x(&path));
        }
        // Zuletzt zurückgenommen = ältester Strich, liegt oben auf dem Redo-Stapel
        assert_eq!(redos, vec![1.0]);
        assert_eq!(history.committed().len(), 1);
    }

    #[test]
    fn verkleinerung_kuerzt_redo_auf_restplatz() {
        let mut history = StrokeHistory::new();
        for i in 1..=4 {
            history.commit(make_path(i as f64));
        }
        history.undo();
        history.undo();

        let evicted = history.set_max_depth(Some(3));
        assert!(evicted.is_empty());
        assert_eq!(history.committed().len(), 2);

        assert_eq!(history.redo().map(|p| anchor_x(&p)), Some(3.0));
        assert!(history.redo().is_none());
        assert_eq!(history.committed().len(), 3);
    }

    #[test]
    fn clear_leert_beide_stapel() {
        let mut history = StrokeHistory::new();
        history.commit(make_path(1.0));
        history.commit(make_path(2.0));
        history.undo();
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
