use crate::models::Workout;

/// Sesjonslageret: økter i innleggingsrekkefølge, kun tillegg.
/// Eies av kontrolleren alene – ingen mutasjon utenfra.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    entries: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Legger økten bakerst og returnerer referanse til den lagrede.
    pub fn push(&mut self, workout: Workout) -> &Workout {
        self.entries.push(workout);
        self.entries.last().unwrap()
    }

    /// Lineært søk på id, første treff.
    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.entries.iter().find(|w| w.id == id)
    }

    pub fn all(&self) -> &[Workout] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coords, WorkoutKind};
    use chrono::{TimeZone, Utc};

    #[test]
    fn push_keeps_insertion_order() {
        let mut store = WorkoutStore::new();
        for i in 1..=3 {
            let date = Utc.with_ymd_and_hms(2024, 6, i, 8, 0, 0).unwrap();
            store.push(Workout::with_date(
                date,
                Coords::new(10.0, 20.0),
                5.0,
                30.0,
                WorkoutKind::Running { cadence_spm: 150.0 },
            ));
        }
        assert_eq!(store.len(), 3);
        let dates: Vec<_> = store.all().iter().map(|w| w.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn find_by_id_misses_unknown() {
        let store = WorkoutStore::new();
        assert!(store.find_by_id("0000000000").is_none());
    }
}
