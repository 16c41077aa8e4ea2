use super::SchedError;
use crate::calendar::{Day, Shift};
use crate::model::Slot;
use crate::schedule::Schedule;

/// Compteurs d'employés assignés, par jour et par poste.
///
/// Aucun plafond n'est appliqué ici : c'est à l'appelant de vérifier le
/// plafond avant d'incrémenter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapacityTable {
    counts: [[u32; 3]; 7],
}

impl CapacityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompte les créneaux d'un planning déjà produit.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let mut table = Self::new();
        for (_, slots) in schedule.iter() {
            for slot in slots {
                table.increment(slot.day, slot.shift);
            }
        }
        table
    }

    /// `(matin, après-midi, soir)` pour un jour.
    pub fn counts(&self, day: Day) -> (u32, u32, u32) {
        let [morning, afternoon, evening] = self.counts[day.index()];
        (morning, afternoon, evening)
    }

    pub fn counts_named(&self, day: &str) -> Result<(u32, u32, u32), SchedError> {
        Ok(self.counts(day.parse()?))
    }

    pub fn get(&self, slot: Slot) -> u32 {
        self.counts[slot.day.index()][slot.shift.index()]
    }

    pub fn increment(&mut self, day: Day, shift: Shift) {
        self.counts[day.index()][shift.index()] += 1;
    }

    pub fn increment_named(&mut self, day: &str, shift: &str) -> Result<(), SchedError> {
        let slot = Slot::parse(day, shift)?;
        self.increment(slot.day, slot.shift);
        Ok(())
    }

    /// Premier poste du jour encore sous `cap`, dans l'ordre de priorité.
    pub fn open_shift(&self, day: Day, cap: u32) -> Option<Shift> {
        Shift::ALL
            .into_iter()
            .find(|shift| self.get(Slot::new(day, *shift)) < cap)
    }

    /// Créneaux sous `min`, en ordre calendaire, avec leur effectif.
    pub fn understaffed(&self, min: u32) -> Vec<(Slot, u32)> {
        Day::ALL
            .into_iter()
            .flat_map(|day| Shift::ALL.into_iter().map(move |shift| Slot::new(day, shift)))
            .map(|slot| (slot, self.get(slot)))
            .filter(|(_, count)| *count < min)
            .collect()
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().sum()
    }
}
