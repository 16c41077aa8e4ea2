use crate::schedule::Schedule;
use crate::scheduler::CapacityTable;
use std::fmt::Write;

/// Permet de customiser le rendu d'un planning (texte, mail, etc.).
pub trait ScheduleRenderer {
    fn render(&self, schedule: &Schedule, capacity: &CapacityTable) -> String;
}

/// Rendu texte : une ligne par employé puis les créneaux sous l'effectif
/// visé.
#[derive(Debug, Clone, Copy)]
pub struct TextSummary {
    pub min_staffing: u32,
}

impl ScheduleRenderer for TextSummary {
    fn render(&self, schedule: &Schedule, capacity: &CapacityTable) -> String {
        let mut out = String::new();
        for (name, slots) in schedule.iter() {
            let shifts: Vec<String> = slots.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "{name}: {}", shifts.join(", "));
        }

        let missing = capacity.understaffed(self.min_staffing);
        if !missing.is_empty() {
            let _ = writeln!(out, "Understaffed:");
            for (slot, count) in missing {
                let _ = writeln!(out, "  {slot}: {count}/{}", self.min_staffing);
            }
        }
        out
    }
}
