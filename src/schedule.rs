use crate::model::{EmployeeName, Slot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Planning produit : pour chaque employé, ses créneaux dans l'ordre
/// d'attribution. Un employé absent n'a aucun poste.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    assignments: BTreeMap<EmployeeName, Vec<Slot>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, employee: &EmployeeName, slot: Slot) {
        self.assignments
            .entry(employee.clone())
            .or_default()
            .push(slot);
    }

    pub fn assigned_count(&self, employee: &EmployeeName) -> usize {
        self.slots(employee).len()
    }

    pub fn slots(&self, employee: &EmployeeName) -> &[Slot] {
        self.assignments
            .get(employee)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Recherche par nom brut (normalisé avant lookup).
    pub fn get(&self, raw_name: &str) -> Option<&[Slot]> {
        let name = EmployeeName::new(raw_name).ok()?;
        self.assignments.get(&name).map(Vec::as_slice)
    }

    /// Employés par ordre alphabétique.
    pub fn iter(&self) -> impl Iterator<Item = (&EmployeeName, &[Slot])> {
        self.assignments
            .iter()
            .map(|(name, slots)| (name, slots.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn total_assignments(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }
}

impl FromIterator<(EmployeeName, Slot)> for Schedule {
    fn from_iter<I: IntoIterator<Item = (EmployeeName, Slot)>>(iter: I) -> Self {
        let mut schedule = Schedule::new();
        for (employee, slot) in iter {
            schedule.push(&employee, slot);
        }
        schedule
    }
}
