use super::CapacityTable;
use crate::calendar::Day;
use crate::model::{EmployeeName, Slot};
use crate::schedule::Schedule;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Limites d'effectif d'un run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffingLimits {
    /// Nombre maximal de postes par employé sur la semaine.
    pub max_work_days: u32,
    /// Nombre maximal d'employés sur un même créneau.
    pub slot_cap: u32,
    /// Effectif visé par créneau lors du complément final.
    pub min_staffing: u32,
}

impl Default for StaffingLimits {
    fn default() -> Self {
        Self {
            max_work_days: 5,
            slot_cap: 2,
            min_staffing: 2,
        }
    }
}

/// Options d'assignation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignOptions {
    pub limits: StaffingLimits,
    /// Désactive le complément aléatoire des créneaux sous-dotés.
    pub backfill: bool,
    /// Graine du tirage du complément ; `None` = entropie système.
    pub seed: Option<u64>,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            limits: StaffingLimits::default(),
            backfill: true,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantSource {
    Preferred,
    SameDay,
    NextDay,
    Backfill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// L'employé a déjà `max_work_days` postes.
    EmployeeFull,
    /// Aucun créneau libre ni ce jour ni les suivants.
    NoOpenSlot,
}

/// Trace d'une décision du moteur.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Rejected {
        employee: EmployeeName,
        reason: SchedError,
    },
    /// Validation interrompue après un rejet ; `unchecked` employés non vus.
    ValidationHalted { unchecked: usize },
    /// Employé rejeté, ignoré pendant l'assignation.
    Skipped { employee: EmployeeName },
    Granted {
        employee: EmployeeName,
        slot: Slot,
        source: GrantSource,
    },
    Dropped {
        employee: EmployeeName,
        requested: Slot,
        reason: DropReason,
    },
}

/// Résultat d'un run complet.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub schedule: Schedule,
    pub capacity: CapacityTable,
    pub events: Vec<Event>,
}

impl Outcome {
    pub fn rejections(&self) -> impl Iterator<Item = (&EmployeeName, &SchedError)> {
        self.events.iter().filter_map(|event| match event {
            Event::Rejected { employee, reason } => Some((employee, reason)),
            _ => None,
        })
    }

    pub fn dropped(&self) -> impl Iterator<Item = (&EmployeeName, Slot)> {
        self.events.iter().filter_map(|event| match event {
            Event::Dropped {
                employee, requested, ..
            } => Some((employee, *requested)),
            _ => None,
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error("invalid day: {0:?}")]
    InvalidDay(String),
    #[error("invalid shift: {0:?}")]
    InvalidShift(String),
    #[error("employee {employee} has more than one preferred shift on {day}")]
    OneShiftPerDayViolation { employee: EmployeeName, day: Day },
    #[error("employee {employee} requests {requested} days, more than the maximum of {max}")]
    MaxWorkDaysExceeded {
        employee: EmployeeName,
        requested: usize,
        max: u32,
    },
    #[error("employee name cannot be empty")]
    EmptyName,
}
