#![forbid(unsafe_code)]
//! Roulement — répartition hebdomadaire des postes selon les préférences.
//!
//! - Préférences (jour, poste) par employé, lues en YAML/JSON/CSV.
//! - Attribution gloutonne avec repli sur un autre poste ou un jour suivant.
//! - Complément aléatoire (reproductible par graine) des créneaux sous-dotés.
//! - Une seule passe, sans état conservé entre deux runs.

pub mod calendar;
pub mod config;
pub mod io;
pub mod model;
pub mod preferences;
pub mod schedule;
pub mod scheduler;
pub mod storage;
pub mod summary;

pub use calendar::{Day, Shift};
pub use config::{load_config_from_file, Config};
pub use model::{EmployeeName, PreferenceRecord, RawPreference, Slot};
pub use preferences::{PreferenceStore, Request};
pub use schedule::Schedule;
pub use scheduler::{
    is_one_shift_per_day, AssignOptions, CapacityTable, DropReason, Event, GrantSource, Outcome,
    SchedError, Scheduler, StaffingLimits,
};
pub use storage::{FileStorage, Storage};
pub use summary::{ScheduleRenderer, TextSummary};
