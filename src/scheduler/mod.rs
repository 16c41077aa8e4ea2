mod assignment;
mod backfill;
mod capacity;
mod types;
mod validation;

pub use capacity::CapacityTable;
pub use types::{
    AssignOptions, DropReason, Event, GrantSource, Outcome, SchedError, StaffingLimits,
};
pub use validation::is_one_shift_per_day;

use crate::model::{EmployeeName, Slot};
use crate::preferences::PreferenceStore;
use crate::schedule::Schedule;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Scheduler : un run d'assignation sur un store de préférences.
///
/// Le tableau des effectifs et le planning naissent vides avec le run et
/// ne sont modifiés que par lui.
#[derive(Debug)]
pub struct Scheduler<'a> {
    store: &'a PreferenceStore,
    opts: AssignOptions,
    capacity: CapacityTable,
    schedule: Schedule,
    events: Vec<Event>,
    rejected: Option<EmployeeName>,
}

impl<'a> Scheduler<'a> {
    pub fn new(store: &'a PreferenceStore, opts: AssignOptions) -> Self {
        Self {
            store,
            opts,
            capacity: CapacityTable::new(),
            schedule: Schedule::new(),
            events: Vec::new(),
            rejected: None,
        }
    }

    pub fn limits(&self) -> StaffingLimits {
        self.opts.limits
    }

    pub fn capacity(&self) -> &CapacityTable {
        &self.capacity
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Phase 1 : s'arrête au premier employé rejeté, qui est retourné en erreur.
    pub fn validate(&mut self) -> Result<(), SchedError> {
        validation::validate(self)
    }

    /// Phase 2 : attribution gloutonne des préférences avec repli.
    pub fn assign_preferences(&mut self) {
        assignment::assign_preferences(self)
    }

    /// Phase 3 : complète les créneaux sous l'effectif visé.
    pub fn backfill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        backfill::backfill(self, rng)
    }

    /// Enchaîne les trois phases ; le tirage utilise `opts.seed` si fourni.
    pub fn run(self) -> Outcome {
        let mut rng = match self.opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(&mut rng)
    }

    pub fn run_with_rng<R: Rng + ?Sized>(mut self, rng: &mut R) -> Outcome {
        info!(
            employees = self.store.len(),
            max_work_days = self.opts.limits.max_work_days,
            slot_cap = self.opts.limits.slot_cap,
            min_staffing = self.opts.limits.min_staffing,
            "starting assignment run"
        );
        if let Err(err) = self.validate() {
            debug!("validation halted: {err}");
        }
        self.assign_preferences();
        if self.opts.backfill {
            self.backfill(rng);
        }
        info!(
            employees = self.schedule.len(),
            shifts = self.schedule.total_assignments(),
            "assignment run finished"
        );
        self.finish()
    }

    pub fn finish(self) -> Outcome {
        Outcome {
            schedule: self.schedule,
            capacity: self.capacity,
            events: self.events,
        }
    }

    fn assigned(&self, employee: &EmployeeName) -> u32 {
        u32::try_from(self.schedule.assigned_count(employee)).unwrap_or(u32::MAX)
    }

    fn is_full(&self, employee: &EmployeeName) -> bool {
        self.assigned(employee) >= self.opts.limits.max_work_days
    }

    fn grant(&mut self, employee: &EmployeeName, slot: Slot, source: GrantSource) {
        self.capacity.increment(slot.day, slot.shift);
        self.schedule.push(employee, slot);
        debug!(employee = %employee, %slot, ?source, "shift granted");
        self.events.push(Event::Granted {
            employee: employee.clone(),
            slot,
            source,
        });
    }
}
