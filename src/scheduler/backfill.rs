use super::{GrantSource, Scheduler};
use crate::calendar::{Day, Shift};
use crate::model::{EmployeeName, Slot};
use rand::Rng;
use tracing::info;

pub(super) fn backfill<R: Rng + ?Sized>(scheduler: &mut Scheduler<'_>, rng: &mut R) {
    let min = scheduler.opts.limits.min_staffing;
    let mut available: Vec<EmployeeName> = scheduler
        .store
        .employees()
        .filter(|employee| !scheduler.is_full(employee))
        .cloned()
        .collect();
    let before = scheduler.capacity.total();

    for day in Day::ALL {
        for shift in Shift::ALL {
            let slot = Slot::new(day, shift);
            // pas de contrôle du jour déjà travaillé ici
            while scheduler.capacity.get(slot) < min && !available.is_empty() {
                let pick = rng.gen_range(0..available.len());
                let employee = available[pick].clone();
                scheduler.grant(&employee, slot, GrantSource::Backfill);
                if scheduler.is_full(&employee) {
                    available.remove(pick);
                }
            }
        }
    }

    info!(
        added = scheduler.capacity.total() - before,
        still_available = available.len(),
        "understaffed slots backfilled"
    );
}
