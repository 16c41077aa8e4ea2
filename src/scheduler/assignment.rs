use super::{DropReason, Event, GrantSource, Scheduler};
use crate::model::{EmployeeName, Slot};
use tracing::{info, warn};

pub(super) fn assign_preferences(scheduler: &mut Scheduler<'_>) {
    let store = scheduler.store;

    for (employee, preferences) in store.iter() {
        if scheduler.rejected.as_ref() == Some(employee) {
            scheduler.events.push(Event::Skipped {
                employee: employee.clone(),
            });
            continue;
        }

        for &requested in preferences {
            match scheduler.place(employee, requested) {
                Ok((slot, source)) => scheduler.grant(employee, slot, source),
                Err(reason) => {
                    warn!(employee = %employee, %requested, ?reason, "preference dropped");
                    scheduler.events.push(Event::Dropped {
                        employee: employee.clone(),
                        requested,
                        reason,
                    });
                }
            }
        }
    }

    info!(
        shifts = scheduler.capacity.total(),
        "preferences assigned"
    );
}

impl Scheduler<'_> {
    /// Cherche où placer une préférence : le créneau demandé, un autre poste
    /// le même jour, puis le premier poste libre des jours suivants.
    ///
    /// Les replis ne regardent que le plafond du créneau.
    fn place(
        &self,
        employee: &EmployeeName,
        requested: Slot,
    ) -> Result<(Slot, GrantSource), DropReason> {
        let cap = self.opts.limits.slot_cap;

        if self.is_full(employee) {
            return Err(DropReason::EmployeeFull);
        }
        if self.capacity.get(requested) < cap {
            return Ok((requested, GrantSource::Preferred));
        }

        if let Some(shift) = self.capacity.open_shift(requested.day, cap) {
            return Ok((Slot::new(requested.day, shift), GrantSource::SameDay));
        }

        requested
            .day
            .rotation()
            .find_map(|day| {
                self.capacity
                    .open_shift(day, cap)
                    .map(|shift| (Slot::new(day, shift), GrantSource::NextDay))
            })
            .ok_or(DropReason::NoOpenSlot)
    }
}
