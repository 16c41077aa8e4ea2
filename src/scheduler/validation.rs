use super::{Event, SchedError, Scheduler};
use crate::calendar::Day;
use crate::model::{EmployeeName, Slot};
use crate::preferences::Request;
use tracing::warn;

pub(super) fn validate(scheduler: &mut Scheduler<'_>) -> Result<(), SchedError> {
    let store = scheduler.store;
    let max = scheduler.opts.limits.max_work_days;

    for (position, (employee, request)) in store.requests().enumerate() {
        let Err(reason) = check_employee(employee, request, max) else {
            continue;
        };

        let unchecked = store.len() - position - 1;
        warn!(employee = %employee, unchecked, "{reason}; validation halted");
        scheduler.rejected = Some(employee.clone());
        scheduler.events.push(Event::Rejected {
            employee: employee.clone(),
            reason: reason.clone(),
        });
        scheduler.events.push(Event::ValidationHalted { unchecked });
        return Err(reason);
    }

    Ok(())
}

/// Contrôle la demande complète, entrées non assignables comprises.
fn check_employee(employee: &EmployeeName, request: &Request, max: u32) -> Result<(), SchedError> {
    if let Some(day) = first_repeated_day(&request.days) {
        return Err(SchedError::OneShiftPerDayViolation {
            employee: employee.clone(),
            day,
        });
    }
    if request.entries > max as usize {
        return Err(SchedError::MaxWorkDaysExceeded {
            employee: employee.clone(),
            requested: request.entries,
            max,
        });
    }
    Ok(())
}

fn first_repeated_day(days: &[Day]) -> Option<Day> {
    days.iter()
        .enumerate()
        .find_map(|(idx, a)| days.iter().skip(idx + 1).any(|b| b == a).then_some(*a))
}

/// Vrai si aucune paire de préférences ne tombe le même jour.
pub fn is_one_shift_per_day(preferences: &[Slot]) -> bool {
    let days: Vec<Day> = preferences.iter().map(|slot| slot.day).collect();
    first_repeated_day(&days).is_none()
}
