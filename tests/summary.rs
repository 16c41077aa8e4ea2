#![forbid(unsafe_code)]
use roulement::{
    CapacityTable, EmployeeName, Schedule, ScheduleRenderer, Slot, TextSummary,
};

fn sample() -> Schedule {
    [
        ("bob", "Mon", "morning"),
        ("sarah", "Mon", "morning"),
        ("bob", "Tue", "afternoon"),
    ]
    .into_iter()
    .map(|(n, d, s)| (EmployeeName::new(n).unwrap(), Slot::parse(d, s).unwrap()))
    .collect()
}

#[test]
fn text_summary_lists_employees() {
    let schedule = sample();
    let capacity = CapacityTable::from_schedule(&schedule);
    let out = TextSummary { min_staffing: 0 }.render(&schedule, &capacity);
    insta::assert_snapshot!(out.trim_end(), @r"
    Bob: MON morning, TUE afternoon
    Sarah: MON morning
    ");
}

#[test]
fn text_summary_lists_understaffed_slots() {
    let schedule = sample();
    let capacity = CapacityTable::from_schedule(&schedule);
    assert_eq!(capacity.counts(roulement::Day::Monday), (2, 0, 0));

    let out = TextSummary { min_staffing: 2 }.render(&schedule, &capacity);
    assert!(out.contains("Understaffed:\n"));
    assert!(out.contains("  MON afternoon: 0/2\n"));
    assert!(out.contains("  TUE afternoon: 1/2\n"));
    assert!(!out.contains("MON morning: "));
}
