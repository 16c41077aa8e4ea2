#![forbid(unsafe_code)]
use roulement::{
    is_one_shift_per_day, Day, EmployeeName, PreferenceRecord, PreferenceStore, RawPreference,
    Request, SchedError, Slot,
};

fn record(name: &str, prefs: &[(&str, &str)]) -> PreferenceRecord {
    PreferenceRecord {
        name: name.to_string(),
        preferences: prefs.iter().map(|(d, t)| RawPreference::new(*d, *t)).collect(),
    }
}

#[test]
fn names_are_case_insensitive() {
    let a = EmployeeName::new("  bob ").unwrap();
    let b = EmployeeName::new("BOB").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.as_str(), "Bob");
    assert_eq!(EmployeeName::new("mary  ANN").unwrap().as_str(), "Mary Ann");
    assert_eq!(EmployeeName::new("   ").unwrap_err(), SchedError::EmptyName);
}

#[test]
fn one_shift_per_day_examples() {
    let ok = [
        Slot::parse("Mon", "morning").unwrap(),
        Slot::parse("Tue", "afternoon").unwrap(),
    ];
    let clash = [
        Slot::parse("Mon", "morning").unwrap(),
        Slot::parse("Monday", "evening").unwrap(),
    ];
    assert!(is_one_shift_per_day(&ok));
    assert!(!is_one_shift_per_day(&clash));
    assert!(is_one_shift_per_day(&[]));
}

#[test]
fn store_keeps_insertion_order() {
    let (store, issues) = PreferenceStore::from_records(vec![
        record("zoe", &[("Mon", "morning")]),
        record("adam", &[("Tue", "evening"), ("Wed", "morning")]),
    ]);
    assert!(issues.is_empty());
    let names: Vec<&str> = store.employees().map(EmployeeName::as_str).collect();
    assert_eq!(names, vec!["Zoe", "Adam"]);
    assert_eq!(store.requested_days(&EmployeeName::new("ADAM").unwrap()), 2);
    assert_eq!(store.requested_days(&EmployeeName::new("nobody").unwrap()), 0);
}

#[test]
fn duplicate_name_replaces_in_place() {
    let (store, _) = PreferenceStore::from_records(vec![
        record("Bob", &[("Mon", "morning")]),
        record("Sarah", &[("Mon", "morning")]),
        record("BOB", &[("Fri", "evening")]),
    ]);
    assert_eq!(store.len(), 2);
    let bob = EmployeeName::new("bob").unwrap();
    assert_eq!(store.employees().next(), Some(&bob));
    assert_eq!(
        store.preferences(&bob).unwrap(),
        &[Slot::parse("Fri", "evening").unwrap()]
    );
}

#[test]
fn invalid_entries_abandon_the_rest() {
    let (store, issues) = PreferenceStore::from_records(vec![
        record(
            "Bob",
            &[("Mon", "morning"), ("Tue", "night"), ("Wed", "evening")],
        ),
        record("Sarah", &[("Caturday", "morning")]),
        record("", &[("Mon", "morning")]),
    ]);

    assert_eq!(
        issues,
        vec![
            SchedError::InvalidShift("night".into()),
            SchedError::InvalidDay("Caturday".into()),
            SchedError::EmptyName,
        ]
    );
    let bob = EmployeeName::new("Bob").unwrap();
    assert_eq!(
        store.preferences(&bob).unwrap(),
        &[Slot::parse("Mon", "morning").unwrap()]
    );
    let sarah = EmployeeName::new("Sarah").unwrap();
    assert!(store.contains(&sarah));
    assert_eq!(store.preferences(&sarah).unwrap().len(), 0);
    assert_eq!(store.requested_days(&sarah), 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn request_keeps_entries_past_an_invalid_one() {
    let (store, issues) = PreferenceStore::from_records(vec![record(
        "Bob",
        &[("Mon", "morning"), ("Tue", "brunch"), ("Moonday", "evening"), ("Mon", "evening")],
    )]);
    assert_eq!(
        issues,
        vec![
            SchedError::InvalidShift("brunch".into()),
            SchedError::InvalidDay("Moonday".into()),
        ]
    );
    let bob = EmployeeName::new("bob").unwrap();
    assert_eq!(
        store.request(&bob),
        Some(&Request {
            days: vec![Day::Monday, Day::Tuesday, Day::Monday],
            entries: 4,
        })
    );
    assert_eq!(store.preferences(&bob).unwrap().len(), 1);
}
