//! Tests for dataset generation

use std::path::Path;

use hospital_dashboard::HospitalData;
use hospital_dashboard::utils::arrow::{extract_date32, string_values};
use rustc_hash::FxHashSet;

use crate::utils::{generated_tables, int_column, reference_date, test_config};

#[test]
fn test_same_seed_same_dataset() {
    let config = test_config(Path::new("."));
    let first = HospitalData::generate(&config).unwrap();
    let second = HospitalData::generate(&config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_different_seed_different_dataset() {
    let config = test_config(Path::new("."));
    let other = hospital_dashboard::SimulationConfig {
        seed: 7,
        ..config.clone()
    };
    let first = HospitalData::generate(&config).unwrap();
    let second = HospitalData::generate(&other).unwrap();
    assert_ne!(first.patients, second.patients);
    assert_ne!(first.bills, second.bills);
}

#[test]
fn test_key_columns_are_sequential() {
    let tables = generated_tables(42).unwrap();
    let expected = [
        (&tables.departments, "Department_ID", 5),
        (&tables.doctors, "Doctor_ID", 10),
        (&tables.patients, "Patient_ID", 50),
        (&tables.appointments, "Appointment_ID", 100),
        (&tables.visits, "Visit_ID", 80),
        (&tables.billing, "Bill_ID", 90),
    ];
    for (batch, column, n) in expected {
        assert_eq!(int_column(batch, column), (1..=n).collect::<Vec<i64>>(), "{column}");
    }
}

#[test]
fn test_visits_and_bills_reference_distinct_appointments() {
    let tables = generated_tables(42).unwrap();
    let appointments: FxHashSet<i64> = int_column(&tables.appointments, "Appointment_ID")
        .into_iter()
        .collect();

    for batch in [&tables.visits, &tables.billing] {
        let refs = int_column(batch, "Appointment_ID");
        let distinct: FxHashSet<i64> = refs.iter().copied().collect();
        assert_eq!(distinct.len(), refs.len());
        assert!(distinct.is_subset(&appointments));
    }
}

#[test]
fn test_foreign_keys_resolve() {
    let tables = generated_tables(3).unwrap();
    assert!(int_column(&tables.appointments, "Patient_ID").iter().all(|id| (1..=50).contains(id)));
    assert!(int_column(&tables.appointments, "Doctor_ID").iter().all(|id| (1..=10).contains(id)));
}

#[test]
fn test_dates_and_categories() {
    let tables = generated_tables(42).unwrap();
    let today = reference_date();

    let registered = extract_date32(&tables.patients, "Date_Registered").unwrap();
    assert!(registered.iter().flatten().all(|d| *d <= today && (today - *d).num_days() <= 730));

    let statuses = string_values(&tables.appointments, "Status").unwrap();
    assert!(statuses.iter().all(|s| ["Completed", "Cancelled", "No-show"].contains(s)));

    let departments = string_values(&tables.departments, "Department_Name").unwrap();
    assert_eq!(departments.len(), 5);
}
