//! Tests for the relational aggregations on generated data

use hospital_dashboard::Aggregates;
use hospital_dashboard::utils::arrow::float64_values;

use crate::utils::generated_tables;

#[test]
fn test_doctor_appointments_cover_all_appointments() {
    let tables = generated_tables(42).unwrap();
    let aggregates = Aggregates::compute(&tables).unwrap();

    let rows = &aggregates.doctor_appointments;
    assert_eq!(rows.iter().map(|r| r.total_appointments).sum::<i64>(), 100);
    assert!(rows.windows(2).all(|w| w[0].doctor_id < w[1].doctor_id));
    assert!(rows.iter().all(|r| r.total_appointments > 0));
}

#[test]
fn test_revenue_matches_billing_total() {
    let tables = generated_tables(42).unwrap();
    let aggregates = Aggregates::compute(&tables).unwrap();

    // every bill belongs to an appointment whose doctor exists
    let billed: f64 = float64_values(&tables.billing, "Amount").unwrap().iter().sum();
    let revenue: f64 = aggregates
        .revenue_by_department
        .iter()
        .map(|r| r.total_revenue)
        .sum();
    assert!((billed - revenue).abs() < 1e-6);
    assert!(
        aggregates
            .revenue_by_department
            .windows(2)
            .all(|w| w[0].department < w[1].department)
    );
}

#[test]
fn test_diagnosis_counts_cover_all_visits() {
    let tables = generated_tables(42).unwrap();
    let aggregates = Aggregates::compute(&tables).unwrap();

    let rows = &aggregates.diagnosis_by_doctor;
    assert_eq!(rows.iter().map(|r| r.diagnosis_count).sum::<i64>(), 80);
    assert!(
        rows.windows(2)
            .all(|w| (&w[0].name, &w[0].diagnosis) < (&w[1].name, &w[1].diagnosis))
    );
}

#[test]
fn test_aggregate_sheets_row_counts() {
    let tables = generated_tables(11).unwrap();
    let aggregates = Aggregates::compute(&tables).unwrap();
    let sheets = aggregates.sheets().unwrap();

    assert_eq!(sheets[0].1.num_rows(), aggregates.doctor_appointments.len());
    assert_eq!(sheets[1].1.num_rows(), aggregates.revenue_by_department.len());
    assert_eq!(sheets[2].1.num_rows(), aggregates.diagnosis_by_doctor.len());
}
