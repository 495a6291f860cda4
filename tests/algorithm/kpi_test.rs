//! Tests for KPI calculation on generated data

use hospital_dashboard::KpiCalculator;
use hospital_dashboard::algorithm::kpi::KpiValue;
use hospital_dashboard::utils::arrow::float64_values;

use crate::utils::generated_tables;

#[test]
fn test_totals_match_table_sizes() {
    let tables = generated_tables(42).unwrap();
    let report = KpiCalculator::default().calculate(&tables).unwrap();

    assert_eq!(report.total_patients, 50);
    assert_eq!(report.total_doctors, 10);
    assert_eq!(report.total_appointments, 100);
    assert_eq!(report.total_departments, 5);
    assert_eq!(
        report.appointment_status_counts.iter().map(|(_, n)| n).sum::<usize>(),
        100
    );
}

#[test]
fn test_billing_statistics() {
    let tables = generated_tables(42).unwrap();
    let report = KpiCalculator::default().calculate(&tables).unwrap();
    let amounts = float64_values(&tables.billing, "Amount").unwrap();

    let total: f64 = amounts.iter().sum();
    assert!((report.total_billed_amount - total).abs() < 1e-6);
    assert!((report.average_bill_amount - total / 90.0).abs() < 1e-6);
    assert!((500.0..=5000.0).contains(&report.average_bill_amount));

    let share_sum: f64 = report.insurance_usage.iter().map(|(_, share)| share).sum();
    assert!((share_sum - 1.0).abs() <= 0.011);
}

#[test]
fn test_top_diagnoses_ordering() {
    let tables = generated_tables(42).unwrap();
    let report = KpiCalculator::default().calculate(&tables).unwrap();

    assert!(!report.top_diagnoses.is_empty() && report.top_diagnoses.len() <= 3);
    assert!(report.top_diagnoses.windows(2).all(|w| w[0].1 >= w[1].1));

    let rows = report.summary_rows();
    assert_eq!(rows.len(), 9);
    assert_eq!(
        rows[8].value,
        KpiValue::Text(report.top_diagnoses[0].0.clone())
    );
}

#[test]
fn test_wider_top_list() {
    let tables = generated_tables(42).unwrap();
    let report = KpiCalculator::new(10).calculate(&tables).unwrap();
    // six diagnoses exist, 80 visits draw from them
    assert!(report.top_diagnoses.len() <= 6);
    assert_eq!(report.top_diagnoses.iter().map(|(_, n)| n).sum::<usize>(), 80);
}
