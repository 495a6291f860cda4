//! Synthetic hospital dataset generation
//!
//! `HospitalGenerator` builds the six tables in dependency order
//! (departments, doctors, patients, appointments, visits, bills) from a
//! `SimulationConfig`. All randomness comes from `RandomSources`, so a given
//! seed and reference date always produce the same rows.

pub mod fields;

use fake::Fake;
use fake::faker::job::en::Title;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::models::{
    Appointment, AppointmentMode, AppointmentStatus, Bill, Department, DepartmentName,
    Diagnosis, Doctor, Gender, InsuranceUsed, Patient, PaymentStatus, Prescription, Visit,
};
use crate::random::RandomSources;
use crate::tables::HospitalTables;

use fields::{amount_between, date_within, int_between, pick, sample_without_replacement, time_of_day};

/// Age range of generated patients
pub const PATIENT_AGE: std::ops::RangeInclusive<u32> = 1..=90;

/// Experience range of generated doctors, in years
pub const DOCTOR_EXPERIENCE: std::ops::RangeInclusive<u32> = 1..=30;

/// The generated dataset as typed rows
#[derive(Debug, Clone, PartialEq)]
pub struct HospitalData {
    pub departments: Vec<Department>,
    pub doctors: Vec<Doctor>,
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub visits: Vec<Visit>,
    pub bills: Vec<Bill>,
}

impl HospitalData {
    /// Generate a dataset with the given configuration
    pub fn generate(config: &SimulationConfig) -> Result<Self> {
        HospitalGenerator::new(config).generate()
    }

    /// Convert the rows into Arrow tables
    pub fn to_tables(&self) -> Result<HospitalTables> {
        HospitalTables::from_data(self)
    }
}

/// Generator for the six hospital tables
#[derive(Debug)]
pub struct HospitalGenerator<'a> {
    config: &'a SimulationConfig,
    rng: RandomSources,
}

impl<'a> HospitalGenerator<'a> {
    /// Create a generator seeded from the configuration
    #[must_use]
    pub fn new(config: &'a SimulationConfig) -> Self {
        Self {
            config,
            rng: RandomSources::from_seed(config.seed),
        }
    }

    /// Generate all tables
    pub fn generate(mut self) -> Result<HospitalData> {
        self.config.validate()?;

        let departments = self.departments();
        let doctors = self.doctors();
        let patients = self.patients();
        let appointments = self.appointments(&patients, &doctors);
        let visits = self.visits(&appointments);
        let bills = self.bills(&appointments);

        log::debug!(
            "Generated {} departments, {} doctors, {} patients, {} appointments, {} visits, {} bills",
            departments.len(),
            doctors.len(),
            patients.len(),
            appointments.len(),
            visits.len(),
            bills.len()
        );

        Ok(HospitalData {
            departments,
            doctors,
            patients,
            appointments,
            visits,
            bills,
        })
    }

    fn departments(&self) -> Vec<Department> {
        DepartmentName::ALL
            .iter()
            .cycle()
            .take(self.config.sizes.departments)
            .zip(1..)
            .map(|(&name, department_id)| Department {
                department_id,
                name,
            })
            .collect()
    }

    fn doctors(&mut self) -> Vec<Doctor> {
        let count = self.config.sizes.doctors;
        let rng = &mut self.rng;

        let names: Vec<String> = (0..count).map(|_| Name().fake_with_rng(&mut rng.fake)).collect();
        let departments: Vec<DepartmentName> = (0..count)
            .map(|_| pick(&mut rng.general, DepartmentName::ALL))
            .collect();
        let specialties: Vec<String> =
            (0..count).map(|_| Title().fake_with_rng(&mut rng.fake)).collect();
        let experience: Vec<u32> = (0..count)
            .map(|_| int_between(&mut rng.general, DOCTOR_EXPERIENCE))
            .collect();

        itertools::izip!(1.., names, departments, specialties, experience)
            .map(
                |(doctor_id, name, department, specialty, years_experience)| Doctor {
                    doctor_id,
                    name,
                    department,
                    specialty,
                    years_experience,
                },
            )
            .collect()
    }

    fn patients(&mut self) -> Vec<Patient> {
        let count = self.config.sizes.patients;
        let today = self.config.reference_date;
        let window = self.config.registration_window_days;
        let rng = &mut self.rng;

        let names: Vec<String> = (0..count).map(|_| Name().fake_with_rng(&mut rng.fake)).collect();
        let ages: Vec<u32> = (0..count)
            .map(|_| int_between(&mut rng.general, PATIENT_AGE))
            .collect();
        let genders: Vec<Gender> = (0..count)
            .map(|_| pick(&mut rng.general, Gender::ALL))
            .collect();
        let contacts: Vec<String> = (0..count)
            .map(|_| PhoneNumber().fake_with_rng(&mut rng.fake))
            .collect();
        let registered: Vec<_> = (0..count)
            .map(|_| date_within(&mut rng.fake, today, window))
            .collect();

        itertools::izip!(1.., names, ages, genders, contacts, registered)
            .map(
                |(patient_id, name, age, gender, contact, date_registered)| Patient {
                    patient_id,
                    name,
                    age,
                    gender,
                    contact,
                    date_registered,
                },
            )
            .collect()
    }

    fn appointments(&mut self, patients: &[Patient], doctors: &[Doctor]) -> Vec<Appointment> {
        let count = self.config.sizes.appointments;
        let today = self.config.reference_date;
        let window = self.config.appointment_window_days;
        let rng = &mut self.rng;

        let patient_ids: Vec<u32> = patients.iter().map(|p| p.patient_id).collect();
        let doctor_ids: Vec<u32> = doctors.iter().map(|d| d.doctor_id).collect();

        let patient_picks: Vec<u32> = (0..count)
            .map(|_| pick(&mut rng.general, &patient_ids))
            .collect();
        let doctor_picks: Vec<u32> = (0..count)
            .map(|_| pick(&mut rng.general, &doctor_ids))
            .collect();
        let dates: Vec<_> = (0..count)
            .map(|_| date_within(&mut rng.fake, today, window))
            .collect();
        let times: Vec<_> = (0..count).map(|_| time_of_day(&mut rng.fake)).collect();
        let statuses: Vec<AppointmentStatus> = (0..count)
            .map(|_| pick(&mut rng.general, AppointmentStatus::ALL))
            .collect();
        let modes: Vec<AppointmentMode> = (0..count)
            .map(|_| pick(&mut rng.general, AppointmentMode::ALL))
            .collect();

        itertools::izip!(
            1..,
            patient_picks,
            doctor_picks,
            dates,
            times,
            statuses,
            modes
        )
        .map(
            |(appointment_id, patient_id, doctor_id, date, time, status, mode)| Appointment {
                appointment_id,
                patient_id,
                doctor_id,
                date,
                time,
                status,
                mode,
            },
        )
        .collect()
    }

    fn visits(&mut self, appointments: &[Appointment]) -> Vec<Visit> {
        let count = self.config.sizes.visits;
        let rng = &mut self.rng;

        let appointment_ids: Vec<u32> = appointments.iter().map(|a| a.appointment_id).collect();
        let sampled = sample_without_replacement(&mut rng.general, &appointment_ids, count);
        let diagnoses: Vec<Diagnosis> = (0..count)
            .map(|_| pick(&mut rng.general, Diagnosis::ALL))
            .collect();
        let prescriptions: Vec<Prescription> = (0..count)
            .map(|_| pick(&mut rng.general, Prescription::ALL))
            .collect();
        let notes: Vec<String> = (0..count)
            .map(|_| Sentence(3..10).fake_with_rng(&mut rng.fake))
            .collect();

        itertools::izip!(1.., sampled, diagnoses, prescriptions, notes)
            .map(
                |(visit_id, appointment_id, diagnosis, prescription, notes)| Visit {
                    visit_id,
                    appointment_id,
                    diagnosis,
                    prescription,
                    notes,
                },
            )
            .collect()
    }

    fn bills(&mut self, appointments: &[Appointment]) -> Vec<Bill> {
        let count = self.config.sizes.billing;
        let amount_range = self.config.amount_range.clone();
        let rng = &mut self.rng;

        let appointment_ids: Vec<u32> = appointments.iter().map(|a| a.appointment_id).collect();
        let sampled = sample_without_replacement(&mut rng.general, &appointment_ids, count);
        let amounts: Vec<f64> = (0..count)
            .map(|_| amount_between(&mut rng.numeric, amount_range.clone()))
            .collect();
        let payment_statuses: Vec<PaymentStatus> = (0..count)
            .map(|_| pick(&mut rng.general, PaymentStatus::ALL))
            .collect();
        let insurance: Vec<InsuranceUsed> = (0..count)
            .map(|_| pick(&mut rng.general, InsuranceUsed::ALL))
            .collect();

        itertools::izip!(1.., sampled, amounts, payment_statuses, insurance)
            .map(
                |(bill_id, appointment_id, amount, payment_status, insurance_used)| Bill {
                    bill_id,
                    appointment_id,
                    amount,
                    payment_status,
                    insurance_used,
                },
            )
            .collect()
    }
}
