//! Domain models for the hospital dataset
//!
//! One row type per table, plus the closed category lists their attributes
//! draw from.

pub mod appointment;
pub mod billing;
pub mod categories;
pub mod department;
pub mod doctor;
pub mod patient;
pub mod traits;
pub mod visit;

pub use appointment::Appointment;
pub use billing::Bill;
pub use categories::{
    AppointmentMode, AppointmentStatus, DepartmentName, Diagnosis, Gender, InsuranceUsed,
    PaymentStatus, Prescription,
};
pub use department::Department;
pub use doctor::Doctor;
pub use patient::Patient;
pub use traits::TableRecord;
pub use visit::Visit;
