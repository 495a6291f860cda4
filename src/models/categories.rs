//! Enumerated attribute values
//!
//! Every categorical column of the dataset draws from one of these closed
//! lists. Each enum exposes its variants in declaration order through `ALL`
//! and its spreadsheet label through `as_str`.

use std::fmt;

/// Declare a closed category with a fixed display label per variant
macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Label written to the tables
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

category! {
    /// Hospital department a doctor works in
    DepartmentName {
        Cardiology => "Cardiology",
        Neurology => "Neurology",
        Pediatrics => "Pediatrics",
        Orthopedics => "Orthopedics",
        GeneralMedicine => "General Medicine",
    }
}

category! {
    /// Patient gender
    Gender {
        Male => "Male",
        Female => "Female",
    }
}

category! {
    /// Outcome of an appointment
    AppointmentStatus {
        Completed => "Completed",
        Cancelled => "Cancelled",
        NoShow => "No-show",
    }
}

category! {
    /// Whether the appointment took place in person
    AppointmentMode {
        Physical => "Physical",
        Virtual => "Virtual",
    }
}

category! {
    /// Diagnosis recorded at a visit
    Diagnosis {
        Flu => "Flu",
        Asthma => "Asthma",
        Diabetes => "Diabetes",
        Hypertension => "Hypertension",
        Fracture => "Fracture",
        Migraine => "Migraine",
    }
}

category! {
    /// Treatment prescribed at a visit
    Prescription {
        Paracetamol => "Paracetamol",
        Ibuprofen => "Ibuprofen",
        Insulin => "Insulin",
        Amoxicillin => "Amoxicillin",
        Rest => "Rest",
        Physiotherapy => "Physiotherapy",
    }
}

category! {
    /// Payment state of a bill
    PaymentStatus {
        Paid => "Paid",
        Unpaid => "Unpaid",
        Pending => "Pending",
    }
}

category! {
    /// Whether insurance covered a bill
    InsuranceUsed {
        Yes => "Yes",
        No => "No",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(AppointmentStatus::NoShow.as_str(), "No-show");
        assert_eq!(DepartmentName::GeneralMedicine.to_string(), "General Medicine");
        assert_eq!(Diagnosis::ALL.len(), 6);
        assert_eq!(Prescription::ALL.len(), 6);
        assert_eq!(DepartmentName::ALL[0], DepartmentName::Cardiology);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&AppointmentStatus::NoShow).unwrap();
        assert_eq!(json, "\"No-show\"");
    }
}
