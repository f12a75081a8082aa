//! History record conversion functions.

use crate::api::records::{ApiGroomingRecord, ApiMedicalRecord, ApiVaccination};
use crate::types::{GroomingRecord, MedicalRecord, Vaccination};

pub(crate) fn convert_medical_record(record: ApiMedicalRecord) -> MedicalRecord {
    MedicalRecord {
        id: record.id,
        pet_id: record.pet_id,
        visit_date: record.visit_date,
        diagnosis: record.diagnosis,
        treatment: record.treatment,
        vet_name: record.vet_name,
        cost: record.cost,
    }
}

pub(crate) fn convert_vaccination(record: ApiVaccination) -> Vaccination {
    Vaccination {
        id: record.id,
        pet_id: record.pet_id,
        administered_on: record.administered_on,
        vaccine: record.vaccine,
        batch: record.batch,
        next_due: record.next_due,
        cost: record.cost,
    }
}

pub(crate) fn convert_grooming_record(record: ApiGroomingRecord) -> GroomingRecord {
    GroomingRecord {
        id: record.id,
        pet_id: record.pet_id,
        session_date: record.session_date,
        services_performed: record.services_performed,
        groomer: record.groomer,
        notes: record.notes,
        cost: record.cost,
    }
}
