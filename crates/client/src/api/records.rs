//! Pet history repositories: medical visits, vaccinations, grooming
//! sessions.
//!
//! Histories are append-only: entries can be listed and created, never
//! updated or deleted. Reads are not cached - the console always wants the
//! freshest history for the pet it is looking at.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use pawmart_core::{PetId, RecordId};

use crate::error::ApiResult;
use crate::types::{
    GroomingRecord, MedicalRecord, NewGroomingRecord, NewMedicalRecord, NewVaccination,
    Vaccination,
};

use super::ApiClient;
use super::conversions::records::{
    convert_grooming_record, convert_medical_record, convert_vaccination,
};

// =============================================================================
// Transport shapes
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiMedicalRecord {
    pub id: RecordId,
    pub pet_id: PetId,
    pub visit_date: NaiveDate,
    pub diagnosis: String,
    pub treatment: String,
    #[serde(default)]
    pub vet_name: Option<String>,
    #[serde(default)]
    pub cost: Option<Decimal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MedicalRecordPayload<'a> {
    pet_id: PetId,
    visit_date: NaiveDate,
    diagnosis: &'a str,
    treatment: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    vet_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiVaccination {
    pub id: RecordId,
    pub pet_id: PetId,
    pub administered_on: NaiveDate,
    pub vaccine: String,
    #[serde(default)]
    pub batch: Option<String>,
    #[serde(default)]
    pub next_due: Option<NaiveDate>,
    #[serde(default)]
    pub cost: Option<Decimal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VaccinationPayload<'a> {
    pet_id: PetId,
    administered_on: NaiveDate,
    vaccine: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    batch: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_due: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiGroomingRecord {
    pub id: RecordId,
    pub pet_id: PetId,
    pub session_date: NaiveDate,
    pub services_performed: String,
    #[serde(default)]
    pub groomer: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub cost: Option<Decimal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GroomingRecordPayload<'a> {
    pet_id: PetId,
    session_date: NaiveDate,
    services_performed: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    groomer: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<Decimal>,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for a pet's history records.
#[derive(Clone)]
pub struct RecordsRepo {
    api: ApiClient,
}

impl RecordsRepo {
    /// Create a records repository.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List a pet's medical visits.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(pet = %pet))]
    pub async fn medical_history(&self, pet: PetId) -> ApiResult<Vec<MedicalRecord>> {
        let records: Vec<ApiMedicalRecord> = self
            .api
            .get_json("medical", &[("pet", pet.to_string())])
            .await?;
        Ok(records.into_iter().map(convert_medical_record).collect())
    }

    /// Append a medical visit to a pet's history.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, entry), fields(pet = %pet))]
    pub async fn add_medical(
        &self,
        pet: PetId,
        entry: &NewMedicalRecord,
    ) -> ApiResult<MedicalRecord> {
        let payload = MedicalRecordPayload {
            pet_id: pet,
            visit_date: entry.visit_date,
            diagnosis: &entry.diagnosis,
            treatment: &entry.treatment,
            vet_name: entry.vet_name.as_deref(),
            cost: entry.cost,
        };
        let record: ApiMedicalRecord = self.api.post_json("medical", &payload).await?;
        Ok(convert_medical_record(record))
    }

    /// List a pet's vaccinations.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(pet = %pet))]
    pub async fn vaccinations(&self, pet: PetId) -> ApiResult<Vec<Vaccination>> {
        let records: Vec<ApiVaccination> = self
            .api
            .get_json("vaccination", &[("pet", pet.to_string())])
            .await?;
        Ok(records.into_iter().map(convert_vaccination).collect())
    }

    /// Append a vaccination to a pet's history.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, entry), fields(pet = %pet))]
    pub async fn add_vaccination(
        &self,
        pet: PetId,
        entry: &NewVaccination,
    ) -> ApiResult<Vaccination> {
        let payload = VaccinationPayload {
            pet_id: pet,
            administered_on: entry.administered_on,
            vaccine: &entry.vaccine,
            batch: entry.batch.as_deref(),
            next_due: entry.next_due,
            cost: entry.cost,
        };
        let record: ApiVaccination = self.api.post_json("vaccination", &payload).await?;
        Ok(convert_vaccination(record))
    }

    /// List a pet's grooming sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(pet = %pet))]
    pub async fn grooming_history(&self, pet: PetId) -> ApiResult<Vec<GroomingRecord>> {
        let records: Vec<ApiGroomingRecord> = self
            .api
            .get_json("grooming", &[("pet", pet.to_string())])
            .await?;
        Ok(records.into_iter().map(convert_grooming_record).collect())
    }

    /// Append a grooming session to a pet's history.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, entry), fields(pet = %pet))]
    pub async fn add_grooming(
        &self,
        pet: PetId,
        entry: &NewGroomingRecord,
    ) -> ApiResult<GroomingRecord> {
        let payload = GroomingRecordPayload {
            pet_id: pet,
            session_date: entry.session_date,
            services_performed: &entry.services_performed,
            groomer: entry.groomer.as_deref(),
            notes: entry.notes.as_deref(),
            cost: entry.cost,
        };
        let record: ApiGroomingRecord = self.api.post_json("grooming", &payload).await?;
        Ok(convert_grooming_record(record))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_medical_record_deserializes_backend_shape() {
        let record: ApiMedicalRecord = serde_json::from_str(
            r#"{
                "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                "petId": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "visitDate": "2024-11-02",
                "diagnosis": "ear infection",
                "treatment": "drops, 10 days",
                "cost": 85.0
            }"#,
        )
        .unwrap();

        assert_eq!(record.diagnosis, "ear infection");
        assert!(record.vet_name.is_none());
        assert_eq!(record.cost, Some(Decimal::new(850, 1)));
    }

    #[test]
    fn test_vaccination_payload_omits_absent_optionals() {
        let payload = VaccinationPayload {
            pet_id: PetId::random(),
            administered_on: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            vaccine: "rabies",
            batch: None,
            next_due: None,
            cost: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("petId"));
        assert!(object.contains_key("administeredOn"));
        assert!(!object.contains_key("batch"));
        assert!(!object.contains_key("nextDue"));
        assert!(!object.contains_key("cost"));
    }
}
