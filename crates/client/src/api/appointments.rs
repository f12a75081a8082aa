//! Appointments repository.
//!
//! Appointments are mutable bookings, so nothing here is cached - every
//! read reflects the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use pawmart_core::{AppointmentId, AppointmentStatus, PetId, ServiceId};

use crate::error::ApiResult;
use crate::types::{Appointment, AppointmentRequest};

use super::ApiClient;
use super::conversions::care::convert_appointment;

// =============================================================================
// Transport shapes
// =============================================================================

/// An appointment as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiAppointment {
    pub id: AppointmentId,
    pub pet_id: PetId,
    pub service_id: ServiceId,
    pub scheduled_for: DateTime<Utc>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingPayload<'a> {
    pet_id: PetId,
    service_id: ServiceId,
    scheduled_for: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct StatusPayload {
    status: AppointmentStatus,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for appointment bookings.
#[derive(Clone)]
pub struct AppointmentsRepo {
    api: ApiClient,
}

impl AppointmentsRepo {
    /// Create an appointments repository.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List appointments for a pet.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(pet = %pet))]
    pub async fn list_for_pet(&self, pet: PetId) -> ApiResult<Vec<Appointment>> {
        let appointments: Vec<ApiAppointment> = self
            .api
            .get_json("appointments", &[("pet", pet.to_string())])
            .await?;
        Ok(appointments.into_iter().map(convert_appointment).collect())
    }

    /// Book an appointment.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, request), fields(pet = %request.pet_id, service = %request.service_id))]
    pub async fn book(&self, request: &AppointmentRequest) -> ApiResult<Appointment> {
        let payload = BookingPayload {
            pet_id: request.pet_id,
            service_id: request.service_id,
            scheduled_for: request.scheduled_for,
            notes: request.notes.as_deref(),
        };
        let appointment: ApiAppointment = self.api.post_json("appointments", &payload).await?;
        Ok(convert_appointment(appointment))
    }

    /// Cancel an appointment (status transition, not deletion).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn cancel(&self, id: AppointmentId) -> ApiResult<Appointment> {
        let payload = StatusPayload {
            status: AppointmentStatus::Cancelled,
        };
        let appointment: ApiAppointment = self
            .api
            .patch_json(&format!("appointments/{id}"), &payload)
            .await?;
        Ok(convert_appointment(appointment))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_appointment_deserializes_backend_shape() {
        let appointment: ApiAppointment = serde_json::from_str(
            r#"{
                "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                "petId": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "serviceId": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "scheduledFor": "2025-03-10T14:30:00Z",
                "status": "confirmed",
                "notes": "first visit"
            }"#,
        )
        .unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
        assert_eq!(appointment.notes.as_deref(), Some("first visit"));
    }

    #[test]
    fn test_status_defaults_to_pending() {
        let appointment: ApiAppointment = serde_json::from_str(
            r#"{
                "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                "petId": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "serviceId": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "scheduledFor": "2025-03-10T14:30:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Pending);
    }

    #[test]
    fn test_cancel_payload_is_a_status_transition() {
        let value = serde_json::to_value(StatusPayload {
            status: AppointmentStatus::Cancelled,
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({"status": "cancelled"}));
    }
}
