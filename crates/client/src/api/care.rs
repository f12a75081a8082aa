//! Care service catalog repository.
//!
//! Services are the bookable offerings (grooming, checkups, training).
//! The catalog is small and changes rarely, but the admin console edits it,
//! so reads stay uncached and always reflect the backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use pawmart_core::ServiceId;

use crate::error::ApiResult;
use crate::types::{CareService, CareServiceDraft};

use super::conversions::care::convert_care_service;
use super::{ApiClient, ListEnvelope};

// =============================================================================
// Transport shapes
// =============================================================================

/// A care service as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiCareService {
    pub id: ServiceId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub duration_minutes: u32,
    #[serde(default = "default_true")]
    pub active: bool,
}

const fn default_true() -> bool {
    true
}

/// Whitelisted service fields sent on create/update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CareServicePayload<'a> {
    title: &'a str,
    description: &'a str,
    price: Decimal,
    duration_minutes: u32,
    active: bool,
}

impl<'a> CareServicePayload<'a> {
    fn new(draft: &'a CareServiceDraft) -> Self {
        Self {
            title: &draft.title,
            description: &draft.description,
            price: draft.price,
            duration_minutes: draft.duration_minutes,
            active: draft.active,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for the care service catalog.
#[derive(Clone)]
pub struct CareServicesRepo {
    api: ApiClient,
}

impl CareServicesRepo {
    /// Create a care services repository.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List all services.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_services(&self) -> ApiResult<Vec<CareService>> {
        let envelope: ListEnvelope<ApiCareService> = self.api.get_json("services", &[]).await?;
        let (items, _, _) = envelope.into_page(u32::MAX);
        Ok(items.into_iter().map(convert_care_service).collect())
    }

    /// Get a service by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is not found or the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_service(&self, id: ServiceId) -> ApiResult<CareService> {
        let service: ApiCareService = self.api.get_json(&format!("services/{id}"), &[]).await?;
        Ok(convert_care_service(service))
    }

    /// Create a service.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_service(&self, draft: &CareServiceDraft) -> ApiResult<CareService> {
        let service: ApiCareService = self
            .api
            .post_json("services", &CareServicePayload::new(draft))
            .await?;
        Ok(convert_care_service(service))
    }

    /// Update a service.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, draft), fields(id = %id))]
    pub async fn update_service(
        &self,
        id: ServiceId,
        draft: &CareServiceDraft,
    ) -> ApiResult<CareService> {
        let service: ApiCareService = self
            .api
            .patch_json(&format!("services/{id}"), &CareServicePayload::new(draft))
            .await?;
        Ok(convert_care_service(service))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_service_deserializes_backend_shape() {
        let service: ApiCareService = serde_json::from_str(
            r#"{
                "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                "title": "Full Groom",
                "description": "Bath, cut, nails",
                "price": 55,
                "durationMinutes": 90
            }"#,
        )
        .unwrap();

        assert_eq!(service.title, "Full Groom");
        assert_eq!(service.duration_minutes, 90);
        assert!(service.active, "active defaults to true");
    }
}
