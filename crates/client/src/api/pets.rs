//! Pets repository.

use chrono::NaiveDate;
use moka::future::Cache;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use pawmart_core::{PetGender, PetId, Species, Temperament, UserId};

use crate::error::{ApiError, ApiResult};
use crate::services::filters::paginate;
use crate::services::validation::validate_pet_draft;
use crate::types::{Pet, PetDraft, PetPage};

use super::cache::{CacheProfile, CacheValue, build_cache};
use super::conversions::pets::convert_pet;
use super::{ApiClient, ListEnvelope};

/// Default page size for pet listings.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Filter for pet listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetFilter {
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub limit: u32,
}

impl Default for PetFilter {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

// =============================================================================
// Transport shapes
// =============================================================================

/// A pet as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiPet {
    pub id: PetId,
    pub name: String,
    pub species: Species,
    pub gender: PetGender,
    pub temperament: Temperament,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<Decimal>,
    #[serde(default)]
    pub behavior_notes: Vec<String>,
    pub owner_id: UserId,
}

/// Whitelisted pet fields sent on create/update. The owner is inferred by
/// the backend from the bearer token and never sent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PetPayload<'a> {
    name: &'a str,
    species: Species,
    gender: PetGender,
    temperament: Temperament,
    birth_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    breed: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight_kg: Option<Decimal>,
    behavior_notes: &'a [String],
}

impl<'a> PetPayload<'a> {
    fn new(draft: &'a PetDraft) -> Self {
        Self {
            name: &draft.name,
            species: draft.species,
            gender: draft.gender,
            temperament: draft.temperament,
            birth_date: draft.birth_date,
            breed: draft.breed.as_deref(),
            weight_kg: draft.weight_kg,
            behavior_notes: &draft.behavior_notes,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for pet profiles.
#[derive(Clone)]
pub struct PetsRepo {
    api: ApiClient,
    cache: Cache<String, CacheValue>,
}

impl PetsRepo {
    /// Create a pets repository with the given cache profile.
    #[must_use]
    pub fn new(api: ApiClient, profile: CacheProfile) -> Self {
        Self {
            api,
            cache: build_cache(profile),
        }
    }

    /// Get one page of pets.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_pets(&self, filter: &PetFilter) -> ApiResult<PetPage> {
        let cache_key = format!("pets:{}:{}", filter.page, filter.limit);

        if let Some(CacheValue::PetPage(page)) = self.cache.get(&cache_key).await {
            debug!("cache hit for pets");
            return Ok(page);
        }

        let pagination = paginate(filter.page, filter.limit);
        let query = [
            ("offset", pagination.offset.to_string()),
            ("limit", pagination.limit.to_string()),
        ];
        let envelope: ListEnvelope<ApiPet> = self.api.get_json("pets", &query).await?;
        let (items, total, pages) = envelope.into_page(filter.limit);

        let page = PetPage {
            pets: items.into_iter().map(convert_pet).collect(),
            total,
            pages,
        };

        self.cache
            .insert(cache_key, CacheValue::PetPage(page.clone()))
            .await;

        Ok(page)
    }

    /// Get a pet by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the pet is not found or the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_pet(&self, id: PetId) -> ApiResult<Pet> {
        let cache_key = format!("pet:{id}");
        if let Some(CacheValue::Pet(pet)) = self.cache.get(&cache_key).await {
            debug!("cache hit for pet");
            return Ok(*pet);
        }

        let api_pet: ApiPet = self.api.get_json(&format!("pets/{id}"), &[]).await?;
        let pet = convert_pet(api_pet);

        self.cache
            .insert(cache_key, CacheValue::Pet(Box::new(pet.clone())))
            .await;

        Ok(pet)
    }

    /// Create a pet profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` before any request when the draft is
    /// invalid; otherwise an error if the request fails.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_pet(&self, draft: &PetDraft) -> ApiResult<Pet> {
        self.validate(draft)?;

        let api_pet: ApiPet = self.api.post_json("pets", &PetPayload::new(draft)).await?;
        self.invalidate_all().await;

        Ok(convert_pet(api_pet))
    }

    /// Update a pet profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` before any request when the draft is
    /// invalid; otherwise an error if the request fails.
    #[instrument(skip(self, draft), fields(id = %id))]
    pub async fn update_pet(&self, id: PetId, draft: &PetDraft) -> ApiResult<Pet> {
        self.validate(draft)?;

        let api_pet: ApiPet = self
            .api
            .patch_json(&format!("pets/{id}"), &PetPayload::new(draft))
            .await?;
        self.invalidate_all().await;

        Ok(convert_pet(api_pet))
    }

    /// Delete a pet profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_pet(&self, id: PetId) -> ApiResult<()> {
        self.api.delete(&format!("pets/{id}")).await?;
        self.invalidate_all().await;
        Ok(())
    }

    fn validate(&self, draft: &PetDraft) -> ApiResult<()> {
        let problems = validate_pet_draft(draft);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(problems))
        }
    }

    /// Drop every cached pet entry.
    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_pet_deserializes_backend_shape() {
        let pet: ApiPet = serde_json::from_str(
            r#"{
                "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                "name": "Biscuit",
                "species": "dog",
                "gender": "female",
                "temperament": "playful",
                "birthDate": "2021-04-12",
                "breed": "Beagle",
                "weightKg": 11.3,
                "behaviorNotes": ["pulls on leash"],
                "ownerId": "7c9e6679-7425-40de-944b-e07fc1f90ae7"
            }"#,
        )
        .unwrap();

        assert_eq!(pet.name, "Biscuit");
        assert_eq!(pet.species, Species::Dog);
        assert_eq!(pet.behavior_notes, vec!["pulls on leash"]);
    }

    #[test]
    fn test_pet_payload_never_sends_owner() {
        let draft = PetDraft {
            name: "Biscuit".to_owned(),
            species: Species::Dog,
            gender: PetGender::Female,
            temperament: Temperament::Playful,
            birth_date: NaiveDate::from_ymd_opt(2021, 4, 12).unwrap(),
            breed: None,
            weight_kg: None,
            behavior_notes: vec![],
        };

        let value = serde_json::to_value(PetPayload::new(&draft)).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("ownerId"));
        assert!(!object.contains_key("id"));
        // absent optionals are omitted entirely
        assert!(!object.contains_key("breed"));
        assert!(object.contains_key("birthDate"));
    }
}
