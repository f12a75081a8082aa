//! Domain types returned by the repositories.
//!
//! These are the display-ready shapes: image URLs are absolute, prices carry
//! a currency. The transport shapes live next to the repositories and are
//! converted through [`crate::api::conversions`].

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pawmart_core::{
    AppointmentId, AppointmentStatus, Email, PetGender, PetId, Price, ProductId, ProductKind,
    ProductSize, RecordId, ServiceId, Species, Temperament, UserId, UserRole,
};

// =============================================================================
// Users
// =============================================================================

/// An authenticated backend user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub full_name: String,
    /// Deactivated accounts keep their data but cannot sign in.
    pub is_active: bool,
    pub roles: Vec<UserRole>,
}

/// A user plus the bearer token the backend issued for them.
///
/// The token is what the [`crate::token`] store persists; everything else
/// lives only in memory.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: secrecy::SecretString,
}

// =============================================================================
// Products
// =============================================================================

/// A shop product in domain form.
///
/// `images` holds absolute URLs; the transport form carries bare filenames
/// and the conversion layer is the single authority for the mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub slug: String,
    pub price: Price,
    pub stock: u32,
    pub sizes: Vec<ProductSize>,
    pub kind: ProductKind,
    /// Species the product targets; `None` for species-agnostic items.
    pub species: Option<Species>,
    pub tags: Vec<String>,
    /// Absolute image URLs.
    pub images: Vec<String>,
    /// User who created the product, when the backend reports one.
    pub owner: Option<UserId>,
}

impl Product {
    /// An empty draft product, synthesized for the `"new"` route sentinel
    /// without touching the backend.
    #[must_use]
    pub fn draft() -> Self {
        Self {
            id: ProductId::new(uuid::Uuid::nil()),
            title: String::new(),
            slug: String::new(),
            price: Price::from_cents(0, pawmart_core::CurrencyCode::USD),
            stock: 0,
            sizes: Vec::new(),
            kind: ProductKind::Food,
            species: None,
            tags: Vec::new(),
            images: Vec::new(),
            owner: None,
        }
    }
}

/// One page of products plus paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub pages: u32,
}

/// Editable product fields sent on create/update.
///
/// This is the whitelist: anything not present here never reaches the
/// backend. `images` holds the kept images as the caller has them
/// (absolute URLs or bare filenames); the repository reduces them to
/// filenames before sending.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub title: String,
    pub slug: String,
    pub price: Decimal,
    pub stock: u32,
    pub sizes: Vec<ProductSize>,
    pub kind: Option<ProductKind>,
    pub species: Option<Species>,
    pub tags: Vec<String>,
    pub images: Vec<String>,
}

// =============================================================================
// Pets
// =============================================================================

/// A customer's pet profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: Species,
    pub gender: PetGender,
    pub temperament: Temperament,
    pub birth_date: NaiveDate,
    pub breed: Option<String>,
    pub weight_kg: Option<Decimal>,
    /// Free-text notes for groomers and vets; at most five.
    pub behavior_notes: Vec<String>,
    pub owner: UserId,
}

/// One page of pets plus paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetPage {
    pub pets: Vec<Pet>,
    pub total: u64,
    pub pages: u32,
}

/// Editable pet fields sent on create/update.
#[derive(Debug, Clone, PartialEq)]
pub struct PetDraft {
    pub name: String,
    pub species: Species,
    pub gender: PetGender,
    pub temperament: Temperament,
    pub birth_date: NaiveDate,
    pub breed: Option<String>,
    pub weight_kg: Option<Decimal>,
    pub behavior_notes: Vec<String>,
}

// =============================================================================
// History records (append-only, scoped to a pet)
// =============================================================================

/// A veterinary visit entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: RecordId,
    pub pet_id: PetId,
    pub visit_date: NaiveDate,
    pub diagnosis: String,
    pub treatment: String,
    pub vet_name: Option<String>,
    pub cost: Option<Decimal>,
}

/// Fields for a new veterinary visit entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedicalRecord {
    pub visit_date: NaiveDate,
    pub diagnosis: String,
    pub treatment: String,
    pub vet_name: Option<String>,
    pub cost: Option<Decimal>,
}

/// A vaccination entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vaccination {
    pub id: RecordId,
    pub pet_id: PetId,
    pub administered_on: NaiveDate,
    pub vaccine: String,
    pub batch: Option<String>,
    pub next_due: Option<NaiveDate>,
    pub cost: Option<Decimal>,
}

/// Fields for a new vaccination entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVaccination {
    pub administered_on: NaiveDate,
    pub vaccine: String,
    pub batch: Option<String>,
    pub next_due: Option<NaiveDate>,
    pub cost: Option<Decimal>,
}

/// A grooming session entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroomingRecord {
    pub id: RecordId,
    pub pet_id: PetId,
    pub session_date: NaiveDate,
    pub services_performed: String,
    pub groomer: Option<String>,
    pub notes: Option<String>,
    pub cost: Option<Decimal>,
}

/// Fields for a new grooming session entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGroomingRecord {
    pub session_date: NaiveDate,
    pub services_performed: String,
    pub groomer: Option<String>,
    pub notes: Option<String>,
    pub cost: Option<Decimal>,
}

// =============================================================================
// Services & appointments
// =============================================================================

/// A bookable care service (grooming, checkup, training, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareService {
    pub id: ServiceId,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub duration_minutes: u32,
    pub active: bool,
}

/// Editable service fields sent on create/update.
#[derive(Debug, Clone, PartialEq)]
pub struct CareServiceDraft {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub duration_minutes: u32,
    pub active: bool,
}

/// A booked appointment for a pet and a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub pet_id: PetId,
    pub service_id: ServiceId,
    pub scheduled_for: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

/// Fields for booking a new appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentRequest {
    pub pet_id: PetId,
    pub service_id: ServiceId,
    pub scheduled_for: DateTime<Utc>,
    pub notes: Option<String>,
}
