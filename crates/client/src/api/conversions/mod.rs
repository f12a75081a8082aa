//! Mapping between transport and domain representations.
//!
//! All functions here are pure. The image-URL mappers are the single
//! authority for rewriting bare backend filenames into absolute URLs and
//! back; both directions are idempotent.

pub mod care;
pub mod pets;
pub mod products;
pub mod records;

pub use products::{image_url_to_api, image_url_to_domain, merge_image_filenames};

use pawmart_core::CurrencyCode;

/// The backend reports prices as bare numbers; the shop trades in USD.
pub(crate) const DEFAULT_CURRENCY: CurrencyCode = CurrencyCode::USD;
