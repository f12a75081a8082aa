//! PawMart Client - Typed data-access layer over the PawMart REST backend.
//!
//! # Architecture
//!
//! The crate is a Repository -> Mapper -> Service composition:
//!
//! - [`api::ApiClient`] - one configured HTTP client; attaches the bearer
//!   token from the [`token`] store to every outgoing request
//! - Repositories ([`api::ProductsRepo`], [`api::PetsRepo`], ...) - narrow
//!   per-domain interfaces wrapping HTTP calls; translate transport errors
//!   into [`error::ApiError`] values with user-facing messages
//! - Mappers ([`api::conversions`]) - pure functions converting API
//!   representations to and from domain representations
//! - Domain services ([`services`]) - stateless pure-logic helpers shared
//!   by repositories and callers
//! - [`auth::AuthService`] - session state machine over the auth endpoints;
//!   never surfaces errors past its boundary, only discriminated outcomes
//!
//! Catalog reads are cached in-memory (`moka`, 5-minute TTL); admin
//! repositories use a 1-minute TTL. Cache entries are invalidated after
//! successful mutations.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pawmart_client::{api::{ApiClient, CacheProfile, ProductsRepo}, config::ClientConfig, token::FileTokenStore};
//!
//! let config = ClientConfig::from_env()?;
//! let tokens = Arc::new(FileTokenStore::new(config.token_path.clone()));
//! let client = ApiClient::new(&config, tokens)?;
//! let products = ProductsRepo::new(client, CacheProfile::Catalog);
//!
//! let page = products.get_products(&Default::default()).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod services;
pub mod token;
pub mod types;

pub use error::{ApiError, ApiResult};
