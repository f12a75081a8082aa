//! PawMart Core - Shared types library.
//!
//! This crate provides common types used across all PawMart components:
//! - `client` - Typed data-access layer over the PawMart REST backend
//! - `cli` - Storefront and admin console for the terminal
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   the domain enums shared between shop and admin surfaces

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
