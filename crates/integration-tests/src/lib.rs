//! Integration tests for PawMart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pawmart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_session` - Auth state machine over a stub backend
//! - `product_mapping` - Image URL mapper round trips and payload merging
//! - `filter_parsing` - Price range table and pagination math
//! - `set_editor` - Change-callback discipline for tag and size editors
//!
//! Everything here exercises the crates through their public APIs only;
//! nothing requires a running backend.
