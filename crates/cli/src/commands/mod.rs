//! Console command implementations.

pub mod appointments;
pub mod auth;
pub mod pets;
pub mod products;
pub mod records;
pub mod services;

pub use appointments::AppointmentAction;
pub use pets::PetAction;
pub use products::ProductAction;
pub use records::RecordAction;
pub use services::ServiceAction;

use std::sync::Arc;

use thiserror::Error;

use pawmart_client::api::{
    ApiClient, AppointmentsRepo, CacheProfile, CareServicesRepo, PetsRepo, ProductsRepo,
    RecordsRepo,
};
use pawmart_client::auth::AuthService;
use pawmart_client::config::{ClientConfig, ConfigError};
use pawmart_client::error::ApiError;
use pawmart_client::token::FileTokenStore;

/// Errors that can occur while running a console command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A backend operation failed.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// A local file operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An auth operation was denied.
    #[error("{0}")]
    Denied(String),
}

/// Shared command context: one API client, the repositories over it.
///
/// The console is an admin surface, so repositories use the 1-minute cache
/// profile.
pub struct Context {
    pub auth: AuthService,
    pub products: ProductsRepo,
    pub pets: PetsRepo,
    pub records: RecordsRepo,
    pub services: CareServicesRepo,
    pub appointments: AppointmentsRepo,
}

impl Context {
    /// Build the context from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is missing or the HTTP client
    /// cannot be built.
    pub fn from_env() -> Result<Self, CliError> {
        let config = ClientConfig::from_env()?;
        let tokens = Arc::new(FileTokenStore::new(config.token_path.clone()));
        let client = ApiClient::new(&config, tokens)?;

        Ok(Self {
            auth: AuthService::from_client(client.clone()),
            products: ProductsRepo::new(client.clone(), CacheProfile::Admin),
            pets: PetsRepo::new(client.clone(), CacheProfile::Admin),
            records: RecordsRepo::new(client.clone()),
            services: CareServicesRepo::new(client.clone()),
            appointments: AppointmentsRepo::new(client),
        })
    }
}
