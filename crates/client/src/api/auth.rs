//! Auth endpoints.
//!
//! Raw wrappers over `/auth/login`, `/auth/register` and
//! `/auth/check-status`. The session state machine that consumes them
//! lives in [`crate::auth`].

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use pawmart_core::{Email, UserId, UserRole};

use crate::error::{ApiError, ApiResult};
use crate::types::{AuthSession, User};

use super::ApiClient;

/// Backend seam for the auth endpoints.
///
/// [`AuthApi`] is the production implementation; tests substitute stubs to
/// drive the state machine without a network. Returned futures are `Send`
/// so the state machine can run its periodic re-check on a spawned task.
pub trait AuthBackend: Send + Sync {
    /// POST `/auth/login`.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = ApiResult<AuthSession>> + Send;

    /// POST `/auth/register`.
    fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> impl Future<Output = ApiResult<AuthSession>> + Send;

    /// GET `/auth/check-status` with the stored bearer token.
    fn check_status(&self) -> impl Future<Output = ApiResult<AuthSession>> + Send;
}

/// Auth endpoints over the shared [`ApiClient`].
#[derive(Clone)]
pub struct AuthApi {
    api: ApiClient,
}

impl AuthApi {
    /// Create the auth endpoint wrapper.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl AuthBackend for AuthApi {
    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthSession> {
        let response: ApiAuthSession = self
            .api
            .post_json("auth/login", &LoginPayload { email, password })
            .await?;
        convert_session(response)
    }

    #[instrument(skip(self, password), fields(email = %email))]
    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> ApiResult<AuthSession> {
        let response: ApiAuthSession = self
            .api
            .post_json(
                "auth/register",
                &RegisterPayload {
                    email,
                    password,
                    full_name,
                },
            )
            .await?;
        convert_session(response)
    }

    #[instrument(skip(self))]
    async fn check_status(&self) -> ApiResult<AuthSession> {
        let response: ApiAuthSession = self.api.get_json("auth/check-status", &[]).await?;
        convert_session(response)
    }
}

// =============================================================================
// Transport shapes
// =============================================================================

#[derive(Debug, Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterPayload<'a> {
    email: &'a str,
    password: &'a str,
    full_name: &'a str,
}

/// User plus fresh token, as every auth endpoint returns it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiAuthSession {
    id: UserId,
    email: String,
    full_name: String,
    #[serde(default = "default_true")]
    is_active: bool,
    #[serde(default)]
    roles: Vec<UserRole>,
    token: String,
}

const fn default_true() -> bool {
    true
}

fn convert_session(session: ApiAuthSession) -> ApiResult<AuthSession> {
    let email = Email::parse(&session.email)
        .map_err(|e| ApiError::Data(format!("invalid email in auth response: {e}")))?;

    Ok(AuthSession {
        user: User {
            id: session.id,
            email,
            full_name: session.full_name,
            is_active: session.is_active,
            roles: session.roles,
        },
        token: SecretString::from(session.token),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_session_deserializes_backend_shape() {
        let api_session: ApiAuthSession = serde_json::from_str(
            r#"{
                "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "email": "jo@example.com",
                "fullName": "Jo Doe",
                "isActive": true,
                "roles": ["admin", "user"],
                "token": "jwt-token"
            }"#,
        )
        .unwrap();

        let session = convert_session(api_session).unwrap();
        assert_eq!(session.user.email.as_str(), "jo@example.com");
        assert_eq!(session.user.roles, vec![UserRole::Admin, UserRole::User]);
        assert_eq!(session.token.expose_secret(), "jwt-token");
    }

    #[test]
    fn test_session_defaults_for_optional_fields() {
        let api_session: ApiAuthSession = serde_json::from_str(
            r#"{
                "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "email": "jo@example.com",
                "fullName": "Jo Doe",
                "token": "jwt-token"
            }"#,
        )
        .unwrap();

        let session = convert_session(api_session).unwrap();
        assert!(session.user.is_active);
        assert!(session.user.roles.is_empty());
    }

    #[test]
    fn test_session_rejects_invalid_email() {
        let api_session: ApiAuthSession = serde_json::from_str(
            r#"{
                "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "email": "not-an-email",
                "fullName": "Jo Doe",
                "token": "jwt-token"
            }"#,
        )
        .unwrap();

        assert!(matches!(
            convert_session(api_session),
            Err(ApiError::Data(_))
        ));
    }

    #[test]
    fn test_register_payload_uses_camel_case() {
        let payload = RegisterPayload {
            email: "jo@example.com",
            password: "secret",
            full_name: "Jo Doe",
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("fullName").is_some());
    }
}
