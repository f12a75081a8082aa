//! Sign-in, sign-out and session status commands.

use pawmart_client::auth::{AuthOutcome, is_admin};

use super::{CliError, Context};

/// Sign in and persist the issued token for later commands.
pub async fn login(ctx: &Context, email: &str, password: &str) -> Result<(), CliError> {
    match ctx.auth.login(email, password).await {
        AuthOutcome::Authenticated { user } => {
            tracing::info!("Signed in as {} <{}>", user.full_name, user.email);
            if is_admin(&user) {
                tracing::info!("Admin console commands are available");
            }
            Ok(())
        }
        AuthOutcome::Denied { message } => Err(CliError::Denied(message)),
    }
}

/// Create an account; a successful registration signs in directly.
pub async fn register(
    ctx: &Context,
    email: &str,
    password: &str,
    name: &str,
) -> Result<(), CliError> {
    match ctx.auth.register(email, password, name).await {
        AuthOutcome::Authenticated { user } => {
            tracing::info!("Account created, signed in as {} <{}>", user.full_name, user.email);
            Ok(())
        }
        AuthOutcome::Denied { message } => Err(CliError::Denied(message)),
    }
}

/// Sign out and clear the stored token.
pub async fn logout(ctx: &Context) -> Result<(), CliError> {
    ctx.auth.logout().await;
    tracing::info!("Signed out");
    Ok(())
}

/// Silently re-validate the stored session, reporting the outcome.
pub async fn status(ctx: &Context) -> Result<(), CliError> {
    match ctx.auth.check_auth_status().await {
        AuthOutcome::Authenticated { user } => {
            tracing::info!(
                "Session valid: {} <{}> (roles: {})",
                user.full_name,
                user.email,
                user.roles
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            Ok(())
        }
        AuthOutcome::Denied { message } => {
            tracing::info!("Not signed in: {message}");
            Ok(())
        }
    }
}
