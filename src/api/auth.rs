//! Authentication types and credential verification
//!
//! This is explicitly not a security boundary: the fixed demo password and
//! unsigned token stand in for a real identity provider.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::store::{EntityStore, User};
use crate::types::{Role, UserId};

/// The only password the mock accepts
pub const DEMO_PASSWORD: &str = "password";

/// Login request parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Login email
    pub email: String,
    /// Password; must equal the fixed demo literal
    pub password: String,
    /// Role being logged into
    pub role: Role,
}

/// Successful login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Always true
    pub success: bool,
    /// The authenticated user
    pub user: User,
    /// Opaque session token
    pub token: String,
    /// User-facing confirmation message
    pub message: String,
}

/// Mint the opaque demo token for a user
pub fn mint_token(user_id: &UserId) -> String {
    format!("mock_jwt_token_{}", user_id)
}

/// Verify credentials against the store
///
/// Succeeds only when a user with the matching (email, role) pair exists and
/// the password equals the fixed demo literal.
pub fn verify_credentials<'a>(
    store: &'a EntityStore,
    credentials: &Credentials,
) -> ApiResult<&'a User> {
    let user = store.user_by_credentials(&credentials.email, credentials.role);

    match user {
        Some(user) if credentials.password == DEMO_PASSWORD => {
            debug!(user = %user.id, role = %user.role, "login accepted");
            Ok(user)
        }
        _ => {
            warn!(email = %credentials.email, role = %credentials.role, "login rejected");
            Err(ApiError::InvalidCredentials)
        }
    }
}
