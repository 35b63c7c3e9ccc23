//! Bearer token authentication middleware.
//!
//! Protected routes sit behind [`require_auth`], which:
//! 1. Extracts the token from the `Authorization: Bearer <token>` header
//! 2. Verifies its signature and expiry against the configured shared secret
//! 3. Injects the decoded claims into the request for downstream handlers
//!
//! A missing token is rejected with 401, a bad or expired one with 403.
//! Token issuance happens upstream; this service only verifies.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AppState};

/// The contents of an accepted token.
///
/// None of the current endpoints consume these beyond the gate itself, but
/// they are attached to the request so handlers can pick them up via
/// `Extension<Claims>` if they ever need the caller's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject the token was issued to
    pub sub: String,
    /// Issued-at time, seconds since the epoch
    pub iat: usize,
    /// Expiry time, seconds since the epoch
    pub exp: usize,
}

/// Token verification settings, built once at startup from the configured
/// shared secret.
#[derive(Clone)]
pub struct AuthConfig {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthConfig {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

/// Authentication gate applied to every protected route.
///
/// # Errors
///
/// - `AuthMissing` (401) when there is no `Bearer` token on the request
/// - `AuthInvalid` (403) when signature or expiry verification fails
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or(AppError::AuthMissing)?;

    let token_data = decode::<Claims>(token, &state.auth.decoding_key, &state.auth.validation)
        .map_err(|_| AppError::AuthInvalid)?;

    request.extensions_mut().insert(token_data.claims);

    Ok(next.run(request).await)
}
