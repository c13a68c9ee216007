use crate::error::{AppError, Result};
use axum::http::HeaderMap;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user ID
    pub exp: usize,  // expiration time
}

impl Claims {
    pub fn new(user_id: String, expiration_hours: i64) -> Self {
        let exp =
            (chrono::Utc::now() + chrono::Duration::hours(expiration_hours)).timestamp() as usize;

        Self { sub: user_id, exp }
    }
}

/// Verifies tokens issued by the account service. Token issuing is kept
/// for tooling and tests.
#[derive(Clone)]
pub struct JwtManager {
    secret: String,
}

impl JwtManager {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    pub fn create_token(&self, user_id: String) -> Result<String> {
        let claims = Claims::new(user_id, 24 * 7); // 7 days

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Auth(format!("Failed to create token: {}", e)))
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| AppError::Auth(format!("Invalid token: {}", e)))
    }
}

/// Identity of the caller, taken from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

impl AuthUser {
    pub fn from_header(jwt_manager: &JwtManager, auth_header: &str) -> Result<Self> {
        // Bearer token format
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let claims = jwt_manager.verify_token(token)?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }

    /// Caller identity, required
    pub fn from_headers(jwt_manager: &JwtManager, headers: &HeaderMap) -> Result<Self> {
        Self::from_headers_optional(jwt_manager, headers)?.ok_or(AppError::Unauthorized)
    }

    /// Caller identity when an authorization header is present.
    /// A present but invalid header is still rejected.
    pub fn from_headers_optional(
        jwt_manager: &JwtManager,
        headers: &HeaderMap,
    ) -> Result<Option<Self>> {
        let Some(value) = headers.get("authorization") else {
            return Ok(None);
        };
        let auth_header = value.to_str().map_err(|_| AppError::Unauthorized)?;
        Self::from_header(jwt_manager, auth_header).map(Some)
    }
}
