//! Token Service
//!
//! Issues and verifies HS256 bearer tokens carrying the caller's identity.
//! Tokens are self-contained: there is no server-side session and no
//! revocation list, so a token stays valid until `exp`.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserRole;
use crate::error::{AuthError, AuthResult};

/// JWT payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: i64,
    pub username: String,
    pub role: UserRole,
    /// Issued At (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// 検証済みトークンから得た呼び出し元
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub username: String,
    pub role: UserRole,
}

impl Identity {
    /// `required` 以上のロールでなければ [`AuthError::Forbidden`]
    pub fn require_role(&self, required: UserRole) -> AuthResult<()> {
        if self.role.satisfies(required) {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: UserId::new(claims.id),
            username: claims.username,
            role: claims.role,
        }
    }
}

/// Token issuer/verifier shared by every router
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(&config.jwt_secret),
            decoding_key: DecodingKey::from_secret(&config.jwt_secret),
            validation,
            ttl_secs: config.token_ttl_secs(),
        }
    }

    pub fn issue(&self, user_id: UserId, username: &str, role: UserRole) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            id: user_id.value(),
            username: username.to_owned(),
            role,
            iat: now,
            exp: now + self.ttl_secs,
        };

        self.encode(&claims)
    }

    fn encode(&self, claims: &Claims) -> AuthResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("token encoding failed: {e}")))
    }

    pub fn verify(&self, token: &str) -> AuthResult<Identity> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            AuthError::InvalidToken
        })?;

        Ok(Identity::from(data.claims))
    }
}
