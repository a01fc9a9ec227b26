//! Staff authentication and authorization
//!
//! Checklist and packet routes carry hospital staff bearer tokens signed
//! with HS256. Roles travel inside the token; `admin` satisfies any role.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ApiConfig;

/// Role that satisfies every permission check
pub const ADMIN_ROLE: &str = "admin";

/// Permission definitions
pub mod permissions {
    /// View a claim's document checklist
    pub const CLAIM_READ: &str = "claim:read";
    /// Assemble the insurer packet for a claim
    pub const PACKET_GENERATE: &str = "claim:packet";
}

/// JWT claims carried by hospital staff tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Staff member identifier
    pub sub: String,
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

impl AuthClaims {
    /// Returns true if the staff member holds `role` or is an admin
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role || r == ADMIN_ROLE)
    }

    /// Fails with `MissingPermission` unless [`AuthClaims::has_role`] holds
    pub fn require(&self, role: &str) -> Result<(), AuthError> {
        if self.has_role(role) {
            Ok(())
        } else {
            Err(AuthError::MissingPermission(role.to_string()))
        }
    }
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Missing permission: {0}")]
    MissingPermission(String),
}

/// Signing and verification keys derived from the configured secret
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: Duration,
}

impl JwtKeys {
    pub fn new(secret: &str, lifetime_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            lifetime: Duration::seconds(lifetime_secs as i64),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.jwt_secret, config.jwt_expiration_secs)
    }

    /// Issues a token for a staff member
    ///
    /// Staff log in through the hospital's login service, which signs tokens
    /// with the shared secret; this service only verifies them. `issue`
    /// serves operator tooling and test suites that need a token this
    /// service will accept.
    pub fn issue(&self, staff_id: &str, roles: Vec<String>) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = AuthClaims {
            sub: staff_id.to_string(),
            roles,
            exp: (now + self.lifetime).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|_| AuthError::InvalidToken)
    }

    /// Verifies signature and expiry, returning the carried claims
    pub fn verify(&self, token: &str) -> Result<AuthClaims, AuthError> {
        decode::<AuthClaims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }
}
