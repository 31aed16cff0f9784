use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Default access token lifetime (5 minutes)
pub const DEFAULT_ACCESS_TOKEN_TTL: i64 = 300;
/// Default refresh token lifetime (1 day)
pub const DEFAULT_REFRESH_TOKEN_TTL: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user id)
    pub sub: String,
    pub username: String,
    pub token_type: TokenType,
    pub exp: i64,
    pub iat: i64,
    /// Unique token id
    pub jti: String,
}

impl JwtClaims {
    pub fn user_id(&self) -> Result<i64, JwtError> {
        self.sub.parse().map_err(|_| JwtError::InvalidSubject)
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("failed to sign token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("token rejected: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("expected {expected} token, got {found}")]
    WrongTokenType {
        expected: TokenType,
        found: TokenType,
    },

    #[error("token subject is not a user id")]
    InvalidSubject,
}

/// Access + refresh token pair returned by the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Stateless HS256 token issuer and verifier.
///
/// ```ignore
/// let auth = JwtAuth::new(&JwtConfig::from_env()?);
/// let pair = auth.create_token_pair(user.id, &user.username)?;
/// let claims = auth.verify(&pair.access, TokenType::Access)?;
/// ```
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        tracing::info!(
            access_ttl_secs = config.access_token_ttl_secs,
            refresh_ttl_secs = config.refresh_token_ttl_secs,
            "JWT auth initialized"
        );

        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            access_ttl: Duration::seconds(config.access_token_ttl_secs),
            refresh_ttl: Duration::seconds(config.refresh_token_ttl_secs),
        }
    }

    pub fn create_token_pair(&self, user_id: i64, username: &str) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access: self.create_access_token(user_id, username)?,
            refresh: self.create_token(user_id, username, TokenType::Refresh, self.refresh_ttl)?,
        })
    }

    pub fn create_access_token(&self, user_id: i64, username: &str) -> Result<String, JwtError> {
        self.create_token(user_id, username, TokenType::Access, self.access_ttl)
    }

    fn create_token(
        &self,
        user_id: i64,
        username: &str,
        token_type: TokenType,
        ttl: Duration,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            token_type,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().simple().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(JwtError::Encode)
    }

    /// Check signature and expiry, then require `expected` as the token type.
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<JwtClaims, JwtError> {
        let claims = decode::<JwtClaims>(token, &self.decoding, &self.validation)
            .map_err(JwtError::Invalid)?
            .claims;

        if claims.token_type != expected {
            return Err(JwtError::WrongTokenType {
                expected,
                found: claims.token_type,
            });
        }

        Ok(claims)
    }
}
