//! Session service - phone-number login backed by signed session tokens.
//!
//! The token is an HS256 JWT carrying the guest id. It travels in the
//! session cookie; the API layer owns the cookie itself.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::Guest;

use crate::config::{Config, SECONDS_PER_HOUR};
use crate::infra::UnitOfWork;

/// Session token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Guest id
    pub sub: i32,
    pub exp: i64,
    pub iat: i64,
}

/// A freshly opened session.
#[derive(Debug, Clone)]
pub struct Session {
    pub guest: Guest,
    pub token: String,
    /// Lifetime of the token in seconds
    pub max_age: i64,
}

#[async_trait]
pub trait SessionService: Send + Sync {
    /// Open a session for the guest with this phone number
    async fn login(&self, phone_number: &str) -> AppResult<Session>;

    /// Verify a session token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<SessionClaims>;

    /// Resolve the guest behind a session token
    async fn authenticate(&self, token: &str) -> AppResult<Guest>;
}

pub struct SessionManager<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> SessionManager<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }

    fn issue_token(&self, guest: &Guest) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.session.expiration_hours);

        let claims = SessionClaims {
            sub: guest.id,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.session_secret_bytes()),
        )?;

        Ok(token)
    }
}

#[async_trait]
impl<U: UnitOfWork> SessionService for SessionManager<U> {
    async fn login(&self, phone_number: &str) -> AppResult<Session> {
        let guest = self
            .uow
            .guests()
            .find_by_phone(phone_number)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let token = self.issue_token(&guest)?;
        tracing::info!(guest_id = guest.id, "Session opened");

        Ok(Session {
            guest,
            token,
            max_age: self.config.session.expiration_hours * SECONDS_PER_HOUR,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<SessionClaims> {
        let data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.config.session_secret_bytes()),
            &Validation::default(),
        )
        .map_err(|e| {
            tracing::debug!("Rejected session token: {}", e);
            AppError::Unauthorized
        })?;

        Ok(data.claims)
    }

    async fn authenticate(&self, token: &str) -> AppResult<Guest> {
        let claims = self.verify_token(token)?;

        // The guest may have been deleted after the token was issued
        self.uow
            .guests()
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::Unauthorized)
    }
}
