/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both run on tokio's blocking thread pool
 * because a single bcrypt call at the default cost takes long enough to
 * stall a runtime worker.
 *
 * # Policy
 *
 * New passwords (change and admin reset) must be at least
 * `MIN_PASSWORD_LENGTH` characters. Registration only requires a
 * non-blank password. No password may exceed `MAX_PASSWORD_BYTES`, the
 * most bcrypt can digest without truncating; longer ones are refused
 * rather than silently cut.
 */

use std::sync::Arc;

use bcrypt::{non_truncating_hash, non_truncating_verify, BcryptError};

use crate::backend::error::ApiError;

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest password bcrypt accepts untruncated, in bytes
pub const MAX_PASSWORD_BYTES: usize = 71;

/// bcrypt wrapper with a fixed cost factor
///
/// Cheap to clone; shared through `AppState`.
#[derive(Clone, Debug)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<str>,
}

impl PasswordHasher {
    /// Build a hasher, computing the dummy hash used for unknown emails up front
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if bcrypt rejects the cost.
    pub async fn new(cost: u32) -> Result<Self, ApiError> {
        let secret = uuid::Uuid::new_v4().simple().to_string();
        let dummy_hash = hash_blocking(secret, cost).await?;
        Ok(Self {
            cost,
            dummy_hash: dummy_hash.into(),
        })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh salt
    ///
    /// # Errors
    ///
    /// `ApiError::PasswordTooLong` past `MAX_PASSWORD_BYTES`.
    pub async fn hash(&self, password: &str) -> Result<String, ApiError> {
        hash_blocking(password.to_string(), self.cost).await
    }

    /// Verify a password against a stored bcrypt hash
    ///
    /// A password too long to have been stored never verifies.
    pub async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, ApiError> {
        let password = password.to_string();
        let password_hash = password_hash.to_string();
        let outcome =
            tokio::task::spawn_blocking(move || non_truncating_verify(password, &password_hash))
                .await?;
        match outcome {
            Ok(valid) => Ok(valid),
            Err(BcryptError::Truncation(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Burn one verification against a throwaway hash
    ///
    /// Called when the login email is unknown so that path costs the same as
    /// a wrong password.
    pub async fn verify_dummy(&self, password: &str) -> Result<(), ApiError> {
        self.verify(password, &self.dummy_hash).await?;
        Ok(())
    }

    /// Hash of a random value nobody knows, for accounts created without a password
    pub async fn unusable_hash(&self) -> Result<String, ApiError> {
        let secret = format!("{}{}", uuid::Uuid::new_v4().simple(), uuid::Uuid::new_v4().simple());
        self.hash(&secret).await
    }
}

async fn hash_blocking(password: String, cost: u32) -> Result<String, ApiError> {
    let hashed = tokio::task::spawn_blocking(move || non_truncating_hash(password, cost)).await??;
    Ok(hashed)
}

/// Check the length policy for a new password
pub fn check_policy(password: &str) -> Result<(), ApiError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ApiError::PasswordTooLong);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::WeakPassword);
    }
    Ok(())
}
