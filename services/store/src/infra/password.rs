use argon2::{
    Argon2,
    password_hash::{self, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString},
};
use rand_core::OsRng;

use crate::domain::repository::PasswordHasher;
use crate::error::StoreServiceError;

/// Argon2id with default parameters, stored in PHC string format.
#[derive(Clone, Copy, Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, StoreServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("hash password: {e}"))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password_hash: &str, password: &str) -> Result<bool, StoreServiceError> {
        let parsed = PasswordHash::new(password_hash)
            .map_err(|e| anyhow::anyhow!("parse stored password hash: {e}"))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(anyhow::anyhow!("verify password: {e}").into()),
        }
    }
}
