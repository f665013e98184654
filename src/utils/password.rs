use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;

use crate::types::error::SeedError;

/// Fixed Argon2id cost. Every seeded credential is hashed with the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl HashCost {
    /// Rejects costs argon2 would refuse, e.g. zero iterations.
    pub fn validate(&self) -> Result<(), SeedError> {
        self.hasher().map(|_| ())
    }

    fn hasher(&self) -> Result<Argon2<'static>, SeedError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

pub fn hash_password(plain: &str, cost: HashCost) -> Result<String, SeedError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = cost.hasher()?.hash_password(plain.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Cost parameters are read back from the PHC string, so any cost verifies.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, SeedError> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok())
}

/// Runs [`hash_password`] on the blocking pool.
pub async fn hash_password_async(plain: &str, cost: HashCost) -> Result<String, SeedError> {
    let plain = plain.to_owned();
    tokio::task::spawn_blocking(move || hash_password(&plain, cost)).await?
}
