pub mod error;

pub use error::HashError;

use bcrypt::{hash, verify, BcryptError};
use std::fmt;

use crate::config::{MAX_COST, MIN_COST};

/// A password taken from the command line.
///
/// Held only for the lifetime of the process. `Debug` is redacted so the value
/// can be passed to tracing fields without leaking it.
pub struct Plaintext(String);

impl Plaintext {
    /// Returns `None` for a missing or empty argument.
    pub fn from_arg(arg: Option<String>) -> Option<Self> {
        arg.filter(|s| !s.is_empty()).map(Plaintext)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Plaintext").field(&"[REDACTED]").finish()
    }
}

pub fn hash_password(password: &Plaintext, cost: u32) -> Result<String, HashError> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(HashError::InvalidCost(cost));
    }
    Ok(hash(password.expose(), cost)?)
}

/// `Ok(false)` means the hash is well formed but belongs to another password.
pub fn verify_password(password: &Plaintext, hash: &str) -> Result<bool, HashError> {
    verify(password.expose(), hash).map_err(|e| match e {
        BcryptError::InvalidPrefix(_)
        | BcryptError::InvalidHash(_)
        | BcryptError::InvalidCost(_)
        | BcryptError::CostNotAllowed(_)
        | BcryptError::InvalidBase64(_) => HashError::MalformedHash(e),
        other => HashError::Bcrypt(other),
    })
}

/// Hashes on the blocking pool and checks the result before handing it back.
pub async fn generate_hash(password: Plaintext, cost: u32) -> Result<String, HashError> {
    tokio::task::spawn_blocking(move || {
        let hashed = hash_password(&password, cost)?;
        if !verify_password(&password, &hashed)? {
            return Err(HashError::SelfCheckFailed);
        }
        Ok(hashed)
    })
    .await?
}
