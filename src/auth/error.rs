use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("Cost factor {0} is outside the range bcrypt accepts (4..=31)")]
    InvalidCost(u32),
    #[error("bcrypt failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("Not a bcrypt hash")]
    MalformedHash(#[source] bcrypt::BcryptError),
    #[error("Freshly generated hash did not verify against its password")]
    SelfCheckFailed,
    #[error("Hashing task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}
