use secp256k1::Error as SecpError;
use thiserror::Error;

/// Errors from the signing primitive.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The private key is out of range for the curve.
    #[error("invalid privkey")]
    InvalidPrivKey,
    /// The public key could not be parsed or is not on the curve.
    #[error("invalid pubkey")]
    InvalidPubKey,
    /// The signature failed structural validation or verification.
    #[error("invalid signature")]
    InvalidSignature,
    /// The message is not a valid 32-byte digest.
    #[error("invalid message")]
    InvalidMessage,
    /// The recovery identifier is not in `0..=3`.
    #[error("invalid recovery_id")]
    InvalidRecoveryId,
    /// Any error not part of this list.
    #[error("{0}")]
    Other(String),
}

impl From<SecpError> for Error {
    fn from(e: SecpError) -> Self {
        match e {
            SecpError::InvalidPublicKey => Error::InvalidPubKey,
            SecpError::InvalidSecretKey => Error::InvalidPrivKey,
            SecpError::InvalidMessage => Error::InvalidMessage,
            SecpError::InvalidRecoveryId => Error::InvalidRecoveryId,
            _ => Error::InvalidSignature,
        }
    }
}
