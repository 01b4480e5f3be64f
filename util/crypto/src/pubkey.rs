use std::fmt;

use faster_hex::hex_string;
use secp256k1::{Message as SecpMessage, PublicKey};

use crate::error::Error;
use crate::signature::Signature;
use crate::{Message, SECP256K1};

/// An uncompressed secp256k1 public key, without the `0x04` prefix byte.
#[derive(Eq, PartialEq, Hash, Clone)]
pub struct Pubkey {
    inner: [u8; 64],
}

impl Pubkey {
    /// Checks that `signature` is valid for `message` under this key.
    pub fn verify(&self, message: &Message, signature: &Signature) -> Result<(), Error> {
        let context = &SECP256K1;
        let pubkey = self.to_secp()?;
        let recoverable_signature = signature.to_recoverable()?;
        let signature = recoverable_signature.to_standard();
        let message = SecpMessage::from_digest(message.0);
        context.verify_ecdsa(&message, &signature, &pubkey)?;
        Ok(())
    }

    /// Serializes as the 33-byte compressed form — the form the blake160
    /// lock argument is derived from.
    pub fn serialize(&self) -> Vec<u8> {
        let pubkey = self.to_secp().expect("stored pubkey is always valid");
        Vec::from(&pubkey.serialize()[..])
    }

    /// Parses from either the 33-byte compressed or 65-byte uncompressed form.
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        Ok(PublicKey::from_slice(data)?.into())
    }

    /// The raw 64 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner[..]
    }

    fn to_secp(&self) -> Result<PublicKey, Error> {
        // re-attach the uncompressed-key prefix 4
        let mut prefixed = [4u8; 65];
        prefixed[1..65].copy_from_slice(&self.inner[..]);
        Ok(PublicKey::from_slice(&prefixed)?)
    }
}

impl From<PublicKey> for Pubkey {
    fn from(key: PublicKey) -> Self {
        let serialized = key.serialize_uncompressed();
        let mut inner = [0u8; 64];
        inner.copy_from_slice(&serialized[1..65]);
        Pubkey { inner }
    }
}

impl From<[u8; 64]> for Pubkey {
    fn from(inner: [u8; 64]) -> Self {
        Pubkey { inner }
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.debug_tuple("Pubkey")
            .field(&hex_string(&self.inner))
            .finish()
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", hex_string(&self.inner))
    }
}
