use std::str::FromStr;

use ckb_wallet_fixed_hash::H256;
use secp256k1::{Message as SecpMessage, PublicKey, SecretKey};

use crate::error::Error;
use crate::pubkey::Pubkey;
use crate::signature::Signature;
use crate::{Message, SECP256K1};

/// A 32-byte secp256k1 private key.
///
/// The caller owns the raw bytes; this type performs no zeroization and
/// retains nothing beyond the single call it is used in.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Privkey {
    inner: H256,
}

impl Privkey {
    /// Signs a 32-byte message digest, producing a recoverable signature.
    pub fn sign_recoverable(&self, message: &Message) -> Result<Signature, Error> {
        let context = &SECP256K1;
        let privkey = SecretKey::from_byte_array(&self.inner.0)?;
        let message = SecpMessage::from_digest(message.0);
        let data = context.sign_ecdsa_recoverable(&message, &privkey);
        let (rec_id, data) = data.serialize_compact();
        Ok(Signature::from_compact(rec_id, data))
    }

    /// Derives the public key for this private key.
    pub fn pubkey(&self) -> Result<Pubkey, Error> {
        let context = &SECP256K1;
        let privkey = SecretKey::from_byte_array(&self.inner.0)?;
        Ok(PublicKey::from_secret_key(context, &privkey).into())
    }

    /// Builds from a 32-byte slice.
    ///
    /// Range validation happens on use, not here; an out-of-range key fails
    /// with [`Error::InvalidPrivKey`] when signing.
    pub fn from_slice(key: &[u8]) -> Self {
        assert_eq!(32, key.len(), "should provide 32-byte length slice");

        let mut h = [0u8; 32];
        h.copy_from_slice(&key[0..32]);
        Privkey { inner: H256(h) }
    }
}

impl From<H256> for Privkey {
    fn from(key: H256) -> Self {
        Privkey { inner: key }
    }
}

impl From<SecretKey> for Privkey {
    fn from(key: SecretKey) -> Self {
        Privkey {
            inner: H256(key.secret_bytes()),
        }
    }
}

impl FromStr for Privkey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(H256::from_str(s)
            .map_err(|e| Error::Other(format!("{e:?}")))?
            .into())
    }
}
