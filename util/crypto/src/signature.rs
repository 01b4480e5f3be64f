use std::fmt;

use faster_hex::hex_string;
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::Message as SecpMessage;

use crate::error::Error;
use crate::pubkey::Pubkey;
use crate::{Message, SECP256K1};

/// A 65-byte recoverable signature: compact `r ‖ s` plus the recovery id.
#[derive(Clone)]
pub struct Signature([u8; 65]);

impl Signature {
    /// A slice into the `r` portion of the data.
    pub fn r(&self) -> &[u8] {
        &self.0[0..32]
    }

    /// A slice into the `s` portion of the data.
    pub fn s(&self) -> &[u8] {
        &self.0[32..64]
    }

    /// The recovery id.
    pub fn v(&self) -> u8 {
        self.0[64]
    }

    /// Assembles from the compact form the signing primitive emits.
    pub fn from_compact(rec_id: RecoveryId, data: [u8; 64]) -> Self {
        let mut sig = [0u8; 65];
        sig[0..64].copy_from_slice(&data[0..64]);
        sig[64] = i32::from(rec_id) as u8;
        Signature(sig)
    }

    /// Creates a signature object from a 65-byte slice.
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        if data.len() != 65 {
            return Err(Error::InvalidSignature);
        }
        let mut sig = [0u8; 65];
        sig[..].copy_from_slice(data);
        Ok(Signature(sig))
    }

    /// Checks that the recovery id is in range and `r`/`s` are non-trivial.
    ///
    /// Full range validation of `r` and `s` against the curve order is left
    /// to [`to_recoverable`](Self::to_recoverable).
    pub fn is_valid(&self) -> bool {
        self.v() <= 3 && self.r().iter().any(|x| *x != 0) && self.s().iter().any(|x| *x != 0)
    }

    /// Converts the compact bytes back to a recoverable signature.
    pub fn to_recoverable(&self) -> Result<RecoverableSignature, Error> {
        let recovery_id = RecoveryId::try_from(i32::from(self.0[64]))?;
        Ok(RecoverableSignature::from_compact(
            &self.0[0..64],
            recovery_id,
        )?)
    }

    /// Determines the public key that produced this signature over `message`.
    pub fn recover(&self, message: &Message) -> Result<Pubkey, Error> {
        let context = &SECP256K1;
        let recoverable_signature = self.to_recoverable()?;
        let message = SecpMessage::from_digest(message.0);
        let pubkey = context.recover_ecdsa(&message, &recoverable_signature)?;
        Ok(pubkey.into())
    }

    /// The 65 bytes as they appear inside a witness lock field.
    pub fn serialize(&self) -> Vec<u8> {
        Vec::from(&self.0[..])
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.debug_struct("Signature")
            .field("r", &hex_string(&self.0[0..32]))
            .field("s", &hex_string(&self.0[32..64]))
            .field("v", &hex_string(&self.0[64..65]))
            .finish()
    }
}

impl From<[u8; 65]> for Signature {
    fn from(sig: [u8; 65]) -> Self {
        Signature(sig)
    }
}
