use rand::{thread_rng, Rng};
use secp256k1::{PublicKey, SecretKey};

use crate::privkey::Privkey;
use crate::pubkey::Pubkey;
use crate::SECP256K1;

/// Random key generation, for tests and key provisioning.
pub struct Generator;

impl Generator {
    /// Generates a uniformly random private key in curve range.
    pub fn random_privkey() -> Privkey {
        Self::random_secret_key().into()
    }

    /// Generates a random keypair.
    pub fn random_keypair() -> (Privkey, Pubkey) {
        let secret_key = Self::random_secret_key();
        let pubkey = PublicKey::from_secret_key(&SECP256K1, &secret_key);
        (secret_key.into(), pubkey.into())
    }

    fn random_secret_key() -> SecretKey {
        let mut data = [0u8; 32];
        loop {
            thread_rng().fill(&mut data[..]);
            if let Ok(key) = SecretKey::from_byte_array(&data) {
                return key;
            }
        }
    }
}
