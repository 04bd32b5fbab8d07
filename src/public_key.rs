//! Trait seam over the elliptic curve group's public keys.

use crate::{types::hash160, KeyFingerprint, PrivateKeyBytes, PublicKeyBytes, Result};
use secp256k1::Scalar;

/// Point on an opaque group, serialized in SEC1-compressed form.
pub trait PublicKey: Sized {
    /// Initialize this key from a compressed point.
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self>;

    /// Serialize this key as compressed bytes.
    fn to_bytes(&self) -> PublicKeyBytes;

    /// Derive a child key from a parent key and a provided tweak value:
    /// `child = self + tweak * G`.
    fn derive_child(&self, other: PrivateKeyBytes) -> Result<Self>;

    /// Compute a 4-byte key fingerprint for this public key: the first four
    /// bytes of its hash160.
    fn fingerprint(&self) -> KeyFingerprint {
        let digest = hash160(&self.to_bytes());
        let mut fingerprint = KeyFingerprint::default();
        fingerprint.copy_from_slice(&digest[..4]);
        fingerprint
    }
}

impl PublicKey for secp256k1::PublicKey {
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self> {
        Ok(secp256k1::PublicKey::from_slice(&bytes)?)
    }

    fn to_bytes(&self) -> PublicKeyBytes {
        self.serialize()
    }

    fn derive_child(&self, other: PrivateKeyBytes) -> Result<Self> {
        let tweak = Scalar::from_be_bytes(other)?;
        Ok(self.add_exp_tweak(secp256k1::SECP256K1, &tweak)?)
    }
}
