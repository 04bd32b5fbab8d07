//! Trait seam over the elliptic curve group's private keys.

use crate::{PrivateKeyBytes, PublicKey, Result};
use secp256k1::Scalar;

/// Private key scalar belonging to an opaque group of known order `n`.
pub trait PrivateKey: Sized {
    /// Public key type which corresponds to this private key.
    type PublicKey: PublicKey;

    /// Initialize this key from bytes. Fails when the scalar is zero or not
    /// below the group order.
    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self>;

    /// Serialize this key as bytes.
    fn to_bytes(&self) -> PrivateKeyBytes;

    /// Derive a child key from a parent key and a provided tweak value,
    /// i.e. where `other` is referred to as "I sub L" in BIP32 and sourced
    /// from the left half of the HMAC-SHA-512 output.
    fn derive_child(&self, other: PrivateKeyBytes) -> Result<Self>;

    /// Get the [`PublicKey`] that corresponds to this private key.
    fn public_key(&self) -> Self::PublicKey;
}

impl PrivateKey for secp256k1::SecretKey {
    type PublicKey = secp256k1::PublicKey;

    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self> {
        Ok(secp256k1::SecretKey::from_slice(bytes)?)
    }

    fn to_bytes(&self) -> PrivateKeyBytes {
        self.secret_bytes()
    }

    fn derive_child(&self, other: PrivateKeyBytes) -> Result<Self> {
        // no retry when the tweak is not below n or the sum is zero, see the
        // note in ExtendedPrivateKey::derive_child
        let tweak = Scalar::from_be_bytes(other)?;
        Ok(self.add_tweak(&tweak)?)
    }

    fn public_key(&self) -> Self::PublicKey {
        secp256k1::PublicKey::from_secret_key_global(self)
    }
}
