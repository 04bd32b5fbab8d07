//! Common byte-level types shared across the crate.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};

/// HMAC with SHA-512.
pub type HmacSha512 = hmac::Hmac<Sha512>;

/// Size of input key material and derived keys (bytes).
pub const KEY_SIZE: usize = 32;

/// Chain code: extension for both private and public keys.
pub type ChainCode = [u8; KEY_SIZE];

/// Derivation depth.
pub type Depth = u8;

/// Key fingerprints: first 4 bytes of the hash160 of a compressed public key.
pub type KeyFingerprint = [u8; 4];

/// Serialized private key scalar, big-endian.
pub type PrivateKeyBytes = [u8; KEY_SIZE];

/// SEC1-compressed public key: tag byte plus x-coordinate.
pub type PublicKeyBytes = [u8; KEY_SIZE + 1];

/// RIPEMD160(SHA256(bytes)), the hash behind fingerprints.
pub fn hash160(bytes: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(bytes)).into()
}
