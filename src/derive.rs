//! Record-level derivation over serialized extended keys.
//!
//! The typed [`ExtendedPrivateKey`]/[`ExtendedPublicKey`] APIs cover callers
//! that hold key material. These entry points cover callers that hold
//! serialized records of either family: each step dispatches on the record's
//! version family and re-serializes under the same tag.

use crate::{
    ChildNumber, DerivationPath, Error, ExtendedKey, ExtendedPrivateKey, ExtendedPublicKey, KeyFamily, Result, Version,
};

/// Derive the master extended private key record for `seed` under the given
/// private-family `version`.
pub fn master_from_seed<S>(seed: S, version: Version) -> Result<ExtendedKey>
where
    S: AsRef<[u8]>,
{
    if !version.is_private() {
        return Err(Error::InvalidVersion(version.as_u32()));
    }
    ExtendedPrivateKey::<secp256k1::SecretKey>::new(seed)?.to_extended_key(version)
}

/// Single-step child key derivation on a serialized record.
///
/// Derivation is normal when the parent is public or the index is below the
/// hardened boundary, hardened when the parent is private and the index is
/// not; hardened derivation from a public parent fails.
pub fn derive_child(parent: &ExtendedKey, child_number: ChildNumber) -> Result<ExtendedKey> {
    match parent.version().family() {
        Some(KeyFamily::Private(_)) => {
            let parent_key: ExtendedPrivateKey<secp256k1::SecretKey> = parent.clone().try_into()?;
            parent_key.derive_child(child_number)?.to_extended_key(parent.version())
        }
        Some(KeyFamily::Public(_)) => {
            let parent_key: ExtendedPublicKey<secp256k1::PublicKey> = parent.clone().try_into()?;
            parent_key.derive_child(child_number)?.to_extended_key(parent.version())
        }
        None => Err(Error::InvalidVersion(parent.version().as_u32())),
    }
}

/// Apply `path` to `root`, one [`derive_child`] step per element, left to
/// right. An absolute (`m`-anchored) path requires `root` to sit at the
/// master position.
pub fn derive_path(root: &ExtendedKey, path: &DerivationPath) -> Result<ExtendedKey> {
    if path.is_absolute() && !root.attrs().is_master() {
        return Err(Error::NotMasterKey);
    }
    path.iter().try_fold(root.clone(), |key, child_number| derive_child(&key, child_number))
}
