//! Extended public keys

use crate::{
    ChildNumber, DerivationPath, Error, ExtendedKey, ExtendedKeyAttrs, ExtendedPrivateKey, HmacSha512, KeyFingerprint, PrivateKey,
    PublicKey, PublicKeyBytes, Result, Version, KEY_SIZE,
};
use core::str::FromStr;
use hmac::Mac;

/// Extended public keys derived using BIP32.
///
/// Generic around a [`PublicKey`] type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtendedPublicKey<K: PublicKey> {
    /// Derived public key
    public_key: K,

    /// Extended key attributes.
    attrs: ExtendedKeyAttrs,
}

impl<K> ExtendedPublicKey<K>
where
    K: PublicKey,
{
    /// Obtain the non-extended public key value `K`.
    pub fn public_key(&self) -> &K {
        &self.public_key
    }

    /// Get attributes for this key such as depth, parent fingerprint,
    /// child number, and chain code.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    /// Compute a 4-byte key fingerprint for this extended public key.
    pub fn fingerprint(&self) -> KeyFingerprint {
        self.public_key().fingerprint()
    }

    /// Derive a child key for a particular [`ChildNumber`].
    ///
    /// Hardened derivation requires the parent scalar and is undefined for a
    /// public parent.
    pub fn derive_child(&self, child_number: ChildNumber) -> Result<Self> {
        if child_number.is_hardened() {
            return Err(Error::HardenedFromPublic);
        }

        let depth = self.attrs.depth.checked_add(1).ok_or(Error::DepthOverflow)?;

        let mut hmac = HmacSha512::new_from_slice(&self.attrs.chain_code).map_err(Error::Hmac)?;

        hmac.update(&self.public_key.to_bytes());
        hmac.update(&child_number.to_bytes());

        let result = hmac.finalize().into_bytes();
        let (child_key, chain_code) = result.split_at(KEY_SIZE);
        let public_key = self.public_key.derive_child(child_key.try_into()?)?;

        let attrs = ExtendedKeyAttrs {
            parent_fingerprint: self.public_key.fingerprint(),
            child_number,
            chain_code: chain_code.try_into()?,
            depth,
        };

        Ok(ExtendedPublicKey { public_key, attrs })
    }

    /// Derive a sequence of child keys along `path`, one step per element.
    ///
    /// An absolute (`m`-anchored) path may only be applied to a key at the
    /// master position.
    pub fn derive_path(self, path: &DerivationPath) -> Result<Self> {
        if path.is_absolute() && !self.attrs.is_master() {
            return Err(Error::NotMasterKey);
        }
        path.iter().try_fold(self, |key, child_num| key.derive_child(child_num))
    }

    /// Serialize the raw public key as a byte array (e.g. SEC1-encoded).
    pub fn to_bytes(&self) -> PublicKeyBytes {
        self.public_key.to_bytes()
    }

    /// Serialize this key as an [`ExtendedKey`]. `version` must be a
    /// public-family tag.
    pub fn to_extended_key(&self, version: Version) -> Result<ExtendedKey> {
        if !version.is_public() {
            return Err(Error::InvalidVersion(version.as_u32()));
        }
        Ok(ExtendedKey { version, attrs: self.attrs.clone(), key_bytes: self.to_bytes() })
    }

    pub fn to_string(&self, version: Version) -> Result<String> {
        Ok(self.to_extended_key(version)?.to_string())
    }

    pub fn from_public_key(public_key: K, attrs: &ExtendedKeyAttrs) -> Self {
        ExtendedPublicKey { public_key, attrs: attrs.clone() }
    }
}

impl<K> From<&ExtendedPrivateKey<K>> for ExtendedPublicKey<K::PublicKey>
where
    K: PrivateKey,
{
    fn from(xprv: &ExtendedPrivateKey<K>) -> ExtendedPublicKey<K::PublicKey> {
        ExtendedPublicKey { public_key: xprv.private_key().public_key(), attrs: xprv.attrs().clone() }
    }
}

impl<K> FromStr for ExtendedPublicKey<K>
where
    K: PublicKey,
{
    type Err = Error;

    fn from_str(xpub: &str) -> Result<Self> {
        ExtendedKey::from_str(xpub)?.try_into()
    }
}

impl<K> TryFrom<ExtendedKey> for ExtendedPublicKey<K>
where
    K: PublicKey,
{
    type Error = Error;

    fn try_from(extended_key: ExtendedKey) -> Result<ExtendedPublicKey<K>> {
        if extended_key.is_public() {
            Ok(ExtendedPublicKey { public_key: PublicKey::from_bytes(extended_key.key_bytes)?, attrs: extended_key.attrs.clone() })
        } else {
            Err(Error::NotAPublicKey)
        }
    }
}

/// "Neuter" a serialized extended private key: compute the extended public
/// key at the same tree position, with the private version tag swapped for
/// its registry-paired public tag.
pub fn neutered(xprv: &ExtendedKey) -> Result<ExtendedKey> {
    if !xprv.is_private() {
        return Err(Error::NotAPrivateKey);
    }
    let version = xprv.version().to_public()?;
    let xprv: ExtendedPrivateKey<secp256k1::SecretKey> = xprv.clone().try_into()?;
    xprv.public_key().to_extended_key(version)
}
