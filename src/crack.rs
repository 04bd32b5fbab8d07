//! Parent private key recovery from a parent public key and one normally
//! derived child private key.
//!
//! For a normal (non-hardened) child, the HMAC input is fully computable from
//! public data, so `child = parent + offset (mod n)` can be inverted by
//! anyone holding the parent xpub and the child xprv. This fully compromises
//! the parent and with it every descendant. Hardened derivation feeds the
//! parent scalar into the HMAC instead and is immune.

use hmac::Mac;
use secp256k1::{Scalar, SecretKey};

use crate::{Error, ExtendedKey, ExtendedPrivateKey, ExtendedPublicKey, HmacSha512, Result, KEY_SIZE};

/// Recover the parent extended private key behind `parent_xpub` given any
/// normally derived `child_xprv`.
pub fn recover_parent_xprv(parent_xpub: &ExtendedKey, child_xprv: &ExtendedKey) -> Result<ExtendedKey> {
    let parent: ExtendedPublicKey<secp256k1::PublicKey> = parent_xpub.clone().try_into()?;
    let child: ExtendedPrivateKey<SecretKey> = child_xprv.clone().try_into()?;

    if parent.attrs().depth.checked_add(1) != Some(child.attrs().depth) {
        return Err(Error::DepthMismatch { parent: parent.attrs().depth, child: child.attrs().depth });
    }

    if child.attrs().parent_fingerprint != parent.fingerprint() {
        return Err(Error::FingerprintMismatch);
    }

    let child_number = child.attrs().child_number;
    if child_number.is_hardened() {
        return Err(Error::HardenedChildForCrack);
    }

    // recompute the offset the parent used for this child
    let mut hmac = HmacSha512::new_from_slice(&parent.attrs().chain_code).map_err(Error::Hmac)?;
    hmac.update(&parent.to_bytes());
    hmac.update(&child_number.to_bytes());
    let result = hmac.finalize().into_bytes();
    let (offset, _) = result.split_at(KEY_SIZE);

    // parent = (child - offset) mod n; negating the offset scalar and
    // tweak-adding keeps the difference floor-normalized into [0, n)
    let offset = SecretKey::from_slice(offset).map_err(|_| Error::ScalarOutOfRange)?;
    let parent_secret = child.private_key().add_tweak(&Scalar::from(offset.negate()))?;

    ExtendedPrivateKey::from_private_key(parent_secret, parent.attrs())
        .to_extended_key(parent_xpub.version().to_private()?)
}

#[cfg(test)]
mod tests {
    use super::recover_parent_xprv;
    use crate::{neutered, ChildNumber, Error, ExtendedKey, ExtendedPrivateKey, Version};
    use secp256k1::SecretKey;

    fn master() -> ExtendedPrivateKey<SecretKey> {
        let mut seed = [0u8; 16];
        for (i, byte) in seed.iter_mut().enumerate() {
            *byte = i as u8;
        }
        ExtendedPrivateKey::new(seed).unwrap()
    }

    #[test]
    fn normal_child_recovers_parent() {
        let parent = master();
        let parent_xprv = parent.to_extended_key(Version::XPRV).unwrap();
        let parent_xpub = neutered(&parent_xprv).unwrap();

        let child = parent.derive_child(ChildNumber(0)).unwrap();
        let child_xprv = child.to_extended_key(Version::XPRV).unwrap();

        let recovered = recover_parent_xprv(&parent_xpub, &child_xprv).unwrap();
        assert_eq!(recovered, parent_xprv);
        assert_eq!(recovered.to_string(), parent_xprv.to_string());
    }

    #[test]
    fn recovery_survives_serialization() {
        let parent = master();
        let parent_xpub: ExtendedKey =
            neutered(&parent.to_extended_key(Version::XPRV).unwrap()).unwrap().to_string().parse().unwrap();
        let child_xprv: ExtendedKey =
            parent.derive_child(ChildNumber(42)).unwrap().to_extended_key(Version::XPRV).unwrap().to_string().parse().unwrap();

        let recovered = recover_parent_xprv(&parent_xpub, &child_xprv).unwrap();
        assert_eq!(recovered, parent.to_extended_key(Version::XPRV).unwrap());
    }

    #[test]
    fn hardened_child_is_immune() {
        let parent = master();
        let parent_xpub = neutered(&parent.to_extended_key(Version::XPRV).unwrap()).unwrap();
        let child = parent.derive_child(ChildNumber::new(0, true).unwrap()).unwrap();
        let child_xprv = child.to_extended_key(Version::XPRV).unwrap();

        assert!(matches!(recover_parent_xprv(&parent_xpub, &child_xprv), Err(Error::HardenedChildForCrack)));
    }

    #[test]
    fn grandchild_depth_mismatch() {
        let parent = master();
        let parent_xpub = neutered(&parent.to_extended_key(Version::XPRV).unwrap()).unwrap();
        let grandchild = parent.derive_child(ChildNumber(0)).unwrap().derive_child(ChildNumber(0)).unwrap();
        let grandchild_xprv = grandchild.to_extended_key(Version::XPRV).unwrap();

        assert!(matches!(
            recover_parent_xprv(&parent_xpub, &grandchild_xprv),
            Err(Error::DepthMismatch { parent: 0, child: 2 })
        ));
    }

    #[test]
    fn unrelated_parent_fingerprint_mismatch() {
        let parent = master();
        // same depth relation, different parent node
        let node_a = parent.derive_child(ChildNumber(0)).unwrap();
        let node_b = parent.derive_child(ChildNumber(1)).unwrap();

        let xpub_a = neutered(&node_a.to_extended_key(Version::XPRV).unwrap()).unwrap();
        let child_of_b = node_b.derive_child(ChildNumber(0)).unwrap().to_extended_key(Version::XPRV).unwrap();

        assert!(matches!(recover_parent_xprv(&xpub_a, &child_of_b), Err(Error::FingerprintMismatch)));
    }

    #[test]
    fn swapped_arguments_rejected() {
        let parent = master();
        let parent_xprv = parent.to_extended_key(Version::XPRV).unwrap();
        let child_xpub =
            neutered(&parent.derive_child(ChildNumber(0)).unwrap().to_extended_key(Version::XPRV).unwrap()).unwrap();

        assert!(matches!(recover_parent_xprv(&parent_xprv, &child_xpub), Err(Error::NotAPublicKey)));
        assert!(matches!(recover_parent_xprv(&child_xpub, &child_xpub), Err(Error::NotAPrivateKey)));
    }
}
