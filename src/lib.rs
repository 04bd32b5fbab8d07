//! BIP32 hierarchical deterministic keys over secp256k1.
//!
//! A deterministic wallet is a hash-chain of private/public key pairs derived
//! from a single root secret, structured as a tree so sub-branches can be
//! shared independently of the root. This crate implements the extended key
//! codec, child key derivation (normal and hardened), path-driven derivation,
//! neutering, the inversion that recovers a parent private key from a parent
//! public key plus one normally derived child private key, and a resolver
//! that normalizes private key material from several encodings.

pub use secp256k1;
pub use secp256k1::SecretKey;

mod attrs;
mod child_number;
mod crack;
mod derivation_path;
mod derive;
mod error;
mod private_key;
mod prvkey;
mod public_key;
mod result;
pub mod types;
mod version;
mod xkey;
mod xprivate_key;
mod xpublic_key;

pub use attrs::ExtendedKeyAttrs;
pub use child_number::ChildNumber;
pub use crack::recover_parent_xprv;
pub use derivation_path::{Anchor, DerivationPath};
pub use derive::{derive_child, derive_path, master_from_seed};
pub use error::Error;
pub use private_key::PrivateKey;
pub use prvkey::{prvkey_info, PrvKey, PrvKeyInfo};
pub use public_key::PublicKey;
pub use result::Result;
pub use types::*;
pub use version::{KeyFamily, Network, Version, PRV_VERSIONS, PUB_VERSIONS};
pub use xkey::ExtendedKey;
pub use xprivate_key::ExtendedPrivateKey;
pub use xpublic_key::{neutered, ExtendedPublicKey};

/// Extended private key over the secp256k1 group.
pub type Xprv = ExtendedPrivateKey<secp256k1::SecretKey>;

/// Extended public key over the secp256k1 group.
pub type Xpub = ExtendedPublicKey<secp256k1::PublicKey>;
