//! Version tags for serialized extended keys and the network registry.
//!
//! Every extended key starts with a 4-byte tag identifying its network, its
//! purpose family (legacy, p2sh-segwit, native segwit, and their multisig
//! variants) and whether the key material is private or public. The registry
//! holds two parallel lists of equal length: index `i` in the private list
//! names the same purpose family as index `i` in the public list. Neutering
//! and cracking rely on that pairing to swap a tag for its counterpart.

use crate::{Error, Result};
use core::fmt::{self, Display};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 4-byte (big-endian) extended key version tag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Version(u32);

impl Version {
    /// Mainnet P2PKH or P2SH (`xprv`).
    pub const XPRV: Version = Version(0x0488_ADE4);
    /// Mainnet p2sh-segwit P2WPKH-P2SH (`yprv`).
    pub const YPRV: Version = Version(0x049D_7878);
    /// Mainnet native segwit P2WPKH (`zprv`).
    pub const ZPRV: Version = Version(0x04B2_430C);
    /// Mainnet p2sh-segwit multisig P2WSH-P2SH (`Yprv`).
    pub const YPRV_MULTISIG: Version = Version(0x0295_B005);
    /// Mainnet native segwit multisig P2WSH (`Zprv`).
    pub const ZPRV_MULTISIG: Version = Version(0x02AA_7A99);

    /// Mainnet P2PKH or P2SH (`xpub`).
    pub const XPUB: Version = Version(0x0488_B21E);
    /// Mainnet p2sh-segwit P2WPKH-P2SH (`ypub`).
    pub const YPUB: Version = Version(0x049D_7CB2);
    /// Mainnet native segwit P2WPKH (`zpub`).
    pub const ZPUB: Version = Version(0x04B2_4746);
    /// Mainnet p2sh-segwit multisig P2WSH-P2SH (`Ypub`).
    pub const YPUB_MULTISIG: Version = Version(0x0295_B43F);
    /// Mainnet native segwit multisig P2WSH (`Zpub`).
    pub const ZPUB_MULTISIG: Version = Version(0x02AA_7ED3);

    /// Testnet P2PKH or P2SH (`tprv`).
    pub const TPRV: Version = Version(0x0435_8394);
    /// Testnet p2sh-segwit P2WPKH-P2SH (`uprv`).
    pub const UPRV: Version = Version(0x044A_4E28);
    /// Testnet native segwit P2WPKH (`vprv`).
    pub const VPRV: Version = Version(0x045F_18BC);
    /// Testnet p2sh-segwit multisig P2WSH-P2SH (`Uprv`).
    pub const UPRV_MULTISIG: Version = Version(0x0242_85B5);
    /// Testnet native segwit multisig P2WSH (`Vprv`).
    pub const VPRV_MULTISIG: Version = Version(0x0257_5048);

    /// Testnet P2PKH or P2SH (`tpub`).
    pub const TPUB: Version = Version(0x0435_87CF);
    /// Testnet p2sh-segwit P2WPKH-P2SH (`upub`).
    pub const UPUB: Version = Version(0x044A_5262);
    /// Testnet native segwit P2WPKH (`vpub`).
    pub const VPUB: Version = Version(0x045F_1CF6);
    /// Testnet p2sh-segwit multisig P2WSH-P2SH (`Upub`).
    pub const UPUB_MULTISIG: Version = Version(0x0242_89EF);
    /// Testnet native segwit multisig P2WSH (`Vpub`).
    pub const VPUB_MULTISIG: Version = Version(0x0257_5483);

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Version(u32::from_be_bytes(bytes))
    }

    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Family and paired-list position of this tag, if registry-known.
    pub fn family(self) -> Option<KeyFamily> {
        FAMILIES.get(&self.0).copied()
    }

    pub fn is_known(self) -> bool {
        self.family().is_some()
    }

    pub fn is_private(self) -> bool {
        matches!(self.family(), Some(KeyFamily::Private(_)))
    }

    pub fn is_public(self) -> bool {
        matches!(self.family(), Some(KeyFamily::Public(_)))
    }

    /// The public tag of the same purpose family.
    pub fn to_public(self) -> Result<Version> {
        match self.family() {
            Some(KeyFamily::Private(i)) => Ok(PUB_VERSIONS[i]),
            Some(KeyFamily::Public(_)) => Ok(self),
            None => Err(Error::InvalidVersion(self.0)),
        }
    }

    /// The private tag of the same purpose family.
    pub fn to_private(self) -> Result<Version> {
        match self.family() {
            Some(KeyFamily::Public(i)) => Ok(PRV_VERSIONS[i]),
            Some(KeyFamily::Private(_)) => Ok(self),
            None => Err(Error::InvalidVersion(self.0)),
        }
    }

    /// Network this tag belongs to.
    pub fn network(self) -> Result<Network> {
        let (KeyFamily::Private(i) | KeyFamily::Public(i)) =
            self.family().ok_or(Error::InvalidVersion(self.0))?;
        // both lists are ordered mainnet purposes first, then testnet
        if i < PRV_VERSIONS.len() / 2 {
            Ok(Network::Mainnet)
        } else {
            Ok(Network::Testnet)
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Family of a registry-known version tag, carrying its position in the
/// paired lists.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyFamily {
    Private(usize),
    Public(usize),
}

/// Private version tags, mainnet purposes first.
pub const PRV_VERSIONS: [Version; 10] = [
    Version::XPRV,
    Version::YPRV,
    Version::ZPRV,
    Version::YPRV_MULTISIG,
    Version::ZPRV_MULTISIG,
    Version::TPRV,
    Version::UPRV,
    Version::VPRV,
    Version::UPRV_MULTISIG,
    Version::VPRV_MULTISIG,
];

/// Public version tags, paired with [`PRV_VERSIONS`] by index.
pub const PUB_VERSIONS: [Version; 10] = [
    Version::XPUB,
    Version::YPUB,
    Version::ZPUB,
    Version::YPUB_MULTISIG,
    Version::ZPUB_MULTISIG,
    Version::TPUB,
    Version::UPUB,
    Version::VPUB,
    Version::UPUB_MULTISIG,
    Version::VPUB_MULTISIG,
];

static FAMILIES: Lazy<HashMap<u32, KeyFamily>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(PRV_VERSIONS.len() + PUB_VERSIONS.len());
    for (i, version) in PRV_VERSIONS.iter().enumerate() {
        map.insert(version.0, KeyFamily::Private(i));
    }
    for (i, version) in PUB_VERSIONS.iter().enumerate() {
        map.insert(version.0, KeyFamily::Public(i));
    }
    map
});

/// Networks known to the registry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Leading payload byte of a WIF-encoded private key on this network.
    pub fn wif_prefix(self) -> u8 {
        match self {
            Network::Mainnet => 0x80,
            Network::Testnet => 0xEF,
        }
    }

    /// Reverse lookup of [`Network::wif_prefix`].
    pub fn from_wif_prefix(prefix: u8) -> Option<Network> {
        match prefix {
            0x80 => Some(Network::Mainnet),
            0xEF => Some(Network::Testnet),
            _ => None,
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}
