use crate::{ChainCode, ChildNumber, Depth, KeyFingerprint};
use borsh::{BorshDeserialize, BorshSerialize};

/// Extended key attributes: fields common to extended keys including depth,
/// fingerprints, child numbers, and chain codes.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, BorshSerialize, BorshDeserialize)]
pub struct ExtendedKeyAttrs {
    /// Depth in the key derivation hierarchy.
    pub depth: Depth,

    /// Parent fingerprint.
    pub parent_fingerprint: KeyFingerprint,

    /// Child number.
    pub child_number: ChildNumber,

    /// Chain code.
    pub chain_code: ChainCode,
}

impl ExtendedKeyAttrs {
    /// Attributes of a master key: depth 0, zero fingerprint, zero index.
    pub fn master(chain_code: ChainCode) -> Self {
        ExtendedKeyAttrs {
            depth: 0,
            parent_fingerprint: KeyFingerprint::default(),
            child_number: ChildNumber::default(),
            chain_code,
        }
    }

    /// A master key sits at depth 0 with all-zero fingerprint and index.
    pub fn is_master(&self) -> bool {
        self.depth == 0
            && self.parent_fingerprint == KeyFingerprint::default()
            && self.child_number == ChildNumber::default()
    }
}
