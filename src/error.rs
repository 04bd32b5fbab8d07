//! Error type.
//!
//! Every validation failure names the specific invariant that was violated;
//! key handling mistakes are security relevant and must not collapse into a
//! generic decode error.

use thiserror::Error;

/// [`Error`](enum@Error) variants emitted by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    String(String),

    #[error("base58 encode error: {0}")]
    Base58Encode(#[from] bs58::encode::Error),

    #[error("base58 decode error: {0}")]
    Base58Decode(#[from] bs58::decode::Error),

    #[error("decoded extended key is {0} bytes, expected {1}")]
    DecodeLength(usize, usize),

    #[error("unknown extended key version {0:#010x}")]
    InvalidVersion(u32),

    #[error("key material does not match the extended key version family")]
    VersionKeyTypeMismatch,

    #[error("absolute derivation path requires the master key")]
    NotMasterKey,

    #[error("hardened derivation from a public key")]
    HardenedFromPublic,

    #[error("maximum derivation depth exceeded")]
    DepthOverflow,

    #[error("child depth {child} does not extend parent depth {parent}")]
    DepthMismatch { parent: u8, child: u8 },

    #[error("child fingerprint does not match the parent public key")]
    FingerprintMismatch,

    #[error("hardened children cannot be cracked")]
    HardenedChildForCrack,

    #[error("extended key is not a private one")]
    NotAPrivateKey,

    #[error("extended key is not a public one")]
    NotAPublicKey,

    #[error("private key scalar not in [1, n-1]")]
    ScalarOutOfRange,

    #[error("wrong WIF payload size ({0})")]
    WrongWifSize(usize),

    #[error("key material conflicts with the requested network or compression")]
    ConsistencyMismatch,

    #[error("unrecognized private key format")]
    UnrecognizedKeyFormat,

    #[error("invalid child number")]
    ChildNumber,

    #[error("HMAC error: {0}")]
    Hmac(#[from] hmac::digest::InvalidLength),

    #[error("secp256k1 error: {0}")]
    Crypto(#[from] secp256k1::Error),

    #[error("decoding error: {0}")]
    Decode(#[from] core::array::TryFromSliceError),

    #[error("utf8 error: {0}")]
    Utf8Error(#[from] core::str::Utf8Error),
}

impl From<secp256k1::scalar::OutOfRangeError> for Error {
    fn from(_: secp256k1::scalar::OutOfRangeError) -> Error {
        Error::ScalarOutOfRange
    }
}
