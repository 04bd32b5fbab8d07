//! Child number: a 32-bit index with the high bit marking hardened derivation.

use crate::{Error, Result};
use borsh::{BorshDeserialize, BorshSerialize};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use serde::{Deserialize, Serialize};

/// Index of a particular child key for a given (extended) private key.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash,
    BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Hardened child numbers have this bit set.
    pub const HARDENED_FLAG: u32 = 1 << 31;

    /// Build a child number from an index below [`Self::HARDENED_FLAG`] and a
    /// hardened flag.
    pub fn new(index: u32, hardened: bool) -> Result<Self> {
        if index & Self::HARDENED_FLAG != 0 {
            return Err(Error::ChildNumber);
        }
        Ok(ChildNumber(if hardened { index | Self::HARDENED_FLAG } else { index }))
    }

    /// Is this child number hardened?
    pub fn is_hardened(self) -> bool {
        self.0 & Self::HARDENED_FLAG != 0
    }

    /// Index of this child number, with the hardened bit cleared.
    pub fn index(self) -> u32 {
        self.0 & !Self::HARDENED_FLAG
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        ChildNumber(u32::from_be_bytes(bytes))
    }

    /// Serialize as big-endian, the form hashed into the child HMAC.
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<ChildNumber> for u32 {
    fn from(child_number: ChildNumber) -> u32 {
        child_number.0
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;

        if self.is_hardened() {
            write!(f, "'")?;
        }

        Ok(())
    }
}

impl FromStr for ChildNumber {
    type Err = Error;

    fn from_str(child: &str) -> Result<ChildNumber> {
        match child.strip_suffix(['\'', 'h', 'H']) {
            Some(index) => {
                let index = index.parse::<u32>().map_err(|_| Error::ChildNumber)?;
                ChildNumber::new(index, true)
            }
            None => {
                let index = child.parse::<u32>().map_err(|_| Error::ChildNumber)?;
                ChildNumber::new(index, false)
            }
        }
    }
}
