//! Codec for serialized extended key types (i.e. `xprv` and `xpub`).

use crate::{ChildNumber, Error, ExtendedKeyAttrs, Result, Version, KEY_SIZE};
use core::{
    fmt::{self, Display},
    str::{self, FromStr},
};
use zeroize::Zeroize;

/// Serialized extended key (e.g. `xprv` and `xpub`).
///
/// Decoding through [`FromStr`] is the only way to build one of these from
/// the wild: the version tag must be registry-known and must agree with the
/// leading key material byte (`0x00` for private, `0x02`/`0x03` for public).
#[derive(Clone)]
pub struct ExtendedKey {
    /// Version tag of the key (e.g. `xprv`, `xpub`).
    pub(crate) version: Version,

    /// Extended key attributes.
    pub(crate) attrs: ExtendedKeyAttrs,

    /// Key material (may be public or private).
    ///
    /// Includes an extra byte for a private key's `0x00` pad or a public
    /// key's SEC1 tag.
    pub(crate) key_bytes: [u8; KEY_SIZE + 1],
}

impl ExtendedKey {
    /// Size of an extended key when deserialized into bytes from Base58.
    pub const BYTE_SIZE: usize = 78;

    /// Maximum size of a Base58Check-encoded extended key in bytes.
    pub const MAX_BASE58_SIZE: usize = 112;

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    pub fn key_bytes(&self) -> &[u8; KEY_SIZE + 1] {
        &self.key_bytes
    }

    /// Does this key carry private key material?
    pub fn is_private(&self) -> bool {
        self.version.is_private()
    }

    /// Does this key carry public key material?
    pub fn is_public(&self) -> bool {
        self.version.is_public()
    }

    /// Write a Base58-encoded key to the provided buffer, returning a `&str`
    /// containing the serialized data.
    ///
    /// Note that this type also impls [`Display`] and therefore you can
    /// obtain an owned string by calling `to_string()`.
    pub fn write_base58<'a>(&self, buffer: &'a mut [u8; Self::MAX_BASE58_SIZE]) -> Result<&'a str> {
        let mut bytes = [0u8; Self::BYTE_SIZE];
        bytes[..4].copy_from_slice(&self.version.to_bytes());
        bytes[4] = self.attrs.depth;
        bytes[5..9].copy_from_slice(&self.attrs.parent_fingerprint);
        bytes[9..13].copy_from_slice(&self.attrs.child_number.to_bytes());
        bytes[13..45].copy_from_slice(&self.attrs.chain_code);
        bytes[45..78].copy_from_slice(&self.key_bytes);

        let base58_len = bs58::encode(&bytes).with_check().onto(buffer.as_mut())?;
        bytes.zeroize();

        str::from_utf8(&buffer[..base58_len]).map_err(Error::Utf8Error)
    }
}

impl Display for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; Self::MAX_BASE58_SIZE];
        self.write_base58(&mut buf).map_err(|_| fmt::Error).and_then(|base58| f.write_str(base58))
    }
}

impl FromStr for ExtendedKey {
    type Err = Error;

    fn from_str(base58: &str) -> Result<Self> {
        let mut bytes = [0u8; Self::BYTE_SIZE + 4]; // with 4-byte checksum
        let decoded_len = bs58::decode(base58).with_check(None).onto(&mut bytes)?;

        if decoded_len != Self::BYTE_SIZE {
            bytes.zeroize();
            return Err(Error::DecodeLength(decoded_len, Self::BYTE_SIZE));
        }

        let version = Version::from_bytes(bytes[..4].try_into()?);
        let key_type = bytes[45];
        match version.family() {
            None => {
                bytes.zeroize();
                return Err(Error::InvalidVersion(version.as_u32()));
            }
            Some(crate::KeyFamily::Private(_)) if key_type != 0 => {
                bytes.zeroize();
                return Err(Error::VersionKeyTypeMismatch);
            }
            Some(crate::KeyFamily::Public(_)) if !matches!(key_type, 2 | 3) => {
                bytes.zeroize();
                return Err(Error::VersionKeyTypeMismatch);
            }
            _ => {}
        }

        let depth = bytes[4];
        let parent_fingerprint = bytes[5..9].try_into()?;
        let child_number = ChildNumber::from_bytes(bytes[9..13].try_into()?);
        let chain_code = bytes[13..45].try_into()?;
        let key_bytes = bytes[45..78].try_into()?;
        bytes.zeroize();

        let attrs = ExtendedKeyAttrs { depth, parent_fingerprint, child_number, chain_code };

        Ok(ExtendedKey { version, attrs, key_bytes })
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        self.key_bytes.zeroize();
    }
}

impl PartialEq for ExtendedKey {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.attrs == other.attrs && self.key_bytes == other.key_bytes
    }
}

impl Eq for ExtendedKey {}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("version", &self.version)
            .field("attrs", &self.attrs)
            .field("key_bytes", &"...")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ExtendedKey;
    use crate::{Error, Version};
    use faster_hex::hex_decode_fallback;

    macro_rules! hex {
        ($str: literal) => {{
            let len = $str.as_bytes().len() / 2;
            let mut dst = vec![0; len];
            dst.resize(len, 0);
            hex_decode_fallback($str.as_bytes(), &mut dst);
            dst
        }
        [..]};
    }

    #[test]
    fn bip32_test_vector_1_xprv() {
        let xprv_base58 = "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPP\
            qjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi";

        let xprv = xprv_base58.parse::<ExtendedKey>();
        assert!(xprv.is_ok(), "Could not parse key");
        let xprv = xprv.unwrap();
        assert_eq!(xprv.version(), Version::XPRV);
        assert!(xprv.is_private());
        assert_eq!(xprv.attrs.depth, 0);
        assert_eq!(xprv.attrs.parent_fingerprint, [0u8; 4]);
        assert_eq!(xprv.attrs.child_number.0, 0);
        assert_eq!(xprv.attrs.chain_code, hex!("873DFF81C02F525623FD1FE5167EAC3A55A049DE3D314BB42EE227FFED37D508"));
        assert_eq!(xprv.key_bytes, hex!("00E8F32E723DECF4051AEFAC8E2C93C9C5B214313817CDB01A1494B917C8436B35"));
        assert_eq!(&xprv.to_string(), xprv_base58);
    }

    #[test]
    fn bip32_test_vector_1_xpub() {
        let xpub_base58 = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhe\
             PY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8";

        let xpub = xpub_base58.parse::<ExtendedKey>();
        assert!(xpub.is_ok(), "Could not parse key");
        let xpub = xpub.unwrap();
        assert_eq!(xpub.version(), Version::XPUB);
        assert!(xpub.is_public());
        assert_eq!(xpub.attrs.depth, 0);
        assert_eq!(xpub.attrs.parent_fingerprint, [0u8; 4]);
        assert_eq!(xpub.attrs.child_number.0, 0);
        assert_eq!(xpub.attrs.chain_code, hex!("873DFF81C02F525623FD1FE5167EAC3A55A049DE3D314BB42EE227FFED37D508"));
        assert_eq!(xpub.key_bytes, hex!("0339A36013301597DAEF41FBE593A02CC513D0B55527EC2DF1050E2E8FF49C85C2"));
        assert_eq!(&xpub.to_string(), xpub_base58);
    }

    #[test]
    fn rejects_bad_checksum() {
        // last character tampered with
        let tampered = "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPP\
            qjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHj";
        assert!(matches!(tampered.parse::<ExtendedKey>(), Err(Error::Base58Decode(_))));
    }

    #[test]
    fn rejects_wrong_length() {
        let short = bs58::encode(&[0u8; 40]).with_check().into_string();
        assert!(matches!(short.parse::<ExtendedKey>(), Err(Error::DecodeLength(40, 78))));
    }

    #[test]
    fn rejects_unknown_version() {
        let mut bytes = [0u8; ExtendedKey::BYTE_SIZE];
        bytes[..4].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        bytes[45] = 0x02;
        let encoded = bs58::encode(&bytes).with_check().into_string();
        assert!(matches!(encoded.parse::<ExtendedKey>(), Err(Error::InvalidVersion(0xdeadbeef))));
    }

    #[test]
    fn rejects_version_key_type_mismatch() {
        // private version tag over public key material
        let mut bytes = [0u8; ExtendedKey::BYTE_SIZE];
        bytes[..4].copy_from_slice(&Version::XPRV.to_bytes());
        bytes[45] = 0x02;
        bytes[46] = 0x01;
        let encoded = bs58::encode(&bytes).with_check().into_string();
        assert!(matches!(encoded.parse::<ExtendedKey>(), Err(Error::VersionKeyTypeMismatch)));

        // public version tag over private key material
        let mut bytes = [0u8; ExtendedKey::BYTE_SIZE];
        bytes[..4].copy_from_slice(&Version::XPUB.to_bytes());
        bytes[46] = 0x01;
        let encoded = bs58::encode(&bytes).with_check().into_string();
        assert!(matches!(encoded.parse::<ExtendedKey>(), Err(Error::VersionKeyTypeMismatch)));
    }
}
