//! Private key normalization.
//!
//! Key material arrives from the wild in several incompatible encodings. The
//! resolver accepts a closed set of shapes and reduces each to one canonical
//! form: a range-checked scalar plus the network and compression flag the
//! encoding carried (or the caller-supplied defaults when it carried none).

use secp256k1::SecretKey;

use crate::{Error, ExtendedKey, Network, PrivateKeyBytes, Result, KEY_SIZE};

/// Recognized shapes of private key material.
#[derive(Clone, Debug)]
pub enum PrvKey {
    /// Raw big-endian scalar.
    Scalar(PrivateKeyBytes),
    /// Structured extended key record; must carry private key material.
    Xprv(ExtendedKey),
    /// Text: WIF, Base58Check-encoded extended key, or fixed-width hex.
    Text(String),
    /// Opaque bytes: ASCII of any text form, or fixed-width raw octets.
    Bytes(Vec<u8>),
}

/// Canonical form every [`PrvKey`] reduces to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PrvKeyInfo {
    /// Validated scalar in `[1, n-1]`.
    pub secret_key: SecretKey,
    /// Network the material belongs to.
    pub network: Network,
    /// Whether the corresponding public key serializes compressed.
    pub compressed: bool,
}

/// Normalize `key` to a `(scalar, network, compressed)` triple.
///
/// `network` and `compressed` are expectations, not overrides: when the key
/// material itself pins either one and the caller disagrees, resolution fails
/// with [`Error::ConsistencyMismatch`]. For bare scalars and raw octets,
/// which pin neither, they act as defaults (mainnet, compressed).
pub fn prvkey_info(key: &PrvKey, network: Option<Network>, compressed: Option<bool>) -> Result<PrvKeyInfo> {
    match key {
        PrvKey::Scalar(bytes) => info_from_scalar(bytes, network, compressed),
        PrvKey::Xprv(xkey) => info_from_xprv(xkey, network, compressed),
        PrvKey::Text(text) => info_from_text(text, network, compressed)?.ok_or(Error::UnrecognizedKeyFormat),
        PrvKey::Bytes(bytes) => info_from_bytes(bytes, network, compressed)?.ok_or(Error::UnrecognizedKeyFormat),
    }
}

fn info_from_scalar(bytes: &PrivateKeyBytes, network: Option<Network>, compressed: Option<bool>) -> Result<PrvKeyInfo> {
    let secret_key = SecretKey::from_slice(bytes).map_err(|_| Error::ScalarOutOfRange)?;
    Ok(PrvKeyInfo {
        secret_key,
        network: network.unwrap_or(Network::Mainnet),
        compressed: compressed.unwrap_or(true),
    })
}

fn info_from_xprv(xkey: &ExtendedKey, network: Option<Network>, compressed: Option<bool>) -> Result<PrvKeyInfo> {
    // extended keys always describe compressed public key material
    if compressed == Some(false) {
        return Err(Error::ConsistencyMismatch);
    }

    if !xkey.is_private() || xkey.key_bytes()[0] != 0 {
        return Err(Error::NotAPrivateKey);
    }

    let key_network = xkey.version().network()?;
    if network.is_some_and(|expected| expected != key_network) {
        return Err(Error::ConsistencyMismatch);
    }

    let secret_key = SecretKey::from_slice(&xkey.key_bytes()[1..]).map_err(|_| Error::ScalarOutOfRange)?;
    Ok(PrvKeyInfo { secret_key, network: key_network, compressed: true })
}

/// WIF probe. `Ok(None)` means "not WIF-shaped"; an error means the input is
/// WIF-shaped but invalid.
fn info_from_wif(wif: &str, network: Option<Network>, compressed: Option<bool>) -> Result<Option<PrvKeyInfo>> {
    let payload = match bs58::decode(wif.trim()).with_check(None).into_vec() {
        Ok(payload) => payload,
        Err(_) => return Ok(None),
    };

    let wif_network = match payload.first().copied().and_then(Network::from_wif_prefix) {
        Some(network) => network,
        None => return Ok(None),
    };

    let (compr, scalar_bytes) = if payload.len() == KEY_SIZE + 2 {
        if payload[KEY_SIZE + 1] != 0x01 {
            return Err(Error::String("compressed WIF missing its trailing 0x01".into()));
        }
        (true, &payload[1..=KEY_SIZE])
    } else if payload.len() == KEY_SIZE + 1 {
        (false, &payload[1..])
    } else {
        return Err(Error::WrongWifSize(payload.len()));
    };

    if compressed.is_some_and(|expected| expected != compr) {
        return Err(Error::ConsistencyMismatch);
    }
    if network.is_some_and(|expected| expected != wif_network) {
        return Err(Error::ConsistencyMismatch);
    }

    let secret_key = SecretKey::from_slice(scalar_bytes).map_err(|_| Error::ScalarOutOfRange)?;
    Ok(Some(PrvKeyInfo { secret_key, network: wif_network, compressed: compr }))
}

/// Ordered probes over a text form: WIF, then encoded extended key, then
/// fixed-width hex octets. First success wins.
fn info_from_text(text: &str, network: Option<Network>, compressed: Option<bool>) -> Result<Option<PrvKeyInfo>> {
    if let Some(info) = info_from_wif(text, network, compressed)? {
        return Ok(Some(info));
    }

    let text = text.trim();
    if let Ok(xkey) = text.parse::<ExtendedKey>() {
        return info_from_xprv(&xkey, network, compressed).map(Some);
    }

    if text.len() == 2 * KEY_SIZE {
        let mut bytes = [0u8; KEY_SIZE];
        if faster_hex::hex_decode(text.as_bytes(), &mut bytes).is_ok() {
            return info_from_scalar(&bytes, network, compressed).map(Some);
        }
    }

    Ok(None)
}

fn info_from_bytes(bytes: &[u8], network: Option<Network>, compressed: Option<bool>) -> Result<Option<PrvKeyInfo>> {
    if let Ok(text) = core::str::from_utf8(bytes) {
        if let Some(info) = info_from_text(text, network, compressed)? {
            return Ok(Some(info));
        }
    }

    if bytes.len() == KEY_SIZE {
        let scalar: PrivateKeyBytes = bytes.try_into()?;
        return info_from_scalar(&scalar, network, compressed).map(Some);
    }

    Ok(None)
}
