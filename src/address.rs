use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::{
    charset,
    checksum::{self, CHECKSUM_LENGTH},
    convert::convert_bits,
    error::{Error, Result},
    utils::impl_debug_hex,
};

pub const LISK32_PREFIX: &str = "lsk";
pub const ADDRESS_LENGTH: usize = 20;
pub const PUBLIC_KEY_LENGTH: usize = 32;

const PAYLOAD_SYMBOLS: usize = 32;
pub const ENCODED_LENGTH: usize = LISK32_PREFIX.len() + PAYLOAD_SYMBOLS + CHECKSUM_LENGTH;

/// Encodes a 20 byte address as `lsk` followed by 38 base32 characters.
pub fn encode(address: &[u8]) -> Result<String> {
    if address.len() != ADDRESS_LENGTH {
        return Err(Error::InvalidLength {
            expected: ADDRESS_LENGTH,
            actual: address.len(),
        });
    }

    let mut payload = convert_bits(address, 8, 5, true)?;
    let checksum = checksum::create_checksum(&payload);
    payload.extend_from_slice(&checksum);

    Ok(format!("{}{}", LISK32_PREFIX, charset::b32encode(&payload)))
}

/// Decodes a lisk32 string back into the 20 address bytes.
///
/// Every character is translated before anything is rejected, and the
/// checksum is always evaluated. An unknown character and a bad checksum
/// both surface as [`Error::InvalidChecksumOrCharacter`].
pub fn decode(address: &str) -> Result<[u8; ADDRESS_LENGTH]> {
    let Some(data) = address.strip_prefix(LISK32_PREFIX) else {
        debug!(address, "rejecting lisk32 address without prefix");
        return Err(Error::InvalidPrefix);
    };

    let data_len = data.chars().count();
    if data_len != PAYLOAD_SYMBOLS + CHECKSUM_LENGTH {
        debug!(address, data_len, "rejecting lisk32 address of wrong length");
        return Err(Error::InvalidEncodedLength {
            expected: ENCODED_LENGTH,
            actual: LISK32_PREFIX.len() + data_len,
        });
    }

    let mut invalid_char = false;
    let data: Vec<u8> = data
        .chars()
        .map(|c| match charset::from_char(c) {
            Some(value) => value,
            None => {
                invalid_char = true;
                0
            }
        })
        .collect();

    let checksum_ok = checksum::verify_checksum(&data);
    if invalid_char || !checksum_ok {
        debug!(address, invalid_char, checksum_ok, "rejecting lisk32 address");
        return Err(Error::InvalidChecksumOrCharacter);
    }

    let decoded = convert_bits(&data[..PAYLOAD_SYMBOLS], 5, 8, false)?;

    <[u8; ADDRESS_LENGTH]>::try_from(decoded.as_slice()).map_err(|_| {
        debug!(address, decoded_len = decoded.len(), "wrong decoded length");
        Error::InvalidDecodedLength(decoded.len())
    })
}

pub fn validate(address: &str) -> bool {
    decode(address).is_ok()
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LENGTH]);
impl_debug_hex!(Address);

impl Address {
    pub fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// First 20 bytes of the SHA-256 digest of an ed25519 public key.
    pub fn from_public_key(public_key: &[u8]) -> Result<Self> {
        if public_key.len() != PUBLIC_KEY_LENGTH {
            return Err(Error::InvalidPublicKeyLength(public_key.len()));
        }

        let digest = Sha256::digest(public_key);
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&digest[..ADDRESS_LENGTH]);
        Ok(Self(bytes))
    }

    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self(rng.gen())
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex::decode(hex)?;
        Self::try_from(bytes.as_slice())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(value: [u8; ADDRESS_LENGTH]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes = <[u8; ADDRESS_LENGTH]>::try_from(value).map_err(|_| Error::InvalidLength {
            expected: ADDRESS_LENGTH,
            actual: value.len(),
        })?;
        Ok(Self(bytes))
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s).map(Self)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = encode(&self.0).map_err(|_| std::fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, s: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        String::deserialize(deserializer)
            .and_then(|string| Address::from_str(&string).map_err(|err| Error::custom(err.to_string())))
    }
}
