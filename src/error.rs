#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid lisk address: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid lisk32 address: wrong prefix (lsk)")]
    InvalidPrefix,

    #[error("invalid lisk32 address: expected {expected} characters, got {actual}")]
    InvalidEncodedLength { expected: usize, actual: usize },

    /// Unknown characters and checksum mismatches are reported alike.
    #[error("invalid lisk32 address: wrong checksum")]
    InvalidChecksumOrCharacter,

    #[error("invalid lisk32 address: wrong decoded length {0}")]
    InvalidDecodedLength(usize),

    #[error("bit conversion error: {0}")]
    BitConversion(bech32::Error),

    #[error("bit widths must be between 1 and 8, got {from_bits} -> {to_bits}")]
    InvalidBitWidth { from_bits: u32, to_bits: u32 },

    #[error("invalid public key: expected 32 bytes, got {0}")]
    InvalidPublicKeyLength(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
