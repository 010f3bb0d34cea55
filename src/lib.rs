//! Lisk32 addresses: 20 byte account identifiers rendered as `lsk` followed
//! by 32 base32 payload characters and a 6 character BCH checksum.

pub mod address;
pub mod charset;
pub mod checksum;
pub mod convert;
pub mod error;
pub(crate) mod utils;

pub use address::{
    decode, encode, validate, Address, ADDRESS_LENGTH, ENCODED_LENGTH, LISK32_PREFIX,
    PUBLIC_KEY_LENGTH,
};
pub use error::{Error, Result};
