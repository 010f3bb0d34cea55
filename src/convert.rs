use tracing::trace;

use crate::error::{Error, Result};

/// Regroups `data`, read as one big-endian bitstream of `from_bits`-wide
/// values, into `to_bits`-wide values. Both widths must be in `1..=8`.
///
/// With `pad` set, leftover bits are zero-filled into one final value.
/// Without it the leftover bits must be zero and narrower than `from_bits`.
pub fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>> {
    if !(1..=8).contains(&from_bits) || !(1..=8).contains(&to_bits) {
        return Err(Error::InvalidBitWidth { from_bits, to_bits });
    }

    bech32::convert_bits(data, from_bits, to_bits, pad).map_err(|err| {
        trace!(%err, from_bits, to_bits, pad, "bit conversion failed");
        Error::BitConversion(err)
    })
}
