pub const CHECKSUM_LENGTH: usize = 6;

const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// BCH residue of a sequence of 5-bit symbols. The human-readable prefix is
/// not part of the input.
pub fn polymod(v: &[u8]) -> u32 {
    let mut c: u32 = 1;

    for &d in v {
        let c0 = c >> 25;
        c = ((c & 0x1ffffff) << 5) ^ u32::from(d);

        for (i, generator) in GENERATOR.iter().enumerate() {
            if (c0 >> i) & 1 != 0 {
                c ^= generator;
            }
        }
    }

    c ^ 1
}

/// Six checksum symbols for `payload`, most significant group first.
pub fn create_checksum(payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut combined_data = Vec::with_capacity(payload.len() + CHECKSUM_LENGTH);
    combined_data.extend_from_slice(payload);
    combined_data.extend_from_slice(&[0; CHECKSUM_LENGTH]);

    let poly = polymod(&combined_data);

    let mut out = [0u8; CHECKSUM_LENGTH];
    for (i, symbol) in out.iter_mut().enumerate() {
        *symbol = ((poly >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }

    out
}

/// `data` is the payload with its checksum symbols appended.
pub fn verify_checksum(data: &[u8]) -> bool {
    polymod(data) == 0
}
