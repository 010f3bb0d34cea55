const CHARSET: [char; 32] = [
    'z', 'x', 'v', 'c', 'p', 'm', 'b', 'n', //  +0
    '3', '4', '6', '5', 'o', '9', '7', '8', //  +8
    'u', 'y', 'r', 't', 'k', 'q', 'e', 'w', // +16
    '2', 'a', 'd', 's', 'j', 'h', 'f', 'g', // +24
];

/// Inverse of `CHARSET` over ASCII.
const CHARSET_REV: [Option<u8>; 128] = {
    let mut table = [None; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        table[CHARSET[i] as u32 as usize] = Some(i as u8);
        i += 1;
    }
    table
};

/// Character for a 5-bit value. Panics if `value > 31`.
pub(crate) fn to_char(value: u8) -> char {
    CHARSET[value as usize]
}

/// 5-bit value of `c`, or `None` when `c` is not in the alphabet.
pub fn from_char(c: char) -> Option<u8> {
    CHARSET_REV.get(u32::from(c) as usize).copied().flatten()
}

pub(crate) fn b32encode(inputs: &[u8]) -> String {
    inputs.iter().map(|&value| to_char(value)).collect()
}
