//! Windows-1255 (Hebrew code page) boundary.
//!
//! The legacy renderer in [`crate::format`] produces Windows-1255 bytes. This
//! module is the one place those bytes turn into (or come from) Unicode text.

/// Contiguous byte ranges of the code page and the code point of their first byte.
const HEBREW_RANGES: [(u8, u8, u32); 4] = [
    // points sheva..holam
    (0xC0, 0xC9, 0x05B0),
    // qubuts..sof pasuq
    (0xCB, 0xD3, 0x05BB),
    // yiddish ligatures, geresh, gershayim
    (0xD4, 0xD8, 0x05F0),
    // alef..tav, final forms included
    (0xE0, 0xFA, 0x05D0),
];

fn decode_byte(byte: u8) -> char {
    if byte.is_ascii() {
        return char::from(byte);
    }
    HEBREW_RANGES
        .iter()
        .find(|(lo, hi, _)| (*lo..=*hi).contains(&byte))
        .and_then(|(lo, _, base)| char::from_u32(base + u32::from(byte - lo)))
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Windows-1255 byte for `c`, if the code page has one in the mapped ranges.
pub fn encode_char(c: char) -> Option<u8> {
    if c.is_ascii() {
        return u8::try_from(c).ok();
    }
    let code = u32::from(c);
    HEBREW_RANGES.iter().find_map(|(lo, hi, base)| {
        let offset = code.checked_sub(*base)?;
        let byte = u8::try_from(offset).ok()?.checked_add(*lo)?;
        (byte <= *hi).then_some(byte)
    })
}

/// Encodes `text`, writing `?` for characters outside the code page.
pub fn utf8_to_windows_1255(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| encode_char(c).unwrap_or(b'?'))
        .collect()
}

/// Decodes Windows-1255 bytes. Unmapped bytes become U+FFFD.
pub fn windows_1255_to_utf8(bytes: &[u8]) -> String {
    bytes.iter().copied().map(decode_byte).collect()
}
