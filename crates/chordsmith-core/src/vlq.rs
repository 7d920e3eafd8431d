//! MIDI variable-length quantities

/// Append the VLQ encoding of `value` to `buf`.
///
/// Big-endian 7-bit groups; every byte except the last carries the
/// continuation bit. Deltas below 128 are a single byte, which is why
/// a fixed-width shortcut here survives short holds and breaks at 128
/// ticks and beyond.
pub fn encode_into(buf: &mut Vec<u8>, mut value: u32) {
    let mut bytes = [0u8; 5];
    let mut i = 4;
    bytes[i] = (value & 0x7F) as u8;
    value >>= 7;
    while value > 0 {
        i -= 1;
        bytes[i] = ((value & 0x7F) | 0x80) as u8;
        value >>= 7;
    }
    buf.extend_from_slice(&bytes[i..]);
}

/// VLQ encoding of `value` as a fresh buffer
pub fn encode(value: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(5);
    encode_into(&mut buf, value);
    buf
}

/// Decode one VLQ from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed, or `None` if
/// the slice ends before a terminating byte (high bit clear) or the
/// value would overflow 32 bits.
pub fn decode(bytes: &[u8]) -> Option<(u32, usize)> {
    let mut value: u64 = 0;
    for (i, &b) in bytes.iter().enumerate() {
        value = (value << 7) | (b & 0x7F) as u64;
        if value > u32::MAX as u64 {
            return None;
        }
        if b & 0x80 == 0 {
            return Some((value as u32, i + 1));
        }
    }
    None
}
