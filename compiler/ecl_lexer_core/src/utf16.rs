//! Lenient UTF-16 decoding.
//!
//! Unlike [`char::decode_utf16`], an unpaired surrogate is returned as its
//! own code point instead of an error. The lexer classifies it as invalid
//! and reports it with a position.

/// Whether `c` is a UTF-16 high (leading) surrogate.
#[inline]
pub fn is_high_surrogate(c: u32) -> bool {
    (0xD800..=0xDBFF).contains(&c)
}

/// Whether `c` is a UTF-16 low (trailing) surrogate.
#[inline]
pub fn is_low_surrogate(c: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&c)
}

/// Combine a high and a low surrogate into a supplementary code point.
///
/// Returns `None` when the pair is not a high surrogate followed by a
/// low surrogate.
#[inline]
pub fn join_surrogates(high: u32, low: u32) -> Option<u32> {
    if is_high_surrogate(high) && is_low_surrogate(low) {
        Some(0x1_0000 + ((high - 0xD800) << 10) + (low - 0xDC00))
    } else {
        None
    }
}

/// Decode the code point starting at `units[pos]`.
///
/// Returns the code point and the number of units consumed (1 or 2), or
/// `None` at the end of the slice.
pub fn decode_utf16_at(units: &[u16], pos: usize) -> Option<(u32, usize)> {
    let first = u32::from(*units.get(pos)?);
    if is_high_surrogate(first) {
        if let Some(&next) = units.get(pos + 1) {
            if let Some(joined) = join_surrogates(first, u32::from(next)) {
                return Some((joined, 2));
            }
        }
    }
    Some((first, 1))
}
