//! Code point classification.
//!
//! A code point maps to a small set of [`CharClass`] bits. ASCII is
//! resolved with a direct match; everything above uses the Unicode
//! `XID_Start` table from `unicode-ident`, plus the handful of explicit
//! whitespace and terminator code points the language recognizes.
//!
//! Only decimal digits and connector punctuation continue an identifier
//! without starting one. Combining marks (`Mn`, `Mc`) are in `XID_Continue`
//! but belong to no production here.

use bitflags::bitflags;

/// U+221E INFINITY, lexed as the floating point value `+Infinity`.
pub const INFINITY_GLYPH: u32 = 0x221E;

/// U+FFFD REPLACEMENT CHARACTER, lexed as the floating point value `NaN`.
pub const NAN_GLYPH: u32 = 0xFFFD;

const ZWNJ: u32 = 0x200C;
const ZWJ: u32 = 0x200D;

bitflags! {
    /// Classification bits for a single code point.
    ///
    /// Several bits may be set at once (`a` is both a letter and a hex
    /// digit). An empty set means "not part of any production".
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CharClass: u16 {
        /// NUL, surrogate halves, noncharacters and out of range values.
        const INVALID = 1 << 0;
        /// LF, CR, NEXT LINE, LINE SEPARATOR, PARAGRAPH SEPARATOR.
        const LINE_TERMINATOR = 1 << 1;
        /// Horizontal whitespace, including form feed and BOM.
        const WHITE_SPACE = 1 << 2;
        /// ASCII characters that are not letters, digits or whitespace.
        const PUNCTUATION = 1 << 3;
        /// `0`-`9`.
        const DIGIT = 1 << 4;
        /// `0`-`9`, `a`-`f`, `A`-`F`.
        const HEX_DIGIT = 1 << 5;
        /// May start an identifier.
        const LETTER = 1 << 6;
        /// May continue an identifier but not start one.
        const IDENTIFIER_PART = 1 << 7;
    }
}

impl CharClass {
    /// Whether a code point of this class may begin an identifier.
    #[inline]
    pub fn is_identifier_start(self) -> bool {
        self.contains(CharClass::LETTER)
    }

    /// Whether a code point of this class may appear after the first
    /// identifier character.
    #[inline]
    pub fn is_identifier_continue(self) -> bool {
        self.intersects(CharClass::LETTER | CharClass::DIGIT | CharClass::IDENTIFIER_PART)
    }
}

/// Classify a raw code point.
pub fn classify(c: u32) -> CharClass {
    if c == 0 || c > 0x0010_FFFF || (0xD800..=0xDFFF).contains(&c) || (c & 0xFFFF) >= 0xFFFE {
        return CharClass::INVALID;
    }

    if c < 0x80 {
        return classify_ascii(c);
    }

    match c {
        0x0085 | 0x2028 | 0x2029 => CharClass::LINE_TERMINATOR,
        0x00A0 | 0x1680 | 0x180E | 0x2000..=0x200A | 0x202F | 0x205F | 0x3000 | 0xFEFF => {
            CharClass::WHITE_SPACE
        }
        ZWNJ | ZWJ => CharClass::LETTER,
        _ => match char::from_u32(c) {
            Some(ch) if unicode_ident::is_xid_start(ch) => CharClass::LETTER,
            Some(ch) if is_digit_or_connector(ch) => CharClass::IDENTIFIER_PART,
            _ => CharClass::empty(),
        },
    }
}

/// `Nd` digits and `Pc` connector punctuation above ASCII.
fn is_digit_or_connector(ch: char) -> bool {
    if !unicode_ident::is_xid_continue(ch) {
        return false;
    }
    let connector = matches!(
        ch,
        '\u{203F}' | '\u{2040}' | '\u{2054}' | '\u{FE33}' | '\u{FE34}' | '\u{FE4D}'..='\u{FE4F}'
            | '\u{FF3F}'
    );
    connector || ch.is_numeric()
}

fn classify_ascii(c: u32) -> CharClass {
    match c {
        0x0A | 0x0D => CharClass::LINE_TERMINATOR,
        0x09 | 0x0B | 0x0C | 0x20 => CharClass::WHITE_SPACE,
        0x30..=0x39 => CharClass::DIGIT | CharClass::HEX_DIGIT,
        0x41..=0x46 | 0x61..=0x66 => CharClass::LETTER | CharClass::HEX_DIGIT,
        0x47..=0x5A | 0x67..=0x7A | 0x24 | 0x5F => CharClass::LETTER,
        // Remaining C0 controls and DEL belong to no production.
        0x01..=0x1F | 0x7F => CharClass::empty(),
        _ => CharClass::PUNCTUATION,
    }
}

/// Shorthand for `classify(c).is_identifier_start()`.
#[inline]
pub fn is_identifier_start(c: u32) -> bool {
    classify(c).is_identifier_start()
}

/// Shorthand for `classify(c).is_identifier_continue()`.
#[inline]
pub fn is_identifier_continue(c: u32) -> bool {
    classify(c).is_identifier_continue()
}

/// Value of an ASCII hex digit, or `None`.
#[inline]
pub fn hex_digit_value(c: u32) -> Option<u32> {
    char::from_u32(c).and_then(|ch| ch.to_digit(16))
}

/// Value of an ASCII octal digit, or `None`.
#[inline]
pub fn octal_digit_value(c: u32) -> Option<u32> {
    char::from_u32(c).and_then(|ch| ch.to_digit(8))
}

#[cfg(test)]
mod tests;
