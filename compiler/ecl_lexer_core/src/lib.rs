//! Low-level character handling for the ECL lexer.
//!
//! Everything here works on raw `u32` code points rather than `char`:
//! the input stream is allowed to carry lone surrogates and noncharacters,
//! and the lexer must see them in order to report them.
//!
//! # Architecture
//!
//! - [`classify`] maps a code point to a [`CharClass`] bit set
//! - [`hex_digit_value`] / [`octal_digit_value`] decode single digits
//! - [`decode_utf16_at`] walks UTF-16 without rejecting unpaired surrogates

mod char_class;
mod utf16;

pub use char_class::{
    classify, hex_digit_value, is_identifier_continue, is_identifier_start, octal_digit_value,
    CharClass, INFINITY_GLYPH, NAN_GLYPH,
};
pub use utf16::{decode_utf16_at, is_high_surrogate, is_low_surrogate, join_surrogates};
