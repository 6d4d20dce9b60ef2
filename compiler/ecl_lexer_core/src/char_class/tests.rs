use super::*;
use pretty_assertions::assert_eq;

#[test]
fn ascii_letters_and_digits() {
    assert_eq!(classify(u32::from('a')), CharClass::LETTER | CharClass::HEX_DIGIT);
    assert_eq!(classify(u32::from('G')), CharClass::LETTER);
    assert_eq!(classify(u32::from('_')), CharClass::LETTER);
    assert_eq!(classify(u32::from('$')), CharClass::LETTER);
    assert_eq!(classify(u32::from('7')), CharClass::DIGIT | CharClass::HEX_DIGIT);
}

#[test]
fn ascii_punctuation() {
    for ch in "+-*/%<>=!~&|^?:;,.()[]{}'\"`\\@#".chars() {
        assert_eq!(classify(u32::from(ch)), CharClass::PUNCTUATION, "{ch:?}");
    }
}

#[test]
fn whitespace_set() {
    for c in [
        0x09, 0x0B, 0x0C, 0x20, 0xA0, 0x1680, 0x180E, 0x2000, 0x2005, 0x200A, 0x202F, 0x205F,
        0x3000, 0xFEFF,
    ] {
        assert_eq!(classify(c), CharClass::WHITE_SPACE, "U+{c:04X}");
    }
}

#[test]
fn line_terminators() {
    for c in [0x0A, 0x0D, 0x85, 0x2028, 0x2029] {
        assert_eq!(classify(c), CharClass::LINE_TERMINATOR, "U+{c:04X}");
    }
}

#[test]
fn invalid_code_points() {
    for c in [0, 0xD800, 0xDBFF, 0xDC00, 0xDFFF, 0xFFFE, 0xFFFF, 0x1FFFE, 0x10FFFF, 0x110000] {
        assert_eq!(classify(c), CharClass::INVALID, "U+{c:04X}");
    }
    assert_eq!(classify(u32::MAX), CharClass::INVALID);
}

#[test]
fn joiners_start_identifiers() {
    assert!(is_identifier_start(0x200C));
    assert!(is_identifier_start(0x200D));
}

#[test]
fn unicode_identifiers() {
    // Greek small alpha, CJK ideograph, Roman numeral one (Nl).
    assert!(is_identifier_start(0x03B1));
    assert!(is_identifier_start(0x4E00));
    assert!(is_identifier_start(0x2160));
    // Arabic-Indic digit zero only continues.
    assert!(!is_identifier_start(0x0660));
    assert!(is_identifier_continue(0x0660));
    // Undertie is connector punctuation.
    assert!(is_identifier_continue(0x203F));
}

#[test]
fn combining_marks_are_not_identifiers() {
    // Combining acute accent (Mn), Devanagari sign visarga (Mc).
    for c in [0x0301, 0x0903] {
        assert!(classify(c).is_empty(), "U+{c:04X}");
        assert!(!is_identifier_continue(c), "U+{c:04X}");
    }
}

#[test]
fn next_line_is_a_terminator_not_whitespace() {
    assert!(!classify(0x85).contains(CharClass::WHITE_SPACE));
}

#[test]
fn reserved_glyphs_are_not_identifiers() {
    assert!(classify(INFINITY_GLYPH).is_empty());
    assert!(classify(NAN_GLYPH).is_empty());
}

#[test]
fn digit_values() {
    assert_eq!(hex_digit_value(u32::from('0')), Some(0));
    assert_eq!(hex_digit_value(u32::from('a')), Some(10));
    assert_eq!(hex_digit_value(u32::from('F')), Some(15));
    assert_eq!(hex_digit_value(u32::from('g')), None);
    assert_eq!(octal_digit_value(u32::from('7')), Some(7));
    assert_eq!(octal_digit_value(u32::from('8')), None);
    assert_eq!(hex_digit_value(u32::MAX), None);
}

mod proptest_classify {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_start_character_continues(c in 0u32..0x0011_0000) {
            if is_identifier_start(c) {
                prop_assert!(is_identifier_continue(c));
            }
        }

        #[test]
        fn invalid_excludes_everything_else(c in any::<u32>()) {
            let class = classify(c);
            if class.contains(CharClass::INVALID) {
                prop_assert_eq!(class, CharClass::INVALID);
            }
        }

        #[test]
        fn hex_digits_agree_with_std(c in 0u32..0x80) {
            let expected = char::from_u32(c).is_some_and(|ch| ch.is_ascii_hexdigit());
            prop_assert_eq!(classify(c).contains(CharClass::HEX_DIGIT), expected);
            prop_assert_eq!(hex_digit_value(c).is_some(), expected);
        }
    }
}
