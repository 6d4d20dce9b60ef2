use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unset_options_are_zero() {
    let options = Options::new();
    for opt in LexerOption::ALL {
        assert_eq!(options.get_option(opt), 0);
        assert!(!options.is_set(opt));
    }
}

#[test]
fn set_and_clear() {
    let mut options = Options::new().with(LexerOption::ExtendedOperators, 3);
    assert_eq!(options.get_option(LexerOption::ExtendedOperators), 3);
    assert!(options.is_set(LexerOption::ExtendedOperators));
    options.set_option(LexerOption::ExtendedOperators, 0);
    assert!(!options.is_set(LexerOption::ExtendedOperators));
    assert_eq!(options, Options::new());
}

#[test]
fn negative_values_count_as_set() {
    let options = Options::new().with(LexerOption::Strict, -1);
    assert!(options.is_set(LexerOption::Strict));
}

#[test]
fn parse_names() {
    assert_eq!("BINARY".parse::<LexerOption>(), Ok(LexerOption::Binary));
    assert_eq!(
        "extended_escape_sequences".parse::<LexerOption>(),
        Ok(LexerOption::ExtendedEscapeSequences)
    );
    assert_eq!(
        "nope".parse::<LexerOption>(),
        Err(UnknownOption("nope".to_owned()))
    );
    for opt in LexerOption::ALL {
        assert_eq!(opt.to_string().parse::<LexerOption>(), Ok(opt));
    }
}

#[test]
fn set_by_name() {
    let mut options = Options::new();
    options.set_option_by_name("octal", 1).unwrap();
    assert!(options.is_set(LexerOption::Octal));
    let err = options.set_option_by_name("hex", 1).unwrap_err();
    assert_eq!(err.to_string(), "unknown lexer option `hex`");
}
