//! Scenario tests for the parsing crate
//! Exercises the public entry points the way callers use them.

#[cfg(test)]
mod int_tests {
    use crate::*;

    #[test]
    fn test_parse_int_plain() {
        assert_eq!(parse_int("1234", None), Ok(1234));
    }

    #[test]
    fn test_parse_int_with_plus_sign() {
        assert_eq!(parse_int("+1234", None), Ok(1234));
    }

    #[test]
    fn test_parse_int_negative() {
        assert_eq!(parse_int("-1234", None), Ok(-1234));
    }

    #[test]
    fn test_parse_int_with_space_variants() {
        assert_eq!(parse_int("1 234", None), Ok(1234));
        assert_eq!(parse_int("1&nbsp;234", None), Ok(1234));
        assert_eq!(parse_int("1&NBSP;234", None), Ok(1234));
        assert_eq!(parse_int("1\u{00A0}234", None), Ok(1234));
        assert_eq!(parse_int("  1 000 000  ", None), Ok(1_000_000));
    }

    #[test]
    fn test_parse_int_invalid_with_default() {
        assert_eq!(parse_int("Hello world!", Some(-1)), Ok(-1));
    }

    #[test]
    fn test_parse_int_invalid_without_default() {
        assert_eq!(
            parse_int("Hello world!", None),
            Err(TextError::Format {
                value: "Hello world!".to_string(),
                kind: NumericKind::Int,
            })
        );
    }

    #[test]
    fn test_parse_int_digitless_inputs() {
        for s in ["", " ", "abc", "-", "+", "&nbsp;", "one", "--", ".", ","] {
            assert!(
                matches!(parse_int(s, None), Err(TextError::Format { .. })),
                "{s:?} should not parse"
            );
            assert_eq!(parse_int(s, Some(7)), Ok(7), "{s:?} should fall back");
        }
    }

    #[test]
    fn test_parse_int_rejects_decimals() {
        assert!(matches!(
            parse_int("1234.12", None),
            Err(TextError::Format { .. })
        ));
        assert!(matches!(
            parse_int("1234,12", None),
            Err(TextError::Format { .. })
        ));
    }

    #[test]
    fn test_parse_int_rejects_overflow() {
        assert!(matches!(
            parse_int("99999999999", None),
            Err(TextError::Format { .. })
        ));
    }

    #[test]
    fn test_parse_int_absent_input() {
        assert_eq!(parse_int(None::<&str>, None), Err(TextError::NullInput));
        // A default does not cover an absent input
        assert_eq!(parse_int(None::<&str>, Some(1)), Err(TextError::NullInput));
    }

    #[test]
    fn test_format_error_keeps_unnormalized_input() {
        let err = parse_int("12&NBSP;x", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The value '12&NBSP;x' can not be parsed to an integer"
        );
    }

    #[test]
    fn test_parse_nullable_int_blank() {
        assert_eq!(parse_nullable_int("", None), Ok(None));
        assert_eq!(parse_nullable_int("&nbsp;&NBSP;", None), Ok(None));
        assert_eq!(parse_nullable_int("   ", Some(5)), Ok(Some(5)));
    }

    #[test]
    fn test_parse_nullable_int_value() {
        assert_eq!(parse_nullable_int("1 234", None), Ok(Some(1234)));
        assert_eq!(parse_nullable_int("abc", Some(3)), Ok(Some(3)));
        assert!(matches!(
            parse_nullable_int("abc", None),
            Err(TextError::Format { .. })
        ));
    }

    #[test]
    fn test_parse_nullable_int_absent_input() {
        assert_eq!(
            parse_nullable_int(None::<&str>, None),
            Err(TextError::NullInput)
        );
    }

    #[test]
    fn test_is_int() {
        assert!(is_int("1 234"));
        assert!(is_int("+5"));
        assert!(!is_int("1234.5"));
        assert!(!is_int(""));
    }
}

#[cfg(test)]
mod double_tests {
    use crate::*;

    #[test]
    fn test_parse_double_integer_value() {
        assert_eq!(parse_double("1234", None), Ok(1234.0));
    }

    #[test]
    fn test_parse_double_either_separator() {
        assert_eq!(parse_double("1234.12", None), Ok(1234.12));
        assert_eq!(parse_double("1234,12", None), Ok(1234.12));
    }

    #[test]
    fn test_parse_double_with_space_variants() {
        assert_eq!(parse_double("1 234.12", None), Ok(1234.12));
        assert_eq!(parse_double("1&nbsp;234.12", None), Ok(1234.12));
        assert_eq!(parse_double("1&NBSP;234.12", None), Ok(1234.12));
        assert_eq!(parse_double("1\u{00A0}234.12", None), Ok(1234.12));
    }

    #[test]
    fn test_parse_double_signs() {
        assert_eq!(parse_double("+1.5", None), Ok(1.5));
        assert_eq!(parse_double("-1,5", None), Ok(-1.5));
    }

    #[test]
    fn test_parse_double_invalid() {
        assert_eq!(parse_double("Hello world!", Some(-1.0)), Ok(-1.0));
        assert_eq!(
            parse_double("Hello world!", None),
            Err(TextError::Format {
                value: "Hello world!".to_string(),
                kind: NumericKind::Double,
            })
        );
    }

    #[test]
    fn test_parse_double_rejects_non_plain_forms() {
        for s in ["1e5", "inf", "NaN", "Infinity", "0x10", "1.2.3"] {
            assert!(
                matches!(parse_double(s, None), Err(TextError::Format { .. })),
                "{s:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_double_mixed_separators_fail() {
        assert!(matches!(
            parse_double("1,234.5", None),
            Err(TextError::Format { .. })
        ));
        assert_eq!(parse_double("1.234,5", Some(0.0)), Ok(0.0));
    }

    #[test]
    fn test_parse_double_absent_input() {
        assert_eq!(parse_double(None::<&str>, None), Err(TextError::NullInput));
    }

    #[test]
    fn test_parse_nullable_double() {
        assert_eq!(parse_nullable_double("", None), Ok(None));
        assert_eq!(parse_nullable_double("&nbsp;&NBSP;", None), Ok(None));
        assert_eq!(parse_nullable_double(" ", Some(2.5)), Ok(Some(2.5)));
        assert_eq!(parse_nullable_double("2,5", None), Ok(Some(2.5)));
        assert_eq!(
            parse_nullable_double(None::<&str>, None),
            Err(TextError::NullInput)
        );
    }

    #[test]
    fn test_comma_separator_config() {
        let parser = NumericParser::new(ParserConfig::new(',').unwrap());
        assert_eq!(parser.parse_double("1234.12", None), Ok(1234.12));
        assert_eq!(parser.parse_double("1 234,12", None), Ok(1234.12));
        assert!(parser.is_double("0,5"));
        assert!(!parser.is_double("0,5,5"));
    }

    #[test]
    fn test_is_double() {
        assert!(is_double("1234"));
        assert!(is_double("1&nbsp;234,5"));
        assert!(!is_double("abc"));
        assert!(!is_double(""));
    }

    #[test]
    fn test_parser_is_shareable_across_threads() {
        let parser = NumericParser::default();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || parser.parse_int(format!("{i} 000").as_str(), None))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Ok(i as i32 * 1000));
        }
    }
}

#[cfg(test)]
mod error_kind_tests {
    use crate::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_errors_map_to_taxonomy() {
        assert_eq!(
            parse_int(None::<&str>, None).unwrap_err().kind(),
            ErrorKind::NullInput
        );
        assert_eq!(parse_int("x", None).unwrap_err().kind(), ErrorKind::Format);
        assert_eq!(
            replace_all("x", None, None, false).unwrap_err().kind(),
            ErrorKind::NullArgument
        );
    }
}
