use pretty_assertions::assert_eq;

use crate::ast::{Atom, Branch, Piece, Quantifier, RegExp};
use crate::parser::{Error, Language, Parser, Reason};
use crate::sets::{Predicate, END_SENTINEL, START_SENTINEL};
use crate::unicode;

macro_rules! ast {
    ($pattern:expr) => {{
        match Parser::new().parse($pattern) {
            Ok(regexp) => regexp,
            Err(err) => panic!("error parsing `{}`: {}", $pattern, err),
        }
    }};
    ($pattern:expr, $language:expr) => {{
        match Parser::new().language($language).parse($pattern) {
            Ok(regexp) => regexp,
            Err(err) => panic!("error parsing `{}`: {}", $pattern, err),
        }
    }};
}

macro_rules! parse_error {
    ($pattern:expr) => {
        Parser::new().parse($pattern).unwrap_err()
    };
    ($pattern:expr, $language:expr) => {
        Parser::new().language($language).parse($pattern).unwrap_err()
    };
}

/// Returns the predicate of a pattern that consists of a single character
/// class.
fn class(pattern: &str) -> Predicate {
    let regexp = ast!(pattern);
    match regexp.branches.as_slice() {
        [Branch { pieces }] => match pieces.as_slice() {
            [Piece { atom: Atom::Predicate(p), .. }] => p.clone(),
            _ => panic!("`{}` is not a single character class", pattern),
        },
        _ => panic!("`{}` is not a single character class", pattern),
    }
}

fn literals(s: &str) -> Branch {
    Branch {
        pieces: s
            .chars()
            .map(|c| Piece::new(Atom::Codepoint(c as u32)))
            .collect(),
    }
}

fn semantic_reason(err: Error) -> Reason {
    match err {
        Error::SemanticError { reason, .. }
        | Error::UnknownUnicodeConstruct { reason, .. } => reason,
        err => panic!("expected a semantic error, got: {}", err),
    }
}

#[test]
fn branches_and_pieces() {
    assert_eq!(ast!("ab"), RegExp { branches: vec![literals("ab")] });

    assert_eq!(
        ast!("ab|cde|"),
        RegExp {
            branches: vec![literals("ab"), literals("cde"), Branch::default()]
        }
    );

    assert_eq!(ast!(""), RegExp { branches: vec![Branch::default()] });
    assert_eq!(ast!("|").branches.len(), 2);
}

#[test]
fn quantifiers() {
    let quantifier = |pattern: &str| ast!(pattern).branches[0].pieces[0].quantifier;

    assert_eq!(quantifier("a"), Quantifier { min: 1, max: Some(1) });
    assert_eq!(quantifier("a?"), Quantifier { min: 0, max: Some(1) });
    assert_eq!(quantifier("a*"), Quantifier { min: 0, max: None });
    assert_eq!(quantifier("a+"), Quantifier { min: 1, max: None });
    assert_eq!(quantifier("a{3}"), Quantifier { min: 3, max: Some(3) });
    assert_eq!(quantifier("a{3,}"), Quantifier { min: 3, max: None });
    assert_eq!(quantifier("a{3,5}"), Quantifier { min: 3, max: Some(5) });
    assert_eq!(quantifier("a{0,0}"), Quantifier { min: 0, max: Some(0) });
    assert_eq!(quantifier("a{007}"), Quantifier { min: 7, max: Some(7) });

    assert_eq!(quantifier("a{3,5}").to_string(), "{3,5}");
    assert_eq!(quantifier("a{3,}").to_string(), "{3,}");
    assert_eq!(quantifier("a+").to_string(), "+");
}

#[test]
fn inverted_quantifier() {
    let err = parse_error!("a{3,2}");
    assert_eq!(err.code(), "E002");
    assert_eq!(err.offset(), 2);
    assert_eq!(semantic_reason(err), Reason::QuantifierRangeOrder);

    let err = parse_error!("a{3,2}", Language::XPath);
    assert_eq!(semantic_reason(err), Reason::QuantifierRangeOrder);
}

#[test]
fn quantifier_too_large() {
    assert_eq!(
        semantic_reason(parse_error!("a{4294967296}")),
        Reason::QuantifierTooLarge
    );
    assert_eq!(
        ast!("a{4294967295}").branches[0].pieces[0].quantifier,
        Quantifier { min: u32::MAX, max: Some(u32::MAX) }
    );
}

#[test]
fn nested_expressions() {
    assert_eq!(
        ast!("(a|b)c"),
        RegExp {
            branches: vec![Branch {
                pieces: vec![
                    Piece::new(Atom::RegExp(RegExp {
                        branches: vec![literals("a"), literals("b")]
                    })),
                    Piece::new(Atom::Codepoint('c' as u32)),
                ]
            }]
        }
    );

    assert_eq!(
        ast!("()*"),
        RegExp {
            branches: vec![Branch {
                pieces: vec![Piece::with_quantifier(
                    Atom::RegExp(RegExp { branches: vec![Branch::default()] }),
                    Quantifier { min: 0, max: None }
                )]
            }]
        }
    );
}

#[test]
fn escapes() {
    assert_eq!(ast!(r"\n\r\t"), RegExp {
        branches: vec![Branch {
            pieces: vec![
                Piece::new(Atom::Codepoint(0x0A)),
                Piece::new(Atom::Codepoint(0x0D)),
                Piece::new(Atom::Codepoint(0x09)),
            ]
        }]
    });

    assert_eq!(ast!(r"\|\.\-\^\?\*\+\{\}\(\)\[\]\\"), RegExp {
        branches: vec![literals(r"|.-^?*+{}()[]\")]
    });

    assert!(matches!(
        parse_error!(r"\a"),
        Error::SyntaxError { offset: 1, found: Some('a'), .. }
    ));

    assert!(matches!(
        parse_error!(r"\"),
        Error::SyntaxError { offset: 1, found: None, .. }
    ));
}

#[test]
fn wildcard() {
    let dot = class(".");
    assert_eq!(dot, Predicate::wildcard());
    assert!(dot.matches('a' as u32));
    assert!(!dot.matches('\n' as u32));
    assert!(!dot.matches('\r' as u32));
}

#[test]
fn multi_char_escapes() {
    assert!(class(r"\s").matches(' ' as u32));
    assert!(!class(r"\S").matches(' ' as u32));
    assert!(class(r"\d").matches('7' as u32));
    assert!(class(r"\D").matches('x' as u32));
    assert!(class(r"\w").matches('x' as u32));
    assert!(!class(r"\w").matches('!' as u32));
    assert!(class(r"\i").matches('_' as u32));
    assert!(!class(r"\i").matches('-' as u32));
    assert!(class(r"\c").matches('-' as u32));
    assert!(!class(r"\C").matches('-' as u32));
}

#[test]
fn categories_and_blocks() {
    assert_eq!(&class(r"\p{Lu}"), unicode::category("Lu").unwrap());
    assert_eq!(&class(r"\p{N}"), unicode::category("N").unwrap());
    assert_eq!(class(r"\P{L}"), unicode::category("L").unwrap().complement());
    assert_eq!(
        &class(r"\p{IsBasicLatin}"),
        unicode::block("BasicLatin").unwrap()
    );
    assert_eq!(&class(r"\p{IsGreek}"), unicode::block("GreekandCoptic").unwrap());

    let err = parse_error!(r"\p{Xx}");
    assert_eq!(err.code(), "E003");
    assert_eq!(err.offset(), 3);
    assert_eq!(semantic_reason(err), Reason::UnknownCategory("Xx".to_string()));

    let err = parse_error!(r"\p{Lx}");
    assert_eq!(semantic_reason(err), Reason::UnknownCategory("Lx".to_string()));

    assert!(matches!(
        parse_error!(r"\p{Lu"),
        Error::SyntaxError { offset: 5, found: None, .. }
    ));
}

#[test]
fn unknown_blocks() {
    // Lenient in XML Schema.
    assert_eq!(class(r"\p{IsKlingon}"), Predicate::everything());
    assert_eq!(class(r"\P{IsKlingon}"), Predicate::nothing());

    // Strict in XPath.
    let err = parse_error!(r"\p{IsKlingon}", Language::XPath);
    assert_eq!(err.code(), "E003");
    assert_eq!(semantic_reason(err), Reason::UnknownBlock("Klingon".to_string()));
}

#[test]
fn char_class_expressions() {
    let p = class("[abc]");
    assert!(p.matches('a' as u32));
    assert!(p.matches('c' as u32));
    assert!(!p.matches('d' as u32));

    let p = class("[^abc]");
    assert!(!p.matches('a' as u32));
    assert!(p.matches('d' as u32));

    let p = class(r"[\d\s]");
    assert!(p.matches('4' as u32));
    assert!(p.matches('\t' as u32));
    assert!(!p.matches('x' as u32));

    let p = class(r"[\p{Lu}\-]");
    assert!(p.matches('Q' as u32));
    assert!(p.matches('-' as u32));
    assert!(!p.matches('q' as u32));

    // A negative group can't be empty.
    assert!(matches!(parse_error!("[^]"), Error::SyntaxError { .. }));
}

#[test]
fn hyphens() {
    let p = class("[a-]");
    assert!(p.matches('a' as u32));
    assert!(p.matches('-' as u32));
    assert!(!p.matches('b' as u32));

    let p = class("[-a]");
    assert!(p.matches('a' as u32));
    assert!(p.matches('-' as u32));
    assert!(!p.matches('b' as u32));

    let p = class("[a-k-z]");
    for c in ['a', 'c', 'k', '-', 'z'] {
        assert!(p.matches(c as u32), "[a-k-z] should match `{}`", c);
    }
    for c in ['l', 'x', 'y'] {
        assert!(!p.matches(c as u32), "[a-k-z] should not match `{}`", c);
    }

    let p = class("[a-z-[aeiou]]");
    assert!(p.matches('b' as u32));
    assert!(!p.matches('e' as u32));
    assert!(!p.matches('-' as u32));

    assert_eq!(
        semantic_reason(parse_error!("[--a]")),
        Reason::HyphenAsRangeEndpoint
    );
    assert_eq!(
        semantic_reason(parse_error!("[a--]")),
        Reason::HyphenAsRangeEndpoint
    );
}

#[test]
fn ranges() {
    let p = class("[a-z]");
    assert!(p.matches('a' as u32));
    assert!(p.matches('m' as u32));
    assert!(p.matches('z' as u32));
    assert!(!p.matches('A' as u32));

    let p = class(r"[\--/]");
    assert_eq!(p.ranges(), &[('-' as u32, '/' as u32)]);

    let err = parse_error!("[z-a]");
    assert_eq!(err.code(), "E002");
    assert_eq!(err.offset(), 1);
    assert_eq!(
        err.to_string(),
        "error parsing pattern \"[z-a]\" at offset 1: character range is in the wrong order"
    );
    assert_eq!(semantic_reason(err), Reason::InvalidRange);
}

#[test]
fn long_char_class_expressions() {
    let p = class(&format!("[{}]", "a".repeat(20000)));
    assert_eq!(p.ranges(), &[('a' as u32, 'a' as u32)]);

    let p = class(&format!("[{}-]", "a-c".repeat(10000)));
    assert!(p.matches('b' as u32));
    assert!(p.matches('-' as u32));
    assert!(!p.matches('d' as u32));
}

#[test]
fn nest_limit() {
    let parser = Parser::new().nest_limit(3);

    assert!(parser.parse("(((a)))").is_ok());
    assert!(parser.parse("[a-[b-[c]]]").is_ok());

    let err = parser.parse("((((a))))").unwrap_err();
    assert_eq!(err.code(), "E002");
    assert_eq!(err.offset(), 3);
    assert_eq!(semantic_reason(err), Reason::NestingTooDeep(3));

    let err = parser.parse("[a-[b-[c-[d]]]]").unwrap_err();
    assert_eq!(err.offset(), 9);
    assert_eq!(semantic_reason(err), Reason::NestingTooDeep(3));

    let err = Parser::new()
        .language(Language::XPath)
        .nest_limit(1)
        .parse("(?:(?:a))")
        .unwrap_err();
    assert_eq!(err.offset(), 3);

    let pattern = format!("{}a{}", "(".repeat(10000), ")".repeat(10000));
    assert_eq!(
        semantic_reason(parse_error!(pattern.as_str())),
        Reason::NestingTooDeep(crate::DEFAULT_NEST_LIMIT)
    );
}

#[test]
fn subtraction() {
    let p = class("[abcd-[cdef]]");
    assert!(p.matches('a' as u32));
    assert!(p.matches('b' as u32));
    for c in ['c', 'd', 'e', 'f', 'g'] {
        assert!(!p.matches(c as u32), "should not match `{}`", c);
    }

    let p = class(r"[\p{L}-[\p{Lu}-[A]]]");
    assert!(p.matches('a' as u32));
    assert!(p.matches('A' as u32));
    assert!(!p.matches('B' as u32));
}

#[test]
fn syntax_errors() {
    let err = parse_error!("(a");
    assert_eq!(err.code(), "E001");
    assert_eq!(err, Error::SyntaxError {
        pattern: "(a".to_string(),
        offset: 2,
        expected: vec![")".to_string()],
        found: None,
    });
    assert_eq!(
        err.to_string(),
        "error parsing pattern \"(a\" at offset 2: expected \")\" but found end of input"
    );

    let err = parse_error!("a)");
    assert_eq!(err, Error::SyntaxError {
        pattern: "a)".to_string(),
        offset: 1,
        expected: vec!["end of input".to_string()],
        found: Some(')'),
    });

    // Offsets are counted in characters, not bytes.
    assert_eq!(parse_error!("💩💩)").offset(), 2);

    match parse_error!("[a") {
        Error::SyntaxError { offset, expected, found, .. } => {
            assert_eq!(offset, 2);
            assert_eq!(found, None);
            assert!(expected.contains(&"]".to_string()));
        }
        err => panic!("unexpected error: {}", err),
    }

    assert!(matches!(
        parse_error!("a{,3}"),
        Error::SyntaxError { offset: 2, found: Some(','), .. }
    ));
    assert!(matches!(parse_error!("*"), Error::SyntaxError { offset: 0, .. }));
    assert!(matches!(parse_error!("a**"), Error::SyntaxError { offset: 2, .. }));
    assert!(matches!(parse_error!("[]"), Error::SyntaxError { offset: 1, .. }));
}

#[test]
fn error_reports() {
    let report = parse_error!("ab(c").report(false);
    assert!(report.contains("E001"));
    assert!(report.contains("ab(c"));

    let report = parse_error!("[z-a]").report(false);
    assert!(report.contains("E002"));
    assert!(report.contains("character range is in the wrong order"));
}

#[test]
fn xsd_has_no_anchors() {
    assert_eq!(ast!("^a$"), RegExp { branches: vec![literals("^a$")] });
}

#[test]
fn xpath_anchors() {
    assert_eq!(
        ast!("^a$", Language::XPath),
        RegExp {
            branches: vec![Branch {
                pieces: vec![
                    Piece::new(Atom::Codepoint(START_SENTINEL)),
                    Piece::new(Atom::Codepoint('a' as u32)),
                    Piece::new(Atom::Codepoint(END_SENTINEL)),
                ]
            }]
        }
    );

    // Inside character classes `^` and `$` are ordinary characters.
    let regexp = ast!("[a^$]", Language::XPath);
    match &regexp.branches[0].pieces[0].atom {
        Atom::Predicate(p) => {
            assert!(p.matches('$' as u32));
            assert!(p.matches('^' as u32));
        }
        atom => panic!("unexpected atom: {:?}", atom),
    }
}

#[test]
fn xpath_escapes() {
    assert_eq!(
        ast!(r"\$", Language::XPath),
        RegExp { branches: vec![literals("$")] }
    );
    assert!(matches!(parse_error!(r"\$"), Error::SyntaxError { offset: 1, .. }));
}

#[test]
fn xpath_reluctant_quantifiers() {
    assert_eq!(ast!("a*?b+?c??d{2,3}?", Language::XPath), RegExp {
        branches: vec![Branch {
            pieces: vec![
                Piece::with_quantifier(
                    Atom::Codepoint('a' as u32),
                    Quantifier { min: 0, max: None }
                ),
                Piece::with_quantifier(
                    Atom::Codepoint('b' as u32),
                    Quantifier { min: 1, max: None }
                ),
                Piece::with_quantifier(
                    Atom::Codepoint('c' as u32),
                    Quantifier { min: 0, max: Some(1) }
                ),
                Piece::with_quantifier(
                    Atom::Codepoint('d' as u32),
                    Quantifier { min: 2, max: Some(3) }
                ),
            ]
        }]
    });

    assert!(matches!(parse_error!("a*?"), Error::SyntaxError { offset: 2, .. }));
}

#[test]
fn xpath_non_capturing_groups() {
    assert_eq!(ast!("(?:ab)", Language::XPath), ast!("(ab)", Language::XPath));
    assert!(matches!(parse_error!("(?:ab)"), Error::SyntaxError { offset: 1, .. }));
}

#[test]
fn xpath_backreferences() {
    let err = parse_error!(r"(a)\1", Language::XPath);
    assert_eq!(err.code(), "E002");
    assert_eq!(err.offset(), 3);
    assert_eq!(semantic_reason(err), Reason::Backreference);

    assert_eq!(
        semantic_reason(parse_error!(r"(a)\12", Language::XPath)),
        Reason::Backreference
    );

    // In XML Schema they are just invalid escapes.
    assert!(matches!(
        parse_error!(r"(a)\1"),
        Error::SyntaxError { offset: 4, found: Some('1'), .. }
    ));
}
