/*! End-to-end tests. */
use pretty_assertions::assert_eq;

use xspattern_parser::Reason;

use crate::{compile, compile_with_options, Compiler, Error, Language};
use crate::{Matcher, Options};

macro_rules! test_pattern {
    ($pattern:expr, $language:expr, $input:expr, $expected_result:expr) => {{
        let matcher = Compiler::new()
            .language($language)
            .compile($pattern)
            .unwrap_or_else(|err| {
                panic!("error compiling `{}`: {}", $pattern, err)
            });

        assert_eq!(
            matcher.is_match($input),
            $expected_result,
            "\n\n`{}` on {:?} should be {}, but it is {}",
            $pattern,
            $input,
            $expected_result,
            !$expected_result
        );
    }};
}

macro_rules! pattern_match {
    ($pattern:expr, $input:expr) => {{
        test_pattern!($pattern, Language::Xsd, $input, true);
    }};
}

macro_rules! pattern_no_match {
    ($pattern:expr, $input:expr) => {{
        test_pattern!($pattern, Language::Xsd, $input, false);
    }};
}

macro_rules! xpath_match {
    ($pattern:expr, $input:expr) => {{
        test_pattern!($pattern, Language::XPath, $input, true);
    }};
}

macro_rules! xpath_no_match {
    ($pattern:expr, $input:expr) => {{
        test_pattern!($pattern, Language::XPath, $input, false);
    }};
}

fn parse_error(err: Error) -> xspattern_parser::Error {
    match err {
        Error::ParseError(err) => err,
        err => panic!("expecting a parse error, got: {:?}", err),
    }
}

#[test]
fn scenarios() {
    pattern_match!("a|b", "a");
    pattern_no_match!("a|b", "aa");
    pattern_no_match!("a|b", "");

    pattern_match!(r"\p{Lu}", "A");
    pattern_no_match!(r"\p{Lu}", "a");

    pattern_match!(r"\p{IsBasicLatin}", "Q");
    pattern_no_match!(r"\p{IsBasicLatin}", "λ");
}

#[test]
fn quantifier_bounds() {
    for k in 0..8 {
        let input = "a".repeat(k);
        test_pattern!("a{2,4}", Language::Xsd, &input, (2..=4).contains(&k));
        test_pattern!("a{3,}", Language::Xsd, &input, k >= 3);
        test_pattern!("a{3}", Language::Xsd, &input, k == 3);
        test_pattern!("a{0,0}", Language::Xsd, &input, k == 0);
        test_pattern!("a?", Language::Xsd, &input, k <= 1);
        test_pattern!("a*", Language::Xsd, &input, true);
        test_pattern!("a+", Language::Xsd, &input, k >= 1);
    }

    for k in 0..7 {
        let input = "ab".repeat(k);
        test_pattern!("(ab){2,3}", Language::Xsd, &input, k == 2 || k == 3);
        test_pattern!("(a|b){2,}", Language::Xsd, &input, k >= 1);
    }
}

#[test]
fn empty_branch() {
    pattern_match!("ab|cde|", "ab");
    pattern_match!("ab|cde|", "cde");
    pattern_match!("ab|cde|", "");
    pattern_no_match!("ab|cde|", "a");
    pattern_no_match!("ab|cde|", "abc");
    pattern_no_match!("ab|cde|", "abcde");

    pattern_match!("()", "");
    pattern_match!("(|a)b", "b");
    pattern_match!("(|a)b", "ab");
    pattern_no_match!("(|a)b", "aab");
}

#[test]
fn empty_loops() {
    pattern_match!("(a*)*", "");
    pattern_match!("(a*)*", "aaaa");
    pattern_no_match!("(a*)*", "aaab");
    pattern_match!("(a*)+b", "b");
    pattern_match!("(a?){3,}", "a");
    pattern_match!("(|a)*", "aaa");
}

#[test]
fn nested_expressions() {
    pattern_match!("(a(b|c))+", "abacab");
    pattern_no_match!("(a(b|c))+", "abaa");
    pattern_match!("((a|b)c)*d", "acbcd");
    pattern_match!("(a|ab)(c|bcd)", "abcd");
    pattern_match!("(a|ab)(c|bcd)", "abc");
    pattern_no_match!("(a|ab)(c|bcd)", "abd");
}

#[test]
fn character_classes() {
    pattern_match!("[a-]", "a");
    pattern_match!("[a-]", "-");
    pattern_no_match!("[a-]", "b");

    for input in ["a", "c", "-", "z"] {
        pattern_match!("[a-k-z]", input);
    }
    for input in ["l", "x", "y"] {
        pattern_no_match!("[a-k-z]", input);
    }

    for input in ["a", "b"] {
        pattern_match!("[abcd-[cdef]]", input);
    }
    for input in ["c", "d", "e", "f", "g"] {
        pattern_no_match!("[abcd-[cdef]]", input);
    }

    pattern_match!("[^abc]", "d");
    pattern_no_match!("[^abc]", "a");
    pattern_no_match!("[^abc]", "");
    pattern_match!("[^a-z-[xyz]]+", "ABC");
    pattern_match!(r"[\d-[5]]", "4");
    pattern_no_match!(r"[\d-[5]]", "5");
}

#[test]
fn wildcard_and_escapes() {
    pattern_match!(".", "a");
    pattern_match!(".", "💩");
    pattern_no_match!(".", "\n");
    pattern_no_match!(".", "\r");
    pattern_match!(r"\.", ".");
    pattern_no_match!(r"\.", "a");
    pattern_match!(r"\n\r\t", "\n\r\t");
    pattern_match!(r"\(\)\{\}\[\]\|\\", r"(){}[]|\");
    pattern_match!(r"\^\-\?\*\+", "^-?*+");
}

#[test]
fn multi_char_escapes() {
    pattern_match!(r"\d+", "123");
    pattern_match!(r"\d+", "١٢٣");
    pattern_no_match!(r"\d", "a");
    pattern_match!(r"\D", "a");

    pattern_match!(r"\s\S", " x");
    pattern_no_match!(r"\s", "x");

    pattern_match!(r"\i\c*", "xml:name-1.0");
    pattern_no_match!(r"\i\c*", "1abc");
    pattern_match!(r"\I", "1");

    pattern_match!(r"\w+", "abc123");
    pattern_no_match!(r"\w", "!");
    pattern_no_match!(r"\w", " ");
    pattern_match!(r"\W", "!");
}

#[test]
fn unicode_categories_and_blocks() {
    pattern_match!(r"\p{L}+", "Ünïcödé");
    pattern_no_match!(r"\p{L}", "1");
    pattern_match!(r"\P{L}", "1");
    pattern_match!(r"\p{Nd}", "7");
    pattern_match!(r"\p{Sc}", "€");
    pattern_match!(r"\p{Co}", "\u{E000}");
    pattern_match!(r"\p{Cn}", "\u{0378}");
    pattern_no_match!(r"\p{Cn}", "A");

    pattern_match!(r"\p{IsGreek}", "λ");
    pattern_match!(r"\p{IsGreekandCoptic}", "λ");
    pattern_no_match!(r"\p{IsGreek}", "a");
    pattern_match!(r"\P{IsBasicLatin}", "λ");

    // XML Schema accepts blocks it doesn't know about, they match
    // everything.
    pattern_match!(r"\p{IsNotABlock}", "x");
    pattern_no_match!(r"\P{IsNotABlock}", "x");

    let err = Compiler::new()
        .language(Language::XPath)
        .compile(r"\p{IsNotABlock}")
        .unwrap_err();

    assert_eq!(err.code(), "E003");

    let err = parse_error(compile(r"\p{Xx}").unwrap_err());

    assert!(matches!(
        err,
        xspattern_parser::Error::UnknownUnicodeConstruct {
            reason: Reason::UnknownCategory(_),
            ..
        }
    ));
}

#[test]
fn surrogate_pairs() {
    let matcher = compile("💩").unwrap();

    assert!(matcher.is_match("💩"));
    assert!(matcher.is_match_utf16(&[0xD83D, 0xDCA9]));
    assert!(!matcher.is_match_utf16(&[0xD83D]));
    assert!(!matcher.is_match_utf16(&[0xDCA9]));
    assert!(!matcher.is_match_utf16(&[0xDCA9, 0xD83D]));

    assert!(matcher.is_match_codepoints(&[0x1F4A9]));
    assert!(!matcher.is_match_codepoints(&[0xD83D, 0xDCA9]));

    let matcher = compile("[💩a]+").unwrap();

    assert!(matcher.is_match_utf16(&[0xD83D, 0xDCA9, 0x61, 0xD83D, 0xDCA9]));
    assert!(!matcher.is_match_utf16(&[0xD83D, 0x61]));
}

#[test]
fn xpath_substrings() {
    xpath_match!("a|b", "xxxaxxx");
    xpath_match!("a|b", "axxx");
    xpath_match!("a|b", "xxxbxxx");
    xpath_no_match!("a|b", "xxxyxxx");
    xpath_no_match!("a|b", "");

    xpath_match!("", "");
    xpath_match!("", "abc");
    xpath_match!("b{2}", "abba");
    xpath_no_match!("b{2}", "abab");
}

#[test]
fn xpath_anchors() {
    xpath_match!("^a", "abc");
    xpath_match!("^a", "a");
    xpath_no_match!("^a", "b");
    xpath_no_match!("^a", "ba");

    xpath_match!("a$", "a");
    xpath_match!("a$", "ba");
    xpath_no_match!("a$", "ab");

    xpath_match!("^$", "");
    xpath_no_match!("^$", "a");
    xpath_match!("^abc$", "abc");
    xpath_no_match!("^abc$", "abcabc");
    xpath_match!("^a|b$", "ax");
    xpath_match!("^a|b$", "xb");
    xpath_no_match!("^a|b$", "xa");

    // Anchors don't consume input, repeating them changes nothing.
    xpath_match!("^^a$$", "a");
    xpath_match!("^^a", "abc");
    xpath_no_match!("^^a", "ba");
    xpath_match!("a$$$", "ba");
    xpath_no_match!("a$$", "ab");

    // Anchors can't be matched by character classes.
    xpath_no_match!("^.", "");
    xpath_no_match!(r"[^a]$", "a");
    xpath_no_match!(r"\W^", "a");
}

#[test]
fn xpath_extensions() {
    xpath_match!("(?:ab)+", "xababx");
    xpath_match!("^a+?$", "aaa");
    xpath_match!("^a{2,3}?b", "aab");

    let err = compile_with_options(
        r"(a)\1",
        Options { language: Language::XPath },
    )
    .unwrap_err();

    assert!(matches!(
        parse_error(err),
        xspattern_parser::Error::SemanticError {
            reason: Reason::Backreference,
            ..
        }
    ));

    let err = compile_with_options(
        r"([ab])[^ab]*\1",
        Options { language: Language::XPath },
    )
    .unwrap_err();

    assert_eq!(err.code(), "E002");
    assert!(matches!(
        parse_error(err),
        xspattern_parser::Error::SemanticError {
            offset: 12,
            reason: Reason::Backreference,
            ..
        }
    ));
}

#[test]
fn long_patterns() {
    let pattern = format!("[{}]", "a".repeat(10000));
    pattern_match!(pattern.as_str(), "a");
    pattern_no_match!(pattern.as_str(), "b");

    let pattern = format!("{}b{}", "(".repeat(50), ")".repeat(50));
    pattern_match!(pattern.as_str(), "b");

    let pattern = format!("{}b{}", "(".repeat(5000), ")".repeat(5000));
    let err = compile(pattern.as_str()).unwrap_err();

    assert_eq!(err.code(), "E002");
    assert!(matches!(
        parse_error(err),
        xspattern_parser::Error::SemanticError {
            reason: Reason::NestingTooDeep(_),
            ..
        }
    ));
}

#[test]
fn xsd_has_no_anchors() {
    pattern_match!("^a$", "^a$");
    pattern_no_match!("^a$", "a");
}

#[test]
fn errors() {
    let err = compile("[z-a]").unwrap_err();

    assert_eq!(err.code(), "E002");
    assert_eq!(
        err.to_string(),
        "error parsing pattern \"[z-a]\" at offset 1: character range is in \
         the wrong order"
    );

    let err = compile("a{2,1}").unwrap_err();

    assert!(matches!(
        parse_error(err),
        xspattern_parser::Error::SemanticError {
            reason: Reason::QuantifierRangeOrder,
            ..
        }
    ));

    let err = parse_error(compile("(a").unwrap_err());

    assert_eq!(err.code(), "E001");
    assert_eq!(err.offset(), 2);
}

#[test]
fn too_large() {
    let err = Compiler::new()
        .max_program_size(1000)
        .compile("(a{100}){100}")
        .unwrap_err();

    assert_eq!(
        err,
        Error::TooLarge {
            pattern: "(a{100}){100}".to_string(),
            max_size: 1000
        }
    );

    assert_eq!(err.code(), "E100");

    assert!(Compiler::new()
        .max_program_size(1000)
        .compile("(a{10}){10}")
        .is_ok());
}

#[test]
fn determinism() {
    let patterns = ["a|b", r"(\p{Lu}[a-z-[aeiou]]*){2,5}", "((a*)+|b?){3}"];

    for pattern in patterns {
        let a = compile(pattern).unwrap();
        let b = compile(pattern).unwrap();

        assert_eq!(a.disassemble(), b.disassemble());

        for input in ["", "a", "b", "Abc", "AbcDf", "aaab"] {
            assert_eq!(a.is_match(input), b.is_match(input));
        }
    }
}

#[test]
fn matcher_is_shareable() {
    fn assert_send_sync_clone<T: Send + Sync + Clone>() {}

    assert_send_sync_clone::<Matcher>();

    let matcher = compile("[0-9]+").unwrap();

    std::thread::scope(|s| {
        for i in 0..4 {
            let matcher = matcher.clone();
            s.spawn(move || {
                assert!(matcher.is_match(&i.to_string()));
                assert!(!matcher.is_match("x"));
            });
        }
    });

    assert_eq!(matcher.pattern(), "[0-9]+");
    assert_eq!(matcher.language(), Language::Xsd);
}
