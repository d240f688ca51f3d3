/*! Grammar for XML Schema and XPath patterns.

The productions follow Appendix F of XML Schema Part 2, and section 5.6.1 of
XPath and XQuery Functions and Operators 3.1 for the XPath extensions. Each
production is a method of [`Grammar`], so productions can refer to each
other recursively and check the language being parsed when needed.
*/

use std::cell::{Cell, RefCell};
use std::iter;

use nom::branch::alt;
use nom::combinator::{cut, map, opt, peek, recognize, value};
use nom::error::ParseError;
use nom::multi::{many0, many1};
use nom::sequence::{pair, preceded, terminated};
use nom::Parser;

use crate::ast::{Atom, Branch, Piece, Quantifier, RegExp};
use crate::parser::combinators::{
    check, codepoint, complete, delimited_cut, filter, not, one_of, only_if,
    token, PResult, PatternError,
};
use crate::parser::{Language, Reason};
use crate::sets::{
    multi_char_escape, Codepoint, Predicate, END_SENTINEL, START_SENTINEL,
};
use crate::unicode;

/// Characters that can't appear unescaped outside character classes.
const XSD_METACHARS: &str = ".\\?*+{}()|[]";
const XPATH_METACHARS: &str = ".\\?*+{}()|[]^$";

/// Characters that can follow a backslash in a single character escape,
/// besides `n`, `r` and `t`.
const XSD_ESCAPES: &[&str] = &[
    "\\", "|", ".", "-", "^", "?", "*", "+", "{", "}", "(", ")", "[", "]",
];
const XPATH_ESCAPES: &[&str] = &[
    "\\", "|", ".", "-", "^", "?", "*", "+", "{", "}", "(", ")", "[", "]",
    "$",
];

const MULTI_CHAR_ESCAPES: &[&str] =
    &["s", "S", "i", "I", "c", "C", "d", "D", "w", "W"];

const NON_ZERO_DIGITS: &[&str] =
    &["1", "2", "3", "4", "5", "6", "7", "8", "9"];

pub(crate) struct Grammar {
    language: Language,
    /// Maximum number of groups and character class expressions that can
    /// be nested inside each other.
    nest_limit: u32,
    /// Current nesting level.
    depth: Cell<u32>,
    /// The deepest recoverable error produced by a piece. Repetitions
    /// discard the error that ends them, but when the pattern can't be
    /// parsed this is usually the most accurate explanation.
    deepest_error: RefCell<Option<PatternError>>,
}

impl Grammar {
    pub fn new(language: Language, nest_limit: u32) -> Self {
        Self {
            language,
            nest_limit,
            depth: Cell::new(0),
            deepest_error: RefCell::new(None),
        }
    }

    #[inline]
    fn is_xpath(&self) -> bool {
        self.language == Language::XPath
    }

    /// Parses a complete pattern.
    pub fn pattern<'a>(&self, input: &'a str) -> PResult<'a, RegExp> {
        complete(|i| self.regexp(i))(input).map_err(|err| match err {
            nom::Err::Error(err) => match self.deepest_error.take() {
                Some(deepest) if deepest.remaining < err.remaining => {
                    nom::Err::Error(deepest)
                }
                _ => nom::Err::Error(err),
            },
            err => err,
        })
    }

    /// regExp ::= branch ( '|' branch )*
    fn regexp<'a>(&self, input: &'a str) -> PResult<'a, RegExp> {
        map(
            pair(
                |i| self.branch(i),
                many0(preceded(token("|"), cut(|i| self.branch(i)))),
            ),
            |(first, rest)| RegExp {
                branches: iter::once(first).chain(rest).collect(),
            },
        )(input)
    }

    /// branch ::= piece*
    fn branch<'a>(&self, input: &'a str) -> PResult<'a, Branch> {
        map(many0(|i| self.piece(i)), |pieces| Branch { pieces })(input)
    }

    /// piece ::= atom quantifier?
    fn piece<'a>(&self, input: &'a str) -> PResult<'a, Piece> {
        let result = map(
            pair(|i| self.atom(i), opt(|i| self.quantifier(i))),
            |(atom, quantifier)| {
                Piece::with_quantifier(atom, quantifier.unwrap_or_default())
            },
        )(input);

        if let Err(nom::Err::Error(err)) = &result {
            let mut deepest = self.deepest_error.borrow_mut();
            if deepest.as_ref().map_or(true, |d| err.remaining < d.remaining) {
                *deepest = Some(err.clone());
            }
        }

        result
    }

    /// quantifier ::= [?*+] | ( '{' quantity '}' )
    ///
    /// In XPath any quantifier can be followed by `?`, which makes it
    /// reluctant. Whether a quantifier is greedy or reluctant doesn't change
    /// what the pattern matches, so the `?` is simply skipped.
    fn quantifier<'a>(&self, input: &'a str) -> PResult<'a, Quantifier> {
        let mut quantifier = alt((
            value(Quantifier { min: 0, max: Some(1) }, token("?")),
            value(Quantifier { min: 0, max: None }, token("*")),
            value(Quantifier { min: 1, max: None }, token("+")),
            delimited_cut(token("{"), quantity, token("}")),
        ));

        if self.is_xpath() {
            terminated(quantifier, opt(token("?")))(input)
        } else {
            quantifier(input)
        }
    }

    /// atom ::= NormalChar | charClass | ( '(' regExp ')' )
    fn atom<'a>(&self, input: &'a str) -> PResult<'a, Atom> {
        let xpath = self.is_xpath();
        alt((
            map(|i| self.normal_char(i), Atom::Codepoint),
            |i| self.char_class(i),
            only_if(
                xpath,
                value(Atom::Codepoint(START_SENTINEL), token("^")),
            ),
            only_if(xpath, value(Atom::Codepoint(END_SENTINEL), token("$"))),
            only_if(xpath, backreference),
            only_if(
                xpath,
                map(
                    |i| self.nested("(?:", |i| self.regexp(i), ")", i),
                    Atom::RegExp,
                ),
            ),
            map(
                |i| self.nested("(", |i| self.regexp(i), ")", i),
                Atom::RegExp,
            ),
        ))(input)
    }

    /// Like [`delimited_cut`], but fails with a fatal error if the `open`
    /// token would exceed the nesting limit.
    fn nested<'a, O, P>(
        &self,
        open: &'static str,
        inner: P,
        close: &'static str,
        input: &'a str,
    ) -> PResult<'a, O>
    where
        P: Parser<&'a str, O, PatternError>,
    {
        let (rest, _) = token(open)(input)?;
        let depth = self.depth.get();

        if depth >= self.nest_limit {
            return Err(nom::Err::Failure(PatternError::semantic(
                input,
                Reason::NestingTooDeep(self.nest_limit),
            )));
        }

        self.depth.set(depth + 1);
        let result = cut(terminated(inner, token(close)))(rest);
        self.depth.set(depth);

        result
    }

    /// NormalChar ::= [^.\?*+{}()|#x5B#x5D]
    fn normal_char<'a>(&self, input: &'a str) -> PResult<'a, Codepoint> {
        let metachars =
            if self.is_xpath() { XPATH_METACHARS } else { XSD_METACHARS };
        filter(
            codepoint,
            |c| !metachars.chars().any(|m| m as Codepoint == *c),
            &["normal character"],
        )(input)
    }

    /// charClass ::= SingleCharEsc | charClassEsc | charClassExpr |
    ///               WildcardEsc
    fn char_class<'a>(&self, input: &'a str) -> PResult<'a, Atom> {
        alt((
            map(|i| self.single_char_esc(i), Atom::Codepoint),
            map(|i| self.char_class_esc(i), Atom::Predicate),
            map(|i| self.char_class_expr(i), Atom::Predicate),
            map(token("."), |_| Atom::Predicate(Predicate::wildcard())),
        ))(input)
    }

    /// SingleCharEsc ::= '\' [nrt\|.?*+(){}#x2D#x5B#x5D#x5E]
    fn single_char_esc<'a>(&self, input: &'a str) -> PResult<'a, Codepoint> {
        let escapes =
            if self.is_xpath() { XPATH_ESCAPES } else { XSD_ESCAPES };
        preceded(
            token("\\"),
            alt((
                value(0x0A, token("n")),
                value(0x0D, token("r")),
                value(0x09, token("t")),
                one_of(escapes),
            )),
        )(input)
    }

    /// charClassEsc ::= ( MultiCharEsc | catEsc | complEsc )
    fn char_class_esc<'a>(&self, input: &'a str) -> PResult<'a, Predicate> {
        alt((
            multi_char_esc,
            delimited_cut(token("\\p{"), |i| self.char_prop(i), token("}")),
            map(
                delimited_cut(token("\\P{"), |i| self.char_prop(i), token("}")),
                |p| p.complement(),
            ),
        ))(input)
    }

    /// charProp ::= IsCategory | IsBlock
    ///
    /// Anything else that looks like a name is reported as an unknown
    /// category.
    fn char_prop<'a>(&self, input: &'a str) -> PResult<'a, Predicate> {
        alt((
            terminated(is_category, peek(token("}"))),
            |i| self.is_block(i),
            check(
                terminated(
                    recognize(many1(block_identifier_char)),
                    peek(token("}")),
                ),
                |name: &str| {
                    Err::<Predicate, _>(Reason::UnknownCategory(
                        name.to_string(),
                    ))
                },
            ),
        ))(input)
    }

    /// IsBlock ::= 'Is' [a-zA-Z0-9#x2D]+
    ///
    /// Whether an unknown block is an error depends on the language.
    fn is_block<'a>(&self, input: &'a str) -> PResult<'a, Predicate> {
        let lenient = self.language.unknown_blocks_match_everything();
        check(
            preceded(token("Is"), recognize(many1(block_identifier_char))),
            move |name: &str| match unicode::block(name) {
                Some(block) => Ok(block.clone()),
                None if lenient => Ok(Predicate::everything()),
                None => Err(Reason::UnknownBlock(name.to_string())),
            },
        )(input)
    }

    /// charClassExpr ::= '[' charGroup ']'
    fn char_class_expr<'a>(&self, input: &'a str) -> PResult<'a, Predicate> {
        self.nested("[", |i| self.char_group(i), "]", input)
    }

    /// charGroup ::= ( posCharGroup | negCharGroup ) ( '-' charClassExpr )?
    fn char_group<'a>(&self, input: &'a str) -> PResult<'a, Predicate> {
        map(
            pair(
                alt((
                    preceded(not(token("^"), &["not ^"]), |i| {
                        self.pos_char_group(i)
                    }),
                    |i| self.neg_char_group(i),
                )),
                opt(preceded(token("-"), |i| self.char_class_expr(i))),
            ),
            |(group, except)| match except {
                Some(except) => group.difference(&except),
                None => group,
            },
        )(input)
    }

    /// posCharGroup ::= ( charRange | charClassEsc )+
    fn pos_char_group<'a>(&self, input: &'a str) -> PResult<'a, Predicate> {
        map(
            |i| self.char_group_parts(i),
            |parts| {
                parts
                    .iter()
                    .fold(Predicate::nothing(), |acc, part| acc.union(part))
            },
        )(input)
    }

    /// negCharGroup ::= '^' posCharGroup
    fn neg_char_group<'a>(&self, input: &'a str) -> PResult<'a, Predicate> {
        map(preceded(token("^"), |i| self.pos_char_group(i)), |p| {
            p.complement()
        })(input)
    }

    /// The parts of a character group.
    ///
    /// A hyphen is a literal character only at the start of the group, at
    /// its end, or right before a subtraction. After a single character the
    /// next part follows the rules in
    /// [`Grammar::single_char_with_hyphen_rules`], after a range or an
    /// escape it can start with a literal hyphen again.
    fn char_group_parts<'a>(
        &self,
        mut input: &'a str,
    ) -> PResult<'a, Vec<Predicate>> {
        let mut parts = Vec::new();
        let mut after_single_char = false;

        loop {
            let (rest, (part, single_char)) =
                match self.char_group_part(after_single_char, input) {
                    Err(nom::Err::Error(err)) if !parts.is_empty() => {
                        // The group could have ended here too.
                        return Err(nom::Err::Error(err.or(
                            PatternError::expected(input, &["]", "-["]),
                        )));
                    }
                    result => result?,
                };

            parts.push(part);
            after_single_char = single_char;
            input = rest;

            if assert_end_of_char_group(input).is_ok() {
                return Ok((input, parts));
            }
        }
    }

    /// A single part of a character group. The returned flag is true if the
    /// part is a single character.
    ///
    /// A single character followed by a hyphen and something other than
    /// `[` or `]` is the start of a range.
    fn char_group_part<'a>(
        &self,
        after_single_char: bool,
        input: &'a str,
    ) -> PResult<'a, (Predicate, bool)> {
        let single_char = |i: &'a str| {
            if after_single_char {
                self.single_char_with_hyphen_rules(i)
            } else {
                self.single_char(i)
            }
        };
        alt((
            map(terminated(single_char, not(range_hyphen, &["not -"])), |c| {
                (Predicate::single_char(c), true)
            }),
            map(
                alt((|i| self.char_range(i), |i| self.char_class_esc(i))),
                |p| (p, false),
            ),
        ))(input)
    }

    /// A single character where an unescaped hyphen is only accepted at
    /// the end of the group, or right before a subtraction.
    fn single_char_with_hyphen_rules<'a>(
        &self,
        input: &'a str,
    ) -> PResult<'a, Codepoint> {
        alt((
            value(
                '-' as Codepoint,
                terminated(
                    terminated(token("-"), not(token("["), &["not ["])),
                    assert_end_of_char_group,
                ),
            ),
            preceded(not(token("-"), &["not -"]), |i| self.single_char(i)),
        ))(input)
    }

    /// charRange ::= seRange
    /// seRange   ::= charOrEsc '-' charOrEsc
    fn char_range<'a>(&self, input: &'a str) -> PResult<'a, Predicate> {
        check(
            pair(
                |i| self.single_char_hyphen_as_none(i),
                preceded(token("-"), |i| self.single_char_hyphen_as_none(i)),
            ),
            |range| match range {
                (Some(first), Some(last)) => {
                    Predicate::char_range(first, last)
                        .map_err(|_| Reason::InvalidRange)
                }
                _ => Err(Reason::HyphenAsRangeEndpoint),
            },
        )(input)
    }

    /// Like [`Grammar::single_char`], but an unescaped hyphen produces
    /// [`None`], as it can't be a range endpoint.
    fn single_char_hyphen_as_none<'a>(
        &self,
        input: &'a str,
    ) -> PResult<'a, Option<Codepoint>> {
        alt((value(None, token("-")), map(|i| self.single_char(i), Some)))(
            input,
        )
    }

    /// charOrEsc ::= SingleCharNoEsc | SingleCharEsc
    fn single_char<'a>(&self, input: &'a str) -> PResult<'a, Codepoint> {
        alt((|i| self.single_char_esc(i), single_char_no_esc))(input)
    }
}

/// SingleCharNoEsc ::= [^\#x5B#x5D]
fn single_char_no_esc(input: &str) -> PResult<'_, Codepoint> {
    filter(
        codepoint,
        |c| !"\\[]".chars().any(|m| m as Codepoint == *c),
        &["unescaped character"],
    )(input)
}

/// MultiCharEsc ::= '\' [sSiIcCdDwW]
fn multi_char_esc(input: &str) -> PResult<'_, Predicate> {
    let (rest, c) = preceded(token("\\"), one_of(MULTI_CHAR_ESCAPES))(input)?;
    // `one_of` only accepts characters that have an escape.
    let predicate = char::from_u32(c)
        .and_then(multi_char_escape)
        .unwrap_or_default();
    Ok((rest, predicate))
}

/// IsCategory ::= Letters | Marks | Numbers | Punctuation | Separators |
///                Symbols | Others
fn is_category(input: &str) -> PResult<'_, Predicate> {
    alt((
        category("L", &["u", "l", "t", "m", "o"]),
        category("M", &["n", "c", "e"]),
        category("N", &["d", "l", "o"]),
        category("P", &["c", "d", "s", "e", "i", "f", "o"]),
        category("Z", &["s", "l", "p"]),
        category("S", &["m", "c", "k", "o"]),
        category("C", &["c", "f", "o", "n"]),
    ))(input)
}

/// A category with a one-letter name, or any of its subcategories.
fn category<'a>(
    primary: &'static str,
    secondaries: &'static [&'static str],
) -> impl FnMut(&'a str) -> PResult<'a, Predicate> {
    check(
        recognize(pair(token(primary), opt(one_of(secondaries)))),
        |name: &str| {
            unicode::category(name)
                .cloned()
                .ok_or_else(|| Reason::UnknownCategory(name.to_string()))
        },
    )
}

fn block_identifier_char(input: &str) -> PResult<'_, Codepoint> {
    filter(
        codepoint,
        |c| {
            char::from_u32(*c)
                .map_or(false, |c| c.is_ascii_alphanumeric() || c == '-')
        },
        &["block identifier"],
    )(input)
}

/// A backslash followed by a number is a back-reference in XPath. They
/// are recognized only to report that they are not supported.
fn backreference(input: &str) -> PResult<'_, Atom> {
    check(
        preceded(
            token("\\"),
            recognize(pair(one_of(NON_ZERO_DIGITS), many0(digit))),
        ),
        |_| Err(Reason::Backreference),
    )(input)
}

fn digit(input: &str) -> PResult<'_, Codepoint> {
    filter(codepoint, |c| ('0' as u32..='9' as u32).contains(c), &["digit"])(
        input,
    )
}

/// quantity ::= quantRange | quantMin | QuantExact
fn quantity(input: &str) -> PResult<'_, Quantifier> {
    alt((
        check(
            pair(quant_exact, preceded(token(","), quant_exact)),
            |(min, max)| {
                if max < min {
                    Err(Reason::QuantifierRangeOrder)
                } else {
                    Ok(Quantifier { min, max: Some(max) })
                }
            },
        ),
        map(terminated(quant_exact, token(",")), |min| Quantifier {
            min,
            max: None,
        }),
        map(quant_exact, |n| Quantifier { min: n, max: Some(n) }),
    ))(input)
}

/// QuantExact ::= [0-9]+
fn quant_exact(input: &str) -> PResult<'_, u32> {
    check(recognize(many1(digit)), |digits: &str| {
        digits.parse::<u32>().map_err(|_| Reason::QuantifierTooLarge)
    })(input)
}

/// Succeeds without consuming anything at the end of a character group.
fn assert_end_of_char_group(input: &str) -> PResult<'_, Vec<Predicate>> {
    map(peek(alt((token("]"), token("-[")))), |_| Vec::new())(input)
}

/// A hyphen between the endpoints of a range.
fn range_hyphen(input: &str) -> PResult<'_, Codepoint> {
    preceded(
        token("-"),
        filter(
            codepoint,
            |c| *c != '[' as Codepoint && *c != ']' as Codepoint,
            &["range endpoint"],
        ),
    )(input)
}
