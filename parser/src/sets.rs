/*! Character classes represented as sets of codepoints.

A [`Predicate`] is an immutable set of codepoints stored as a sorted list of
disjoint, non-adjacent, inclusive ranges. Every set operation produces a new
predicate in that canonical form, so two predicates that contain the same
codepoints compare equal regardless of how they were built.

All predicates live inside the Unicode codespace (`0..=0x10FFFF`). The
complement of a predicate is computed relative to the codespace, which means
that the sentinel codepoints used for anchors ([`START_SENTINEL`] and
[`END_SENTINEL`]) can't be matched by any predicate.
*/

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use thiserror::Error;

use crate::unicode;

/// A Unicode scalar value, or one of the sentinels.
pub type Codepoint = u32;

/// Largest codepoint in the Unicode codespace.
pub const MAX_CODEPOINT: Codepoint = 0x10FFFF;

/// Synthetic codepoint that precedes the input in XPath mode. `^` matches it.
pub const START_SENTINEL: Codepoint = MAX_CODEPOINT + 1;

/// Synthetic codepoint that follows the input in XPath mode. `$` matches it.
pub const END_SENTINEL: Codepoint = MAX_CODEPOINT + 2;

/// Error returned by [`Predicate::char_range`] when the last codepoint of
/// the range is lower than the first one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("character range is in the wrong order")]
pub struct InvalidRange {
    pub first: Codepoint,
    pub last: Codepoint,
}

/// A set of codepoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Predicate {
    ranges: Vec<(Codepoint, Codepoint)>,
}

impl Predicate {
    /// The empty set.
    pub fn nothing() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Every codepoint in the Unicode codespace, sentinels excluded.
    pub fn everything() -> Self {
        Self { ranges: vec![(0, MAX_CODEPOINT)] }
    }

    /// A set containing only `c`.
    pub fn single_char(c: Codepoint) -> Self {
        debug_assert!(c <= MAX_CODEPOINT);
        Self { ranges: vec![(c, c)] }
    }

    /// A set containing every codepoint from `first` to `last`, both
    /// inclusive.
    pub fn char_range(
        first: Codepoint,
        last: Codepoint,
    ) -> Result<Self, InvalidRange> {
        if last < first {
            return Err(InvalidRange { first, last });
        }
        debug_assert!(last <= MAX_CODEPOINT);
        Ok(Self { ranges: vec![(first, last)] })
    }

    /// Anything except line feed and carriage return. This is the meaning
    /// of `.` in a pattern.
    pub fn wildcard() -> Self {
        Self {
            ranges: vec![(0, 0x09), (0x0B, 0x0C), (0x0E, MAX_CODEPOINT)],
        }
    }

    /// Builds a predicate from arbitrary ranges. The ranges can overlap and
    /// come in any order. Ranges where the upper bound is lower than the
    /// lower bound are ignored.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = (Codepoint, Codepoint)>,
    {
        let mut set = Self {
            ranges: ranges
                .into_iter()
                .filter(|(lo, hi)| lo <= hi)
                .map(|(lo, hi)| (lo, hi.min(MAX_CODEPOINT)))
                .filter(|(lo, hi)| lo <= hi)
                .collect(),
        };
        set.canonicalize();
        set
    }

    /// Returns true if `c` belongs to the set.
    #[inline]
    pub fn matches(&self, c: Codepoint) -> bool {
        self.ranges
            .binary_search_by(|&(lo, hi)| {
                if hi < c {
                    Ordering::Less
                } else if lo > c {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The ranges in the set, in ascending order.
    #[inline]
    pub fn ranges(&self) -> &[(Codepoint, Codepoint)] {
        self.ranges.as_slice()
    }

    /// Codepoints that are in `self` or in `other`.
    pub fn union(&self, other: &Self) -> Self {
        if other.ranges.is_empty() || self.ranges == other.ranges {
            return self.clone();
        }
        if self.ranges.is_empty() {
            return other.clone();
        }
        let mut ranges =
            Vec::with_capacity(self.ranges.len() + other.ranges.len());
        ranges.extend_from_slice(&self.ranges);
        ranges.extend_from_slice(&other.ranges);
        let mut set = Self { ranges };
        set.canonicalize();
        set
    }

    /// Codepoints that are in `self` but not in `except`.
    pub fn difference(&self, except: &Self) -> Self {
        if self.ranges.is_empty() || except.ranges.is_empty() {
            return self.clone();
        }

        let mut ranges = Vec::with_capacity(self.ranges.len());
        let mut b = 0;

        for &(lo, hi) in &self.ranges {
            let mut lo = lo;
            // Skip ranges in `except` that end before the current range.
            while b < except.ranges.len() && except.ranges[b].1 < lo {
                b += 1;
            }
            let mut i = b;
            let mut exhausted = false;
            while i < except.ranges.len() && except.ranges[i].0 <= hi {
                let (ex_lo, ex_hi) = except.ranges[i];
                if ex_lo > lo {
                    ranges.push((lo, ex_lo - 1));
                }
                if ex_hi >= hi {
                    exhausted = true;
                    break;
                }
                lo = ex_hi + 1;
                i += 1;
            }
            if !exhausted {
                ranges.push((lo, hi));
            }
        }

        Self { ranges }
    }

    /// Codepoints in the codespace that are not in `self`.
    pub fn complement(&self) -> Self {
        let mut ranges = Vec::with_capacity(self.ranges.len() + 1);
        let mut next = 0;
        for &(lo, hi) in &self.ranges {
            if lo > next {
                ranges.push((next, lo - 1));
            }
            next = hi + 1;
        }
        if next <= MAX_CODEPOINT {
            ranges.push((next, MAX_CODEPOINT));
        }
        Self { ranges }
    }

    /// Sorts the ranges and merges those that overlap or are adjacent.
    fn canonicalize(&mut self) {
        if self.is_canonical() {
            return;
        }
        self.ranges.sort_unstable();
        let mut merged: Vec<(Codepoint, Codepoint)> =
            Vec::with_capacity(self.ranges.len());
        for &(lo, hi) in &self.ranges {
            match merged.last_mut() {
                Some(last) if lo <= last.1.saturating_add(1) => {
                    last.1 = last.1.max(hi);
                }
                _ => merged.push((lo, hi)),
            }
        }
        self.ranges = merged;
    }

    fn is_canonical(&self) -> bool {
        self.ranges.windows(2).all(|w| w[0].1.saturating_add(1) < w[1].0)
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (lo, hi)) in self.ranges.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if lo == hi {
                write!(f, "[{:#04x}]", lo)?;
            } else {
                write!(f, "[{:#04x}-{:#04x}]", lo, hi)?;
            }
        }
        Ok(())
    }
}

lazy_static! {
    // space, tab, newline, carriage return
    static ref WHITESPACE: Predicate =
        Predicate::from_ranges([(0x20, 0x20), (0x09, 0x0A), (0x0D, 0x0D)]);

    // NameStartChar production from XML 1.1.
    static ref NAME_START_CHAR: Predicate = Predicate::from_ranges([
        (':' as u32, ':' as u32),
        ('A' as u32, 'Z' as u32),
        ('_' as u32, '_' as u32),
        ('a' as u32, 'z' as u32),
        (0xC0, 0xD6),
        (0xD8, 0xF6),
        (0xF8, 0x2FF),
        (0x370, 0x37D),
        (0x37F, 0x1FFF),
        (0x200C, 0x200D),
        (0x2070, 0x218F),
        (0x2C00, 0x2FEF),
        (0x3001, 0xD7FF),
        (0xF900, 0xFDCF),
        (0xFDF0, 0xFFFD),
        (0x10000, 0xEFFFF),
    ]);

    // NameChar production from XML 1.1.
    static ref NAME_CHAR: Predicate = NAME_START_CHAR.union(&Predicate::from_ranges([
        ('-' as u32, '.' as u32),
        ('0' as u32, '9' as u32),
        (0xB7, 0xB7),
        (0x300, 0x36F),
        (0x203F, 0x2040),
    ]));

    static ref DIGIT: Predicate =
        unicode::category("Nd").cloned().unwrap_or_default();

    // [#x0000-#x10FFFF]-[\p{P}\p{Z}\p{C}]
    static ref WORD_CHAR: Predicate = ["P", "Z", "C"]
        .iter()
        .filter_map(|name| unicode::category(name))
        .fold(Predicate::nothing(), |acc, p| acc.union(p))
        .complement();
}

/// Returns the predicate for the multi-character escape `\<c>`, where `c`
/// is one of `s S i I c C d D w W`. Returns [`None`] for any other
/// character.
pub fn multi_char_escape(c: char) -> Option<Predicate> {
    let predicate = match c {
        's' => WHITESPACE.clone(),
        'S' => WHITESPACE.complement(),
        'i' => NAME_START_CHAR.clone(),
        'I' => NAME_START_CHAR.complement(),
        'c' => NAME_CHAR.clone(),
        'C' => NAME_CHAR.complement(),
        'd' => DIGIT.clone(),
        'D' => DIGIT.complement(),
        'w' => WORD_CHAR.clone(),
        'W' => WORD_CHAR.complement(),
        _ => return None,
    };
    Some(predicate)
}
