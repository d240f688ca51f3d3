/*! Compact encoding of the Unicode category and block tables.

The category table is a string of symbols from the base64 alphabet. Each
record describes a run of consecutive codepoints that share the same general
category, and starts where the previous one ended, the first record starting
at codepoint 0. A record consists of:

- One symbol with the category index plus 2 (see [`CATEGORIES`]). Index -1
  is a gap (unassigned or surrogate codepoints) and index -2 is a run where
  `Lu` and `Ll` alternate, starting with `Lu`. Bit 5 of this symbol is set
  when the run length needs more than one symbol.
- The run length minus 1, either as a single symbol or as four symbols with
  the bits 0-5, 6-11, 12-17 and 18-23 of the value.

The block table is a pair of parallel arrays with the name of each block and
its length. Blocks without a name are gaps between blocks. A name can contain
a legacy alias separated by `|`.

Both tables are packed from `UnicodeData.txt` and `Blocks.txt` with
[`pack_categories`] and [`pack_blocks`].
*/

use std::str::Chars;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::sets::{Codepoint, Predicate};

/// General categories, in the order used by the packed category table.
pub const CATEGORIES: [&str; 29] = [
    "Lu", "Ll", "Lt", "Lm", "Lo", "Mn", "Mc", "Me", "Nd", "Nl", "No", "Pc",
    "Pd", "Ps", "Pe", "Pi", "Pf", "Po", "Zs", "Zl", "Zp", "Sm", "Sc", "Sk",
    "So", "Cc", "Cf", "Co", "Cn",
];

/// Block names that existed in Unicode 3.1, which is the version XML Schema
/// 1.0 refers to.
const COMPATIBILITY_ALIASES: &[(&str, &str)] = &[
    ("GreekandCoptic", "Greek"),
    ("CombiningDiacriticalMarksforSymbols", "CombiningMarksforSymbols"),
    ("PrivateUseArea", "PrivateUse"),
    ("SupplementaryPrivateUseArea-A", "PrivateUse"),
    ("SupplementaryPrivateUseArea-B", "PrivateUse"),
];

const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const LONG_LENGTH: u8 = 0b100000;

const GAP: i8 = -1;
const ALTERNATING: i8 = -2;
const LU: i8 = 0;
const LL: i8 = 1;

/// Errors produced while packing or unpacking tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid symbol `{0}` in packed category table")]
    InvalidSymbol(char),

    #[error("packed category table is truncated")]
    Truncated,

    #[error("invalid category index {0} in packed category table")]
    InvalidCategory(i8),

    #[error("malformed line in Unicode data: `{0}`")]
    MalformedLine(String),
}

/// Block table in packed form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PackedBlocks {
    pub names: Vec<Option<String>>,
    pub lengths: Vec<u32>,
}

/// Packs the contents of a `Blocks.txt` file.
pub fn pack_blocks(data: &str) -> Result<PackedBlocks, CodecError> {
    let mut packed = PackedBlocks::default();
    let mut next: Codepoint = 0;

    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = || CodecError::MalformedLine(line.to_string());

        let (range, name) = line.split_once(';').ok_or_else(malformed)?;
        let (first, last) = range.split_once("..").ok_or_else(malformed)?;
        let first = parse_codepoint(first).ok_or_else(malformed)?;
        let last = parse_codepoint(last).ok_or_else(malformed)?;

        if first < next || last < first {
            return Err(malformed());
        }

        let name: String = name.split_whitespace().collect();

        if first != next {
            packed.names.push(None);
            packed.lengths.push(first - next);
        }

        match COMPATIBILITY_ALIASES.iter().find(|(n, _)| *n == name) {
            Some((_, alias)) => packed.names.push(Some(format!("{}|{}", name, alias))),
            None => packed.names.push(Some(name)),
        }

        packed.lengths.push(last - first + 1);
        next = last + 1;
    }

    Ok(packed)
}

/// Builds the predicate for each block in a packed block table. Aliases
/// map to the same predicate as the block's name, and an alias used by
/// more than one block maps to the union of all of them.
pub fn unpack_blocks<S: AsRef<str>>(
    names: &[Option<S>],
    lengths: &[u32],
) -> FxHashMap<String, Predicate> {
    let mut blocks: FxHashMap<String, Predicate> = FxHashMap::default();
    let mut first: Codepoint = 0;

    for (name, length) in names.iter().zip(lengths) {
        if let Some(name) = name {
            let range =
                Predicate::from_ranges([(first, first + length - 1)]);
            for name in name.as_ref().split('|') {
                blocks
                    .entry(name.to_string())
                    .and_modify(|existing| *existing = existing.union(&range))
                    .or_insert_with(|| range.clone());
            }
        }
        first += length;
    }

    blocks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    codepoint: Codepoint,
    cat_index: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CategoryRange {
    start: Codepoint,
    end: Codepoint,
    cat_index: i8,
}

/// Packs the contents of a `UnicodeData.txt` file.
///
/// Surrogates (`Cs`) are left out of the table, and so are codepoints that
/// don't appear in the file. Both end up in gaps.
pub fn pack_categories(data: &str) -> Result<String, CodecError> {
    let entries = parse_unicode_data(data)?;
    let entries = with_alternations(with_gaps(entries));
    Ok(encode(&as_ranges(&entries)))
}

/// Builds the predicate for each category in a packed category table,
/// plus the one-letter categories (`L`, `M`, `N`, `P`, `Z`, `S`, `C`) as the
/// union of their subcategories.
pub fn unpack_categories(
    packed: &str,
) -> Result<FxHashMap<&'static str, Predicate>, CodecError> {
    let mut parts: Vec<Vec<(Codepoint, Codepoint)>> =
        vec![Vec::new(); CATEGORIES.len()];

    let mut symbols = packed.chars();
    let mut first: Codepoint = 0;

    while let Some(c) = symbols.next() {
        let symbol = decode_symbol(c).ok_or(CodecError::InvalidSymbol(c))?;
        let cat_index = (symbol & 0b11111) as i8 - 2;
        let mut length = 1 + next_symbol(&mut symbols)? as u32;
        if symbol & LONG_LENGTH != 0 {
            length += (next_symbol(&mut symbols)? as u32) << 6;
            length += (next_symbol(&mut symbols)? as u32) << 12;
            length += (next_symbol(&mut symbols)? as u32) << 18;
        }

        match cat_index {
            ALTERNATING => {
                for (i, codepoint) in (first..first + length).enumerate() {
                    parts[i % 2].push((codepoint, codepoint));
                }
            }
            GAP => {}
            index if (index as usize) < CATEGORIES.len() => {
                parts[index as usize].push((first, first + length - 1));
            }
            index => return Err(CodecError::InvalidCategory(index)),
        }

        first += length;
    }

    let mut categories = FxHashMap::default();

    for (&name, ranges) in CATEGORIES.iter().zip(parts) {
        let predicate = Predicate::from_ranges(ranges);
        let group: &'static str = &name[..1];
        categories
            .entry(group)
            .and_modify(|existing: &mut Predicate| {
                *existing = existing.union(&predicate)
            })
            .or_insert_with(|| predicate.clone());
        categories.insert(name, predicate);
    }

    Ok(categories)
}

/// Returns the next symbol in a record that hasn't ended yet.
fn next_symbol(symbols: &mut Chars<'_>) -> Result<u8, CodecError> {
    let c = symbols.next().ok_or(CodecError::Truncated)?;
    decode_symbol(c).ok_or(CodecError::InvalidSymbol(c))
}

fn decode_symbol(c: char) -> Option<u8> {
    ALPHABET.iter().position(|b| *b as char == c).map(|p| p as u8)
}

fn parse_codepoint(s: &str) -> Option<Codepoint> {
    Codepoint::from_str_radix(s.trim(), 16).ok()
}

/// Parses `UnicodeData.txt`, expanding `<..., First>` / `<..., Last>` pairs
/// into one entry per codepoint.
fn parse_unicode_data(data: &str) -> Result<Vec<Entry>, CodecError> {
    let mut entries = Vec::new();
    let mut range_start = None;

    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let malformed = || CodecError::MalformedLine(line.to_string());
        let mut fields = line.split(';');

        let codepoint = fields
            .next()
            .and_then(parse_codepoint)
            .ok_or_else(malformed)?;
        let name = fields.next().ok_or_else(malformed)?;
        let category = fields.next().ok_or_else(malformed)?;

        let cat_index = match CATEGORIES.iter().position(|c| *c == category) {
            Some(index) => index as i8,
            // Only Cs, the parser can't produce surrogates.
            None => continue,
        };

        if name.ends_with(", First>") {
            range_start = Some(codepoint);
            continue;
        }

        if name.ends_with(", Last>") {
            if let Some(start) = range_start.take() {
                entries.extend(
                    (start..codepoint).map(|codepoint| Entry { codepoint, cat_index }),
                );
            }
        }

        entries.push(Entry { codepoint, cat_index });
    }

    Ok(entries)
}

/// Inserts a gap entry for each codepoint missing from `entries`.
fn with_gaps(entries: Vec<Entry>) -> Vec<Entry> {
    let mut result = Vec::with_capacity(entries.len());
    let mut next: Codepoint = 0;

    for entry in entries {
        result.extend(
            (next..entry.codepoint)
                .map(|codepoint| Entry { codepoint, cat_index: GAP }),
        );
        next = entry.codepoint + 1;
        result.push(entry);
    }

    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alternation {
    Out,
    Lower,
    Upper,
}

/// Marks runs of at least three codepoints alternating between `Lu` and
/// `Ll` (starting with `Lu`) as [`ALTERNATING`]. Runs always start with
/// `Lu`, so a run interrupted by two consecutive `Lu` is ended at the
/// previous `Ll`, otherwise the next run would start right after this one
/// and both would be merged with the wrong parity.
fn with_alternations(entries: Vec<Entry>) -> Vec<Entry> {
    let mut result = Vec::with_capacity(entries.len());
    let mut first: Option<Entry> = None;
    let mut second: Option<Entry> = None;
    let mut state = Alternation::Out;

    for mut entry in entries {
        match state {
            Alternation::Out => {
                if let (Some(f), Some(s)) = (first.as_mut(), second.as_mut()) {
                    if f.cat_index == LU
                        && s.cat_index == LL
                        && entry.cat_index == LU
                    {
                        f.cat_index = ALTERNATING;
                        s.cat_index = ALTERNATING;
                        entry.cat_index = ALTERNATING;
                        state = Alternation::Lower;
                    }
                }
            }
            Alternation::Lower => {
                if entry.cat_index == LL {
                    entry.cat_index = ALTERNATING;
                    state = Alternation::Upper;
                } else {
                    if entry.cat_index == LU {
                        if let Some(s) = second.as_mut() {
                            s.cat_index = LU;
                        }
                    }
                    state = Alternation::Out;
                }
            }
            Alternation::Upper => {
                if entry.cat_index == LU {
                    entry.cat_index = ALTERNATING;
                    state = Alternation::Lower;
                } else {
                    state = Alternation::Out;
                }
            }
        }

        if let Some(f) = first {
            result.push(f);
        }

        first = second;
        second = Some(entry);
    }

    result.extend(first);
    result.extend(second);
    result
}

/// Collapses consecutive entries with the same category into ranges.
fn as_ranges(entries: &[Entry]) -> Vec<CategoryRange> {
    let mut ranges: Vec<CategoryRange> = Vec::new();

    for entry in entries {
        match ranges.last_mut() {
            Some(last) if last.cat_index == entry.cat_index => {
                last.end = entry.codepoint;
            }
            _ => ranges.push(CategoryRange {
                start: entry.codepoint,
                end: entry.codepoint,
                cat_index: entry.cat_index,
            }),
        }
    }

    ranges
}

fn encode(ranges: &[CategoryRange]) -> String {
    let mut packed = String::with_capacity(ranges.len() * 2);
    let symbol = |n: u32| ALPHABET[(n & 0b111111) as usize] as char;

    for range in ranges {
        // Runs are never empty, so the length is stored minus one.
        let length = range.end - range.start;
        let cat_index = (range.cat_index + 2) as u32;
        if length < ALPHABET.len() as u32 {
            packed.push(symbol(cat_index));
            packed.push(symbol(length));
        } else {
            packed.push(symbol(cat_index | LONG_LENGTH as u32));
            packed.push(symbol(length));
            packed.push(symbol(length >> 6));
            packed.push(symbol(length >> 12));
            packed.push(symbol(length >> 18));
        }
    }

    packed
}
