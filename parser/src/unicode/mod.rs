/*! Unicode general categories and blocks.

The tables are generated from the Unicode Character Database (version 14.0.0)
and stored in the packed form described in [`codec`]. They are unpacked the
first time they are used and shared by every parser afterwards.
*/

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::sets::Predicate;

pub mod codec;

mod data {
    include!("data/blocks.rs");

    pub(crate) static PACKED_CATEGORIES: &str =
        include_str!("data/categories.txt");
}

const SURROGATES: (u32, u32) = (0xD800, 0xDFFF);

lazy_static! {
    static ref CATEGORIES: FxHashMap<&'static str, Predicate> = {
        let mut categories = codec::unpack_categories(data::PACKED_CATEGORIES)
            .expect("packed Unicode category table is corrupt");

        // The packed table only knows about assigned codepoints. Everything
        // else, except surrogates, is unassigned.
        let assigned = ["L", "M", "N", "P", "Z", "S", "C"]
            .iter()
            .filter_map(|group| categories.get(group))
            .fold(Predicate::nothing(), |acc, p| acc.union(p));

        let unassigned = assigned
            .complement()
            .difference(&Predicate::from_ranges([SURROGATES]));

        if let Some(other) = categories.get_mut("C") {
            *other = other.union(&unassigned);
        }

        categories.insert("Cn", unassigned);
        categories
    };

    static ref BLOCKS: FxHashMap<String, Predicate> =
        codec::unpack_blocks(data::BLOCK_NAMES, data::BLOCK_LENGTHS);
}

/// Returns the predicate for a general category such as `Lu` or `N`.
pub fn category(name: &str) -> Option<&'static Predicate> {
    CATEGORIES.get(name)
}

/// Returns the predicate for a block. `name` is the name of the block
/// without whitespace, as in `BasicLatin` or `Latin-1Supplement`.
pub fn block(name: &str) -> Option<&'static Predicate> {
    BLOCKS.get(name)
}
