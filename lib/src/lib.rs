/*! Matches text against XML Schema and XPath regular expressions.

XML Schema defines its own flavor of regular expressions for restricting the
values of simple types with the `pattern` facet. The same flavor, with a few
extensions like anchors and non-capturing groups, is used by the XPath
functions `fn:matches`, `fn:replace` and `fn:tokenize`. This crate compiles
patterns in both dialects into a [`Matcher`] that tells whether some text
matches.

In XML Schema mode patterns are implicitly anchored, they must match the
whole input. In XPath mode a pattern matches if it matches any substring of
the input, unless it's anchored with `^` or `$`.

# Example

```rust
use xspattern::{Compiler, Language};

// XML Schema patterns must match the entire input.
let matcher = xspattern::compile(r"\p{Lu}\d{3}").unwrap();

assert!(matcher.is_match("A123"));
assert!(!matcher.is_match("a123"));
assert!(!matcher.is_match("A1234"));

// XPath patterns match substrings.
let matcher = Compiler::new()
    .language(Language::XPath)
    .compile(r"\d{3}$")
    .unwrap();

assert!(matcher.is_match("A1234"));
assert!(!matcher.is_match("1234A"));
```
*/

#![deny(missing_docs)]

pub use compiler::compile;
pub use compiler::compile_with_options;
pub use compiler::Compiler;
pub use compiler::Error;
pub use compiler::Options;

pub use matcher::Matcher;

pub use xspattern_parser::ast;
pub use xspattern_parser::Language;

mod compiler;
mod matcher;
mod re;

#[cfg(test)]
mod tests;
