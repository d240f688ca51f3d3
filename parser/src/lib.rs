/*! Parses XML Schema and XPath regular expressions.

This crate turns a pattern into an Abstract Syntax Tree (AST). Character
classes, including Unicode categories, blocks and multi-character escapes
like `\d`, are resolved while parsing and become [`sets::Predicate`]s, so the
AST only contains literal codepoints, predicates and nested expressions.

```
use xspattern_parser::{ast, Parser};

let regexp = Parser::new().parse("a|b+").unwrap();
assert_eq!(regexp.branches.len(), 2);
assert_eq!(regexp.branches[1].pieces[0].quantifier, ast::Quantifier {
    min: 1,
    max: None,
});
```
*/

pub use parser::Error;
pub use parser::Language;
pub use parser::Parser;
pub use parser::Reason;
pub use parser::DEFAULT_NEST_LIMIT;

pub mod ast;
pub mod sets;
pub mod unicode;

mod parser;
mod report;
