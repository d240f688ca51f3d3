pub const MATCH_LONG_HELP: &str = r#"Match strings against a pattern

Each <SUBJECT> is printed after a marker that tells whether it matches the
pattern or not. If no subject is given, each line read from the standard
input is used as a subject.

The exit status is 0 if every subject matches, and 1 if some of them don't."#;

pub const XPATH_LONG_HELP: &str = r#"Use the XPath dialect

By default patterns are interpreted as in XML Schema: they must match the
whole subject. In XPath mode a pattern matches if it matches any substring
of the subject, `^` and `$` anchor the pattern to the start and end of the
subject, and non-capturing groups like `(?:ab)` and reluctant quantifiers
like `a*?` are accepted."#;
