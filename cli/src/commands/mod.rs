mod debug;
mod matches;

pub use debug::*;
pub use matches::*;

use clap::{arg, command, crate_authors, Arg, ArgMatches, Command};
use xspattern::{Compiler, Language, Matcher};

use crate::{commands, help, APP_HELP_TEMPLATE};

pub fn command(name: &'static str) -> Command {
    Command::new(name).help_template(
        r#"{about-with-newline}
{usage-heading}
  {usage}

{all-args}
"#,
    )
}

pub fn cli() -> Command {
    command!()
        .author(crate_authors!("\n")) // requires `cargo` feature
        .arg_required_else_help(true)
        .help_template(APP_HELP_TEMPLATE)
        .subcommand_required(true)
        .subcommands(vec![commands::matches(), commands::debug()])
}

/// The `<PATTERN>` argument shared by all commands.
fn pattern_arg() -> Arg {
    arg!(<PATTERN>).help("XML Schema or XPath pattern")
}

/// The `--xpath` option shared by all commands.
fn xpath_arg() -> Arg {
    arg!(-x --xpath)
        .help("Use the XPath dialect")
        .long_help(help::XPATH_LONG_HELP)
}

fn language(args: &ArgMatches) -> Language {
    if args.get_flag("xpath") {
        Language::XPath
    } else {
        Language::Xsd
    }
}

fn compile_pattern(args: &ArgMatches) -> Result<Matcher, xspattern::Error> {
    let pattern = args.get_one::<String>("PATTERN").unwrap();
    Compiler::new().language(language(args)).compile(pattern)
}
