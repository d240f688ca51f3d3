use std::io;

use clap::{arg, ArgMatches, Command};
use yansi::Color::{Green, Red};
use yansi::Paint;

use crate::help;

pub fn matches() -> Command {
    super::command("match")
        .about("Match strings against a pattern")
        .long_about(help::MATCH_LONG_HELP)
        .arg(super::pattern_arg())
        .arg(arg!([SUBJECT] ...).help("Strings to match"))
        .arg(super::xpath_arg())
}

/// Executes the `match` command. Returns `true` if every subject matches.
pub fn exec_match(args: &ArgMatches) -> anyhow::Result<bool> {
    let matcher = super::compile_pattern(args)?;

    let mut all_match = true;

    let mut print_result = |subject: &str| {
        if matcher.is_match(subject) {
            println!("{} {}", "[ PASS ]".paint(Green).bold(), subject);
        } else {
            println!("{} {}", "[ FAIL ]".paint(Red).bold(), subject);
            all_match = false;
        }
    };

    if let Some(subjects) = args.get_many::<String>("SUBJECT") {
        for subject in subjects {
            print_result(subject);
        }
    } else {
        for line in io::stdin().lines() {
            print_result(line?.as_str());
        }
    }

    Ok(all_match)
}
