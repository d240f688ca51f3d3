mod commands;
mod help;

#[cfg(test)]
mod tests;

use std::{io, panic, process};

use crossterm::tty::IsTty;
use yansi::Color::Red;
use yansi::Paint;

use crate::commands::cli;

const APP_HELP_TEMPLATE: &str = r#"xspattern {version}, XML Schema and XPath patterns at your fingertips.

{author-with-newline}
{before-help}{usage-heading}
  {usage}

{all-args}{after-help}
"#;

const EXIT_NO_MATCH: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::init();

    // If stdout is not a tty (for example, because it was redirected to a
    // file) turn off colors. This way you can redirect the output to a file
    // without ANSI escape codes messing up the file content.
    if !io::stdout().is_tty() {
        yansi::disable();
    }

    let args = cli().get_matches();

    // Set our custom panic hook that kills the process with the right exit
    // status when some panic occurs.
    let orig_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        orig_hook(panic_info);
        process::exit(EXIT_ERROR);
    }));

    let result = match args.subcommand() {
        Some(("match", args)) => commands::exec_match(args),
        Some(("debug", args)) => commands::exec_debug(args).map(|_| true),
        _ => unreachable!(),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(EXIT_NO_MATCH),
        Err(err) => {
            // Errors in the pattern come with their own report, which
            // shows where the error is.
            if let Some(err) = err.downcast_ref::<xspattern::Error>() {
                eprintln!("{}", err.report(yansi::is_enabled()));
            } else if let Some(source) = err.source() {
                eprintln!("{} {}: {}", "error:".paint(Red).bold(), err, source);
            } else {
                eprintln!("{} {}", "error:".paint(Red).bold(), err);
            }
            process::exit(EXIT_ERROR);
        }
    }

    Ok(())
}
