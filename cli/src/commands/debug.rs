use clap::{ArgMatches, Command};
use xspattern_parser::Parser;

pub fn ast() -> Command {
    super::command("ast")
        .about("Print Abstract Syntax Tree (AST) for a pattern")
        .arg(super::pattern_arg())
        .arg(super::xpath_arg())
}

pub fn code() -> Command {
    super::command("code")
        .about("Print the code produced for a pattern")
        .arg(super::pattern_arg())
        .arg(super::xpath_arg())
}

pub fn debug() -> Command {
    super::command("debug")
        .about("Debug utilities")
        .arg_required_else_help(true)
        .subcommand(ast())
        .subcommand(code())
}

pub fn exec_debug(args: &ArgMatches) -> anyhow::Result<()> {
    match args.subcommand() {
        Some(("ast", args)) => exec_ast(args),
        Some(("code", args)) => exec_code(args),
        _ => unreachable!(),
    }
}

pub fn exec_ast(args: &ArgMatches) -> anyhow::Result<()> {
    let pattern = args.get_one::<String>("PATTERN").unwrap();

    let ast = Parser::new()
        .language(super::language(args))
        .parse(pattern)
        .map_err(xspattern::Error::from)?;

    println!("{ast:#?}");
    Ok(())
}

pub fn exec_code(args: &ArgMatches) -> anyhow::Result<()> {
    let matcher = super::compile_pattern(args)?;
    print!("{}", matcher.disassemble());
    Ok(())
}
