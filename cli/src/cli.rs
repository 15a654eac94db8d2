use clap::{Arg, ArgAction, Command, builder::Styles, value_parser};
use kwgen::styles::*;
use std::path::PathBuf;

pub fn opt(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).action(ArgAction::Set)
}

pub fn flag(name: &'static str, help: &'static str) -> Arg {
    opt(name, help).action(ArgAction::SetTrue)
}

pub fn path_opt(name: &'static str, help: &'static str) -> Arg {
    opt(name, help)
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
}

pub const PATHS_HEADING: &str = "Paths";

pub fn cli() -> Command {
    let styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };

    Command::new("kwgen")
        .about("Generate the keyword lookup table from a token header")
        .styles(styles)
        .arg(
            path_opt("input", "Token header declaring the enumeration")
                .short('i')
                .help_heading(PATHS_HEADING),
        )
        .arg(
            path_opt("output", "File to write the generated table to")
                .short('o')
                .help_heading(PATHS_HEADING),
        )
        .arg(
            path_opt("config", "Use this config file instead of searching for kwgen.toml")
                .short('c')
                .help_heading(PATHS_HEADING),
        )
        .arg(flag("print", "Displays generated c++ code in the terminal").short('p'))
        .arg(flag("verbose", "Use verbose output").short('v'))
        .arg(flag("no-color", "Disable colored output"))
}
