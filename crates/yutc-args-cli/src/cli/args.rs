//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction};

/// Single input argument to inspect (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .required(true)
        .allow_hyphen_values(true)
        .help("Input argument, e.g. 'src=./a.yaml,type=schema(defaults=false)'")
}

/// One or more input arguments (positional).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .required(true)
        .num_args(1..)
        .allow_hyphen_values(true)
        .help("Input arguments to check")
}

/// Token dump layout (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("table")
        .value_parser(["table", "python"])
        .help("Output format")
}

/// Backslash escapes (--escapes).
pub fn escapes_arg() -> Arg {
    Arg::new("escapes")
        .long("escapes")
        .action(ArgAction::SetTrue)
        .help("Treat '\\x' as a literal 'x'")
}

/// Disable key and call validation (--no-validate).
pub fn no_validate_arg() -> Arg {
    Arg::new("no_validate")
        .long("no-validate")
        .action(ArgAction::SetTrue)
        .help("Accept unknown keys and calls")
}

/// Compact JSON output (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Resolve as a template input (--template).
pub fn template_arg() -> Arg {
    Arg::new("template")
        .long("template")
        .action(ArgAction::SetTrue)
        .help("Resolve as a template input instead of a data input")
}

/// Shared template (--common).
pub fn common_arg() -> Arg {
    Arg::new("common")
        .long("common")
        .action(ArgAction::SetTrue)
        .requires("template")
        .help("Mark the template as shared by all templates")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .global(true)
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
