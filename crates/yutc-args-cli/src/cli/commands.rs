//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("yutc-args")
        .about("Inspect how yutc input arguments are tokenized and parsed")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(tokens_command())
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(resolve_command())
}

/// Show the token stream of one input.
pub fn tokens_command() -> Command {
    Command::new("tokens")
        .about("Show the tokens of an input argument")
        .after_help(
            r#"EXAMPLES:
  yutc-args tokens './my_file.yaml'
  yutc-args tokens 'src=./here.json,type=schema(defaults=false)'
  yutc-args tokens --format python 'jsonpath=.Secrets,src=./s.yaml'"#,
        )
        .arg(input_arg())
        .arg(format_arg())
        .arg(escapes_arg())
        .arg(color_arg())
}

/// Show the parsed descriptor as JSON.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the parsed argument as JSON")
        .after_help(
            r#"EXAMPLES:
  yutc-args ast 'src=./here.json,type=schema(defaults=false)'
  yutc-args ast --no-validate 'type=customfunc(arg=val)'"#,
        )
        .arg(input_arg())
        .arg(no_validate_arg())
        .arg(escapes_arg())
        .arg(compact_arg())
}

/// Validate input arguments.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate input arguments")
        .after_help(
            r#"EXAMPLES:
  yutc-args check './a.yaml' 'jsonpath=.Secrets,src=./s.yaml'
  yutc-args check --color never 'type=schema(invalid=value)'"#,
        )
        .arg(inputs_arg())
        .arg(no_validate_arg())
        .arg(escapes_arg())
        .arg(color_arg())
}

/// Resolve an input the way yutc's loaders see it.
pub fn resolve_command() -> Command {
    Command::new("resolve")
        .about("Show how an input argument resolves to a data or template input")
        .after_help(
            r#"EXAMPLES:
  yutc-args resolve 'src=./schema.yaml,type=schema(defaults=false)'
  yutc-args resolve --template --common 'src=https://example.com/t.tmpl,auth=token'"#,
        )
        .arg(input_arg())
        .arg(template_arg())
        .arg(common_arg())
        .arg(compact_arg())
}
