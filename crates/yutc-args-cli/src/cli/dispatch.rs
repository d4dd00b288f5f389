//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use clap::ArgMatches;

use super::{ColorChoice, TokenFormat};
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::resolve::ResolveArgs;
use crate::commands::tokens::TokensArgs;

pub struct TokensParams {
    pub input: String,
    pub format: TokenFormat,
    pub escapes: bool,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: input(m),
            format: parse_format(m),
            escapes: m.get_flag("escapes"),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: p.input,
            format: p.format,
            escapes: p.escapes,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub input: String,
    pub no_validate: bool,
    pub escapes: bool,
    pub compact: bool,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: input(m),
            no_validate: m.get_flag("no_validate"),
            escapes: m.get_flag("escapes"),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: p.input,
            validate: !p.no_validate,
            escapes: p.escapes,
            compact: p.compact,
        }
    }
}

pub struct CheckParams {
    pub inputs: Vec<String>,
    pub no_validate: bool,
    pub escapes: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: m
                .get_many::<String>("inputs")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            no_validate: m.get_flag("no_validate"),
            escapes: m.get_flag("escapes"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            inputs: p.inputs,
            validate: !p.no_validate,
            escapes: p.escapes,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ResolveParams {
    pub input: String,
    pub template: bool,
    pub common: bool,
    pub compact: bool,
}

impl ResolveParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: input(m),
            template: m.get_flag("template"),
            common: m.get_flag("common"),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<ResolveParams> for ResolveArgs {
    fn from(p: ResolveParams) -> Self {
        Self {
            input: p.input,
            template: p.template,
            common: p.common,
            compact: p.compact,
        }
    }
}

fn input(m: &ArgMatches) -> String {
    m.get_one::<String>("input").cloned().unwrap_or_default()
}

fn parse_format(m: &ArgMatches) -> TokenFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("python") => TokenFormat::Python,
        _ => TokenFormat::Table,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
