//! Resolve an argument into the data or template input yutc would load.

use yutc_args::resolve::{DataInput, TemplateInput};

pub struct ResolveArgs {
    pub input: String,
    pub template: bool,
    pub common: bool,
    pub compact: bool,
}

pub fn run(args: ResolveArgs) {
    let result = if args.template {
        TemplateInput::from_arg(&args.input, args.common)
            .map(|input| super::print_json(&input, args.compact))
    } else {
        DataInput::from_arg(&args.input).map(|input| super::print_json(&input, args.compact))
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
