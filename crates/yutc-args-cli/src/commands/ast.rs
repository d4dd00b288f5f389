//! Print the parsed argument as JSON.

use yutc_args::{Parser, ValidationPolicy};

pub struct AstArgs {
    pub input: String,
    pub validate: bool,
    pub escapes: bool,
    pub compact: bool,
}

pub fn run(args: AstArgs) {
    let policy = if args.validate {
        ValidationPolicy::DEFAULT
    } else {
        ValidationPolicy::DISABLED
    };

    let arg = match Parser::new(&args.input)
        .with_validation(policy)
        .with_escapes(args.escapes)
        .parse()
    {
        Ok(arg) => arg,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    super::print_json(&arg, args.compact);
}
