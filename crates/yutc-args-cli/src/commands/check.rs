//! Validate arguments and render diagnostics for the ones that fail.

use yutc_args::{Parser, ValidationPolicy};

pub struct CheckArgs {
    pub inputs: Vec<String>,
    pub validate: bool,
    pub escapes: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let policy = if args.validate {
        ValidationPolicy::DEFAULT
    } else {
        ValidationPolicy::DISABLED
    };

    let mut failed = 0usize;
    for (i, input) in args.inputs.iter().enumerate() {
        let result = Parser::new(input)
            .with_validation(policy)
            .with_escapes(args.escapes)
            .parse();

        let Err(err) = result else {
            tracing::debug!(index = i, "argument ok");
            continue;
        };

        failed += 1;
        let path = format!("input[{i}]");
        eprintln!(
            "{}",
            err.printer()
                .source(input)
                .path(&path)
                .colored(args.color)
                .render()
        );
    }

    if failed > 0 {
        std::process::exit(1);
    }
}
