pub mod ast;
pub mod check;
pub mod resolve;
pub mod tokens;


fn print_json<T: serde::Serialize>(value: &T, compact: bool) {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };

    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
