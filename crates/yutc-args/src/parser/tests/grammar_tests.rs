use crate::{Arg, Error, Field, TokenKind, ValidationPolicy, parse, parse_with};

fn source(value: &str) -> Option<Field> {
    Some(Field::new(value))
}

fn parse_permissive(input: &str) -> Arg {
    parse_with(input, ValidationPolicy::DISABLED).unwrap()
}

#[test]
fn empty_input() {
    let arg = parse("").unwrap();
    assert!(arg.is_empty());
}

#[test]
fn whitespace_only_input() {
    assert!(parse("  \t ").unwrap().is_empty());
}

#[test]
fn bare_source() {
    let arg = parse("./my_file.yaml").unwrap();
    assert_eq!(
        arg,
        Arg {
            source: source("./my_file.yaml"),
            ..Arg::default()
        }
    );
}

#[test]
fn bare_source_followed_by_fields() {
    let arg = parse("./a.yaml,type=schema").unwrap();

    assert_eq!(arg.source, source("./a.yaml"));
    assert_eq!(arg.r#type, Some(Field::new("schema")));
}

#[test]
fn quoted_bare_source() {
    let arg = parse(r#""./q.yaml""#).unwrap();
    assert_eq!(arg.source, source("./q.yaml"));

    let arg = parse("'./q.yaml',jsonpath=.x").unwrap();
    assert_eq!(arg.source, source("./q.yaml"));
    assert_eq!(arg.json_path, Some(Field::new(".x")));
}

#[test]
fn fields_in_any_order() {
    let a = parse("jsonpath=.Secrets,src=./my_secrets.yaml").unwrap();
    let b = parse("src=./my_secrets.yaml,jsonpath=.Secrets").unwrap();

    assert_eq!(a, b);
    assert_eq!(a.source, source("./my_secrets.yaml"));
    assert_eq!(a.json_path, Some(Field::new(".Secrets")));
}

#[test]
fn repeated_parse_is_deterministic() {
    let input = "src=./here.json,type=schema(defaults=false),auth=u:p";
    assert_eq!(parse(input).unwrap(), parse(input).unwrap());
}

#[test]
fn schema_call() {
    let arg = parse("type=schema(defaults=false)").unwrap();

    assert_eq!(
        arg.r#type,
        Some(Field::new("schema").with_arg("defaults", "false"))
    );
    assert!(arg.source.is_none());
}

#[test]
fn auth_value() {
    let arg = parse("auth=username:password").unwrap();

    let auth = arg.auth.unwrap();
    assert_eq!(auth.value, "username:password");
    assert!(auth.args.is_empty());
}

#[test]
fn source_keeps_parens() {
    let arg = parse("src=myfile(1).docx").unwrap();

    assert_eq!(arg.source, source("myfile(1).docx"));
    assert!(arg.r#type.is_none());
}

#[test]
fn parens_on_other_keys_stay_in_value() {
    let arg = parse_permissive("jsonpath=.a(b)");
    assert_eq!(arg.json_path, Some(Field::new(".a(b)")));
}

#[test]
fn whitespace_around_tokens() {
    let arg = parse("type = schema ( defaults = false ) , src = ./a b.yaml ").unwrap();

    assert_eq!(arg.source, source("./a b.yaml"));
    assert_eq!(
        arg.r#type,
        Some(Field::new("schema").with_arg("defaults", "false"))
    );
}

#[test]
fn quoted_pieces_concatenate() {
    let arg = parse(r#"jsonpath=.a"b c"d"#).unwrap();
    assert_eq!(arg.json_path, Some(Field::new(".ab cd")));
}

#[test]
fn empty_quotes() {
    let arg = parse("jsonpath=''").unwrap();
    assert_eq!(arg.json_path, Some(Field::new("")));

    let arg = parse(r#"src="""#).unwrap();
    assert_eq!(arg.source, source(""));
}

#[test]
fn empty_source_is_not_an_error() {
    let arg = parse("src=").unwrap();
    assert_eq!(arg.source, source(""));
}

#[test]
fn text_after_closing_quote_is_dropped() {
    let arg = parse(r#"src="a" junk,type=x"#).unwrap();

    assert_eq!(arg.source, source("a"));
    assert!(arg.r#type.is_none());
}

#[test]
fn last_field_wins() {
    let arg = parse("src=a,src=b").unwrap();
    assert_eq!(arg.source, source("b"));
}

#[test]
fn last_call_argument_wins() {
    let arg = parse("type=schema(defaults=true,defaults=false)").unwrap();

    let ty = arg.r#type.unwrap();
    assert_eq!(ty.args.len(), 1);
    assert_eq!(ty.arg("defaults"), Some("false"));
}

#[test]
fn call_argument_without_value() {
    let arg = parse("type=schema(defaults)").unwrap();
    assert_eq!(arg.r#type.unwrap().arg("defaults"), Some(""));

    let arg = parse_permissive("auth=token(a,b=)");
    let auth = arg.auth.unwrap();
    assert_eq!(auth.value, "token");
    assert_eq!(auth.arg("a"), Some(""));
    assert_eq!(auth.arg("b"), Some(""));
}

#[test]
fn calls_on_auth_and_type() {
    let arg = parse_permissive("auth=token(scope=read),type=schema(defaults=false)");

    let auth = arg.auth.unwrap();
    assert_eq!(auth.value, "token");
    assert_eq!(auth.arg("scope"), Some("read"));
    assert_eq!(arg.r#type.unwrap().arg("defaults"), Some("false"));
}

#[test]
fn paren_after_call_is_an_error() {
    let err = parse("type=schema()(").unwrap_err();
    insta::assert_snapshot!(err, @"parse error at position 13: expected FIELD_SEP, got INVALID");
}

#[test]
fn empty_call() {
    let arg = parse("type=schema()").unwrap();

    let ty = arg.r#type.unwrap();
    assert_eq!(ty.value, "schema");
    assert!(ty.args.is_empty());
}

#[test]
fn trailing_separator_in_call() {
    let arg = parse("type=schema(defaults=false,)").unwrap();
    assert_eq!(arg.r#type.unwrap().arg("defaults"), Some("false"));
}

#[test]
fn empty_generic_value_is_an_error() {
    let err = parse("auth=").unwrap_err();

    insta::assert_snapshot!(err, @"parse error at position 5: expected VALUE, got EOF");
    assert_eq!(err.position(), 5);
}

#[test]
fn nested_call_is_an_error() {
    let err = parse("type=schema(a(b))").unwrap_err();

    insta::assert_snapshot!(err, @"parse error at position 13: expected KEY, got INVALID");
}

#[test]
fn text_after_call_is_an_error() {
    let err = parse("type=schema(defaults=false)x").unwrap_err();

    insta::assert_snapshot!(err, @"parse error at position 27: expected FIELD_SEP, got INVALID");
    assert_eq!(
        err,
        Error::Syntax {
            expected: TokenKind::FieldSep,
            found: TokenKind::Invalid,
            span: crate::token::text_range(27, 28),
        }
    );
}

#[test]
fn unterminated_call_is_an_error() {
    let err = parse("type=schema(defaults=false").unwrap_err();
    insta::assert_snapshot!(err, @"parse error at position 26: expected PAREN_EXIT_CALL, got EOF");
}

#[test]
fn unterminated_quote_is_an_error() {
    let err = parse(r#"src="open"#).unwrap_err();
    insta::assert_snapshot!(err, @"parse error at position 9: expected QUOTE_EXIT, got EOF");
}

#[test]
fn trailing_separator_needs_a_field() {
    let err = parse_with("src=a,", ValidationPolicy::DISABLED).unwrap_err();
    insta::assert_snapshot!(err, @"parse error at position 6: expected EQ, got EOF");
}
