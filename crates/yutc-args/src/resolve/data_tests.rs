use super::{Credentials, DataInput, DataMode, ResolveError, SourceKind, parse_data_args};

fn resolve(raw: &str) -> DataInput {
    DataInput::from_arg(raw).unwrap()
}

#[test]
fn simple_path() {
    let input = resolve("./my_file.yaml");

    assert_eq!(input.name, "my_file.yaml");
    assert_eq!(input.source, SourceKind::File);
    assert_eq!(input.json_path, "$");
    assert_eq!(input.mode, DataMode::Merge);
    assert_eq!(input.auth, None);
}

#[test]
fn path_with_key_in_any_order() {
    for raw in [
        "jsonpath=.Secrets,src=./my_secrets.yaml",
        "src=./my_secrets.yaml,jsonpath=.Secrets",
        "jsonpath=.Secrets, src=./my_secrets.yaml",
    ] {
        let input = resolve(raw);
        assert_eq!(input.name, "my_secrets.yaml", "{raw}");
        assert_eq!(input.json_path, "$.Secrets", "{raw}");
    }
}

#[test]
fn rooted_json_path_kept() {
    assert_eq!(resolve("src=a.yaml,jsonpath=$.a.b").json_path, "$.a.b");
}

#[test]
fn stdin_and_url() {
    let stdin = resolve("-");
    assert_eq!(stdin.source, SourceKind::Stdin);
    assert_eq!(stdin.name, "-");

    let url = resolve("jsonpath=.Remote,src=https://example.com/data.yaml");
    assert_eq!(url.source, SourceKind::Url);
    assert_eq!(url.name, "https://example.com/data.yaml");
    assert_eq!(url.json_path, "$.Remote");
}

#[test]
fn source_may_contain_equals() {
    let input = resolve("jsonpath=.Secrets2,src=src=dumb_filename.yaml");

    assert_eq!(input.name, "src=dumb_filename.yaml");
    assert_eq!(input.json_path, "$.Secrets2");
}

#[test]
fn missing_source() {
    let err = DataInput::from_arg("jsonpath=.Secrets").unwrap_err();
    insta::assert_snapshot!(err, @"missing or empty 'src' parameter in argument: jsonpath=.Secrets");

    let err = DataInput::from_arg("src=").unwrap_err();
    assert_eq!(err, ResolveError::MissingSource("src=".to_owned()));
}

#[test]
fn parse_errors_pass_through() {
    let err = DataInput::from_arg("jsonpath=.Secrets,source=./my_secrets.yaml").unwrap_err();
    insta::assert_snapshot!(err, @"invalid key 'source': allowed keys are src, jsonpath, auth, type");

    let err = DataInput::from_arg("jsonpath=.Secrets,./my_file.yaml").unwrap_err();
    insta::assert_snapshot!(err, @"invalid key './my_file.yaml': allowed keys are src, jsonpath, auth, type");
    assert!(matches!(err, ResolveError::Parse(_)));
}

#[test]
fn schema_mode() {
    let input = resolve("src=./schema.yaml,type=schema(defaults=false)");

    assert_eq!(input.name, "schema.yaml");
    assert!(input.is_schema());
    assert_eq!(
        input.mode,
        DataMode::Schema {
            apply_defaults: false
        }
    );
}

#[test]
fn schema_defaults_on_by_default() {
    assert_eq!(
        resolve("src=s.yaml,type=schema").mode,
        DataMode::Schema {
            apply_defaults: true
        }
    );
    assert_eq!(
        resolve("src=s.yaml,type=schema(defaults=T)").mode,
        DataMode::Schema {
            apply_defaults: true
        }
    );
}

#[test]
fn explicit_data_type() {
    assert_eq!(resolve("src=a.yaml,type=data").mode, DataMode::Merge);
}

#[test]
fn unsupported_type() {
    let err = DataInput::from_arg("src=a.yaml,type=config").unwrap_err();
    insta::assert_snapshot!(err, @"unsupported input type 'config'");
}

#[test]
fn invalid_defaults_boolean() {
    let err = DataInput::from_arg("src=a.yaml,type=schema(defaults=maybe)").unwrap_err();
    insta::assert_snapshot!(err, @"invalid boolean 'maybe' for schema(defaults)");
}

#[test]
fn auth_on_url() {
    let input = resolve("src=https://example.com/a.yaml,auth=user:pass");
    assert_eq!(
        input.auth,
        Some(Credentials::Basic {
            username: "user".to_owned(),
            password: "pass".to_owned(),
        })
    );

    let input = resolve("src=https://example.com/a.yaml,auth=token");
    assert_eq!(input.auth, Some(Credentials::Bearer("token".to_owned())));
}

#[test]
fn unsupported_scheme() {
    let err = DataInput::from_arg("src=s3://bucket/a.yaml").unwrap_err();
    insta::assert_snapshot!(err, @"unsupported scheme/source for input: s3://bucket/a.yaml");
}

#[test]
fn data_input_json() {
    let input = resolve("src=./schema.yaml,type=schema(defaults=false)");
    let json = serde_json::to_string_pretty(&input).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "name": "schema.yaml",
      "source": "file",
      "json_path": "$",
      "mode": {
        "schema": {
          "apply_defaults": false
        }
      }
    }
    "#);
}

#[test]
fn parse_list() {
    let inputs = parse_data_args(&["./a.yaml", "src=-,jsonpath=.b"]).unwrap();

    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[0].name, "a.yaml");
    assert_eq!(inputs[1].source, SourceKind::Stdin);
    assert_eq!(inputs[1].json_path, "$.b");
}

#[test]
fn parse_list_stops_at_first_error() {
    let err = parse_data_args(&["./a.yaml", "nope=1", "type=x"]).unwrap_err();
    insta::assert_snapshot!(err, @"invalid key 'nope': allowed keys are src, jsonpath, auth, type");
}
