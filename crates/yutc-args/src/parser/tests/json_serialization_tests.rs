use crate::parse;

#[test]
fn arg_json_serialization() {
    let arg = parse("src=./here.json,type=schema(defaults=false)").unwrap();
    let json = serde_json::to_string_pretty(&arg).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "Source": {
        "value": "./here.json",
        "args": {}
      },
      "Type": {
        "value": "schema",
        "args": {
          "defaults": "false"
        }
      }
    }
    "#);
}

#[test]
fn arg_json_serialization_all_fields() {
    let arg = parse("auth=u:p,type=schema,jsonpath=.Secrets,src=-").unwrap();
    let json = serde_json::to_string(&arg).unwrap();

    insta::assert_snapshot!(json, @r#"{"Source":{"value":"-","args":{}},"JSONPath":{"value":".Secrets","args":{}},"Type":{"value":"schema","args":{}},"Auth":{"value":"u:p","args":{}}}"#);
}

#[test]
fn empty_arg_json_serialization() {
    let arg = parse("").unwrap();
    assert_eq!(serde_json::to_string(&arg).unwrap(), "{}");
}
