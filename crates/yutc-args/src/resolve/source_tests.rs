use super::{ResolveError, SourceKind, clean_path};

#[test]
fn classify_sources() {
    assert_eq!(SourceKind::classify("-"), Ok(SourceKind::Stdin));
    assert_eq!(SourceKind::classify("./a.yaml"), Ok(SourceKind::File));
    assert_eq!(SourceKind::classify("C:/data/a.yaml"), Ok(SourceKind::File));
    assert_eq!(
        SourceKind::classify("https://example.com/data.yaml"),
        Ok(SourceKind::Url)
    );
    assert_eq!(
        SourceKind::classify("http://example.com/data.yaml"),
        Ok(SourceKind::Url)
    );
}

#[test]
fn unsupported_scheme() {
    let err = SourceKind::classify("ftp://example.com/a.yaml").unwrap_err();

    assert_eq!(
        err,
        ResolveError::UnsupportedSource("ftp://example.com/a.yaml".to_owned())
    );
    insta::assert_snapshot!(err, @"unsupported scheme/source for input: ftp://example.com/a.yaml");
}

#[test]
fn clean_relative_paths() {
    assert_eq!(clean_path("./my_file.yaml"), "my_file.yaml");
    assert_eq!(clean_path("a//b/./c"), "a/b/c");
    assert_eq!(clean_path("a/b/../c/"), "a/c");
    assert_eq!(clean_path("../a/../../b"), "../../b");
    assert_eq!(clean_path("a/.."), ".");
    assert_eq!(clean_path(""), ".");
    assert_eq!(clean_path("."), ".");
}

#[test]
fn clean_rooted_paths() {
    assert_eq!(clean_path("/"), "/");
    assert_eq!(clean_path("/../a"), "/a");
    assert_eq!(clean_path("//etc//yutc/./cfg.yaml"), "/etc/yutc/cfg.yaml");
}
