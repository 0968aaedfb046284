use crate::parse::{LogEntry, ParseError, parse_line};
use chrono::DateTime;
use pretty_assertions::assert_eq;

#[test]
fn parses_single_segment_request() {
    // Act
    let entry =
        parse_line(r#"127.0.0.1 - james [09/May/2018:16:00:39 +0000] "GET /report HTTP/1.0" 200 123"#)
            .unwrap();

    // Assert
    assert_eq!(entry.remote, "127.0.0.1");
    assert_eq!(entry.user, "james");
    assert_eq!(
        entry.timestamp,
        DateTime::parse_from_rfc3339("2018-05-09T16:00:39+00:00").unwrap()
    );
    assert_eq!(entry.request.verb, "GET");
    assert_eq!(entry.request.path, "report");
    assert_eq!(entry.request.page, None);
    assert_eq!(entry.status, 200);
    assert_eq!(entry.bytes, 123);
}

#[test]
fn splits_section_from_page() {
    // Act
    let entry =
        parse_line(r#"127.0.0.1 - jill [09/May/2018:16:00:41 +0000] "GET /api/user HTTP/1.0" 200 234"#)
            .unwrap();

    // Assert
    assert_eq!(entry.user, "jill");
    assert_eq!(entry.request.path, "api");
    assert_eq!(entry.request.page.as_deref(), Some("user"));
    assert_eq!(entry.bytes, 234);
}

#[test]
fn keeps_nested_page_remainder() {
    // Act
    let entry =
        parse_line(r#"10.0.0.2 - - [09/May/2018:16:00:41 +0000] "DELETE /api/post/2/comments HTTP/1.1" 404 0"#)
            .unwrap();

    // Assert
    assert_eq!(entry.request.verb, "DELETE");
    assert_eq!(entry.request.path, "api");
    assert_eq!(entry.request.page.as_deref(), Some("post/2/comments"));
    assert_eq!(entry.status, 404);
    assert!(entry.is_error());
}

#[test]
fn accepts_referrer_and_user_agent() {
    // Act
    let entry = parse_line(
        r#"192.32.52.119 - - [05/Feb/2019:22:31:11 -0500] "PUT /list HTTP/1.0" 303 5039 "http://english.com/home/" "Mozilla/5.0 (Windows; U; Windows CE) AppleWebKit/535.13.3 (KHTML, like Gecko) Version/5.0 Safari/535.13.3""#,
    )
    .unwrap();

    // Assert
    assert_eq!(entry.remote, "192.32.52.119");
    assert_eq!(entry.user, "-");
    assert_eq!(
        entry.timestamp,
        DateTime::parse_from_rfc3339("2019-02-05T22:31:11-05:00").unwrap()
    );
    assert_eq!(entry.request.verb, "PUT");
    assert_eq!(entry.request.path, "list");
    assert_eq!(entry.status, 303);
    assert_eq!(entry.bytes, 5039);
    assert!(!entry.is_error());
}

#[test]
fn preserves_original_request() {
    // Act
    let entry: LogEntry =
        r#"127.0.0.1 - frank [09/May/2018:16:00:42 +0000] "POST /api/user HTTP/1.0" 200 34"#
            .parse()
            .unwrap();

    // Assert
    assert_eq!(entry.request.original, "POST /api/user HTTP/1.0");
}

#[test]
fn rejects_lines_outside_the_grammar() {
    let bad = [
        "",
        "Line Zero",
        r#"127.0.0.1 - james [09/May/2018:16:00:39 +0000] "GET / HTTP/1.0" 200 123"#,
        r#"127.0.0.1 - james [09/May/2018:16:00:39 +0000] "GET /report HTTP/1.0" 200"#,
        r#"127.0.0.1 - james [09/May/2018:16:00:39 +0000] "GET /report HTTP/1.0" -1 123"#,
        r#"127.0.0.1 - james [09/May/2018:16:00:39 +0000] "GET /report HTTP/1.0" 200 12x"#,
        r#"127.0.0.1 - james 09/May/2018:16:00:39 +0000 "GET /report HTTP/1.0" 200 123"#,
    ];

    for line in bad {
        let err = parse_line(line).unwrap_err();
        assert!(matches!(err, ParseError::Format { .. }), "{line}");
        assert_eq!(err.line(), line);
    }
}

#[test]
fn rejects_malformed_timestamp() {
    // Arrange
    let line = r#"127.0.0.1 - james [31/Foo/2018:16:00:39 +0000] "GET /report HTTP/1.0" 200 123"#;

    // Act
    let err = parse_line(line).unwrap_err();

    // Assert
    assert!(matches!(err, ParseError::Timestamp { .. }));
    assert_eq!(err.line(), line);
    assert!(err.to_string().contains("31/Foo/2018:16:00:39 +0000"));
}

#[test]
fn rejects_status_that_overflows() {
    // Arrange
    let line = r#"127.0.0.1 - james [09/May/2018:16:00:39 +0000] "GET /report HTTP/1.0" 99999 123"#;

    // Act
    let err = parse_line(line).unwrap_err();

    // Assert
    assert!(matches!(err, ParseError::Number { field: "status", .. }));
}
