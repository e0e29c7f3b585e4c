//! Tests for the dotenv handler

use pretty_assertions::assert_eq;
use props_content::format::FormatHandler;
use props_content::handlers::DotenvHandler;
use props_content::ConfigMapping;
use rstest::rstest;

fn decode(source: &str) -> ConfigMapping {
    DotenvHandler::new().decode(source).unwrap()
}

#[test]
fn test_decode_basic_file() {
    let source = r#"
# MySQL credentials
MYSQL_USERNAME=john
  MYSQL_PASSWORD = s3cr3t
MYSQL_HOST="db.local"
MYSQL_DB='app'
"#;

    let decoded = decode(source);
    let pairs: Vec<(&str, &str)> = decoded
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("MYSQL_USERNAME", "john"),
            ("MYSQL_PASSWORD", "s3cr3t"),
            ("MYSQL_HOST", "db.local"),
            ("MYSQL_DB", "app"),
        ]
    );
}

#[rstest]
#[case(r#"A="line1\nline2""#, "line1\nline2")]
#[case(r#"A="tab\tsep""#, "tab\tsep")]
#[case(r#"A="say \"hi\"""#, "say \"hi\"")]
#[case(r#"A='it\'s'"#, "it's")]
#[case(r#"A="back\\slash""#, "back\\slash")]
#[case(r#"A="  padded  ""#, "  padded  ")]
#[case(r#"A="value" # trailing comment"#, "value")]
#[case("A=unquoted value   ", "unquoted value")]
#[case("A=", "")]
#[case("A=a=b=c", "a=b=c")]
#[case("A=${OTHER}/bin", "${OTHER}/bin")]
#[case("A=value # not stripped", "value # not stripped")]
fn test_decode_values(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(decode(source)["A"], expected);
}

#[test]
fn test_export_prefix() {
    let decoded = decode("export PATH_EXTRA=/opt/bin\nexport  QUIET=1\n");
    assert_eq!(decoded["PATH_EXTRA"], "/opt/bin");
    assert_eq!(decoded["QUIET"], "1");
}

#[test]
fn test_multiline_quoted_value() {
    let source = "KEY=\"-----BEGIN-----\nabc\n-----END-----\"\nNEXT=1\n";
    let decoded = decode(source);
    assert_eq!(decoded["KEY"], "-----BEGIN-----\nabc\n-----END-----");
    assert_eq!(decoded["NEXT"], "1");
}

#[test]
fn test_unterminated_quote_reads_line_verbatim() {
    let decoded = decode("A=1\nB=\"never closed\nC=3\n");
    assert_eq!(decoded["A"], "1");
    assert_eq!(decoded["B"], "\"never closed");
    assert_eq!(decoded["C"], "3");
}

#[rstest]
#[case("NAME='O'Brien'", "NAME", "O'Brien")]
#[case(r#"GREETING="say "hi"""#, "GREETING", "say \"hi\"")]
#[case(r#"A="value" # it's "fun""#, "A", "value")]
#[case(r#"A="x" junk"#, "A", "\"x\" junk")]
fn test_inner_quotes_use_outermost_pair(
    #[case] source: &str,
    #[case] key: &str,
    #[case] expected: &str,
) {
    assert_eq!(decode(source)[key], expected);
}

#[test]
fn test_stray_opening_quote_keeps_following_lines() {
    let decoded = decode("A=\"abc\nB=2\nC=\"x\"\n");
    let pairs: Vec<(&str, &str)> = decoded
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(pairs, vec![("A", "\"abc"), ("B", "2"), ("C", "x")]);
}

#[test]
fn test_duplicate_key_last_wins() {
    let decoded = decode("A=1\nB=2\nA=3\n");
    assert_eq!(decoded["A"], "3");
    assert_eq!(decoded.keys().next().map(String::as_str), Some("A"));
    assert_eq!(decoded.len(), 2);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let decoded = decode("no separator here\n=orphan\nGOOD=yes\n");
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded["GOOD"], "yes");
}

#[test]
fn test_crlf_line_endings() {
    let decoded = decode("A=1\r\nB=\"two\"\r\n");
    assert_eq!(decoded["A"], "1");
    assert_eq!(decoded["B"], "two");
}

#[test]
fn test_empty_input() {
    assert!(decode("").is_empty());
    assert!(decode("\n\n# only comments\n").is_empty());
}
