use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_matches_token_dump_format() {
    let tok = Token::new(7, "foo", 3, 4, 12);
    assert_eq!(tok.to_string(), "[@12,'foo',<7>,3:4]");
}

#[test]
fn display_escapes_whitespace() {
    let tok = Token::new(2, "a\n\tb", 1, 0, 0);
    assert_eq!(tok.to_string(), "[@0,'a\\n\\tb',<2>,1:0]");
}

