use patchpanel::parser::{join_fields, tokenize, trim_quotes, unquote};

#[test]
fn splits_on_whitespace_and_keeps_quoted_spans() {
    let tokens = tokenize(r#"1 "Server A" #07c uplink to core"#);
    assert_eq!(tokens, vec!["1", "\"Server A\"", "#07c", "uplink", "to", "core"]);
}

#[test]
fn collapses_runs_of_whitespace_and_tabs() {
    let tokens = tokenize("  7\t\tlabel   comment  \r");
    assert_eq!(tokens, vec!["7", "label", "comment"]);
}

#[test]
fn escaped_quote_does_not_close_span() {
    let tokens = tokenize(r#"2 "say \"hi\" there" x"#);
    assert_eq!(tokens, vec!["2", r#""say \"hi\" there""#, "x"]);
}

#[test]
fn unterminated_quote_falls_back_to_bare_token() {
    let tokens = tokenize(r#"3 "open label"#);
    assert_eq!(tokens, vec!["3", "\"open", "label"]);
}

#[test]
fn quoted_span_ends_token_at_closing_quote() {
    let tokens = tokenize(r#"4 "a b"c"#);
    assert_eq!(tokens, vec!["4", "\"a b\"", "c"]);
}

#[test]
fn quote_inside_bare_token_is_literal() {
    let tokens = tokenize(r#"5 ab"c d""#);
    assert_eq!(tokens, vec!["5", "ab\"c", "d\""]);
}

#[test]
fn empty_and_blank_lines_have_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t ").is_empty());
}

#[test]
fn handles_multibyte_text() {
    let tokens = tokenize("6 \"Büro Süd\" ünïcode");
    assert_eq!(tokens, vec!["6", "\"Büro Süd\"", "ünïcode"]);
}

#[test]
fn trim_quotes_strips_runs_of_both_kinds() {
    assert_eq!(trim_quotes(r#""'label'""#), "label");
    assert_eq!(trim_quotes("plain"), "plain");
    assert_eq!(trim_quotes(r#""""#), "");
}

#[test]
fn retokenizing_joined_fields_yields_same_values() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["1", "Server A", "#07c", "uplink"],
        vec!["2", "eth0"],
        vec!["3", "", "x"],
        vec!["4", "a \"quoted\" word", "tail\\slash"],
        vec!["5", "\"lead", "mid\"dle"],
        vec!["6", "\"x\"", "tab\tinside"],
    ];
    for fields in cases {
        let line = join_fields(&fields);
        let back: Vec<String> = tokenize(&line).into_iter().map(unquote).collect();
        assert_eq!(back, fields, "round trip of {:?} via {:?}", fields, line);
    }
}
