//! Parser conformance: documents that must parse, documents that must not,
//! and the error category each rejection falls into.

use jsontree::{json, parse, parse_slice, ErrorKind, Value};

fn kind_of(text: &str) -> ErrorKind {
    match parse(text) {
        Ok(value) => panic!("expected {:?} to be rejected, got {:?}", text, value),
        Err(err) => err.kind(),
    }
}

#[test]
fn test_accepts_every_value_kind_at_top_level() {
    assert_eq!(parse("null").unwrap(), Value::Null);
    assert_eq!(parse("false").unwrap(), json!(false));
    assert_eq!(parse("-12.5e-1").unwrap(), json!(-1.25));
    assert_eq!(parse(r#""s""#).unwrap(), json!("s"));
    assert_eq!(parse("[]").unwrap(), json!([]));
    assert_eq!(parse("{}").unwrap(), json!({}));
}

#[test]
fn test_accepts_nested_mixed_document() {
    let text = r#"
        {
            "glossary": {
                "title": "example glossary",
                "entries": [
                    {"id": "SGML", "refs": ["GML", "XML"], "weight": 0.75},
                    {"id": "XML", "refs": [], "weight": 1e0, "draft": null}
                ]
            }
        }
    "#;
    let value = parse(text).unwrap();
    let entries = value["glossary"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["refs"][1].as_string().unwrap(), "XML");
    assert_eq!(entries[1]["weight"].as_int().unwrap(), 1);
    assert!(entries[1]["draft"].is_null());
}

#[test]
fn test_syntax_errors() {
    let cases = [
        "nul",
        "True",
        "01",
        "-",
        "1.",
        ".1",
        "1e",
        "+1",
        "0x10",
        "[1,]",
        "[1 2]",
        "{\"a\":1,}",
        "{\"a\" 1}",
        "{'a':1}",
        "{a:1}",
        "{\"a\":1,{\"b\":2}}",
        "\"bad \\q escape\"",
        "\"\\u12x4\"",
        "\"\\udc00\"",
        "[1] 2",
        "/* comment */ 1",
        "1e400",
        "-1e400",
        "NaN",
        "Infinity",
    ];
    for text in cases {
        let kind = kind_of(text);
        assert!(
            kind == ErrorKind::Syntax || kind == ErrorKind::UnexpectedEof,
            "{:?} gave {:?}",
            text,
            kind
        );
    }
}

#[test]
fn test_end_of_input_errors() {
    for text in ["", " ", "[", "[1,", "{", "{\"a\"", "{\"a\":", "\"open", "\"\\u00"] {
        assert_eq!(kind_of(text), ErrorKind::UnexpectedEof, "{:?}", text);
    }
}

#[test]
fn test_raw_control_characters_in_strings_are_kept() {
    let value = parse("\"tab\there\"").unwrap();
    assert_eq!(value.as_string().unwrap(), "tab\there");
}

#[test]
fn test_surrogate_pairs() {
    let value = parse(r#""\uD834\uDD1E""#).unwrap();
    assert_eq!(value.as_string().unwrap(), "\u{1D11E}");
    assert_eq!(value.as_string().unwrap().len(), 4);

    assert_eq!(kind_of(r#""\uD834""#), ErrorKind::Syntax);
    assert_eq!(kind_of(r#""\uD834\u0041""#), ErrorKind::Syntax);
}

#[test]
fn test_large_and_small_numbers() {
    assert_eq!(parse("1.7976931348623157e308").unwrap(), json!(f64::MAX));
    assert_eq!(parse("5e-324").unwrap(), json!(5e-324));
    assert_eq!(parse("1e-400").unwrap(), json!(0.0));
    assert_eq!(
        parse("-9007199254740993").unwrap().as_i64().unwrap(),
        -9007199254740992
    );
}

#[test]
fn test_parse_slice() {
    assert_eq!(parse_slice(b"{\"a\":[1]}").unwrap(), json!({"a": [1]}));

    let err = parse_slice(b"\"ok\xF0\x28\"").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.position(), Some((1, 4)));
}

#[test]
fn test_from_str_trait() {
    let value: Value = "[true, {\"x\": 2}]".parse().unwrap();
    assert_eq!(value, json!([true, {"x": 2}]));
    assert!("[".parse::<Value>().is_err());
}
