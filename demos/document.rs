//! Building, reading, and printing a document tree.
//!
//! Run with: cargo run --example document

use jsontree::{json, parse, stringify, stringify_pretty, StringifyOptions, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Parse a config and read it back through checked accessors
    let config = parse(
        r#"{
            "host": "localhost",
            "port": 8080,
            "features": ["auth", "logging"],
            "debug": true
        }"#,
    )?;

    println!("host:  {}", config["host"].as_string()?);
    println!("port:  {}", config["port"].as_int()?);
    println!("debug: {}", config["debug"].as_boolean()?);
    println!("features: {} items", config["features"].len().unwrap_or(0));

    // Missing members read as null, wrong types are errors
    println!("timeout is null: {}", config["timeout"].is_null());
    if let Err(err) = config["port"].as_string() {
        println!("as_string on port: {}\n", err);
    }

    // Grow a document in place
    let mut report = Value::Null;
    report.set_field("service", "api");
    report.field_mut("latency_ms").push(12.5);
    report.field_mut("latency_ms").push(9);
    report.field_mut("errors").set_element(2, json!({"code": 503}));

    println!("compact:\n{}\n", stringify(&report, &StringifyOptions::new()));
    println!("pretty:\n{}\n", stringify_pretty(&report));
    println!(
        "indent 4:\n{}",
        stringify(&report, &StringifyOptions::pretty().with_indent(4))
    );

    // Errors point at the offending character
    if let Err(err) = parse("{\"a\": [1, 2,]}") {
        println!("\n{}", err);
    }

    Ok(())
}
