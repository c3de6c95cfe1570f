//! Moving between Rust types, Value trees, and text with serde.
//!
//! Run with: cargo run --example typed

use jsontree::{from_str, from_value, to_string, to_string_pretty, to_value};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
enum Role {
    Admin,
    Member { since: u16 },
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<Role>,
    email: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec![Role::Admin, Role::Member { since: 2019 }],
        email: None,
    };

    let text = to_string(&user)?;
    println!("compact: {}", text);
    println!("pretty:\n{}\n", to_string_pretty(&user)?);

    let back: User = from_str(&text)?;
    assert_eq!(back, user);

    // Edit through the dynamic tree, then convert back
    let mut value = to_value(&user)?;
    value.set_field("email", "alice@example.com");
    let edited: User = from_value(value)?;
    println!("edited email: {:?}", edited.email);

    Ok(())
}
