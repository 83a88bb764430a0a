//! Basic usage example for argguard
//!
//! Run with `RUST_LOG=argguard=trace` to see validator dispatch.

use argguard::prelude::*;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

fn register(args: &Arguments) -> String {
    let name = args.get(0).and_then(Value::as_str).unwrap_or_default();
    format!("registered {name}")
}

fn main() -> Result<(), SignatureError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // fn register(username: no_whitespaces(non_blank(str)), *, age: non_negative(int) = 0)
    let signature = Signature::builder()
        .positional("username", no_whitespaces().of(non_blank().of(TypeTag::String)))
        .keyword_only_with_default("age", non_negative().of(TypeTag::Integer), 0)
        .build()?;
    let guarded = validate_parameters(signature, register);

    let calls = [
        arguments!["ada"],
        arguments!["ada"; age = 36],
        arguments!["ada lovelace"],
        arguments!["   "],
        arguments!["ada"; age = -1],
        arguments![42],
    ];

    for args in &calls {
        match guarded.call(args) {
            Ok(message) => println!("✓ {message}"),
            Err(e) => println!("✗ [{}] {e}", e.code()),
        }
    }

    // Trusted call sites can skip validation entirely.
    println!("skipped: {}", guarded.skip_validations()(&arguments!["   "]));

    Ok(())
}
