//! Builds the TinyLlama training config and prints the handoff record.
//!
//! Run with: `cargo run --example tinyllama`

use std::collections::HashMap;

use anyhow::Result;
use pmll_config::build_training_config;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut memory_silos = HashMap::new();
    memory_silos.insert("silo1".to_string(), "path/to/silo1".to_string());
    memory_silos.insert("silo2".to_string(), "path/to/silo2".to_string());

    let config = build_training_config(
        "TinyLlama".to_string(),
        0.001,
        32,
        10,
        memory_silos,
        "my_secure_key".to_string(),
    );

    config.validate()?;

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
