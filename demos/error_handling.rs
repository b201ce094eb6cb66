//! Example demonstrating comprehensive error handling.
//!
//! This example shows how to:
//! - Handle the different error variants
//! - Distinguish validation errors (no network call) from transport errors
//! - Inspect HTTP status codes on errors
//!
//! Run with: `cargo run --example error_handling`

use pokeapi_sdk::{Error, PokeApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("pokeapi_sdk=info")
        .init();

    let api = PokeApi::new()?;

    println!("=== Example 1: Resource not found ===");
    match api.get_pokemon("definitely-not-a-pokemon").await {
        Ok(pokemon) => println!("Unexpected success: {}", pokemon.name),
        Err(Error::NotFound) => {
            println!("Not found!");
            println!("  Message: {}", Error::NotFound);
        }
        Err(e) => println!("Other error: {e}"),
    }
    println!();

    println!("=== Example 2: Validation before any network call ===");
    match api.get_pokemon(-1).await {
        Ok(_) => println!("Unexpected success"),
        Err(e) => {
            println!("Rejected locally: {e}");
            println!("  Validation error: {}", e.is_validation());
            println!("  HTTP status: {:?}", e.status());
        }
    }
    println!();

    println!("=== Example 3: Matching on variants ===");
    match api.get_generation(1).await {
        Ok(generation) => {
            println!(
                "{} has {} version groups",
                generation.name,
                generation.version_groups.len()
            );
        }
        Err(Error::Timeout) => println!("Request timed out"),
        Err(Error::Connect(e)) => println!("Failed to connect: {e}"),
        Err(Error::Server { status }) => println!("Server error: {status}"),
        Err(Error::Schema { resource, source }) => {
            println!("{resource} response shape mismatch: {source}");
        }
        Err(e) => println!("Other error: {e}"),
    }

    Ok(())
}
