//! Basic example demonstrating entity and list fetches.
//!
//! This example shows how to:
//! - Create the SDK facade
//! - Fetch a single pokemon by id and by name
//! - Page through a collection
//! - Fetch a generation
//!
//! Run with: `cargo run --example fetch_pokemon`

use pokeapi_sdk::{Error, Page, PokeApi};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("pokeapi_sdk=debug,fetch_pokemon=info")
        .init();

    let api = PokeApi::new()?;

    println!("=== Fetch by id ===");
    let bulbasaur = api.get_pokemon(1).await?;
    println!("#{} {}", bulbasaur.id, bulbasaur.name);
    println!("height: {}, weight: {}", bulbasaur.height, bulbasaur.weight);
    for t in &bulbasaur.types {
        println!("type slot {}: {}", t.slot, t.r#type.name);
    }
    println!();

    println!("=== Fetch by name ===");
    let pikachu = api.get_pokemon("pikachu").await?;
    println!("#{} {}", pikachu.id, pikachu.name);
    for ability in &pikachu.abilities {
        if let Some(ability_ref) = &ability.ability {
            let hidden = if ability.is_hidden { " (hidden)" } else { "" };
            println!("ability: {}{}", ability_ref.name, hidden);
        }
    }
    println!();

    println!("=== Paginated listing ===");
    let page = api.list_pokemon(Page::new(5, 0)).await?;
    println!("{} pokemon total; first page:", page.count);
    for entry in &page.results {
        println!("  {} -> {}", entry.name, entry.url);
    }
    println!();

    println!("=== Generations ===");
    let gen1 = api.get_generation("generation-i").await?;
    println!(
        "{} introduced {} species in {}",
        gen1.name,
        gen1.pokemon_species.len(),
        gen1.main_region.name
    );

    Ok(())
}
