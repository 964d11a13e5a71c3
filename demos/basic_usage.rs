//! Basic usage example for sumbu-rs
//!
//! Loads the bundled dataset, lists map locations, and looks one up.

use sumbu_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Sumbu-RS Basic Usage Example ===\n");

    let db = PoiDb::load()?;
    let stats = db.stats();
    println!("Loaded dataset:");
    println!("  Map locations: {}", stats.locations);
    println!("  Destinations:  {}", stats.destinations);
    println!("  Events:        {}", stats.events);
    println!("  UMKM:          {}", stats.businesses);
    println!("  Articles:      {}", stats.articles);
    println!();

    println!("--- Map locations (Indonesian) ---");
    for poi in db.locations().iter().take(5) {
        println!(
            "  {:<18} {:<10} {}",
            poi.id,
            poi.category.tag(),
            resolve_field(poi, "name", Locale::Id)
        );
    }
    println!();

    println!("--- One location in both locales ---");
    if let Some(keraton) = db.select("keraton") {
        for locale in Locale::ALL {
            println!("  [{locale}] {}", resolve_field(keraton, "name", locale));
            println!("       {}", resolve_field(keraton, "description", locale));
            let facilities = resolve_array_field(keraton, "facilities", locale);
            if !facilities.is_empty() {
                println!("       {}", facilities.join(", "));
            }
        }
    }
    println!();

    println!("--- Distance along the axis ---");
    if let (Some(tugu), Some(krapyak)) = (db.select("tugu"), db.select("panggung-krapyak")) {
        let km = tugu.coordinates.distance_to(&krapyak.coordinates);
        println!("  Tugu -> Panggung Krapyak: {}", sumbu_rs::format_distance(km));
    }

    Ok(())
}
