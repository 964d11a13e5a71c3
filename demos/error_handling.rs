//! Error handling example for sumbu-rs
//!
//! Construction errors are typed; queries never fail and return empty
//! results instead.

use sumbu_rs::prelude::*;
use sumbu_rs::parse_tags;

fn main() -> Result<()> {
    println!("=== Sumbu-RS Error Handling Example ===\n");

    println!("--- Example 1: Loading a dataset that does not exist ---");
    match PoiDb::load_from_path("does/not/exist.json") {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  Error: {e}"),
    }
    println!();

    println!("--- Example 2: Rejected records ---");
    let samples = [
        r#"{"locations":[{"id":"x","category":"volcano","lat":0,"lng":0,"name_id":"X"}]}"#,
        r#"{"locations":[{"id":"x","category":"park","lat":123,"lng":0,"name_id":"X"}]}"#,
        r#"{"umkm":[{"id":"u","category":"umkm","name_id":" "}]}"#,
    ];
    for json in samples {
        match PoiDb::from_json_str(json) {
            Ok(_) => println!("  accepted"),
            Err(e) => println!("  rejected: {e}"),
        }
    }
    println!();

    println!("--- Example 3: Parsing user input ---");
    for tag in ["en", "fr"] {
        match tag.parse::<Locale>() {
            Ok(locale) => println!("  locale {tag:?} -> {locale}"),
            Err(e) => println!("  {e}"),
        }
    }
    match parse_tags("heritage,castle") {
        Ok(tags) => println!("  tags: {tags:?}"),
        Err(e) => println!("  {e}"),
    }
    println!();

    let db = PoiDb::load()?;

    println!("--- Example 4: Queries degrade to empty results ---");
    println!("  blank search:       {:?}", db.search("   ", Locale::Id, &SearchOptions::default()));
    println!("  one-letter suggest: {:?}", db.suggest("k", Locale::Id, 5));
    println!("  unknown origin:     {} results", db.nearby("atlantis", 5).len());
    println!("  no geolocation:     {} results", db.nearest_to(None, 5).len());
    println!(
        "  missing field:      {:?}",
        resolve_field(db.locations().first().expect("dataset has locations"), "subtitle", Locale::En)
    );

    Ok(())
}
