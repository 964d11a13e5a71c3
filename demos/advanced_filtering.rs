//! Filtering and ranking example for sumbu-rs
//!
//! Combines the category filter with proximity ranking and text search,
//! the way the interactive map does.

use sumbu_rs::prelude::*;
use sumbu_rs::{format_distance, parse_tags, SearchType};

fn main() -> Result<()> {
    println!("=== Sumbu-RS Filtering Example ===\n");
    let db = PoiDb::load()?;

    println!("--- Category legend ---");
    for (category, count) in db.category_counts() {
        let meta = category.meta();
        println!("  {:<10} {:<16} {} {count}", category.tag(), meta.label(Locale::En), meta.color);
    }
    println!();

    println!("--- Heritage + museum ---");
    let tags = parse_tags("heritage,museum")?;
    for poi in filter_by_category(db.locations(), &tags) {
        println!("  {}", resolve_field(poi, "name", Locale::En));
    }
    println!();

    println!("--- Nearest culinary and UMKM spots to the Tugu ---");
    let query = MapQuery::new(parse_tags("culinary,umkm")?)
        .nearby(Some(Origin::Place("tugu".into())), 3);
    if let MapView::Nearby(ranked) = db.query(&query, Locale::Id) {
        for r in ranked {
            println!(
                "  {:>8}  {}",
                format_distance(r.distance_km),
                resolve_field(r.item, "name", Locale::Id)
            );
        }
    }
    println!();

    println!("--- Nearest anything to a visitor at Alun-alun Selatan ---");
    let here = Coordinates::new(-7.8117, 110.3633)?;
    for r in db.nearest_to(Some(here), 3) {
        println!("  {:>8}  {}", r.display_distance(), r.item.id);
    }
    println!();

    println!("--- Site search: \"keraton\" (English) ---");
    for hit in db.search("keraton", Locale::En, &SearchOptions::default()) {
        println!("  [{}] {} -> {}", hit.kind, hit.title, hit.url);
    }
    println!();

    println!("--- Articles only ---");
    let opts = SearchOptions::default().with_types(vec![SearchType::Article]);
    for hit in db.search("tugu", Locale::Id, &opts) {
        println!("  {}: {}", hit.title, hit.excerpt);
    }
    println!();

    println!("--- Suggestions for \"ta\" ---");
    for title in db.suggest("ta", Locale::Id, 5) {
        println!("  {title}");
    }

    Ok(())
}
