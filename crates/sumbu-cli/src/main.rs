//! sumbu: command-line interface for sumbu-core
//!
//! Inspect and query the Sumbu Filosofi dataset from your terminal: list
//! map locations by category, rank them by distance, and run the bilingual
//! search used by the website.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ sumbu stats
//!
//! - Heritage and UMKM locations, in English
//!   $ sumbu --locale en filter --category heritage,umkm
//!
//! - Five nearest locations to the Tugu, or to a coordinate
//!   $ sumbu nearby --from tugu
//!   $ sumbu nearby --lat -7.8053 --lng 110.3643 --category culinary
//!
//! - Search all content, or only articles
//!   $ sumbu search keraton
//!   $ sumbu search tugu --type article --json
//!
//! Configuration
//! -------------
//!
//! Defaults come from `sumbu.toml` in the working directory and `SUMBU_*`
//! environment variables; command-line flags override both. Logs go to
//! stderr and are controlled by `RUST_LOG` or `-v`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use sumbu_core::api::{CategoryView, MapViewJson, PoiView};
use sumbu_core::prelude::*;
use sumbu_core::{format_distance, parse_tags, SearchType};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose)?;

    let config = EngineConfig::load().context("failed to read configuration")?;
    let locale = match &args.locale {
        Some(tag) => tag.parse::<Locale>()?,
        None => config.locale,
    };

    // --input wins over the configured dataset; neither means bundled data.
    let input = args.input.clone().map(Into::into).or(config.dataset.clone());
    let db = match &input {
        Some(path) => PoiDb::load_from_path(path)
            .with_context(|| format!("failed to load dataset {}", path.display()))?,
        None => PoiDb::load()?,
    };
    debug!(%locale, input = ?input, "dataset ready");

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            if args.json {
                return print_json(&stats);
            }
            println!("Dataset statistics:");
            println!("  Map locations: {}", stats.locations);
            println!("  Destinations: {}", stats.destinations);
            println!("  Events: {}", stats.events);
            println!("  UMKM: {}", stats.businesses);
            println!("  Articles: {}", stats.articles);
        }

        Commands::Categories => {
            let views: Vec<_> = db
                .category_counts()
                .into_iter()
                .map(|(c, n)| CategoryView::new(c, n, locale))
                .collect();
            if args.json {
                return print_json(&views);
            }
            for v in views {
                println!("{:<10} {:<16} {:>3}", v.tag, v.label, v.count);
            }
        }

        Commands::Show { code } => match db.select(&code) {
            Some(poi) => {
                let view = PoiView::new(poi, locale);
                if args.json {
                    return print_json(&view);
                }
                println!("{}", view.name);
                println!("Category: {} ({})", view.category_label, view.category);
                println!("Coordinates: {}", poi.coordinates);
                if let Some(district) = view.district {
                    println!("District: {district}");
                }
                if !view.address.is_empty() {
                    println!("Address: {}", view.address);
                }
                if let Some(hours) = view.opening_hours {
                    println!("Opening hours: {hours}");
                }
                if let Some(fee) = view.entry_fee {
                    println!("Entry fee: Rp {} / Rp {}", fee.local, fee.foreign);
                }
                if !view.facilities.is_empty() {
                    println!("Facilities: {}", view.facilities.join(", "));
                }
                if !view.products.is_empty() {
                    println!("Products: {}", view.products.join(", "));
                }
                println!();
                println!("{}", view.description);
            }
            None => bail!("no location found for: {code}"),
        },

        Commands::Filter {
            category,
            query,
            limit,
        } => {
            let mut map_query = MapQuery::new(parse_tags(&category)?);
            if let Some(q) = query {
                map_query = map_query.text(q, limit.unwrap_or(config.search_limit));
            }
            let view = db.query(&map_query, locale);
            let mut pois = view.pois();
            if let Some(n) = limit {
                pois.truncate(n);
            }
            if args.json {
                let views: Vec<_> = pois.iter().map(|p| PoiView::new(p, locale)).collect();
                return print_json(&views);
            }
            if pois.is_empty() {
                println!("No locations match.");
            }
            for poi in pois {
                println!(
                    "{:<20} {:<10} {}",
                    poi.id,
                    poi.category.tag(),
                    resolve_field(poi, "name", locale)
                );
            }
        }

        Commands::Nearby {
            from,
            lat,
            lng,
            category,
            limit,
        } => {
            let origin = match (from, lat, lng) {
                (Some(code), _, _) => Origin::Place(code),
                (None, Some(lat), Some(lng)) => Origin::Point(Coordinates::new(lat, lng)?),
                _ => bail!("either --from or both --lat and --lng are required"),
            };
            if let Origin::Place(code) = &origin {
                if db.select(code).is_none() {
                    bail!("no location found for: {code}");
                }
            }
            let map_query = MapQuery::new(parse_tags(&category)?)
                .nearby(Some(origin), limit.unwrap_or(config.nearby_limit));
            let view = db.query(&map_query, locale);

            if args.json {
                return print_json(&MapViewJson::new(&view, locale));
            }
            if let MapView::Nearby(ranked) = view {
                if ranked.is_empty() {
                    println!("No locations nearby.");
                }
                for r in ranked {
                    println!(
                        "{:>8}  {:<20} {}",
                        format_distance(r.distance_km),
                        r.item.id,
                        resolve_field(r.item, "name", locale)
                    );
                }
            }
        }

        Commands::Search {
            query,
            types,
            limit,
        } => {
            let mut opts = config.search_options();
            if let Some(types) = types {
                let kinds = types
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::parse::<SearchType>)
                    .collect::<Result<Vec<_>>>()?;
                opts = opts.with_types(kinds);
            }
            if let Some(n) = limit {
                opts = opts.with_limit(n);
            }

            let hits = db.search(&query, locale, &opts);
            if args.json {
                return print_json(&hits);
            }
            if hits.is_empty() {
                println!("No results for: {query}");
            }
            for hit in hits {
                println!("[{}] {}  {}", hit.kind, hit.title, hit.url);
                if !hit.excerpt.is_empty() {
                    println!("    {}", hit.excerpt);
                }
            }
        }

        Commands::Suggest { query, limit } => {
            let titles = db.suggest(&query, locale, limit.unwrap_or(config.suggest_limit));
            if args.json {
                return print_json(&titles);
            }
            for t in titles {
                println!("{t}");
            }
        }

        Commands::Distance {
            lat1,
            lng1,
            lat2,
            lng2,
        } => {
            let a = Coordinates::new(lat1, lng1)?;
            let b = Coordinates::new(lat2, lng2)?;
            let km = a.distance_to(&b);
            if args.json {
                return print_json(&serde_json::json!({
                    "distance_km": km,
                    "distance": format_distance(km),
                }));
            }
            println!("{}", format_distance(km));
        }
    }

    Ok(())
}
