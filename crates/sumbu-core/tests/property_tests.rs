use sumbu_core::{
    filter_by_category, haversine_distance_km, rank_by_distance, Category, CategoryTag,
    Coordinates, Locale, Localized, PoiDb, PointOfInterest, SearchOptions,
};

const EPS: f64 = 1e-9;

fn sample_points() -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    for lat in [-89.5, -45.0, -7.8053, 0.0, 12.34, 60.0, 89.9] {
        for lng in [-179.9, -90.0, 0.0, 110.3671, 179.9] {
            out.push((lat, lng));
        }
    }
    out
}

fn poi(id: &str, category: Category, lat: f64, lng: f64, name: Localized<String>) -> PointOfInterest {
    PointOfInterest::new(id, category, Coordinates::new(lat, lng).unwrap(), name)
}

fn axis() -> Vec<PointOfInterest> {
    vec![
        poi("tugu", Category::Monument, -7.7826, 110.3671, "Tugu".into()),
        poi("keraton", Category::Heritage, -7.8053, 110.3643, Localized::from("Keraton").with_en("Palace".into())),
        poi("krapyak", Category::Heritage, -7.8255, 110.3592, "Panggung Krapyak".into()),
        poi("bakpia", Category::Umkm, -7.7940, 110.3580, "Bakpia Pathok".into()),
        poi("gudeg", Category::Culinary, -7.7841, 110.3733, "Gudeg Wijilan".into()),
        poi("beringharjo", Category::Market, -7.7986, 110.3654, "Pasar Beringharjo".into()),
    ]
}

#[test]
fn test_haversine_is_symmetric() {
    let pts = sample_points();
    for &(a_lat, a_lng) in &pts {
        for &(b_lat, b_lng) in &pts {
            let ab = haversine_distance_km(a_lat, a_lng, b_lat, b_lng);
            let ba = haversine_distance_km(b_lat, b_lng, a_lat, a_lng);
            assert!((ab - ba).abs() < EPS, "d(a,b)={ab} d(b,a)={ba}");
        }
    }
}

#[test]
fn test_haversine_zero_for_same_point() {
    for (lat, lng) in sample_points() {
        assert_eq!(haversine_distance_km(lat, lng, lat, lng), 0.0);
    }
}

#[test]
fn test_haversine_triangle_inequality() {
    let pts = sample_points();
    for &a in pts.iter().step_by(3) {
        for &b in pts.iter().step_by(2) {
            for &c in pts.iter().step_by(5) {
                let ab = haversine_distance_km(a.0, a.1, b.0, b.1);
                let bc = haversine_distance_km(b.0, b.1, c.0, c.1);
                let ac = haversine_distance_km(a.0, a.1, c.0, c.1);
                assert!(ac <= ab + bc + 1e-6, "{a:?} {b:?} {c:?}");
            }
        }
    }
}

#[test]
fn test_tugu_to_palace_distance() {
    let d = haversine_distance_km(-7.7826, 110.3671, -7.8053, 110.3643);
    assert!((d - 2.55).abs() < 0.1, "got {d}");
}

#[test]
fn test_filter_is_idempotent() {
    let pois = axis();
    let tag_sets = [
        vec![CategoryTag::Only(Category::Heritage)],
        vec![CategoryTag::Only(Category::Umkm), CategoryTag::Only(Category::Culinary)],
        vec![CategoryTag::All],
        vec![],
    ];
    for tags in tag_sets {
        let once = filter_by_category(&pois, &tags);
        let twice = filter_by_category(once.iter().copied(), &tags);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_all_dominates_other_tags() {
    let pois = axis();
    let all = filter_by_category(&pois, &[CategoryTag::All]);
    let mixed = filter_by_category(&pois, &[CategoryTag::All, CategoryTag::Only(Category::Heritage)]);
    assert_eq!(all, mixed);
    assert_eq!(all.len(), pois.len());
}

#[test]
fn test_filter_keeps_only_selected_category() {
    let pois = vec![
        poi("a", Category::Heritage, -7.8, 110.36, "A".into()),
        poi("b", Category::Umkm, -7.79, 110.35, "B".into()),
    ];
    let hits = filter_by_category(&pois, &[CategoryTag::Only(Category::Umkm)]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "b");
}

#[test]
fn test_ranking_is_monotonic_and_excludes_origin() {
    let pois = axis();
    for origin in &pois {
        let ranked = rank_by_distance(Some(origin.coordinates), &pois, Some(&origin.id), 100);
        assert_eq!(ranked.len(), pois.len() - 1);
        assert!(ranked.iter().all(|r| r.item.id != origin.id));
        assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    }
}

#[test]
fn test_ranking_two_point_scenario() {
    let a = poi("a", Category::Monument, -7.7826, 110.3671, "Tugu".into());
    let b = poi("b", Category::Heritage, -7.8053, 110.3643, "Palace".into());
    let both = [a.clone(), b];
    let ranked = rank_by_distance(Some(a.coordinates), &both, Some("a"), 10);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].item.id, "b");
    assert!((ranked[0].distance_km - 2.55).abs() < 0.1);
}

#[test]
fn test_ranking_limit_and_missing_origin() {
    let pois = axis();
    assert_eq!(rank_by_distance(Some(pois[0].coordinates), &pois, None, 2).len(), 2);
    assert!(rank_by_distance(Some(pois[0].coordinates), &pois, None, 0).is_empty());
    assert!(rank_by_distance(None, &pois, None, 10).is_empty());
    let none: Vec<PointOfInterest> = Vec::new();
    assert!(rank_by_distance(Some(pois[0].coordinates), &none, None, 10).is_empty());
}

#[test]
fn test_search_falls_back_to_primary_name() {
    let db = PoiDb::from_locations(axis());
    let hits = db.search("krapyak", Locale::En, &SearchOptions::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Panggung Krapyak");
    assert_eq!(hits[0].url, "/en/peta/panggung-krapyak");
}

#[test]
fn test_search_matches_only_named_record() {
    let db = PoiDb::from_locations(vec![
        poi("tugu", Category::Monument, -7.7826, 110.3671, "Tugu Yogyakarta".into()),
        poi("monjali", Category::Monument, -7.7496, 110.3697, "Monumen Jogja Kembali".into()),
    ]);
    let hits = db.search("tugu", Locale::Id, &SearchOptions::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "tugu");
}

#[test]
fn test_empty_query_guards() {
    let db = PoiDb::from_locations(axis());
    assert!(db.search("", Locale::Id, &SearchOptions::default()).is_empty());
    assert!(db.search("   ", Locale::En, &SearchOptions::default()).is_empty());
    assert!(db.suggest("a", Locale::Id, 5).is_empty());
    assert!(db.suggest("", Locale::Id, 5).is_empty());
}

#[test]
fn test_suggest_dedups_identical_titles() {
    let db = PoiDb::from_locations(vec![
        poi("t1", Category::Monument, -7.7826, 110.3671, "Tugu".into()),
        poi("t2", Category::Monument, -7.7827, 110.3672, "Tugu".into()),
        poi("t3", Category::Monument, -7.7828, 110.3673, "Tugu".into()),
        poi("t4", Category::Monument, -7.7829, 110.3674, "Tugu Pal Putih".into()),
    ]);
    assert_eq!(db.suggest("tu", Locale::Id, 5), ["Tugu", "Tugu Pal Putih"]);
}
