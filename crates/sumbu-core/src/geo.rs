// crates/sumbu-core/src/geo.rs

//! # Proximity Ranker
//!
//! Great-circle distances (haversine, spherical Earth) and nearest-first
//! ranking of located records.

use crate::error::{Result, SumbuError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate pair in signed decimal degrees.
///
/// Only constructed through [`Coordinates::new`]; deserializing runs the
/// same range check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LatLng")]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl TryFrom<LatLng> for Coordinates {
    type Error = SumbuError;

    fn try_from(p: LatLng) -> Result<Self> {
        Coordinates::new(p.lat, p.lng)
    }
}

impl Coordinates {
    /// Validates and builds a coordinate pair.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if valid {
            Ok(Coordinates { lat, lng })
        } else {
            Err(SumbuError::InvalidCoordinates { lat, lng })
        }
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to `other` in kilometers.
    #[inline]
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        haversine_distance_km(self.lat, self.lng, other.lat, other.lng)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Calculates the great-circle distance between two points using the
/// haversine formula.
///
/// Inputs are in degrees, output in kilometers (Earth radius 6371 km).
///
/// # Examples
///
/// ```
/// use sumbu_core::geo::haversine_distance_km;
///
/// // Tugu Yogyakarta -> Keraton
/// let d = haversine_distance_km(-7.7826, 110.3671, -7.8053, 110.3643);
/// assert!((d - 2.55).abs() < 0.1);
/// ```
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Formats a distance for display: whole meters below 1 km, otherwise
/// kilometers with one decimal.
///
/// ```
/// use sumbu_core::geo::format_distance;
///
/// assert_eq!(format_distance(0.4216), "422 m");
/// assert_eq!(format_distance(2.5449), "2.5 km");
/// ```
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as u64)
    } else {
        format!("{km:.1} km")
    }
}

/// Records that may carry a position.
pub trait Located {
    fn location_id(&self) -> &str;
    fn coordinates(&self) -> Option<Coordinates>;
}

/// A record paired with its distance from a query origin.
#[derive(Debug)]
pub struct Ranked<'a, T> {
    pub item: &'a T,
    pub distance_km: f64,
}

impl<T> Clone for Ranked<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Ranked<'_, T> {}

impl<T> Ranked<'_, T> {
    pub fn display_distance(&self) -> String {
        format_distance(self.distance_km)
    }
}

/// Orders `candidates` nearest-first from `origin`, keeping at most `limit`.
///
/// - The record whose id equals `exclude_id` is skipped, so a place is never
///   its own neighbor.
/// - Records without coordinates are skipped.
/// - Equal distances keep input order (stable sort).
/// - A `None` origin or an empty candidate set yields an empty list.
pub fn rank_by_distance<'a, T, I>(
    origin: Option<Coordinates>,
    candidates: I,
    exclude_id: Option<&str>,
    limit: usize,
) -> Vec<Ranked<'a, T>>
where
    T: Located + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let Some(origin) = origin else {
        return Vec::new();
    };

    let mut out: Vec<Ranked<'a, T>> = candidates
        .into_iter()
        .filter(|c| exclude_id != Some(c.location_id()))
        .filter_map(|c| {
            c.coordinates().map(|p| Ranked {
                item: c,
                distance_km: origin.distance_to(&p),
            })
        })
        .collect();

    out.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    out.truncate(limit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Spot(&'static str, Option<Coordinates>);

    impl Located for Spot {
        fn location_id(&self) -> &str {
            self.0
        }
        fn coordinates(&self) -> Option<Coordinates> {
            self.1
        }
    }

    fn at(lat: f64, lng: f64) -> Option<Coordinates> {
        Some(Coordinates::new(lat, lng).unwrap())
    }

    const SAMPLES: [(f64, f64); 6] = [
        (-7.7826, 110.3671),
        (-7.8053, 110.3643),
        (-7.8255, 110.3592),
        (-7.7496, 110.3697),
        (52.52, 13.405),
        (-33.8688, 151.2093),
    ];

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(90.1, 0.0).is_err());
        assert!(Coordinates::new(0.0, -180.5).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn deserializing_checks_range() {
        let ok: Coordinates = serde_json::from_str(r#"{"lat":-7.8053,"lng":110.3643}"#).unwrap();
        assert_eq!((ok.lat(), ok.lng()), (-7.8053, 110.3643));

        let err = serde_json::from_str::<Coordinates>(r#"{"lat":500.0,"lng":-999.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid coordinates"), "{err}");
    }

    #[test]
    fn tugu_to_keraton() {
        let d = haversine_distance_km(-7.7826, 110.3671, -7.8053, 110.3643);
        assert!((d - 2.55).abs() < 0.1, "got {d}");
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_identity() {
        for &(la, loa) in &SAMPLES {
            assert_eq!(haversine_distance_km(la, loa, la, loa), 0.0);
            for &(lb, lob) in &SAMPLES {
                let ab = haversine_distance_km(la, loa, lb, lob);
                let ba = haversine_distance_km(lb, lob, la, loa);
                assert!((ab - ba).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn distance_obeys_triangle_inequality() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                for &c in &SAMPLES {
                    let ac = haversine_distance_km(a.0, a.1, c.0, c.1);
                    let ab = haversine_distance_km(a.0, a.1, b.0, b.1);
                    let bc = haversine_distance_km(b.0, b.1, c.0, c.1);
                    assert!(ac <= ab + bc + 1e-6);
                }
            }
        }
    }

    #[test]
    fn ranks_nearest_first_and_excludes_origin() {
        let spots = [
            Spot("tugu", at(-7.7826, 110.3671)),
            Spot("krapyak", at(-7.8255, 110.3592)),
            Spot("keraton", at(-7.8053, 110.3643)),
            Spot("monjali", at(-7.7496, 110.3697)),
        ];
        let origin = spots[0].coordinates();
        let ranked = rank_by_distance(origin, &spots, Some("tugu"), 10);

        let names: Vec<_> = ranked.iter().map(|r| r.item.0).collect();
        assert_eq!(names, ["keraton", "monjali", "krapyak"]);
        assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
        assert!((ranked[0].distance_km - 2.55).abs() < 0.1);
    }

    #[test]
    fn ties_keep_input_order_and_limit_truncates() {
        let spots = [
            Spot("b", at(-7.80, 110.37)),
            Spot("a", at(-7.80, 110.37)),
            Spot("far", at(-7.90, 110.37)),
        ];
        let ranked = rank_by_distance(at(-7.80, 110.36), &spots, None, 2);
        let names: Vec<_> = ranked.iter().map(|r| r.item.0).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn missing_origin_or_candidates_yield_nothing() {
        let spots = [Spot("tugu", at(-7.7826, 110.3671))];
        assert!(rank_by_distance(None, &spots, None, 5).is_empty());
        let none: [Spot; 0] = [];
        assert!(rank_by_distance(at(0.0, 0.0), &none, None, 5).is_empty());
    }

    #[test]
    fn unpositioned_records_are_skipped() {
        let spots = [Spot("nowhere", None), Spot("tugu", at(-7.7826, 110.3671))];
        let ranked = rank_by_distance(at(-7.78, 110.36), &spots, None, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item.0, "tugu");
    }

    #[test]
    fn formats_meters_and_kilometers() {
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(0.25), "250 m");
        assert_eq!(format_distance(1.0), "1.0 km");
        assert_eq!(format_distance(12.345), "12.3 km");
    }
}
