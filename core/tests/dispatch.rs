//! Technician ranking and distance estimation tests.

use aquadesk_core::{
    dispatch::{rank_technicians, select_nearest, Availability, Technician},
    geo::{estimate_distance_km, round_km, GeoPoint},
    seed, DeskError,
};

fn tech(id: &str, availability: Availability, lat: f64, lon: f64) -> Technician {
    Technician {
        id: id.into(),
        name: format!("Eng. {id}"),
        availability,
        location: GeoPoint::new(lat, lon),
    }
}

/// The reference case: a lead in Al Rawdah against the sample roster must
/// suggest T-01 (available, closest), at just under 2 km.
#[test]
fn sample_lead_suggests_t01_under_two_km() {
    let roster = seed::sample_roster();
    let lead_location = GeoPoint::new(24.774265, 46.738586);

    let nearest = select_nearest(lead_location, &roster).unwrap();
    assert_eq!(nearest.technician.id, "T-01");

    let expected = estimate_distance_km(lead_location, nearest.technician.location);
    assert!((nearest.distance_km - expected).abs() < 1e-12);
    assert!(
        nearest.distance_km > 1.7 && nearest.distance_km < 2.0,
        "Expected just under 2 km to T-01, got {}",
        nearest.distance_km
    );
    assert_eq!(round_km(nearest.distance_km), 1.8);
}

/// A busy technician next door loses to an available one across town:
/// the availability tier dominates distance without exception.
#[test]
fn availability_tier_dominates_distance() {
    let point = GeoPoint::new(24.80, 46.66);
    let roster = vec![
        tech("NEAR-BUSY", Availability::Busy, 24.801, 46.661),
        tech("FAR-FREE", Availability::Available, 24.70, 46.74),
    ];

    let ranked = rank_technicians(point, &roster);
    assert_eq!(ranked[0].technician.id, "FAR-FREE");
    assert!(
        ranked[0].distance_km > ranked[1].distance_km,
        "The winner really was farther away"
    );
}

/// Busy outranks offline in the same way available outranks busy.
#[test]
fn busy_outranks_offline() {
    let point = GeoPoint::new(24.75, 46.70);
    let roster = vec![
        tech("OFF", Availability::Offline, 24.7501, 46.7001),
        tech("BUSY", Availability::Busy, 24.85, 46.60),
    ];

    let ranked = rank_technicians(point, &roster);
    assert_eq!(ranked[0].technician.id, "BUSY");
}

/// Within one tier the ordering is by distance, ascending.
#[test]
fn same_tier_orders_by_distance() {
    let point = GeoPoint::new(24.75, 46.70);
    let roster = vec![
        tech("FAR", Availability::Available, 24.90, 46.90),
        tech("NEAR", Availability::Available, 24.755, 46.705),
        tech("MID", Availability::Available, 24.80, 46.75),
    ];

    let ids: Vec<_> = rank_technicians(point, &roster)
        .iter()
        .map(|r| r.technician.id.clone())
        .collect();
    assert_eq!(ids, ["NEAR", "MID", "FAR"]);
}

/// Exact ties keep roster order: the sort is stable, so two technicians at
/// the same spot with the same status never swap between calls.
#[test]
fn exact_ties_keep_roster_order() {
    let point = GeoPoint::new(24.75, 46.70);
    let roster = vec![
        tech("FIRST", Availability::Available, 24.76, 46.71),
        tech("SECOND", Availability::Available, 24.76, 46.71),
    ];

    let ranked = rank_technicians(point, &roster);
    assert_eq!(ranked[0].technician.id, "FIRST");
    assert_eq!(ranked[1].technician.id, "SECOND");
}

/// Offline technicians are ranked last, never dropped. A roster that is all
/// offline still returns a suggestion.
#[test]
fn offline_roster_still_yields_a_suggestion() {
    let point = GeoPoint::new(24.75, 46.70);
    let roster = vec![
        tech("OFF-FAR", Availability::Offline, 24.90, 46.90),
        tech("OFF-NEAR", Availability::Offline, 24.76, 46.71),
    ];

    let nearest = select_nearest(point, &roster).unwrap();
    assert_eq!(nearest.technician.id, "OFF-NEAR");
}

/// An empty roster is a typed error, not a panic or a silent None.
#[test]
fn empty_roster_is_a_typed_error() {
    let point = GeoPoint::new(24.75, 46.70);
    let err = select_nearest(point, &[]).unwrap_err();
    assert!(matches!(err, DeskError::EmptyRoster));
}

/// Spot-check the planar formula against a hand computation:
/// dx = 0.01 * 111 = 1.11 km, dy = 0.02 * 95 = 1.9 km.
#[test]
fn planar_formula_matches_hand_computation() {
    let a = GeoPoint::new(24.76, 46.72);
    let b = GeoPoint::new(24.75, 46.70);
    let expected = (1.11f64 * 1.11 + 1.9 * 1.9).sqrt();
    assert!((estimate_distance_km(a, b) - expected).abs() < 1e-9);
}
