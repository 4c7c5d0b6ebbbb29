//! Technician ranking for nearest-technician suggestions.
//!
//! Availability tier dominates distance: an available technician 40 km out
//! always outranks a busy one next door. Offline technicians stay eligible,
//! only last in line — the actual assignment happens at reception.

use crate::{
    error::{DeskError, DeskResult},
    geo::{estimate_distance_km, GeoPoint},
    types::EntityId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
    Offline,
}

impl Availability {
    /// Ranking tier: lower sorts first.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Available => 0,
            Self::Busy => 1,
            Self::Offline => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technician {
    pub id: EntityId,
    pub name: String,
    pub availability: Availability,
    pub location: GeoPoint,
}

/// A roster entry paired with its distance from the query point.
#[derive(Debug, Clone)]
pub struct RankedTechnician<'a> {
    pub technician: &'a Technician,
    pub distance_km: f64,
}

/// Order the roster by availability tier, then distance ascending.
/// The sort is stable: equal tier and distance retain roster order.
pub fn rank_technicians(point: GeoPoint, roster: &[Technician]) -> Vec<RankedTechnician<'_>> {
    let mut ranked: Vec<RankedTechnician<'_>> = roster
        .iter()
        .map(|t| RankedTechnician {
            technician: t,
            distance_km: estimate_distance_km(point, t.location),
        })
        .collect();
    ranked.sort_by(|a, b| {
        let pa = a.technician.availability.priority();
        let pb = b.technician.availability.priority();
        pa.cmp(&pb).then(
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });
    ranked
}

/// Best candidate for a location, or `EmptyRoster` when there is no one
/// to suggest.
pub fn select_nearest(point: GeoPoint, roster: &[Technician]) -> DeskResult<RankedTechnician<'_>> {
    rank_technicians(point, roster)
        .into_iter()
        .next()
        .ok_or(DeskError::EmptyRoster)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tech(id: &str, availability: Availability, lat: f64, lon: f64) -> Technician {
        Technician {
            id: id.into(),
            name: format!("Tech {id}"),
            availability,
            location: GeoPoint::new(lat, lon),
        }
    }

    #[test]
    fn tier_dominates_distance() {
        // Busy technician is essentially on top of the point; available one
        // is a full degree of latitude away. Available still wins.
        let roster = vec![
            tech("T-busy", Availability::Busy, 24.70, 46.70),
            tech("T-avail", Availability::Available, 25.70, 46.70),
        ];
        let best = select_nearest(GeoPoint::new(24.70, 46.70), &roster).unwrap();
        assert_eq!(best.technician.id, "T-avail");
    }

    #[test]
    fn busy_preferred_over_offline() {
        let roster = vec![
            tech("T-off", Availability::Offline, 24.70, 46.70),
            tech("T-busy", Availability::Busy, 25.00, 46.70),
        ];
        let best = select_nearest(GeoPoint::new(24.70, 46.70), &roster).unwrap();
        assert_eq!(best.technician.id, "T-busy");
    }

    #[test]
    fn empty_roster_is_an_error() {
        let err = select_nearest(GeoPoint::new(24.7, 46.7), &[]).unwrap_err();
        assert!(matches!(err, DeskError::EmptyRoster));
    }

    #[test]
    fn ties_retain_roster_order() {
        let roster = vec![
            tech("T-first", Availability::Available, 24.70, 46.70),
            tech("T-second", Availability::Available, 24.70, 46.70),
        ];
        let ranked = rank_technicians(GeoPoint::new(24.75, 46.75), &roster);
        assert_eq!(ranked[0].technician.id, "T-first");
        assert_eq!(ranked[1].technician.id, "T-second");
    }
}
