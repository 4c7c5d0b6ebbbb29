//! Telesales desk: the lead inbox and the hand-off to reception.
//!
//! Telesales never assigns a technician. It suggests the nearest one as a
//! point-in-time snapshot and forwards the lead; the actual assignment is
//! reception's call. Once forwarded, a lead leaves the inbox for good.

use crate::{
    dispatch::{select_nearest, Technician},
    error::DeskResult,
    event::DeskEvent,
    geo::{round_km, GeoPoint},
    store::DeskStore,
    types::EntityId,
};
use serde::{Deserialize, Serialize};

pub const DEPARTMENT: &str = "telesales";

/// An inbound service request awaiting dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub address: String,
    /// Requested visit hour, "HH:MM". Kept verbatim from intake, unvalidated.
    pub requested_time: String,
    pub location: GeoPoint,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoffStatus {
    SentToReception,
}

/// Snapshot taken at the instant a lead is forwarded. The technician's live
/// status or position changing later does not invalidate the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffRecord {
    pub lead_id: EntityId,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub requested_time: String,
    pub suggested_technician_id: EntityId,
    pub suggested_technician_name: String,
    /// Distance at hand-off time, rounded to one decimal.
    pub distance_km: f64,
    pub status: HandoffStatus,
}

/// Forward a lead to reception with a nearest-technician suggestion.
///
/// Atomic from the caller's view: the lead leaves the inbox and the record
/// enters the hand-off log in one call, so a lead is never visible in both
/// places. Fails with `LeadNotFound` for an unknown id and `EmptyRoster`
/// when there is no one to suggest; the inbox is untouched on either error.
pub fn forward_lead_to_reception(
    store: &mut DeskStore,
    lead_id: &str,
    roster: &[Technician],
) -> DeskResult<HandoffRecord> {
    let lead = store.get_lead(lead_id)?;
    let nearest = select_nearest(lead.location, roster)?;

    let record = HandoffRecord {
        lead_id: lead.id.clone(),
        customer_name: lead.name.clone(),
        phone: lead.phone.clone(),
        address: lead.address.clone(),
        requested_time: lead.requested_time.clone(),
        suggested_technician_id: nearest.technician.id.clone(),
        suggested_technician_name: nearest.technician.name.clone(),
        distance_km: round_km(nearest.distance_km),
        status: HandoffStatus::SentToReception,
    };

    store.remove_lead(lead_id)?;
    store.push_handoff(record.clone());
    store.record_event(
        DEPARTMENT,
        &DeskEvent::LeadForwarded {
            lead_id: record.lead_id.clone(),
            suggested_technician_id: record.suggested_technician_id.clone(),
            distance_km: record.distance_km,
        },
    )?;
    log::info!(
        "lead {} forwarded to reception, suggested {} at {} km",
        record.lead_id,
        record.suggested_technician_name,
        record.distance_km
    );
    Ok(record)
}

// ── Call floor read model ──────────────────────────────────

/// Outcome of a telesales call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallOutcome {
    PriorCustomer,
    NotInterested,
    AcceptedInspection,
}

impl CallOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PriorCustomer => "prior customer - maintenance",
            Self::NotInterested => "not interested",
            Self::AcceptedInspection => "accepted free inspection",
        }
    }
}

/// Per-agent daily figures for the supervision tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentStats {
    pub name: String,
    pub calls: u32,
    pub accepts: u32,
}

impl AgentStats {
    /// Accepted inspections as a fraction of calls; 0 when no calls yet.
    pub fn conversion_rate(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            f64::from(self.accepts) / f64::from(self.calls)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_rate_handles_zero_calls() {
        let idle = AgentStats {
            name: "Noura".into(),
            calls: 0,
            accepts: 0,
        };
        assert_eq!(idle.conversion_rate(), 0.0);

        let busy = AgentStats {
            name: "Layan".into(),
            calls: 40,
            accepts: 10,
        };
        assert!((busy.conversion_rate() - 0.25).abs() < 1e-12);
    }
}
