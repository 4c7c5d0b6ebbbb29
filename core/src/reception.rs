//! Reception desk: service tickets, installment plans, installation jobs,
//! and the technicians' fuel/route log.

use crate::{
    dispatch::{select_nearest, Technician},
    error::{DeskError, DeskResult},
    event::DeskEvent,
    geo::{round_km, GeoPoint},
    store::DeskStore,
    types::EntityId,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEPARTMENT: &str = "reception";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketKind {
    Maintenance,
    Complaint,
    Inspection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Normal,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
}

/// Form input for a new ticket. Validated once, here, before any store
/// mutation — handlers never read loose form fields.
#[derive(Debug, Clone)]
pub struct TicketInput {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub kind: TicketKind,
    pub priority: TicketPriority,
    pub description: String,
    /// Customer coordinates when known; enables the nearest-technician
    /// suggestion on the saved ticket.
    pub location: Option<GeoPoint>,
}

impl TicketInput {
    fn validate(&self) -> DeskResult<()> {
        if self.customer_name.trim().is_empty() {
            return Err(DeskError::Validation {
                field: "customer_name".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.phone.trim().is_empty() {
            return Err(DeskError::Validation {
                field: "phone".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: EntityId,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub kind: TicketKind,
    pub priority: TicketPriority,
    pub description: String,
    pub status: TicketStatus,
    /// Suggestion snapshot, present when the customer location was known
    /// and the roster was not empty at intake.
    pub suggested_technician_id: Option<EntityId>,
    pub suggested_technician_name: Option<String>,
    pub distance_km: Option<f64>,
}

/// Save a ticket, suggesting the nearest technician when coordinates are
/// on file. An empty roster degrades to no suggestion rather than failing:
/// reception can still record the visit request.
pub fn open_ticket(
    store: &mut DeskStore,
    input: TicketInput,
    roster: &[Technician],
) -> DeskResult<Ticket> {
    input.validate()?;

    let suggestion = input
        .location
        .and_then(|point| select_nearest(point, roster).ok());
    let ticket = Ticket {
        id: format!("TK-{}", Uuid::new_v4()),
        customer_name: input.customer_name,
        phone: input.phone,
        address: input.address,
        kind: input.kind,
        priority: input.priority,
        description: input.description,
        status: TicketStatus::Open,
        suggested_technician_id: suggestion.as_ref().map(|s| s.technician.id.clone()),
        suggested_technician_name: suggestion.as_ref().map(|s| s.technician.name.clone()),
        distance_km: suggestion.as_ref().map(|s| round_km(s.distance_km)),
    };

    store.push_ticket(ticket.clone());
    store.record_event(
        DEPARTMENT,
        &DeskEvent::TicketOpened {
            ticket_id: ticket.id.clone(),
            customer_name: ticket.customer_name.clone(),
        },
    )?;
    log::info!("ticket {} opened for {}", ticket.id, ticket.customer_name);
    Ok(ticket)
}

// ── Installments ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installment {
    pub id: EntityId,
    pub customer: String,
    pub product: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub monthly_amount: f64,
    pub paid_months: u32,
    pub total_months: u32,
}

impl Installment {
    pub fn remaining_months(&self) -> u32 {
        self.total_months.saturating_sub(self.paid_months)
    }

    pub fn is_settled(&self) -> bool {
        self.paid_months >= self.total_months
    }
}

/// Record one monthly payment, capped at the plan length.
pub fn record_installment_payment(store: &mut DeskStore, id: &str) -> DeskResult<u32> {
    let paid = {
        let plan = store.installment_mut(id)?;
        if plan.is_settled() {
            return Err(DeskError::InvalidTransition {
                entity: format!("installment '{id}'"),
                from: "settled".into(),
            });
        }
        plan.paid_months += 1;
        plan.paid_months
    };
    store.record_event(
        DEPARTMENT,
        &DeskEvent::InstallmentPaid {
            installment_id: id.to_string(),
            paid_months: paid,
        },
    )?;
    Ok(paid)
}

// ── Read-model records ─────────────────────────────────────

/// A completed or scheduled installation visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationJob {
    pub id: EntityId,
    pub date: NaiveDate,
    pub customer: String,
    pub address: String,
    pub device: String,
    pub technician_name: String,
}

/// One technician-day of fuel and route bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelLog {
    pub technician_name: String,
    pub date: NaiveDate,
    pub liters: f64,
    pub distance_km: f64,
    pub routes: Vec<String>,
}

impl FuelLog {
    /// Litres per 100 km, the figure the desk compares across technicians.
    pub fn consumption_per_100km(&self) -> f64 {
        if self.distance_km == 0.0 {
            0.0
        } else {
            self.liters / self.distance_km * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_months_counts_down() {
        let plan = Installment {
            id: "INS-1001".into(),
            customer: "Khalid".into(),
            product: "RO filter, 6 stages".into(),
            start: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            monthly_amount: 180.0,
            paid_months: 4,
            total_months: 12,
        };
        assert_eq!(plan.remaining_months(), 8);
        assert!(!plan.is_settled());
    }

    #[test]
    fn fuel_consumption_per_100km() {
        let log = FuelLog {
            technician_name: "Khalid".into(),
            date: NaiveDate::from_ymd_opt(2025, 10, 29).unwrap(),
            liters: 9.8,
            distance_km: 74.0,
            routes: vec!["HQ -> Rawdah".into()],
        };
        assert!((log.consumption_per_100km() - 13.243243).abs() < 1e-4);
    }
}
