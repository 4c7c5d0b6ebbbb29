//! Desk events and the operations log.
//!
//! Every mutating workflow emits a `DeskEvent`; the store archives it as an
//! `OpsLogEntry` with the JSON payload. The log is newest-first, append-only —
//! it is the cross-department paper trail the departments read instead of
//! reaching into each other's state.

use crate::types::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every event emitted by a desk workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeskEvent {
    // ── Telesales / dispatch ───────────────────────
    LeadForwarded {
        lead_id: EntityId,
        suggested_technician_id: EntityId,
        distance_km: f64,
    },

    // ── Reception ──────────────────────────────────
    TicketOpened {
        ticket_id: EntityId,
        customer_name: String,
    },
    InstallmentPaid {
        installment_id: EntityId,
        paid_months: u32,
    },

    // ── Warehouse ──────────────────────────────────
    StockDelivered {
        technician_id: EntityId,
        sku: String,
        qty: u32,
    },
    ConsumptionRecorded {
        event_id: EntityId,
        technician_id: EntityId,
        sku: String,
        qty: u32,
    },
    PurchaseCreated {
        purchase_id: EntityId,
        line_count: usize,
    },
    PurchaseAdvanced {
        purchase_id: EntityId,
        status: String,
    },
    RecycledPartLogged {
        part_id: EntityId,
        sku: String,
    },
    RecycledPartApproved {
        part_id: EntityId,
    },
    TechnicianPenalized {
        technician_id: EntityId,
        sku: String,
    },

    // ── HR ─────────────────────────────────────────
    ApplicantAdvanced {
        applicant_id: EntityId,
        status: String,
    },
    LeaveDecided {
        leave_id: EntityId,
        status: String,
    },
}

/// Extract a stable string name from a DeskEvent variant.
/// Used for the event_type field of the operations log.
pub fn event_type_name(event: &DeskEvent) -> &'static str {
    match event {
        DeskEvent::LeadForwarded { .. } => "lead_forwarded",
        DeskEvent::TicketOpened { .. } => "ticket_opened",
        DeskEvent::InstallmentPaid { .. } => "installment_paid",
        DeskEvent::StockDelivered { .. } => "stock_delivered",
        DeskEvent::ConsumptionRecorded { .. } => "consumption_recorded",
        DeskEvent::PurchaseCreated { .. } => "purchase_created",
        DeskEvent::PurchaseAdvanced { .. } => "purchase_advanced",
        DeskEvent::RecycledPartLogged { .. } => "recycled_part_logged",
        DeskEvent::RecycledPartApproved { .. } => "recycled_part_approved",
        DeskEvent::TechnicianPenalized { .. } => "technician_penalized",
        DeskEvent::ApplicantAdvanced { .. } => "applicant_advanced",
        DeskEvent::LeaveDecided { .. } => "leave_decided",
    }
}

/// An archived event, as kept in the operations log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpsLogEntry {
    pub at: DateTime<Utc>,
    pub department: String,
    pub event_type: String,
    pub payload: String, // JSON-serialized DeskEvent
}
