//! Warehouse desk: main stock, technician van stock, consumption
//! notifications, recycled parts, and the purchase approval chain.

use crate::{
    config::DeskConfig,
    error::{DeskError, DeskResult},
    event::DeskEvent,
    store::DeskStore,
    types::{EntityId, Sku},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEPARTMENT: &str = "warehouse";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    pub sku: Sku,
    pub name: String,
    pub category: String,
    pub barcode: String,
    /// Shelf/bin location code.
    pub bin: String,
    pub unit_price: f64,
    pub min_qty: u32,
    pub qty: u32,
}

impl StockItem {
    pub fn is_low(&self) -> bool {
        self.qty <= self.min_qty
    }
}

/// What a technician carries in the van, sku -> qty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechStock {
    pub technician_id: EntityId,
    pub items: std::collections::BTreeMap<Sku, u32>,
}

/// A deduction notification arriving from the technician's field app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionEvent {
    pub id: EntityId,
    pub technician_id: EntityId,
    pub sku: Sku,
    pub qty: u32,
    pub at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecycleState {
    NeedsRepair,
    Refurbished,
}

/// A part pulled from a customer site, repairable or resellable to staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecycledPart {
    pub id: EntityId,
    pub sku: Sku,
    pub name: String,
    pub state: RecycleState,
    /// Staff-sale price as a fraction of the item's list price, 0..=1.
    pub employee_factor: f64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    Draft,
    SentToManager,
    Approved,
    SentToAccounting,
    Rejected,
}

impl PurchaseStatus {
    /// One-way approval chain: warehouse -> manager -> accounting.
    /// Terminal states have no successor.
    pub fn next(&self) -> Option<PurchaseStatus> {
        match self {
            Self::Draft => Some(Self::SentToManager),
            Self::SentToManager => Some(Self::Approved),
            Self::Approved => Some(Self::SentToAccounting),
            Self::SentToAccounting | Self::Rejected => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::SentToManager => "sent_to_manager",
            Self::Approved => "approved",
            Self::SentToAccounting => "sent_to_accounting",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub sku: Sku,
    pub name: String,
    pub qty: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub id: EntityId,
    pub created: chrono::NaiveDate,
    pub status: PurchaseStatus,
    pub lines: Vec<PurchaseLine>,
}

// ── Workflows ──────────────────────────────────────────────

/// Hand stock to a technician, by SKU or scanned barcode.
/// Main stock floors at zero; the van stock gains the full quantity.
pub fn deliver_to_technician(
    store: &mut DeskStore,
    technician_id: &str,
    sku_or_barcode: &str,
    qty: u32,
) -> DeskResult<()> {
    if qty == 0 {
        return Err(DeskError::Validation {
            field: "qty".into(),
            reason: "delivery quantity must be at least 1".into(),
        });
    }
    let sku = store
        .sku_from_barcode(sku_or_barcode)
        .unwrap_or_else(|| sku_or_barcode.trim().to_string());
    // Resolves the item first so an unknown code fails before any mutation.
    store.item_by_sku(&sku)?;

    store.deduct_stock(&sku, qty)?;
    store.add_to_tech_stock(technician_id, &sku, qty);
    store.record_event(
        DEPARTMENT,
        &DeskEvent::StockDelivered {
            technician_id: technician_id.to_string(),
            sku: sku.clone(),
            qty,
        },
    )?;
    log::info!("delivered {qty}x {sku} to technician {technician_id}");
    Ok(())
}

/// Register a field-app deduction: the technician used parts on a job.
/// Creates a consumption event (the "replenish now" queue) and floors the
/// van stock at zero.
pub fn record_consumption(
    store: &mut DeskStore,
    technician_id: &str,
    sku: &str,
    qty: u32,
) -> DeskResult<ConsumptionEvent> {
    if qty == 0 {
        return Err(DeskError::Validation {
            field: "qty".into(),
            reason: "consumption quantity must be at least 1".into(),
        });
    }
    store.item_by_sku(sku)?;

    let event = ConsumptionEvent {
        id: format!("EV-{}", Uuid::new_v4()),
        technician_id: technician_id.to_string(),
        sku: sku.to_string(),
        qty,
        at: chrono::Utc::now(),
    };
    store.remove_from_tech_stock(technician_id, sku, qty);
    store.push_consumption(event.clone());
    store.record_event(
        DEPARTMENT,
        &DeskEvent::ConsumptionRecorded {
            event_id: event.id.clone(),
            technician_id: event.technician_id.clone(),
            sku: event.sku.clone(),
            qty: event.qty,
        },
    )?;
    Ok(event)
}

/// Draft a purchase request covering every low-stock item, quantity
/// `max(min * reorder_multiplier - qty, 1)` per line. Fails when nothing
/// is low rather than creating an empty request.
pub fn create_purchase_request_from_low_stock(
    store: &mut DeskStore,
    config: &DeskConfig,
) -> DeskResult<PurchaseRequest> {
    let lines: Vec<PurchaseLine> = store
        .low_stock()
        .into_iter()
        .map(|item| PurchaseLine {
            sku: item.sku.clone(),
            name: item.name.clone(),
            qty: (item.min_qty * config.reorder_multiplier).saturating_sub(item.qty).max(1),
        })
        .collect();
    if lines.is_empty() {
        return Err(DeskError::Validation {
            field: "stock".into(),
            reason: "no items at or below minimum quantity".into(),
        });
    }

    let request = PurchaseRequest {
        id: format!("PR-{}", Uuid::new_v4()),
        created: chrono::Utc::now().date_naive(),
        status: PurchaseStatus::Draft,
        lines,
    };
    store.push_purchase(request.clone());
    store.record_event(
        DEPARTMENT,
        &DeskEvent::PurchaseCreated {
            purchase_id: request.id.clone(),
            line_count: request.lines.len(),
        },
    )?;
    log::info!(
        "purchase request {} drafted with {} lines",
        request.id,
        request.lines.len()
    );
    Ok(request)
}

/// Move a purchase request one step along the approval chain.
pub fn advance_purchase(store: &mut DeskStore, id: &str) -> DeskResult<PurchaseStatus> {
    let next = {
        let request = store.purchase_mut(id)?;
        let next = request
            .status
            .next()
            .ok_or_else(|| DeskError::InvalidTransition {
                entity: format!("purchase request '{id}'"),
                from: request.status.as_str().to_string(),
            })?;
        request.status = next;
        next
    };
    store.record_event(
        DEPARTMENT,
        &DeskEvent::PurchaseAdvanced {
            purchase_id: id.to_string(),
            status: next.as_str().to_string(),
        },
    )?;
    Ok(next)
}

/// Reject a purchase request. Terminal; it can no longer advance.
pub fn reject_purchase(store: &mut DeskStore, id: &str) -> DeskResult<()> {
    {
        let request = store.purchase_mut(id)?;
        if matches!(
            request.status,
            PurchaseStatus::SentToAccounting | PurchaseStatus::Rejected
        ) {
            return Err(DeskError::InvalidTransition {
                entity: format!("purchase request '{id}'"),
                from: request.status.as_str().to_string(),
            });
        }
        request.status = PurchaseStatus::Rejected;
    }
    store.record_event(
        DEPARTMENT,
        &DeskEvent::PurchaseAdvanced {
            purchase_id: id.to_string(),
            status: PurchaseStatus::Rejected.as_str().to_string(),
        },
    )?;
    Ok(())
}

/// Intake a part recovered from a customer site.
pub fn log_recycled_part(
    store: &mut DeskStore,
    sku: &str,
    state: RecycleState,
    employee_factor: f64,
    note: Option<String>,
) -> DeskResult<RecycledPart> {
    let item = store.item_by_sku(sku)?;
    let part = RecycledPart {
        id: format!("RC-{}", Uuid::new_v4()),
        sku: item.sku.clone(),
        name: item.name.clone(),
        state,
        employee_factor: employee_factor.clamp(0.0, 1.0),
        note,
    };
    store.push_recycled(part.clone());
    store.record_event(
        DEPARTMENT,
        &DeskEvent::RecycledPartLogged {
            part_id: part.id.clone(),
            sku: part.sku.clone(),
        },
    )?;
    Ok(part)
}

/// Approve a repaired part for staff sale.
pub fn approve_recycled_part(store: &mut DeskStore, part_id: &str) -> DeskResult<()> {
    store.recycled_mut(part_id)?.state = RecycleState::Refurbished;
    store.record_event(
        DEPARTMENT,
        &DeskEvent::RecycledPartApproved {
            part_id: part_id.to_string(),
        },
    )?;
    Ok(())
}

/// Staff-sale price of a recycled part, from the item's list price.
pub fn employee_price(store: &DeskStore, part: &RecycledPart) -> DeskResult<f64> {
    let item = store.item_by_sku(&part.sku)?;
    Ok((item.unit_price * part.employee_factor).round())
}

/// Fine a technician for swapping out a healthy part, and note the
/// customer invoice. Log-only: payroll picks it up from the archive.
pub fn penalize_technician(store: &mut DeskStore, technician_id: &str, sku: &str) -> DeskResult<()> {
    store.item_by_sku(sku)?;
    store.record_event(
        DEPARTMENT,
        &DeskEvent::TechnicianPenalized {
            technician_id: technician_id.to_string(),
            sku: sku.to_string(),
        },
    )?;
    log::warn!("penalty recorded for technician {technician_id} over healthy part {sku}");
    Ok(())
}
