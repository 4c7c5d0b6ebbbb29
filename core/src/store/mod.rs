//! In-memory session store.
//!
//! RULE: Only the store owns collections. Department workflows call store
//! methods — they never hold references into another department's data.
//!
//! One `DeskStore` is created per UI session and passed `&mut` into each
//! workflow; there are no module-level singletons. All operations run to
//! completion before the next user event, so no locking is needed.

mod camera;
mod handoff;
mod hr;
mod lead;
mod ticket;
mod warehouse;

use crate::{
    cctv::Camera,
    error::DeskResult,
    event::{event_type_name, DeskEvent, OpsLogEntry},
    hr::{Applicant, BiometricPull, Employee, LeaveRequest},
    reception::{FuelLog, Installment, InstallationJob, Ticket},
    telesales::{HandoffRecord, Lead},
    warehouse::{ConsumptionEvent, PurchaseRequest, RecycledPart, StockItem, TechStock},
};

#[derive(Debug, Default)]
pub struct DeskStore {
    // Telesales / dispatch
    leads: Vec<Lead>,
    handoffs: Vec<HandoffRecord>,

    // Warehouse
    stock: Vec<StockItem>,
    tech_stocks: Vec<TechStock>,
    consumption: Vec<ConsumptionEvent>,
    recycled: Vec<RecycledPart>,
    purchases: Vec<PurchaseRequest>,

    // Reception
    tickets: Vec<Ticket>,
    installments: Vec<Installment>,
    installations: Vec<InstallationJob>,
    fuel_logs: Vec<FuelLog>,

    // HR
    applicants: Vec<Applicant>,
    employees: Vec<Employee>,
    biometric_pulls: Vec<BiometricPull>,
    leave_requests: Vec<LeaveRequest>,

    // CCTV
    cameras: Vec<Camera>,

    // Cross-department paper trail, newest first.
    ops_log: Vec<OpsLogEntry>,
}

impl DeskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archive an event into the operations log (newest first).
    pub fn record_event(&mut self, department: &str, event: &DeskEvent) -> DeskResult<()> {
        let entry = OpsLogEntry {
            at: chrono::Utc::now(),
            department: department.to_string(),
            event_type: event_type_name(event).to_string(),
            payload: serde_json::to_string(event)?,
        };
        self.ops_log.insert(0, entry);
        Ok(())
    }

    /// The operations log, newest first.
    pub fn ops_log(&self) -> &[OpsLogEntry] {
        &self.ops_log
    }
}
