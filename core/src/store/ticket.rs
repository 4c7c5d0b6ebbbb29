//! Reception collections: tickets, installments, installations, fuel logs.

use super::DeskStore;
use crate::{
    error::{DeskError, DeskResult},
    reception::{FuelLog, Installment, InstallationJob, Ticket},
};

impl DeskStore {
    // ── Tickets ────────────────────────────────────────────

    /// Newest first, matching the desk's ticket list.
    pub fn push_ticket(&mut self, ticket: Ticket) {
        self.tickets.insert(0, ticket);
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    // ── Installments ───────────────────────────────────────

    pub fn insert_installment(&mut self, plan: Installment) {
        self.installments.push(plan);
    }

    pub fn installments(&self) -> &[Installment] {
        &self.installments
    }

    pub fn get_installment(&self, id: &str) -> DeskResult<&Installment> {
        self.installments
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DeskError::InstallmentNotFound { id: id.to_string() })
    }

    pub(crate) fn installment_mut(&mut self, id: &str) -> DeskResult<&mut Installment> {
        self.installments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DeskError::InstallmentNotFound { id: id.to_string() })
    }

    // ── Installations ──────────────────────────────────────

    pub fn insert_installation(&mut self, job: InstallationJob) {
        self.installations.push(job);
    }

    pub fn installations(&self) -> &[InstallationJob] {
        &self.installations
    }

    // ── Fuel logs ──────────────────────────────────────────

    pub fn insert_fuel_log(&mut self, log: FuelLog) {
        self.fuel_logs.push(log);
    }

    pub fn fuel_logs(&self) -> &[FuelLog] {
        &self.fuel_logs
    }
}
