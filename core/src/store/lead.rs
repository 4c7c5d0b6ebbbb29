//! Lead inbox operations.

use super::DeskStore;
use crate::{
    error::{DeskError, DeskResult},
    telesales::Lead,
};

impl DeskStore {
    /// Intake from the telesales floor. Insertion order is display order.
    pub fn add_lead(&mut self, lead: Lead) {
        self.leads.push(lead);
    }

    /// List inbox leads, optionally filtered by a case-sensitive substring
    /// over name + phone + address (the desk's quick-search box).
    /// Insertion order is preserved either way.
    pub fn list_leads(&self, filter: Option<&str>) -> Vec<&Lead> {
        match filter {
            None => self.leads.iter().collect(),
            Some(q) => self
                .leads
                .iter()
                .filter(|l| format!("{}{}{}", l.name, l.phone, l.address).contains(q))
                .collect(),
        }
    }

    pub fn get_lead(&self, id: &str) -> DeskResult<&Lead> {
        self.leads
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| DeskError::LeadNotFound { id: id.to_string() })
    }

    /// Remove a lead exactly once; the hand-off workflow is the only caller.
    pub fn remove_lead(&mut self, id: &str) -> DeskResult<Lead> {
        let pos = self
            .leads
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| DeskError::LeadNotFound { id: id.to_string() })?;
        Ok(self.leads.remove(pos))
    }

    pub fn lead_count(&self) -> usize {
        self.leads.len()
    }
}
