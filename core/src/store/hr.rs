//! HR collections: applicants, employees, biometric pulls, leave requests.

use super::DeskStore;
use crate::{
    error::{DeskError, DeskResult},
    hr::{Applicant, BiometricPull, Employee, LeaveRequest},
};

impl DeskStore {
    // ── Applicants ─────────────────────────────────────────

    pub fn insert_applicant(&mut self, applicant: Applicant) {
        self.applicants.push(applicant);
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn get_applicant(&self, id: &str) -> DeskResult<&Applicant> {
        self.applicants
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| DeskError::ApplicantNotFound { id: id.to_string() })
    }

    pub(crate) fn applicant_mut(&mut self, id: &str) -> DeskResult<&mut Applicant> {
        self.applicants
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DeskError::ApplicantNotFound { id: id.to_string() })
    }

    // ── Employees ──────────────────────────────────────────

    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    // ── Biometric pulls ────────────────────────────────────

    pub fn insert_biometric_pull(&mut self, pull: BiometricPull) {
        self.biometric_pulls.push(pull);
    }

    pub fn biometric_pulls(&self) -> &[BiometricPull] {
        &self.biometric_pulls
    }

    // ── Leave requests ─────────────────────────────────────

    pub fn insert_leave_request(&mut self, request: LeaveRequest) {
        self.leave_requests.push(request);
    }

    pub fn leave_requests(&self) -> &[LeaveRequest] {
        &self.leave_requests
    }

    pub(crate) fn leave_mut(&mut self, id: &str) -> DeskResult<&mut LeaveRequest> {
        self.leave_requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DeskError::LeaveNotFound { id: id.to_string() })
    }
}
