//! HR desk: applicant pipeline, leave approvals, and attendance analysis
//! over raw biometric clock pulls.

use crate::{
    config::DeskConfig,
    error::{DeskError, DeskResult},
    event::DeskEvent,
    store::DeskStore,
    types::EntityId,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DEPARTMENT: &str = "hr";

// ── Applicants ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantStatus {
    New,
    Review,
    Scheduled,
    Accepted,
    Rejected,
}

impl ApplicantStatus {
    /// Hiring pipeline: new -> review -> scheduled -> accepted.
    /// Rejection can happen at any non-terminal step.
    pub fn next(&self) -> Option<ApplicantStatus> {
        match self {
            Self::New => Some(Self::Review),
            Self::Review => Some(Self::Scheduled),
            Self::Scheduled => Some(Self::Accepted),
            Self::Accepted | Self::Rejected => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Review => "review",
            Self::Scheduled => "scheduled",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    pub id: EntityId,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub status: ApplicantStatus,
    /// Interview slot label once scheduled.
    pub interview: Option<String>,
}

/// Move an applicant one step along the hiring pipeline.
pub fn advance_applicant(store: &mut DeskStore, id: &str) -> DeskResult<ApplicantStatus> {
    let next = {
        let applicant = store.applicant_mut(id)?;
        let next = applicant
            .status
            .next()
            .ok_or_else(|| DeskError::InvalidTransition {
                entity: format!("applicant '{id}'"),
                from: applicant.status.as_str().to_string(),
            })?;
        applicant.status = next;
        next
    };
    store.record_event(
        DEPARTMENT,
        &DeskEvent::ApplicantAdvanced {
            applicant_id: id.to_string(),
            status: next.as_str().to_string(),
        },
    )?;
    Ok(next)
}

pub fn reject_applicant(store: &mut DeskStore, id: &str) -> DeskResult<()> {
    {
        let applicant = store.applicant_mut(id)?;
        if matches!(
            applicant.status,
            ApplicantStatus::Accepted | ApplicantStatus::Rejected
        ) {
            return Err(DeskError::InvalidTransition {
                entity: format!("applicant '{id}'"),
                from: applicant.status.as_str().to_string(),
            });
        }
        applicant.status = ApplicantStatus::Rejected;
    }
    store.record_event(
        DEPARTMENT,
        &DeskEvent::ApplicantAdvanced {
            applicant_id: id.to_string(),
            status: ApplicantStatus::Rejected.as_str().to_string(),
        },
    )?;
    Ok(())
}

// ── Employees ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub role: String,
    pub area: String,
    pub active: bool,
}

// ── Attendance ─────────────────────────────────────────────

/// One raw pull from a biometric reader. Missing clock-in means the
/// employee never badged that day (on leave or absent).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricPull {
    pub id: EntityId,
    pub employee_name: String,
    pub date: NaiveDate,
    pub clock_in: Option<String>,
    pub clock_out: Option<String>,
    pub device: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    OnDuty,
    Late,
    Leave,
}

/// The per-employee row of the shift-analysis tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRow {
    pub employee_name: String,
    pub first_in: Option<String>,
    pub lateness_minutes: i64,
    pub status: AttendanceStatus,
}

fn parse_hhmm(value: &str, field: &str) -> DeskResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| DeskError::Validation {
        field: field.to_string(),
        reason: format!("expected HH:MM, got '{value}': {e}"),
    })
}

/// Compute lateness against the configured shift start for each pull.
/// Clocking in early counts as zero lateness, not negative.
pub fn analyze_attendance(
    pulls: &[BiometricPull],
    config: &DeskConfig,
) -> DeskResult<Vec<AttendanceRow>> {
    let shift_start = parse_hhmm(&config.scheduled_start, "scheduled_start")?;
    let mut rows = Vec::with_capacity(pulls.len());

    for pull in pulls {
        let row = match &pull.clock_in {
            None => AttendanceRow {
                employee_name: pull.employee_name.clone(),
                first_in: None,
                lateness_minutes: 0,
                status: AttendanceStatus::Leave,
            },
            Some(first_in) => {
                let in_time = parse_hhmm(first_in, "clock_in")?;
                let late = (in_time - shift_start).num_minutes().max(0);
                AttendanceRow {
                    employee_name: pull.employee_name.clone(),
                    first_in: Some(first_in.clone()),
                    lateness_minutes: late,
                    status: if late > i64::from(config.late_grace_minutes) {
                        AttendanceStatus::Late
                    } else {
                        AttendanceStatus::OnDuty
                    },
                }
            }
        };
        rows.push(row);
    }
    Ok(rows)
}

// ── Leave requests ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    PendingHr,
    SentToManager,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingHr => "pending_hr",
            Self::SentToManager => "sent_to_manager",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: EntityId,
    pub employee_name: String,
    pub leave_type: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub status: LeaveStatus,
}

/// HR screens the request and forwards it to the manager.
pub fn send_leave_to_manager(store: &mut DeskStore, id: &str) -> DeskResult<()> {
    {
        let leave = store.leave_mut(id)?;
        if leave.status != LeaveStatus::PendingHr {
            return Err(DeskError::InvalidTransition {
                entity: format!("leave request '{id}'"),
                from: leave.status.as_str().to_string(),
            });
        }
        leave.status = LeaveStatus::SentToManager;
    }
    store.record_event(
        DEPARTMENT,
        &DeskEvent::LeaveDecided {
            leave_id: id.to_string(),
            status: LeaveStatus::SentToManager.as_str().to_string(),
        },
    )?;
    Ok(())
}

/// The manager's decision. Only requests on the manager's desk qualify.
pub fn decide_leave(store: &mut DeskStore, id: &str, approved: bool) -> DeskResult<LeaveStatus> {
    let decided = {
        let leave = store.leave_mut(id)?;
        if leave.status != LeaveStatus::SentToManager {
            return Err(DeskError::InvalidTransition {
                entity: format!("leave request '{id}'"),
                from: leave.status.as_str().to_string(),
            });
        }
        leave.status = if approved {
            LeaveStatus::Approved
        } else {
            LeaveStatus::Rejected
        };
        leave.status
    };
    store.record_event(
        DEPARTMENT,
        &DeskEvent::LeaveDecided {
            leave_id: id.to_string(),
            status: decided.as_str().to_string(),
        },
    )?;
    Ok(decided)
}
