use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Technician roster is empty")]
    EmptyRoster,

    #[error("Lead '{id}' not found in inbox")]
    LeadNotFound { id: String },

    #[error("Stock item '{sku}' not found")]
    ItemNotFound { sku: String },

    #[error("Purchase request '{id}' not found")]
    PurchaseNotFound { id: String },

    #[error("Applicant '{id}' not found")]
    ApplicantNotFound { id: String },

    #[error("Leave request '{id}' not found")]
    LeaveNotFound { id: String },

    #[error("Installment '{id}' not found")]
    InstallmentNotFound { id: String },

    #[error("Recycled part '{id}' not found")]
    RecycledPartNotFound { id: String },

    #[error("Invalid transition for {entity}: already '{from}'")]
    InvalidTransition { entity: String, from: String },

    #[error("Invalid input for '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DeskResult<T> = Result<T, DeskError>;
