use serde::{Deserialize, Serialize};

/// Desk-wide policy knobs.
///
/// Everything behavioral that a branch manager might tune lives here rather
/// than as scattered literals: attendance schedule, warehouse reorder policy,
/// the default resale factor for refurbished parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Scheduled shift start, "HH:MM".
    pub scheduled_start: String,
    /// Scheduled shift end, "HH:MM".
    pub scheduled_end: String,
    /// Minutes of lateness tolerated before a pull is flagged Late.
    pub late_grace_minutes: u32,
    /// Reorder target as a multiple of an item's minimum quantity.
    pub reorder_multiplier: u32,
    /// Default employee-sale price factor for refurbished parts.
    pub default_employee_factor: f64,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            scheduled_start: "08:00".into(),
            scheduled_end: "17:00".into(),
            late_grace_minutes: 0,
            reorder_multiplier: 2,
            default_employee_factor: 0.5,
        }
    }
}

impl DeskConfig {
    /// Load from a JSON file. In tests, use DeskConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self::default()
    }
}
