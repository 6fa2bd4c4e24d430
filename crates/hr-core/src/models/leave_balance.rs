use serde::{Deserialize, Serialize};

const DEFAULT_PAID_DAYS: u32 = 12;
const DEFAULT_SICK_DAYS: u32 = 6;

/// Remaining days per leave type. `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub paid: Option<u32>,
    pub sick: Option<u32>,
    pub unpaid: Option<u32>,
}

impl Default for LeaveBalance {
    fn default() -> Self {
        Self {
            paid: Some(DEFAULT_PAID_DAYS),
            sick: Some(DEFAULT_SICK_DAYS),
            unpaid: None,
        }
    }
}

impl LeaveBalance {
    /// Display form of a single balance ("12" or "Unlimited").
    pub fn describe(days: Option<u32>) -> String {
        match days {
            Some(days) => days.to_string(),
            None => String::from("Unlimited"),
        }
    }
}
