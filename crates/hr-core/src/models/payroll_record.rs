use crate::PayrollStatus;

use serde::{Deserialize, Serialize};

/// One month of pay history. Amounts are whole dollars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// 1-based calendar month
    pub month: u32,
    pub year: i32,
    pub basic_salary: u64,
    pub allowances: u64,
    pub deductions: u64,
    pub net_salary: u64,
    pub status: PayrollStatus,
}

impl PayrollRecord {
    pub fn new(
        month: u32,
        year: i32,
        basic_salary: u64,
        allowances: u64,
        deductions: u64,
        status: PayrollStatus,
    ) -> Self {
        Self {
            month,
            year,
            basic_salary,
            allowances,
            deductions,
            net_salary: (basic_salary + allowances).saturating_sub(deductions),
            status,
        }
    }

    /// "January 2024"
    pub fn period_label(&self) -> String {
        let name = chrono::Month::try_from(self.month as u8)
            .map(|m| m.name())
            .unwrap_or("Unknown");
        format!("{name} {}", self.year)
    }
}
