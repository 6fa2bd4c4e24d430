use serde::{Deserialize, Serialize};

/// Monthly earnings and deductions, whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub basic: u64,
    pub house_rent: u64,
    pub transport: u64,
    pub medical: u64,
    pub special: u64,
    pub income_tax: u64,
    pub provident_fund: u64,
}

impl SalaryBreakdown {
    pub fn allowances(&self) -> u64 {
        self.house_rent + self.transport + self.medical + self.special
    }

    pub fn gross(&self) -> u64 {
        self.basic + self.allowances()
    }

    pub fn total_deductions(&self) -> u64 {
        self.income_tax + self.provident_fund
    }

    pub fn net(&self) -> u64 {
        self.gross().saturating_sub(self.total_deductions())
    }

    /// Labelled earning lines in display order.
    pub fn earnings(&self) -> [(&'static str, u64); 5] {
        [
            ("Basic Salary", self.basic),
            ("House Rent Allowance", self.house_rent),
            ("Transport Allowance", self.transport),
            ("Medical Allowance", self.medical),
            ("Special Allowance", self.special),
        ]
    }

    pub fn deductions(&self) -> [(&'static str, u64); 2] {
        [
            ("Income Tax", self.income_tax),
            ("Provident Fund", self.provident_fund),
        ]
    }
}
