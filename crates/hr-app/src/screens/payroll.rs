use crate::{AppResult, AppState};

use hr_core::{PayrollRecord, SalaryBreakdown, UserRole};

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PayLine {
    pub label: &'static str,
    pub amount: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayrollView {
    pub title: &'static str,
    pub annual_salary: u64,
    pub monthly_salary: u64,
    pub breakdown: SalaryBreakdown,
    pub earnings: Vec<PayLine>,
    pub deductions: Vec<PayLine>,
    pub gross: u64,
    pub total_deductions: u64,
    pub net: u64,
    pub history: Vec<PayrollRecord>,
}

fn lines(entries: &[(&'static str, u64)]) -> Vec<PayLine> {
    entries
        .iter()
        .map(|&(label, amount)| PayLine { label, amount })
        .collect()
}

pub fn view(state: &AppState) -> AppResult<PayrollView> {
    let identity = state.identity()?;
    let breakdown = state.salary_breakdown;

    Ok(PayrollView {
        title: match identity.role {
            UserRole::Admin => "Payroll Management",
            UserRole::Employee => "My Payroll",
        },
        annual_salary: identity.salary,
        monthly_salary: identity.monthly_salary(),
        earnings: lines(&breakdown.earnings()),
        deductions: lines(&breakdown.deductions()),
        gross: breakdown.gross(),
        total_deductions: breakdown.total_deductions(),
        net: breakdown.net(),
        breakdown,
        history: state.payroll_history.clone(),
    })
}
