use crate::{PayrollRecord, PayrollStatus, seed};

#[test]
fn test_salary_breakdown_totals() {
    let breakdown = seed::salary_breakdown();

    assert_eq!(breakdown.allowances(), 1_500);
    assert_eq!(breakdown.gross(), 6_500);
    assert_eq!(breakdown.total_deductions(), 500);
    assert_eq!(breakdown.net(), 6_000);
}

#[test]
fn test_payroll_record_computes_net() {
    let record = PayrollRecord::new(10, 2023, 5_000, 1_400, 480, PayrollStatus::Paid);

    assert_eq!(record.net_salary, 5_920);
    assert_eq!(record.period_label(), "October 2023");
}

#[test]
fn test_payroll_record_net_never_underflows() {
    let record = PayrollRecord::new(1, 2024, 100, 0, 500, PayrollStatus::Pending);

    assert_eq!(record.net_salary, 0);
}
