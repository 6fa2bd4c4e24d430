use crate::{AttendanceStatus, LeaveStatus, LeaveType, UserRole};

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Admin.as_str(), "admin");
    assert_eq!(UserRole::Employee.as_str(), "employee");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
    assert_eq!(UserRole::from_str("employee").unwrap(), UserRole::Employee);
    assert!(UserRole::from_str("manager").is_err());
    assert!(UserRole::from_str("Admin").is_err());
}

#[test]
fn test_user_role_default_is_employee() {
    assert_eq!(UserRole::default(), UserRole::Employee);
    assert!(!UserRole::default().is_admin());
}

#[test]
fn test_attendance_status_uses_kebab_case_for_half_day() {
    assert_eq!(AttendanceStatus::HalfDay.as_str(), "half-day");
    assert_eq!(
        AttendanceStatus::from_str("half-day").unwrap(),
        AttendanceStatus::HalfDay
    );
    assert_eq!(
        serde_json::to_string(&AttendanceStatus::HalfDay).unwrap(),
        "\"half-day\""
    );
    assert!(AttendanceStatus::from_str("half_day").is_err());
}

#[test]
fn test_leave_enums_from_str() {
    assert_eq!(LeaveType::from_str("sick").unwrap(), LeaveType::Sick);
    assert!(LeaveType::from_str("vacation").is_err());
    assert_eq!(
        LeaveStatus::from_str("rejected").unwrap(),
        LeaveStatus::Rejected
    );
    assert!(LeaveStatus::Approved.is_terminal());
    assert!(!LeaveStatus::Pending.is_terminal());
}
