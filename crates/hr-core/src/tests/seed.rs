use crate::{LeaveStatus, UserRole, parse_date, seed};

use std::collections::HashSet;

#[test]
fn test_seed_identities_have_unique_ids() {
    let identities = seed::identities();
    let ids: HashSet<_> = identities.iter().map(|i| i.id).collect();

    assert_eq!(ids.len(), identities.len());
}

#[test]
fn test_seed_demo_accounts() {
    let identities = seed::identities();

    let admin = identities
        .iter()
        .find(|i| i.email == seed::ADMIN_EMAIL)
        .unwrap();
    assert_eq!(admin.role, UserRole::Admin);
    assert_eq!(admin.employee_id, "EMP001");

    let employee = identities
        .iter()
        .find(|i| i.email == seed::EMPLOYEE_EMAIL)
        .unwrap();
    assert_eq!(employee.role, UserRole::Employee);
    assert_eq!(employee.department, "Engineering");
}

#[test]
fn test_seed_only_demo_accounts_can_sign_in() {
    let accounts: Vec<_> = seed::accounts().into_iter().map(|i| i.email).collect();
    assert_eq!(accounts, vec![seed::ADMIN_EMAIL, seed::EMPLOYEE_EMAIL]);

    let staff = seed::staff();
    assert_eq!(staff.len(), 3);
    assert!(staff.iter().all(|i| !accounts.contains(&i.email)));
    assert_eq!(seed::identities().len(), accounts.len() + staff.len());
}

#[test]
fn test_seed_leave_requests_reference_seeded_identities() {
    let ids: HashSet<_> = seed::identities().iter().map(|i| i.id).collect();

    for request in seed::leave_requests() {
        assert!(ids.contains(&request.user_id), "{request:?}");
        assert!(request.end_date >= request.start_date);
    }
}

#[test]
fn test_seed_leave_requests_pending_count() {
    let pending = seed::leave_requests()
        .iter()
        .filter(|r| r.status == LeaveStatus::Pending)
        .count();

    assert_eq!(pending, 4);
}

#[test]
fn test_parse_date() {
    let date = parse_date("2024-02-15", "start_date").unwrap();
    assert_eq!(date.to_string(), "2024-02-15");

    let err = parse_date("15/02/2024", "start_date").unwrap_err();
    assert!(err.to_string().contains("start_date"));
}
