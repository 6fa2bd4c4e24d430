use crate::{Identity, UNASSIGNED, UserRole, seed};

use chrono::NaiveDate;

fn joined() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

#[test]
fn test_identity_registered_uses_placeholders() {
    let identity = Identity::registered(
        "E9".to_string(),
        "x@x.com".to_string(),
        "Ada".to_string(),
        "Lovelace".to_string(),
        UserRole::Employee,
        joined(),
    );

    assert_eq!(identity.department, UNASSIGNED);
    assert_eq!(identity.position, UNASSIGNED);
    assert_eq!(identity.salary, 0);
    assert_eq!(identity.joining_date, joined());
    assert!(identity.phone.is_none());
    assert!(identity.address.is_none());
}

#[test]
fn test_identity_registered_ids_are_unique() {
    let make = || {
        Identity::registered(
            "E9".to_string(),
            "x@x.com".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            UserRole::Employee,
            joined(),
        )
    };

    assert_ne!(make().id, make().id);
}

#[test]
fn test_identity_names() {
    let admin = &seed::identities()[0];

    assert_eq!(admin.full_name(), "Sarah Johnson");
    assert_eq!(admin.initials(), "SJ");
    assert!(admin.is_admin());
}

#[test]
fn test_identity_monthly_salary_rounds() {
    let mut identity = seed::identities()[0].clone();
    assert_eq!(identity.monthly_salary(), 7_083);

    identity.salary = 75_000;
    assert_eq!(identity.monthly_salary(), 6_250);

    identity.salary = 0;
    assert_eq!(identity.monthly_salary(), 0);
}
