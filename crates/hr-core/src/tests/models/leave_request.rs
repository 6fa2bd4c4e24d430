use crate::{CoreError, LeaveDecision, LeaveRequest, LeaveStatus, LeaveType, seed};

use chrono::NaiveDate;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn pending_request() -> LeaveRequest {
    let requester = &seed::identities()[1];
    LeaveRequest::new(
        requester,
        LeaveType::Paid,
        date(3, 4),
        date(3, 6),
        "Conference".to_string(),
        date(3, 1),
    )
    .unwrap()
}

#[test]
fn test_leave_request_new_is_pending() {
    let request = pending_request();

    assert_eq!(request.status, LeaveStatus::Pending);
    assert_eq!(request.user_id, seed::EMPLOYEE_ID);
    assert_eq!(request.user_name, "Michael Chen");
    assert!(request.admin_comment.is_none());
    assert_eq!(request.days(), 3);
}

#[test]
fn test_leave_request_single_day_counts_one() {
    let requester = &seed::identities()[1];
    let request = LeaveRequest::new(
        requester,
        LeaveType::Sick,
        date(3, 4),
        date(3, 4),
        "Dentist".to_string(),
        date(3, 1),
    )
    .unwrap();

    assert_eq!(request.days(), 1);
}

#[test]
fn test_leave_request_rejects_inverted_range() {
    let requester = &seed::identities()[1];
    let result = LeaveRequest::new(
        requester,
        LeaveType::Paid,
        date(3, 6),
        date(3, 4),
        "Backwards".to_string(),
        date(3, 1),
    );

    match result {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("end_date")),
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[test]
fn test_leave_request_rejects_blank_reason() {
    let requester = &seed::identities()[1];
    let result = LeaveRequest::new(
        requester,
        LeaveType::Paid,
        date(3, 4),
        date(3, 4),
        "   ".to_string(),
        date(3, 1),
    );

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_leave_request_decide_once() {
    let mut request = pending_request();

    request.decide(LeaveDecision::Approve, "Enjoy").unwrap();
    assert_eq!(request.status, LeaveStatus::Approved);
    assert_eq!(request.admin_comment.as_deref(), Some("Enjoy"));

    assert!(request.decide(LeaveDecision::Reject, "Changed my mind").is_err());
    assert_eq!(request.status, LeaveStatus::Approved);
}
