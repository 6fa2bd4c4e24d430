//! Demo directory loaded at startup.
//!
//! Every screen reads from these records; nothing here is persisted. Only
//! [`accounts`] can sign in; [`staff`] only appear in the directory.

use crate::{
    Identity, LeaveRequest, LeaveStatus, LeaveType, PayrollRecord, PayrollStatus,
    SalaryBreakdown, UserRole,
};

use chrono::NaiveDate;
use uuid::Uuid;

pub const ADMIN_EMAIL: &str = "admin@company.com";
pub const EMPLOYEE_EMAIL: &str = "employee@company.com";

pub const ADMIN_ID: Uuid = Uuid::from_u128(1);
pub const EMPLOYEE_ID: Uuid = Uuid::from_u128(2);
pub const EMILY_ID: Uuid = Uuid::from_u128(3);
pub const JAMES_ID: Uuid = Uuid::from_u128(4);
pub const THOMPSON_ID: Uuid = Uuid::from_u128(5);

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

#[allow(clippy::too_many_arguments)]
fn person(
    id: Uuid,
    employee_id: &str,
    email: &str,
    (first_name, last_name): (&str, &str),
    role: UserRole,
    (department, position): (&str, &str),
    phone: &str,
    joining_date: NaiveDate,
    salary: u64,
) -> Identity {
    Identity {
        id,
        employee_id: employee_id.to_string(),
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        role,
        department: department.to_string(),
        position: position.to_string(),
        avatar: None,
        phone: Some(phone.to_string()),
        address: None,
        joining_date,
        salary,
    }
}

/// The demo login accounts. Only these are in the session store at startup.
pub fn accounts() -> Vec<Identity> {
    let mut admin = person(
        ADMIN_ID,
        "EMP001",
        ADMIN_EMAIL,
        ("Sarah", "Johnson"),
        UserRole::Admin,
        ("Human Resources", "HR Manager"),
        "+1 (555) 123-4567",
        const { ymd(2020, 3, 15) },
        85_000,
    );
    admin.address = Some("123 Corporate Ave, Suite 100".to_string());

    let mut employee = person(
        EMPLOYEE_ID,
        "EMP002",
        EMPLOYEE_EMAIL,
        ("Michael", "Chen"),
        UserRole::Employee,
        ("Engineering", "Software Developer"),
        "+1 (555) 987-6543",
        const { ymd(2022, 6, 1) },
        75_000,
    );
    employee.address = Some("456 Tech Street, Apt 201".to_string());

    vec![admin, employee]
}

/// Directory records with no login.
pub fn staff() -> Vec<Identity> {
    vec![
        person(
            EMILY_ID,
            "EMP003",
            "emily.rodriguez@company.com",
            ("Emily", "Rodriguez"),
            UserRole::Employee,
            ("Marketing", "Marketing Specialist"),
            "+1 (555) 456-7890",
            const { ymd(2021, 9, 10) },
            65_000,
        ),
        person(
            JAMES_ID,
            "EMP004",
            "james.wilson@company.com",
            ("James", "Wilson"),
            UserRole::Employee,
            ("Finance", "Financial Analyst"),
            "+1 (555) 321-0987",
            const { ymd(2023, 1, 15) },
            70_000,
        ),
        person(
            THOMPSON_ID,
            "EMP005",
            "sarah.thompson@company.com",
            ("Sarah", "Thompson"),
            UserRole::Employee,
            ("Engineering", "Senior Developer"),
            "+1 (555) 654-3210",
            const { ymd(2019, 8, 20) },
            95_000,
        ),
    ]
}

/// Full demo directory: [`accounts`] followed by [`staff`].
pub fn identities() -> Vec<Identity> {
    let mut identities = accounts();
    identities.extend(staff());
    identities
}

#[allow(clippy::too_many_arguments)]
fn request(
    n: u128,
    user_id: Uuid,
    user_name: &str,
    leave_type: LeaveType,
    (start_date, end_date): (NaiveDate, NaiveDate),
    reason: &str,
    status: LeaveStatus,
    admin_comment: Option<&str>,
    created_on: NaiveDate,
) -> LeaveRequest {
    LeaveRequest {
        id: Uuid::from_u128(100 + n),
        user_id,
        user_name: user_name.to_string(),
        leave_type,
        start_date,
        end_date,
        reason: reason.to_string(),
        status,
        admin_comment: admin_comment.map(str::to_string),
        created_on,
    }
}

/// Seeded leave history: the demo employee's own requests followed by the
/// approvals queue of the rest of the team.
pub fn leave_requests() -> Vec<LeaveRequest> {
    vec![
        request(
            1,
            EMPLOYEE_ID,
            "Michael Chen",
            LeaveType::Paid,
            (const { ymd(2024, 2, 15) }, const { ymd(2024, 2, 17) }),
            "Family vacation",
            LeaveStatus::Approved,
            Some("Approved. Enjoy your trip!"),
            const { ymd(2024, 2, 1) },
        ),
        request(
            2,
            EMPLOYEE_ID,
            "Michael Chen",
            LeaveType::Sick,
            (const { ymd(2024, 2, 20) }, const { ymd(2024, 2, 21) }),
            "Not feeling well, need rest",
            LeaveStatus::Pending,
            None,
            const { ymd(2024, 2, 18) },
        ),
        request(
            3,
            EMPLOYEE_ID,
            "Michael Chen",
            LeaveType::Unpaid,
            (const { ymd(2024, 1, 10) }, const { ymd(2024, 1, 10) }),
            "Personal matters",
            LeaveStatus::Rejected,
            Some("Team meeting scheduled on this day"),
            const { ymd(2024, 1, 5) },
        ),
        request(
            4,
            EMILY_ID,
            "Emily Rodriguez",
            LeaveType::Paid,
            (const { ymd(2024, 2, 25) }, const { ymd(2024, 2, 28) }),
            "Annual family vacation planned months ago. Will ensure all handovers are complete.",
            LeaveStatus::Pending,
            None,
            const { ymd(2024, 2, 18) },
        ),
        request(
            5,
            JAMES_ID,
            "James Wilson",
            LeaveType::Sick,
            (const { ymd(2024, 2, 20) }, const { ymd(2024, 2, 21) }),
            "Recovering from flu, doctor advised rest.",
            LeaveStatus::Pending,
            None,
            const { ymd(2024, 2, 19) },
        ),
        request(
            6,
            THOMPSON_ID,
            "Sarah Thompson",
            LeaveType::Unpaid,
            (const { ymd(2024, 3, 1) }, const { ymd(2024, 3, 5) }),
            "Need to attend to urgent family matters out of state.",
            LeaveStatus::Pending,
            None,
            const { ymd(2024, 2, 17) },
        ),
    ]
}

/// Most recent month first.
pub fn payroll_history() -> Vec<PayrollRecord> {
    vec![
        PayrollRecord::new(1, 2024, 5_000, 1_500, 500, PayrollStatus::Paid),
        PayrollRecord::new(12, 2023, 5_000, 1_500, 500, PayrollStatus::Paid),
        PayrollRecord::new(11, 2023, 5_000, 1_500, 500, PayrollStatus::Paid),
        PayrollRecord::new(10, 2023, 5_000, 1_400, 480, PayrollStatus::Paid),
        PayrollRecord::new(9, 2023, 5_000, 1_400, 480, PayrollStatus::Paid),
    ]
}

pub fn salary_breakdown() -> SalaryBreakdown {
    SalaryBreakdown {
        basic: 5_000,
        house_rent: 800,
        transport: 300,
        medical: 200,
        special: 200,
        income_tax: 400,
        provident_fund: 100,
    }
}
