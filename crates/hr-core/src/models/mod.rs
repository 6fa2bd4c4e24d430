pub mod attendance_day;
pub mod attendance_status;
pub mod identity;
pub mod leave_balance;
pub mod leave_request;
pub mod leave_status;
pub mod leave_type;
pub mod payroll_record;
pub mod payroll_status;
pub mod salary_breakdown;
pub mod user_role;
