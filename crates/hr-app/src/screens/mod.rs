pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod leave;
pub mod payroll;
pub mod profile;
pub mod reports;
