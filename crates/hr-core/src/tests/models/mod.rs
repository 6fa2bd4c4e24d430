mod identity;
mod leave_request;
mod payroll;
mod user_role;
