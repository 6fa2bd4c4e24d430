use clap::{Parser, Subcommand};
use uuid::Uuid;

/// One line typed into the shell.
#[derive(Parser)]
#[command(name = "hr", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with email and password
    Login { email: String, password: String },

    /// Register a new identity and sign in as it
    Signup {
        #[arg(long)]
        employee_id: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        /// Role: admin or employee (default: employee)
        #[arg(long, value_parser = ["admin", "employee"], default_value = "employee")]
        role: String,
    },

    /// End the session
    Logout,

    /// Show the session state and active identity
    Whoami,

    /// Navigate to a screen path through the route guard
    Open { path: String },

    /// Sidebar entries for the active role
    Nav,

    Dashboard,

    /// Search the employee directory
    Employees {
        #[arg(long, default_value = "")]
        query: String,

        /// Department name, or "all"
        #[arg(long)]
        department: Option<String>,
    },

    /// Attendance calendar for a month (default: current)
    Attendance {
        /// Month as YYYY-MM
        #[arg(long)]
        month: Option<String>,
    },

    CheckIn,

    CheckOut,

    /// Leave requests and approvals
    Leave {
        #[command(subcommand)]
        action: LeaveCommands,
    },

    Payroll,

    /// View or edit the active profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    Reports,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand)]
pub enum LeaveCommands {
    /// Own requests, or the approvals queue for admins
    List,

    /// Request time off
    Request {
        /// Leave type: paid, sick, or unpaid
        #[arg(long = "type", value_parser = ["paid", "sick", "unpaid"])]
        leave_type: String,

        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: String,

        /// Last day (inclusive), YYYY-MM-DD
        #[arg(long)]
        end: String,

        #[arg(long)]
        reason: String,
    },

    /// Approve a pending request
    Approve {
        id: Uuid,

        #[arg(long, default_value = "")]
        comment: String,
    },

    /// Reject a pending request
    Reject {
        id: Uuid,

        #[arg(long, default_value = "")]
        comment: String,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    Show,

    /// Change contact details; an empty value clears the field
    Edit {
        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },
}
