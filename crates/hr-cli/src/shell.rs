//! Line shell over [`AppState`].
//!
//! Each input line is split (double quotes group words), parsed as a
//! [`ShellLine`] and dispatched. Every reply is one JSON document; failures
//! print an `{"error": ...}` document and the shell keeps going.

use crate::commands::{Commands, LeaveCommands, ProfileCommands, ShellLine};
use crate::{CliError, CliResult};

use hr_app::screens::{attendance, dashboard, employees, leave, payroll, profile, reports};
use hr_app::{AppState, CalendarMonth, EmployeeFilter, LeaveForm, navigation};
use hr_auth::{ProfileUpdate, SignupForm};
use hr_core::{LeaveDecision, parse_date};

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use clap::error::ErrorKind;
use log::{debug, info};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// What the shell does after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Blank line or comment
    Nothing,
    Output(String),
    Quit,
}

/// Split a line into words. `"two words"` stays one word; `\"` inside quotes
/// is a literal quote.
pub fn split_line(line: &str) -> CliResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_quotes = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_word = true;
            }
            '\\' if in_quotes => current.push(chars.next().unwrap_or('\\')),
            c if c.is_whitespace() && !in_quotes => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_quotes {
        return Err(CliError::usage("unterminated quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

pub struct Shell {
    state: AppState,
    pretty: bool,
}

impl Shell {
    pub fn new(state: AppState, pretty: bool) -> Self {
        Self { state, pretty }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Read lines until `quit` or end of input, writing one reply per line.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> CliResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            match self.handle_line(&line).await {
                Reply::Nothing => {}
                Reply::Output(text) => {
                    output.write_all(text.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                    output.flush().await?;
                }
                Reply::Quit => break,
            }
        }

        info!("Shell closed");
        Ok(())
    }

    pub async fn handle_line(&mut self, line: &str) -> Reply {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Reply::Nothing;
        }

        let words = match split_line(trimmed) {
            Ok(words) => words,
            Err(e) => return Reply::Output(self.render_error(&e)),
        };

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp) => {
                return Reply::Output(e.render().to_string());
            }
            Err(e) => {
                let message = e.render().to_string();
                let first_line = message.lines().next().unwrap_or_default();
                let usage = CliError::usage(first_line.trim_start_matches("error: "));
                return Reply::Output(self.render_error(&usage));
            }
        };

        if matches!(parsed.command, Commands::Quit) {
            return Reply::Quit;
        }

        debug!("> {}", words.first().map(String::as_str).unwrap_or_default());
        let now = Local::now().naive_local();
        let result = self.dispatch(parsed.command, now).await;
        Reply::Output(match result {
            Ok(value) => self.render(&value),
            Err(e) => self.render_error(&e),
        })
    }

    async fn dispatch(&mut self, command: Commands, now: NaiveDateTime) -> CliResult<Value> {
        let today = now.date();
        let state = &mut self.state;

        match command {
            Commands::Login { email, password } => {
                let identity = state.login(&email, &password).await?;
                to_json(&json!({
                    "identity": identity,
                    "navigation": navigation(identity.role),
                }))
            }
            Commands::Signup {
                employee_id,
                email,
                password,
                confirm_password,
                first_name,
                last_name,
                role,
            } => {
                let form = SignupForm {
                    employee_id,
                    email,
                    password,
                    confirm_password,
                    first_name,
                    last_name,
                    role: role.parse()?,
                };
                let identity = state.signup(form).await?;
                to_json(&json!({
                    "identity": identity,
                    "navigation": navigation(identity.role),
                }))
            }
            Commands::Logout => {
                state.logout();
                to_json(&state.session.state())
            }
            Commands::Whoami => to_json(&json!({
                "session": state.session.state(),
                "identity": state.session.current(),
            })),
            Commands::Open { path } => to_json(&state.open(&path)?),
            Commands::Nav => to_json(&navigation(state.identity()?.role)),
            Commands::Dashboard => to_json(&dashboard::view(state, now)?),
            Commands::Employees { query, department } => {
                let filter = EmployeeFilter { query, department };
                to_json(&employees::directory(state, &filter)?)
            }
            Commands::Attendance { month } => {
                let month = month
                    .map(|m| m.parse::<CalendarMonth>())
                    .transpose()?;
                to_json(&attendance::view(state, month, today)?)
            }
            Commands::CheckIn => to_json(&attendance::check_in(state, now)?),
            Commands::CheckOut => to_json(&attendance::check_out(state, now)?),
            Commands::Leave { action } => match action {
                LeaveCommands::List => to_json(&leave::view(state)?),
                LeaveCommands::Request {
                    leave_type,
                    start,
                    end,
                    reason,
                } => {
                    let form = LeaveForm {
                        leave_type: leave_type.parse()?,
                        start_date: parse_date(&start, "start_date")?,
                        end_date: parse_date(&end, "end_date")?,
                        reason,
                    };
                    to_json(&leave::request(state, form, today)?)
                }
                LeaveCommands::Approve { id, comment } => {
                    to_json(&leave::decide(state, id, LeaveDecision::Approve, comment)?)
                }
                LeaveCommands::Reject { id, comment } => {
                    to_json(&leave::decide(state, id, LeaveDecision::Reject, comment)?)
                }
            },
            Commands::Payroll => to_json(&payroll::view(state)?),
            Commands::Profile { action } => match action {
                ProfileCommands::Show => to_json(&profile::view(state)?),
                ProfileCommands::Edit { phone, address } => {
                    to_json(&profile::edit(state, ProfileUpdate { phone, address })?)
                }
            },
            Commands::Reports => to_json(&reports::view(state)?),
            Commands::Quit => Ok(Value::Null),
        }
    }

    fn render(&self, value: &Value) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        // A Value always serializes
        rendered.unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }

    fn render_error(&self, error: &CliError) -> String {
        debug!("Command failed: {error}");
        self.render(&error.to_json())
    }
}

fn to_json<T: Serialize>(value: &T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}
