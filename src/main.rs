use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_appender::rolling;

use hrms_lite::ApiError;
use hrms_lite::api::ApiClient;
use hrms_lite::api::attendance::AttendanceFilters;
use hrms_lite::config::Config;
use hrms_lite::model::attendance::{AttendanceRecord, AttendanceStatus};
use hrms_lite::model::employee::NewEmployee;
use hrms_lite::state::attendance::{AttendanceScreen, AttendanceState, MarkRequest};
use hrms_lite::state::dashboard::DashboardState;
use hrms_lite::state::employees::EmployeesState;
use hrms_lite::state::feedback::{Feedback, FeedbackKind};
use hrms_lite::utils::date_range::{
    DateRange, PresetKey, Presets, compute_presets, format_display, format_display_date,
    local_today, parse_date_string,
};
use hrms_lite::utils::validation::{MarkAttendanceForm, validate_new_employee};

#[derive(Parser)]
#[command(name = "hrms")]
#[command(about = "HRMS Lite: employees, attendance and daily stats", long_about = None)]
struct Cli {
    /// Backend base URL, overrides API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that the backend is reachable
    Health,
    /// Today's headline counts
    Dashboard,
    /// Manage the employee roster
    #[command(subcommand)]
    Employees(EmployeesCommand),
    /// Mark, update and filter attendance
    #[command(subcommand)]
    Attendance(AttendanceCommand),
}

#[derive(Subcommand)]
enum EmployeesCommand {
    List,
    Show {
        employee_id: String,
    },
    Add {
        #[arg(long)]
        employee_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        department: String,
    },
    Delete {
        employee_id: String,
    },
}

#[derive(Subcommand)]
enum AttendanceCommand {
    List {
        /// Restrict to these employees (repeatable)
        #[arg(long = "employee")]
        employees: Vec<String>,
        /// Named range: today, thisWeek, thisMonth, lastMonth, thisYear, lastYear, all
        #[arg(long, value_parser = parse_named_preset, conflicts_with_all = ["from", "to"])]
        preset: Option<PresetKey>,
        #[arg(long, value_parser = parse_date_string)]
        from: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date_string)]
        to: Option<NaiveDate>,
        #[arg(long)]
        status: Option<AttendanceStatus>,
    },
    /// Full history of one employee
    Employee {
        employee_id: String,
    },
    Mark {
        /// Employees to mark (repeatable)
        #[arg(long = "employee")]
        employees: Vec<String>,
        /// Defaults to today
        #[arg(long, value_parser = parse_date_string)]
        date: Option<NaiveDate>,
        #[arg(long, default_value_t = AttendanceStatus::Present)]
        status: AttendanceStatus,
    },
    Update {
        id: i64,
        #[arg(long)]
        status: AttendanceStatus,
    },
    /// Show the preset ranges as of today
    Presets,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // Rolling daily log, stdout is reserved for command output
    let file_appender = rolling::daily(&config.log_dir, "hrms.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let api_url = cli.api_url.unwrap_or(config.api_url);
    let client = ApiClient::new(&api_url, Duration::from_secs(config.http_timeout_secs))
        .context("Failed to build HTTP client")?;
    info!(api_url = %client.base_url(), "Client ready");

    match cli.command {
        Command::Health => {
            let health = client.health().await?;
            println!("{} ({})", health.status, client.base_url());
        }
        Command::Dashboard => dashboard(&client).await?,
        Command::Employees(cmd) => employees(&client, cmd).await?,
        Command::Attendance(cmd) => attendance(&client, cmd).await?,
    }

    Ok(())
}

async fn dashboard(client: &ApiClient) -> Result<()> {
    let today = local_today();
    let mut state = DashboardState::default();
    state.refresh(client, today).await?;

    let stats = state.stats_or_default();
    println!("Dashboard for {}", format_display_date(today));
    println!("  Total employees  {}", stats.total_employees);
    println!("  Present today    {}", stats.present_today);
    println!("  Absent today     {}", stats.absent_today);
    println!("  Not yet marked   {}", stats.unmarked_today());
    Ok(())
}

async fn employees(client: &ApiClient, cmd: EmployeesCommand) -> Result<()> {
    let mut state = EmployeesState::default();

    match cmd {
        EmployeesCommand::List => {
            state.refresh(client).await?;
            if state.employees.is_empty() {
                println!("No employees yet. Add one with `hrms employees add`.");
            }
            for e in &state.employees {
                println!(
                    "{:<12} {:<24} {:<28} {}",
                    e.employee_id, e.full_name, e.email, e.department
                );
            }
        }
        EmployeesCommand::Show { employee_id } => {
            let e = client.get_employee(&employee_id).await?;
            println!("{} {}", e.employee_id, e.full_name);
            println!("  email       {}", e.email);
            println!("  department  {}", e.department);
        }
        EmployeesCommand::Add {
            employee_id,
            name,
            email,
            department,
        } => {
            let form = NewEmployee {
                employee_id,
                full_name: name,
                email,
                department,
            };
            let new = match validate_new_employee(&form) {
                Ok(new) => new,
                Err(errors) => {
                    for e in &errors {
                        eprintln!("  {}", e);
                    }
                    anyhow::bail!("Employee form has {} invalid field(s)", errors.len());
                }
            };
            let outcome = state.add(client, &new).await;
            report(outcome, |_| Some(Feedback::success("Employee added successfully")))?;
        }
        EmployeesCommand::Delete { employee_id } => {
            let outcome = state.remove(client, &employee_id).await;
            report(outcome, |_| Some(Feedback::success("Employee deleted successfully")))?;
        }
    }

    Ok(())
}

async fn attendance(client: &ApiClient, cmd: AttendanceCommand) -> Result<()> {
    match cmd {
        AttendanceCommand::List {
            employees,
            preset,
            from,
            to,
            status,
        } => {
            let mut screen = AttendanceScreen::new(AttendanceFilters {
                employee_ids: employees,
                range: DateRange::new(from, to),
                status,
            });
            let today = local_today();
            if let Some(key) = preset {
                if !screen.select_preset(key, today) {
                    anyhow::bail!("A custom range is set with --from and --to, not --preset");
                }
            }
            screen.load(client).await?;

            let presets = compute_presets(today);
            let active = screen.active_preset(&presets);
            println!("Range: {} [{}]", screen.range_display(), active.label());
            print_summary(&screen.attendance);
            if screen.attendance.records.is_empty() {
                println!("No attendance records. {}", screen.empty_message());
            }
            print_records(&screen.attendance.records);
        }
        AttendanceCommand::Employee { employee_id } => {
            let list = client.employee_attendance(&employee_id).await?;
            let mut state = AttendanceState::default();
            state.apply_list(list);
            print_records(&state.records);
        }
        AttendanceCommand::Mark {
            employees,
            date,
            status,
        } => {
            let today = local_today();
            let form = MarkAttendanceForm {
                employee_ids: employees,
                date: date.or(Some(today)),
                status,
            };
            let request = match form.validate(today) {
                Ok(request) => request,
                Err(errors) => {
                    for e in &errors {
                        eprintln!("  {}", e);
                    }
                    anyhow::bail!("Attendance form has {} invalid field(s)", errors.len());
                }
            };

            let mut state = AttendanceState::default();
            let outcome = state.mark(client, &MarkRequest::Bulk(request)).await;
            report(outcome, |o| o.feedback())?;
            print_records(&state.records);
        }
        AttendanceCommand::Update { id, status } => {
            let mut state = AttendanceState::default();
            let outcome = state.edit(client, id, status).await;
            let feedback = Feedback::success("Attendance updated successfully");
            let updated = report(outcome, |_| Some(feedback))?;
            print_records(std::slice::from_ref(&updated));
        }
        AttendanceCommand::Presets => print_presets(&Presets::current()),
    }

    Ok(())
}

/// `--preset` takes the named ranges only; `custom` comes from `--from`/`--to`.
fn parse_named_preset(value: &str) -> Result<PresetKey, String> {
    match value.parse::<PresetKey>() {
        Ok(PresetKey::Custom) => Err("use --from/--to for a custom range".to_string()),
        Ok(key) => Ok(key),
        Err(e) => Err(e.to_string()),
    }
}

/// Prints the success notice for a write; failures propagate to `main`.
fn report<T>(
    outcome: Result<T, ApiError>,
    feedback: impl FnOnce(&T) -> Option<Feedback>,
) -> Result<T> {
    let value = outcome?;
    if let Some(feedback) = feedback(&value) {
        match feedback.kind {
            FeedbackKind::Success => println!("{}", feedback.message),
            FeedbackKind::Error => eprintln!("{}", feedback.message),
        }
    }
    Ok(value)
}

fn print_summary(state: &AttendanceState) {
    println!(
        "Total records {}   Present {}   Absent {}",
        state.summary.total(),
        state.summary.present,
        state.summary.absent
    );
}

fn print_records(records: &[AttendanceRecord]) {
    for r in records {
        println!(
            "{:>6}  {:<14} {:<12} {:<24} {}",
            r.id,
            format_display_date(r.date),
            r.employee_id,
            r.employee_name.as_deref().unwrap_or("-"),
            r.status
        );
    }
}

fn print_presets(presets: &Presets) {
    println!("Presets as of {}", format_display_date(presets.today()));
    for p in presets.iter() {
        if p.key == PresetKey::Custom {
            continue;
        }
        println!("  {:<10} {:<11} {}", p.key.as_ref(), p.label, format_display(&p.range));
    }
}
