//! StaffHub - HR management core services
//!
//! Demo entry point: loads configuration, initializes logging, seeds an
//! in-memory store and walks through a day of HR activity (directory
//! lookup, leave decision, clock-in/clock-out, dashboard refresh).

use std::env;

use anyhow::{Context, Result};
use chrono::{FixedOffset, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use staffhub::config::LogFormat;
use staffhub::models::LeaveDecision;
use staffhub::services::{
    dashboard_aggregates, filter_employees, unique_positions, EmployeeFilter,
};
use staffhub::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("StaffHub {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration first, so logging knows its format
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config);

    info!("StaffHub starting up");

    let state = AppState::seeded(config).await;
    let store = &state.store;

    let employees = store.employees.get_all().await;
    let departments = store.departments.get_all().await;
    info!(
        employees = employees.len(),
        departments = departments.len(),
        "store seeded"
    );

    // Directory search, the way the directory view would run it
    let matches = filter_employees(&employees, &EmployeeFilter::search("ann"));
    for employee in &matches {
        info!(
            name = %employee.full_name(),
            department = %employee.department,
            "directory match for 'ann'"
        );
    }
    info!(positions = ?unique_positions(&employees), "role filter options");

    // Decide the oldest pending leave request
    let requests = store.leave_requests.get_all().await;
    if let Some(pending) = requests.iter().find(|r| r.approved_by.is_none()) {
        let decided = store
            .leave_requests
            .decide(pending.id, LeaveDecision::Approved, "HR Admin")
            .await?;
        info!(
            request_id = decided.id,
            status = %decided.status,
            "leave request decided"
        );
    }

    // One clock-in/clock-out cycle
    if let Some(employee) = employees.first() {
        let tz = FixedOffset::east_opt(2 * 3600).context("valid offset")?;
        let clock_in = Utc::now().with_timezone(&tz);
        let record = store.attendance.clock_in(employee.id, clock_in).await?;
        let record = store
            .attendance
            .clock_out(record.id, clock_in + chrono::Duration::hours(8))
            .await?;
        info!(
            employee = %employee.full_name(),
            status = %record.status,
            total_hours = record.total_hours,
            "attendance cycle complete"
        );
    }

    // Dashboard refresh
    let requests = store.leave_requests.get_all().await;
    let aggregates = dashboard_aggregates(&employees, &requests, &departments);
    info!(
        total_employees = aggregates.total_employees,
        active_leaves = aggregates.active_leaves,
        pending_requests = aggregates.pending_requests,
        total_departments = aggregates.total_departments,
        "dashboard aggregates"
    );

    info!("StaffHub demo run complete");
    Ok(())
}

/// Initialize logging based on configuration
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}

fn print_help() {
    println!("StaffHub {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("    staffhub [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    -h, --help       Print this help message");
    println!("    -V, --version    Print version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    STAFFHUB_CONFIG              Path to the YAML config file");
    println!("    STAFFHUB_SIMULATE_LATENCY    true/false, override latency simulation");
    println!("    STAFFHUB_LOG_FORMAT          text or json");
    println!("    RUST_LOG                     Log level filter");
}
