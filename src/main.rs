use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use supply_calc::{notify_if_actionable, Notification, TracingNotifier};
use supply_core::spending::sort_chronologically;
use supply_core::value::parse_date_time;
use supply_core::DashboardConfig;
use supply_dashboard::DashboardSession;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "supply-dashboard",
    about = "Import supply spreadsheets, review spending and stock suggestions, export edits.",
    version
)]
struct Cli {
    /// Dashboard config (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reference time for delay checks (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS, default: now)
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Monthly spending totals
    Spending {
        /// Input spreadsheet (.xlsx, .xls, .ods, .csv)
        file: PathBuf,
        /// Sort by month instead of first appearance
        #[arg(long)]
        sorted: bool,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Low-stock and delivery-delay suggestions
    Suggest {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Answer a chat message about the supplies
    Chat { file: PathBuf, message: String },
    /// Edit one record and export the result
    Edit {
        file: PathBuf,
        /// Zero-based record index
        index: usize,
        field: String,
        value: String,
        /// Output file (default: <sheet_name>.xlsx)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Re-export a spreadsheet with the trailing note
    Export { input: PathBuf, output: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DashboardConfig::from_path(path)
            .with_context(|| format!("無法載入配置 {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    let reference = reference_time(cli.today.as_deref())?;

    match cli.command {
        Command::Spending { file, sorted, json } => {
            let session = load_session(&file, config)?;
            let mut points = session.monthly_spending();
            if sorted {
                sort_chronologically(&mut points);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                for point in &points {
                    println!("{}\t{}", point.month, point.amount);
                }
            }
        }
        Command::Suggest { file, json } => {
            let mut session = load_session(&file, config)?;
            let suggestions = session.refresh(reference).to_vec();

            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                println!("{}", suggestions.join("\n"));
            }

            notify_if_actionable(
                &TracingNotifier,
                &suggestions,
                &Notification::from_config(session.config()),
            );
        }
        Command::Chat { file, message } => {
            let mut session = load_session(&file, config)?;
            match session.send_chat(&message, reference) {
                Some(response) => println!("{}", response),
                None => println!("(no response)"),
            }
        }
        Command::Edit {
            file,
            index,
            field,
            value,
            output,
        } => {
            let mut session = load_session(&file, config)?;
            session
                .edit(index, &field, &value, reference)
                .with_context(|| format!("無法編輯 {}", file.display()))?;

            let output =
                output.unwrap_or_else(|| PathBuf::from(session.config().export_file_name()));
            supply_io::export_path(session.records(), &output, session.config())
                .with_context(|| format!("無法匯出 {}", output.display()))?;
            println!("{}", output.display());
        }
        Command::Export { input, output } => {
            let session = load_session(&input, config)?;
            supply_io::export_path(session.records(), &output, session.config())
                .with_context(|| format!("無法匯出 {}", output.display()))?;
            println!("{}", output.display());
        }
    }

    Ok(())
}

fn load_session(path: &Path, config: DashboardConfig) -> Result<DashboardSession> {
    let records = supply_io::import_path(path)
        .with_context(|| format!("無法匯入 {}", path.display()))?;
    Ok(DashboardSession::with_records(records, config))
}

/// 參考時間只在這裡讀取系統時鐘
fn reference_time(today: Option<&str>) -> Result<NaiveDateTime> {
    match today {
        Some(text) => parse_date_time(text).ok_or_else(|| anyhow!("無效的日期: {}", text)),
        None => Ok(chrono::Local::now().naive_local()),
    }
}
