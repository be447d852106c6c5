mod cli;

use tasklist_tui::app::AppState;
use tasklist_tui::config::Config;
use tasklist_tui::todo::TaskBoard;
use tasklist_tui::ui;
use tasklist_tui::ui::theme::Theme;
use tasklist_tui::utils::paths::{get_config_path, get_crash_log_path, get_logs_dir};

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use cli::Cli;
use std::fs;
use std::io::Write;
use std::panic;

/// Install a panic hook that writes crash information to a log file
fn install_crash_handler() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if let Ok(crash_log_path) = get_crash_log_path() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut crash_report = format!("=== CRASH at {} ===\n", timestamp);

            if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
                crash_report.push_str(&format!("Message: {}\n", message));
            } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
                crash_report.push_str(&format!("Message: {}\n", message));
            }

            if let Some(location) = panic_info.location() {
                crash_report.push_str(&format!(
                    "Location: {}:{}:{}\n",
                    location.file(),
                    location.line(),
                    location.column()
                ));
            }

            crash_report.push_str(&format!(
                "\nBacktrace:\n{}\n\n",
                std::backtrace::Backtrace::force_capture()
            ));

            if let Some(parent) = crash_log_path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(mut file) = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log_path)
            {
                let _ = file.write_all(crash_report.as_bytes());
                eprintln!("\nCrash logged to: {}", crash_log_path.display());
            }
        }

        default_hook(panic_info);
    }));
}

/// Log to ~/.tasklist-tui/logs/tasklist.log so nothing is written over the
/// terminal the view owns. Level comes from RUST_LOG (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = get_logs_dir().ok()?;

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "tasklist.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

fn main() -> Result<()> {
    install_crash_handler();

    let cli = Cli::parse();

    // Guard must stay alive until exit so buffered log lines are flushed.
    let _log_guard = init_file_logging();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(theme) = cli.theme {
        if !Theme::is_known(&theme) {
            eprintln!("Warning: Unknown theme '{}', using default", theme);
        }
        config.theme = theme;
    }
    if cli.no_mouse {
        config.mouse = false;
    }

    if cli.init_config {
        let path = match cli.config {
            Some(path) => path,
            None => get_config_path()?,
        };
        config.save_to(&path)?;
        tracing::info!(path = %path.display(), "Wrote config");
        println!("Wrote config to {}", path.display());
        return Ok(());
    }

    tracing::info!(theme = %config.theme, mouse = config.mouse, "tasklist starting");

    let mut board = TaskBoard::new();
    for label in &cli.tasks {
        if board.add(label).is_none() {
            tracing::warn!("Skipping blank --task value");
        }
    }

    let theme = Theme::from_config(&config);
    let state = AppState::new(board, theme, &config);

    let state = ui::run_tui(state, config.mouse)?;

    tracing::info!(
        tasks = state.board.len(),
        done = state.board.tasks().done_count(),
        "tasklist exiting"
    );

    Ok(())
}
