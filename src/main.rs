//! folio binary entrypoint kept minimal. The runtime lives in `folio::app`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use folio::args::{self, Args};
use folio::gallery::load_page;
use folio::state::AppState;

/// Log timestamps in local time via `folio::util::now_timestamp`.
struct FolioTimer;

impl tracing_subscriber::fmt::time::FormatTime for FolioTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&folio::util::now_timestamp())
    }
}

/// Keeps the non-blocking log writer flushing until exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize tracing to `~/.config/folio/logs/folio.log`, falling back to stderr.
fn init_logging(level: &str, ansi: bool) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = folio::theme::logs_dir().join("folio.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(FolioTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr)
                .with_timer(FolioTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args::determine_log_level(&args), !args.no_color);
    tracing::info!(page = %args.page.display(), "folio starting");

    let page = match load_page(&args.page) {
        Ok(page) => page,
        Err(err) => {
            tracing::warn!(error = %err, "gallery not initialized");
            eprintln!("folio: {err}");
            return ExitCode::FAILURE;
        }
    };
    let settings = folio::theme::settings();
    let mut app = match AppState::new(page, settings) {
        Ok(app) => app,
        Err(err) => {
            tracing::warn!(error = %err, "gallery not initialized");
            eprintln!("folio: {}: {err}", args.page.display());
            return ExitCode::FAILURE;
        }
    };
    if !args::apply_startup_filters(&args, &mut app) {
        eprintln!(
            "folio: unknown category '{}'; showing all",
            args.category.as_deref().unwrap_or_default()
        );
    }

    if args.is_listing() {
        if args.json {
            match args::render_json(&app) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    tracing::error!(error = %err, "failed to serialize view");
                    eprintln!("folio: {err}");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            print!("{}", args::render_listing(&app, !args.no_color));
        }
        return ExitCode::SUCCESS;
    }

    if let Err(err) = folio::app::run(app).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("folio: {err}");
        return ExitCode::FAILURE;
    }
    tracing::info!("folio exited");
    ExitCode::SUCCESS
}
