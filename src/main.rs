use anyhow::{Context, Result};
use campaign_browser::app::App;
use campaign_browser::cli::Cli;
use campaign_browser::services::HttpCampaignSource;
use campaign_browser::styles::init_theme;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    // Subcommands print to stdout and never start the TUI
    if cli.command.is_some() {
        return cli.execute();
    }

    let log_dir = campaign_browser::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("campaign-browser.log");

    let filter = match cli.log_level.as_deref() {
        Some(level) => tracing_subscriber::EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log filter: {}", level))?,
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };

    let file_appender = tracing_appender::rolling::never(&log_dir, "campaign-browser.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let config = cli.load_config()?;
    init_theme(config.theme_type());

    let source = HttpCampaignSource::new(&config.endpoint, config.request_timeout())?;
    info!("Using campaign endpoint {}", source.endpoint());

    let mut app = App::new(config, Arc::new(source))?;
    let result = app.run();

    drop(app);
    drop(guard);

    result
}
