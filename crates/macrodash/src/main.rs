use clap::{Parser, ValueEnum};
use macrodash::config::DashboardConfig;
use macrodash::state::{AppState, Dashboard};
use macrodash::{App, init_logging};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DashboardArg {
    /// Aggregate demand / aggregate supply explorer
    AdAs,
    /// IS-LM explorer
    IsLm,
}

impl From<DashboardArg> for Dashboard {
    fn from(arg: DashboardArg) -> Self {
        match arg {
            DashboardArg::AdAs => Dashboard::AdAs,
            DashboardArg::IsLm => Dashboard::IsLm,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "macrodash")]
#[command(about = "Interactive AD-AS and IS-LM macroeconomics dashboards for the terminal")]
struct Args {
    /// Dashboard to open first
    #[arg(long, value_enum, default_value = "ad-as")]
    dashboard: DashboardArg,

    /// Path to the data directory (default: ~/.macrodash/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".macrodash")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = DashboardConfig::load_or_default(&data_dir);
    let mut app = App::new(AppState::new(&config, args.dashboard.into()));

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
