use clap::Parser;
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use iem_reports_core::{find_config_file, load_config, ConfigSource, DEFAULT_REPORTS_PORT};
use log::LevelFilter;
use std::env;
use time::{format_description::well_known::Iso8601, OffsetDateTime};

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "IEM Reports - precipitation, climate extremes and data request pages"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $IEM_REPORTS_CONFIG, ./reports.toml,
    /// $XDG_CONFIG_HOME/iem-reports/reports.toml, /etc/iem-reports/reports.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "IEM_REPORTS_LEVEL")]
    pub level: Option<String>,

    /// Host to listen on (use 0.0.0.0 for all interfaces)
    #[arg(long, env = "IEM_REPORTS_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "IEM_REPORTS_PORT")]
    pub port: Option<String>,

    /// Public URL of the service
    #[arg(short, long, env = "IEM_REPORTS_REMOTE_URL")]
    pub remote_url: Option<String>,

    /// Observation database (SQLite file), opened read-only
    #[arg(short, long, env = "IEM_REPORTS_DATABASE")]
    pub database: Option<String>,

    /// Directory containing UI static files
    #[arg(short, long, env = "IEM_REPORTS_UI_DIR")]
    pub ui_dir: Option<String>,

    /// Bulk download service the request forms hand off to
    #[arg(long, env = "IEM_REPORTS_DOWNLOAD_URL")]
    pub download_url: Option<String>,

    /// Network of the precipitation report
    #[arg(long, env = "IEM_REPORTS_ASOS_NETWORK")]
    pub asos_network: Option<String>,

    /// Network holding the climate stations of the extremes chart
    #[arg(long, env = "IEM_REPORTS_CLIMATE_NETWORK")]
    pub climate_network: Option<String>,

    /// Network listed on the soil moisture request forms
    #[arg(long, env = "IEM_REPORTS_ISUSM_NETWORK")]
    pub isusm_network: Option<String>,
}

impl Cli {
    pub fn host(&self) -> String {
        self.host.clone().unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> String {
        self.port
            .clone()
            .unwrap_or_else(|| DEFAULT_REPORTS_PORT.to_string())
    }

    pub fn remote_url(&self) -> String {
        self.remote_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host(), self.port()))
    }

    pub fn database(&self) -> String {
        self.database
            .clone()
            .unwrap_or_else(|| "./iem.sqlite".to_string())
    }

    pub fn static_dir(&self) -> String {
        self.ui_dir.clone().unwrap_or_else(|| "./static".to_string())
    }

    pub fn download_url(&self) -> String {
        self.download_url
            .clone()
            .unwrap_or_else(|| "/cgi-bin/request/isusm.py".to_string())
    }

    pub fn networks(&self) -> Networks {
        Networks {
            asos: self
                .asos_network
                .clone()
                .unwrap_or_else(|| "IA_ASOS".to_string()),
            climate: self
                .climate_network
                .clone()
                .unwrap_or_else(|| "IACLIMATE".to_string()),
            isusm: self.isusm_network.clone().unwrap_or_else(|| "ISUSM".to_string()),
        }
    }
}

/// Station networks backing each report
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Networks {
    pub asos: String,
    pub climate: String,
    pub isusm: String,
}

impl Default for Networks {
    fn default() -> Self {
        Cli::default().networks()
    }
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    let cli_args = Cli::parse();

    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("IEM_REPORTS_CONFIG", "reports.toml")
    };

    if let Some(path) = source.path() {
        log::info!("Loading config from: {}", path.display());
    }

    let file_config: Cli = load_config(&source).unwrap_or_default();
    merge(cli_args, file_config)
}

/// CLI args override file config (env vars are handled by clap)
fn merge(cli_args: Cli, file_config: Cli) -> Cli {
    Cli {
        config: cli_args.config,
        level: cli_args.level.or(file_config.level),
        host: cli_args.host.or(file_config.host),
        port: cli_args.port.or(file_config.port),
        remote_url: cli_args.remote_url.or(file_config.remote_url),
        database: cli_args.database.or(file_config.database),
        ui_dir: cli_args.ui_dir.or(file_config.ui_dir),
        download_url: cli_args.download_url.or(file_config.download_url),
        asos_network: cli_args.asos_network.or(file_config.asos_network),
        climate_network: cli_args.climate_network.or(file_config.climate_network),
        isusm_network: cli_args.isusm_network.or(file_config.isusm_network),
    }
}

pub fn get_log_level(cli: &Cli) -> LevelFilter {
    let level_str = cli
        .level
        .clone()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    match level_str.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logger() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}: {}",
                OffsetDateTime::now_utc()
                    .format(&Iso8601::DEFAULT)
                    .unwrap_or_default(),
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .chain(std::io::stdout())
}
