//! Logging infrastructure for Teamdeck.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use teamdeck_common_config::{vars, Environment};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Log file path (if file logging enabled).
    pub file_path: Option<PathBuf>,
    /// Include source location.
    pub source_location: bool,
    /// Include span events.
    pub span_events: bool,
    /// Raw `EnvFilter` directives; when set they replace `level`.
    pub directives: Option<String>,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing_subscriber::filter::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
            LogLevel::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
            LogLevel::Info => tracing_subscriber::filter::LevelFilter::INFO,
            LogLevel::Warn => tracing_subscriber::filter::LevelFilter::WARN,
            LogLevel::Error => tracing_subscriber::filter::LevelFilter::ERROR,
        }
    }
}

impl LogLevel {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Directive string understood by `EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON structured format.
    Json,
}

impl LogFormat {
    /// Parse from string; unknown values fall back to pretty.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            file_path: None,
            source_location: false,
            span_events: false,
            directives: None,
        }
    }
}

impl LogConfig {
    /// Build from the `logging` section of the YAML config.
    pub fn from_settings(level: &str, format: &str, file_path: Option<PathBuf>) -> Self {
        Self {
            level: LogLevel::parse(level).unwrap_or_default(),
            format: LogFormat::parse(format),
            file_path,
            ..Self::default()
        }
    }

    /// Override fields with any `TEAMDECK_LOG_*` variables that are set.
    ///
    /// `TEAMDECK_LOG_LEVEL` wins over `RUST_LOG`. A `RUST_LOG` value is kept
    /// whole as filter directives, so per-target settings survive.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(level) = Environment::get(vars::TEAMDECK_LOG_LEVEL) {
            if let Some(l) = LogLevel::parse(&level) {
                self = self.with_level(l);
            }
        } else if let Some(directives) = Environment::get(vars::RUST_LOG) {
            if let Some(l) = LogLevel::parse(&directives) {
                self.level = l;
            }
            self.directives = Some(directives);
        }

        if let Some(format) = Environment::get(vars::TEAMDECK_LOG_FORMAT) {
            self.format = LogFormat::parse(&format);
        }

        if let Some(file_path) = Environment::get(vars::TEAMDECK_LOG_FILE) {
            self.file_path = Some(PathBuf::from(file_path));
        }

        if let Some(source_location) = Environment::get_bool(vars::TEAMDECK_LOG_SOURCE) {
            self.source_location = source_location;
        }

        if let Some(span_events) = Environment::get_bool(vars::TEAMDECK_LOG_SPANS) {
            self.span_events = span_events;
        }

        self
    }

    /// Force a single level, discarding any `RUST_LOG` directives.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self.directives = None;
        self
    }

    /// The filter `init` installs.
    pub fn filter(&self) -> EnvFilter {
        self.directives
            .as_deref()
            .and_then(|d| EnvFilter::try_new(d).ok())
            .unwrap_or_else(|| EnvFilter::new(self.level.as_str()))
    }
}

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync + 'static>;

fn fmt_layer<W>(config: &LogConfig, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let span_events = if config.span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    match config.format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(true)
            .with_file(config.source_location)
            .with_line_number(config.source_location)
            .with_span_events(span_events)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_span_events(span_events)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_span_events(span_events)
            .boxed(),
    }
}

/// Initialize logging with the given configuration.
///
/// Events go to stderr, and additionally to `file_path` (appended, no ANSI
/// colours) when one is configured. The filter comes from
/// [`LogConfig::filter`].
pub fn init(config: LogConfig) -> Result<(), LogError> {
    let filter = config.filter();

    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(&config, io::stderr, true)];

    if let Some(file_path) = &config.file_path {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        layers.push(fmt_layer(&config, Mutex::new(file), false));
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()
        .map_err(|e| LogError::InitError(e.to_string()))
}

/// Logging errors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to initialize logging: {0}")]
    InitError(String),

    #[error("failed to open log file: {0}")]
    FileError(#[from] io::Error),
}

/// Convenience macros re-exported from tracing.
pub use tracing::{debug, error, info, trace, warn};

/// Span helpers and timing.
pub mod spans;
