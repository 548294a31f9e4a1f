use std::path::PathBuf;
use std::str::FromStr;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

use tracing::Level;
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::lazy_file_writer::LazyFileWriter;

/// Environment variable consulted for the log level when no flag is given
pub const LOG_LEVEL_VAR: &str = "NOTION_BRIDGE_LOG";

/// HTTP stack crates whose events never reach the output
const NOISY_TARGETS: [&str; 5] = ["reqwest::", "hyper", "h2::", "rustls::", "want::"];

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(2); // INFO until configured

/// Process-wide level filter that also drops third-party HTTP noise
#[derive(Clone)]
pub struct DynamicFilter;

impl<S> Layer<S> for DynamicFilter
where
    S: Subscriber,
{
    fn enabled(
        &self,
        metadata: &tracing::Metadata<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) -> bool {
        let target = metadata.target();
        if NOISY_TARGETS.iter().any(|prefix| target.starts_with(prefix)) {
            return false;
        }

        TracingLevel::from_level(*metadata.level()).as_u8() <= CURRENT_LEVEL.load(Ordering::Relaxed)
    }
}

/// Verbosity levels accepted on the command line and in [`LOG_LEVEL_VAR`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TracingLevel {
    /// Failures only
    Error,
    /// Failures and suspicious conditions
    Warn,
    /// Progress messages
    Info,
    /// Request-level detail
    Debug,
    /// Everything
    Trace,
}

impl FromStr for TracingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!(
                "Invalid tracing level '{s}' (expected one of: error, warn, info, debug, trace)"
            )),
        }
    }
}

impl TracingLevel {
    const fn as_u8(self) -> u8 {
        match self {
            Self::Error => 0,
            Self::Warn => 1,
            Self::Info => 2,
            Self::Debug => 3,
            Self::Trace => 4,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Error,
            1 => Self::Warn,
            3 => Self::Debug,
            4 => Self::Trace,
            _ => Self::Info,
        }
    }

    const fn from_level(level: Level) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            Level::DEBUG => Self::Debug,
            Level::TRACE => Self::Trace,
        }
    }

    /// Lowercase name of the level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Raise `self` by `steps` levels (one per `-v`), saturating at trace
    #[must_use]
    pub const fn raised_by(self, steps: u8) -> Self {
        let raised = self.as_u8().saturating_add(steps);
        if raised > Self::Trace.as_u8() {
            Self::Trace
        } else {
            Self::from_u8(raised)
        }
    }

    /// Level from [`LOG_LEVEL_VAR`], falling back to `default` when unset or invalid
    #[must_use]
    pub fn from_env_or(default: Self) -> Self {
        std::env::var(LOG_LEVEL_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    }

    /// Level currently applied by [`DynamicFilter`]
    #[must_use]
    pub fn current() -> Self {
        Self::from_u8(CURRENT_LEVEL.load(Ordering::Relaxed))
    }

    /// Change the level applied by [`DynamicFilter`]
    pub fn apply(self) {
        CURRENT_LEVEL.store(self.as_u8(), Ordering::Relaxed);
    }

    /// Install the global subscriber: stderr always, plus `log_file` when given
    ///
    /// Standard output stays free for tool output. The log file is only created
    /// on the first write. Calling this twice keeps the first subscriber.
    pub fn init_tracing(self, log_file: Option<PathBuf>) {
        self.apply();

        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        let file_layer = log_file.map(|path| {
            tracing_subscriber::fmt::layer()
                .with_writer(LazyFileWriter::new(path))
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
        });

        let subscriber = Registry::default()
            .with(DynamicFilter)
            .with(stderr_layer)
            .with(file_layer);

        if subscriber.try_init().is_err() {
            tracing::debug!("Tracing already initialized, keeping existing subscriber");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!("DEBUG".parse::<TracingLevel>(), Ok(TracingLevel::Debug));
        assert_eq!(" warn ".parse::<TracingLevel>(), Ok(TracingLevel::Warn));
        assert!("loud".parse::<TracingLevel>().is_err());
    }

    #[test]
    fn test_raised_by_saturates() {
        assert_eq!(TracingLevel::Warn.raised_by(0), TracingLevel::Warn);
        assert_eq!(TracingLevel::Warn.raised_by(2), TracingLevel::Debug);
        assert_eq!(TracingLevel::Info.raised_by(9), TracingLevel::Trace);
    }

    #[test]
    fn test_apply_sets_current_level() {
        TracingLevel::Debug.apply();
        assert_eq!(TracingLevel::current(), TracingLevel::Debug);
        TracingLevel::Info.apply();
        assert_eq!(TracingLevel::current(), TracingLevel::Info);
    }

    #[test]
    fn test_level_round_trip_through_u8() {
        for level in [
            TracingLevel::Error,
            TracingLevel::Warn,
            TracingLevel::Info,
            TracingLevel::Debug,
            TracingLevel::Trace,
        ] {
            assert_eq!(TracingLevel::from_u8(level.as_u8()), level);
            assert_eq!(level.as_str().parse::<TracingLevel>(), Ok(level));
        }
    }
}
