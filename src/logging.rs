use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Diagnostic log level picked from `-v`/`-q`; results never go through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn to_filter(self) -> String {
        format!("namzd={}", self.to_level())
    }
}

/// Install the global subscriber, writing to stderr. `RUST_LOG` wins over
/// the flags.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(verbosity >= Verbosity::Debug)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .compact();

    if verbosity <= Verbosity::Normal {
        subscriber.without_time().init();
    } else {
        subscriber.init();
    }
}
