use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    InvalidThresholds {
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            ConfigError::Parse(err) => write!(f, "invalid counter config: {err}"),
            ConfigError::InvalidThresholds { reason } => {
                write!(f, "invalid counter thresholds: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            ConfigError::InvalidThresholds { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Reasons a [`CounterEngine`](crate::CounterEngine) could not be attached.
#[derive(Debug)]
pub enum InitializationError {
    /// No element was supplied in the options.
    MissingElement,
    /// The host does not know the supplied element.
    ///
    /// Holds the handle's `Debug` rendering, so the error stays free of the
    /// host's element type.
    UnknownElement(String),
    Config(ConfigError),
    /// The host refused to create the counter element.
    CounterUnavailable,
}

impl fmt::Display for InitializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitializationError::MissingElement => {
                f.write_str("error initialising counter: no element supplied")
            }
            InitializationError::UnknownElement(element) => {
                write!(f, "error initialising counter: unknown element {element}")
            }
            InitializationError::Config(err) => write!(f, "error initialising counter: {err}"),
            InitializationError::CounterUnavailable => {
                f.write_str("error initialising counter: counter element could not be created")
            }
        }
    }
}

impl std::error::Error for InitializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitializationError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for InitializationError {
    fn from(err: ConfigError) -> Self {
        InitializationError::Config(err)
    }
}
