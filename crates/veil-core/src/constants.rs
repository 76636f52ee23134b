/// Veil version string.
pub const VEIL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language used when a record does not name one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Candidates scoring below this are dropped by the registry.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.0;

/// Score added to a pattern match when a context word precedes it.
pub const DEFAULT_CONTEXT_BOOST: f64 = 0.35;

/// How many characters before a match are searched for context words.
pub const DEFAULT_CONTEXT_WINDOW: usize = 40;

/// Default masking character for the mask operator.
pub const DEFAULT_MASKING_CHAR: char = '*';

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "VEIL_LOG";

/// Project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "veil.toml";
