//! Fixed limits that are not user-configurable.

/// Maximum number of log entries kept in memory
pub const MAX_LOG_ENTRIES: usize = 500;

/// Event poll interval; also the resolution of transition timers
pub const EVENT_HANDLER_INTERVAL_MS: u64 = 16;

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the log file inside the data directory
pub const LOG_FILE_NAME: &str = "rhs.log";
