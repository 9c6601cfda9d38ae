// =============================================================================
// Application Identity
// =============================================================================

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "attribute-decimal";

/// Log target of this crate
pub const LOG_TARGET: &str = "attribute_decimal";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".attribute-decimal";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "attribute-decimal.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "DECIMAL_CONFIG";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable for the database URL (sqlite path or postgres URL)
pub const ENV_DATABASE_URL: &str = "DECIMAL_DATABASE_URL";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "DECIMAL_LOG";

// =============================================================================
// Database Defaults
// =============================================================================

/// Default SQLite database file
pub const DEFAULT_SQLITE_PATH: &str = "attribute-decimal.db";

/// Default pool size
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// SQLite busy timeout in seconds
pub const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

/// Pool acquire timeout in seconds
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
