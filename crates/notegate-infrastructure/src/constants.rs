//! Infrastructure layer constants
//!
//! Contains defaults for the infrastructure adapters and configuration.
//! Authentication rules are defined in `notegate_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "notegate.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "notegate";

/// Environment variable prefix for configuration (`NOTEGATE__AUTH__TOKEN__SECRET`)
pub const CONFIG_ENV_PREFIX: &str = "NOTEGATE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// TOKEN CONSTANTS
// ============================================================================

/// Default token lifetime in minutes
pub const TOKEN_DEFAULT_TTL_MINUTES: i64 = 30;

/// Minimum accepted signing secret length
pub const TOKEN_MIN_SECRET_LENGTH: usize = 32;

// ============================================================================
// BREACH CHECK CONSTANTS
// ============================================================================

/// Pwned Passwords range endpoint; the 5-character prefix is appended
pub const BREACH_DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com/range/";

/// Default breach lookup timeout in seconds
pub const BREACH_DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Dependency name reported in breach lookup failures
pub const BREACH_DEPENDENCY_NAME: &str = "pwned-passwords";

// ============================================================================
// HASHING CONSTANTS
// ============================================================================

/// Argon2id memory cost in KiB
pub const ARGON2_DEFAULT_MEMORY_KIB: u32 = 19 * 1024;

/// Argon2id iterations
pub const ARGON2_DEFAULT_ITERATIONS: u32 = 2;

/// Argon2id lanes
pub const ARGON2_DEFAULT_PARALLELISM: u32 = 1;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_FILTER: &str = "NOTEGATE_LOG";
