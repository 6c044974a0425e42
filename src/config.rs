pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "tracecat";
#[cfg(windows)]
pub const EXEC_NAME: &str = "tracecat.exe";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

// credential of the seeded test user
pub const DEFAULT_USER_TOKEN: &str = "super-secret-jwt-token";
pub const DEFAULT_SERVICE_ID: &str = "tracecat-runner";

pub const PUBLIC_API_URL_ENV: &str = "TRACECAT__PUBLIC_API_URL";
pub const API_URL_ENV: &str = "TRACECAT__API_URL";
pub const USER_TOKEN_ENV: &str = "TRACECAT__USER_TOKEN";
pub const SERVICE_KEY_ENV: &str = "TRACECAT__SERVICE_KEY";

pub const CONTEXT_STORE_PATH: &str = ".tracecat/context.json";
