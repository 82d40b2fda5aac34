//! Configuration constants and utilities for postline.

/// Default profile file path.
pub const DEFAULT_PROFILE_PATH: &str = "~/.postline/profile";

/// Environment variable name for overriding the profile path.
pub const PROFILE_PATH_ENV_VAR: &str = "POSTLINE_PROFILE_PATH";

/// API root used when no profile provides one. The public demo collection.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Get the profile file path, checking the environment variable first, then
/// falling back to the default.
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}
