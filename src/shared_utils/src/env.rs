use std::path::PathBuf;

use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables. Blank values are
/// treated as missing.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| MissingEnvVarError(name.to_string()))
}

/// Reads an optional path from the environment; `None` when unset or blank.
pub fn get_env_path(name: &str) -> Option<PathBuf> {
    get_env_var(name).ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const VAR: &str = "SHARED_UTILS_TEST_VAR";

    #[test]
    #[serial]
    fn unset_variable_is_an_error() {
        unsafe { std::env::remove_var(VAR) };
        let err = get_env_var(VAR).unwrap_err();
        assert_eq!(err.to_string(), format!("Missing environment variable: {VAR}"));
        assert_eq!(get_env_path(VAR), None);
    }

    #[test]
    #[serial]
    fn blank_variable_counts_as_missing() {
        unsafe { std::env::set_var(VAR, "  ") };
        assert!(get_env_var(VAR).is_err());
        unsafe { std::env::remove_var(VAR) };
    }

    #[test]
    #[serial]
    fn set_variable_is_returned() {
        unsafe { std::env::set_var(VAR, "configs/chart.toml") };
        assert_eq!(get_env_var(VAR).unwrap(), "configs/chart.toml");
        assert_eq!(get_env_path(VAR), Some(PathBuf::from("configs/chart.toml")));
        unsafe { std::env::remove_var(VAR) };
    }
}
