use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Builds an SQLite connection URL from environment variables based on profile
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    let path = db_path(profile)?;
    Ok(format!("sqlite://{path}?mode=rwc"))
}

/// Get database path based on profile
fn db_path(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => Ok(env::var("DATABASE_PATH").unwrap_or_else(|_| "data.db".to_string())),
        DbProfile::Test => {
            let path = must_var("TEST_DATABASE_PATH")?;
            // Enforce safety: test DB file must end with "_test.db"
            if !path.ends_with("_test.db") {
                return Err(AppError::config(format!(
                    "Test profile requires database path to end with '_test.db', but got: '{path}'"
                )));
            }
            Ok(path)
        }
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
