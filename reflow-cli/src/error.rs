//! Error handling for the CLI application

use reflow_core::ReflowError;
use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched any input pattern
    NoInputFiles(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Refusing to overwrite an existing file
    OutputExists(String),
    /// The output path is also an input
    OutputIsInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles(patterns) => {
                write!(f, "No files found matching the provided patterns: {patterns}")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputExists(path) => {
                write!(f, "Output file already exists: {path} (use --force to overwrite)")
            }
            CliError::OutputIsInput(path) => {
                write!(f, "Output file is also an input: {path}")
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<ReflowError> for CliError {
    fn from(error: ReflowError) -> Self {
        match error {
            ReflowError::MalformedConfiguration(msg) => CliError::ConfigError(msg),
            other => CliError::ConfigError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_files_display() {
        let error = CliError::NoInputFiles("*.txt".to_string());
        assert_eq!(
            error.to_string(),
            "No files found matching the provided patterns: *.txt"
        );
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("uppercase_threshold out of range".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: uppercase_threshold out of range"
        );
    }

    #[test]
    fn test_output_exists_display() {
        let error = CliError::OutputExists("reflow.toml".to_string());
        assert!(error.to_string().contains("reflow.toml"));
        assert!(error.to_string().contains("--force"));
    }

    #[test]
    fn test_output_is_input_display() {
        let error = CliError::OutputIsInput("doc.txt".to_string());
        assert_eq!(error.to_string(), "Output file is also an input: doc.txt");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let failure: CliResult<()> = Err(CliError::ConfigError("bad".into()).into());
        let err = failure.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_from_core_error_keeps_single_prefix() {
        let error = CliError::from(ReflowError::MalformedConfiguration(
            "No sentence terminators defined".into(),
        ));
        assert_eq!(
            error.to_string(),
            "Configuration error: No sentence terminators defined"
        );
    }

    #[test]
    fn test_unicode_paths() {
        let error = CliError::NoInputFiles("documenti/capitolo è.txt".to_string());
        assert!(error.to_string().ends_with("documenti/capitolo è.txt"));
    }
}
