use std::fmt;

/// Error types for tfmt-report operations
#[derive(Debug)]
pub enum ReportError {
    /// IO error (writing the table, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// A measurement row failed validation
    InvalidRow(String),

    /// The dataset as a whole is unusable
    InvalidDataset(String),

    /// The charting backend could not produce or save the image
    Rendering(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io(err) => write!(f, "IO error: {err}"),
            ReportError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ReportError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            ReportError::InvalidRow(msg) => write!(f, "Invalid measurement row: {msg}"),
            ReportError::InvalidDataset(msg) => write!(f, "Invalid dataset: {msg}"),
            ReportError::Rendering(msg) => write!(f, "Rendering error: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(err) => Some(err),
            ReportError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err)
    }
}

impl From<toml::de::Error> for ReportError {
    fn from(err: toml::de::Error) -> Self {
        ReportError::TomlParsing(err)
    }
}

/// Type alias for Results using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = ReportError::Config("Chart width cannot be 0".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Chart width cannot be 0"
        );

        let row_error = ReportError::InvalidRow("name is empty".to_string());
        assert_eq!(
            format!("{row_error}"),
            "Invalid measurement row: name is empty"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "test");
        let report_error = ReportError::from(io_error);

        match report_error {
            ReportError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Table>("invalid toml [").unwrap_err();
        let report_error = ReportError::from(toml_error);

        match report_error {
            ReportError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }

    #[test]
    fn test_string_error_variants_display() {
        let errors = vec![
            ReportError::Config("Bad config".to_string()),
            ReportError::InvalidRow("Bad row".to_string()),
            ReportError::InvalidDataset("Empty".to_string()),
            ReportError::Rendering("No font".to_string()),
        ];

        for error in errors {
            let display_str = format!("{error}");
            assert!(!display_str.is_empty());
            assert!(display_str.contains(":"));
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let report_error = ReportError::Io(io_error);
        assert!(report_error.source().is_some());

        let rendering_error = ReportError::Rendering("test".to_string());
        assert!(rendering_error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReportError>();
    }
}
