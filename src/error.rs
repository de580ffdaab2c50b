//! Error types for the mockup composer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dimensions {width}x{height}: {message}")]
    InvalidDimensions { width: f64, height: f64, message: String },

    #[error("Invalid option '{option}': {message}")]
    InvalidOption { option: String, message: String },

    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    #[error("Unknown section: {name}")]
    UnknownSection { name: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },
}

pub type Result<T> = std::result::Result<T, ComposerError>;

impl ComposerError {
    pub fn dimensions(width: f64, height: f64, message: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            message: message.into(),
        }
    }

    pub fn option(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            message: message.into(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ComposerError::dimensions(-1.0, 200.0, "width must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid dimensions -1x200: width must be positive"
        );

        let err = ComposerError::option("spacing", "must not be negative");
        assert_eq!(err.to_string(), "Invalid option 'spacing': must not be negative");

        let err = ComposerError::UnknownTemplate { name: "kanban".to_string() };
        assert_eq!(err.to_string(), "Unknown template: kanban");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ComposerError = io.into();
        assert!(matches!(err, ComposerError::Io(_)));
    }
}
