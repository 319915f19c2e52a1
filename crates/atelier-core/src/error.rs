//! Error types for Atelier
//!
//! Filtering, presentation and the selection timer cannot fail. Errors only
//! arise where a catalog or configuration value enters the process.

use thiserror::Error;

use crate::types::ProjectId;

/// Main error type for Atelier operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not a valid JSON project list
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two catalog entries share an id
    #[error("Duplicate project id: {0}")]
    DuplicateId(ProjectId),

    /// Project ids must be positive
    #[error("Invalid project id: {0}")]
    InvalidId(u32),

    /// Variant name is neither `home` nor `page`
    #[error("Unknown gallery variant: {0}")]
    UnknownVariant(String),

    /// Lookup by id found nothing
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalleryError::DuplicateId(ProjectId(3));
        assert_eq!(format!("{}", err), "Duplicate project id: 3");

        let err = GalleryError::UnknownVariant("sidebar".to_string());
        assert_eq!(format!("{}", err), "Unknown gallery variant: sidebar");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GalleryError = io_err.into();
        assert!(matches!(err, GalleryError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: GalleryError = json_err.into();
        assert!(matches!(err, GalleryError::Json(_)));
    }
}
