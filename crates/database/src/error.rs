use sea_orm::DbErr;

/// Failures raised by the course catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A non-deleted course already uses this title for the same author
    #[error("{0}")]
    Conflict(String),
    /// The course does not exist, or is soft-deleted where that counts as missing
    #[error("Course not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl CatalogError {
    /// HTTP status code this failure maps to at the API boundary
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Conflict(_) | Self::Validation(_) => 400,
            Self::NotFound => 404,
            Self::Database(_) => 500,
        }
    }
}
