//! Error types for Literalura
//!
//! This module defines error types using thiserror for ergonomic error handling.
//! Errors are categorized by the component that raises them so the interactive
//! shell can decide how to present them.
//!
//! ## Error Categories
//!
//! ### Gateway (catalog API)
//! - Transport failures and non-success HTTP statuses → `GatewayRequestFailed`
//! - Bodies that do not decode as a search response → `InvalidApiResponse`
//!
//! ### Reconciliation
//! - The API returned no matches for a title → `NotFound`
//! - Writing an author or book row failed → `PersistFailed`
//!
//! ### Shell
//! - Non-numeric or out-of-range menu/year input → `InvalidInput`
//!
//! ### Storage / startup
//! - sqlx failures outside of reconciliation writes → `Database` (via `#[from]`)
//! - Schema creation failures → `MigrationFailed`
//! - Database directory creation → `FileIoError`
//! - Bad command line / environment settings → `InvalidConfiguration`

use thiserror::Error;

/// Result type alias using our CatalogError type
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Main error type for Literalura
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== Gateway Errors =====

    /// The HTTP call to the catalog API failed (transport error or bad status)
    #[error("Catalog API request failed: {message}")]
    GatewayRequestFailed {
        message: String,
        /// HTTP status code if a response was received
        status_code: Option<u16>,
    },

    /// The catalog API answered with a body that is not a search response
    #[error("Invalid catalog API response: {message}")]
    InvalidApiResponse {
        message: String,
        /// Response body for debugging
        response_body: Option<String>,
    },

    // ===== Reconciliation Errors =====

    /// The catalog API returned no match for the requested title
    #[error("No book found in the catalog for '{title}'")]
    NotFound { title: String },

    /// Saving an author or book failed
    #[error("Failed to save {entity}: {source}")]
    PersistFailed {
        /// What was being written ("book", "author")
        entity: String,
        #[source]
        source: sqlx::Error,
    },

    // ===== Input Errors =====

    /// User input could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ===== Storage / Startup Errors =====

    /// Database schema migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// File system error around the database file
    #[error("File I/O error: {0}")]
    FileIoError(String),

    /// Configuration is invalid or incomplete
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // ===== External Library Errors =====

    /// Database driver error from sqlx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Standard I/O error (console input/output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidConfiguration(format!("Invalid URL: {}", err))
    }
}

// Helper methods for creating common errors
impl CatalogError {
    /// Create a NotFound error for a searched title
    pub fn not_found<S: Into<String>>(title: S) -> Self {
        CatalogError::NotFound {
            title: title.into(),
        }
    }

    /// Create an InvalidInput error with a message
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        CatalogError::InvalidInput(message.into())
    }

    /// Create a GatewayRequestFailed error
    pub fn gateway_failed<S: Into<String>>(message: S, status_code: Option<u16>) -> Self {
        CatalogError::GatewayRequestFailed {
            message: message.into(),
            status_code,
        }
    }

    /// Create a PersistFailed error for the given entity
    pub fn persist_failed<S: Into<String>>(entity: S, source: sqlx::Error) -> Self {
        CatalogError::PersistFailed {
            entity: entity.into(),
            source,
        }
    }

    /// Check if error came from the catalog API call
    pub fn is_gateway_error(&self) -> bool {
        matches!(
            self,
            CatalogError::GatewayRequestFailed { .. } | CatalogError::InvalidApiResponse { .. }
        )
    }

    /// Check if error is caused by what the user typed
    pub fn is_input_error(&self) -> bool {
        matches!(self, CatalogError::InvalidInput(_))
    }

    /// Get user-friendly error message suitable for display
    ///
    /// Technical details (response bodies, driver internals) are left out.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::GatewayRequestFailed {
                status_code: Some(code),
                ..
            } => {
                format!("The book catalog answered with HTTP {}. Please try again later.", code)
            }
            CatalogError::GatewayRequestFailed { .. } => {
                "Could not reach the book catalog. Check your connection and try again.".to_string()
            }
            CatalogError::InvalidApiResponse { .. } => {
                "The book catalog returned data that could not be read.".to_string()
            }
            CatalogError::NotFound { title } => {
                format!("Book '{}' was not found in the catalog.", title)
            }
            CatalogError::PersistFailed { entity, source } => {
                format!("Could not save the {}: {}", entity, source)
            }
            CatalogError::InvalidInput(message) => message.clone(),
            _ => self.to_string(),
        }
    }
}
