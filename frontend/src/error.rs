//! Error types for the frontend.

use thiserror::Error;

/// Result type for frontend setup.
pub type FrontendResult<T> = Result<T, FrontendError>;

/// Failures while loading configuration or the data the server needs.
///
/// Everything except [`FrontendError::Render`] happens before the server
/// accepts requests.
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("catalog error: {0}")]
    Catalog(#[from] wepos_model::CatalogError),

    #[error("invalid shell template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("shell rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}
