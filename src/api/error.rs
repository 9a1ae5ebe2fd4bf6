use thiserror::Error;

/// Errors raised while building or sending a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route prefix covers the requested path
    #[error("No route configured for path '{path}'")]
    UnroutedPath { path: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },
}
