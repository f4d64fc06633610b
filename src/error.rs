//! Error types for cidex
//!
//! Application-level errors plus the catalog fetch taxonomy surfaced to the user

use thiserror::Error;

/// Main error type for cidex operations
#[derive(Error, Debug)]
pub enum CidexError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Catalog fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cidex operations
pub type Result<T> = std::result::Result<T, CidexError>;

/// Failure taxonomy for the one-shot catalog fetch
///
/// Display strings are for logs; `user_message` carries the pt-BR text shown
/// in the error panel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Cannot reach the server at {0}")]
    Unreachable(String),

    #[error("Response body is not a CID record array")]
    MalformedResponse,

    #[error("Server reported an error: {}", .0.as_deref().unwrap_or("no details"))]
    Server(Option<String>),
}

impl FetchError {
    /// User-facing message for the error panel
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Unreachable(base_url) => format!(
                "Não foi possível conectar ao servidor. Verifique se a API está rodando em {}",
                base_url
            ),
            FetchError::MalformedResponse => "Formato de resposta inválido".to_string(),
            FetchError::Server(Some(message)) => message.clone(),
            FetchError::Server(None) => "Erro ao carregar dados. Tente novamente.".to_string(),
        }
    }
}
