use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to connect to database: {0}")]
    Connect(#[source] mongodb::error::Error),
    #[error("find_one failed: {0}")]
    Query(#[source] mongodb::error::Error),
    #[error("failed to write result: {0}")]
    Output(#[from] std::io::Error),
    #[error("failed to render result: {0}")]
    Render(#[from] serde_json::Error),
    #[error("failed to close connection: {0}")]
    Close(#[source] mongodb::error::Error),
    #[error("{primary}; additionally failed to close connection: {close}")]
    Cleanup {
        #[source]
        primary: Box<LookupError>,
        close: mongodb::error::Error,
    },
}

impl LookupError {
    /// Folds the outcome of the release step into an already failed lookup.
    pub fn with_close_failure(self, close: mongodb::error::Error) -> Self {
        LookupError::Cleanup {
            primary: Box::new(self),
            close,
        }
    }

    /// Writes the error to `out` unconditionally, independent of any log filter.
    pub fn report<W: std::io::Write>(&self, out: &mut W) {
        let _ = writeln!(out, "error: {self}");
    }
}
