use thiserror::Error;

#[derive(Error, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ProbeError {
    /// The server answered with a non-success status.
    #[error("HTTP error: {status} {reason}")]
    Api {
        status: u16,
        reason: String,
        body: String,
    },

    /// The request never completed at the transport level.
    #[error("Connection error: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Other(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ProbeError::Connect(err)
        } else {
            ProbeError::Other(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
