pub mod client;
pub(crate) mod types;

use thiserror::Error;

pub use self::client::{collect_reports, SuperJobClient};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{0}' returned status {1}")]
    RequestNotOk(String, reqwest::StatusCode),
    #[error("Malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
