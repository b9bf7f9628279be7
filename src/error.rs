use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagCheckError {
    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("registry returned {status} for {url}")]
    RegistryError { status: StatusCode, url: String },
    #[error("serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("environment variable `{0}` is not set or not valid unicode")]
    MissingEnv(&'static str),
}
