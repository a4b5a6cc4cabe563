use std::fmt;
use reqwest::StatusCode;

#[derive(Debug)]
pub enum YrError {
    Request(String),
    Status(StatusCode),
    Document(String),
}

impl fmt::Display for YrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            YrError::Request(e) => write!(f, "YrError::Request: {}", e),
            YrError::Status(s) => write!(f, "YrError::Status: locationforecast answered {}", s),
            YrError::Document(e) => write!(f, "YrError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for YrError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => YrError::Status(status),
            None => YrError::Request(e.to_string()),
        }
    }
}
impl From<serde_json::Error> for YrError {
    fn from(e: serde_json::Error) -> Self {
        YrError::Document(e.to_string())
    }
}
