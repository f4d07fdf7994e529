use thiserror::Error;

#[derive(Debug, Error)]
pub enum RhnError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned HTTP {status}")]
    HttpStatus { status: reqwest::StatusCode },

    #[error("API fault {code}: {message}")]
    Fault { code: i32, message: String },

    #[error("Malformed API response: {message}")]
    MalformedResponse { message: String },

    #[error("Channel record missing field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid server name: {0}")]
    InvalidServer(#[from] url::ParseError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RhnError>;

impl RhnError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Http(_) | Self::HttpStatus { .. } => 2,
            Self::Fault { .. } => 3,
            Self::MalformedResponse { .. } | Self::MissingField { .. } | Self::Xml(_) => 4,
            Self::InvalidServer(_) => 5,
            Self::Io(_) => 1,
        }
    }
}
