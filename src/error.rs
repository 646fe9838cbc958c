use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("client error {status} for {url}")]
    ClientError { status: StatusCode, url: String },

    #[error("server error {status} for {url}")]
    ServerError { status: StatusCode, url: String },

    #[error("deserialization error: {0}")]
    Deserialize(#[from] DeserializeError),

    #[error(transparent)]
    EnvVar(#[from] EnvVarError),

    #[error("no data returned from {endpoint}")]
    NoData { endpoint: String },
}

impl Error {
    /// HTTP status carried by a translated 4xx/5xx response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::ClientError { status, .. } | Error::ServerError { status, .. } => Some(*status),
            Error::Request(e) => e.status(),
            _ => None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("field `{field}` has unexpected value {value}: {source}")]
pub struct DeserializeError {
    field: String,
    value: String,
    #[source]
    source: chrono::ParseError,
}

impl DeserializeError {
    pub fn new(field: &str, value: &str, source: chrono::ParseError) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            source,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({var}={value:?})")]
pub struct EnvVarError {
    var: String,
    value: String,
    #[source]
    source: std::num::ParseIntError,
}

impl EnvVarError {
    pub fn new(var: &str, value: &str, source: std::num::ParseIntError) -> Self {
        Self {
            var: var.into(),
            value: value.into(),
            source,
        }
    }
}
