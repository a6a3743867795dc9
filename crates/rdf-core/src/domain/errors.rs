use std::path::PathBuf;

pub type RdfResult<T> = Result<T, RdfError>;

#[derive(Debug, thiserror::Error)]
pub enum RdfError {
    #[error("malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("frame index {requested} is out of range: trajectory holds {available} frame(s)")]
    FrameOutOfRange { requested: usize, available: usize },
}

impl RdfError {
    pub fn malformed_input(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
