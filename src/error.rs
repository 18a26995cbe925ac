use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Format Error at line {line_no}: {reason} ('{line}')")]
    Format {
        line_no: usize,
        reason: String,
        line: String,
    },
}

pub type CfResult<T> = Result<T, CorpusForgeError>;
