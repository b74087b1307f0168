use std::fmt;

#[derive(Debug)]
pub enum ArcError {
    InvalidGrid(String),
    MissingSplit(String),
    UnknownTask(String),
    UnknownSplit(String),
    InvalidConfig(String),
    Parse(String),
}

impl fmt::Display for ArcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(msg) => write!(f, "invalid grid: {}", msg),
            Self::MissingSplit(msg) => write!(f, "missing split: {}", msg),
            Self::UnknownTask(id) => write!(f, "no solver registered for task {}", id),
            Self::UnknownSplit(name) => write!(f, "unknown split: {}", name),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            Self::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for ArcError {}

impl From<serde_json::Error> for ArcError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArcError>;
