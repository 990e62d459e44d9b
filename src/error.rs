use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, LstError>;

#[derive(Debug)]
pub enum LstError {
    Io(io::Error),
    Parse(String),
    Config(String),
    InvalidPath(String),
}

impl fmt::Display for LstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LstError::Io(e) => write!(f, "{}", e),
            LstError::Parse(msg) => write!(f, "{}", msg),
            LstError::Config(msg) => write!(f, "{}", msg),
            LstError::InvalidPath(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LstError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LstError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LstError {
    fn from(e: io::Error) -> Self {
        LstError::Io(e)
    }
}

impl From<toml::de::Error> for LstError {
    fn from(e: toml::de::Error) -> Self {
        LstError::Config(e.to_string())
    }
}
