use derive_more::{Display, From};

#[derive(Debug, Display, From)]
pub enum HrmError {
    #[display(fmt = "I/O error: {}", _0)]
    Io(std::io::Error),

    #[display(fmt = "JSON error: {}", _0)]
    Json(serde_json::Error),

    #[display(fmt = "Configuration error: {}", _0)]
    #[from(ignore)]
    Config(String),
}

impl std::error::Error for HrmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HrmError::Io(e) => Some(e),
            HrmError::Json(e) => Some(e),
            HrmError::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HrmError>;
