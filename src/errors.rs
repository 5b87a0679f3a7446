use thiserror::Error;

pub type PanelResult<T> = Result<T, PanelError>;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),
}

impl PanelError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        PanelError::Config(msg.into())
    }

    pub fn logging_error(msg: impl Into<String>) -> Self {
        PanelError::Logging(msg.into())
    }
}
