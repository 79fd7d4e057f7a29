use thiserror::Error;

pub type CognivoResult<T> = Result<T, CognivoError>;

#[derive(Debug, Error)]
pub enum CognivoError {
    #[error("config error: {0}")]
    Config(String),

    #[error("webhook error: {0}")]
    Api(String),

    #[error("attachment error: {0}")]
    Attachment(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CognivoError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        CognivoError::Config(msg.into())
    }

    pub fn api_error(msg: impl Into<String>) -> Self {
        CognivoError::Api(msg.into())
    }

    pub fn attachment_error(msg: impl Into<String>) -> Self {
        CognivoError::Attachment(msg.into())
    }
}
