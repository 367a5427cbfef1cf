use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScalpAiError {
    #[error("설정 에러: {0}")]
    Config(String),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("JSON 해석 에러: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 에러: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] scalp_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, ScalpAiError>;
