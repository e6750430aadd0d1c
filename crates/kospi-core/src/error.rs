//! 백테스트 실행기의 에러 타입.

use thiserror::Error;

/// 백테스트 실행기 에러.
#[derive(Debug, Error)]
pub enum BacktestError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(#[from] std::io::Error),
}

/// 백테스트 작업을 위한 Result 타입.
pub type BacktestResult<T> = Result<T, BacktestError>;

impl BacktestError {
    /// 사용자가 입력을 고쳐서 해결할 수 있는 에러인지 확인합니다.
    pub fn is_user_error(&self) -> bool {
        matches!(self, BacktestError::InvalidInput(_) | BacktestError::Config(_))
    }
}

impl From<config::ConfigError> for BacktestError {
    fn from(err: config::ConfigError) -> Self {
        BacktestError::Config(err.to_string())
    }
}
