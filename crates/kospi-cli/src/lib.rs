//! KOSPI 백테스트 CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 백테스트 변형 실행 (배너 출력과 기간 계산)
//! - 변형 목록 조회

pub mod commands;

pub use commands::*;
