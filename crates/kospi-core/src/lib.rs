//! # KOSPI Core
//!
//! KOSPI 백테스트 실행기의 공통 타입을 제공합니다:
//! - 콘솔 배너
//! - 백테스트 변형과 기간
//! - 설정 관리
//! - 로깅 인프라

pub mod banner;
pub mod config;
pub mod error;
pub mod logging;
pub mod period;
pub mod variant;

pub use self::banner::*;
pub use self::config::*;
pub use self::error::*;
pub use self::logging::*;
pub use self::period::*;
pub use self::variant::*;
