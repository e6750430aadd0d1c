//! 백테스트 변형 실행 명령어.
//!
//! # 사용 예시
//!
//! ```bash
//! # 시장 추세 필터 백테스트
//! kospi market-filter
//!
//! # 기간을 지정한 다일 보유 백테스트
//! kospi holding-period -f 2023-01-01 -t 2023-12-31
//! ```
//!
//! 표준 출력에는 배너만 씁니다. 기간 계산 결과는 로그로 남깁니다.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::io::Write;
use tracing::{debug, info};

use kospi_core::{parse_date, BacktestError, BacktestPeriod, Variant, DEFAULT_LOOKBACK_DAYS};

/// 변형 실행 설정
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 실행할 변형
    pub variant: Variant,
    /// 시작일 (YYYY-MM-DD, 옵션)
    pub from: Option<String>,
    /// 종료일 (YYYY-MM-DD, 옵션)
    pub to: Option<String>,
    /// 시작일이 없을 때 거슬러 올라갈 일수
    pub lookback_days: i64,
    /// 기준일 (없으면 오늘)
    pub today: Option<NaiveDate>,
}

impl RunConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            from: None,
            to: None,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            today: None,
        }
    }
}

/// 변형을 실행하고 확정된 기간을 반환합니다.
pub fn run_variant<W: Write>(config: &RunConfig, out: &mut W) -> Result<BacktestPeriod> {
    let start = config.from.as_deref().map(parse_date).transpose()?;
    let end = config.to.as_deref().map(parse_date).transpose()?;
    let today = config.today.unwrap_or_else(|| Local::now().date_naive());

    let period = BacktestPeriod::resolve(start, end, today, config.lookback_days)?;
    debug!(
        variant = %config.variant,
        start = %period.start,
        end = %period.end,
        days = period.days(),
        "Backtest period resolved"
    );

    config
        .variant
        .banner()?
        .write_to(out)
        .context("Failed to write banner")?;

    info!(variant = %config.variant, "Banner printed");
    Ok(period)
}

/// 입력이나 설정을 고쳐서 해결할 수 있는 실패인지 확인합니다.
pub fn is_user_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<BacktestError>()
        .is_some_and(BacktestError::is_user_error)
}
