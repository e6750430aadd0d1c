//! 백테스트 기간 계산.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BacktestError, BacktestResult};

/// 기본 조회 기간 (일).
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// 시작일과 종료일을 모두 포함하는 백테스트 기간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacktestPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BacktestPeriod {
    /// 새 기간을 생성합니다. 시작일이 종료일보다 늦으면 에러입니다.
    pub fn new(start: NaiveDate, end: NaiveDate) -> BacktestResult<Self> {
        if start > end {
            return Err(BacktestError::InvalidInput(format!(
                "시작일({})이 종료일({})보다 늦습니다",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// 빠진 날짜를 채워 기간을 확정합니다.
    ///
    /// 종료일이 없으면 `today`, 시작일이 없으면 종료일로부터 `lookback_days` 전입니다.
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
        lookback_days: i64,
    ) -> BacktestResult<Self> {
        if lookback_days < 0 {
            return Err(BacktestError::InvalidInput(format!(
                "조회 기간은 음수일 수 없습니다: {}",
                lookback_days
            )));
        }

        let end = end.unwrap_or(today);
        let start = match start {
            Some(s) => s,
            None => Duration::try_days(lookback_days)
                .and_then(|lookback| end.checked_sub_signed(lookback))
                .ok_or_else(|| {
                    BacktestError::InvalidInput(format!(
                        "조회 기간이 너무 깁니다: {}일",
                        lookback_days
                    ))
                })?,
        };

        Self::new(start, end)
    }

    /// 기간에 포함된 일수.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for BacktestPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", self.start, self.end)
    }
}

/// `YYYY-MM-DD` 형식의 날짜를 파싱합니다.
pub fn parse_date(s: &str) -> BacktestResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
        BacktestError::InvalidInput(format!(
            "잘못된 날짜 형식: {} (YYYY-MM-DD 필요, {})",
            s, e
        ))
    })
}
