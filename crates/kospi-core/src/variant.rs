//! 백테스트 변형 정의.
//!
//! 각 변형은 하나의 실행 진입점과 그 배너 제목을 나타냅니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::banner::Banner;
use crate::error::{BacktestError, BacktestResult};

/// 백테스트 변형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// KOSPI 시장 추세 필터를 적용한 전략
    MarketFilter,
    /// 여러 날 보유 기간별로 평가하는 전략
    HoldingPeriod,
}

impl Variant {
    /// 모든 변형.
    pub const ALL: [Variant; 2] = [Variant::MarketFilter, Variant::HoldingPeriod];

    /// CLI 서브커맨드 이름.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::MarketFilter => "market-filter",
            Variant::HoldingPeriod => "holding-period",
        }
    }

    /// 변형 설명.
    pub fn description(&self) -> &'static str {
        match self {
            Variant::MarketFilter => "KOSPI 지수 추세가 상승일 때만 진입하는 시장 필터 전략",
            Variant::HoldingPeriod => "진입 후 보유 일수를 달리하며 성과를 비교하는 전략",
        }
    }

    /// 배너 제목 줄.
    pub fn titles(&self) -> &'static [&'static str] {
        match self {
            Variant::MarketFilter => &["KOSPI 시장 추세 필터 백테스트"],
            Variant::HoldingPeriod => &["KOSPI 다일 보유 전략 백테스트", "보유 기간 최적화"],
        }
    }

    /// 이 변형의 배너.
    pub fn banner(&self) -> BacktestResult<Banner> {
        Banner::new(self.titles().iter().copied())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = BacktestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "market-filter" | "market_filter" | "marketfilter" => Ok(Variant::MarketFilter),
            "holding-period" | "holding_period" | "holdingperiod" => Ok(Variant::HoldingPeriod),
            _ => Err(BacktestError::InvalidInput(format!(
                "알 수 없는 백테스트 변형: {}. 지원: market-filter, holding-period",
                s
            ))),
        }
    }
}
