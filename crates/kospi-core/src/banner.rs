//! 콘솔 배너 출력.
//!
//! 백테스트 실행 시작 시 표준 출력에 다음 형태의 배너를 씁니다:
//!
//! ```text
//! ======================================================================
//!                       KOSPI 시장 추세 필터 백테스트
//! ======================================================================
//! ```
//!
//! 제목의 너비는 `char` 개수로 계산합니다.

use std::io::Write;

use crate::error::{BacktestError, BacktestResult};

/// 배너 기본 너비.
pub const BANNER_WIDTH: usize = 70;

/// 배너 구분선 문자.
pub const BANNER_FILL: char = '=';

/// 구분선 두 줄 사이에 가운데 정렬된 제목을 담은 배너.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    width: usize,
    fill: char,
    titles: Vec<String>,
}

impl Banner {
    /// 기본 너비와 구분선 문자로 배너를 생성합니다.
    ///
    /// 제목이 하나도 없으면 에러를 반환합니다.
    pub fn new<I, S>(titles: I) -> BacktestResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        if titles.is_empty() {
            return Err(BacktestError::InvalidInput(
                "배너에는 최소 한 줄의 제목이 필요합니다".to_string(),
            ));
        }

        Ok(Self {
            width: BANNER_WIDTH,
            fill: BANNER_FILL,
            titles,
        })
    }

    /// 배너 너비를 설정합니다.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// 구분선 문자를 설정합니다.
    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// 구분선 한 줄.
    pub fn rule(&self) -> String {
        std::iter::repeat(self.fill).take(self.width).collect()
    }

    /// 제목을 배너 너비에 맞춰 가운데 정렬합니다.
    ///
    /// 남는 공백이 홀수이면 오른쪽에 한 칸 더 붙습니다.
    /// 너비보다 긴 제목은 그대로 반환합니다.
    pub fn center(&self, title: &str) -> String {
        format!("{:^width$}", title, width = self.width)
    }

    /// 구분선, 제목들, 구분선 순서의 줄 목록.
    pub fn lines(&self) -> Vec<String> {
        let rule = self.rule();
        let mut lines = Vec::with_capacity(self.titles.len() + 2);
        lines.push(rule.clone());
        lines.extend(self.titles.iter().map(|t| self.center(t)));
        lines.push(rule);
        lines
    }

    /// 줄바꿈으로 끝나는 배너 문자열.
    pub fn render(&self) -> String {
        let mut out = self.lines().join("\n");
        out.push('\n');
        out
    }

    /// 배너를 출력 대상에 씁니다.
    pub fn write_to<W: Write>(&self, out: &mut W) -> BacktestResult<()> {
        out.write_all(self.render().as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
