//! 백테스트 변형 목록 출력.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use kospi_core::Variant;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// 변형 정보.
#[derive(Debug, Clone, Serialize)]
pub struct VariantInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub titles: &'static [&'static str],
}

impl From<Variant> for VariantInfo {
    fn from(variant: Variant) -> Self {
        Self {
            name: variant.name(),
            description: variant.description(),
            titles: variant.titles(),
        }
    }
}

/// 변형 목록을 출력하고 개수를 반환합니다.
pub fn list_variants<W: Write>(format: OutputFormat, out: &mut W) -> Result<usize> {
    let variants: Vec<VariantInfo> = Variant::ALL.into_iter().map(VariantInfo::from).collect();

    match format {
        OutputFormat::Table => {
            writeln!(out, "\n사용 가능한 백테스트 변형:")?;
            writeln!(out, "{}", "═".repeat(70))?;
            writeln!(out, "  {:<18} | 설명", "변형")?;
            writeln!(out, "  {}", "─".repeat(66))?;
            for info in &variants {
                writeln!(out, "  {:<18} | {}", info.name, info.description)?;
            }
            writeln!(out, "{}", "═".repeat(70))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &variants)?;
            writeln!(out)?;
        }
    }

    Ok(variants.len())
}
