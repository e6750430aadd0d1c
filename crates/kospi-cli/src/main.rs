//! KOSPI 백테스트 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 시장 추세 필터 백테스트
//! kospi market-filter
//!
//! # 다일 보유 백테스트 (기간 지정)
//! kospi holding-period -f 2023-01-01 -t 2023-12-31
//!
//! # 변형 목록 보기
//! kospi list
//! kospi list --format json
//! ```

use clap::{Parser, Subcommand};
use tracing::error;

use kospi_cli::commands::list::{list_variants, OutputFormat};
use kospi_cli::commands::run::{is_user_error, run_variant, RunConfig};
use kospi_core::{init_logging, AppConfig, LogConfig, Variant, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "kospi")]
#[command(about = "KOSPI backtest runner - 시장 필터 / 다일 보유 전략", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (없으면 기본값 사용)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// KOSPI 시장 추세 필터 백테스트
    MarketFilter {
        /// 시작 날짜 (YYYY-MM-DD)
        #[arg(short = 'f', long)]
        from: Option<String>,

        /// 종료 날짜 (YYYY-MM-DD)
        #[arg(short, long)]
        to: Option<String>,
    },

    /// KOSPI 다일 보유 전략 백테스트
    HoldingPeriod {
        /// 시작 날짜 (YYYY-MM-DD)
        #[arg(short = 'f', long)]
        from: Option<String>,

        /// 종료 날짜 (YYYY-MM-DD)
        #[arg(short, long)]
        to: Option<String>,
    },

    /// 사용 가능한 백테스트 변형 목록
    List {
        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let app_config = AppConfig::load_optional(&cli.config)?;
    init_logging(LogConfig::from_logging_config(&app_config.logging))?;

    let (variant, from, to) = match cli.command {
        Commands::MarketFilter { from, to } => (Variant::MarketFilter, from, to),
        Commands::HoldingPeriod { from, to } => (Variant::HoldingPeriod, from, to),
        Commands::List { format } => {
            let format = OutputFormat::parse(&format)?;
            list_variants(format, &mut std::io::stdout().lock())?;
            return Ok(());
        }
    };

    let config = RunConfig {
        from,
        to,
        lookback_days: app_config.backtest.lookback_days,
        ..RunConfig::new(variant)
    };

    if let Err(e) = run_variant(&config, &mut std::io::stdout().lock()) {
        if is_user_error(&e) {
            eprintln!("오류: {:#}", e);
            std::process::exit(2);
        }
        error!(variant = %variant, "Backtest run failed: {:#}", e);
        return Err(e.into());
    }

    Ok(())
}
