// ============================================================================
// LangSync - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 子模块导出
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod init;
pub mod sync;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::config::{Config, RuntimeArgs};
use init::{handle_init, InitArgs};
use sync::{handle_sync, SyncArgs};

/// LangSync - I18N JSON sync tool with parallel translation
#[derive(Debug, Parser)]
#[command(name = "langsync")]
#[command(about = "Sync locale JSON catalogs against a source locale with machine translation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Path to config file (default: langsync.toml in CWD)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Disable progress bar
    #[arg(long, global = true)]
    pub no_progress: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sync locale catalogs against the source locale
    Sync(SyncArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Initialize global config from file, then override with CLI args
    Config::initialize(cli.config.clone())?;
    let runtime_args = build_runtime_args(&cli);
    Config::merge_runtime_args(runtime_args)?;

    if let Some(path) = Config::get_config_path() {
        tracing::debug!(path = %path.display(), "loaded config file");
    }

    match cli.command {
        Commands::Sync(args) => handle_sync(args).await,
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        show_progress: if cli.no_progress { Some(false) } else { None },
        language: cli.language.clone(),
        ..Default::default()
    }
}
