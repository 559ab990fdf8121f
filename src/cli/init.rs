// ============================================================================
// LangSync - CLI Init 命令
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 配置初始化命令实现
// 边界:
//   - ✅ 初始化命令参数定义
//   - ✅ 默认配置文件生成
//   - ✅ 覆盖保护
//   - ❌ 不应包含配置数据结构定义
//   - ❌ 不应包含同步业务逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::models::config::Config;
use crate::utils::constants::CONFIG_FILE_NAME;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 初始化配置命令
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite existing config file - no must
    #[arg(short, long)]
    pub force: bool,
}

pub fn handle_init(args: InitArgs) -> Result<()> {
    Logger::info(t!("init.start"));

    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        Logger::warn(tf!("init.config_exists", config_path.display()));
        Logger::info(t!("init.use_force_hint"));
        return Ok(());
    }

    Config::create_default_config_file(&config_path)?;

    Logger::success(tf!("init.config_created", config_path.display()));
    Logger::info(t!("init.next_steps"));

    Ok(())
}
