// ============================================================================
// LangSync - CLI Sync 命令
// ============================================================================
//
// 文件: src/cli/sync.rs
// 职责: 同步命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 输入路径校验
//   - ✅ 目标语言发现
//   - ✅ 调用同步引擎并展示结果
//   - ❌ 不应包含差异/翻译算法实现
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::core::processor::LocaleProcessor;
use crate::core::syncer::{spawn_interrupt_watcher, SyncEngine, SyncOptions};
use crate::core::translator::{translator_code, GoogleTranslateProvider};
use crate::models::config::{Config, RuntimeArgs};
use crate::ui::progress::SyncProgress;
use crate::ui::summary::{render_settings_summary, render_sync_summary};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 同步命令
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Source JSON file - no must
    #[arg(short, long)]
    pub source: Option<String>,

    /// Directory containing locale files - no must
    #[arg(short, long)]
    pub dir: Option<String>,

    /// Comma-separated list of locales to sync - no must
    /// (long-only: -l is taken by the global --language flag)
    #[arg(long)]
    pub locales: Option<String>,

    /// Retranslate existing keys - no must
    #[arg(short, long)]
    pub rewrite: bool,

    /// Show what would be translated without making changes - no must
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn handle_sync(args: SyncArgs) -> Result<()> {
    let start_time = Instant::now();

    Logger::info(t!("sync.start"));

    // 命令参数覆盖配置文件
    Config::merge_runtime_args(RuntimeArgs {
        source: args.source,
        dir: args.dir,
        rewrite: if args.rewrite { Some(true) } else { None },
        ..Default::default()
    })?;

    let source = Config::get_source()?;
    if source.is_empty() {
        anyhow::bail!(t!("error.no_source"));
    }
    let source_path = PathBuf::from(&source);
    if !source_path.exists() {
        anyhow::bail!(tf!("error.source_not_found", &source));
    }

    let dir = Config::get_dir()?;
    if dir.is_empty() {
        anyhow::bail!(t!("error.no_dir"));
    }
    let dir_path = PathBuf::from(&dir);
    if !dir_path.exists() {
        anyhow::bail!(tf!("error.dir_not_found", &dir));
    }

    let source_tree = LocaleProcessor::load_json(&source_path)
        .map_err(|e| anyhow::anyhow!(tf!("error.read_source", e)))?;

    let locales = match &args.locales {
        Some(list) => list
            .split(',')
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect(),
        None => discover_locales(&dir_path, &source_path)?,
    };

    if locales.is_empty() {
        Logger::warn(tf!("sync.no_locales", &dir));
        return Ok(());
    }

    let verbose = Config::get_verbose();
    let rewrite = Config::get_rewrite()?;

    render_settings_summary(
        Config::get_config_path()
            .as_deref()
            .map(Path::display)
            .map(|d| d.to_string())
            .as_deref(),
        &source,
        &dir,
        &locales,
        rewrite,
        args.dry_run,
        verbose,
    );

    let options = SyncOptions {
        source_lang: source_lang_of(&source_path),
        rewrite,
        dry_run: args.dry_run,
        verbose,
        batch_size: Config::get_batch_size(),
        base_delay: std::time::Duration::from_secs_f64(Config::get_delay_between_requests()),
        retry_count: Config::get_retry_count(),
        max_parallel_locales: Config::get_max_parallel_locales(),
        whitelist: Config::get_whitelist(),
    };

    let progress = Arc::new(SyncProgress::new(locales.len()));
    let engine = SyncEngine::new(
        source_tree,
        dir_path,
        options,
        Arc::new(GoogleTranslateProvider::new()),
        Arc::clone(&progress),
    );

    spawn_interrupt_watcher(engine.stop_handle());

    let reports = engine.run(locales).await;
    progress.finish();

    render_sync_summary(&reports, args.dry_run, start_time.elapsed());

    Ok(())
}

/// 扫描目录发现目标语言：所有 .json 文件，排除源文件自身
fn discover_locales(dir: &Path, source_path: &Path) -> Result<Vec<String>> {
    let source_name = source_path.file_name();

    let entries =
        std::fs::read_dir(dir).map_err(|_| anyhow::anyhow!(tf!("error.list_dir", dir.display())))?;

    let mut locales = Vec::new();
    for entry in entries {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if source_name.is_some() && path.file_name() == source_name {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            locales.push(stem.to_string());
        }
    }

    locales.sort();
    Ok(locales)
}

/// 从源文件名推导源语言代码（如 en-GB.json -> en），推导失败回退 en
fn source_lang_of(source_path: &Path) -> String {
    source_path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(translator_code)
        .unwrap_or_else(|| "en".to_string())
}
