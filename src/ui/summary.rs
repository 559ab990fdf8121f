// ============================================================================
// LangSync - 结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 设置摘要与同步结果汇总显示
// 边界:
//   - ✅ 设置摘要格式化输出
//   - ✅ 每语言同步结果表格显示
//   - ✅ 统计信息格式化输出
//   - ✅ 国际化文本支持
//   - ❌ 不应包含同步业务逻辑
//   - ❌ 不应包含文件操作
//   - ❌ 不应包含数据处理逻辑
//
// ============================================================================

use std::io::{self, Write};
use std::time::Duration;

use crate::models::catalog::{LocaleReport, LocaleStatus};
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 渲染同步前的设置摘要
pub fn render_settings_summary(
    config_path: Option<&str>,
    source: &str,
    dir: &str,
    locales: &[String],
    rewrite: bool,
    dry_run: bool,
    verbose: bool,
) {
    let mut mode_flags = Vec::new();
    if rewrite {
        mode_flags.push(t!("settings.mode_rewrite"));
    }
    if dry_run {
        mode_flags.push(t!("settings.mode_dry_run"));
    }
    if verbose {
        mode_flags.push(t!("settings.mode_verbose"));
    }
    let mode = if mode_flags.is_empty() {
        t!("settings.mode_standard")
    } else {
        mode_flags.join(" + ")
    };

    // 语言列表最多展示 5 个
    let mut shown: Vec<&str> = locales.iter().take(5).map(String::as_str).collect();
    if locales.len() > 5 {
        shown.push("...");
    }

    Logger::info(Colors::info(&format!(
        "{} {}",
        icons::SUMMARY,
        t!("settings.title")
    )));
    Logger::info(tf!("settings.version", env!("CARGO_PKG_VERSION")));
    if let Some(path) = config_path {
        Logger::info(tf!("settings.config", path));
    }
    Logger::info(tf!("settings.source", source));
    Logger::info(tf!("settings.directory", dir));
    Logger::info(format!(
        "{} {}",
        icons::LOCALE,
        tf!("settings.locales", locales.len(), shown.join(", "))
    ));
    Logger::info(tf!("settings.mode", mode));
    println!();
}

/// 渲染同步结果汇总
pub fn render_sync_summary(reports: &[LocaleReport], dry_run: bool, elapsed: Duration) {
    let title = if dry_run {
        t!("summary.title_dry_run")
    } else {
        t!("summary.title")
    };

    println!();
    Logger::info(Colors::info(&format!("{} {}", icons::SUMMARY, title)));

    let mut total = 0usize;
    for report in reports {
        let (icon, status) = status_cell(&report.status);
        let count = if dry_run { report.missing } else { report.translated };
        total += count;

        let line_key = if dry_run {
            "summary.locale_missing"
        } else {
            "summary.locale_translated"
        };
        let mut line = format!(
            "{} {:10} {:12} {}",
            icon,
            report.locale,
            status,
            tf!(line_key, count)
        );
        if report.failed_batches > 0 {
            line.push_str(&format!(
                "  {}",
                Colors::warn(&tf!("summary.failed_batches", report.failed_batches))
            ));
        }
        Logger::info(line);
    }

    println!();
    if dry_run {
        Logger::warn(format!("{} {}", icons::WARNING, t!("summary.dry_run_completed")));
        Logger::info(tf!("summary.total_missing", total));
    } else {
        Logger::success(format!("{} {}", icons::SUCCESS, t!("summary.completed")));
        Logger::info(tf!("summary.total_translated", total));
    }
    Logger::info(format!(
        "{} {}",
        icons::TIME,
        tf!("summary.elapsed", format!("{:.2}", elapsed.as_secs_f64()))
    ));

    let _ = io::stdout().flush();
}

/// 状态列：图标 + 本地化状态文本
fn status_cell(status: &LocaleStatus) -> (String, String) {
    match status {
        LocaleStatus::Done => (
            Colors::success(icons::SUCCESS),
            Colors::success(&t!("summary.status_done")),
        ),
        LocaleStatus::Partial => (
            Colors::warn(icons::WARNING),
            Colors::warn(&t!("summary.status_partial")),
        ),
        LocaleStatus::Pending => (
            Colors::warn(icons::PENDING),
            Colors::warn(&t!("summary.status_pending")),
        ),
        LocaleStatus::UpToDate => (
            Colors::dim(icons::SKIP),
            Colors::dim(&t!("summary.status_up_to_date")),
        ),
        LocaleStatus::Failed(reason) => (
            Colors::error(icons::ERROR),
            Colors::error(&format!("{} ({})", t!("summary.status_failed"), reason)),
        ),
    }
}
