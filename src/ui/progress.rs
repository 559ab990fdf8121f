// ============================================================================
// LangSync - 同步进度组件
// ============================================================================
//
// 文件: src/ui/progress.rs
// 职责: 同步过程的进度条显示
// 边界:
//   - ✅ 总进度条管理
//   - ✅ 单语言进度条增删
//   - ✅ 终端能力检测与开关
//   - ❌ 不应包含同步业务逻辑
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::models::config::Config;

/// 同步进度显示
///
/// 一条总进度条（按语言推进）加上每个活跃语言一条子进度条（按缺失键
/// 推进）。线程安全，可被所有语言任务共享。非终端输出或 --no-progress
/// 时全部隐藏
pub struct SyncProgress {
    multi: MultiProgress,
    overall: ProgressBar,
}

impl SyncProgress {
    /// 创建进度显示，total 为语言总数
    pub fn new(total: usize) -> Self {
        let enabled = Config::get_show_progress() && atty::is(atty::Stream::Stdout);

        let multi = MultiProgress::new();
        if !enabled {
            multi.set_draw_target(ProgressDrawTarget::hidden());
        }

        let overall = multi.add(ProgressBar::new(total as u64));
        overall.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg:12} [{bar:40.green}] {pos}/{len}")
                .expect("valid progress template")
                .progress_chars("█░ "),
        );
        overall.set_message("Total");

        Self { multi, overall }
    }

    /// 为一个语言添加子进度条，total 为该语言缺失键数
    pub fn add_locale(&self, locale: &str, total: usize) -> ProgressBar {
        let bar = self.multi.add(ProgressBar::new(total as u64));
        bar.set_style(
            ProgressStyle::with_template("  {msg:10} [{bar:40.cyan}] {pos}/{len}")
                .expect("valid progress template")
                .progress_chars("█░ "),
        );
        bar.set_message(locale.to_string());
        bar
    }

    /// 移除语言子进度条
    pub fn finish_locale(&self, bar: &ProgressBar) {
        bar.finish_and_clear();
        self.multi.remove(bar);
    }

    /// 总进度推进一个语言
    pub fn locale_done(&self) {
        self.overall.inc(1);
    }

    /// 结束总进度条
    pub fn finish(&self) {
        self.overall.finish_and_clear();
    }
}
