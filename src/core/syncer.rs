// ============================================================================
// LangSync - 同步引擎
// ============================================================================
//
// 文件: src/core/syncer.rs
// 职责: 按语言并发驱动翻译同步
// 边界:
//   - ✅ 单语言同步状态机（加载→差异→批翻译→合并→修剪→落盘）
//   - ✅ 批次重试/退避/限流冷却
//   - ✅ 语言级并发控制
//   - ✅ 中断信号响应
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含汇总表渲染
//   - ❌ 不应包含 provider 实现细节
//
// ============================================================================

use anyhow::Result;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::core::processor::LocaleProcessor;
use crate::core::translator::{translator_code, TranslationError, TranslationProvider, TranslationService};
use crate::models::catalog::{Catalog, LocaleReport, LocaleStatus, MissingItem};
use crate::ui::progress::SyncProgress;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 限流后请求间隔的增长上限
const MAX_REQUEST_DELAY: Duration = Duration::from_secs(2);

/// 同步引擎配置
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// 源语言代码（由源文件名推导）
    pub source_lang: String,
    /// 重写已有翻译
    pub rewrite: bool,
    /// 试运行：只统计缺失键，不调用翻译也不写文件
    pub dry_run: bool,
    /// 逐键输出
    pub verbose: bool,
    /// 每批条目数
    pub batch_size: usize,
    /// 每次外部调用后的基础间隔
    pub base_delay: Duration,
    /// 批次重试次数
    pub retry_count: u32,
    /// 最大并行语言数
    pub max_parallel_locales: usize,
    /// 白名单术语
    pub whitelist: Vec<String>,
}

/// 同步引擎
///
/// 每个语言一个 tokio 任务，由信号量限制并发；语言内批次串行。
/// 源树只读共享，每个目标文件由其语言任务独占，任务间没有共享可变
/// 状态（进度汇报除外）
pub struct SyncEngine {
    /// 源语言目录树（所有任务只读共享）
    source: Arc<Catalog>,
    /// 语言文件目录
    messages_dir: PathBuf,
    /// 引擎配置
    options: SyncOptions,
    /// 外部翻译 provider
    provider: Arc<dyn TranslationProvider>,
    /// 中断标志：置位后不再开始新的语言/批次
    should_stop: Arc<AtomicBool>,
    /// 进度汇报
    progress: Arc<SyncProgress>,
}

impl SyncEngine {
    /// 创建同步引擎
    pub fn new(
        source: Catalog,
        messages_dir: PathBuf,
        options: SyncOptions,
        provider: Arc<dyn TranslationProvider>,
        progress: Arc<SyncProgress>,
    ) -> Self {
        Self {
            source: Arc::new(source),
            messages_dir,
            options,
            provider,
            should_stop: Arc::new(AtomicBool::new(false)),
            progress,
        }
    }

    /// 中断标志句柄（供 Ctrl-C 处理使用）
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.should_stop)
    }

    /// 并发同步所有语言，返回每个语言的结果
    pub async fn run(&self, locales: Vec<String>) -> Vec<LocaleReport> {
        let semaphore = Arc::new(Semaphore::new(self.options.max_parallel_locales));

        let mut handles: Vec<JoinHandle<LocaleReport>> = Vec::new();
        for locale in locales {
            let engine = self.clone_for_task();
            let semaphore = Arc::clone(&semaphore);

            handles.push(tokio::spawn(async move {
                let _permit = match semaphore.acquire().await {
                    Ok(permit) => permit,
                    Err(_) => return LocaleReport::failed(locale, "scheduler stopped"),
                };

                if engine.should_stop.load(Ordering::SeqCst) {
                    return LocaleReport::failed(locale, "interrupted");
                }

                match engine.process_locale(&locale).await {
                    Ok(report) => report,
                    Err(e) => {
                        Logger::error(tf!("engine.locale_failed", &locale, e));
                        LocaleReport::failed(locale, e.to_string())
                    }
                }
            }));
        }

        let mut reports = Vec::new();
        for handle in handles {
            match handle.await {
                Ok(report) => reports.push(report),
                Err(e) => Logger::error(tf!("engine.task_join_error", e)),
            }
        }

        reports.sort_by(|a, b| a.locale.cmp(&b.locale));
        reports
    }

    /// 同步单个语言
    ///
    /// 状态机：加载 → 差异 → (无缺失 | 分批翻译 → 合并) → 修剪 → 落盘。
    /// 翻译层面的失败都被收敛在批次内，只有文件加载/写入错误会让
    /// 该语言整体失败，且不影响其他语言
    async fn process_locale(&self, locale: &str) -> Result<LocaleReport> {
        let target_file = self.messages_dir.join(format!("{}.json", locale));
        let mut target = LocaleProcessor::load_json(&target_file)?;

        let processor = LocaleProcessor::new(&self.source);
        let missing = processor.get_missing_keys(&mut target, self.options.rewrite);

        tracing::debug!(locale, missing = missing.len(), "computed missing keys");

        let mut report = LocaleReport::new(locale);
        report.missing = missing.len();

        if missing.is_empty() {
            // 没有缺失键也要修剪多余键并落盘
            if !self.options.dry_run {
                LocaleProcessor::prune_extra_keys(&self.source, &mut target);
                LocaleProcessor::save_json(&target_file, &target)?;
            }
            self.progress.locale_done();
            return Ok(report);
        }

        if self.options.dry_run {
            if self.options.verbose {
                for item in &missing {
                    Logger::info(tf!(
                        "engine.pending_key",
                        locale,
                        item.dotted_path(),
                        icons::ARROW,
                        &item.value
                    ));
                }
            }
            report.status = LocaleStatus::Pending;
            self.progress.locale_done();
            return Ok(report);
        }

        let service = TranslationService::new(
            self.options.source_lang.clone(),
            translator_code(locale),
            self.options.whitelist.clone(),
            Arc::clone(&self.provider),
        );

        let bar = self.progress.add_locale(locale, missing.len());

        let mut delay = self.options.base_delay;
        for batch in missing.chunks(self.options.batch_size) {
            if self.should_stop.load(Ordering::SeqCst) {
                break;
            }

            match self.translate_batch_with_retry(&service, locale, batch, &mut delay).await {
                Some(translated) => {
                    for (item, value) in batch.iter().zip(translated) {
                        if self.options.verbose {
                            Logger::info(tf!(
                                "engine.translated_key",
                                locale,
                                item.dotted_path(),
                                icons::ARROW,
                                &value
                            ));
                        }
                        LocaleProcessor::set_value_by_path(&mut target, &item.path, value);
                        report.translated += 1;
                    }
                }
                None => {
                    // 重试耗尽的批次跳过，同步不因单个批次停摆
                    report.failed_batches += 1;
                }
            }
            bar.inc(batch.len() as u64);
        }

        LocaleProcessor::prune_extra_keys(&self.source, &mut target);
        LocaleProcessor::save_json(&target_file, &target)?;

        // 有批次重试耗尽时不能报成 Done/UpToDate，避免把局部失败当成功
        report.status = if report.failed_batches > 0 {
            LocaleStatus::Partial
        } else if report.translated > 0 {
            LocaleStatus::Done
        } else {
            LocaleStatus::UpToDate
        };

        self.progress.finish_locale(&bar);
        self.progress.locale_done();

        Ok(report)
    }

    /// 带重试的批次翻译
    ///
    /// 限流：冷却 2s * 尝试次数，并把请求间隔翻倍（上限 2s）后重试；
    /// 其他失败：线性退避 1s * 尝试次数。最后一次尝试失败后不再退避/
    /// 冷却，记录失败并返回 None
    async fn translate_batch_with_retry(
        &self,
        service: &TranslationService,
        locale: &str,
        batch: &[MissingItem],
        delay: &mut Duration,
    ) -> Option<Vec<Value>> {
        let values: Vec<Value> = batch.iter().map(|item| item.value.clone()).collect();

        for attempt in 1..=self.options.retry_count {
            match service.translate_batch(&values, *delay).await {
                Ok(translated) => return Some(translated),
                Err(e) => {
                    if attempt == self.options.retry_count {
                        Logger::error(tf!(
                            "engine.batch_failed",
                            locale,
                            self.options.retry_count,
                            e
                        ));
                    } else if matches!(e, TranslationError::RateLimited) {
                        let cooldown = Duration::from_secs(2 * u64::from(attempt));
                        Logger::warn(tf!("engine.rate_limited", locale, cooldown.as_secs()));
                        sleep(cooldown).await;
                        *delay = (*delay * 2).min(MAX_REQUEST_DELAY);
                    } else {
                        sleep(Duration::from_secs(u64::from(attempt))).await;
                    }
                }
            }

            if self.should_stop.load(Ordering::SeqCst) {
                break;
            }
        }

        None
    }

    /// 为任务执行创建引擎克隆
    fn clone_for_task(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            messages_dir: self.messages_dir.clone(),
            options: self.options.clone(),
            provider: Arc::clone(&self.provider),
            should_stop: Arc::clone(&self.should_stop),
            progress: Arc::clone(&self.progress),
        }
    }
}

/// 监听 Ctrl-C，置位中断标志
///
/// 置位后引擎不再开始新的语言/批次；进行中的文件写入本身是原子替换，
/// 不会留下半截文件
pub fn spawn_interrupt_watcher(should_stop: Arc<AtomicBool>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            Logger::warn(t!("sync.interrupted"));
            should_stop.store(true, Ordering::SeqCst);
        }
    });
}
