// ============================================================================
// LangSync - 同步引擎集成测试
// ============================================================================

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use langsync::core::processor::LocaleProcessor;
use langsync::core::syncer::{SyncEngine, SyncOptions};
use langsync::core::translator::{TranslationError, TranslationProvider};
use langsync::models::catalog::{Catalog, LocaleStatus};
use langsync::ui::progress::SyncProgress;

/// 原样返回输入的 provider，并记录调用次数
struct EchoProvider {
    calls: AtomicUsize,
}

impl EchoProvider {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TranslationProvider for EchoProvider {
    async fn translate_batch(
        &self,
        texts: &[String],
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<Vec<String>, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts.to_vec())
    }
}

/// 前 N 次返回限流，之后原样返回
struct RateLimitedThenOkProvider {
    failures_left: AtomicUsize,
}

#[async_trait]
impl TranslationProvider for RateLimitedThenOkProvider {
    async fn translate_batch(
        &self,
        texts: &[String],
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<Vec<String>, TranslationError> {
        if self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(TranslationError::RateLimited);
        }
        Ok(texts.to_vec())
    }
}

/// 始终限流的 provider，并记录调用次数
struct AlwaysRateLimitedProvider {
    calls: AtomicUsize,
}

#[async_trait]
impl TranslationProvider for AlwaysRateLimitedProvider {
    async fn translate_batch(
        &self,
        _texts: &[String],
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<Vec<String>, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(TranslationError::RateLimited)
    }
}

/// 始终失败的 provider
struct AlwaysFailingProvider;

#[async_trait]
impl TranslationProvider for AlwaysFailingProvider {
    async fn translate_batch(
        &self,
        _texts: &[String],
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<Vec<String>, TranslationError> {
        Err(TranslationError::Provider("connection reset".to_string()))
    }
}

fn as_map(value: Value) -> Catalog {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

fn options() -> SyncOptions {
    SyncOptions {
        source_lang: "en".to_string(),
        rewrite: false,
        dry_run: false,
        verbose: false,
        batch_size: 25,
        base_delay: Duration::ZERO,
        retry_count: 3,
        max_parallel_locales: 3,
        whitelist: Vec::new(),
    }
}

fn engine_with(
    source: Catalog,
    dir: &Path,
    options: SyncOptions,
    provider: Arc<dyn TranslationProvider>,
    locales: usize,
) -> SyncEngine {
    let progress = Arc::new(SyncProgress::new(locales));
    SyncEngine::new(source, dir.to_path_buf(), options, provider, progress)
}

#[tokio::test]
async fn sync_fills_empty_target_from_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = as_map(json!({ "a": "Hello", "b": { "c": "World" } }));

    let engine = engine_with(
        source.clone(),
        dir.path(),
        options(),
        Arc::new(EchoProvider::new()),
        1,
    );
    let reports = engine.run(vec!["es-ES".to_string()]).await;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].translated, 2);
    assert_eq!(reports[0].status, LocaleStatus::Done);

    let written = LocaleProcessor::load_json(&dir.path().join("es-ES.json")).unwrap();
    assert_eq!(written, source);
}

#[tokio::test]
async fn second_run_prunes_extra_keys() {
    let dir = tempfile::tempdir().unwrap();
    let source = as_map(json!({ "a": "Hello", "b": { "c": "World" } }));

    // 目标已完整，但带有源中不存在的键
    let target = as_map(json!({ "a": "Hello", "b": { "c": "World" }, "d": "extra" }));
    let target_file = dir.path().join("es-ES.json");
    LocaleProcessor::save_json(&target_file, &target).unwrap();

    let engine = engine_with(
        source.clone(),
        dir.path(),
        options(),
        Arc::new(EchoProvider::new()),
        1,
    );
    let reports = engine.run(vec!["es-ES".to_string()]).await;

    assert_eq!(reports[0].translated, 0);
    assert_eq!(reports[0].status, LocaleStatus::UpToDate);

    let written = LocaleProcessor::load_json(&target_file).unwrap();
    assert_eq!(written, source);
}

#[tokio::test]
async fn dry_run_reports_counts_without_calling_provider_or_writing() {
    let dir = tempfile::tempdir().unwrap();
    let source = as_map(json!({ "a": "Hello", "b": { "c": "World" } }));

    let provider = Arc::new(EchoProvider::new());
    let mut opts = options();
    opts.dry_run = true;

    let engine = engine_with(source, dir.path(), opts, Arc::clone(&provider) as _, 1);
    let reports = engine.run(vec!["fr-FR".to_string()]).await;

    assert_eq!(reports[0].missing, 2);
    assert_eq!(reports[0].status, LocaleStatus::Pending);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    assert!(!dir.path().join("fr-FR.json").exists());
}

#[tokio::test]
async fn existing_translations_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let source = as_map(json!({ "a": "Hello", "b": "World" }));

    let target = as_map(json!({ "a": "Bonjour" }));
    let target_file = dir.path().join("fr-FR.json");
    LocaleProcessor::save_json(&target_file, &target).unwrap();

    let engine = engine_with(
        source,
        dir.path(),
        options(),
        Arc::new(EchoProvider::new()),
        1,
    );
    let reports = engine.run(vec!["fr-FR".to_string()]).await;

    assert_eq!(reports[0].translated, 1);

    let written = LocaleProcessor::load_json(&target_file).unwrap();
    assert_eq!(written, as_map(json!({ "a": "Bonjour", "b": "World" })));
}

#[tokio::test(start_paused = true)]
async fn rate_limited_batch_is_retried_until_success() {
    let dir = tempfile::tempdir().unwrap();
    let source = as_map(json!({ "a": "Hello" }));

    let provider = Arc::new(RateLimitedThenOkProvider {
        failures_left: AtomicUsize::new(1),
    });

    let engine = engine_with(source.clone(), dir.path(), options(), provider, 1);
    let reports = engine.run(vec!["de-DE".to_string()]).await;

    assert_eq!(reports[0].translated, 1);
    assert_eq!(reports[0].failed_batches, 0);

    let written = LocaleProcessor::load_json(&dir.path().join("de-DE.json")).unwrap();
    assert_eq!(written, source);
}

#[tokio::test(start_paused = true)]
async fn exhausted_batch_is_skipped_but_locale_still_persists() {
    let dir = tempfile::tempdir().unwrap();
    let source = as_map(json!({ "a": "Hello", "b": "World" }));

    let engine = engine_with(
        source,
        dir.path(),
        options(),
        Arc::new(AlwaysFailingProvider),
        1,
    );
    let reports = engine.run(vec!["it-IT".to_string()]).await;

    assert_eq!(reports[0].translated, 0);
    assert_eq!(reports[0].failed_batches, 1);
    // 有批次耗尽时不能显示为已最新
    assert_eq!(reports[0].status, LocaleStatus::Partial);

    // 批次失败不阻止修剪与落盘，缺失键保持未翻译
    let written = LocaleProcessor::load_json(&dir.path().join("it-IT.json")).unwrap();
    assert!(written.is_empty());
}

#[tokio::test(start_paused = true)]
async fn rate_limit_exhaustion_skips_final_cooldown() {
    let dir = tempfile::tempdir().unwrap();
    let source = as_map(json!({ "a": "Hello" }));

    let provider = Arc::new(AlwaysRateLimitedProvider {
        calls: AtomicUsize::new(0),
    });

    let engine = engine_with(
        source,
        dir.path(),
        options(),
        Arc::clone(&provider) as _,
        1,
    );

    let started = tokio::time::Instant::now();
    let reports = engine.run(vec!["ja-JP".to_string()]).await;
    let elapsed = started.elapsed();

    assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
    assert_eq!(reports[0].failed_batches, 1);
    assert_eq!(reports[0].status, LocaleStatus::Partial);

    // 冷却只发生在前两次尝试之后（2s + 4s），最后一次失败直接放弃
    assert!(
        elapsed < Duration::from_secs(7),
        "unexpected cooldown after the final attempt: {:?}",
        elapsed
    );
    assert!(elapsed >= Duration::from_secs(6));
}

#[tokio::test]
async fn invalid_target_json_fails_that_locale_only() {
    let dir = tempfile::tempdir().unwrap();
    let source = as_map(json!({ "a": "Hello" }));

    std::fs::write(dir.path().join("broken.json"), "not json").unwrap();

    let engine = engine_with(
        source.clone(),
        dir.path(),
        options(),
        Arc::new(EchoProvider::new()),
        2,
    );
    let reports = engine
        .run(vec!["broken".to_string(), "nl-NL".to_string()])
        .await;

    let broken = reports.iter().find(|r| r.locale == "broken").unwrap();
    assert!(matches!(broken.status, LocaleStatus::Failed(_)));

    let ok = reports.iter().find(|r| r.locale == "nl-NL").unwrap();
    assert_eq!(ok.translated, 1);
    let written = LocaleProcessor::load_json(&dir.path().join("nl-NL.json")).unwrap();
    assert_eq!(written, source);
}

#[tokio::test]
async fn locales_are_processed_concurrently_and_independently() {
    let dir = tempfile::tempdir().unwrap();
    let source = as_map(json!({ "greeting": "Hello", "nested": { "bye": "Goodbye" } }));

    let locales: Vec<String> = vec!["de-DE", "es-ES", "fr-FR", "it-IT", "pt-BR"]
        .into_iter()
        .map(String::from)
        .collect();

    let engine = engine_with(
        source.clone(),
        dir.path(),
        options(),
        Arc::new(EchoProvider::new()),
        locales.len(),
    );
    let reports = engine.run(locales.clone()).await;

    assert_eq!(reports.len(), locales.len());
    for locale in &locales {
        let written = LocaleProcessor::load_json(&dir.path().join(format!("{}.json", locale))).unwrap();
        assert_eq!(&written, &source, "locale {} should match source", locale);
    }

    // 结果按语言排序，便于稳定输出
    let sorted: Vec<&str> = reports.iter().map(|r| r.locale.as_str()).collect();
    assert_eq!(sorted, vec!["de-DE", "es-ES", "fr-FR", "it-IT", "pt-BR"]);
}

/// Map 字面量辅助：确认 preserve_order 下输出键序与源一致
#[tokio::test]
async fn output_preserves_source_key_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut source = Map::new();
    source.insert("zebra".to_string(), json!("Zebra"));
    source.insert("alpha".to_string(), json!("Alpha"));
    source.insert("mango".to_string(), json!("Mango"));

    let engine = engine_with(
        source,
        dir.path(),
        options(),
        Arc::new(EchoProvider::new()),
        1,
    );
    engine.run(vec!["sv-SE".to_string()]).await;

    let text = std::fs::read_to_string(dir.path().join("sv-SE.json")).unwrap();
    let zebra = text.find("zebra").unwrap();
    let alpha = text.find("alpha").unwrap();
    let mango = text.find("mango").unwrap();
    assert!(zebra < alpha && alpha < mango);
}
