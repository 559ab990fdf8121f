// ============================================================================
// LangSync - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain business logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Sync command related
    ("sync.start", "Starting locale synchronization..."),
    (
        "sync.no_locales",
        "No locale files found in '{}' to sync (excluding source)",
    ),
    ("sync.interrupted", "Interrupted by user, finishing in-flight writes..."),
    // Engine related
    (
        "engine.rate_limited",
        "[Rate Limit] {} cooling down for {}s...",
    ),
    (
        "engine.batch_failed",
        "Failed to translate {} batch after {} attempts: {}",
    ),
    ("engine.translated_key", "[{}] Translated {} {} {}"),
    ("engine.pending_key", "[{}] Pending: {} {} {}"),
    ("engine.locale_failed", "Locale {} failed: {}"),
    ("engine.task_join_error", "Locale task join error: {}"),
    // Error messages
    (
        "error.no_source",
        "No source file configured. Provide it via --source or langsync.toml",
    ),
    ("error.source_not_found", "Source file '{}' not found"),
    (
        "error.no_dir",
        "No locale directory configured. Provide it via --dir or langsync.toml",
    ),
    ("error.dir_not_found", "Locale directory '{}' not found"),
    ("error.read_source", "Failed to read source catalog: {}"),
    ("error.list_dir", "Failed to read directory '{}'"),
    // Config related
    (
        "config.warn_not_positive",
        "Config value '{}' must be a positive integer, using default",
    ),
    (
        "config.warn_negative_delay",
        "Config value 'delay_between_requests' must be non-negative, using default",
    ),
    // Settings summary
    ("settings.title", "Settings Summary"),
    ("settings.version", "Version: {}"),
    ("settings.config", "Config: {}"),
    ("settings.source", "Source: {}"),
    ("settings.directory", "Directory: {}"),
    ("settings.locales", "Locales: {} ({})"),
    ("settings.mode", "Mode: {}"),
    ("settings.mode_standard", "Standard"),
    ("settings.mode_rewrite", "Rewrite"),
    ("settings.mode_dry_run", "Dry-Run"),
    ("settings.mode_verbose", "Verbose"),
    // Result summary
    ("summary.title", "Sync Statistics"),
    ("summary.title_dry_run", "Dry Run Statistics"),
    ("summary.status_done", "Done"),
    ("summary.status_partial", "Partial"),
    ("summary.status_pending", "Pending"),
    ("summary.status_up_to_date", "Up to date"),
    ("summary.status_failed", "Failed"),
    ("summary.locale_translated", "translated: {}"),
    ("summary.locale_missing", "missing keys: {}"),
    ("summary.failed_batches", "{} batches failed"),
    ("summary.completed", "Sync completed successfully!"),
    ("summary.dry_run_completed", "Dry run completed, no files were changed"),
    ("summary.elapsed", "Time elapsed: {}s"),
    ("summary.total_translated", "Total translated keys: {}"),
    ("summary.total_missing", "Total missing keys found: {}"),
    // Init related
    ("init.start", "Initializing LangSync configuration..."),
    ("init.config_exists", "Config file already exists: {}"),
    (
        "init.use_force_hint",
        "Use --force to overwrite existing config file",
    ),
    ("init.config_created", "Config file created: {}"),
    (
        "init.next_steps",
        "Update the source/dir paths in the config file, then run langsync sync",
    ),
];
