// ============================================================================
// LangSync - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 同步命令相关
    ("sync.start", "开始同步语言文件..."),
    ("sync.no_locales", "目录 '{}' 中没有可同步的语言文件（已排除源文件）"),
    ("sync.interrupted", "收到中断信号，等待进行中的写入完成..."),
    // 同步引擎相关
    ("engine.rate_limited", "[限流] {} 冷却 {} 秒..."),
    ("engine.batch_failed", "翻译 {} 批次失败（已重试 {} 次）: {}"),
    ("engine.translated_key", "[{}] 已翻译 {} {} {}"),
    ("engine.pending_key", "[{}] 待翻译: {} {} {}"),
    ("engine.locale_failed", "语言 {} 同步失败: {}"),
    ("engine.task_join_error", "语言任务 join 失败: {}"),
    // 错误信息
    (
        "error.no_source",
        "未配置源文件，请通过 --source 或 langsync.toml 指定",
    ),
    ("error.source_not_found", "源文件 '{}' 不存在"),
    (
        "error.no_dir",
        "未配置语言文件目录，请通过 --dir 或 langsync.toml 指定",
    ),
    ("error.dir_not_found", "语言文件目录 '{}' 不存在"),
    ("error.read_source", "读取源语言文件失败: {}"),
    ("error.list_dir", "读取目录 '{}' 失败"),
    // 配置相关
    (
        "config.warn_not_positive",
        "配置项 '{}' 必须为正整数，已使用默认值",
    ),
    (
        "config.warn_negative_delay",
        "配置项 'delay_between_requests' 不能为负数，已使用默认值",
    ),
    // 设置摘要
    ("settings.title", "设置摘要"),
    ("settings.version", "版本: {}"),
    ("settings.config", "配置: {}"),
    ("settings.source", "源文件: {}"),
    ("settings.directory", "目录: {}"),
    ("settings.locales", "语言数: {} ({})"),
    ("settings.mode", "模式: {}"),
    ("settings.mode_standard", "标准"),
    ("settings.mode_rewrite", "重写"),
    ("settings.mode_dry_run", "试运行"),
    ("settings.mode_verbose", "详细"),
    // 结果汇总
    ("summary.title", "同步统计"),
    ("summary.title_dry_run", "试运行统计"),
    ("summary.status_done", "完成"),
    ("summary.status_partial", "部分完成"),
    ("summary.status_pending", "待翻译"),
    ("summary.status_up_to_date", "已最新"),
    ("summary.status_failed", "失败"),
    ("summary.locale_translated", "已翻译: {}"),
    ("summary.locale_missing", "缺失键: {}"),
    ("summary.failed_batches", "{} 个批次失败"),
    ("summary.completed", "同步完成!"),
    ("summary.dry_run_completed", "试运行完成，未修改任何文件"),
    ("summary.elapsed", "耗时: {}s"),
    ("summary.total_translated", "共翻译键数: {}"),
    ("summary.total_missing", "共发现缺失键数: {}"),
    // 初始化相关
    ("init.start", "正在初始化 LangSync 配置..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖已有配置文件"),
    ("init.config_created", "配置文件已创建: {}"),
    (
        "init.next_steps",
        "请修改配置文件中的 source/dir 路径后再运行 langsync sync",
    ),
];
