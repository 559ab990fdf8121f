// ============================================================================
// LangSync - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置验证和默认值
//   - ✅ 配置文件读写操作
//   - ❌ 不应包含配置应用逻辑
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含文件系统底层操作
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::tf;
use crate::utils::constants::{CONFIG_FILE_NAME, DEFAULT_WHITELIST};
use crate::utils::logger::Logger;

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// 实际加载的配置文件路径
static LOADED_CONFIG_PATH: std::sync::OnceLock<Option<PathBuf>> = std::sync::OnceLock::new();

/// LangSync 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 同步配置
    #[serde(default)]
    pub sync: SyncConfig,
    /// 翻译配置
    #[serde(default)]
    pub translation: TranslationConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 同步配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// 源语言文件路径
    #[serde(default = "Config::default_source")]
    pub source: String,
    /// 语言文件目录
    #[serde(default = "Config::default_dir")]
    pub dir: String,
    /// 是否重写已有翻译
    #[serde(default)]
    pub rewrite: bool,
}

/// 翻译配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// 每批翻译的条目数
    #[serde(default = "Config::default_batch_size")]
    pub batch_size: usize,
    /// 每次外部请求后的间隔（秒）
    #[serde(default = "Config::default_delay_between_requests")]
    pub delay_between_requests: f64,
    /// 批次重试次数
    #[serde(default = "Config::default_retry_count")]
    pub retry_count: u32,
    /// 最大并行语言数
    #[serde(default = "Config::default_max_parallel_locales")]
    pub max_parallel_locales: usize,
    /// 不翻译的术语白名单（与内置白名单合并）
    #[serde(default)]
    pub whitelist: Vec<String>,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否显示进度条
    #[serde(default = "Config::default_show_progress")]
    pub show_progress: bool,
    /// 是否详细输出
    #[serde(default = "Config::default_verbose")]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub show_progress: Option<bool>,
    pub language: Option<String>,
    pub source: Option<String>,
    pub dir: Option<String>,
    pub rewrite: Option<bool>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认源文件路径
    fn default_source() -> String {
        "messages/en-GB.json".to_string()
    }

    /// 获取默认语言文件目录
    fn default_dir() -> String {
        "messages".to_string()
    }

    /// 获取默认批次大小
    fn default_batch_size() -> usize {
        25
    }

    /// 获取默认请求间隔（秒）
    fn default_delay_between_requests() -> f64 {
        0.2
    }

    /// 获取默认重试次数
    fn default_retry_count() -> u32 {
        3
    }

    /// 获取默认最大并行语言数
    fn default_max_parallel_locales() -> usize {
        3
    }

    /// 获取默认是否显示进度条
    fn default_show_progress() -> bool {
        true
    }

    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }

    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认语言
    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize(config_path: Option<PathBuf>) -> anyhow::Result<()> {
        let (config, loaded_path) = Self::load_config(config_path)?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        let _ = LOADED_CONFIG_PATH.set(loaded_path);
        Ok(())
    }

    /// 加载配置文件
    ///
    /// 未指定 --config 时在当前目录查找 langsync.toml，不存在则使用默认配置
    fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<(Self, Option<PathBuf>)> {
        let path = match config_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path
            }
            None => {
                let default_path = PathBuf::from(CONFIG_FILE_NAME);
                if !default_path.exists() {
                    return Ok((Self::default(), None));
                }
                default_path
            }
        };

        let content = std::fs::read_to_string(&path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.validate();
        Ok((config, Some(path)))
    }

    /// 校验数值范围，越界的配置项告警并回退到默认值
    fn validate(&mut self) {
        if self.translation.batch_size == 0 {
            Logger::warn(tf!("config.warn_not_positive", "batch_size"));
            self.translation.batch_size = Self::default_batch_size();
        }
        if self.translation.delay_between_requests < 0.0 {
            Logger::warn(crate::t!("config.warn_negative_delay"));
            self.translation.delay_between_requests = Self::default_delay_between_requests();
        }
        if self.translation.retry_count == 0 {
            Logger::warn(tf!("config.warn_not_positive", "retry_count"));
            self.translation.retry_count = Self::default_retry_count();
        }
        if self.translation.max_parallel_locales == 0 {
            Logger::warn(tf!("config.warn_not_positive", "max_parallel_locales"));
            self.translation.max_parallel_locales = Self::default_max_parallel_locales();
        }
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        // 合并参数
        if let Some(verbose) = args.verbose {
            config.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            config.output.colored = colored;
        }
        if let Some(show_progress) = args.show_progress {
            config.output.show_progress = show_progress;
        }
        if let Some(language) = args.language {
            config.i18n.language = language;
        }
        if let Some(source) = args.source {
            config.sync.source = source;
        }
        if let Some(dir) = args.dir {
            config.sync.dir = dir;
        }
        if let Some(rewrite) = args.rewrite {
            config.sync.rewrite = rewrite;
        }

        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &PathBuf) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &PathBuf) -> anyhow::Result<()> {
        let default_config = Self::default();
        default_config.save_to_file(config_path)?;
        Ok(())
    }

    /// 获取实际加载的配置文件路径
    pub fn get_config_path() -> Option<PathBuf> {
        LOADED_CONFIG_PATH.get().cloned().flatten()
    }

    /// 获取源文件路径
    pub fn get_source() -> anyhow::Result<String> {
        Ok(Self::read_global()?.sync.source.clone())
    }

    /// 获取语言文件目录
    pub fn get_dir() -> anyhow::Result<String> {
        Ok(Self::read_global()?.sync.dir.clone())
    }

    /// 获取是否重写已有翻译
    pub fn get_rewrite() -> anyhow::Result<bool> {
        Ok(Self::read_global()?.sync.rewrite)
    }

    /// 获取批次大小（带默认值）
    pub fn get_batch_size() -> usize {
        Self::read_global()
            .map(|c| c.translation.batch_size)
            .unwrap_or_else(|_| Self::default_batch_size())
    }

    /// 获取请求间隔秒数（带默认值）
    pub fn get_delay_between_requests() -> f64 {
        Self::read_global()
            .map(|c| c.translation.delay_between_requests)
            .unwrap_or_else(|_| Self::default_delay_between_requests())
    }

    /// 获取重试次数（带默认值）
    pub fn get_retry_count() -> u32 {
        Self::read_global()
            .map(|c| c.translation.retry_count)
            .unwrap_or_else(|_| Self::default_retry_count())
    }

    /// 获取最大并行语言数（带默认值）
    pub fn get_max_parallel_locales() -> usize {
        Self::read_global()
            .map(|c| c.translation.max_parallel_locales)
            .unwrap_or_else(|_| Self::default_max_parallel_locales())
    }

    /// 获取白名单（用户配置与内置白名单合并去重，保持确定性顺序）
    pub fn get_whitelist() -> Vec<String> {
        let user_terms = Self::read_global()
            .map(|c| c.translation.whitelist.clone())
            .unwrap_or_default();

        let mut merged: BTreeSet<String> =
            DEFAULT_WHITELIST.iter().map(|s| s.to_string()).collect();
        merged.extend(user_terms);
        merged.into_iter().collect()
    }

    /// 获取是否显示进度条（带默认值）
    pub fn get_show_progress() -> bool {
        Self::read_global()
            .map(|c| c.output.show_progress)
            .unwrap_or_else(|_| Self::default_show_progress())
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        Self::read_global()
            .map(|c| c.output.verbose)
            .unwrap_or_else(|_| Self::default_verbose())
    }

    /// 获取是否彩色输出
    pub fn get_colored() -> anyhow::Result<bool> {
        Ok(Self::read_global()?.output.colored)
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Ok(Self::read_global()?.i18n.language.clone())
    }

    /// 读取全局配置快照
    fn read_global() -> anyhow::Result<Config> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sync: SyncConfig::default(),
            translation: TranslationConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source: Config::default_source(),
            dir: Config::default_dir(),
            rewrite: false,
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            batch_size: Config::default_batch_size(),
            delay_between_requests: Config::default_delay_between_requests(),
            retry_count: Config::default_retry_count(),
            max_parallel_locales: Config::default_max_parallel_locales(),
            whitelist: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_progress: Config::default_show_progress(),
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.sync.source, "messages/en-GB.json");
        assert_eq!(config.translation.batch_size, 25);
        assert_eq!(config.translation.retry_count, 3);
        assert_eq!(config.translation.max_parallel_locales, 3);
        assert!(config.translation.whitelist.is_empty());
    }

    #[test]
    fn validate_resets_out_of_range_values() {
        let mut config = Config::default();
        config.translation.batch_size = 0;
        config.translation.delay_between_requests = -1.0;
        config.translation.max_parallel_locales = 0;

        config.validate();

        assert_eq!(config.translation.batch_size, 25);
        assert_eq!(config.translation.delay_between_requests, 0.2);
        assert_eq!(config.translation.max_parallel_locales, 3);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let mut config = Config::default();
        config.sync.source = "src/locales/en.json".to_string();
        config.translation.whitelist = vec!["MyCompany".to_string()];

        let content = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();

        assert_eq!(loaded.sync.source, "src/locales/en.json");
        assert_eq!(loaded.translation.whitelist, vec!["MyCompany".to_string()]);
    }
}
