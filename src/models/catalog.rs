// ============================================================================
// LangSync - 目录树数据模型
// ============================================================================
//
// 文件: src/models/catalog.rs
// 职责: 语言文件同步相关的数据结构定义
// 边界:
//   - ✅ 目录树类型别名定义
//   - ✅ 缺失键数据结构定义
//   - ✅ 语言同步状态枚举定义
//   - ✅ 语言同步结果数据结构定义
//   - ❌ 不应包含树遍历逻辑
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含文件操作逻辑
//
// ============================================================================

use serde_json::{Map, Value};
use std::fmt;

/// 语言目录树：嵌套的 key -> 子节点映射，叶子为字符串值
///
/// 依赖 serde_json 的 preserve_order，保证文件输出键序稳定
pub type Catalog = Map<String, Value>;

/// 缺失键条目：源树中需要翻译的叶子
#[derive(Debug, Clone, PartialEq)]
pub struct MissingItem {
    /// 定位叶子的键路径（源树先序遍历顺序）
    pub path: Vec<String>,
    /// 源树中的默认值
    pub value: Value,
}

impl MissingItem {
    /// 创建缺失键条目
    pub fn new(path: Vec<String>, value: Value) -> Self {
        Self { path, value }
    }

    /// 以点号连接的可读路径
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}

/// 单个语言的同步状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleStatus {
    /// 全部键已是最新
    UpToDate,
    /// 已翻译并写入
    Done,
    /// 已落盘但存在重试耗尽被跳过的批次
    Partial,
    /// 试运行，仅统计缺失键
    Pending,
    /// 同步失败（目录文件损坏、写入失败等）
    Failed(String),
}

impl fmt::Display for LocaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleStatus::UpToDate => write!(f, "UpToDate"),
            LocaleStatus::Done => write!(f, "Done"),
            LocaleStatus::Partial => write!(f, "Partial"),
            LocaleStatus::Pending => write!(f, "Pending"),
            LocaleStatus::Failed(reason) => write!(f, "Failed: {}", reason),
        }
    }
}

/// 单个语言的同步结果
#[derive(Debug, Clone)]
pub struct LocaleReport {
    /// 语言标识（文件名去掉 .json）
    pub locale: String,
    /// 本次写入的翻译数
    pub translated: usize,
    /// 诊断出的缺失键数
    pub missing: usize,
    /// 重试耗尽后被跳过的批次数
    pub failed_batches: usize,
    /// 同步状态
    pub status: LocaleStatus,
}

impl LocaleReport {
    /// 创建语言同步结果
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            translated: 0,
            missing: 0,
            failed_batches: 0,
            status: LocaleStatus::UpToDate,
        }
    }

    /// 创建失败结果
    pub fn failed(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            translated: 0,
            missing: 0,
            failed_batches: 0,
            status: LocaleStatus::Failed(reason.into()),
        }
    }
}
