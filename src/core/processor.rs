// ============================================================================
// LangSync - 目录树处理器
// ============================================================================
//
// 文件: src/core/processor.rs
// 职责: 源/目标目录树的差异计算与维护
// 边界:
//   - ✅ 缺失键差异计算
//   - ✅ 按路径写入叶子值
//   - ✅ 多余键修剪
//   - ✅ 语言 JSON 文件读写
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含并发调度逻辑
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::models::catalog::{Catalog, MissingItem};

/// 目录树处理器
///
/// 持有只读的源树，向目标树提供差异计算和修剪操作
pub struct LocaleProcessor<'a> {
    /// 源语言目录树（权威键集合）
    source: &'a Catalog,
}

impl<'a> LocaleProcessor<'a> {
    /// 创建处理器
    pub fn new(source: &'a Catalog) -> Self {
        Self { source }
    }

    /// 计算目标树中缺失/为空的叶子
    ///
    /// 按源树先序遍历返回 (路径, 源值)。遍历同时会把目标树中与源树
    /// 结构不符的节点强制为空映射，保证后续 set_value_by_path 可写。
    /// rewrite 为 true 时所有源叶子都视为缺失。
    pub fn get_missing_keys(&self, target: &mut Catalog, rewrite: bool) -> Vec<MissingItem> {
        let mut missing = Vec::new();
        Self::find_missing(self.source, target, &mut Vec::new(), rewrite, &mut missing);
        missing
    }

    fn find_missing(
        source: &Catalog,
        target: &mut Catalog,
        path: &mut Vec<String>,
        rewrite: bool,
        missing: &mut Vec<MissingItem>,
    ) {
        for (key, value) in source {
            path.push(key.clone());

            if let Value::Object(source_child) = value {
                // 目标处缺少映射或形状不符时重置为空映射
                if !matches!(target.get(key), Some(Value::Object(_))) {
                    target.insert(key.clone(), Value::Object(Catalog::new()));
                }
                if let Some(Value::Object(target_child)) = target.get_mut(key) {
                    Self::find_missing(source_child, target_child, path, rewrite, missing);
                }
            } else {
                let needs_translation = rewrite
                    || match target.get(key) {
                        None => true,
                        Some(existing) => Self::is_empty_value(existing),
                    };
                if needs_translation {
                    missing.push(MissingItem::new(path.clone(), value.clone()));
                }
            }

            path.pop();
        }
    }

    /// 空/假值判定：null、false、0、空字符串、空容器都算缺失
    fn is_empty_value(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
        }
    }

    /// 沿路径写入叶子值，按需创建中间映射节点
    ///
    /// 不会影响路径外的兄弟键；路径上已有的非映射节点会被替换为映射
    pub fn set_value_by_path(tree: &mut Catalog, path: &[String], value: Value) {
        let Some((last, intermediate)) = path.split_last() else {
            return;
        };

        let mut current = tree;
        for key in intermediate {
            if !matches!(current.get(key), Some(Value::Object(_))) {
                current.insert(key.clone(), Value::Object(Catalog::new()));
            }
            match current.get_mut(key) {
                Some(Value::Object(child)) => current = child,
                _ => unreachable!("intermediate node was just coerced to a mapping"),
            }
        }
        current.insert(last.clone(), value);
    }

    /// 递归删除目标树中源树没有的键
    pub fn prune_extra_keys(source: &Catalog, target: &mut Catalog) {
        target.retain(|key, _| source.contains_key(key));

        for (key, value) in source {
            if let (Value::Object(source_child), Some(Value::Object(target_child))) =
                (value, target.get_mut(key))
            {
                Self::prune_extra_keys(source_child, target_child);
            }
        }
    }

    /// 读取语言 JSON 文件
    ///
    /// 文件不存在视为空树；存在但内容非法是需要用户处理的错误
    pub fn load_json(path: &Path) -> Result<Catalog> {
        if !path.exists() {
            return Ok(Catalog::new());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in locale file: {}", path.display()))?;

        match value {
            Value::Object(map) => Ok(map),
            _ => anyhow::bail!(
                "Locale file is not a JSON object: {}",
                path.display()
            ),
        }
    }

    /// 写出语言 JSON 文件
    ///
    /// 2 空格缩进、保留非 ASCII 字符、末尾换行，内容不变时字节稳定。
    /// 先写同目录临时文件再 rename，避免中断产生半截文件
    pub fn save_json(path: &Path, tree: &Catalog) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&Value::Object(tree.clone()))
            .with_context(|| format!("Failed to serialize locale file: {}", path.display()))?;
        content.push('\n');

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write locale file: {}", tmp_path.display()))?;
        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to replace locale file: {}", path.display()))?;

        Ok(())
    }
}
