// ============================================================================
// LangSync - 文本保护器
// ============================================================================
//
// 文件: src/core/protector.rs
// 职责: 翻译前后保护占位符与白名单术语
// 边界:
//   - ✅ 占位符识别与标记替换
//   - ✅ 白名单术语标记替换
//   - ✅ 标记还原（容忍翻译引擎改写）
//   - ❌ 不应包含翻译调用逻辑
//   - ❌ 不应包含批次管理逻辑
//   - ❌ 不应包含配置读取
//
// ============================================================================

use regex::{NoExpand, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

/// 标记 -> 原始文本的映射，作用域为单个文本的 protect/restore 往返
pub type MarkerTable = HashMap<String, String>;

/// 占位符语法：{name}、<tag>...</tag>、<tag/>
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{[^}]+\}|<[^>]+>[^<]*</[^>]+>|<[^>]+/>")
            .expect("placeholder pattern is valid")
    })
}

/// 文本保护器
///
/// 翻译引擎不理解占位符和品牌术语，protect 先用合成标记替换它们，
/// restore 在翻译结果中把标记换回原文。标记刻意选用短的无自然语义
/// 字母数字组合（PH0X / WL0X），降低被引擎改写或翻译的概率
pub struct TextProtector;

impl TextProtector {
    /// 保护文本：先替换占位符（PH 标记），再按长度降序替换白名单术语（WL 标记）
    ///
    /// 白名单匹配大小写不敏感且带词边界；长术语优先，避免短术语
    /// 命中长术语的内部片段
    pub fn protect(text: &str, whitelist: &[String]) -> (String, MarkerTable) {
        let mut markers = MarkerTable::new();

        let mut protected = placeholder_regex()
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let marker = format!("PH{}X", markers.len());
                markers.insert(marker.clone(), caps[0].to_string());
                marker
            })
            .into_owned();

        let mut terms: Vec<&String> = whitelist.iter().filter(|w| !w.is_empty()).collect();
        terms.sort_by_key(|w| std::cmp::Reverse(w.len()));

        for term in terms {
            let Ok(pattern) = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))) else {
                continue;
            };
            protected = pattern
                .replace_all(&protected, |caps: &regex::Captures<'_>| {
                    let marker = format!("WL{}X", markers.len());
                    markers.insert(marker.clone(), caps[0].to_string());
                    marker
                })
                .into_owned();
        }

        (protected, markers)
    }

    /// 还原标记为原始文本
    ///
    /// 尽力而为的文本修复：标记匹配大小写不敏感（引擎常改写大小写），
    /// 替换为精确原文；长标记优先还原，避免短标记 id 是长标记的子串。
    /// 无法定位的标记保留为字面文本，此函数从不失败
    pub fn restore(text: &str, markers: &MarkerTable) -> String {
        if text.is_empty() || markers.is_empty() {
            return text.to_string();
        }

        let mut entries: Vec<(&String, &String)> = markers.iter().collect();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

        let mut restored = text.to_string();
        for (marker, original) in entries {
            let Ok(pattern) = Regex::new(&format!("(?i){}", regex::escape(marker))) else {
                continue;
            };
            restored = pattern
                .replace_all(&restored, NoExpand(original))
                .into_owned();
        }

        restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whitelist(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn protects_placeholders_with_markers() {
        let text = "Hello {name}, welcome to <tag>our site</tag>.";
        let (protected, markers) = TextProtector::protect(text, &[]);

        assert!(protected.contains("PH0X"));
        assert!(protected.contains("PH1X"));
        assert!(!protected.contains("{name}"));
        assert!(!protected.contains("<tag>our site</tag>"));

        let values: Vec<&String> = markers.values().collect();
        assert!(values.iter().any(|v| v.as_str() == "{name}"));
        assert!(values.iter().any(|v| v.as_str() == "<tag>our site</tag>"));
    }

    #[test]
    fn protects_self_closing_tags() {
        let (protected, markers) = TextProtector::protect("Line one<br/>line two", &[]);
        assert!(!protected.contains("<br/>"));
        assert!(markers.values().any(|v| v == "<br/>"));
    }

    #[test]
    fn protects_whitelist_terms() {
        let text = "I love using Lascade and Arch Linux.";
        let (protected, markers) =
            TextProtector::protect(text, &whitelist(&["Lascade", "Arch Linux"]));

        assert!(!protected.contains("Lascade"));
        assert!(!protected.contains("Arch Linux"));
        assert!(markers.values().any(|v| v == "Lascade"));
        assert!(markers.values().any(|v| v == "Arch Linux"));
    }

    #[test]
    fn whitelist_matching_is_case_insensitive_but_preserves_original() {
        let (protected, markers) = TextProtector::protect("try LASCADE now", &whitelist(&["Lascade"]));
        assert!(!protected.to_lowercase().contains("lascade"));
        // 保留文本中实际出现的大小写
        assert!(markers.values().any(|v| v == "LASCADE"));
    }

    #[test]
    fn restore_roundtrips_exactly() {
        let original = "Hello {name}, welcome to Lascade.";
        let (protected, markers) = TextProtector::protect(original, &whitelist(&["Lascade"]));

        let restored = TextProtector::restore(&protected, &markers);
        assert_eq!(restored, original);
    }

    #[test]
    fn restore_tolerates_marker_case_drift() {
        let original = "Hello {name}, welcome to Lascade.";
        let (protected, markers) = TextProtector::protect(original, &whitelist(&["Lascade"]));

        // 模拟翻译引擎改写标记大小写
        let mangled = protected.replace("WL", "wl").replace("PH", "pH");
        let restored = TextProtector::restore(&mangled, &markers);
        assert_eq!(restored, original);
    }

    #[test]
    fn restore_tolerates_extra_whitespace_around_markers() {
        let mut markers = MarkerTable::new();
        markers.insert("PH0X".to_string(), "{name}".to_string());

        let restored = TextProtector::restore(" PH0X  is a marker.", &markers);
        assert_eq!(restored, " {name}  is a marker.");
    }

    #[test]
    fn longest_whitelist_term_wins() {
        let text = "Visit Virgin Atlantic for Virgin Points.";
        let terms = whitelist(&["Virgin Atlantic", "Virgin Points", "Virgin"]);
        let (protected, markers) = TextProtector::protect(text, &terms);

        let restored = TextProtector::restore(&protected, &markers);
        assert_eq!(restored, text);
    }

    #[test]
    fn unresolved_markers_stay_literal() {
        let markers = MarkerTable::new();
        assert_eq!(TextProtector::restore("PH9X left over", &markers), "PH9X left over");
    }
}
