// ============================================================================
// LangSync - UI 模块
// ============================================================================
//
// 文件: src/ui/mod.rs
// 职责: 用户界面模块入口和导出
// 边界:
//   - ✅ UI 子模块导出
//   - ❌ 不应包含具体实现
//
// ============================================================================

pub mod progress;
pub mod summary;
