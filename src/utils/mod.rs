// ============================================================================
// LangSync - 工具模块
// ============================================================================
//
// 文件: src/utils/mod.rs
// 职责: 工具模块入口和导出
// 边界:
//   - ✅ 子模块导出
//   - ❌ 不应包含具体实现
//
// ============================================================================

pub mod colors;
pub mod constants;
pub mod logger;
