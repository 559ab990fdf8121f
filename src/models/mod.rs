// ============================================================================
// LangSync - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型模块入口和导出
// 边界:
//   - ✅ 数据模型子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//
// ============================================================================

pub mod catalog;
pub mod config;

// 重新导出常用类型
pub use catalog::{Catalog, LocaleReport, LocaleStatus, MissingItem};
pub use config::{Config, RuntimeArgs};
