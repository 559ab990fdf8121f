// ============================================================================
// LangSync - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量和默认数据定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 内置白名单术语定义
//   - ✅ UI 图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含计算逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "LANGSYNC";

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "langsync.toml";

/// 内置白名单：永远不应被翻译的术语（品牌名、机场代码等）
///
/// 用户配置的 whitelist 会与这份列表合并去重
pub const DEFAULT_WHITELIST: &[&str] = &[
    "MilesOrCash",
    "FlightPoints",
    "Lascade",
    "SwayWM",
    "Arch Linux",
    "Google",
    "Facebook",
    "Twitter",
    "Instagram",
    "Virgin Atlantic",
    "Virgin Points",
    "JFK",
    "LON",
    "NYC",
    "Heathrow",
    "Skyscanner",
    "Kayak",
    "Booking.com",
    "Agoda",
    "Kiwi",
    "Cheapflights",
    "Momondo",
    "Priceline",
    "AirAsia",
    "Air India",
    "Emirates",
    "IndiGo",
    "Qatar Airways",
    "Singapore Airlines",
    "SpiceJet",
    "PRO",
    "WP-Total",
    "WP-TotalPages",
];

/// 像素风格图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 错误图标
    pub const ERROR: &str = "✗";
    /// 警告图标
    pub const WARNING: &str = "!";
    /// 语言图标
    pub const LOCALE: &str = "●";
    /// 汇总图标
    pub const SUMMARY: &str = "◈";
    /// 时间图标
    pub const TIME: &str = "⧖";
    /// 箭头图标
    pub const ARROW: &str = "→";
    /// 跳过图标
    pub const SKIP: &str = "○";
    /// 待处理图标
    pub const PENDING: &str = "◇";
}
