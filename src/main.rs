// ============================================================================
// LangSync - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 程序启动和顶层错误处理
// 边界:
//   - ✅ 异步运行时启动
//   - ✅ 日志订阅初始化
//   - ✅ 顶层错误输出和退出码
//   - ❌ 不应包含命令实现逻辑
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use langsync::cli;
use langsync::utils::logger::Logger;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    if let Err(e) = cli::run_cli().await {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
